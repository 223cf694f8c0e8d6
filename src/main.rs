//! expense-splitter CLI
//!
//! Track shared expenses between two people from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Show every expense with per-payee totals
//! expense-splitter list
//!
//! # Record an expense (date defaults to today)
//! expense-splitter add --payee Rahul --product Groceries --price 250
//!
//! # Who owes whom, as JSON
//! expense-splitter settle --format json
//!
//! # Seed a store with random expenses
//! expense-splitter generate --count 30 --output db.json
//! ```

use expense_splitter::config::TrackerConfig;
use expense_splitter::core::expense::ExpenseRecord;
use expense_splitter::service::json_file::JsonFileItemService;
use expense_splitter::simulation::sample::{generate_sample_expenses, SampleConfig};
use expense_splitter::tracker::form::ExpenseForm;
use expense_splitter::tracker::ExpenseTracker;
use log::debug;
use std::fs;
use std::path::Path;
use std::process;

fn print_usage() {
    eprintln!(
        r#"expense-splitter — shared expense tracker for two people

USAGE:
    expense-splitter <COMMAND> [OPTIONS]

COMMANDS:
    list        Show all expenses with per-payee totals
    add         Record a new expense
    settle      Show who has to pay whom
    generate    Generate random expenses (for testing)
    help        Show this message

OPTIONS (list, add, settle):
    --store <FILE>      Item store path (default: db.json, env: EXPENSE_SPLITTER_STORE)
    --config <FILE>     JSON config file with "store" and "payees"

OPTIONS (add):
    --payee <NAME>      Who paid
    --product <TEXT>    For what
    --price <AMOUNT>    How much
    --date <DATE>       YYYY-MM-DD (default: today)

OPTIONS (settle):
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --count <N>         Number of expenses (default: 20)
    --output <FILE>     Write a store file instead of printing to stdout

EXAMPLES:
    expense-splitter list
    expense-splitter add --payee Ramesh --product "Milk" --price 48.50
    expense-splitter settle --format json
    expense-splitter generate --count 50 --output db.json"#
    );
}

#[derive(Default)]
struct Options {
    store: Option<String>,
    config: Option<String>,
    format: Option<String>,
    payee: Option<String>,
    product: Option<String>,
    price: Option<String>,
    date: Option<String>,
    count: Option<String>,
    output: Option<String>,
}

fn parse_options(args: &[String], allowed: &[&str]) -> Options {
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if !allowed.contains(&flag) {
            eprintln!("Unknown option: {}", flag);
            process::exit(1);
        }
        i += 1;
        let value = args.get(i).cloned().unwrap_or_else(|| {
            eprintln!("{} requires a value", flag);
            process::exit(1);
        });
        let slot = match flag {
            "--store" => &mut options.store,
            "--config" => &mut options.config,
            "--format" => &mut options.format,
            "--payee" => &mut options.payee,
            "--product" => &mut options.product,
            "--price" => &mut options.price,
            "--date" => &mut options.date,
            "--count" => &mut options.count,
            _ => &mut options.output,
        };
        *slot = Some(value);
        i += 1;
    }
    options
}

fn load_config(options: &Options) -> TrackerConfig {
    let config = match &options.config {
        Some(path) => TrackerConfig::from_file(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        }),
        None => TrackerConfig::default(),
    };
    let config = config.with_env().with_store_override(options.store.clone());
    debug!("using store {}", config.store.display());
    config
}

fn open_tracker(options: &Options) -> (ExpenseTracker, JsonFileItemService) {
    let config = load_config(options);
    let roster = config.roster().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let service = JsonFileItemService::new(&config.store);
    let mut tracker = ExpenseTracker::new(roster);
    tracker.load(&service);
    (tracker, service)
}

fn exit_on_load_error(tracker: &ExpenseTracker) {
    if let Some(message) = tracker.error() {
        eprintln!("Error: {}", message);
        process::exit(1);
    }
}

/// The expense table, or the load error alone when the fetch failed.
fn render_list(tracker: &ExpenseTracker) -> Result<String, String> {
    match tracker.error() {
        Some(message) => Err(message.to_string()),
        None => Ok(tracker.to_string()),
    }
}

fn cmd_list(args: &[String]) {
    let options = parse_options(args, &["--store", "--config"]);
    let (tracker, _) = open_tracker(&options);
    match render_list(&tracker) {
        Ok(table) => print!("{}", table),
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    }
}

fn cmd_add(args: &[String]) {
    let options = parse_options(
        args,
        &["--store", "--config", "--payee", "--product", "--price", "--date"],
    );
    let (mut tracker, mut service) = open_tracker(&options);
    exit_on_load_error(&tracker);

    let form = ExpenseForm {
        payee: options.payee.clone().unwrap_or_default(),
        product: options.product.clone().unwrap_or_default(),
        price: options.price.clone().unwrap_or_default(),
        date: options.date.clone().unwrap_or_default(),
    };
    let today = chrono::Local::now().date_naive();
    let expense = form.submit(tracker.roster(), today).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let record = tracker
        .add_expense(&mut service, expense)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        });
    eprintln!(
        "Added {} paid {} for '{}' on {}",
        record.payee_name(),
        record.price(),
        record.product(),
        record.set_date()
    );
    print!("{}", tracker);
}

#[derive(serde::Serialize)]
struct TotalOutput {
    payee: String,
    paid: String,
}

#[derive(serde::Serialize)]
struct SettlementOutput {
    totals: Vec<TotalOutput>,
    payer: String,
    receiver: String,
    payable: String,
    message: String,
}

fn cmd_settle(args: &[String]) {
    let options = parse_options(args, &["--store", "--config", "--format"]);
    let (tracker, _) = open_tracker(&options);
    exit_on_load_error(&tracker);

    let settlement = tracker.settlement();
    match options.format.as_deref().unwrap_or("text") {
        "json" => {
            let output = SettlementOutput {
                totals: tracker
                    .roster()
                    .payees()
                    .into_iter()
                    .map(|p| TotalOutput {
                        payee: p.to_string(),
                        paid: tracker.total_by_payee(p).to_string(),
                    })
                    .collect(),
                payer: settlement.payer.to_string(),
                receiver: settlement.receiver.to_string(),
                payable: settlement.payable.to_string(),
                message: settlement.message(),
            };
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing settlement: {}", e);
                    process::exit(1);
                }
            }
        }
        "text" => {
            print!("{}", tracker.totals());
            print!("{}", settlement);
        }
        other => {
            eprintln!("--format must be 'text' or 'json', got '{}'", other);
            process::exit(1);
        }
    }
}

fn cmd_generate(args: &[String]) {
    let options = parse_options(args, &["--count", "--output", "--config"]);
    let count = match &options.count {
        Some(n) => n.parse().unwrap_or_else(|_| {
            eprintln!("--count requires a number");
            process::exit(1);
        }),
        None => 20,
    };
    let roster = load_config(&options).roster().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let config = SampleConfig {
        roster,
        count,
        ..Default::default()
    };
    let list = generate_sample_expenses(&config);

    #[derive(serde::Serialize)]
    struct OutputFile<'a> {
        items: &'a [ExpenseRecord],
    }

    let json = serde_json::to_string_pretty(&OutputFile {
        items: list.records(),
    })
    .unwrap_or_else(|e| {
        eprintln!("Error serializing expenses: {}", e);
        process::exit(1);
    });

    if let Some(path) = options.output {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Generated {} expenses → {}", list.len(), path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "list" => cmd_list(rest),
        "add" => cmd_add(rest),
        "settle" => cmd_settle(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
