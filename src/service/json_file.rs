use crate::core::expense::{ExpenseId, ExpenseRecord, NewExpense};
use crate::service::{ItemService, ServiceError};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk layout, json-server style: `{ "items": [ ... ] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Database {
    #[serde(default)]
    items: Vec<ExpenseRecord>,
}

/// Item service backed by a JSON file.
///
/// A missing file reads as an empty store; it is created on the first add.
#[derive(Debug, Clone)]
pub struct JsonFileItemService {
    path: PathBuf,
}

impl JsonFileItemService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Database, ServiceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("item store {} not found, starting empty", self.path.display());
                return Ok(Database::default());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Sibling file the store is staged in before being renamed into place.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    // Stage then rename: the store on disk is always a complete document.
    fn write(&self, db: &Database) -> Result<(), ServiceError> {
        let json = serde_json::to_string_pretty(db)?;
        let staging = self.staging_path();
        fs::write(&staging, json)?;
        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }
        Ok(())
    }
}

impl ItemService for JsonFileItemService {
    fn get_items(&self) -> Result<Vec<ExpenseRecord>, ServiceError> {
        let db = self.read()?;
        debug!("loaded {} items from {}", db.items.len(), self.path.display());
        Ok(db.items)
    }

    fn add_item(&mut self, expense: NewExpense) -> Result<ExpenseRecord, ServiceError> {
        let mut db = self.read()?;
        let record = expense.into_record(ExpenseId::new());
        db.items.push(record.clone());
        self.write(&db)?;
        info!(
            "stored expense {} ({} paid {}) in {}",
            record.id(),
            record.payee_name(),
            record.price(),
            self.path.display()
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::payee::PayeeName;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("expense-splitter-{}-{}.json", tag, uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let service = JsonFileItemService::new(temp_path("missing"));
        assert!(service.get_items().unwrap().is_empty());
    }

    #[test]
    fn test_add_then_read_back() {
        let path = temp_path("add");
        let mut service = JsonFileItemService::new(&path);
        let expense = NewExpense::new(
            PayeeName::new("Ramesh"),
            "Rice",
            dec!(42.75),
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        )
        .unwrap();

        let stored = service.add_item(expense).unwrap();
        let reopened = JsonFileItemService::new(&path);
        assert_eq!(reopened.get_items().unwrap(), vec![stored]);
        assert!(!service.staging_path().exists());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_reads_json_server_numbers() {
        let path = temp_path("numbers");
        fs::write(
            &path,
            r#"{ "items": [
                { "id": "6f1c8a52-0a39-4a43-9f0e-6f4b2f3c1d11", "payeeName": "Rahul",
                  "product": "Fruits", "price": 150, "setDate": "2024-01-03" }
            ] }"#,
        )
        .unwrap();

        let items = JsonFileItemService::new(&path).get_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price(), dec!(150));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_reads_json_server_ids() {
        let path = temp_path("ids");
        fs::write(
            &path,
            r#"{ "items": [
                { "id": 1, "payeeName": "Rahul", "product": "Fruits",
                  "price": 150, "setDate": "2024-01-03" },
                { "id": "f3a9", "payeeName": "Ramesh", "product": "Milk",
                  "price": 40, "setDate": "2024-01-04" }
            ] }"#,
        )
        .unwrap();

        let mut service = JsonFileItemService::new(&path);
        let items = service.get_items().unwrap();
        assert_eq!(items[0].id(), &ExpenseId::Number(1));
        assert_eq!(items[1].id(), &ExpenseId::from("f3a9"));

        // Appending keeps the existing ids untouched.
        let expense = NewExpense::new(
            PayeeName::new("Rahul"),
            "Bread",
            dec!(30),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
        .unwrap();
        service.add_item(expense).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["items"][0]["id"], 1);
        assert_eq!(raw["items"][1]["id"], "f3a9");
        assert_eq!(raw["items"].as_array().unwrap().len(), 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_overflowing_price_is_parse_error() {
        let path = temp_path("huge");
        fs::write(
            &path,
            r#"{ "items": [
                { "id": 1, "payeeName": "Rahul", "product": "Yacht",
                  "price": "79228162514264337593543950335", "setDate": "2024-01-03" },
                { "id": 2, "payeeName": "Rahul", "product": "Tea",
                  "price": "1", "setDate": "2024-01-03" }
            ] }"#,
        )
        .unwrap();

        let err = JsonFileItemService::new(&path).get_items().unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = temp_path("bad");
        fs::write(&path, "not json").unwrap();

        let err = JsonFileItemService::new(&path).get_items().unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)));

        fs::remove_file(&path).unwrap();
    }
}
