pub mod settlement;
pub mod totals;
