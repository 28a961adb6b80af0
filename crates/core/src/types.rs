/// All primary keys are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT` rowids.
pub type DbId = i64;

/// Calendar date without a time component (`YYYY-MM-DD` on the wire).
pub type Date = chrono::NaiveDate;
