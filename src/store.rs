// src/store.rs
//
// Repository seam between the pages and the storage technology. Pages
// call these methods on whatever store they are handed; the SQLite
// Database is the production implementation, and MemoryStore lets the
// reporting pipeline be exercised without a database at all.

use crate::db::connection::Database;
use crate::db::records;
use crate::domain::record::{sort_newest_first, TestRecord};
use crate::errors::ServerError;

pub trait RecordStore {
    /// The full collection, dates normalized, most recent first.
    fn list_tests(&self) -> Result<Vec<TestRecord>, ServerError>;

    /// All tests for one registration number, most recent first.
    fn tests_for_vehicle(&self, vehicle_number: &str) -> Result<Vec<TestRecord>, ServerError>;

    fn find_test(&self, id: &str) -> Result<Option<TestRecord>, ServerError>;
}

impl RecordStore for Database {
    fn list_tests(&self) -> Result<Vec<TestRecord>, ServerError> {
        let docs = self.with_conn(|conn| records::list_records(conn))?;
        let mut out: Vec<TestRecord> = docs.into_iter().map(TestRecord::from_document).collect();
        sort_newest_first(&mut out);
        Ok(out)
    }

    fn tests_for_vehicle(&self, vehicle_number: &str) -> Result<Vec<TestRecord>, ServerError> {
        let docs = self.with_conn(|conn| records::records_for_vehicle(conn, vehicle_number))?;
        let mut out: Vec<TestRecord> = docs.into_iter().map(TestRecord::from_document).collect();
        sort_newest_first(&mut out);
        Ok(out)
    }

    fn find_test(&self, id: &str) -> Result<Option<TestRecord>, ServerError> {
        let doc = self.with_conn(|conn| records::find_record(conn, id))?;
        Ok(doc.map(TestRecord::from_document))
    }
}

/// In-memory store for tests and local experiments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub records: Vec<TestRecord>,
}

impl RecordStore for MemoryStore {
    fn list_tests(&self) -> Result<Vec<TestRecord>, ServerError> {
        let mut out = self.records.clone();
        sort_newest_first(&mut out);
        Ok(out)
    }

    fn tests_for_vehicle(&self, vehicle_number: &str) -> Result<Vec<TestRecord>, ServerError> {
        let mut out: Vec<TestRecord> = self
            .records
            .iter()
            .filter(|r| r.field_str("vehicleNumber") == Some(vehicle_number))
            .cloned()
            .collect();
        sort_newest_first(&mut out);
        Ok(out)
    }

    fn find_test(&self, id: &str) -> Result<Option<TestRecord>, ServerError> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }
}
