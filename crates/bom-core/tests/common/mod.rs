#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

use bom_lookup::{LookupClient, LookupError};
use bom_model::{CellValue, PartRecord, Row, Table};

#[derive(Debug, Clone)]
pub enum Canned {
    Found(PartRecord),
    NoMatch,
    Transport,
    Decode,
}

/// In-memory catalog that records every identifier it is asked for.
#[derive(Default)]
pub struct FakeCatalog {
    entries: BTreeMap<String, Canned>,
    delays: BTreeMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, identifier: &str, canned: Canned) -> Self {
        self.entries.insert(identifier.to_string(), canned);
        self
    }

    pub fn with_delay(mut self, identifier: &str, delay: Duration) -> Self {
        self.delays.insert(identifier.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl LookupClient for FakeCatalog {
    fn lookup_detailed(&self, identifier: &str) -> Result<PartRecord, LookupError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(identifier.to_string());
        if let Some(delay) = self.delays.get(identifier) {
            std::thread::sleep(*delay);
        }
        match self.entries.get(identifier) {
            Some(Canned::Found(record)) => Ok(record.clone()),
            Some(Canned::Transport) => Err(LookupError::Network("connection reset".to_string())),
            Some(Canned::Decode) => Err(LookupError::Decode("expected object".to_string())),
            Some(Canned::NoMatch) | None => Err(LookupError::NoMatch),
        }
    }
}

pub fn manufacturer(name: &str) -> Canned {
    Canned::Found(PartRecord {
        manufacturer: Some(name.to_string()),
        ..PartRecord::default()
    })
}

pub fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(headers.iter().map(|h| (*h).to_string()).collect());
    for row in rows {
        table.push_row(row.iter().copied().collect::<Row>());
    }
    table
}

pub fn texts(row: &Row) -> Vec<&str> {
    row.cells.iter().map(CellValue::as_str).collect()
}
