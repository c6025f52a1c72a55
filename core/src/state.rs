// Shared process list
//
// Single writer (the process loader), any number of readers (table, search).
// The list is swapped wholesale; nobody edits it in place.

use crate::api::ProcessRecord;
use std::sync::Arc;
use tokio::sync::watch;

type Snapshot = Arc<Vec<ProcessRecord>>;

/// Create an empty store, returning its only writer and a first reader
pub fn process_store() -> (ProcessWriter, ProcessReader) {
    let (tx, rx) = watch::channel(Snapshot::default());
    (ProcessWriter { tx }, ProcessReader { rx })
}

/// Write access to the process list. Deliberately not `Clone`.
#[derive(Debug)]
pub struct ProcessWriter {
    tx: watch::Sender<Snapshot>,
}

impl ProcessWriter {
    /// Replace the whole list, returning the new snapshot
    pub fn replace(&self, records: Vec<ProcessRecord>) -> Snapshot {
        let snapshot = Arc::new(records);
        self.tx.send_replace(Arc::clone(&snapshot));
        snapshot
    }

    pub fn reader(&self) -> ProcessReader {
        ProcessReader {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read access to the process list
#[derive(Clone, Debug)]
pub struct ProcessReader {
    rx: watch::Receiver<Snapshot>,
}

impl ProcessReader {
    /// Current list, in server order
    pub fn snapshot(&self) -> Snapshot {
        self.rx.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.rx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(processo: &str) -> ProcessRecord {
        ProcessRecord {
            processo: processo.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_empty() {
        let (_writer, reader) = process_store();
        assert!(reader.is_empty());
    }

    #[test]
    fn replace_swaps_whole_list() {
        let (writer, reader) = process_store();
        writer.replace(vec![record("A1"), record("B2")]);
        writer.replace(vec![record("C3")]);

        let snapshot = reader.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].processo, "C3");
    }

    #[test]
    fn old_snapshot_survives_replacement() {
        let (writer, reader) = process_store();
        writer.replace(vec![record("A1")]);
        let before = reader.snapshot();
        writer.replace(vec![]);

        assert_eq!(before.len(), 1);
        assert!(reader.is_empty());
    }

    #[test]
    fn duplicates_pass_through() {
        let (writer, reader) = process_store();
        writer.replace(vec![record("A1"), record("A1")]);
        assert_eq!(reader.len(), 2);
    }
}
