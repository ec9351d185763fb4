//! Append-only audit records for membership operations.

use std::sync::Arc;

use alloy_primitives::Address;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// A notification emitted by the membership registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum RegistryEvent {
    MemberAdded { id: Address },
    IsMemberCheck { id: Address, result: bool },
}

impl RegistryEvent {
    /// The indexed account of the event.
    pub fn id(&self) -> Address {
        match self {
            RegistryEvent::MemberAdded { id } | RegistryEvent::IsMemberCheck { id, .. } => *id,
        }
    }
}

/// Receiver for registry notifications. Implementations must only append.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: RegistryEvent);
}

impl<T: AuditSink + ?Sized> AuditSink for Arc<T> {
    fn record(&self, event: RegistryEvent) {
        (**self).record(event)
    }
}

/// A stored notification with its position in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub seq: u64,
    #[serde(flatten)]
    pub event: RegistryEvent,
}

/// In-memory audit log.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Snapshot of every record in emission order.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().clone()
    }

    /// Records whose indexed account is `id`.
    pub fn records_for(&self, id: Address) -> Vec<AuditRecord> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.event.id() == id)
            .cloned()
            .collect()
    }

    /// Render the log as JSON lines, one record per line.
    pub fn to_json_lines(&self) -> serde_json::Result<String> {
        let records = self.records.lock();
        let mut out = String::new();
        for record in records.iter() {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl AuditSink for MemoryAuditLog {
    fn record(&self, event: RegistryEvent) {
        let mut records = self.records.lock();
        let seq = records.len() as u64;
        records.push(AuditRecord { seq, event });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_sequenced_in_order() {
        let log = MemoryAuditLog::new();
        let a = Address::repeat_byte(0xa);
        let b = Address::repeat_byte(0xb);

        log.record(RegistryEvent::MemberAdded { id: a });
        log.record(RegistryEvent::IsMemberCheck { id: b, result: false });
        log.record(RegistryEvent::IsMemberCheck { id: a, result: true });

        let seqs: Vec<u64> = log.records().iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn records_for_filters_by_account() {
        let log = MemoryAuditLog::new();
        let a = Address::repeat_byte(0xa);
        let b = Address::repeat_byte(0xb);

        log.record(RegistryEvent::MemberAdded { id: a });
        log.record(RegistryEvent::IsMemberCheck { id: b, result: false });
        log.record(RegistryEvent::IsMemberCheck { id: a, result: true });

        let for_a = log.records_for(a);
        assert_eq!(for_a.len(), 2);
        assert_eq!(for_a[1].event, RegistryEvent::IsMemberCheck { id: a, result: true });
        assert_eq!(log.records_for(b).len(), 1);
        assert!(log.records_for(Address::ZERO).is_empty());
    }

    #[test]
    fn json_lines_tag_the_event_kind() {
        let log = MemoryAuditLog::new();
        log.record(RegistryEvent::IsMemberCheck { id: Address::ZERO, result: false });

        let out = log.to_json_lines().unwrap();
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["event"], "IsMemberCheck");
        assert_eq!(value["seq"], 0);
        assert_eq!(value["result"], false);

        let record: AuditRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.event.id(), Address::ZERO);
    }
}
