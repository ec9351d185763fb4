use std::collections::HashMap;

use alloy_primitives::Address;
use parking_lot::RwLock;
use tracing::{info, trace};

use crate::audit::{AuditSink, RegistryEvent};
use crate::error::RegistryError;

/// Allow-list of trusted accounts.
///
/// Entries are either absent or `true`; there is no removal. Every mutation
/// and every lookup is reported to the audit sink.
pub struct MembershipRegistry<S> {
    members: RwLock<HashMap<Address, bool>>,
    sink: S,
}

impl<S: AuditSink> MembershipRegistry<S> {
    pub fn new(sink: S) -> Self {
        Self {
            members: RwLock::new(HashMap::new()),
            sink,
        }
    }

    /// Build a registry and add each of `ids` through [`Self::add_member`].
    pub fn with_members<I>(sink: S, ids: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Address>,
    {
        let registry = Self::new(sink);
        for id in ids {
            registry.add_member(id)?;
        }
        Ok(registry)
    }

    /// Register `id`. Fails if it is already present.
    pub fn add_member(&self, id: Address) -> Result<(), RegistryError> {
        // Presence check and insert happen under one write guard.
        let mut members = self.members.write();
        if members.contains_key(&id) {
            return Err(RegistryError::AlreadyMember(id));
        }
        members.insert(id, true);
        self.sink.record(RegistryEvent::MemberAdded { id });
        drop(members);

        info!("added member {:#x}", id);
        Ok(())
    }

    /// Whether `id` is registered. Each call is recorded, but nothing is mutated.
    pub fn is_member(&self, id: Address) -> bool {
        let members = self.members.read();
        let result = members.get(&id).copied().unwrap_or(false);
        self.sink.record(RegistryEvent::IsMemberCheck { id, result });
        drop(members);

        trace!(result, "membership check for {:#x}", id);
        result
    }

    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
