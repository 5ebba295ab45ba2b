//! In-process cursor store.

use hashbrown::HashMap;

use crate::types::ContactIndex;

use super::{check_forward, CursorStore, FileIdentity, PersistResult};

/// Keeps cursors in a map; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryCursorStore {
    cursors: HashMap<FileIdentity, ContactIndex>,
}

impl MemoryCursorStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CursorStore for MemoryCursorStore {
    fn load(&self, identity: &FileIdentity) -> PersistResult<ContactIndex> {
        Ok(self.cursors.get(identity).copied().unwrap_or(0))
    }

    fn save(&mut self, identity: &FileIdentity, next_index: ContactIndex) -> PersistResult<()> {
        check_forward(identity, self.load(identity)?, next_index)?;
        self.cursors.insert(identity.clone(), next_index);
        Ok(())
    }
}
