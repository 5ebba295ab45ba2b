//! One-file-per-log cursor store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::ContactIndex;

use super::{check_forward, CursorStore, FileIdentity, PersistError, PersistResult};

const CURSOR_FORMAT_VERSION: u16 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CursorEnvelope {
    format_version: u16,
    next_index: ContactIndex,
}

/// Stores each cursor as `<base_dir>/<identity>_state.json`.
#[derive(Debug, Clone)]
pub struct FileCursorStore {
    base_dir: PathBuf,
}

impl FileCursorStore {
    /// Creates a store rooted at `base_dir`. The directory is created on first save.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Directory holding the cursor files.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the cursor file for `identity`.
    pub fn state_path(&self, identity: &FileIdentity) -> PathBuf {
        self.base_dir.join(format!("{identity}_state.json"))
    }
}

impl CursorStore for FileCursorStore {
    fn load(&self, identity: &FileIdentity) -> PersistResult<ContactIndex> {
        let path = self.state_path(identity);
        let payload = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(%identity, "no cursor file, starting at 0");
                return Ok(0);
            }
            Err(err) => return Err(err.into()),
        };

        let env: CursorEnvelope =
            serde_json::from_slice(&payload).map_err(|err| PersistError::Corrupt {
                identity: identity.to_string(),
                reason: err.to_string(),
            })?;
        if env.format_version != CURSOR_FORMAT_VERSION {
            return Err(PersistError::UnsupportedVersion(env.format_version));
        }
        tracing::debug!(%identity, next_index = env.next_index, "loaded cursor");
        Ok(env.next_index)
    }

    fn save(&mut self, identity: &FileIdentity, next_index: ContactIndex) -> PersistResult<()> {
        check_forward(identity, self.load(identity)?, next_index)?;
        fs::create_dir_all(&self.base_dir)?;

        let env = CursorEnvelope {
            format_version: CURSOR_FORMAT_VERSION,
            next_index,
        };
        let payload = serde_json::to_vec(&env)?;

        // Write beside the target and rename so readers never see a partial file.
        let path = self.state_path(identity);
        let tmp = path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&payload)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)?;
        tracing::debug!(%identity, next_index, "saved cursor");
        Ok(())
    }
}
