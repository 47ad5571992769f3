use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use dispatch_types::SavedRelation;

use crate::error::SavedResult;
use crate::kind::SavedKind;

/// Persistent user↔entity "saved" relations for one entity kind.
///
/// Columns: `ID,UserID,<Entity>ID,Saved`, where `ID` is the composite
/// `{user_id}-{entity_id}`. Rows are upserted and never removed: unsaving
/// overwrites the flag with `false`. A toggle loads the whole file into a
/// map keyed by the composite id, applies the change, and rewrites the
/// file from the map. No locking; racing toggles follow the store-wide
/// last-writer-wins contract.
#[derive(Debug)]
pub struct SavedLedger {
    kind: SavedKind,
    path: PathBuf,
}

impl SavedLedger {
    /// A ledger of the given kind stored at `path`.
    pub fn new(kind: SavedKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// A ledger at the kind's conventional file name under `data_root`.
    pub fn open(kind: SavedKind, data_root: &Path) -> Self {
        Self::new(kind, data_root.join(kind.file_name()))
    }

    /// The entity kind this ledger tracks.
    pub fn kind(&self) -> SavedKind {
        self.kind
    }

    /// Set the saved flag for a (user, entity) pair, inserting the row on
    /// first toggle. Returns the composite id.
    pub fn toggle(&self, entity_id: &str, user_id: &str, saved: bool) -> SavedResult<String> {
        // A missing file is the empty ledger: first toggle creates it.
        let mut rows = match self.read_all() {
            Ok(rows) => rows,
            Err(e) => {
                if self.path.exists() {
                    return Err(e);
                }
                BTreeMap::new()
            }
        };

        let key = SavedRelation::composite_key(user_id, entity_id);
        rows.insert(key.clone(), SavedRelation::new(user_id, entity_id, saved));
        self.write_all(&rows)?;

        debug!(kind = %self.kind, id = %key, saved, "saved relation toggled");
        Ok(key)
    }

    /// Whether the entity is currently saved by the user.
    ///
    /// Absent rows and read failures both answer `false`; a page can
    /// always render an unsaved state.
    pub fn is_saved(&self, entity_id: &str, user_id: &str) -> bool {
        let rows = match self.read_all() {
            Ok(rows) => rows,
            Err(e) => {
                if self.path.exists() {
                    warn!(kind = %self.kind, error = %e, "failed to read saved ledger");
                }
                return false;
            }
        };
        let key = SavedRelation::composite_key(user_id, entity_id);
        rows.get(&key).map(|r| r.saved).unwrap_or(false)
    }

    /// Entity ids the user currently has saved, in file order.
    pub fn saved_for_user(&self, user_id: &str) -> Vec<String> {
        let rows = match self.read_all() {
            Ok(rows) => rows,
            Err(_) => return Vec::new(),
        };
        rows.values()
            .filter(|r| r.user_id == user_id && r.saved)
            .map(|r| r.entity_id.clone())
            .collect()
    }

    fn read_all(&self) -> SavedResult<BTreeMap<String, SavedRelation>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let mut rows = BTreeMap::new();
        for record in reader.records() {
            let record = record?;
            let (Some(id), Some(user_id), Some(entity_id), Some(saved)) =
                (record.get(0), record.get(1), record.get(2), record.get(3))
            else {
                warn!(kind = %self.kind, "short saved-ledger row skipped");
                continue;
            };
            rows.insert(
                id.to_string(),
                SavedRelation {
                    id: id.to_string(),
                    user_id: user_id.to_string(),
                    entity_id: entity_id.to_string(),
                    saved: saved.eq_ignore_ascii_case("true"),
                },
            );
        }
        Ok(rows)
    }

    fn write_all(&self, rows: &BTreeMap<String, SavedRelation>) -> SavedResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(["ID", "UserID", self.kind.entity_column(), "Saved"])?;
        for row in rows.values() {
            writer.write_record([
                row.id.as_str(),
                row.user_id.as_str(),
                row.entity_id.as_str(),
                if row.saved { "true" } else { "false" },
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
