use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::fs;

use crate::models::Player;

/// Faults from the collection file. Missing file, unreadable file and
/// malformed JSON all surface here; there is no retry or recovery path.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access player data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("player data file is not a valid JSON array: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Handle to the flat-file player collection, shared as router state.
///
/// Holds only the file path; every request re-reads the whole file and
/// mutating requests rewrite it wholesale. There is no lock around the
/// read-modify-write cycle, so concurrent mutations are last-write-wins.
#[derive(Debug, Clone)]
pub struct PlayerStore {
    path: Arc<PathBuf>,
}

impl PlayerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Arc::new(path.into()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read and parse the full collection.
pub async fn load_players(store: &PlayerStore) -> Result<Vec<Player>, StoreError> {
    let data = fs::read(store.path()).await?;
    Ok(serde_json::from_slice(&data)?)
}

/// Serialize the full collection and overwrite the file. Insertion order
/// is preserved; nothing is appended or journaled.
pub async fn save_players(store: &PlayerStore, players: &[Player]) -> Result<(), StoreError> {
    let data = serde_json::to_vec(players)?;
    fs::write(store.path(), data).await?;
    Ok(())
}
