use crate::{
    domain::{
        board::Board,
        card::{Card, CardId},
        column::ColumnKey,
        drag::{self, DropResult},
    },
    error::{CardboardError, Result},
    storage::{is_valid_key, Storage},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage slot holding the board snapshot
    pub storage_key: String,
    /// Pretty-print persisted snapshots
    pub pretty: bool,
    /// Discard snapshots in which a card id appears more than once
    pub validate_snapshot: bool,
}

impl StoreConfig {
    pub const DEFAULT_STORAGE_KEY: &'static str = "cards";

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Checks the configuration before a store is built from it
    pub fn validate(&self) -> Result<()> {
        if !is_valid_key(&self.storage_key) {
            return Err(CardboardError::ConfigError(format!(
                "storage_key {:?} must be non-empty and use only ASCII letters, digits, '-' or '_'",
                self.storage_key
            )));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            pretty: false,
            validate_snapshot: true,
        }
    }
}

/// What `BoardStore::mount` found in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snapshot {
    /// A persisted board replaced the default
    Restored,
    /// The slot was empty; the default board is kept
    Missing,
    /// The slot could not be read or parsed; the default board is kept
    Discarded,
}

/// Owns the board and mirrors every change into storage.
///
/// Writes are suppressed until [`BoardStore::mount`] has attempted to read
/// the persisted snapshot, so the default board never overwrites saved data
/// that has not been loaded yet.
pub struct BoardStore<S> {
    storage: S,
    config: StoreConfig,
    board: Board,
    ready: bool,
}

impl<S: Storage> BoardStore<S> {
    /// Creates a store over `storage` holding the seed board
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            config: StoreConfig::default(),
            board: Board::seed(),
            ready: false,
        }
    }

    pub fn with_config(storage: S, config: StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            storage,
            config,
            board: Board::seed(),
            ready: false,
        })
    }

    /// Replaces the board used when nothing is persisted
    pub fn with_default_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Whether the persisted snapshot has been read and writes are enabled
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Loads the persisted snapshot, marks the store ready and writes the
    /// resulting board back.
    ///
    /// Read and parse failures fall back to the current board and are only
    /// logged. The returned error can only come from the write.
    pub async fn mount(&mut self) -> Result<Snapshot> {
        let snapshot = match self.load_snapshot().await {
            Ok(Some(board)) => {
                debug!(
                    key = %self.config.storage_key,
                    cards = board.total_cards(),
                    "restored persisted board"
                );
                self.board = board;
                Snapshot::Restored
            }
            Ok(None) => {
                debug!(key = %self.config.storage_key, "no persisted board, using default");
                Snapshot::Missing
            }
            Err(err) => {
                warn!(
                    key = %self.config.storage_key,
                    error = %err,
                    "discarding persisted board"
                );
                Snapshot::Discarded
            }
        };

        self.ready = true;
        self.persist().await?;
        Ok(snapshot)
    }

    async fn load_snapshot(&self) -> Result<Option<Board>> {
        let Some(contents) = self.storage.get_item(&self.config.storage_key).await? else {
            return Ok(None);
        };
        if contents.is_empty() {
            return Ok(None);
        }

        let board: Board = serde_json::from_str(&contents)?;
        if self.config.validate_snapshot {
            board.validate()?;
        }
        Ok(Some(board))
    }

    /// Replaces the board and persists it.
    ///
    /// A board that breaks the unique-id invariant is rejected and the
    /// current board is kept.
    pub async fn set(&mut self, board: Board) -> Result<()> {
        board.validate()?;
        self.board = board;
        self.persist().await
    }

    /// Applies a finished drag. A cancelled drag changes nothing and writes
    /// nothing.
    pub async fn on_drag_end(&mut self, result: &DropResult) -> Result<()> {
        if result.destination.is_none() {
            trace!(source = ?result.source, "drag cancelled");
            return Ok(());
        }

        let next = drag::on_drag_end(&self.board, result)?;
        debug!(
            from = result.source.column.as_str(),
            from_index = result.source.index,
            to = ?result.destination.map(|d| d.column.as_str()),
            "moved card"
        );
        self.board = next;
        self.persist().await
    }

    /// Moves a card, located by id, to `index` of `to`
    pub async fn move_card(&mut self, id: &CardId, to: ColumnKey, index: usize) -> Result<()> {
        let (from, from_index) = self
            .board
            .find_card(id)
            .ok_or_else(|| CardboardError::CardNotFound(id.to_string()))?;

        let result = DropResult::new(
            drag::DraggableLocation::new(from, from_index),
            drag::DraggableLocation::new(to, index),
        )
        .with_draggable_id(id.clone());
        self.on_drag_end(&result).await
    }

    /// Appends a new card with a generated id to `column`
    pub async fn add_card(
        &mut self,
        column: ColumnKey,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<CardId> {
        let card = Card::with_generated_id(title, description);
        let id = card.id.clone();
        self.board.add_card(column, card)?;
        debug!(card = %id, column = column.as_str(), "added card");
        self.persist().await?;
        Ok(id)
    }

    /// Removes a card by id
    pub async fn remove_card(&mut self, id: &CardId) -> Result<Card> {
        let card = self.board.remove_card(id)?;
        debug!(card = %id, "removed card");
        self.persist().await?;
        Ok(card)
    }

    /// Restores the seed board
    pub async fn reset(&mut self) -> Result<()> {
        self.board = Board::seed();
        self.persist().await
    }

    async fn persist(&self) -> Result<()> {
        if !self.ready {
            trace!(key = %self.config.storage_key, "store not ready, write suppressed");
            return Ok(());
        }

        let json = if self.config.pretty {
            serde_json::to_string_pretty(&self.board)?
        } else {
            serde_json::to_string(&self.board)?
        };
        self.storage
            .set_item(&self.config.storage_key, &json)
            .await?;
        trace!(key = %self.config.storage_key, bytes = json.len(), "persisted board");
        Ok(())
    }
}
