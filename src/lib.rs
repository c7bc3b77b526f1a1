//! # Cardboard Core
//!
//! State, drag-and-drop reducer and persistence for a three-column kanban
//! board ("To Do", "On Progress", "Done").
//!
//! The crate has no dependency on a particular UI. A front end owns a
//! [`BoardStore`], calls [`BoardStore::mount`] once, renders
//! [`BoardStore::board`] and forwards drag-end events to
//! [`BoardStore::on_drag_end`]. Snapshots go through any [`Storage`]
//! backend.

pub mod domain;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::Board,
    card::{Card, CardId},
    column::ColumnKey,
    drag::{on_drag_end, DraggableLocation, DropResult},
};
pub use error::{CardboardError, Result};
pub use storage::{MemoryStorage, Storage};
pub use store::{BoardStore, Snapshot, StoreConfig};
