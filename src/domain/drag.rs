use crate::{
    domain::{board::Board, card::CardId, column::ColumnKey},
    error::{CardboardError, Result},
};
use serde::{Deserialize, Serialize};

/// A position on the board: a column and an index into it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraggableLocation {
    #[serde(rename = "droppableId", alias = "columnId")]
    pub column: ColumnKey,
    pub index: usize,
}

impl DraggableLocation {
    pub fn new(column: ColumnKey, index: usize) -> Self {
        Self { column, index }
    }
}

/// Payload delivered when a drag ends.
///
/// `destination` is `None` when the card was dropped outside every column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable_id: Option<CardId>,
    pub source: DraggableLocation,
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
}

impl DropResult {
    pub fn new(source: DraggableLocation, destination: DraggableLocation) -> Self {
        Self {
            draggable_id: None,
            source,
            destination: Some(destination),
        }
    }

    /// A drag that was released outside any column
    pub fn cancelled(source: DraggableLocation) -> Self {
        Self {
            draggable_id: None,
            source,
            destination: None,
        }
    }

    pub fn with_draggable_id(mut self, id: CardId) -> Self {
        self.draggable_id = Some(id);
        self
    }
}

/// Computes the board that results from a finished drag.
///
/// A cancelled drag returns an equal board. When the payload names the
/// dragged card, the card at the source position must carry that id,
/// otherwise the payload is stale and the drop is rejected.
pub fn on_drag_end(board: &Board, result: &DropResult) -> Result<Board> {
    let Some(destination) = result.destination else {
        return Ok(board.clone());
    };
    let source = result.source;

    if let Some(expected) = &result.draggable_id {
        if let Some(card) = board.column(source.column).get(source.index) {
            if &card.id != expected {
                return Err(CardboardError::CardNotFound(format!(
                    "{} at {}[{}]",
                    expected,
                    source.column.as_str(),
                    source.index
                )));
            }
        }
    }

    let mut next = board.clone();
    next.move_card(
        source.column,
        source.index,
        destination.column,
        destination.index,
    )?;
    Ok(next)
}
