pub mod board;
pub mod card;
pub mod column;
pub mod drag;

pub use board::Board;
pub use card::{Card, CardId};
pub use column::ColumnKey;
pub use drag::{on_drag_end, DraggableLocation, DropResult};
