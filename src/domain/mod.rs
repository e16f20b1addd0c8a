mod cell_view;
mod engine;
mod intent;

pub use cell_view::{CellView, bit_at, packed_len};
pub use engine::Engine;
pub use intent::{EditIntent, Modifiers};
