//! Scene (frame input) types.
//!
//! Responsibilities:
//! - describe compositable windows and what fills them
//! - hold the frame's window list and its paint order
//! - resolve bulk instance numbers back to window indices

mod order;
mod window;
mod window_list;

pub use order::{resolve_array_index, OrderList};
pub use window::{ImageId, SurfaceContent, Window};
pub use window_list::WindowList;
