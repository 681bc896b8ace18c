pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_escape;
pub use pointer::{wire_click, wire_pointer_tracking};
