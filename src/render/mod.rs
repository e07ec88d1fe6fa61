pub mod command;
pub mod frame;
pub mod label;
pub mod layout;

pub use command::{Align, Command};
pub use frame::{Renderer, draw_commands};
pub use label::format_sig;
pub use layout::{Columns, Slot};
