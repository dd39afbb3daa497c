pub mod deadline_window;
pub mod item;
pub mod notification;

pub use deadline_window::*;
pub use item::*;
pub use notification::*;
