pub mod helper;

pub use helper::build_item;
pub use helper::build_scanner;
pub use helper::manila_midnight;
pub use helper::run_at;
