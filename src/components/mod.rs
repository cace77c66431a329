mod explore;
mod field;
mod layout;
mod sidebar;

pub use explore::Explore;
pub use field::FieldInput;
pub use layout::{Avatar, BackHeader, HeartDivider};
pub use sidebar::Sidebar;
