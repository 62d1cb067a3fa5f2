pub mod get_event;
pub mod list_events;

pub use get_event::*;
pub use list_events::*;
