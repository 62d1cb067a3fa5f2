pub mod events;
pub mod id;

pub use events::{CREATED_AT_FORMAT, EVENT_DATE_FORMAT, Event};
pub use id::parse_event_id;
