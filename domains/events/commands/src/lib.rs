pub mod create_event;
pub mod delete_event;
pub mod form;
pub mod update_event;

pub use create_event::*;
pub use delete_event::*;
pub use form::*;
pub use update_event::*;
