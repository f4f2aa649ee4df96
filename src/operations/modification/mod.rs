mod move_endpoint;
mod move_section;
mod new_section;
mod remove_last_section;

pub use move_endpoint::MoveEndpoint;
pub use move_section::MoveSection;
pub use new_section::NewSection;
pub use remove_last_section::{RemoveLastSection, RemovedSection};
