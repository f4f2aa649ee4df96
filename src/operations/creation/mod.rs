mod finish_route;
mod start_route;

pub use finish_route::FinishRoute;
pub use start_route::{StartRoute, StartedRoute};
