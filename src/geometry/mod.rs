mod cardinal;
mod line;
mod point;

pub use cardinal::{is_cardinal, snap_to_cardinal, Cardinal};
pub use line::Line;
pub use point::Point;
