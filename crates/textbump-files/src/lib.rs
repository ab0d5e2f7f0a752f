mod change;
mod error;
mod executor;
mod planner;

pub use change::{Newline, PlannedChange};
pub use error::FilesError;
pub use executor::{perform_change, perform_changes};
pub use planner::{collect_all_planned_changes, collect_planned_changes};
