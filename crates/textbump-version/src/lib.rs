mod bump;

pub use bump::{BumpType, NewVersion, bump_version};
