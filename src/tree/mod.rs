pub mod filler;
pub mod names;
pub mod populate;
pub mod types;

pub use populate::populate;
pub use types::Tally;
