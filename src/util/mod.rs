pub mod time;

pub use time::{earlier_of, later_of, parse_instant};
