#![forbid(unsafe_code)]

pub mod canon;
pub mod model;
pub mod time;

pub use canon::{CellValue, as_str};
pub use time::{Clock, seconds_to_hms};
