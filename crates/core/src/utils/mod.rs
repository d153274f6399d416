pub mod time_utils;
pub mod validation;

pub use time_utils::{whole_months, YearMonth};
