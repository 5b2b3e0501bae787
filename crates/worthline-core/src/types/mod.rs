//! Domain types for period performance analytics.
//!
//! - [`Date`]: Calendar date, convertible to instants
//! - [`Timestamp`]: UTC instant
//! - [`Period`]: Closed interval between two instants
//! - [`ValuationPosition`]: One holding's basis and market value at a snapshot

mod date;
mod period;
mod position;

pub use date::{parse_timestamp, Date, Timestamp};
pub use period::Period;
pub use position::ValuationPosition;
