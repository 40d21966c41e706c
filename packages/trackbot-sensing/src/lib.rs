//! Range sensor sampling and noise rejection.
//!
//! Each sensor channel is filtered independently with a [`HoldLastGood`] filter: readings
//! strictly inside the channel's [`ValidityWindow`] replace the filtered value, anything
//! else is ignored and the previous value is kept.

mod array;
mod filter;

pub use array::{FilteredRange, RangeArray, RangeSample, RangeSensor, RawSample};
pub use filter::{HoldLastGood, ValidityWindow};
