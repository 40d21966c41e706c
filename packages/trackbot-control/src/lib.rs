//! Control primitives for trackbot.
//!
//! - [`ladder`]: the tiered distance-to-speed table used for automatic alignment.
//! - [`loops`]: the [`Feedback`](loops::Feedback) trait and the per-side
//!   [`Aligner`](loops::Aligner).
//! - [`align`]: combines per-side aligners into a differential drive command.
//! - [`cooldown`]: monotonic clocks and debounced toggles.

pub mod align;
pub mod cooldown;
pub mod ladder;
pub mod loops;

pub use align::{AlignConfig, AlignMode, AlignOutput, Alignment};
pub use cooldown::{Clock, Cooldown, Toggle};
pub use ladder::{AlignTarget, LadderError, LadderOutcome, SpeedLadder, Tier};
