//! Price Alert Table
//!
//! Turns raw competitor comparisons into classified, rendered alert rows.
//! Everything here is a pure function of its inputs; the inversion margin is
//! passed in through [`ClassifierConfig`] rather than read from shared state.

mod classifier;
mod columns;
mod filter;
mod format;
mod toggle;

pub use classifier::*;
pub use columns::*;
pub use filter::*;
pub use format::*;
pub use toggle::*;
