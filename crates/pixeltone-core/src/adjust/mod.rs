//! Adjustment tools — channel primitives, tone adjustment, and color filters.

pub mod channel;
pub mod filter;
pub mod tone;
