//! Pure pipeline stages: annotate, filter, aggregate.

pub mod aggregate;
pub mod annotate;
pub mod filter;
pub mod period;
pub mod pipeline;
pub mod weekend;
