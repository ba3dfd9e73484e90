//! Pure weekly aggregation: no I/O, no mutation of inputs, no shared state.

pub mod duration;
pub mod summary;
pub mod week;
