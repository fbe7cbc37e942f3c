//! Application layer - The leech cycle

pub mod cycle;

pub use cycle::{CycleDriver, CycleReport};
