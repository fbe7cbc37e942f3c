//! Domain layer - Pure types with no I/O

pub mod entry;
pub mod schedule;

pub use entry::ActivityEntry;
pub use schedule::cycle_period;
