//! Application layer: the change-detection pipeline and its scheduler.

pub mod composer;
pub mod detector;
pub mod scheduler;

pub use composer::NotificationComposer;
pub use detector::ChangeDetector;
pub use scheduler::{Phase, Ports, Routes, Scheduler, TickOutcome};
