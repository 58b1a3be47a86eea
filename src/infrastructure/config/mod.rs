//! Infrastructure configuration modules.

pub mod logging;
pub mod message;
pub mod settings;
pub mod source;
