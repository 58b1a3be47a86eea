//! Rate cache adapters.

pub mod file;

pub use file::JsonFileCache;
