//! 功能元件模組

pub mod duplicate_checker;

pub use duplicate_checker::DuplicateChecker;
