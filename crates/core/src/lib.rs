//! Core library for Taskboard
//!
//! This crate contains the board's data layer, including:
//! - Key-value storage
//! - Task management
//! - Board projection
//! - Presentation preferences

pub mod board;
pub mod error;
pub mod prefs;
pub mod storage;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
