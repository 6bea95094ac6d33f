//! Key-value storage
//!
//! The persistence seam every store writes through: named string slots
//! backed by a single JSON file.

mod file;
mod kv;

pub use file::FileStore;
pub use kv::KeyValueStore;
