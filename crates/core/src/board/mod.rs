//! Board projection
//!
//! Derives the set of boards and their column groupings from the task
//! collection.

mod model;
mod projection;

pub use model::*;
pub use projection::*;
