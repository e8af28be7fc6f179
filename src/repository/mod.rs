//! Named storage for check blocks.
//!
//! A [`CheckConfiguration`](crate::check::CheckConfiguration) knows nothing
//! about where it is kept; callers hand it to a [`CheckRepository`] to store
//! it under a name and get it back later.

pub mod check_repository;
pub mod in_memory;

pub use check_repository::{validate_block_name, CheckRepository, FileCheckRepository};
pub use in_memory::InMemoryCheckRepository;
