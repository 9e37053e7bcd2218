//! In-memory data layer: the posts store, seeded read-only collections,
//! and the fail-fast handle the UI receives.

pub mod handle;
pub mod posts;
pub mod seed;
pub mod types;

pub use handle::{StoreHandle, Stores};
pub use posts::PostsStore;
pub use seed::{SeedData, SeedError};
