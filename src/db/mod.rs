pub mod entries;
mod pool;

pub use pool::{create_memory_pool, create_pool, run_migrations};
