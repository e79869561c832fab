//! Page backends.

pub mod memory;

pub use memory::InMemoryPage;
