//! Infrastructure adapters for host pages.

pub mod page;

pub use page::InMemoryPage;
