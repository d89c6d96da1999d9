//! In-process stores.
//!
//! Test-only backing for the router and handler tests; the server binary
//! always connects to MongoDB.

pub mod memory_store;

pub use memory_store::InMemoryStore;
