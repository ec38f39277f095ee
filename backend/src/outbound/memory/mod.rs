//! In-memory adapter implementing every workshop driven port.
//!
//! Used by the HTTP tests and when the service starts without a database URL.
//! State is lost on restart.

mod store;

pub use store::MemoryStore;

#[cfg(test)]
mod tests;
