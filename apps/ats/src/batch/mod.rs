// Latest-batch lifecycle: in-memory store, CSV export and HTTP handlers.

pub mod export;
pub mod handlers;
pub mod store;
