// Adapters layer: concrete implementations of the domain ports.

pub mod redis_store;
