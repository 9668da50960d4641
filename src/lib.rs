// Domain layer (template fetching and substitution)
pub mod template;

// Mount layer (where rendered fragments land)
pub mod mount;

// Application layer (the ordered rendering pipeline)
pub mod pipeline;

// Supporting modules
pub mod config;
