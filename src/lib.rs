// [rust] Library root - the binary and the integration tests share these modules
pub mod config; // Environment-driven configuration
pub mod db; // Connection pool, schema, row models and queries
pub mod error; // ApiError and its HTTP mapping
pub mod web; // HTTP routing and handlers
