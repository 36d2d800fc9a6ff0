// Infrastructure layer modules
pub mod lambda_event;
pub mod logging;

// Re-exports
pub use lambda_event::{event_from_body, http_response};
pub use logging::init_logging;

#[cfg(test)]
pub use logging::init_test_logging;
