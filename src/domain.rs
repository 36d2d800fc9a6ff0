// Domain layer modules
pub mod book_count_response;
pub mod counting_config;
pub mod event;
pub mod json_shape;
pub mod payload;
pub mod processing_error;

// Re-exports
pub use book_count_response::BookCountResponse;
pub use counting_config::CountingConfig;
pub use event::Event;
pub use json_shape::JsonShape;
pub use payload::Payload;
pub use processing_error::ProcessingError;
