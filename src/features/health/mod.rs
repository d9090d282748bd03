pub mod handler;

pub use handler::{HealthResponse, handle_healthcheck};
