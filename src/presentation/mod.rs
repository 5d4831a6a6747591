pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{ClassificationStrategy, Environment, LlmProvider, Settings};
pub use router::{ANALYZE_DISRUPTOR_PATH, create_router};
pub use state::AppState;
