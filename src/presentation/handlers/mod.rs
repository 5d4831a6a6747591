mod analyze;
mod health;

pub use analyze::{
    AnalyzeResponse, ErrorResponse, analyze_disruptor_handler, method_not_allowed_handler,
    preflight_handler,
};
pub use health::{health_handler, liveness_handler};
