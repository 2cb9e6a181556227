pub mod handlers;
pub mod rate_limit;
pub mod router;
pub mod types;

pub use rate_limit::RateLimitLayer;
pub use router::{create_router, AppState};
