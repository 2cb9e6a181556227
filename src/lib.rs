pub mod api;
pub mod config;
pub mod error;
pub mod index;
pub mod metrics;
pub mod query;
pub mod wordlist;

pub use config::{QueryLimits, RateLimitConfig, ServerConfig};
pub use error::{Result, UnscrambleError};
pub use index::{canonical_key, AnagramIndex};
pub use metrics::LookupMetrics;
pub use query::lookup;
pub use wordlist::Wordlist;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
