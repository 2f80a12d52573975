//! Search state machine and query engine (pure).
//!
//! All state transitions and derived views are pure functions testable
//! without any front end.

pub mod cache;
pub mod filter;
pub mod search;
pub mod session;
pub mod suggestions;

// Re-export for convenience
pub use cache::{CachedResult, ResultCache, ResultCacheKey};
pub use filter::{filter_comments, filter_indices, Constraints};
pub use search::{SearchSessionState, SearchState};
pub use session::SearchSession;
pub use suggestions::{suggestion, suggestions, SUGGESTIONS};
