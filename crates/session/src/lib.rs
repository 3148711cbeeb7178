//! # Session Crate
//!
//! Per-record interaction state for a browsing session, kept outside the
//! immutable catalog records and keyed by title.
//!
//! ## Components
//!
//! ### Favorites
//! A toggleable set of favorited titles. Session-scoped, unordered.
//!
//! ### SpoilerBoard
//! A per-title reveal state machine with an explicit confirmation step:
//! hidden -> confirming -> revealed, with cancel and hide paths back.
//!
//! Both are independent of the query engine: favoriting a movie or
//! revealing its spoiler never changes what the catalog view contains.

// Public modules
pub mod favorites;
pub mod spoilers;

// Re-export commonly used types
pub use favorites::Favorites;
pub use spoilers::{SpoilerBoard, SpoilerPhase};
