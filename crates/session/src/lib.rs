//! # Session Crate
//!
//! Per-user chat state that lives outside the pure context builder.
//!
//! ## Components
//!
//! - **types**: [`ChatSession`] with a bounded message history
//! - **store**: [`SessionStore`] trait, a `DashMap`-backed in-memory store and
//!   a tokio sweeper that evicts idle sessions
//! - **genre_analysis**: `genre name -> count` over the user's favorites
//!
//! The context builder never receives a session. Callers extract the
//! plain values it needs (`conversation_context()`, [`genre_analysis`]) and
//! pass those in.
//!
//! ## Example Usage
//!
//! ```ignore
//! use session::{InMemorySessionStore, Role, SessionStore};
//!
//! let store = InMemorySessionStore::new();
//! store.push_message("alice", Role::User, "any horror?");
//! let history = store.get_or_create("alice").conversation_context();
//! ```

pub mod types;
pub mod store;
pub mod genre_analysis;

pub use genre_analysis::{genre_analysis, top_genres};
pub use store::{spawn_sweeper, InMemorySessionStore, SessionStore};
pub use types::{ChatMessage, ChatSession, Role, UserId, DEFAULT_MAX_HISTORY};
