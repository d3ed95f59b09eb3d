//! # Assistant Crate
//!
//! Builds everything a chat turn needs before the model is called.
//!
//! ## Components
//!
//! - **context**: question -> bounded movie context ([`ContextBuilder`])
//! - **prompts**: system and user prompt generation
//! - **config**: limits and session settings loaded from JSON
//! - **orchestrator**: [`ChatAssistant`], which owns the catalog snapshot and sessions
//!
//! ## Example Usage
//!
//! ```ignore
//! use assistant::{AssistantConfig, ChatAssistant};
//!
//! let assistant = ChatAssistant::from_dir("data/sample".as_ref(), AssistantConfig::default())?;
//! let prompts = assistant.prepare("alice", Some("Alice"), "Any good rom-coms?");
//! println!("{}", prompts.system_prompt);
//! ```

pub mod config;
pub mod context;
pub mod prompts;
pub mod orchestrator;

pub use config::{AssistantConfig, ContextLimits};
pub use context::{build_context, ContextBuilder, MovieContext, ResponseShape, GENRE_MERGE_ORDER};
pub use orchestrator::{ChatAssistant, PreparedPrompts};
pub use prompts::{
    favorites_summary, generate_system_prompt, generate_user_prompt, SystemPromptInput, UserPromptInput,
    DEFAULT_FAVORITES_SUMMARY_LIMIT,
};
