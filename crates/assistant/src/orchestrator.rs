//! # Chat Orchestrator
//!
//! Coordinates one chat turn:
//! 1. Read the user's session (history) from the store
//! 2. Build the movie context for the question
//! 3. Compute the genre analysis of the user's favorites
//! 4. Generate the system and user prompts
//! 5. Record the user turn in the session
//!
//! The model call itself happens elsewhere; [`ChatAssistant::record_reply`]
//! stores whatever the model answered.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use catalog::{CatalogSnapshot, Favorite};
use session::{genre_analysis, spawn_sweeper, InMemorySessionStore, Role, SessionStore};

use crate::config::AssistantConfig;
use crate::context::{ContextBuilder, ResponseShape};
use crate::prompts::{
    favorites_summary, generate_system_prompt, generate_user_prompt, SystemPromptInput, UserPromptInput,
};

/// Everything needed to call the model for one turn
#[derive(Debug, Clone, Serialize)]
pub struct PreparedPrompts {
    pub shape: ResponseShape,
    pub movie_context: String,
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Main entry point tying the catalog, the sessions and the prompt builders together
#[derive(Clone)]
pub struct ChatAssistant {
    snapshot: Arc<CatalogSnapshot>,
    sessions: Arc<dyn SessionStore>,
    builder: ContextBuilder,
    config: AssistantConfig,
}

impl ChatAssistant {
    pub fn new(snapshot: Arc<CatalogSnapshot>, sessions: Arc<dyn SessionStore>, config: AssistantConfig) -> Self {
        Self {
            snapshot,
            sessions,
            builder: ContextBuilder::new(config.limits),
            config,
        }
    }

    /// Load a catalog snapshot from `dir` and use an in-memory session store
    pub fn from_dir(dir: &Path, config: AssistantConfig) -> Result<Self> {
        let start = Instant::now();
        let snapshot = CatalogSnapshot::load_from_dir(dir)
            .with_context(|| format!("Failed to load catalog from {}", dir.display()))?;

        info!(
            "Loaded {} movies, {} genres and {} favorites in {:.2?}",
            snapshot.catalog.total_len(),
            snapshot.genres.len(),
            snapshot.favorites.len(),
            start.elapsed()
        );

        let sessions = Arc::new(InMemorySessionStore::with_max_history(config.max_history));
        Ok(Self::new(Arc::new(snapshot), sessions, config))
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Start evicting idle sessions in the background
    pub fn spawn_session_sweeper(&self) -> JoinHandle<()> {
        spawn_sweeper(
            self.sessions.clone(),
            self.config.session_ttl(),
            self.config.sweep_interval(),
        )
    }

    /// Prepare a turn using the snapshot's favorites
    pub fn prepare(&self, user_id: &str, user_name: Option<&str>, question: &str) -> PreparedPrompts {
        let snapshot = self.snapshot.clone();
        self.prepare_with_favorites(user_id, user_name, question, &snapshot.favorites)
    }

    /// Prepare a turn for a caller that supplies its own favorites
    pub fn prepare_with_favorites(
        &self,
        user_id: &str,
        user_name: Option<&str>,
        question: &str,
        favorites: &[Favorite],
    ) -> PreparedPrompts {
        let start = Instant::now();
        let user_name = user_name.unwrap_or(&self.config.default_user_name);

        // History is read before this question is recorded
        let conversation = self.sessions.get_or_create(user_id).conversation_context();

        let context = self.builder.build_detailed(
            &self.snapshot.catalog,
            &self.snapshot.genres,
            question,
            favorites,
        );
        debug!("Intent for {}: {:?}", user_id, context.intent);

        let analysis = genre_analysis(favorites, &self.snapshot.genres);
        let system_prompt = generate_system_prompt(&SystemPromptInput {
            user_name,
            favorites,
            movie_context: &context.text,
            conversation_context: &conversation,
            genre_analysis: &analysis,
        });

        let summary = favorites_summary(favorites, self.config.favorites_summary_limit);
        let user_prompt = generate_user_prompt(&UserPromptInput {
            user_name,
            question,
            fav_summary: &summary,
        });

        self.sessions.push_message(user_id, Role::User, question);

        info!(
            "Prepared {} prompts for {} in {:.2?}",
            context.shape,
            user_id,
            start.elapsed()
        );

        PreparedPrompts {
            shape: context.shape,
            movie_context: context.text,
            system_prompt,
            user_prompt,
        }
    }

    /// Store the model's answer so the next turn sees it
    pub fn record_reply(&self, user_id: &str, reply: &str) {
        self.sessions.push_message(user_id, Role::Assistant, reply);
    }
}
