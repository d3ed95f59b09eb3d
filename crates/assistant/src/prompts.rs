//! System and user prompt generation.
//!
//! Both generators are pure string builders. The movie context and the
//! conversation history are embedded verbatim.

use std::collections::HashMap;

use catalog::Favorite;
use session::top_genres;

/// Genres listed in the preference summary
pub const TOP_GENRE_COUNT: usize = 3;

/// Favorites listed in the user prompt by default
pub const DEFAULT_FAVORITES_SUMMARY_LIMIT: usize = 15;

/// Everything the system prompt is built from
#[derive(Debug, Clone, Copy)]
pub struct SystemPromptInput<'a> {
    pub user_name: &'a str,
    pub favorites: &'a [Favorite],
    pub movie_context: &'a str,
    pub conversation_context: &'a str,
    pub genre_analysis: &'a HashMap<String, u32>,
}

#[derive(Debug, Clone, Copy)]
pub struct UserPromptInput<'a> {
    pub user_name: &'a str,
    pub question: &'a str,
    pub fav_summary: &'a str,
}

fn favorite_line(favorite: &Favorite) -> String {
    match favorite.year() {
        Some(year) => format!("{} ({})", favorite.title, year),
        None => favorite.title.clone(),
    }
}

/// `"Title (Year)"` for the first `max` favorites, or `"none yet"`
pub fn favorites_summary(favorites: &[Favorite], max: usize) -> String {
    if favorites.is_empty() {
        return "none yet".to_string();
    }
    favorites
        .iter()
        .take(max)
        .map(favorite_line)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Top genres as `"Drama (4), Comedy (2)"`, or `None` without favorites
fn genre_preferences(genre_analysis: &HashMap<String, u32>) -> Option<String> {
    let top = top_genres(genre_analysis, TOP_GENRE_COUNT);
    if top.is_empty() {
        return None;
    }
    Some(
        top.into_iter()
            .map(|(name, count)| format!("{name} ({count})"))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

pub fn generate_system_prompt(input: &SystemPromptInput<'_>) -> String {
    let mut prompt = format!(
        "You are a friendly movie expert chatting with {}. \
         Recommend movies only from the catalog below and copy titles exactly as written.\n\n",
        input.user_name
    );

    if input.favorites.is_empty() {
        prompt.push_str("The user has not saved any favorite movies yet.\n\n");
    } else {
        prompt.push_str("🚫 THE USER'S FAVORITES (they have already seen these, NEVER suggest them):\n");
        for favorite in input.favorites {
            prompt.push_str("- ");
            prompt.push_str(&favorite_line(favorite));
            prompt.push('\n');
        }
        prompt.push('\n');
    }

    if let Some(preferences) = genre_preferences(input.genre_analysis) {
        prompt.push_str(&format!("🎭 FAVORITE GENRES: {preferences}\n\n"));
    }

    prompt.push_str("📚 MOVIE CATALOG:\n");
    prompt.push_str(input.movie_context);
    prompt.push_str("\n\n");

    if !input.conversation_context.is_empty() {
        prompt.push_str("💬 CONVERSATION SO FAR:\n");
        prompt.push_str(input.conversation_context);
        prompt.push_str("\n\n");
    }

    prompt.push_str(
        "Keep answers short and conversational. \
         If nothing in the catalog fits, say so instead of inventing titles.",
    );
    prompt
}

pub fn generate_user_prompt(input: &UserPromptInput<'_>) -> String {
    format!(
        "{name} asks: \"{question}\"\n\n\
         Wrap every movie title in asterisks, like *Title*.\n\
         {name}'s favorites: {favorites}",
        name = input.user_name,
        question = input.question,
        favorites = input.fav_summary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorites() -> Vec<Favorite> {
        vec![
            Favorite::new(1, "Heat").with_release_date("1995-12-15"),
            Favorite::new(2, "Untitled Project"),
        ]
    }

    #[test]
    fn test_favorites_summary() {
        assert_eq!(favorites_summary(&favorites(), 15), "Heat (1995), Untitled Project");
        assert_eq!(favorites_summary(&favorites(), 1), "Heat (1995)");
        assert_eq!(favorites_summary(&[], 15), "none yet");
    }

    #[test]
    fn test_system_prompt_sections() {
        let mut analysis = HashMap::new();
        analysis.insert("Drama".to_string(), 1);
        analysis.insert("Crime".to_string(), 3);
        analysis.insert("Action".to_string(), 3);
        analysis.insert("Thriller".to_string(), 2);

        let favorites = favorites();
        let prompt = generate_system_prompt(&SystemPromptInput {
            user_name: "Sam",
            favorites: &favorites,
            movie_context: "*Alien* (Release: May 25, 1979) ⭐8.2 [Horror]",
            conversation_context: "User: hi\nAssistant: hello",
            genre_analysis: &analysis,
        });

        assert!(prompt.contains("Sam"));
        assert!(prompt.contains("NEVER suggest"));
        assert!(prompt.contains("- Heat (1995)"));
        assert!(prompt.contains("- Untitled Project\n"));
        assert!(prompt.contains("Action (3), Crime (3), Thriller (2)"));
        assert!(!prompt.contains("Drama (1)"));
        assert!(prompt.contains("*Alien* (Release: May 25, 1979) ⭐8.2 [Horror]"));
        assert!(prompt.contains("User: hi\nAssistant: hello"));
    }

    #[test]
    fn test_system_prompt_without_history_or_favorites() {
        let analysis = HashMap::new();
        let prompt = generate_system_prompt(&SystemPromptInput {
            user_name: "there",
            favorites: &[],
            movie_context: "ctx",
            conversation_context: "",
            genre_analysis: &analysis,
        });
        assert!(!prompt.contains("CONVERSATION SO FAR"));
        assert!(!prompt.contains("FAVORITE GENRES"));
        assert!(prompt.contains("not saved any favorite"));
    }

    #[test]
    fn test_user_prompt() {
        let prompt = generate_user_prompt(&UserPromptInput {
            user_name: "Sam",
            question: "Any rom-coms?",
            fav_summary: "Heat (1995)",
        });
        assert!(prompt.contains("\"Any rom-coms?\""));
        assert!(prompt.contains("asterisks"));
        assert!(prompt.ends_with("Heat (1995)"));
    }
}
