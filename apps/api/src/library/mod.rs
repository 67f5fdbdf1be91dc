//! Per-user library: saved stories, vocabulary, and quiz-score history.

pub mod handlers;

/// Saved-story titles are the story's opening characters plus an ellipsis.
pub const TITLE_CHARS: usize = 50;

/// Builds the list/display title for a saved story.
pub fn story_title(story: &str) -> String {
    let mut title: String = story.chars().take(TITLE_CHARS).collect();
    title.push_str("...");
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_first_fifty_chars_plus_ellipsis() {
        let story = "a".repeat(120);
        let title = story_title(&story);
        assert_eq!(title.chars().count(), TITLE_CHARS + 3);
        assert!(title.ends_with("..."));
        assert_eq!(&title[..TITLE_CHARS], &story[..TITLE_CHARS]);
    }

    #[test]
    fn title_counts_characters_not_bytes() {
        let story = "é".repeat(60);
        let title = story_title(&story);
        assert_eq!(title.chars().count(), TITLE_CHARS + 3);
    }

    #[test]
    fn short_story_title_is_the_whole_story_plus_ellipsis() {
        assert_eq!(story_title("Hola"), "Hola...");
    }
}
