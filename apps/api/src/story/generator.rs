//! Story generation pipeline: prompt build → chat call → word extraction →
//! translation resolution (static dictionary first, one capped batch call
//! for the rest).

use std::collections::HashMap;

use reader_core::{tokenizer, Language};
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::grades::{grade_label, GradeConfig};
use crate::languages::common_words;
use crate::llm_client::LlmClient;
use crate::story::prompts::{
    BATCH_PROMPT_TEMPLATE, BATCH_SYSTEM_TEMPLATE, STORY_PROMPT_TEMPLATE, STORY_SYSTEM_TEMPLATE,
    TRANSLATE_PROMPT_TEMPLATE, TRANSLATE_SYSTEM_TEMPLATE,
};

/// Upper bound on words sent to one batch translation call.
pub const BATCH_TRANSLATION_CAP: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub struct StoryBundle {
    pub story: String,
    pub translations: HashMap<String, String>,
}

/// Generates a story for (language, grade) and resolves its translation map.
pub async fn generate_story(
    llm: &LlmClient,
    language: Language,
    grade: &str,
    config: GradeConfig,
) -> Result<StoryBundle, AppError> {
    let system = STORY_SYSTEM_TEMPLATE.replace("{language}", language.display_name());
    let prompt = STORY_PROMPT_TEMPLATE
        .replace("{language}", language.display_name())
        .replace("{grade_label}", &grade_label(grade))
        .replace("{complexity}", config.complexity)
        .replace("{word_count}", config.word_count)
        .replace("{vocabulary}", config.vocabulary);

    let story = llm
        .chat(&system, &prompt, 0.9, 1000)
        .await
        .map_err(|e| AppError::Llm(format!("Story generation failed: {e}")))?;

    let words = tokenizer::unique_word_keys(&story, language);
    let translations = resolve_translations(llm, language, &words).await;

    Ok(StoryBundle {
        story,
        translations,
    })
}

/// Resolves the translation map for a word list: common-word dictionary
/// first, then one batch call for the remainder (capped). A batch failure
/// degrades to whatever the dictionary covered.
pub async fn resolve_translations(
    llm: &LlmClient,
    language: Language,
    words: &[String],
) -> HashMap<String, String> {
    let (mut translations, remaining) = split_common(language, words);

    let batch: Vec<&str> = remaining
        .iter()
        .take(BATCH_TRANSLATION_CAP)
        .map(String::as_str)
        .collect();
    if batch.is_empty() {
        return translations;
    }

    let system = BATCH_SYSTEM_TEMPLATE.replace("{language}", language.display_name());
    let prompt = BATCH_PROMPT_TEMPLATE
        .replace("{language}", language.display_name())
        .replace("{words}", &batch.join(", "));

    match llm
        .chat_json::<HashMap<String, String>>(&system, &prompt, 0.3, 1000)
        .await
    {
        Ok(batch_translations) => translations.extend(batch_translations),
        Err(e) => warn!("Batch translation failed, returning dictionary-only map: {e}"),
    }

    translations
}

/// Splits a word list into (dictionary-resolved map, words still needing a
/// network call).
fn split_common(
    language: Language,
    words: &[String],
) -> (HashMap<String, String>, Vec<String>) {
    let dictionary = common_words(language);
    let mut resolved = HashMap::new();
    let mut remaining = Vec::new();

    for word in words {
        match dictionary.iter().find(|(w, _)| w == word) {
            Some((_, gloss)) => {
                resolved.insert(word.clone(), (*gloss).to_string());
            }
            None => remaining.push(word.clone()),
        }
    }

    (resolved, remaining)
}

/// Translates a single hovered word. Never fails the user-visible flow: on
/// any LLM error the original word is returned unchanged.
pub async fn translate_word(llm: &LlmClient, language: Language, word: &str) -> String {
    let system = TRANSLATE_SYSTEM_TEMPLATE.replace("{language}", language.display_name());
    let prompt = TRANSLATE_PROMPT_TEMPLATE
        .replace("{language}", language.display_name())
        .replace("{word}", word);

    match llm.chat(&system, &prompt, 0.3, 50).await {
        Ok(translation) => translation,
        Err(e) => {
            warn!("Translation of \"{word}\" failed, echoing the word back: {e}");
            word.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn common_words_resolve_without_network() {
        let (resolved, remaining) =
            split_common(Language::Spanish, &keys(&["el", "pájaro", "y", "voló"]));
        assert_eq!(resolved.get("el").map(String::as_str), Some("the"));
        assert_eq!(resolved.get("y").map(String::as_str), Some("and"));
        assert_eq!(remaining, ["pájaro", "voló"]);
    }

    #[test]
    fn languages_without_dictionary_send_everything_to_the_batch() {
        let (resolved, remaining) = split_common(Language::Japanese, &keys(&["ねこ", "いぬ"]));
        assert!(resolved.is_empty());
        assert_eq!(remaining.len(), 2);
    }

    #[test]
    fn accented_dictionary_keys_match_exactly() {
        let (resolved, remaining) = split_common(Language::Spanish, &keys(&["está", "esta"]));
        // "está" is in the dictionary; the homograph without the accent is not.
        assert_eq!(resolved.get("está").map(String::as_str), Some("is"));
        assert_eq!(remaining, ["esta"]);
    }
}
