//! LLM prompt constants for story generation and translation.

/// System prompt for story generation. Replace `{language}` before sending.
pub const STORY_SYSTEM_TEMPLATE: &str = "You are a {language} language teacher who creates \
    engaging, age-appropriate stories in {language} for students. \
    You write ONLY in {language} with proper grammar, accents, and punctuation.";

/// Story prompt. Replace `{language}`, `{grade_label}`, `{complexity}`,
/// `{word_count}`, `{vocabulary}` before sending.
pub const STORY_PROMPT_TEMPLATE: &str = "Generate an engaging and educational {language} story \
appropriate for a {grade_label} student learning {language}.

Requirements:
- Write ONLY in {language} (no English in the story)
- Complexity level: {complexity}
- Length: {word_count} words
- Use vocabulary appropriate for: {vocabulary}
- Make the story interesting and age-appropriate
- Include simple dialogue if appropriate for the grade level
- Use proper {language} grammar, accents, and punctuation
- Create a story with a clear beginning, middle, and end
- Choose a random topic (animals, family, school, adventure, nature, friends, etc.)

Write the complete story now in {language}:";

/// System prompt for single-word translation. Replace `{language}`.
pub const TRANSLATE_SYSTEM_TEMPLATE: &str = "You are a {language}-English translator. \
    Provide concise, accurate translations. \
    Return ONLY the English translation, nothing else.";

/// Single-word translation prompt. Replace `{language}` and `{word}`.
pub const TRANSLATE_PROMPT_TEMPLATE: &str = "Translate this {language} word to English: \
\"{word}\". Give only the most common English translation, no explanations.";

/// System prompt for batch translation. Replace `{language}`.
pub const BATCH_SYSTEM_TEMPLATE: &str = "You are a {language}-English translator. \
    Provide accurate translations in JSON format.";

/// Batch translation prompt. Replace `{language}` and `{words}` (a
/// comma-separated word list).
pub const BATCH_PROMPT_TEMPLATE: &str = "Translate these {language} words to English. \
Return ONLY a JSON object with {language} words as keys and English translations as values. \
Format: {\"word1\": \"translation1\", \"word2\": \"translation2\"}

{language} words: {words}";
