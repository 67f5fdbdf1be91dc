//! Supported languages and their word-character classes.
//!
//! A character either belongs to a language's letter class or it does not;
//! the tokenizer builds word tokens from runs of letter-class characters.
//! ASCII letters count as word characters in every language so loanwords
//! and proper names inside CJK/Arabic/Devanagari text stay hoverable.

use serde::{Deserialize, Serialize};

/// Punctuation stripped from a word before it is used as a translation
/// cache key. Matches the set the hover path has always used.
const STRIP_PUNCTUATION: &[char] = &['¿', '?', '¡', '!', ',', ';', ':', '.'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Japanese,
    Mandarin,
    Korean,
    Arabic,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::Japanese,
        Language::Mandarin,
        Language::Korean,
        Language::Arabic,
        Language::Hindi,
    ];

    /// Parses the lowercase wire tag (`"spanish"`, `"mandarin"`, ...).
    pub fn from_tag(tag: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.tag() == tag)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Japanese => "japanese",
            Language::Mandarin => "mandarin",
            Language::Korean => "korean",
            Language::Arabic => "arabic",
            Language::Hindi => "hindi",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Japanese => "Japanese",
            Language::Mandarin => "Mandarin Chinese",
            Language::Korean => "Korean",
            Language::Arabic => "Arabic",
            Language::Hindi => "Hindi",
        }
    }

    /// Whether `c` belongs to this language's letter class.
    pub fn word_char(&self, c: char) -> bool {
        if c.is_ascii_alphabetic() {
            return true;
        }
        match self {
            Language::Spanish
            | Language::French
            | Language::German
            | Language::Italian
            | Language::Portuguese => latin_letter(c),
            Language::Japanese => {
                matches!(c,
                    '\u{3040}'..='\u{309F}'   // Hiragana
                    | '\u{30A0}'..='\u{30FF}' // Katakana, incl. prolonged sound mark
                    | '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
                )
            }
            Language::Mandarin => {
                matches!(c,
                    '\u{3400}'..='\u{4DBF}'   // CJK Extension A
                    | '\u{4E00}'..='\u{9FFF}'
                )
            }
            Language::Korean => {
                matches!(c,
                    '\u{1100}'..='\u{11FF}'   // Hangul Jamo
                    | '\u{3130}'..='\u{318F}' // Hangul Compatibility Jamo
                    | '\u{AC00}'..='\u{D7AF}' // Hangul Syllables
                )
            }
            Language::Arabic => {
                matches!(c,
                    '\u{0600}'..='\u{06FF}'   // Arabic
                    | '\u{0750}'..='\u{077F}' // Arabic Supplement
                )
            }
            Language::Hindi => matches!(c, '\u{0900}'..='\u{097F}'), // Devanagari
        }
    }
}

/// Latin-1 Supplement and Latin Extended-A/B letters, excluding the two
/// arithmetic signs embedded in the Latin-1 letter range.
fn latin_letter(c: char) -> bool {
    matches!(c, '\u{00C0}'..='\u{024F}') && c != '\u{00D7}' && c != '\u{00F7}'
}

/// Normalizes a hovered word into its translation cache key: strips the
/// fixed punctuation set and lowercases. No diacritic folding — `si` and
/// `sí` are distinct keys on purpose.
pub fn clean_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| !STRIP_PUNCTUATION.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(lang.tag()), Some(lang));
        }
        assert_eq!(Language::from_tag("klingon"), None);
        assert_eq!(Language::from_tag("Spanish"), None); // tags are lowercase
    }

    #[test]
    fn accented_latin_letters_are_word_chars() {
        for c in ['á', 'é', 'ñ', 'ü', 'ß', 'ç', 'œ'] {
            assert!(Language::Spanish.word_char(c), "{c}");
        }
        assert!(!Language::Spanish.word_char('×'));
        assert!(!Language::Spanish.word_char('÷'));
        assert!(!Language::Spanish.word_char('3'));
    }

    #[test]
    fn cjk_and_devanagari_classes() {
        assert!(Language::Japanese.word_char('ひ'));
        assert!(Language::Japanese.word_char('カ'));
        assert!(Language::Mandarin.word_char('学'));
        assert!(Language::Korean.word_char('한'));
        assert!(Language::Arabic.word_char('ب'));
        assert!(Language::Hindi.word_char('क'));
        assert!(!Language::Hindi.word_char('学'));
        // Loanwords stay words everywhere.
        assert!(Language::Japanese.word_char('a'));
    }

    #[test]
    fn clean_word_strips_punctuation_and_lowercases() {
        assert_eq!(clean_word("¡Hola!"), "hola");
        assert_eq!(clean_word("¿Cómo?"), "cómo");
        assert_eq!(clean_word("mundo."), "mundo");
    }

    #[test]
    fn clean_word_keeps_diacritics_distinct() {
        assert_ne!(clean_word("sí"), clean_word("si"));
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Language::Mandarin).unwrap();
        assert_eq!(json, "\"mandarin\"");
        let back: Language = serde_json::from_str("\"spanish\"").unwrap();
        assert_eq!(back, Language::Spanish);
    }
}
