//! Splits story text into hoverable word tokens and verbatim separators.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// One renderable unit of story text.
///
/// Words carry a `key` (the lowercased surface form) used to look up the
/// hover translation; separators are rendered exactly as they appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    Word { text: String, key: String },
    Separator { text: String },
}

impl Token {
    pub fn text(&self) -> &str {
        match self {
            Token::Word { text, .. } | Token::Separator { text } => text,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Whitespace,
    Punctuation,
}

fn classify(c: char, language: Language) -> CharClass {
    if language.word_char(c) {
        CharClass::Word
    } else if c.is_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Punctuation
    }
}

/// Tokenizes `text` for `language` into an ordered token sequence.
///
/// Runs of letter-class characters become `Word` tokens; runs of other
/// characters are split into whitespace runs and punctuation runs, each a
/// `Separator`. Punctuation and whitespace never merge into one token, so
/// `", "` yields `","` followed by `" "`.
pub fn tokenize(text: &str, language: Language) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_class: Option<CharClass> = None;

    for c in text.chars() {
        let class = classify(c, language);
        if run_class != Some(class) {
            flush(&mut tokens, &mut run, run_class);
            run_class = Some(class);
        }
        run.push(c);
    }
    flush(&mut tokens, &mut run, run_class);

    tokens
}

fn flush(tokens: &mut Vec<Token>, run: &mut String, class: Option<CharClass>) {
    if run.is_empty() {
        return;
    }
    let text = std::mem::take(run);
    let token = match class {
        Some(CharClass::Word) => Token::Word {
            key: text.to_lowercase(),
            text,
        },
        _ => Token::Separator { text },
    };
    tokens.push(token);
}

/// Collects the unique word keys of `text`, in first-appearance order.
pub fn unique_word_keys(text: &str, language: Language) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut keys = Vec::new();
    for token in tokenize(text, language) {
        if let Token::Word { key, .. } = token {
            if seen.insert(key.clone()) {
                keys.push(key);
            }
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::text).collect()
    }

    #[test]
    fn splits_inverted_exclamation_and_comma_separately() {
        let tokens = tokenize("¡Hola, mundo!", Language::Spanish);
        assert_eq!(texts(&tokens), ["¡", "Hola", ",", " ", "mundo", "!"]);

        let words: Vec<_> = tokens.iter().filter(|t| t.is_word()).collect();
        assert_eq!(
            words,
            [
                &Token::Word {
                    text: "Hola".into(),
                    key: "hola".into()
                },
                &Token::Word {
                    text: "mundo".into(),
                    key: "mundo".into()
                },
            ]
        );
    }

    #[test]
    fn accented_words_stay_whole() {
        let tokens = tokenize("El pájaro voló.", Language::Spanish);
        assert_eq!(texts(&tokens), ["El", " ", "pájaro", " ", "voló", "."]);
    }

    #[test]
    fn punctuation_runs_are_not_merged_with_whitespace() {
        let tokens = tokenize("a... b", Language::Spanish);
        assert_eq!(texts(&tokens), ["a", "...", " ", "b"]);
    }

    #[test]
    fn japanese_script_boundaries_split_on_punctuation_only() {
        let tokens = tokenize("これは本です。", Language::Japanese);
        assert_eq!(texts(&tokens), ["これは本です", "。"]);
        assert!(tokens[0].is_word());
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("", Language::French).is_empty());
    }

    #[test]
    fn unique_keys_preserve_first_appearance_order() {
        let keys = unique_word_keys("La casa y la CASA grande", Language::Spanish);
        assert_eq!(keys, ["la", "casa", "y", "grande"]);
    }
}
