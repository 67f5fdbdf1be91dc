//! Server-side per-language configuration: TTS voice presets and the
//! common-word dictionaries consulted before any network translation call.

use reader_core::Language;

/// Voice preset passed to the speech synthesis call.
pub fn voice(language: Language) -> &'static str {
    match language {
        Language::Spanish => "nova",
        Language::French => "shimmer",
        Language::German => "onyx",
        Language::Italian => "alloy",
        Language::Portuguese => "fable",
        Language::Japanese => "nova",
        Language::Mandarin => "alloy",
        Language::Korean => "shimmer",
        Language::Arabic => "onyx",
        Language::Hindi => "alloy",
    }
}

/// Frequent function words resolved without an LLM call during story
/// generation. Keys are the cleaned (lowercased) word forms. Languages
/// without a curated table return an empty slice and translate everything
/// through the batch call.
pub fn common_words(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::Spanish => SPANISH_COMMON,
        Language::French => FRENCH_COMMON,
        Language::German => GERMAN_COMMON,
        Language::Italian => ITALIAN_COMMON,
        Language::Portuguese => PORTUGUESE_COMMON,
        _ => &[],
    }
}

const SPANISH_COMMON: &[(&str, &str)] = &[
    ("el", "the"),
    ("la", "the"),
    ("los", "the"),
    ("las", "the"),
    ("un", "a"),
    ("una", "a"),
    ("unos", "some"),
    ("unas", "some"),
    ("y", "and"),
    ("o", "or"),
    ("pero", "but"),
    ("porque", "because"),
    ("de", "of"),
    ("en", "in"),
    ("a", "to"),
    ("con", "with"),
    ("por", "by"),
    ("para", "for"),
    ("sin", "without"),
    ("sobre", "about"),
    ("es", "is"),
    ("son", "are"),
    ("está", "is"),
    ("están", "are"),
    ("ser", "to be"),
    ("estar", "to be"),
    ("tener", "to have"),
    ("hacer", "to do"),
    ("ir", "to go"),
    ("ver", "to see"),
    ("que", "that"),
    ("qué", "what"),
    ("como", "like"),
    ("cómo", "how"),
    ("cuando", "when"),
    ("cuándo", "when"),
    ("donde", "where"),
    ("dónde", "where"),
    ("quien", "who"),
    ("quién", "who"),
    ("cual", "which"),
    ("cuál", "which"),
    ("si", "if"),
    ("sí", "yes"),
    ("no", "no"),
    ("muy", "very"),
    ("más", "more"),
    ("menos", "less"),
    ("mucho", "much"),
    ("poco", "little"),
    ("todo", "all"),
    ("cada", "each"),
    ("otro", "other"),
    ("este", "this"),
    ("ese", "that"),
    ("aquel", "that"),
    ("yo", "I"),
    ("tú", "you"),
    ("él", "he"),
    ("ella", "she"),
    ("nosotros", "we"),
    ("vosotros", "you"),
    ("ellos", "they"),
    ("ellas", "they"),
    ("mi", "my"),
    ("tu", "your"),
    ("su", "his/her"),
    ("nuestro", "our"),
];

const FRENCH_COMMON: &[(&str, &str)] = &[
    ("le", "the"),
    ("la", "the"),
    ("les", "the"),
    ("un", "a"),
    ("une", "a"),
    ("des", "some"),
    ("et", "and"),
    ("ou", "or"),
    ("mais", "but"),
    ("parce", "because"),
    ("de", "of"),
    ("dans", "in"),
    ("avec", "with"),
    ("pour", "for"),
    ("sans", "without"),
    ("sur", "on"),
    ("est", "is"),
    ("sont", "are"),
    ("être", "to be"),
    ("avoir", "to have"),
    ("que", "that"),
    ("qui", "who"),
    ("quand", "when"),
    ("où", "where"),
    ("si", "if"),
    ("oui", "yes"),
    ("non", "no"),
    ("très", "very"),
    ("plus", "more"),
    ("moins", "less"),
    ("je", "I"),
    ("tu", "you"),
    ("il", "he"),
    ("elle", "she"),
    ("nous", "we"),
    ("vous", "you"),
    ("ils", "they"),
    ("elles", "they"),
    ("mon", "my"),
    ("ton", "your"),
    ("son", "his/her"),
    ("notre", "our"),
];

const GERMAN_COMMON: &[(&str, &str)] = &[
    ("der", "the"),
    ("die", "the"),
    ("das", "the"),
    ("ein", "a"),
    ("eine", "a"),
    ("und", "and"),
    ("oder", "or"),
    ("aber", "but"),
    ("weil", "because"),
    ("von", "of"),
    ("in", "in"),
    ("mit", "with"),
    ("für", "for"),
    ("ohne", "without"),
    ("über", "about"),
    ("ist", "is"),
    ("sind", "are"),
    ("sein", "to be"),
    ("haben", "to have"),
    ("dass", "that"),
    ("wer", "who"),
    ("wann", "when"),
    ("wo", "where"),
    ("wenn", "if"),
    ("ja", "yes"),
    ("nein", "no"),
    ("sehr", "very"),
    ("mehr", "more"),
    ("ich", "I"),
    ("du", "you"),
    ("er", "he"),
    ("sie", "she"),
    ("wir", "we"),
    ("ihr", "you"),
    ("mein", "my"),
    ("dein", "your"),
    ("unser", "our"),
];

const ITALIAN_COMMON: &[(&str, &str)] = &[
    ("il", "the"),
    ("la", "the"),
    ("i", "the"),
    ("le", "the"),
    ("un", "a"),
    ("una", "a"),
    ("e", "and"),
    ("o", "or"),
    ("ma", "but"),
    ("perché", "because"),
    ("di", "of"),
    ("in", "in"),
    ("con", "with"),
    ("per", "for"),
    ("senza", "without"),
    ("è", "is"),
    ("sono", "are"),
    ("essere", "to be"),
    ("avere", "to have"),
    ("che", "that"),
    ("chi", "who"),
    ("quando", "when"),
    ("dove", "where"),
    ("se", "if"),
    ("sì", "yes"),
    ("no", "no"),
    ("molto", "very"),
    ("più", "more"),
    ("io", "I"),
    ("tu", "you"),
    ("lui", "he"),
    ("lei", "she"),
    ("noi", "we"),
    ("voi", "you"),
    ("loro", "they"),
    ("mio", "my"),
    ("tuo", "your"),
    ("nostro", "our"),
];

const PORTUGUESE_COMMON: &[(&str, &str)] = &[
    ("o", "the"),
    ("a", "the"),
    ("os", "the"),
    ("as", "the"),
    ("um", "a"),
    ("uma", "a"),
    ("e", "and"),
    ("ou", "or"),
    ("mas", "but"),
    ("porque", "because"),
    ("de", "of"),
    ("em", "in"),
    ("com", "with"),
    ("para", "for"),
    ("sem", "without"),
    ("sobre", "about"),
    ("é", "is"),
    ("são", "are"),
    ("ser", "to be"),
    ("ter", "to have"),
    ("que", "that"),
    ("quem", "who"),
    ("quando", "when"),
    ("onde", "where"),
    ("se", "if"),
    ("sim", "yes"),
    ("não", "no"),
    ("muito", "very"),
    ("mais", "more"),
    ("eu", "I"),
    ("tu", "you"),
    ("ele", "he"),
    ("ela", "she"),
    ("nós", "we"),
    ("eles", "they"),
    ("meu", "my"),
    ("teu", "your"),
    ("nosso", "our"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_voice() {
        for lang in Language::ALL {
            assert!(!voice(lang).is_empty());
        }
    }

    #[test]
    fn common_word_keys_are_cleaned_forms() {
        for lang in Language::ALL {
            for (word, gloss) in common_words(lang) {
                assert_eq!(*word, reader_core::clean_word(word), "{lang:?}: {word}");
                assert!(!gloss.is_empty());
            }
        }
    }

    #[test]
    fn cjk_languages_rely_on_the_batch_call() {
        assert!(common_words(Language::Japanese).is_empty());
        assert!(common_words(Language::Hindi).is_empty());
    }
}
