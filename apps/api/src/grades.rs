//! Static grade-level configuration table used to build story prompts.

/// Story constraints for one school grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeConfig {
    pub complexity: &'static str,
    pub word_count: &'static str,
    pub vocabulary: &'static str,
}

pub const GRADE_LEVELS: [&str; 13] = [
    "K", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// Looks up the configuration for a grade label. `None` for unknown grades,
/// which handlers turn into a 400.
pub fn grade_config(grade: &str) -> Option<GradeConfig> {
    let config = match grade {
        "K" => GradeConfig {
            complexity: "very simple",
            word_count: "50-75",
            vocabulary: "basic animals, colors, family words",
        },
        "1" => GradeConfig {
            complexity: "simple",
            word_count: "75-100",
            vocabulary: "basic nouns, common verbs, simple adjectives",
        },
        "2" => GradeConfig {
            complexity: "simple",
            word_count: "100-150",
            vocabulary: "everyday objects, simple actions, basic descriptions",
        },
        "3" => GradeConfig {
            complexity: "elementary",
            word_count: "150-200",
            vocabulary: "expanded vocabulary with simple past tense",
        },
        "4" => GradeConfig {
            complexity: "elementary",
            word_count: "200-250",
            vocabulary: "more complex sentences and common idioms",
        },
        "5" => GradeConfig {
            complexity: "intermediate",
            word_count: "250-300",
            vocabulary: "varied vocabulary with multiple tenses",
        },
        "6" => GradeConfig {
            complexity: "intermediate",
            word_count: "300-350",
            vocabulary: "descriptive language and compound sentences",
        },
        "7" => GradeConfig {
            complexity: "intermediate-advanced",
            word_count: "350-400",
            vocabulary: "more sophisticated vocabulary and expressions",
        },
        "8" => GradeConfig {
            complexity: "intermediate-advanced",
            word_count: "400-450",
            vocabulary: "complex sentence structures and varied vocabulary",
        },
        "9" => GradeConfig {
            complexity: "advanced",
            word_count: "450-500",
            vocabulary: "advanced vocabulary with subjunctive mood",
        },
        "10" => GradeConfig {
            complexity: "advanced",
            word_count: "500-550",
            vocabulary: "sophisticated expressions and literary devices",
        },
        "11" => GradeConfig {
            complexity: "advanced",
            word_count: "550-600",
            vocabulary: "complex grammar and nuanced vocabulary",
        },
        "12" => GradeConfig {
            complexity: "very advanced",
            word_count: "600-700",
            vocabulary: "near-native vocabulary and complex structures",
        },
        _ => return None,
    };
    Some(config)
}

/// Human label used inside prompts: "Kindergarten" or "Grade N".
pub fn grade_label(grade: &str) -> String {
    if grade == "K" {
        "Kindergarten".to_string()
    } else {
        format!("Grade {grade}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_grade_has_a_config() {
        for grade in GRADE_LEVELS {
            let config = grade_config(grade).unwrap_or_else(|| panic!("no config for {grade}"));
            assert!(!config.complexity.is_empty());
            assert!(!config.word_count.is_empty());
            assert!(!config.vocabulary.is_empty());
        }
    }

    #[test]
    fn unknown_grades_are_rejected() {
        assert_eq!(grade_config("13"), None);
        assert_eq!(grade_config("kindergarten"), None);
        assert_eq!(grade_config(""), None);
    }

    #[test]
    fn grade_labels() {
        assert_eq!(grade_label("K"), "Kindergarten");
        assert_eq!(grade_label("7"), "Grade 7");
    }
}
