//! The reader session: one serializable state object for the whole UI,
//! advanced by pure `(state, event) → commands` transitions.
//!
//! The host shell owns the DOM/audio/network. It feeds every user intent
//! and every fetch outcome in as an [`Event`], executes the returned
//! [`Command`]s, and re-renders from the state afterwards. One request is
//! in flight per user action; the `busy` flag is what disables the
//! triggering control.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::language::{clean_word, Language};
use crate::playback::{Playback, PlaybackCommand};
use crate::quiz_flow::{GradeOutcome, QuizFlow, QuizQuestion, RetakeCommand, RetakePolicy};
use crate::translation_cache::{CacheLookup, TranslationCache};

/// Error banners auto-dismiss after five seconds.
const BANNER_DISMISS_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Generation,
    Story,
    Quiz,
    Account,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryView {
    pub text: String,
    pub language: Language,
    pub grade_level: String,
}

/// Snapshot of the signed-in user, as reported by `/api/auth/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub total_points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub message: String,
    pub expires_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Generation screen
    GenerateRequested {
        language: Language,
        grade_level: String,
    },
    StoryReceived {
        story: String,
        translations: HashMap<String, String>,
    },
    StoryFailed {
        message: String,
    },
    NewStoryRequested,

    // Hover translation
    WordHovered {
        word: String,
    },
    WordUnhovered,
    TranslationReceived {
        key: String,
        gloss: String,
    },
    TranslationFailed {
        key: String,
    },

    // Audio
    AudioToggled,
    AudioReady,
    AudioFailed {
        message: String,
    },
    AudioEnded,

    // Quiz
    QuizRequested,
    QuizReceived {
        questions: Vec<QuizQuestion>,
    },
    QuizFailed {
        message: String,
    },
    TrueFalseSelected {
        index: usize,
        value: bool,
    },
    ShortAnswerEdited {
        index: usize,
        text: String,
    },
    QuizSubmitted,
    GradeReceived {
        outcome: GradeOutcome,
    },
    GradeFailed {
        message: String,
    },
    RetakeRequested,
    QuizClosed,

    // Account
    AuthStatusReceived {
        user: Option<UserSnapshot>,
    },
    AccountOpened,
    AccountClosed,

    // Clock
    Tick,
}

/// Side effects for the host to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchStory {
        language: Language,
        grade_level: String,
    },
    FetchTranslation {
        key: String,
        language: Language,
    },
    FetchAudio {
        text: String,
        language: Language,
    },
    FetchQuiz {
        story: String,
        language: Language,
    },
    SubmitQuiz {
        questions: Vec<QuizQuestion>,
        answers: Vec<String>,
        language: Language,
        grade_level: String,
    },
    PlayAudio,
    PauseAudio,
    ReleaseAudio,
    ShowGloss {
        key: String,
        gloss: String,
    },
    HideGloss,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderSession {
    pub screen: Screen,
    pub story: Option<StoryView>,
    pub cache: TranslationCache,
    pub playback: Playback,
    pub quiz: QuizFlow,
    pub user: Option<UserSnapshot>,
    pub banner: Option<Banner>,
    /// True while the request triggered by the last user action is in
    /// flight; the triggering control renders disabled.
    pub busy: bool,
    /// The (language, grade) of the generation request in flight, kept so
    /// the story view can be built when the response lands.
    pending_story: Option<(Language, String)>,
}

impl Default for ReaderSession {
    fn default() -> Self {
        Self::new(RetakePolicy::default())
    }
}

impl ReaderSession {
    pub fn new(retake_policy: RetakePolicy) -> Self {
        Self {
            screen: Screen::Generation,
            story: None,
            cache: TranslationCache::new(),
            playback: Playback::new(),
            quiz: QuizFlow::new(retake_policy),
            user: None,
            banner: None,
            busy: false,
            pending_story: None,
        }
    }

    /// Advances the session. `now_ms` is the host clock, used for banner
    /// deadlines.
    pub fn apply(&mut self, event: Event, now_ms: u64) -> Vec<Command> {
        match event {
            Event::GenerateRequested {
                language,
                grade_level,
            } => {
                if self.busy {
                    return vec![];
                }
                self.busy = true;
                self.pending_story = Some((language, grade_level.clone()));
                vec![Command::FetchStory {
                    language,
                    grade_level,
                }]
            }
            Event::StoryReceived {
                story,
                translations,
            } => {
                self.busy = false;
                let Some((language, grade_level)) = self.pending_story.take() else {
                    // A response with no matching request; nothing to show.
                    return vec![];
                };
                self.cache.seed(translations);
                self.quiz.reset();
                let mut commands = Vec::new();
                if self.playback.reset() {
                    commands.push(Command::ReleaseAudio);
                }
                self.story = Some(StoryView {
                    text: story,
                    language,
                    grade_level,
                });
                self.screen = Screen::Story;
                commands
            }
            Event::StoryFailed { message } => {
                self.busy = false;
                self.pending_story = None;
                self.raise_banner(message, now_ms);
                vec![]
            }
            Event::NewStoryRequested => {
                self.screen = Screen::Generation;
                self.story = None;
                self.cache.clear();
                self.quiz.reset();
                let mut commands = vec![Command::HideGloss];
                if self.playback.reset() {
                    commands.push(Command::ReleaseAudio);
                }
                commands
            }

            Event::WordHovered { word } => {
                let Some(story) = &self.story else {
                    return vec![];
                };
                let language = story.language;
                match self.cache.lookup(&word) {
                    Some(CacheLookup::Hit(gloss)) => vec![Command::ShowGloss {
                        key: clean_word(&word),
                        gloss,
                    }],
                    Some(CacheLookup::Fetch(key)) => {
                        vec![Command::FetchTranslation { key, language }]
                    }
                    Some(CacheLookup::InFlight) | None => vec![],
                }
            }
            Event::WordUnhovered => vec![Command::HideGloss],
            Event::TranslationReceived { key, gloss } => {
                self.cache.insert(&key, gloss.clone());
                vec![Command::ShowGloss { key, gloss }]
            }
            Event::TranslationFailed { key } => {
                // Silent: the tooltip simply does not appear. A later hover
                // retries.
                self.cache.fail(&key);
                vec![]
            }

            Event::AudioToggled => {
                let Some(story) = &self.story else {
                    return vec![];
                };
                match self.playback.toggle() {
                    Some(PlaybackCommand::Fetch) => {
                        self.busy = true;
                        vec![Command::FetchAudio {
                            text: story.text.clone(),
                            language: story.language,
                        }]
                    }
                    Some(PlaybackCommand::Play) => vec![Command::PlayAudio],
                    Some(PlaybackCommand::Pause) => vec![Command::PauseAudio],
                    None => vec![],
                }
            }
            Event::AudioReady => {
                self.busy = false;
                self.playback.audio_ready();
                vec![]
            }
            Event::AudioFailed { message } => {
                self.busy = false;
                self.playback.audio_failed();
                self.raise_banner(message, now_ms);
                vec![]
            }
            Event::AudioEnded => {
                self.playback.ended();
                vec![]
            }

            Event::QuizRequested => {
                let Some(story) = &self.story else {
                    return vec![];
                };
                if self.quiz.request() {
                    self.busy = true;
                    vec![Command::FetchQuiz {
                        story: story.text.clone(),
                        language: story.language,
                    }]
                } else {
                    // Already generated: reopen as-is.
                    self.screen = Screen::Quiz;
                    vec![]
                }
            }
            Event::QuizReceived { questions } => {
                self.busy = false;
                self.quiz.questions_ready(questions);
                self.screen = Screen::Quiz;
                vec![]
            }
            Event::QuizFailed { message } => {
                self.busy = false;
                self.quiz.generation_failed();
                self.raise_banner(message, now_ms);
                vec![]
            }
            Event::TrueFalseSelected { index, value } => {
                self.quiz.select_true_false(index, value);
                vec![]
            }
            Event::ShortAnswerEdited { index, text } => {
                self.quiz.edit_short_answer(index, text);
                vec![]
            }
            Event::QuizSubmitted => {
                let Some(story) = &self.story else {
                    return vec![];
                };
                match self.quiz.submit() {
                    Ok(answers) => {
                        self.busy = true;
                        vec![Command::SubmitQuiz {
                            questions: self.quiz.questions().to_vec(),
                            answers,
                            language: story.language,
                            grade_level: story.grade_level.clone(),
                        }]
                    }
                    Err(e) => {
                        self.raise_banner(e.to_string(), now_ms);
                        vec![]
                    }
                }
            }
            Event::GradeReceived { outcome } => {
                self.busy = false;
                if let (Some(user), Some(points)) = (self.user.as_mut(), outcome.total_points) {
                    user.total_points = points;
                }
                self.quiz.graded(outcome);
                vec![]
            }
            Event::GradeFailed { message } => {
                self.busy = false;
                self.quiz.grading_failed();
                self.raise_banner(message, now_ms);
                vec![]
            }
            Event::RetakeRequested => {
                let Some(story) = &self.story else {
                    return vec![];
                };
                match self.quiz.retake() {
                    Some(RetakeCommand::RequestNewQuiz) => {
                        self.busy = true;
                        vec![Command::FetchQuiz {
                            story: story.text.clone(),
                            language: story.language,
                        }]
                    }
                    Some(RetakeCommand::Reopened) | None => vec![],
                }
            }
            Event::QuizClosed => {
                if self.story.is_some() {
                    self.screen = Screen::Story;
                }
                vec![]
            }

            Event::AuthStatusReceived { user } => {
                self.user = user;
                if self.user.is_none() && self.screen == Screen::Account {
                    self.screen = Screen::Generation;
                }
                vec![]
            }
            Event::AccountOpened => {
                if self.user.is_some() {
                    self.screen = Screen::Account;
                }
                vec![]
            }
            Event::AccountClosed => {
                self.screen = if self.story.is_some() {
                    Screen::Story
                } else {
                    Screen::Generation
                };
                vec![]
            }

            Event::Tick => {
                if let Some(banner) = &self.banner {
                    if now_ms >= banner.expires_at_ms {
                        self.banner = None;
                    }
                }
                vec![]
            }
        }
    }

    fn raise_banner(&mut self, message: String, now_ms: u64) {
        self.banner = Some(Banner {
            message,
            expires_at_ms: now_ms + BANNER_DISMISS_MS,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_flow::{QuestionKind, QuizPhase};

    fn story_session() -> ReaderSession {
        let mut session = ReaderSession::default();
        session.apply(
            Event::GenerateRequested {
                language: Language::Spanish,
                grade_level: "3".to_string(),
            },
            0,
        );
        session.apply(
            Event::StoryReceived {
                story: "El pájaro voló sobre la casa.".to_string(),
                translations: HashMap::from([
                    ("pájaro".to_string(), "bird".to_string()),
                    ("casa".to_string(), "house".to_string()),
                ]),
            },
            10,
        );
        session
    }

    fn sample_questions() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion {
                question: "The bird flew over the house.".into(),
                kind: QuestionKind::TrueFalse {
                    correct_answer: "true".into(),
                },
            },
            QuizQuestion {
                question: "The story happens at night.".into(),
                kind: QuestionKind::TrueFalse {
                    correct_answer: "false".into(),
                },
            },
            QuizQuestion {
                question: "What did the bird fly over?".into(),
                kind: QuestionKind::ShortAnswer {
                    correct_answer: "the house".into(),
                },
            },
        ]
    }

    #[test]
    fn generate_emits_fetch_and_sets_busy() {
        let mut session = ReaderSession::default();
        let commands = session.apply(
            Event::GenerateRequested {
                language: Language::French,
                grade_level: "K".to_string(),
            },
            0,
        );
        assert_eq!(
            commands,
            [Command::FetchStory {
                language: Language::French,
                grade_level: "K".to_string()
            }]
        );
        assert!(session.busy);
        // A second press while busy does nothing.
        assert!(session
            .apply(
                Event::GenerateRequested {
                    language: Language::French,
                    grade_level: "K".to_string()
                },
                1
            )
            .is_empty());
    }

    #[test]
    fn story_arrival_moves_to_story_screen_with_seeded_cache() {
        let session = story_session();
        assert_eq!(session.screen, Screen::Story);
        assert!(!session.busy);
        assert_eq!(session.cache.get("pájaro"), Some("bird"));
        let story = session.story.as_ref().unwrap();
        assert_eq!(story.language, Language::Spanish);
        assert_eq!(story.grade_level, "3");
    }

    #[test]
    fn hover_hits_cache_without_fetching() {
        let mut session = story_session();
        let commands = session.apply(
            Event::WordHovered {
                word: "Casa".to_string(),
            },
            20,
        );
        assert_eq!(
            commands,
            [Command::ShowGloss {
                key: "casa".to_string(),
                gloss: "house".to_string()
            }]
        );
    }

    #[test]
    fn hover_miss_fetches_once_then_hits() {
        let mut session = story_session();
        let commands = session.apply(
            Event::WordHovered {
                word: "voló".to_string(),
            },
            20,
        );
        assert_eq!(
            commands,
            [Command::FetchTranslation {
                key: "voló".to_string(),
                language: Language::Spanish
            }]
        );
        // Re-hover while the fetch is in flight: nothing issued.
        assert!(session
            .apply(
                Event::WordHovered {
                    word: "voló".to_string()
                },
                21
            )
            .is_empty());
        session.apply(
            Event::TranslationReceived {
                key: "voló".to_string(),
                gloss: "flew".to_string(),
            },
            30,
        );
        let commands = session.apply(
            Event::WordHovered {
                word: "voló".to_string(),
            },
            40,
        );
        assert_eq!(
            commands,
            [Command::ShowGloss {
                key: "voló".to_string(),
                gloss: "flew".to_string()
            }]
        );
    }

    #[test]
    fn audio_fetches_once_then_toggles() {
        let mut session = story_session();
        let commands = session.apply(Event::AudioToggled, 50);
        assert!(matches!(commands[0], Command::FetchAudio { .. }));
        session.apply(Event::AudioReady, 60);
        assert_eq!(
            session.apply(Event::AudioToggled, 70),
            [Command::PauseAudio]
        );
        assert_eq!(session.apply(Event::AudioToggled, 80), [Command::PlayAudio]);
    }

    #[test]
    fn new_story_releases_audio_and_clears_cache() {
        let mut session = story_session();
        session.apply(Event::AudioToggled, 50);
        session.apply(Event::AudioReady, 60);
        let commands = session.apply(Event::NewStoryRequested, 70);
        assert!(commands.contains(&Command::ReleaseAudio));
        assert_eq!(session.screen, Screen::Generation);
        assert!(session.story.is_none());
        assert!(session.cache.is_empty());
    }

    #[test]
    fn incomplete_quiz_submission_raises_banner_and_sends_nothing() {
        let mut session = story_session();
        session.apply(Event::QuizRequested, 100);
        session.apply(
            Event::QuizReceived {
                questions: sample_questions(),
            },
            110,
        );
        session.apply(
            Event::TrueFalseSelected {
                index: 0,
                value: true,
            },
            120,
        );
        let commands = session.apply(Event::QuizSubmitted, 130);
        assert!(commands.is_empty());
        assert!(session.banner.is_some());
        assert_eq!(session.quiz.phase(), QuizPhase::Ready);
    }

    #[test]
    fn complete_quiz_submission_carries_wire_answers() {
        let mut session = story_session();
        session.apply(Event::QuizRequested, 100);
        session.apply(
            Event::QuizReceived {
                questions: sample_questions(),
            },
            110,
        );
        session.apply(
            Event::TrueFalseSelected {
                index: 0,
                value: true,
            },
            120,
        );
        session.apply(
            Event::TrueFalseSelected {
                index: 1,
                value: false,
            },
            121,
        );
        session.apply(
            Event::ShortAnswerEdited {
                index: 2,
                text: "the house".to_string(),
            },
            122,
        );
        let commands = session.apply(Event::QuizSubmitted, 130);
        match &commands[0] {
            Command::SubmitQuiz {
                answers,
                language,
                grade_level,
                ..
            } => {
                assert_eq!(answers, &["true", "false", "the house"]);
                assert_eq!(*language, Language::Spanish);
                assert_eq!(grade_level, "3");
            }
            other => panic!("expected SubmitQuiz, got {other:?}"),
        }
        assert!(session.busy);
    }

    #[test]
    fn grade_updates_user_point_total() {
        let mut session = story_session();
        session.apply(
            Event::AuthStatusReceived {
                user: Some(UserSnapshot {
                    email: "ana@example.com".into(),
                    name: "Ana".into(),
                    picture: None,
                    total_points: 40,
                }),
            },
            90,
        );
        session.apply(Event::QuizRequested, 100);
        session.apply(
            Event::QuizReceived {
                questions: sample_questions(),
            },
            110,
        );
        session.quiz.select_true_false(0, true);
        session.quiz.select_true_false(1, false);
        session.quiz.edit_short_answer(2, "the house".into());
        session.apply(Event::QuizSubmitted, 120);
        session.apply(
            Event::GradeReceived {
                outcome: GradeOutcome {
                    score: 3,
                    total: 3,
                    results: vec![],
                    total_points: Some(70),
                },
            },
            130,
        );
        assert_eq!(session.user.as_ref().unwrap().total_points, 70);
        assert_eq!(session.quiz.phase(), QuizPhase::Results);
    }

    #[test]
    fn reopening_quiz_does_not_regenerate() {
        let mut session = story_session();
        session.apply(Event::QuizRequested, 100);
        session.apply(
            Event::QuizReceived {
                questions: sample_questions(),
            },
            110,
        );
        session.apply(Event::QuizClosed, 120);
        assert_eq!(session.screen, Screen::Story);
        let commands = session.apply(Event::QuizRequested, 130);
        assert!(commands.is_empty());
        assert_eq!(session.screen, Screen::Quiz);
    }

    #[test]
    fn banner_auto_dismisses_after_five_seconds() {
        let mut session = ReaderSession::default();
        session.apply(
            Event::StoryFailed {
                message: "Sorry, there was an error generating your story.".into(),
            },
            1_000,
        );
        assert!(session.banner.is_some());
        session.apply(Event::Tick, 5_500);
        assert!(session.banner.is_some());
        session.apply(Event::Tick, 6_000);
        assert!(session.banner.is_none());
    }

    #[test]
    fn session_state_is_serializable() {
        let session = story_session();
        let json = serde_json::to_string(&session).unwrap();
        let back: ReaderSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.screen, Screen::Story);
        assert_eq!(back.story, session.story);
    }

    #[test]
    fn story_failed_requires_manual_retry() {
        let mut session = ReaderSession::default();
        session.apply(
            Event::GenerateRequested {
                language: Language::Spanish,
                grade_level: "2".to_string(),
            },
            0,
        );
        session.apply(
            Event::StoryFailed {
                message: "error".into(),
            },
            10,
        );
        assert!(!session.busy);
        assert_eq!(session.screen, Screen::Generation);
        // The user can trigger a fresh attempt.
        let commands = session.apply(
            Event::GenerateRequested {
                language: Language::Spanish,
                grade_level: "2".to_string(),
            },
            20,
        );
        assert_eq!(commands.len(), 1);
    }
}
