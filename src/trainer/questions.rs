//! Baked-in interview question reference data, keyed by category.

static HR_QUESTIONS: [&str; 3] = [
    "Tell me about yourself.",
    "Why do you want to work here?",
    "Where do you see yourself in 5 years?",
];

static TECHNICAL_QUESTIONS: [&str; 3] = [
    "Explain the difference between REST and SOAP.",
    "What is OOP? Provide examples.",
    "How do you optimize SQL queries?",
];

static BEHAVIORAL_QUESTIONS: [&str; 2] = [
    "Describe a time you faced a conflict in a team.",
    "Tell about a situation where you had to learn something quickly.",
];

/// Immutable category→questions table.
///
/// Questions have no identity beyond their text; favorites membership and
/// equality are both by string content.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionBank;

impl QuestionBank {
    /// Category keys in presentation order.
    pub const CATEGORIES: [&'static str; 3] = ["hr", "technical", "behavioral"];

    /// Questions for a category key; unknown keys yield an empty slice.
    #[must_use]
    pub fn questions(category: &str) -> &'static [&'static str] {
        match category {
            "hr" => &HR_QUESTIONS,
            "technical" => &TECHNICAL_QUESTIONS,
            "behavioral" => &BEHAVIORAL_QUESTIONS,
            _ => &[],
        }
    }

    /// Whether a category key is recognized.
    #[must_use]
    pub fn is_known(category: &str) -> bool {
        Self::CATEGORIES.contains(&category)
    }
}
