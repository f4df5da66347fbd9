//! Rubric scoring engine: four section-presence checks plus a length penalty.
//!
//! The rubric is fixed: each of four required sections is worth 25 points,
//! detected by case-insensitive substring match against a small set of
//! trigger phrases. Resumes under 150 words lose 10 points (floored at 0).
//! The section checks and the length penalty are independent rule passes, so
//! a short resume with all four sections still scores 90.

use serde::Serialize;

use crate::text::{count_words, escape_html};

/// Minimum word count before the short-resume penalty applies.
pub const SHORT_RESUME_WORD_FLOOR: usize = 150;

const SECTION_AWARD: i32 = 25;
const SHORT_RESUME_PENALTY: i32 = 10;
const SHORT_RESUME_MESSAGE: &str = "Consider adding more details (resume short)";

/// A required section and the trigger phrases that evidence it.
struct SectionRule {
    message: &'static str,
    triggers: &'static [&'static str],
}

/// Checked in this order; miss messages are appended in the same order.
const SECTION_RULES: [SectionRule; 4] = [
    SectionRule {
        message: "Experience section",
        triggers: &["experience", "work experience"],
    },
    SectionRule {
        message: "Education section",
        triggers: &["education"],
    },
    SectionRule {
        message: "Skills section",
        triggers: &["skills", "technical skills"],
    },
    SectionRule {
        message: "Projects section",
        triggers: &["projects", "academic projects"],
    },
];

/// Result of one analysis pass. Produced fresh on every call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    /// Final score in 0..=100.
    pub score: u8,
    /// Human-readable suggestions: missed sections in rubric order, then the
    /// short-resume message when it applies.
    pub missing: Vec<String>,
    /// Word count of the raw input.
    pub word_count: usize,
}

/// Score resume text against the fixed rubric.
///
/// Total over all inputs: empty or arbitrary text yields a well-formed
/// report, never an error.
#[must_use]
pub fn analyze(text: &str) -> ScoreReport {
    let lower = text.to_lowercase();
    let mut score: i32 = 0;
    let mut missing = Vec::new();

    for rule in &SECTION_RULES {
        if rule.triggers.iter().any(|t| lower.contains(t)) {
            score += SECTION_AWARD;
        } else {
            missing.push(rule.message.to_string());
        }
    }

    let word_count = count_words(text);
    if word_count < SHORT_RESUME_WORD_FLOOR {
        score = (score - SHORT_RESUME_PENALTY).max(0);
        missing.push(SHORT_RESUME_MESSAGE.to_string());
    }

    ScoreReport {
        score: u8::try_from(score).unwrap_or(0),
        missing,
        word_count,
    }
}

/// Render a report as an HTML fragment suitable for embedding.
#[must_use]
pub fn report_html(report: &ScoreReport) -> String {
    let mut html = format!(
        "<div class=\"score\">Score: {}%</div>\n<div class=\"muted\">Detected words: {}</div>\n<div class=\"heading\">Suggestions</div>\n",
        report.score, report.word_count
    );
    if report.missing.is_empty() {
        html.push_str(
            "<div class=\"muted\">All key sections found — consider quantifying achievements.</div>",
        );
    } else {
        html.push_str("<ul class=\"muted\">");
        for item in &report.missing {
            html.push_str("<li>");
            html.push_str(&escape_html(item));
            html.push_str("</li>");
        }
        html.push_str("</ul>");
    }
    html
}
