//! Role keyword finder: static role→keywords table with fuzzy fallback.

#![allow(missing_docs)]

use serde::Serialize;

/// Keyword suggestions for one role, grouped the way recruiters read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleKeywords {
    pub technical: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub soft: &'static [&'static str],
}

/// Table order is also the fuzzy-match precedence order.
static JOB_KEYWORDS: [(&str, RoleKeywords); 4] = [
    (
        "software engineer",
        RoleKeywords {
            technical: &["Java", "Dart", "Flutter", "Git", "REST API", "SQL", "OOP"],
            tools: &["Android Studio", "VS Code", "Postman"],
            soft: &["Problem Solving", "Teamwork", "Communication"],
        },
    ),
    (
        "data analyst",
        RoleKeywords {
            technical: &["SQL", "Excel", "Python", "Pandas", "Power BI"],
            tools: &["Tableau", "Power BI"],
            soft: &["Critical Thinking", "Attention to Detail"],
        },
    ),
    (
        "ui ux designer",
        RoleKeywords {
            technical: &["Figma", "Adobe XD", "Prototyping", "Wireframing"],
            tools: &["Figma", "Sketch"],
            soft: &["Creativity", "User Empathy"],
        },
    ),
    (
        "product manager",
        RoleKeywords {
            technical: &["Roadmap Planning", "A/B Testing", "Metrics Analysis"],
            tools: &["Jira", "Trello", "Notion"],
            soft: &["Stakeholder Management", "Communication"],
        },
    ),
];

/// Lookup interface over the built-in role→keywords table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    entries: &'static [(&'static str, RoleKeywords)],
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::built_in()
    }
}

impl KeywordTable {
    /// The built-in table.
    #[must_use]
    pub fn built_in() -> Self {
        Self {
            entries: &JOB_KEYWORDS,
        }
    }

    /// Known role names in table order.
    pub fn roles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(role, _)| *role)
    }

    /// Resolve a job-title query to a role entry.
    ///
    /// The query is trimmed and lower-cased. Empty queries and misses both
    /// yield `None`; resolution tries an exact key match first, then the
    /// first role whose name contains the query or whose name's first word
    /// appears in the query.
    #[must_use]
    pub fn lookup(&self, query: &str) -> Option<(&'static str, &RoleKeywords)> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return None;
        }

        if let Some((role, keywords)) = self.entries.iter().find(|(role, _)| *role == q) {
            return Some((role, keywords));
        }

        self.entries
            .iter()
            .find(|(role, _)| {
                role.contains(&q)
                    || role
                        .split(' ')
                        .next()
                        .is_some_and(|first| q.contains(first))
            })
            .map(|(role, keywords)| (*role, keywords))
    }
}
