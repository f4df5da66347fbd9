//! Profile enhancer: canned professional-profile blurbs per role.

#![allow(missing_docs)]

use serde::Serialize;

/// One role's profile template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileTemplate {
    pub headline: &'static str,
    pub about: &'static str,
    pub skills: &'static [&'static str],
}

static PROFILE_TEMPLATES: [(&str, ProfileTemplate); 3] = [
    (
        "developer",
        ProfileTemplate {
            headline: "Software Developer | Building Mobile & Web Solutions",
            about: "Motivated developer experienced in building responsive apps using modern stacks.",
            skills: &["Flutter", "Dart", "JavaScript", "Git", "REST APIs"],
        },
    ),
    (
        "data analyst",
        ProfileTemplate {
            headline: "Data Analyst | Turning Data into Insights",
            about: "Data-driven analyst skilled with SQL, Python, visualization tools.",
            skills: &["SQL", "Python", "Pandas", "Power BI", "Excel"],
        },
    ),
    (
        "designer",
        ProfileTemplate {
            headline: "UI/UX Designer | Crafting Intuitive Experiences",
            about: "Creative designer focused on user-centered interfaces.",
            skills: &["Figma", "Prototyping", "User Research"],
        },
    ),
];

/// Lookup interface over the built-in role→template table.
#[derive(Debug, Clone, Copy)]
pub struct TemplateTable {
    entries: &'static [(&'static str, ProfileTemplate)],
}

impl Default for TemplateTable {
    fn default() -> Self {
        Self::built_in()
    }
}

impl TemplateTable {
    /// The built-in table.
    #[must_use]
    pub fn built_in() -> Self {
        Self {
            entries: &PROFILE_TEMPLATES,
        }
    }

    /// Known role keys in table order.
    pub fn roles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(role, _)| *role)
    }

    /// Template for a role key; unknown roles miss rather than fail.
    #[must_use]
    pub fn template(&self, role: &str) -> Option<&'static ProfileTemplate> {
        self.entries
            .iter()
            .find(|(key, _)| *key == role)
            .map(|(_, tpl)| tpl)
    }
}

/// Copy-ready multi-line export of a template.
#[must_use]
pub fn export_text(template: &ProfileTemplate) -> String {
    format!(
        "{}\n\n{}\n\nSkills: {}",
        template.headline,
        template.about,
        template.skills.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_role_resolves() {
        let table = TemplateTable::built_in();
        let tpl = table.template("designer").expect("known role");
        assert_eq!(tpl.headline, "UI/UX Designer | Crafting Intuitive Experiences");
    }

    #[test]
    fn unknown_role_misses() {
        assert!(TemplateTable::built_in().template("astronaut").is_none());
    }

    #[test]
    fn roles_preserve_table_order() {
        let roles: Vec<&str> = TemplateTable::built_in().roles().collect();
        assert_eq!(roles, vec!["developer", "data analyst", "designer"]);
    }

    #[test]
    fn export_joins_headline_about_and_skills() {
        let tpl = TemplateTable::built_in()
            .template("data analyst")
            .expect("known role");
        let text = export_text(tpl);
        assert_eq!(
            text,
            "Data Analyst | Turning Data into Insights\n\nData-driven analyst skilled with SQL, Python, visualization tools.\n\nSkills: SQL, Python, Pandas, Power BI, Excel"
        );
    }
}
