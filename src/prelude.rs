//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use careercraft::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{CcError, Result};

// Resume
pub use crate::resume::scorer::{ScoreReport, analyze, report_html};

// Keywords
pub use crate::keywords::{KeywordTable, RoleKeywords};

// Trainer
pub use crate::trainer::favorites::FavoritesStore;
pub use crate::trainer::questions::QuestionBank;
pub use crate::trainer::session::{
    DrawnQuestion, FavoriteUpdate, InterviewSession, NO_QUESTIONS_SENTINEL, Rating,
};

// Profile
pub use crate::profile::{ProfileTemplate, TemplateTable};
