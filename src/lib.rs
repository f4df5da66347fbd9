#![forbid(unsafe_code)]

//! CareerCraft (ccraft) — local career-preparation toolkit.
//!
//! Four tools behind one CLI:
//! 1. **Resume analyzer** — rubric scoring of free-text resume content
//! 2. **Keyword finder** — role-specific keyword suggestions for ATS matching
//! 3. **Interview trainer** — random question drills with persisted favorites
//! 4. **Profile enhancer** — copy-ready professional profile blurbs
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use careercraft::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use careercraft::resume::scorer::analyze;
//! use careercraft::trainer::session::InterviewSession;
//! ```

pub mod prelude;

pub mod core;
pub mod keywords;
pub mod logger;
pub mod profile;
pub mod resume;
pub mod text;
pub mod trainer;
