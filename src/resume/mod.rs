//! Resume analyzer: rubric scoring and report rendering.

pub mod scorer;
