//! Interview drill session: random draws, favorite toggling, self-rating.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::errors::Result;
use crate::trainer::favorites::FavoritesStore;
use crate::trainer::questions::QuestionBank;

/// Placeholder shown when a category has no questions to draw from.
pub const NO_QUESTIONS_SENTINEL: &str = "No questions found for this category.";

/// Result of one question draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnQuestion {
    /// The drawn question text (or [`NO_QUESTIONS_SENTINEL`]).
    pub text: String,
    /// Whether the drawn question is already in the favorites list.
    pub is_favorite: bool,
}

/// Result of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteUpdate {
    /// Membership state after the toggle.
    pub is_favorite: bool,
    /// Favorites count after the toggle.
    pub count: usize,
}

/// Self-rating levels for a practiced answer.
///
/// A pure presentation map: rating never changes session state, it only
/// selects a feedback line for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    /// Level 1.
    Poor,
    /// Level 2.
    Average,
    /// Level 3.
    Good,
}

impl Rating {
    /// Map a numeric level (1..=3) to a rating.
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Poor),
            2 => Some(Self::Average),
            3 => Some(Self::Good),
            _ => None,
        }
    }

    /// Fixed feedback line for this rating.
    #[must_use]
    pub const fn feedback(self) -> &'static str {
        match self {
            Self::Poor => "Poor — practice more.",
            Self::Average => "Average — good attempt.",
            Self::Good => "Good — strong answer.",
        }
    }
}

/// One interview drill session.
///
/// States are Idle (no question drawn yet) and QuestionShown. Favorites are
/// loaded from the store once at construction and the whole list is
/// rewritten on every toggle. The RNG is seedable so tests can assert
/// deterministic draws.
#[derive(Debug)]
pub struct InterviewSession {
    store: FavoritesStore,
    favorites: Vec<String>,
    current: Option<String>,
    rng: StdRng,
}

impl InterviewSession {
    /// Open a session with an OS-seeded RNG.
    #[must_use]
    pub fn new(store: FavoritesStore) -> Self {
        Self::with_rng(store, StdRng::from_os_rng())
    }

    /// Open a session with a fixed seed for deterministic draws.
    #[must_use]
    pub fn with_seed(store: FavoritesStore, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: FavoritesStore, rng: StdRng) -> Self {
        let mut favorites = store.load();
        dedupe_preserving_order(&mut favorites);
        Self {
            store,
            favorites,
            current: None,
            rng,
        }
    }

    /// Draw the next question from a category, uniformly at random with
    /// replacement.
    ///
    /// An unrecognized category (or an empty list) yields the sentinel text
    /// instead of failing; the sentinel still becomes the current question,
    /// matching the original behavior.
    pub fn next_question(&mut self, category: &str) -> DrawnQuestion {
        let list = QuestionBank::questions(category);
        let text = if list.is_empty() {
            NO_QUESTIONS_SENTINEL.to_string()
        } else {
            list[self.rng.random_range(0..list.len())].to_string()
        };
        let is_favorite = self.is_favorite(&text);
        self.current = Some(text.clone());
        DrawnQuestion { text, is_favorite }
    }

    /// Toggle favorite membership of the current question and persist the
    /// full list synchronously.
    ///
    /// Returns `Ok(None)` without touching anything when no question has
    /// been drawn yet.
    pub fn toggle_favorite(&mut self) -> Result<Option<FavoriteUpdate>> {
        let Some(current) = self.current.clone() else {
            return Ok(None);
        };

        let is_favorite = if let Some(idx) = self.favorites.iter().position(|q| *q == current) {
            self.favorites.remove(idx);
            false
        } else {
            self.favorites.push(current);
            true
        };

        self.store.store(&self.favorites)?;
        Ok(Some(FavoriteUpdate {
            is_favorite,
            count: self.favorites.len(),
        }))
    }

    /// The question currently shown, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Membership test by exact string equality.
    #[must_use]
    pub fn is_favorite(&self, question: &str) -> bool {
        self.favorites.iter().any(|q| q == question)
    }

    /// Current favorites, insertion-ordered.
    #[must_use]
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }
}

/// A question appears at most once in the favorites list; enforce that
/// invariant over whatever the store handed back.
fn dedupe_preserving_order(favorites: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    favorites.retain(|q| seen.insert(q.clone()));
}
