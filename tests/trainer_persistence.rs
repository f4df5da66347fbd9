//! Favorites persistence end to end: library sessions and the real binary
//! sharing one store across restarts.

mod common;

use careercraft::trainer::favorites::FavoritesStore;
use careercraft::trainer::questions::QuestionBank;
use careercraft::trainer::session::InterviewSession;
use common::{favorites_path, run_ccraft};
use serde_json::Value;

#[test]
fn favorite_survives_session_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = favorites_path(dir.path());

    let question = {
        let mut session = InterviewSession::with_seed(FavoritesStore::new(path.clone()), 99);
        let drawn = session.next_question("technical");
        session
            .toggle_favorite()
            .expect("toggle should succeed")
            .expect("question shown");
        drawn.text
    };

    let restarted = InterviewSession::new(FavoritesStore::new(path));
    assert!(restarted.is_favorite(&question));
    assert_eq!(restarted.favorites().len(), 1);
}

#[test]
fn toggle_through_binary_is_visible_to_favorites_command() {
    let dir = tempfile::tempdir().expect("tempdir");

    // Draw one question, favorite it, quit the drill loop.
    let drill = run_ccraft(dir.path(), &["drill", "hr", "--seed", "5"], Some("f\nq\n"));
    assert!(drill.success, "stderr: {}", drill.stderr);
    assert!(drill.stdout.contains("Added to favorites (1 total)"), "{}", drill.stdout);

    let favorites = run_ccraft(dir.path(), &["--json", "favorites"], None);
    assert!(favorites.success, "stderr: {}", favorites.stderr);
    let parsed: Value = serde_json::from_str(&favorites.stdout).expect("valid JSON");
    assert_eq!(parsed["count"], 1);
    let stored = parsed["favorites"][0].as_str().expect("stored question");
    assert!(
        QuestionBank::questions("hr").contains(&stored),
        "stored favorite {stored:?} not an hr question"
    );
}

#[test]
fn double_toggle_through_binary_leaves_store_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let drill = run_ccraft(dir.path(), &["drill", "hr", "--seed", "5"], Some("f\nf\nq\n"));
    assert!(drill.success, "stderr: {}", drill.stderr);
    assert!(drill.stdout.contains("Removed from favorites (0 total)"), "{}", drill.stdout);

    let favorites = run_ccraft(dir.path(), &["--json", "favorites"], None);
    let parsed: Value = serde_json::from_str(&favorites.stdout).expect("valid JSON");
    assert_eq!(parsed["count"], 0);
}

#[test]
fn corrupt_store_is_recovered_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(favorites_path(dir.path()), "][ not json").expect("write corrupt store");

    let favorites = run_ccraft(dir.path(), &["--json", "favorites"], None);
    assert!(favorites.success, "stderr: {}", favorites.stderr);
    let parsed: Value = serde_json::from_str(&favorites.stdout).expect("valid JSON");
    assert_eq!(parsed["count"], 0);

    // A session over the same corrupt store still works and can persist.
    let drill = run_ccraft(dir.path(), &["drill", "behavioral"], Some("f\nq\n"));
    assert!(drill.success, "stderr: {}", drill.stderr);
    assert!(drill.stdout.contains("Added to favorites (1 total)"), "{}", drill.stdout);
}

#[test]
fn rating_in_drill_shows_feedback_and_keeps_question() {
    let dir = tempfile::tempdir().expect("tempdir");
    let drill = run_ccraft(dir.path(), &["drill", "hr", "--seed", "5"], Some("2\nq\n"));
    assert!(drill.success, "stderr: {}", drill.stderr);
    assert!(
        drill.stdout.contains("(You rated: Average — good attempt.)"),
        "{}",
        drill.stdout
    );
}
