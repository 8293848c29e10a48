//! End-to-end scenarios over the real SQLite store.
//!
//! These pin the observable behavior of the engine: eviction order,
//! favorite exemption, duplicate suppression across both insert paths,
//! and the bridge operations the display surface relies on.

use std::collections::VecDeque;
use std::sync::Arc;

use clipkeep::clipboard::{ClipboardSource, Result as ClipResult};
use clipkeep::{EngineConfig, HistoryEngine, RecordOutcome, SqliteStore, Store, Watcher};

/// Replays a scripted sequence of clipboard samples, one per tick.
struct ScriptedClipboard(VecDeque<Option<String>>);

impl ScriptedClipboard {
    fn new<'a>(samples: impl IntoIterator<Item = &'a str>) -> Self {
        Self(samples.into_iter().map(|s| Some(s.to_owned())).collect())
    }
}

impl ClipboardSource for ScriptedClipboard {
    fn read_text(&mut self) -> ClipResult<Option<String>> {
        Ok(self.0.pop_front().flatten())
    }
}

fn sqlite_engine(max: usize) -> Arc<HistoryEngine<SqliteStore>> {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let store = SqliteStore::open_memory().unwrap();
    Arc::new(HistoryEngine::new(
        store,
        EngineConfig::default().with_max_entries(max),
    ))
}

async fn texts<S: Store>(engine: &HistoryEngine<S>) -> Vec<String> {
    engine
        .get_history()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.text)
        .collect()
}

#[tokio::test]
async fn overflow_evicts_oldest_when_nothing_is_favorite() {
    let engine = sqlite_engine(3);

    for text in ["a", "b", "c", "d"] {
        engine.save_to_history(text).await.unwrap();
    }

    // "a" evicted, the three newest retained.
    assert_eq!(texts(&engine).await, vec!["d", "c", "b"]);
}

#[tokio::test]
async fn favorite_is_exempt_from_eviction() {
    let engine = sqlite_engine(3);

    engine.save_to_history("a").await.unwrap();
    let a = engine.get_history().await.unwrap()[0].id;
    engine.toggle_favorite(a).await.unwrap();

    for text in ["b", "c", "d"] {
        engine.save_to_history(text).await.unwrap();
    }

    // Four entries: "a" is protected, so the store sits above the bound.
    assert_eq!(texts(&engine).await, vec!["d", "c", "b", "a"]);
}

#[tokio::test]
async fn sampled_sequence_keeps_nonadjacent_repeats() {
    let engine = sqlite_engine(100);
    let mut watcher = Watcher::new(
        Arc::clone(&engine),
        ScriptedClipboard::new(["x", "x", "y", "y", "x"]),
    );

    for _ in 0..5 {
        watcher.tick().await;
    }

    // Stored order was x, y, x; listed newest-first.
    assert_eq!(texts(&engine).await, vec!["x", "y", "x"]);
}

#[tokio::test]
async fn tick_after_foreground_save_does_not_duplicate() {
    let engine = sqlite_engine(100);
    engine.save_to_history("z").await.unwrap();

    let mut watcher = Watcher::new(Arc::clone(&engine), ScriptedClipboard::new(["z"]));
    watcher.tick().await;

    assert_eq!(texts(&engine).await, vec!["z"]);
}

#[tokio::test]
async fn whitespace_save_leaves_count_unchanged() {
    let engine = sqlite_engine(100);
    engine.save_to_history("real").await.unwrap();

    engine.save_to_history("").await.unwrap();
    engine.save_to_history(" \t\n ").await.unwrap();

    assert_eq!(engine.get_history().await.unwrap().len(), 1);
}

#[tokio::test]
async fn toggle_twice_restores_original_state() {
    let engine = sqlite_engine(100);
    engine.save_to_history("entry").await.unwrap();
    let id = engine.get_history().await.unwrap()[0].id;

    engine.toggle_favorite(id).await.unwrap();
    assert!(engine.get_history().await.unwrap()[0].favorite);

    engine.toggle_favorite(id).await.unwrap();
    assert!(!engine.get_history().await.unwrap()[0].favorite);
}

#[tokio::test]
async fn clear_non_favorites_leaves_only_favorites() {
    let engine = sqlite_engine(100);

    for text in ["keep1", "drop1", "keep2", "drop2"] {
        engine.save_to_history(text).await.unwrap();
    }
    for entry in engine.get_history().await.unwrap() {
        if entry.text.starts_with("keep") {
            engine.toggle_favorite(entry.id).await.unwrap();
        }
    }

    engine.clear_non_favorites().await.unwrap();

    let history = engine.get_history().await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|e| e.favorite));
}

#[tokio::test]
async fn clear_history_removes_favorites_too() {
    let engine = sqlite_engine(100);
    engine.save_to_history("fav").await.unwrap();
    let id = engine.get_history().await.unwrap()[0].id;
    engine.toggle_favorite(id).await.unwrap();
    engine.save_to_history("normal").await.unwrap();

    engine.clear_history().await.unwrap();
    assert!(engine.get_history().await.unwrap().is_empty());
}

#[tokio::test]
async fn watcher_notifies_subscriber_with_persisted_text() {
    let engine = sqlite_engine(100);
    let mut changes = engine.subscribe();

    let mut watcher = Watcher::new(Arc::clone(&engine), ScriptedClipboard::new(["hello"]));
    watcher.tick().await;

    assert_eq!(changes.recv().await.unwrap(), "hello");
}

#[tokio::test]
async fn record_reports_outcome_per_path() {
    let engine = sqlite_engine(100);

    assert!(matches!(
        engine.record("fresh").await.unwrap(),
        RecordOutcome::Recorded(_)
    ));
    assert_eq!(
        engine.record("fresh").await.unwrap(),
        RecordOutcome::DuplicateOfLatest
    );
    assert_eq!(engine.record("  ").await.unwrap(), RecordOutcome::Empty);
}

#[tokio::test]
async fn history_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.sqlite");

    {
        let engine = Arc::new(HistoryEngine::new(
            SqliteStore::open(&path).unwrap(),
            EngineConfig::default(),
        ));
        engine.save_to_history("persisted").await.unwrap();
        let id = engine.get_history().await.unwrap()[0].id;
        engine.toggle_favorite(id).await.unwrap();
    }

    let engine = Arc::new(HistoryEngine::new(
        SqliteStore::open(&path).unwrap(),
        EngineConfig::default(),
    ));
    let history = engine.get_history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].text, "persisted");
    assert!(history[0].favorite);
}
