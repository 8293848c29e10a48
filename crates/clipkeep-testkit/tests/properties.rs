//! Property tests over the end-to-end insert paths.
//!
//! A small reference model replays each sample sequence with the specified
//! two-stage suppression rules; the real engine must agree with it for
//! every interleaving of watcher ticks and foreground saves.

use clipkeep_testkit::generators::{sample_sequence, tagged_sequence};
use clipkeep_testkit::{ScriptedClipboard, TestFixture};
use proptest::prelude::*;

/// Expected stored texts (oldest-first) for a pure watcher sequence.
fn model_watcher_only(samples: &[String]) -> Vec<String> {
    let mut last_seen: Option<String> = None;
    let mut stored: Vec<String> = Vec::new();

    for raw in samples {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if last_seen.as_deref() == Some(trimmed) {
            continue;
        }
        last_seen = Some(trimmed.to_owned());
        if stored.last().map(String::as_str) == Some(trimmed) {
            continue;
        }
        stored.push(trimmed.to_owned());
    }

    stored
}

proptest! {
    #[test]
    fn engine_agrees_with_reference_model(samples in sample_sequence(40)) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let fixture = TestFixture::new();
            fixture.run_samples(samples.clone()).await;

            let mut expected = model_watcher_only(&samples);
            expected.reverse(); // history reads newest-first
            prop_assert_eq!(fixture.texts().await, expected);
            Ok(())
        })?;
    }

    #[test]
    fn no_two_consecutive_entries_share_text(samples in tagged_sequence(40)) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let fixture = TestFixture::new();

            // Interleave both insert paths: a save happens in place of the
            // tick's clipboard change, and the tick still runs (observing
            // an empty clipboard), preserving one tick per sample.
            let mut script = ScriptedClipboard::new();
            for (text, is_save) in &samples {
                if *is_save {
                    script.push_empty();
                } else {
                    script.push_text(text.clone());
                }
            }
            let mut watcher = fixture.watcher(script);

            for (text, is_save) in &samples {
                if *is_save {
                    fixture.engine.save_to_history(text).await.unwrap();
                }
                watcher.tick().await;
            }

            let texts = fixture.texts().await;
            for pair in texts.windows(2) {
                prop_assert_ne!(&pair[0], &pair[1]);
            }
            for text in &texts {
                prop_assert!(!text.trim().is_empty());
                prop_assert_eq!(text.trim(), text.as_str());
            }
            Ok(())
        })?;
    }

    #[test]
    fn bound_holds_when_nothing_is_favorite(samples in sample_sequence(40)) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let fixture = TestFixture::with_max_entries(5);
            fixture.run_samples(samples).await;
            prop_assert!(fixture.texts().await.len() <= 5);
            Ok(())
        })?;
    }

    #[test]
    fn favorites_survive_any_flood(samples in sample_sequence(40)) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let fixture = TestFixture::with_max_entries(3);

            fixture.engine.save_to_history("pinned").await.unwrap();
            let id = fixture.engine.get_history().await.unwrap()[0].id;
            fixture.engine.toggle_favorite(id).await.unwrap();

            fixture.run_samples(samples).await;

            let history = fixture.engine.get_history().await.unwrap();
            let pinned = history.iter().find(|e| e.id == id);
            prop_assert!(pinned.is_some_and(|e| e.favorite && e.text == "pinned"));
            Ok(())
        })?;
    }
}
