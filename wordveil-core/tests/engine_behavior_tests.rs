// wordveil-core/tests/engine_behavior_tests.rs
//! Behavior tests for the trie engine through the public `FilterEngine`
//! trait, covering the externally observable rewrite contract.

use anyhow::Result;
use test_log::test; // For integrating with `env_logger` in tests

use wordveil_core::{FilterConfig, FilterEngine, TrieEngine};

fn engine_for(keywords: &[&str]) -> Result<TrieEngine> {
    let config = FilterConfig {
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        ..FilterConfig::default()
    };
    Ok(TrieEngine::new(config)?)
}

#[test]
fn empty_dictionary_is_identity_for_all_inputs() -> Result<()> {
    let engine = engine_for(&[])?;
    for text in ["", "plain text", "a-b-c!", "开票hshvse赌博", "***"] {
        let (filtered, summary) = engine.filter(text, "t")?;
        assert_eq!(filtered, text);
        assert!(summary.is_empty());
    }
    Ok(())
}

#[test]
fn non_matching_text_passes_through() -> Result<()> {
    let engine = engine_for(&["abc"])?;
    for text in ["abd", "ab", "xyz", "a b d c"] {
        let (filtered, _) = engine.filter(text, "t")?;
        assert_eq!(filtered, text);
    }
    Ok(())
}

#[test]
fn exact_match_is_masked() -> Result<()> {
    let engine = engine_for(&["abc"])?;
    let (filtered, summary) = engine.filter("abc", "t")?;
    assert_eq!(filtered, "***");
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].occurrences, 1);
    Ok(())
}

#[test]
fn greedy_leftmost_match_does_not_reuse_consumed_input() -> Result<()> {
    let engine = engine_for(&["ab", "bc"])?;
    let (filtered, _) = engine.filter("abc", "t")?;
    assert_eq!(filtered, "***c");
    Ok(())
}

#[test]
fn symbols_are_transparent_inside_matches() -> Result<()> {
    let engine = engine_for(&["abc"])?;
    let (filtered, _) = engine.filter("a-b-c", "t")?;
    assert_eq!(filtered, "***");
    Ok(())
}

#[test]
fn cjk_content_is_never_elided() -> Result<()> {
    let engine = engine_for(&["赌博"])?;
    let (filtered, _) = engine.filter("开票hshvse赌博", "t")?;
    assert_eq!(filtered, "开票hshvse***");
    Ok(())
}

#[test]
fn malformed_bytes_survive_with_surrounding_matches() -> Result<()> {
    let engine = engine_for(&["abc"])?;
    let (filtered, summary) = engine.filter_bytes(b"ok \x80\x81 abc done", "t")?;
    assert_eq!(filtered, b"ok \x80\x81 *** done".to_vec());
    assert_eq!(summary.len(), 1);
    Ok(())
}

#[test]
fn filtering_is_idempotent_when_mask_is_not_matchable() -> Result<()> {
    let engine = engine_for(&["abc", "赌博"])?;
    for text in ["abc", "开票赌博", "a-b-c and abc", "untouched"] {
        let (once, _) = engine.filter(text, "t")?;
        let (twice, _) = engine.filter(&once, "t")?;
        assert_eq!(twice, once);
    }
    Ok(())
}

#[test]
fn analyze_bytes_reports_what_filter_bytes_would_mask() -> Result<()> {
    let engine = engine_for(&["abc"])?;

    // The raw byte kills the open candidate in both paths; neither side
    // may report a match the other would not mask.
    let stats = engine.analyze_bytes_for_stats(b"a\xFFbc", "t")?;
    let (filtered, summary) = engine.filter_bytes(b"a\xFFbc", "t")?;
    assert!(stats.is_empty());
    assert!(summary.is_empty());
    assert_eq!(filtered, b"\xFFbc".to_vec());

    // Matches around the bad byte still count identically.
    let stats = engine.analyze_bytes_for_stats(b"abc \xFF abc", "t")?;
    let (_, summary) = engine.filter_bytes(b"abc \xFF abc", "t")?;
    assert_eq!(stats, summary);
    assert_eq!(stats[0].occurrences, 2);
    Ok(())
}

#[test]
fn analyze_for_stats_reports_without_rewriting() -> Result<()> {
    let engine = engine_for(&["abc"])?;
    let summary = engine.analyze_for_stats("abc and a-b-c", "t")?;
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].occurrences, 2);
    assert_eq!(
        summary[0].original_texts,
        vec!["abc".to_string(), "a-b-c".to_string()]
    );
    Ok(())
}

#[test]
fn concurrent_filters_share_one_automaton() -> Result<()> {
    use std::sync::Arc;
    use std::thread;

    let engine = Arc::new(engine_for(&["abc"])?);
    let mut handles = Vec::new();
    for _ in 0..8 {
        let engine = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            let (filtered, _) = engine.filter("x abc y", "t").unwrap();
            assert_eq!(filtered, "x *** y");
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    Ok(())
}
