/*!
 * Tests for merging banner rows that share a time window
 */

use std::collections::HashSet;
use gacha_history::banner::merge_by_time;
use gacha_history::site::VersionPolicy;
use crate::common::character_row;

fn title_set<'a, I: IntoIterator<Item = &'a String>>(titles: I) -> HashSet<String> {
    titles.into_iter().cloned().collect()
}

/// Two rows with the same window: tier5 {A,B} and {B,C} merge to {A,B,C}
#[test]
fn test_mergeByTime_withOverlappingTitles_shouldUnionSets() {
    let rows = vec![
        character_row("2025/01/01", "2025/01/21", "5.3.1", &["A", "B"], &["x"]),
        character_row("2025/01/01", "2025/01/21", "5.3.1", &["B", "C"], &["y"]),
    ];

    let merged = merge_by_time(&rows, VersionPolicy::KeepFirst);

    assert_eq!(merged.len(), 1);
    let expected: HashSet<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    assert_eq!(title_set(merged[0].tier5.iter()), expected);
    assert_eq!(merged[0].tier5.len(), 3);
    assert_eq!(title_set(merged[0].tier4.iter()).len(), 2);
}

#[test]
fn test_mergeByTime_withDistinctStarts_shouldNotMerge() {
    let rows = vec![
        character_row("版本更新后", "2025/02/01", "3.1.1", &["X"], &[]),
        character_row("2025/01/01", "2025/02/01", "3.1.1", &["X"], &["Y"]),
    ];

    let merged = merge_by_time(&rows, VersionPolicy::KeepFirst);

    assert_eq!(merged.len(), 2);
}

#[test]
fn test_mergeByTime_shouldKeepFirstAppearanceOrder() {
    let rows = vec![
        character_row("c", "d", "2", &["C"], &[]),
        character_row("a", "b", "1", &["A"], &[]),
        character_row("c", "d", "2", &["C2"], &[]),
        character_row("e", "f", "3", &["E"], &[]),
    ];

    let merged = merge_by_time(&rows, VersionPolicy::KeepFirst);
    let starts: Vec<&str> = merged.iter().map(|m| m.start_text.as_str()).collect();

    assert_eq!(starts, vec!["c", "a", "e"]);
    assert_eq!(merged[0].tier5.clone().into_vec(), vec!["C", "C2"]);
}

#[test]
fn test_mergeByTime_onMergedList_shouldBeIdempotent() {
    let rows = vec![
        character_row("a", "b", "1.0", &["A", "B"], &["x"]),
        character_row("a", "b", "1.0", &["C"], &["y"]),
        character_row("c", "d", "1.1", &["D"], &["z"]),
    ];
    let first = merge_by_time(&rows, VersionPolicy::KeepFirst);

    let replayed: Vec<_> = first
        .iter()
        .map(|m| {
            let five: Vec<&str> = m.tier5.iter().map(|s| s.as_str()).collect();
            let four: Vec<&str> = m.tier4.iter().map(|s| s.as_str()).collect();
            character_row(&m.start_text, &m.end_text, &m.version, &five, &four)
        })
        .collect();
    let second = merge_by_time(&replayed, VersionPolicy::KeepFirst);

    assert_eq!(second.len(), first.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.start_text, b.start_text);
        assert_eq!(a.end_text, b.end_text);
        assert_eq!(a.version, b.version);
        assert_eq!(title_set(a.tier5.iter()), title_set(b.tier5.iter()));
        assert_eq!(title_set(a.tier4.iter()), title_set(b.tier4.iter()));
    }
}

#[test]
fn test_mergeByTime_withKeepFirst_shouldIgnoreLaterVersions() {
    let rows = vec![
        character_row("a", "b", "1.0.1", &[], &[]),
        character_row("a", "b", "1.0.2", &[], &[]),
    ];

    assert_eq!(merge_by_time(&rows, VersionPolicy::KeepFirst)[0].version, "1.0.1");
}

#[test]
fn test_mergeByTime_withJoinAll_shouldJoinEveryVersionSeen() {
    let rows = vec![
        character_row("a", "b", "1.0.1", &[], &[]),
        character_row("a", "b", "1.0.1", &[], &[]),
        character_row("a", "b", "1.0.2", &[], &[]),
    ];

    assert_eq!(
        merge_by_time(&rows, VersionPolicy::JoinAll)[0].version,
        "1.0.1 / 1.0.1 / 1.0.2"
    );
}

#[test]
fn test_mergeByTime_withEmptyInput_shouldReturnEmpty() {
    assert!(merge_by_time(&[], VersionPolicy::JoinAll).is_empty());
}
