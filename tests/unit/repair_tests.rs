/*!
 * Tests for ambiguous start repair
 */

use gacha_history::banner::{fix_ambiguous_starts, MergedRecord, TitleSet};
use gacha_history::site::Site;

fn merged(start: &str, end: &str) -> MergedRecord {
    MergedRecord {
        start_text: start.to_string(),
        end_text: end.to_string(),
        version: "1.0".to_string(),
        tier5: TitleSet::new(),
        tier4: TitleSet::new(),
    }
}

fn starts(records: &[MergedRecord]) -> Vec<&str> {
    records.iter().map(|r| r.start_text.as_str()).collect()
}

#[test]
fn test_fixAmbiguousStarts_withDatedNeighbor_shouldStartNextDayAtTen() {
    let mut records = vec![
        merged("版本更新后", "2025/01/31 17:59"),
        merged("2025/01/01", "2025/01/10"),
    ];

    fix_ambiguous_starts(&mut records, Site::Genshin);

    assert_eq!(records[0].start_text, "2025/01/11 10:00:00");
}

#[test]
fn test_fixAmbiguousStarts_withSingleRecord_shouldUseFallbackEpoch() {
    let mut genshin = vec![merged("版本更新后", "2020/10/18 17:59")];
    let mut star_rail = vec![merged("版本更新后", "2023/05/17 17:59")];

    fix_ambiguous_starts(&mut genshin, Site::Genshin);
    fix_ambiguous_starts(&mut star_rail, Site::StarRail);

    assert_eq!(genshin[0].start_text, "2020/09/28 10:00:00");
    assert_eq!(star_rail[0].start_text, "2023/04/26 10:00:00");
}

#[test]
fn test_fixAmbiguousStarts_withNeighborWithoutEnd_shouldUseFallbackEpoch() {
    let mut records = vec![merged("版本更新后", ""), merged("游戏上线", "")];

    fix_ambiguous_starts(&mut records, Site::StarRail);

    assert_eq!(starts(&records), vec![Site::StarRail.fallback_epoch(); 2]);
}

#[test]
fn test_fixAmbiguousStarts_withLegacyNeighborEnd_shouldUseFallbackEpoch() {
    let mut records = vec![
        merged("版本更新后", "2020/10/18 17:59"),
        merged("2020/09/15", "2020/09/28 10:00"),
    ];

    fix_ambiguous_starts(&mut records, Site::Genshin);

    assert_eq!(records[0].start_text, Site::Genshin.fallback_epoch());
}

#[test]
fn test_fixAmbiguousStarts_withConsecutiveAmbiguous_shouldUseEachNeighborsEnd() {
    let mut records = vec![
        merged("版本更新后", "2025/03/25 17:59"),
        merged("版本更新后", "2025/03/04 17:59"),
        merged("2025/01/21 18:00", "2025/02/11 14:59"),
    ];

    fix_ambiguous_starts(&mut records, Site::Genshin);

    assert_eq!(
        starts(&records),
        vec!["2025/03/05 10:00:00", "2025/02/12 10:00:00", "2025/01/21 18:00"]
    );
}

#[test]
fn test_fixAmbiguousStarts_withLiteralStarts_shouldLeaveThemAlone() {
    let mut records = vec![
        merged("2025/02/12 18:00", "2025/03/04 14:59"),
        merged("2025/01/21 18:00", "2025/02/11 14:59"),
    ];
    let before = records.clone();

    fix_ambiguous_starts(&mut records, Site::StarRail);

    assert_eq!(records, before);
}

#[test]
fn test_fixAmbiguousStarts_withEmptyList_shouldDoNothing() {
    let mut records: Vec<MergedRecord> = Vec::new();
    fix_ambiguous_starts(&mut records, Site::Genshin);
    assert!(records.is_empty());
}
