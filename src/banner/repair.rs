use log::debug;

use super::time_format::{is_ambiguous_start, next_day_at_ten};
use super::MergedRecord;
use crate::site::Site;

/// Replace relative start phrases with concrete dates, in place.
///
/// `records` must be in page order, newest first, so `records[i + 1]` is the
/// banner that ran just before `records[i]`. An ambiguous start becomes the
/// day after that neighbor's end at 10:00; without a neighbor that has an end
/// date it becomes the site's fallback epoch.
///
/// Indices are visited in increasing order and each fix is written back
/// before moving on.
pub fn fix_ambiguous_starts(records: &mut [MergedRecord], site: Site) {
    for i in 0..records.len() {
        if !is_ambiguous_start(&records[i].start_text) {
            continue;
        }

        let repaired = match records.get(i + 1) {
            Some(older) if !older.end_text.is_empty() => next_day_at_ten(&older.end_text, site),
            _ => site.fallback_epoch().to_string(),
        };

        debug!(
            "Repaired start {:?} -> {:?} (end {:?})",
            records[i].start_text, repaired, records[i].end_text
        );
        records[i].start_text = repaired;
    }
}
