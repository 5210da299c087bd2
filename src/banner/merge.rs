use std::collections::HashMap;

use log::debug;

use super::{MergedRecord, RawRecord, TitleSet};
use crate::site::VersionPolicy;

const VERSION_SEPARATOR: &str = " / ";

// @struct: Accumulator for one time window
struct MergeGroup {
    start_text: String,
    end_text: String,
    versions: Vec<String>,
    tier5: TitleSet,
    tier4: TitleSet,
}

impl MergeGroup {
    fn seed(record: &RawRecord) -> Self {
        let mut group = Self {
            start_text: record.start_text.clone(),
            end_text: record.end_text.clone(),
            versions: vec![record.version_text.clone()],
            tier5: TitleSet::new(),
            tier4: TitleSet::new(),
        };
        group.absorb_titles(record);
        group
    }

    fn absorb_titles(&mut self, record: &RawRecord) {
        self.tier5.extend(&record.tier5_titles);
        self.tier4.extend(&record.tier4_titles);
    }

    fn into_record(self) -> MergedRecord {
        MergedRecord {
            start_text: self.start_text,
            end_text: self.end_text,
            version: self.versions.join(VERSION_SEPARATOR),
            tier5: self.tier5,
            tier4: self.tier4,
        }
    }
}

/// Fold together records whose raw `(start, end)` text is identical.
///
/// Groups come out in order of first appearance. Titles are unioned in the
/// order they are first seen. With `KeepFirst` the group keeps the version of
/// its first record; with `JoinAll` every record's version is appended.
///
/// Expects records of a single category; partitioning happens before this call.
pub fn merge_by_time(records: &[RawRecord], policy: VersionPolicy) -> Vec<MergedRecord> {
    let mut groups: Vec<MergeGroup> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for record in records {
        let key = (record.start_text.as_str(), record.end_text.as_str());
        match index.get(&key).copied() {
            Some(slot) => {
                let group = &mut groups[slot];
                if policy == VersionPolicy::JoinAll {
                    group.versions.push(record.version_text.clone());
                }
                group.absorb_titles(record);
            }
            None => {
                index.insert(key, groups.len());
                groups.push(MergeGroup::seed(record));
            }
        }
    }

    debug!("Merged {} rows into {} time windows", records.len(), groups.len());
    groups.into_iter().map(MergeGroup::into_record).collect()
}
