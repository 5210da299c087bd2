use log::info;

use super::{
    fix_ambiguous_starts, format_time, merge_by_time, normalize_version, BannerCategory,
    MergedRecord, OutputRecord, RawRecord,
};
use crate::site::Site;

/// Normalized banner lists for one site, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BannerTables {
    pub characters: Vec<OutputRecord>,
    pub items: Vec<OutputRecord>,
}

impl BannerTables {
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.items.is_empty()
    }
}

/// Run extracted rows through merge, start repair and formatting.
///
/// Rows keep their relative page order inside each category; the repair step
/// relies on that order being newest first.
pub fn build_tables(raw: Vec<RawRecord>, site: Site) -> BannerTables {
    let (characters, items): (Vec<RawRecord>, Vec<RawRecord>) = raw
        .into_iter()
        .map(|mut record| {
            record.version_text = normalize_version(&record.version_text, site);
            record
        })
        .partition(|record| record.category == BannerCategory::Character);

    let tables = BannerTables {
        characters: build_category(&characters, site),
        items: build_category(&items, site),
    };

    info!(
        "{}: {} character banners, {} item banners",
        site.display_name(),
        tables.characters.len(),
        tables.items.len()
    );
    tables
}

fn build_category(rows: &[RawRecord], site: Site) -> Vec<OutputRecord> {
    let mut merged = merge_by_time(rows, site.version_policy());
    fix_ambiguous_starts(&mut merged, site);
    merged.into_iter().map(|record| to_output(record, site)).collect()
}

fn to_output(record: MergedRecord, site: Site) -> OutputRecord {
    OutputRecord {
        version: site.emits_version().then_some(record.version),
        from: format_time(&record.start_text),
        to: format_time(&record.end_text),
        five: record.tier5.into_vec(),
        four: record.tier4.into_vec(),
    }
}
