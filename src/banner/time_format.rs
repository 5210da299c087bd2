/*!
 * Banner time text handling.
 *
 * Wiki tables write dates as `YYYY/M/D` with an optional `HH:MM` or
 * `HH:MM:SS` time. Output files use `YYYY-MM-DD HH:MM:SS`.
 */

use chrono::NaiveDate;
use log::{debug, warn};

use crate::site::Site;

/// Phrases meaning "right after the previous version/update/launch"
const AMBIGUOUS_START_MARKERS: [&str; 3] = ["版本更新", "上线", "后"];

/// Time of day assigned to inferred banner starts
const INFERRED_START_TIME: &str = "10:00:00";

/// Convert slash date text into a canonical `YYYY-MM-DD HH:MM:SS` timestamp.
///
/// Empty input yields an empty string, which downstream means "still running".
/// Input whose date part is not three `/` or `-` separated fields is returned
/// trimmed but otherwise untouched.
pub fn format_time(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let (date_part, time_part) = match trimmed.split_once(char::is_whitespace) {
        Some((date, time)) => (date, Some(time.trim())),
        None => (trimmed, None),
    };

    let fields: Vec<&str> = date_part.split(['/', '-']).collect();
    let [year, month, day] = fields.as_slice() else {
        debug!("Leaving unrecognized date text as-is: {:?}", trimmed);
        return trimmed.to_string();
    };

    let time = match time_part {
        None | Some("") => "00:00:00".to_string(),
        Some(t) if t.chars().count() == 5 => format!("{}:00", t),
        Some(t) => t.to_string(),
    };

    format!("{}-{:0>2}-{:0>2} {}", year, month, day, time)
}

/// Whether a start value is a relative phrase instead of a literal date
pub fn is_ambiguous_start(raw: &str) -> bool {
    AMBIGUOUS_START_MARKERS.iter().any(|marker| raw.contains(marker))
}

/// The start inferred for a banner following one that ended at `end_text`:
/// the next calendar day at 10:00, in slash form (`YYYY/MM/DD 10:00:00`).
///
/// End text containing the site's launch-day marker maps straight to the
/// site's fallback epoch, as does a date that cannot be parsed.
pub fn next_day_at_ten(end_text: &str, site: Site) -> String {
    if end_text.contains(site.legacy_end_marker()) {
        return site.fallback_epoch().to_string();
    }

    let date_part = end_text.split_whitespace().next().unwrap_or_default();
    match parse_date(date_part).and_then(|d| d.succ_opt()) {
        Some(next) => format!("{} {}", next.format("%Y/%m/%d"), INFERRED_START_TIME),
        None => {
            warn!(
                "Cannot infer start from end date {:?}, using fallback epoch {}",
                end_text,
                site.fallback_epoch()
            );
            site.fallback_epoch().to_string()
        }
    }
}

fn parse_date(date_part: &str) -> Option<NaiveDate> {
    let mut fields = date_part.split(['/', '-']).map(|f| f.trim().parse::<u32>());
    let year = fields.next()?.ok()?;
    let month = fields.next()?.ok()?;
    let day = fields.next()?.ok()?;
    if fields.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}
