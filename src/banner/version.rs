use once_cell::sync::Lazy;
use regex::Regex;

use crate::site::Site;

// @const: Version label with optional half/mid marker
static VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+\.\d+)(上半|下半|中)?$").unwrap()
});

/// Map a raw version label such as "2.3上半" to a canonical sub-version ("2.3.1").
///
/// Labels that do not look like `<major>.<minor>[marker]` are returned unchanged.
/// The "中" marker is only meaningful on sites that run mid-version banners; on
/// other sites such a label is treated as unrecognized text.
pub fn normalize_version(raw: &str, site: Site) -> String {
    let Some(caps) = VERSION_REGEX.captures(raw) else {
        return raw.to_string();
    };

    let base = &caps[1];
    match caps.get(2).map(|m| m.as_str()) {
        None => base.to_string(),
        Some("上半") => format!("{}.1", base),
        Some("下半") => format!("{}.2", base),
        Some("中") if site.accepts_mid_version() => format!("{}.1.5", base),
        Some(_) => raw.to_string(),
    }
}
