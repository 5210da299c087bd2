/*!
 * Common test utilities for the gacha-history test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;
use gacha_history::banner::{BannerCategory, RawRecord};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Shorthand for a character pool row
pub fn character_row(start: &str, end: &str, version: &str, five: &[&str], four: &[&str]) -> RawRecord {
    RawRecord::new(BannerCategory::Character, start, end, version, five, four)
}

/// Shorthand for a weapon / light cone pool row
pub fn item_row(start: &str, end: &str, version: &str, five: &[&str], four: &[&str]) -> RawRecord {
    RawRecord::new(BannerCategory::Item, start, end, version, five, four)
}

fn link_cell(titles: &[&str]) -> String {
    titles
        .iter()
        .map(|t| format!(r#"<a href="/wiki/{0}" title="{0}">{0}</a>"#, t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn banner_rows(pool_header: &str, time: &str, version: &str, five: &[&str], four: &[&str]) -> String {
    format!(
        r#"<tbody>
<tr><th colspan="2">祈愿</th></tr>
<tr><th>时间</th><td>{time}</td></tr>
<tr><th>版本</th><td>{version}</td></tr>
<tr><th>5星{pool_header}</th><td>{five}</td></tr>
<tr><th>4星{pool_header}</th><td>{four}</td></tr>
</tbody>"#,
        time = time,
        version = version,
        pool_header = pool_header,
        five = link_cell(five),
        four = link_cell(four),
    )
}

/// One nested banner table as laid out on the Genshin wish history page.
/// `pool_header` is "角色" for character banners and "武器" for weapon banners.
pub fn genshin_banner(pool_header: &str, time: &str, version: &str, five: &[&str], four: &[&str]) -> String {
    format!(
        r#"<table class="wikitable">{}</table>"#,
        banner_rows(pool_header, time, version, five, four)
    )
}

/// Wraps banner tables in the outer layout table of the Genshin page
pub fn genshin_page(banners: &[String]) -> String {
    format!(
        r#"<html><head><title>往期祈愿</title></head><body>
<table class="wikitable"><tbody><tr><td>{}</td></tr></tbody></table>
</body></html>"#,
        banners.join("\n")
    )
}

/// One warp box as laid out on the Star Rail warp history page
pub fn star_rail_banner(time: &str, version: &str, five: &[&str], four: &[&str]) -> String {
    format!(
        r#"<div class="sr-gacha-box"><table>{}</table></div>"#,
        banner_rows("", time, version, five, four)
    )
}

pub fn star_rail_page(boxes: &[String]) -> String {
    format!(
        r#"<html><head><title>历史跃迁</title></head><body><div class="content">{}</div></body></html>"#,
        boxes.join("\n")
    )
}
