/*!
 * Banner row extraction from BWIKI history pages.
 *
 * Both sites render one small table per banner. Rows are read by position:
 * - row 1: time range (`start ~ end`, or a single phrase such as "版本更新后")
 * - row 2: version label
 * - row 3: featured 5-tier links (its header also names the pool on Genshin)
 * - row 4: featured 4-tier links
 */

use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};

use crate::banner::{BannerCategory, RawRecord};
use crate::errors::ExtractError;
use crate::site::Site;

const TIME_ROW: usize = 1;
const VERSION_ROW: usize = 2;
const TIER5_ROW: usize = 3;
const TIER4_ROW: usize = 4;

/// Header text marking a character pool on Genshin tables
const CHARACTER_POOL_MARKER: &str = "角色";

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|_| ExtractError::InvalidSelector(css.to_string()))
}

/// Compiled selectors shared by both layouts
struct RowSelectors {
    row: Selector,
    cell: Selector,
    header: Selector,
    titled_link: Selector,
}

impl RowSelectors {
    fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            row: selector("tr")?,
            cell: selector("td")?,
            header: selector("th")?,
            titled_link: selector("a[title]")?,
        })
    }

    /// Concatenated text of every data cell in a row, trimmed
    fn cell_text(&self, row: Option<&ElementRef>) -> String {
        let Some(row) = row else {
            return String::new();
        };
        row.select(&self.cell)
            .flat_map(|td| td.text())
            .collect::<String>()
            .trim()
            .to_string()
    }

    fn header_text(&self, row: Option<&ElementRef>) -> String {
        let Some(row) = row else {
            return String::new();
        };
        row.select(&self.header).flat_map(|th| th.text()).collect()
    }

    /// Link titles in a row's data cells, deduplicated in page order.
    /// Empty titles and bracket placeholders like "[未实装]" are skipped.
    fn titles(&self, row: Option<&ElementRef>) -> Vec<String> {
        let Some(row) = row else {
            return Vec::new();
        };
        let mut titles: Vec<String> = Vec::new();
        for link in row.select(&self.cell).flat_map(|td| td.select(&self.titled_link)) {
            let title = link.value().attr("title").unwrap_or_default().trim();
            if title.is_empty() || title.starts_with('[') {
                continue;
            }
            if !titles.iter().any(|t| t == title) {
                titles.push(title.to_string());
            }
        }
        titles
    }
}

/// Split "start ~ end" into trimmed halves; text without `~` is all start
pub fn split_time_range(text: &str) -> (String, String) {
    match text.split_once('~') {
        Some((start, end)) => (start.trim().to_string(), end.trim().to_string()),
        None => (text.trim().to_string(), String::new()),
    }
}

/// Extract one `RawRecord` per banner table in page order
pub fn extract_rows(html: &str, site: Site) -> Result<Vec<RawRecord>, ExtractError> {
    let document = Html::parse_document(html);
    let selectors = RowSelectors::new()?;

    let block_selector = match site {
        Site::Genshin => selector("table.wikitable table.wikitable")?,
        Site::StarRail => selector(".sr-gacha-box")?,
    };

    let mut records = Vec::new();
    let mut block_count = 0usize;

    for (index, block) in document.select(&block_selector).enumerate() {
        block_count += 1;
        let rows: Vec<ElementRef> = block.select(&selectors.row).collect();

        let time_text = selectors.cell_text(rows.get(TIME_ROW));
        // Dropped instead of kept as an empty window, so it never becomes a repair neighbor
        if time_text.is_empty() {
            warn!("Skipping {} banner table #{} without a time row", site.display_name(), index);
            continue;
        }

        let category = match site {
            Site::Genshin => {
                if selectors.header_text(rows.get(TIER5_ROW)).contains(CHARACTER_POOL_MARKER) {
                    BannerCategory::Character
                } else {
                    BannerCategory::Item
                }
            }
            // Character and light cone boxes alternate on the warp page
            Site::StarRail => {
                if index % 2 == 0 {
                    BannerCategory::Character
                } else {
                    BannerCategory::Item
                }
            }
        };

        let (start_text, end_text) = split_time_range(&time_text);
        records.push(RawRecord {
            category,
            start_text,
            end_text,
            version_text: selectors.cell_text(rows.get(VERSION_ROW)),
            tier5_titles: selectors.titles(rows.get(TIER5_ROW)),
            tier4_titles: selectors.titles(rows.get(TIER4_ROW)),
        });
    }

    if block_count == 0 {
        return Err(ExtractError::NoBanners {
            site: site.display_name().to_string(),
        });
    }

    debug!("Extracted {} banner rows from {} tables", records.len(), block_count);
    Ok(records)
}
