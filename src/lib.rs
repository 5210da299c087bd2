/*!
 * # gacha-history - banner history scraper for BWIKI
 *
 * Downloads the wish (Genshin Impact) and warp (Honkai: Star Rail) history
 * pages from the BWIKI, turns their banner tables into normalized records
 * and writes them as YAML.
 *
 * ## Architecture
 *
 * - `app_config`: Configuration management
 * - `site`: Per-site constants (URLs, fallback epochs, merge policy)
 * - `fetcher`: HTTP download of history pages
 * - `extractor`: Banner table rows out of the HTML
 * - `banner`: Normalization core:
 *   - `banner::version`: Version label normalization
 *   - `banner::time_format`: Timestamp formatting and start inference
 *   - `banner::merge`: Folding rows that share a time window
 *   - `banner::repair`: Filling in relative start dates
 *   - `banner::pipeline`: The above, per banner category
 * - `emitter`: YAML output
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 */

#![allow(clippy::uninlined_format_args)]

pub mod app_config;
pub mod app_controller;
pub mod banner;
pub mod emitter;
pub mod errors;
pub mod extractor;
pub mod fetcher;
pub mod file_utils;
pub mod site;

pub use app_config::Config;
pub use banner::{BannerCategory, BannerTables, MergedRecord, OutputRecord, RawRecord};
pub use errors::{AppError, EmitError, ExtractError, FetchError};
pub use site::{Site, VersionPolicy};
