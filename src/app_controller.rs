use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::app_config::{Config, SiteConfig};
use crate::banner::{build_tables, BannerTables};
use crate::emitter::{self, OutputPaths};
use crate::extractor;
use crate::fetcher::PageFetcher;
use crate::file_utils::FileManager;
use crate::site::Site;

// @module: Application controller for banner history scraping

/// Main application controller: fetch, extract, normalize and write banner tables
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Settings for a site, or the site's defaults when it is not configured
    pub fn site_config(&self, site: Site) -> SiteConfig {
        self.config
            .get_site_config(site)
            .cloned()
            .unwrap_or_else(|| SiteConfig::new(site))
    }

    /// Output files for a site, resolved against the output directory
    pub fn output_paths(&self, site: Site) -> OutputPaths {
        let site_config = self.site_config(site);

        OutputPaths {
            characters: FileManager::resolve_output_path(
                &self.config.output_dir,
                site_config.get_character_output(),
            ),
            items: FileManager::resolve_output_path(
                &self.config.output_dir,
                site_config.get_item_output(),
            ),
        }
    }

    /// Fetch and process each site in turn. The first failure ends the run.
    pub async fn run(&self, sites: &[Site], dry_run: bool) -> Result<()> {
        let start_time = Instant::now();
        let fetcher = PageFetcher::new(&self.config.http).context("Failed to build HTTP client")?;

        for site in sites {
            self.run_site(&fetcher, *site, dry_run).await?;
        }

        info!(
            "Processed {} site(s) in {}",
            sites.len(),
            Self::format_duration(start_time.elapsed())
        );
        Ok(())
    }

    /// Download one site's history page and process it
    pub async fn run_site(&self, fetcher: &PageFetcher, site: Site, dry_run: bool) -> Result<BannerTables> {
        let url = self.site_config(site).get_url();

        let spinner = Self::fetch_spinner(site);
        let html = fetcher.fetch(&url).await;
        spinner.finish_and_clear();

        let html = html.with_context(|| format!("Failed to fetch {} page: {}", site.display_name(), url))?;
        self.process_html(site, &html, dry_run)
    }

    /// Process a previously saved copy of a site's history page
    pub fn run_from_html_file<P: AsRef<Path>>(&self, site: Site, path: P, dry_run: bool) -> Result<BannerTables> {
        info!("Reading {} page from {:?}", site.display_name(), path.as_ref());
        let html = FileManager::read_to_string(path)?;
        self.process_html(site, &html, dry_run)
    }

    /// Extract, normalize and emit the banner tables of one page
    pub fn process_html(&self, site: Site, html: &str, dry_run: bool) -> Result<BannerTables> {
        let rows = extractor::extract_rows(html, site)
            .with_context(|| format!("Failed to extract {} banners", site.display_name()))?;
        debug!("{}: {} raw rows", site.display_name(), rows.len());

        let tables = build_tables(rows, site);

        if dry_run {
            Self::print_tables(site, &tables)?;
        } else {
            let paths = self.output_paths(site);
            emitter::write_tables(&tables, &paths)
                .with_context(|| format!("Failed to write {} banners", site.display_name()))?;
        }

        Ok(tables)
    }

    fn print_tables(site: Site, tables: &BannerTables) -> Result<()> {
        println!("# {} character banners", site.display_name());
        print!("{}", emitter::to_yaml(&tables.characters)?);
        println!("# {} item banners", site.display_name());
        print!("{}", emitter::to_yaml(&tables.items)?);
        Ok(())
    }

    fn fetch_spinner(site: Site) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(format!("Fetching {}", site.display_name()));
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }

    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
