use super::duplicate_grouper::DuplicateGrouper;
use super::relocator::{MovedFile, Relocator};
use crate::config::Config;
use crate::tools::validate_directory_exists;
use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::Path;

pub const NO_DUPLICATES_MESSAGE: &str = "No duplicates found.";

/// 單次執行摘要
#[derive(Debug, Default)]
pub struct RunSummary {
    pub duplicate_groups: usize,
    pub moved: Vec<MovedFile>,
}

impl RunSummary {
    #[must_use]
    pub const fn duplicates_found(&self) -> bool {
        self.duplicate_groups > 0
    }
}

#[must_use]
pub fn found_line(destination: &Path) -> String {
    format!("Duplicates found, moving them to {}...", destination.display())
}

#[must_use]
pub fn moved_line(moved: &MovedFile) -> String {
    format!("Moved: {} -> {}", moved.from.display(), moved.to.display())
}

#[must_use]
pub fn completed_line(count: usize) -> String {
    format!("Move completed ({count} files).")
}

/// 掃描來源資料夾並把所有重複檔案搬到待確認資料夾
pub struct DuplicateChecker {
    config: Config,
}

impl DuplicateChecker {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<RunSummary> {
        self.config.validate()?;
        // 來源不存在時當作空資料夾，交給掃描處理
        if self.config.source_directory.exists() {
            validate_directory_exists(&self.config.source_directory)?;
        }

        let grouper = DuplicateGrouper::from_config(&self.config).with_progress(progress_bar());
        let groups = grouper.find_duplicates(&self.config.source_directory)?;

        if groups.is_empty() {
            println!("{}", style(NO_DUPLICATES_MESSAGE).green());
            info!("沒有重複檔案");
            return Ok(RunSummary::default());
        }

        let destination = &self.config.destination_directory;
        println!("{}", style(found_line(destination)).yellow().bold());

        let moved = Relocator::new(destination)
            .relocate(&groups, |record| println!("{}", moved_line(record)))?;

        println!("{}", style(completed_line(moved.len())).green());
        info!(
            "搬移完成 - 重複群組: {}, 搬移檔案: {}",
            groups.len(),
            moved.len()
        );

        Ok(RunSummary {
            duplicate_groups: groups.len(),
            moved,
        })
    }
}

fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    if let Ok(progress_style) =
        ProgressStyle::default_bar().template("{spinner} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
    {
        bar.set_style(progress_style.progress_chars("##-"));
    }
    bar
}
