//! 重複檔案分組器
//!
//! 走訪資料夾、計算每個檔案的指紋，並依指紋分組

use crate::config::{Config, HashAlgorithm};
use crate::tools::{Fingerprint, calculate_file_hash_with, scan_all_files};
use anyhow::Result;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 指紋 -> 依走訪順序排列的檔案路徑，只保留兩個以上成員的群組
pub type DuplicateGroups = HashMap<Fingerprint, Vec<PathBuf>>;

/// 單一檔案的指紋計算結果
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub fingerprint: Result<Fingerprint>,
}

/// 容錯掃描結果
#[derive(Debug, Default)]
pub struct ScanReport {
    /// 掃描到的總檔案數（含失敗）
    pub total_files: usize,
    pub groups: DuplicateGroups,
    /// 無法計算指紋的檔案與原因
    pub failures: Vec<(PathBuf, anyhow::Error)>,
}

impl ScanReport {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

pub struct DuplicateGrouper {
    algorithm: HashAlgorithm,
    chunk_size: usize,
    progress: ProgressBar,
}

impl DuplicateGrouper {
    #[must_use]
    pub fn new(algorithm: HashAlgorithm, chunk_size: usize) -> Self {
        Self {
            algorithm,
            chunk_size,
            progress: ProgressBar::hidden(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.hash_algorithm, config.chunk_size)
    }

    /// 設定計算指紋時更新的進度條
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// 找出重複檔案，任何一個檔案讀取失敗就中止
    pub fn find_duplicates(&self, directory: &Path) -> Result<DuplicateGroups> {
        let groups = self
            .group_all(directory)
            .inspect_err(|_| self.progress.finish_and_clear())?;
        self.progress.finish_and_clear();

        Ok(retain_duplicates(groups))
    }

    fn group_all(&self, directory: &Path) -> Result<DuplicateGroups> {
        let mut groups = DuplicateGroups::new();
        for path in self.scan(directory)? {
            let fingerprint = self.fingerprint(&path)?;
            groups.entry(fingerprint).or_default().push(path);
        }
        Ok(groups)
    }

    /// 對每個檔案計算指紋並保留個別結果，不因單一檔案失敗而中止
    ///
    /// 只有走訪目錄本身失敗時才回傳錯誤
    pub fn fingerprint_all(&self, directory: &Path) -> Result<Vec<FileOutcome>> {
        let files = self
            .scan(directory)
            .inspect_err(|_| self.progress.finish_and_clear())?;

        let outcomes = files
            .into_iter()
            .map(|path| {
                let fingerprint = self.fingerprint(&path);
                FileOutcome { path, fingerprint }
            })
            .collect();
        self.progress.finish_and_clear();

        Ok(outcomes)
    }

    /// 容錯版本的 [`Self::find_duplicates`]，由呼叫端決定失敗是否致命
    pub fn scan_report(&self, directory: &Path) -> Result<ScanReport> {
        let outcomes = self.fingerprint_all(directory)?;
        let total_files = outcomes.len();

        let mut groups = DuplicateGroups::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome.fingerprint {
                Ok(fingerprint) => groups.entry(fingerprint).or_default().push(outcome.path),
                Err(e) => {
                    warn!("無法計算指紋 {}: {e:#}", outcome.path.display());
                    failures.push((outcome.path, e));
                }
            }
        }

        Ok(ScanReport {
            total_files,
            groups: retain_duplicates(groups),
            failures,
        })
    }

    fn scan(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        info!(
            "開始掃描目錄: {} (演算法: {}, 區塊: {} bytes)",
            directory.display(),
            self.algorithm,
            self.chunk_size
        );
        let files = scan_all_files(directory)?;
        info!("找到 {} 個檔案，開始計算指紋", files.len());

        self.progress.set_length(files.len() as u64);
        self.progress.set_position(0);
        Ok(files)
    }

    fn fingerprint(&self, path: &Path) -> Result<Fingerprint> {
        self.progress.set_message(path.display().to_string());
        let fingerprint = calculate_file_hash_with(path, self.algorithm, self.chunk_size)?;
        debug!("{fingerprint}  {}", path.display());
        self.progress.inc(1);
        Ok(fingerprint)
    }
}

impl Default for DuplicateGrouper {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// 丟棄只有一個成員的群組
fn retain_duplicates(mut groups: DuplicateGroups) -> DuplicateGroups {
    groups.retain(|_, paths| paths.len() > 1);
    info!("找到 {} 組重複檔案", groups.len());
    groups
}
