//! 重複檔案搬移
//!
//! 將每個重複群組的所有成員搬到待確認資料夾（扁平結構），
//! 檔名衝突時在副檔名前加上遞增編號

use super::duplicate_grouper::DuplicateGroups;
use crate::tools::ensure_directory_exists;
use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// 一次搬移紀錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedFile {
    pub from: PathBuf,
    pub to: PathBuf,
}

pub struct Relocator {
    destination: PathBuf,
}

impl Relocator {
    #[must_use]
    pub fn new(destination: impl AsRef<Path>) -> Self {
        Self {
            destination: destination.as_ref().to_path_buf(),
        }
    }

    /// 搬移所有群組的所有成員（不保留任何一份在原處）
    ///
    /// 群組依指紋排序處理，每搬完一個檔案呼叫一次 `on_move`。
    /// 任何一次搬移失敗即中止，已搬移的檔案不會還原。
    pub fn relocate<F>(&self, groups: &DuplicateGroups, mut on_move: F) -> Result<Vec<MovedFile>>
    where
        F: FnMut(&MovedFile),
    {
        ensure_directory_exists(&self.destination)?;

        let mut ordered: Vec<_> = groups.iter().collect();
        ordered.sort_by(|a, b| a.0.cmp(b.0));

        let mut moved = Vec::new();
        for (fingerprint, paths) in ordered {
            info!("搬移群組 {fingerprint} ({} 個檔案)", paths.len());
            for path in paths {
                let record = self.move_one(path)?;
                on_move(&record);
                moved.push(record);
            }
        }

        Ok(moved)
    }

    fn move_one(&self, source: &Path) -> Result<MovedFile> {
        let file_name = source
            .file_name()
            .ok_or_else(|| anyhow!("無法取得檔案名稱: {}", source.display()))?;
        let target = next_free_path(&self.destination, file_name);

        move_file(source, &target)?;

        Ok(MovedFile {
            from: source.to_path_buf(),
            to: target,
        })
    }
}

/// 在目標資料夾中找出第一個未被佔用的檔名：
/// `name.ext`、`name_1.ext`、`name_2.ext`...
#[must_use]
pub fn next_free_path(directory: &Path, file_name: &OsStr) -> PathBuf {
    let candidate = directory.join(file_name);
    if !occupied(&candidate) {
        return candidate;
    }

    let name = Path::new(file_name);
    let stem = name.file_stem().unwrap_or(file_name);
    let extension = name.extension();

    let mut counter: u64 = 1;
    loop {
        let mut new_name = OsString::from(stem);
        new_name.push(format!("_{counter}"));
        if let Some(ext) = extension {
            new_name.push(".");
            new_name.push(ext);
        }

        let candidate = directory.join(&new_name);
        if !occupied(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// 失效的符號連結也算佔用
fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// 先嘗試 rename，跨檔案系統時改為複製後刪除
fn move_file(source: &Path, target: &Path) -> Result<()> {
    if let Err(rename_err) = fs::rename(source, target) {
        debug!(
            "rename 失敗，改用複製: {} -> {} ({rename_err})",
            source.display(),
            target.display()
        );
        copy_and_delete(source, target)?;
    }
    Ok(())
}

fn copy_and_delete(source: &Path, target: &Path) -> Result<()> {
    fs::copy(source, target).with_context(|| {
        format!("複製檔案失敗: {} -> {}", source.display(), target.display())
    })?;

    fs::remove_file(source).with_context(|| format!("刪除原檔案失敗: {}", source.display()))?;

    Ok(())
}
