use anyhow::{Context, Result};
use log::warn;
use std::cmp::Ordering;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 遞迴掃描目錄下所有檔案，不過濾檔案類型
///
/// 深度優先，同一層先列出檔案再進入子資料夾，各自依檔名排序，
/// 回傳順序即為走訪順序。根目錄不存在時視為空目錄；
/// 其他目錄無法讀取都會讓整個掃描失敗。
pub fn scan_all_files(directory: &Path) -> Result<Vec<PathBuf>> {
    match fs::metadata(directory) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("資料夾不存在，視為空目錄: {}", directory.display());
            return Ok(Vec::new());
        }
        _ => {}
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .follow_links(false)
        .sort_by(files_before_directories)
    {
        let entry = entry.with_context(|| format!("無法走訪目錄: {}", directory.display()))?;
        if is_candidate(&entry) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn files_before_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// 一般檔案，或指向檔案（含已失效）的符號連結
fn is_candidate(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && fs::metadata(entry.path()).map_or(true, |meta| meta.is_file())
}
