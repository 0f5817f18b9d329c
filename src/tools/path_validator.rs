use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// 確認來源資料夾存在且確實是資料夾
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    let metadata =
        fs::metadata(path).with_context(|| format!("無法存取資料夾: {}", path.display()))?;
    if !metadata.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

/// 建立資料夾（含上層），已存在時不做任何事
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("無法建立資料夾: {}", path.display()))
}
