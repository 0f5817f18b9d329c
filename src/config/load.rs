use crate::config::types::Config;
use anyhow::{Result, bail};

impl Config {
    /// 取得執行設定
    ///
    /// 程式沒有設定檔也沒有命令列參數，固定回傳預設值
    pub fn new() -> Result<Self> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            bail!("讀取區塊大小必須大於 0");
        }
        if self.source_directory == self.destination_directory {
            bail!(
                "來源與目標資料夾不可相同: {}",
                self.source_directory.display()
            );
        }
        Ok(())
    }
}
