use std::fmt;
use std::path::{Path, PathBuf};

/// 預設掃描的圖片資料夾
pub const DEFAULT_SOURCE_DIRECTORY: &str = "images";
/// 預設存放待確認重複檔案的資料夾
pub const DEFAULT_DESTINATION_DIRECTORY: &str = "tocheck";
/// 每次讀取檔案的區塊大小（位元組）
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// 內容指紋使用的雜湊演算法，兩者皆輸出 128-bit（32 個十六進位字元）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashAlgorithm {
    #[default]
    Md5,
    Blake3,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Md5 => write!(f, "md5"),
            Self::Blake3 => write!(f, "blake3"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_directory: PathBuf,
    pub destination_directory: PathBuf,
    pub chunk_size: usize,
    pub hash_algorithm: HashAlgorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_directory: PathBuf::from(DEFAULT_SOURCE_DIRECTORY),
            destination_directory: PathBuf::from(DEFAULT_DESTINATION_DIRECTORY),
            chunk_size: DEFAULT_CHUNK_SIZE,
            hash_algorithm: HashAlgorithm::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_source_directory(mut self, path: impl AsRef<Path>) -> Self {
        self.source_directory = path.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn with_destination_directory(mut self, path: impl AsRef<Path>) -> Self {
        self.destination_directory = path.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    #[must_use]
    pub const fn with_hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = algorithm;
        self
    }
}
