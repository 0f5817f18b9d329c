use crate::config::{DEFAULT_CHUNK_SIZE, HashAlgorithm};
use anyhow::{Context, Result, bail};
use md5::{Digest, Md5};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 指紋長度（位元組），128-bit
const FINGERPRINT_BYTES: usize = 16;

/// 檔案內容指紋，固定 32 個小寫十六進位字元
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

enum ContentHasher {
    Md5(Md5),
    Blake3(Box<blake3::Hasher>),
}

impl ContentHasher {
    fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Md5 => Self::Md5(Md5::new()),
            HashAlgorithm::Blake3 => Self::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    fn update(&mut self, chunk: &[u8]) {
        match self {
            Self::Md5(hasher) => hasher.update(chunk),
            Self::Blake3(hasher) => {
                hasher.update(chunk);
            }
        }
    }

    fn finalize(self) -> Fingerprint {
        match self {
            Self::Md5(hasher) => Fingerprint::from_bytes(&hasher.finalize()),
            Self::Blake3(hasher) => {
                let mut output = [0u8; FINGERPRINT_BYTES];
                hasher.finalize_xof().fill(&mut output);
                Fingerprint::from_bytes(&output)
            }
        }
    }
}

/// 以預設演算法（MD5）與預設區塊大小計算檔案指紋
pub fn calculate_file_hash(path: &Path) -> Result<Fingerprint> {
    calculate_file_hash_with(path, HashAlgorithm::default(), DEFAULT_CHUNK_SIZE)
}

/// 逐區塊讀完整個檔案後回傳指紋，結果與區塊大小無關
pub fn calculate_file_hash_with(
    path: &Path,
    algorithm: HashAlgorithm,
    chunk_size: usize,
) -> Result<Fingerprint> {
    if chunk_size == 0 {
        bail!("讀取區塊大小必須大於 0");
    }

    let mut file = File::open(path).with_context(|| format!("無法開啟檔案: {}", path.display()))?;
    let mut hasher = ContentHasher::new(algorithm);
    let mut buffer = vec![0u8; chunk_size];

    loop {
        let bytes_read = file
            .read(&mut buffer)
            .with_context(|| format!("讀取檔案失敗: {}", path.display()))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize())
}
