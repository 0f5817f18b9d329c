mod file_hasher;
mod file_scanner;
mod path_validator;

pub use file_hasher::{Fingerprint, calculate_file_hash, calculate_file_hash_with};
pub use file_scanner::scan_all_files;
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
