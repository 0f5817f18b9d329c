//! 重複圖片檢查元件
//!
//! 以檔案內容指紋找出完全相同的檔案，並全部搬到待確認資料夾供人工檢視

mod duplicate_grouper;
mod main;
mod relocator;

pub use duplicate_grouper::{DuplicateGrouper, DuplicateGroups, FileOutcome, ScanReport};
pub use main::{
    DuplicateChecker, NO_DUPLICATES_MESSAGE, RunSummary, completed_line, found_line, moved_line,
};
pub use relocator::{MovedFile, Relocator, next_free_path};
