//! E2E Integration Tests
//!
//! 以暫存資料夾驗證整個掃描與搬移流程

use std::fs;
use std::path::Path;
use std::process::Command;

use image_dedup_mover::component::duplicate_checker::{
    DuplicateChecker, DuplicateGrouper, NO_DUPLICATES_MESSAGE,
};
use image_dedup_mover::config::{Config, HashAlgorithm};
use tempfile::TempDir;

fn build_images(base: &Path) {
    let images = base.join("images");
    fs::create_dir_all(images.join("sub")).unwrap();
    fs::write(images.join("a.jpg"), b"\xff\xd8\xff same pixels").unwrap();
    fs::write(images.join("sub/b.jpg"), b"\xff\xd8\xff same pixels").unwrap();
    fs::write(images.join("c.jpg"), b"\xff\xd8\xff other pixels").unwrap();
}

/// 測試完整流程：兩個相同檔案都被搬走，不同的留在原處
#[test]
fn test_pipeline_moves_all_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    build_images(base);

    let config = Config::default()
        .with_source_directory(base.join("images"))
        .with_destination_directory(base.join("tocheck"));
    let summary = DuplicateChecker::new(config).run().unwrap();

    assert!(summary.duplicates_found());
    assert_eq!(summary.duplicate_groups, 1);
    assert_eq!(summary.moved.len(), 2);

    assert!(!base.join("images/a.jpg").exists());
    assert!(!base.join("images/sub/b.jpg").exists());
    assert!(base.join("images/c.jpg").exists());
    assert!(base.join("tocheck/a.jpg").exists());
    assert!(base.join("tocheck/b.jpg").exists());
    assert!(!base.join("tocheck/sub").exists(), "目標資料夾應為扁平結構");
}

/// 第二次執行時來源已無重複
#[test]
fn test_second_run_finds_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    build_images(base);

    let config = Config::default()
        .with_source_directory(base.join("images"))
        .with_destination_directory(base.join("tocheck"))
        .with_hash_algorithm(HashAlgorithm::Blake3)
        .with_chunk_size(3);

    let first = DuplicateChecker::new(config.clone()).run().unwrap();
    assert_eq!(first.moved.len(), 2);

    let second = DuplicateChecker::new(config).run().unwrap();
    assert!(!second.duplicates_found());
    assert!(second.moved.is_empty());
}

/// 分組結果與走訪順序一致
#[test]
fn test_grouper_on_pipeline_fixture() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    build_images(base);

    let groups = DuplicateGrouper::default()
        .find_duplicates(&base.join("images"))
        .unwrap();

    assert_eq!(groups.len(), 1);
    let paths = groups.values().next().unwrap();
    assert_eq!(
        paths,
        &vec![base.join("images/a.jpg"), base.join("images/sub/b.jpg")]
    );
}

/// 直接執行程式：使用 ./images 與 ./tocheck，並檢查主控台輸出
#[test]
fn test_binary_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    build_images(base);

    let output = Command::new(env!("CARGO_BIN_EXE_image_dedup_mover"))
        .current_dir(base)
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    println!("{stdout}");

    assert!(stdout.contains("Duplicates found"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Moved: ")).count(), 2);
    assert!(base.join("tocheck/a.jpg").exists());
    assert!(base.join("tocheck/b.jpg").exists());
    assert!(base.join("images/c.jpg").exists());
}

/// 沒有重複時正常結束
#[test]
fn test_binary_without_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    fs::create_dir_all(base.join("images")).unwrap();
    fs::write(base.join("images/only.png"), "unique").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_image_dedup_mover"))
        .current_dir(base)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(NO_DUPLICATES_MESSAGE));
    assert!(!base.join("tocheck").exists());
}

/// 來源資料夾不存在時視為沒有重複，正常結束
#[test]
fn test_binary_without_source_directory() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_image_dedup_mover"))
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(NO_DUPLICATES_MESSAGE));
    assert!(!temp_dir.path().join("tocheck").exists());
}

/// 檔案無法讀取時以錯誤狀態結束，且錯誤只輸出一次
#[cfg(unix)]
#[test]
fn test_binary_fails_on_unreadable_file() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    fs::create_dir_all(base.join("images")).unwrap();
    symlink(base.join("gone.jpg"), base.join("images/broken.jpg")).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_image_dedup_mover"))
        .current_dir(base)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("broken.jpg").count(), 1, "{stderr}");
}
