use anyhow::Result;
use image_dedup_mover::component::DuplicateChecker;
use image_dedup_mover::config::Config;
use image_dedup_mover::init;
use log::info;

fn main() -> Result<()> {
    init::init();

    let config = Config::new()?;
    let summary = DuplicateChecker::new(config).run()?;
    info!("程式正常結束，搬移 {} 個檔案", summary.moved.len());
    Ok(())
}
