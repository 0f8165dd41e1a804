use std::path::{Path, PathBuf};

use ng_core::Result;
use tracing::info;

use crate::controller::{Freshness, Page, PageController};

/// Renders every page once and writes it under `out_dir`, returning the
/// files written. Stops at the first failed fetch.
pub async fn build_site(controller: &PageController, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for page in Page::all() {
        let html = controller.render(&page, Freshness::AlwaysFresh).await?;
        let target = out_dir.join(page.output_path());
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, html).await?;
        info!("📝 Wrote {}", target.display());
        written.push(target);
    }
    Ok(written)
}
