use std::path::Path;

use anyhow::{Context, Result};
use resvg::{tiny_skia, usvg};

/// Rasterizes an SVG document to PNG bytes at its intrinsic size.
///
/// System fonts are loaded so numerals render; a missing family falls back to
/// whatever `fontdb` resolves for `sans-serif`.
pub fn rasterize_png(svg: &str) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt).context("failed to parse generated SVG")?;
    let size = tree.size().to_int_size();

    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .with_context(|| format!("cannot allocate {}x{} pixmap", size.width(), size.height()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png = pixmap.encode_png().context("failed to encode PNG")?;
    log::debug!("rasterized {}x{} png ({} bytes)", size.width(), size.height(), png.len());
    Ok(png)
}

/// Rasterizes `svg` and writes the PNG to `path`.
pub fn write_png(svg: &str, path: &Path) -> Result<()> {
    let png = rasterize_png(svg)?;
    std::fs::write(path, png).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
