use anyhow::{Context, Result};
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;
use tracing::info;

use survey_advisor::{GcpMarker, MarkerRole};

pub const MIN_SCHEMATIC_PX: u32 = 64;
pub const MAX_SCHEMATIC_PX: u32 = 8192;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const OUTLINE: Rgb<u8> = Rgb([128, 128, 128]);
pub const PERIMETER_COLOR: Rgb<u8> = Rgb([31, 119, 180]);
pub const CENTER_COLOR: Rgb<u8> = Rgb([214, 39, 40]);

/// Rasterize the unit-square layout. y grows upward on the diagram.
pub fn render_png(markers: &[GcpMarker], size_px: u32) -> Result<RgbImage> {
    anyhow::ensure!(
        (MIN_SCHEMATIC_PX..=MAX_SCHEMATIC_PX).contains(&size_px),
        "schematic size {}px outside {}..={}",
        size_px, MIN_SCHEMATIC_PX, MAX_SCHEMATIC_PX
    );

    let mut img = RgbImage::from_pixel(size_px, size_px, BACKGROUND);
    let canvas = Canvas::new(size_px);

    // terrain outline
    let (x0, y0) = canvas.to_px(0.0, 1.0);
    let (x1, y1) = canvas.to_px(1.0, 0.0);
    for x in x0..=x1 {
        img.put_pixel(x, y0, OUTLINE);
        img.put_pixel(x, y1, OUTLINE);
    }
    for y in y0..=y1 {
        img.put_pixel(x0, y, OUTLINE);
        img.put_pixel(x1, y, OUTLINE);
    }

    let radius = (size_px / 60).max(2) as i64;
    for m in markers {
        let color = match m.role {
            MarkerRole::Perimeter => PERIMETER_COLOR,
            MarkerRole::Center => CENTER_COLOR,
        };
        let (cx, cy) = canvas.to_px(m.x, m.y);
        fill_disc(&mut img, cx as i64, cy as i64, radius, color);
    }
    Ok(img)
}

pub fn write_png(markers: &[GcpMarker], size_px: u32, path: &Path) -> Result<()> {
    let img = render_png(markers, size_px)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    img.save_with_format(path, ImageFormat::Png).context("write schematic png")?;
    info!("schematic: wrote {} ({} markers, {}px)", path.display(), markers.len(), size_px);
    Ok(())
}

struct Canvas {
    margin: u32,
    span: f64,
}

impl Canvas {
    fn new(size: u32) -> Self {
        let margin = size / 10;
        Self { margin, span: (size - 1 - 2 * margin) as f64 }
    }

    fn to_px(&self, x: f64, y: f64) -> (u32, u32) {
        let px = self.margin as f64 + x.clamp(0.0, 1.0) * self.span;
        let py = self.margin as f64 + (1.0 - y.clamp(0.0, 1.0)) * self.span;
        (px.round() as u32, py.round() as u32)
    }
}

fn fill_disc(img: &mut RgbImage, cx: i64, cy: i64, r: i64, color: Rgb<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r { continue; }
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && y >= 0 && x < w && y < h {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_advisor::{compute, schematic, PrecisionTier};

    #[test]
    fn draws_markers_in_role_colors() {
        let markers = schematic(&compute(2.0, PrecisionTier::High));
        let img = render_png(&markers, 200).unwrap();
        let canvas = Canvas::new(200);

        let (cx, cy) = canvas.to_px(0.5, 0.5);
        assert_eq!(*img.get_pixel(cx, cy), CENTER_COLOR);

        let (ox, oy) = canvas.to_px(0.0, 0.0);
        assert_eq!(*img.get_pixel(ox, oy), PERIMETER_COLOR);
        assert_eq!(oy, 200 - 1 - canvas.margin);

        assert_eq!(*img.get_pixel(1, 1), BACKGROUND);
    }

    #[test]
    fn rejects_silly_sizes() {
        let markers = schematic(&compute(2.0, PrecisionTier::High));
        assert!(render_png(&markers, 8).is_err());
        assert!(render_png(&markers, MAX_SCHEMATIC_PX + 1).is_err());
    }

    #[test]
    fn writes_png_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("layout.png");
        let markers = schematic(&compute(75.0, PrecisionTier::Good));
        write_png(&markers, 128, &path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (128, 128));
    }
}
