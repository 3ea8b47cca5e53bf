//! Bilinear resampling of grayscale images to a target window size.

use crate::geometry::Size;
use crate::image::{ImageView, OwnedImage};
use crate::util::ScanResult;

/// Resizes `src` to `size` with bilinear sampling.
///
/// Destination pixel centers map to source coordinates with
/// `sx = (x + 0.5) * src_w / dst_w - 0.5`, clamped to the valid range.
/// Results are rounded to the nearest integer and clamped to `[0, 255]`.
/// Resizing to the source size returns an identical copy.
pub fn resize_u8_bilinear(src: ImageView<'_, u8>, size: Size) -> ScanResult<OwnedImage> {
    let size = size.ensure_non_empty()?;
    let src_w = src.width();
    let src_h = src.height();
    let scale_x = src_w as f32 / size.width as f32;
    let scale_y = src_h as f32 / size.height as f32;
    let max_x = src_w as f32 - 1.0;
    let max_y = src_h as f32 - 1.0;

    let mut out = Vec::with_capacity(size.area());
    for y in 0..size.height {
        let sy = ((y as f32 + 0.5) * scale_y - 0.5).clamp(0.0, max_y);
        let y0 = sy.floor() as usize;
        let y1 = (y0 + 1).min(src_h - 1);
        let fy = sy - y0 as f32;
        let (Some(row0), Some(row1)) = (src.row(y0), src.row(y1)) else {
            continue;
        };

        for x in 0..size.width {
            let sx = ((x as f32 + 0.5) * scale_x - 0.5).clamp(0.0, max_x);
            let x0 = sx.floor() as usize;
            let x1 = (x0 + 1).min(src_w - 1);
            let fx = sx - x0 as f32;

            let top = row0[x0] as f32 * (1.0 - fx) + row0[x1] as f32 * fx;
            let bottom = row1[x0] as f32 * (1.0 - fx) + row1[x1] as f32 * fx;
            let value = top * (1.0 - fy) + bottom * fy;
            out.push(value.round().clamp(0.0, 255.0) as u8);
        }
    }

    OwnedImage::new(out, size.width, size.height)
}
