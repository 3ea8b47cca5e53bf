//! Summed-area tables for constant-time window statistics.

use crate::geometry::Rect;
use crate::image::ImageView;

/// Integral image of pixel values and squared pixel values.
///
/// Tables are `(width + 1) x (height + 1)` with a zero first row and column,
/// so any window sum is four lookups.
#[derive(Clone, Debug)]
pub struct IntegralImage {
    width: usize,
    height: usize,
    sum: Vec<f64>,
    sum_sq: Vec<f64>,
}

impl IntegralImage {
    pub fn from_view(image: ImageView<'_, u8>) -> Self {
        let width = image.width();
        let height = image.height();
        let cols = width + 1;
        let mut sum = vec![0.0f64; cols * (height + 1)];
        let mut sum_sq = vec![0.0f64; cols * (height + 1)];

        for y in 0..height {
            let Some(row) = image.row(y) else {
                break;
            };
            let mut row_sum = 0.0f64;
            let mut row_sum_sq = 0.0f64;
            for (x, &value) in row.iter().enumerate() {
                let v = value as f64;
                row_sum += v;
                row_sum_sq += v * v;
                let idx = (y + 1) * cols + (x + 1);
                sum[idx] = sum[idx - cols] + row_sum;
                sum_sq[idx] = sum_sq[idx - cols] + row_sum_sq;
            }
        }

        Self {
            width,
            height,
            sum,
            sum_sq,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(sum, sum_sq)` over `window`, which must lie inside the image.
    pub fn window_sums(&self, window: Rect) -> (f64, f64) {
        debug_assert!(window.right() <= self.width && window.bottom() <= self.height);
        let cols = self.width + 1;
        let a = window.y * cols + window.x;
        let b = window.y * cols + window.right();
        let c = window.bottom() * cols + window.x;
        let d = window.bottom() * cols + window.right();
        (
            self.sum[d] - self.sum[b] - self.sum[c] + self.sum[a],
            self.sum_sq[d] - self.sum_sq[b] - self.sum_sq[c] + self.sum_sq[a],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::IntegralImage;
    use crate::geometry::Rect;
    use crate::image::ImageView;

    #[test]
    fn window_sums_match_direct_sums() {
        let data: Vec<u8> = (0u8..12).collect();
        let view = ImageView::from_slice(&data, 4, 3).unwrap();
        let integral = IntegralImage::from_view(view);

        let (sum, sum_sq) = integral.window_sums(Rect::new(1, 1, 2, 2));
        // pixels 5, 6, 9, 10
        assert_eq!(sum, 30.0);
        assert_eq!(sum_sq, 25.0 + 36.0 + 81.0 + 100.0);

        let (total, _) = integral.window_sums(Rect::new(0, 0, 4, 3));
        assert_eq!(total, (0..12).sum::<i32>() as f64);
    }

    #[test]
    fn respects_view_stride() {
        let data = [1u8, 2, 99, 3, 4, 99];
        let view = ImageView::new(&data, 2, 2, 3).unwrap();
        let integral = IntegralImage::from_view(view);
        assert_eq!(integral.window_sums(Rect::new(0, 0, 2, 2)).0, 10.0);
    }
}
