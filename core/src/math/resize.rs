use crate::prelude::{Mask, NodeError, NodeResult};
use ndarray::ArrayView2;

pub struct ResizeHelper;

impl ResizeHelper {
    /// Resample a mask to `(height, width)` with bilinear interpolation.
    ///
    /// Sample points sit at half-pixel centers and clamp at the edges, so a
    /// constant mask stays constant at any target shape.
    pub fn bilinear(mask: ArrayView2<f32>, height: usize, width: usize) -> NodeResult<Mask> {
        let (src_height, src_width) = mask.dim();
        if src_height == 0 || src_width == 0 || height == 0 || width == 0 {
            return Err(NodeError::InvalidInput(
                "cannot resize an empty mask".into(),
            ));
        }

        let scale_y = src_height as f32 / height as f32;
        let scale_x = src_width as f32 / width as f32;

        let mut resized = Mask::zeros((height, width));
        for row in 0..height {
            let sample_y =
                ((row as f32 + 0.5) * scale_y - 0.5).clamp(0.0, (src_height - 1) as f32);
            let y0 = sample_y.floor() as usize;
            let y1 = (y0 + 1).min(src_height - 1);
            let fy = sample_y - y0 as f32;

            for col in 0..width {
                let sample_x =
                    ((col as f32 + 0.5) * scale_x - 0.5).clamp(0.0, (src_width - 1) as f32);
                let x0 = sample_x.floor() as usize;
                let x1 = (x0 + 1).min(src_width - 1);
                let fx = sample_x - x0 as f32;

                let top = mask[[y0, x0]] * (1.0 - fx) + mask[[y0, x1]] * fx;
                let bottom = mask[[y1, x0]] * (1.0 - fx) + mask[[y1, x1]] * fx;
                resized[[row, col]] = top * (1.0 - fy) + bottom * fy;
            }
        }

        Ok(resized)
    }

    /// Bring two masks to a common shape before an elementwise combination.
    ///
    /// The target is the per-dimension maximum of the two shapes; each mask is
    /// resized independently and a mask already at the target is returned
    /// untouched.
    pub fn size_match(mask_a: Mask, mask_b: Mask) -> NodeResult<(Mask, Mask)> {
        let height = mask_a.nrows().max(mask_b.nrows());
        let width = mask_a.ncols().max(mask_b.ncols());

        let mask_a = if mask_a.dim() == (height, width) {
            mask_a
        } else {
            Self::bilinear(mask_a.view(), height, width)?
        };
        let mask_b = if mask_b.dim() == (height, width) {
            mask_b
        } else {
            Self::bilinear(mask_b.view(), height, width)?
        };

        Ok((mask_a, mask_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn bilinear_preserves_constant_masks() {
        let mask = Mask::from_elem((3, 3), 0.5);
        let resized = ResizeHelper::bilinear(mask.view(), 5, 5).unwrap();
        assert_eq!(resized.dim(), (5, 5));
        assert!(resized.iter().all(|&v| v == 0.5));
    }

    #[test]
    fn bilinear_doubles_a_column_gradient() {
        let mask = array![[0.0, 1.0], [0.0, 1.0]];
        let resized = ResizeHelper::bilinear(mask.view(), 2, 4).unwrap();
        for row in 0..2 {
            assert_eq!(resized[[row, 0]], 0.0);
            assert_eq!(resized[[row, 1]], 0.25);
            assert_eq!(resized[[row, 2]], 0.75);
            assert_eq!(resized[[row, 3]], 1.0);
        }
    }

    #[test]
    fn bilinear_rejects_empty_masks() {
        let mask = Mask::zeros((0, 4));
        assert!(ResizeHelper::bilinear(mask.view(), 4, 4).is_err());
    }

    #[test]
    fn size_match_leaves_equal_shapes_untouched() {
        let mask_a = Mask::from_elem((4, 4), 0.25);
        let mask_b = Mask::from_elem((4, 4), 0.5);
        let (out_a, out_b) = ResizeHelper::size_match(mask_a.clone(), mask_b.clone()).unwrap();
        assert_eq!(out_a, mask_a);
        assert_eq!(out_b, mask_b);
    }

    #[test]
    fn size_match_targets_the_per_dimension_maximum() {
        let mask_a = Mask::from_elem((4, 2), 1.0);
        let mask_b = Mask::from_elem((2, 4), 0.5);
        let (out_a, out_b) = ResizeHelper::size_match(mask_a, mask_b).unwrap();
        assert_eq!(out_a.dim(), (4, 4));
        assert_eq!(out_b.dim(), (4, 4));
        assert!(out_a.iter().all(|&v| v == 1.0));
        assert!(out_b.iter().all(|&v| v == 0.5));
    }
}
