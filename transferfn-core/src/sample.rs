//! Dense resampling of control curves into palette buffers.

use crate::points::{ColorPoint, OpacityPoint};
use crate::sequence::ControlPoints;
use serde::{Deserialize, Serialize};

/// A transfer function resampled at evenly spaced positions.
///
/// `rgba` holds 4 bytes per sample with the alpha byte fixed at 255; the
/// real opacity curve lives in `alpha` as (position, opacity) pairs so a
/// preview texture and the renderer read from the same sampling pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampledPalette {
    /// RGBA bytes, 4 per sample.
    pub rgba: Vec<u8>,
    /// RGB channel values, 3 per sample.
    pub rgb: Vec<f32>,
    /// (position, scaled opacity) pairs, 2 per sample.
    pub alpha: Vec<f32>,
}

impl SampledPalette {
    pub fn sample_count(&self) -> usize {
        self.rgba.len() / 4
    }
}

/// Resample `colors` and `opacities` at `sample_count` evenly spaced
/// positions across [0, 1].
///
/// Opacities are multiplied by `opacity_scale` before being written out.
/// The product is deliberately left unclamped: scales above 1 are how a
/// caller over-saturates a faint dataset, and the consumer decides how to
/// treat values past 1. Needs at least two samples.
pub fn sample(
    colors: &ControlPoints<ColorPoint>,
    opacities: &ControlPoints<OpacityPoint>,
    sample_count: usize,
    opacity_scale: f32,
) -> SampledPalette {
    debug_assert!(sample_count >= 2, "a palette needs at least two samples");
    let step = 1.0 / (sample_count - 1) as f32;

    let mut rgba = Vec::with_capacity(sample_count * 4);
    let mut rgb = Vec::with_capacity(sample_count * 3);
    let mut alpha = Vec::with_capacity(sample_count * 2);

    for i in 0..sample_count {
        let position = (i as f32 * step).clamp(0.0, 1.0);
        let color = colors.value_at(position);
        let opacity = opacities.value_at(position).opacity * opacity_scale;

        rgba.push((color.r * 255.0) as u8);
        rgba.push((color.g * 255.0) as u8);
        rgba.push((color.b * 255.0) as u8);
        rgba.push(255);

        rgb.push(color.r);
        rgb.push(color.g);
        rgb.push(color.b);

        alpha.push(position);
        alpha.push(opacity);
    }

    SampledPalette { rgba, rgb, alpha }
}
