//! Mutable transfer-function state: presets, selection, dirty tracking.

use crate::error::ModelError;
use crate::preset::Preset;
use crate::publish::{PaletteSink, PaletteUpdate};
use transferfn_core::{sample, ColorPoint, ControlPoints, OpacityPoint};

/// Sample count used when a caller has no opinion.
pub const DEFAULT_SAMPLE_COUNT: usize = 256;

/// The editable transfer-function state.
///
/// Every mutation routes through this type so the dirty flag stays
/// truthful: edits, selection changes, and scale changes mark it dirty,
/// and [`commit_if_dirty`](Self::commit_if_dirty) is the only way back to
/// clean. Presets are addressed by index; nothing holds a reference into
/// the preset list across calls.
#[derive(Debug)]
pub struct TransferFunctionModel {
    presets: Vec<Preset>,
    selected: usize,
    opacity_scale: f32,
    sample_count: usize,
    dirty: bool,
}

impl TransferFunctionModel {
    /// Create a model seeded with the factory presets, first one selected.
    ///
    /// Starts dirty so the first commit publishes the initial palette.
    /// Sample counts below 2 are raised to 2.
    pub fn new(sample_count: usize) -> Self {
        Self {
            presets: Preset::factory_defaults(),
            selected: 0,
            opacity_scale: 1.0,
            sample_count: sample_count.max(2),
            dirty: true,
        }
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_preset(&self) -> &Preset {
        &self.presets[self.selected]
    }

    pub fn opacity_scale(&self) -> f32 {
        self.opacity_scale
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Register a preset without selecting it. Returns its index.
    pub fn add_preset(&mut self, preset: Preset) -> usize {
        self.presets.push(preset);
        self.presets.len() - 1
    }

    /// Switch the active preset. Re-selecting the current index is a
    /// no-op; an out-of-range index leaves the selection untouched.
    pub fn select(&mut self, index: usize) -> Result<(), ModelError> {
        if index >= self.presets.len() {
            return Err(ModelError::SelectionOutOfRange {
                index,
                len: self.presets.len(),
            });
        }
        if index != self.selected {
            log::debug!("selected preset \"{}\"", self.presets[index].name);
            self.selected = index;
            self.dirty = true;
        }
        Ok(())
    }

    /// Set the global opacity multiplier. Values below 0 clamp to 0.
    /// Values above 1 are allowed on purpose: they over-saturate faint
    /// data, and the consumer decides how to treat opacities past 1.
    pub fn set_opacity_scale(&mut self, scale: f32) {
        let scale = scale.max(0.0);
        if scale != self.opacity_scale {
            self.opacity_scale = scale;
            self.dirty = true;
        }
    }

    /// Change the resample resolution used by future commits.
    pub fn set_sample_count(&mut self, count: usize) {
        let count = count.max(2);
        if count != self.sample_count {
            self.sample_count = count;
            self.dirty = true;
        }
    }

    /// Insert an interpolated color point at `position`.
    pub fn insert_color(&mut self, position: f32) -> Result<usize, ModelError> {
        let (colors, _) = self.editable_curves()?;
        let index = colors.insert(position);
        self.dirty = true;
        Ok(index)
    }

    /// Insert an opacity point at `position` with the given value.
    pub fn insert_opacity(&mut self, position: f32, opacity: f32) -> Result<usize, ModelError> {
        let (_, opacities) = self.editable_curves()?;
        let index = opacities.insert(position);
        let landed = opacities.as_slice()[index];
        opacities.move_point(
            index,
            OpacityPoint {
                position: landed.position,
                opacity,
            },
        );
        self.dirty = true;
        Ok(index)
    }

    /// Remove the color point at `index`. Endpoints stay put; returns
    /// whether a point was removed.
    pub fn remove_color(&mut self, index: usize) -> Result<bool, ModelError> {
        let (colors, _) = self.editable_curves()?;
        let removed = colors.remove(index);
        if removed {
            self.dirty = true;
        }
        Ok(removed)
    }

    /// Remove the opacity point at `index`. Endpoints stay put; returns
    /// whether a point was removed.
    pub fn remove_opacity(&mut self, index: usize) -> Result<bool, ModelError> {
        let (_, opacities) = self.editable_curves()?;
        let removed = opacities.remove(index);
        if removed {
            self.dirty = true;
        }
        Ok(removed)
    }

    /// Drag the color point at `index` toward `target`; it cannot cross
    /// its neighbours. Returns whether the point changed.
    pub fn move_color(&mut self, index: usize, target: ColorPoint) -> Result<bool, ModelError> {
        let (colors, _) = self.editable_curves()?;
        let moved = colors.move_point(index, target);
        if moved {
            self.dirty = true;
        }
        Ok(moved)
    }

    /// Drag the opacity point at `index` toward `target`; it cannot cross
    /// its neighbours. Returns whether the point changed.
    pub fn move_opacity(&mut self, index: usize, target: OpacityPoint) -> Result<bool, ModelError> {
        let (_, opacities) = self.editable_curves()?;
        let moved = opacities.move_point(index, target);
        if moved {
            self.dirty = true;
        }
        Ok(moved)
    }

    /// Resample the active preset and hand back a snapshot, if anything
    /// changed since the last commit. Returns `None` while clean, so
    /// callers can poll this every frame without redundant publishes.
    pub fn commit_if_dirty(&mut self) -> Option<PaletteUpdate> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;

        let preset = &self.presets[self.selected];
        let palette = sample(
            &preset.colors,
            &preset.opacities,
            self.sample_count,
            self.opacity_scale,
        );
        let opacities = preset
            .opacities
            .iter()
            .map(|point| OpacityPoint {
                position: point.position,
                opacity: point.opacity * self.opacity_scale,
            })
            .collect();
        log::debug!(
            "committed \"{}\" at {} samples",
            preset.name,
            self.sample_count
        );

        Some(PaletteUpdate {
            colors: preset.colors.to_vec(),
            opacities,
            palette,
            sample_count: self.sample_count,
        })
    }

    /// Commit and push the update into `sink`. Returns whether an update
    /// was produced.
    pub fn commit_and_publish(&mut self, sink: &dyn PaletteSink) -> bool {
        match self.commit_if_dirty() {
            Some(update) => {
                sink.submit(update);
                true
            }
            None => false,
        }
    }

    fn editable_curves(
        &mut self,
    ) -> Result<(&mut ControlPoints<ColorPoint>, &mut ControlPoints<OpacityPoint>), ModelError>
    {
        let preset = &mut self.presets[self.selected];
        if !preset.editable {
            return Err(ModelError::PresetNotEditable {
                name: preset.name.clone(),
            });
        }
        Ok((&mut preset.colors, &mut preset.opacities))
    }
}

impl Default for TransferFunctionModel {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_COUNT)
    }
}

/// A clone starts dirty so it republishes on its next commit.
impl Clone for TransferFunctionModel {
    fn clone(&self) -> Self {
        Self {
            presets: self.presets.clone(),
            selected: self.selected,
            opacity_scale: self.opacity_scale,
            sample_count: self.sample_count,
            dirty: true,
        }
    }
}
