//! Import of parsed color maps as read-only presets.

use crate::error::ModelError;
use crate::model::TransferFunctionModel;
use crate::preset::Preset;
use transferfn_core::{ColorPoint, ControlPoints};

impl TransferFunctionModel {
    /// Register the color map parsed from `source` as a read-only preset
    /// and select it. Returns the new preset's index.
    ///
    /// The triples are spread evenly across [0, 1]. The new preset reuses
    /// the opacity curve of the currently selected preset, so a freshly
    /// imported map keeps whatever opacity shape the user was working
    /// with. Fewer than two triples is an error and leaves the model
    /// untouched.
    pub fn load_rgb_triples(
        &mut self,
        source: &str,
        triples: &[[f32; 3]],
    ) -> Result<usize, ModelError> {
        if triples.len() < 2 {
            log::warn!(
                "rejected color map \"{}\": {} points",
                source,
                triples.len()
            );
            return Err(ModelError::InsufficientPoints {
                found: triples.len(),
            });
        }

        let last = (triples.len() - 1) as f32;
        let colors: Vec<ColorPoint> = triples
            .iter()
            .enumerate()
            .map(|(i, [r, g, b])| ColorPoint::new(i as f32 / last, *r, *g, *b))
            .collect();
        let opacities = self.selected_preset().opacities.clone();
        let name = display_name(source);
        log::info!("loaded color map \"{}\" ({} points)", name, triples.len());

        let index = self.add_preset(Preset::imported(name, ControlPoints::new(colors), opacities));
        self.select(index)?;
        Ok(index)
    }
}

/// Display name for a color map file: path and final extension stripped.
fn display_name(source: &str) -> String {
    let stem = source
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(source);
    match stem.rsplit_once('.') {
        Some((base, _)) if !base.is_empty() => base.to_string(),
        _ => stem.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_strips_path_and_extension() {
        assert_eq!(display_name("maps/cool_warm.1dt"), "cool_warm");
        assert_eq!(display_name("C:\\maps\\fire.json"), "fire");
        assert_eq!(display_name("plain"), "plain");
        assert_eq!(display_name("two.part.ext"), "two.part");
    }

    #[test]
    fn display_name_keeps_leading_dot_files() {
        assert_eq!(display_name(".hidden"), ".hidden");
    }
}
