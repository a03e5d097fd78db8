//! A named transfer function: paired color and opacity curves.

use serde::{Deserialize, Serialize};
use transferfn_core::{ColorPoint, ControlPoints, OpacityPoint};

/// A complete transfer function preset.
///
/// Built-in presets are editable. Presets imported from color-map files
/// are read-only so reloading the file always reproduces its colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub editable: bool,
    pub colors: ControlPoints<ColorPoint>,
    pub opacities: ControlPoints<OpacityPoint>,
}

impl Preset {
    /// Create an editable preset.
    pub fn new(
        name: impl Into<String>,
        colors: ControlPoints<ColorPoint>,
        opacities: ControlPoints<OpacityPoint>,
    ) -> Self {
        Self {
            name: name.into(),
            editable: true,
            colors,
            opacities,
        }
    }

    /// Create a read-only preset, as used for imported color maps.
    pub fn imported(
        name: impl Into<String>,
        colors: ControlPoints<ColorPoint>,
        opacities: ControlPoints<OpacityPoint>,
    ) -> Self {
        Self {
            editable: false,
            ..Self::new(name, colors, opacities)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imported_presets_are_read_only() {
        let preset = Preset::imported(
            "viridis",
            ControlPoints::new(vec![
                ColorPoint::new(0.0, 0.267, 0.005, 0.329),
                ColorPoint::new(1.0, 0.993, 0.906, 0.144),
            ]),
            ControlPoints::identity_ramp(),
        );
        assert!(!preset.editable);
        assert_eq!(preset.name, "viridis");
    }

    #[test]
    fn preset_roundtrips_through_json() {
        let mut colors = ControlPoints::new(vec![
            ColorPoint::new(0.0, 0.0, 0.0, 0.0),
            ColorPoint::new(1.0, 1.0, 1.0, 1.0),
        ]);
        colors.insert(0.4);
        let preset = Preset::new("grayscale", colors, ControlPoints::identity_ramp());

        let json = serde_json::to_string(&preset).unwrap();
        let back: Preset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, preset);
    }
}
