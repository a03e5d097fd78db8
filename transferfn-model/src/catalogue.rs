//! Factory default presets built into the binary.

use crate::preset::Preset;
use transferfn_core::{ColorPoint, ControlPoints};

impl Preset {
    /// The presets every model starts with.
    pub fn factory_defaults() -> Vec<Preset> {
        vec![Self::jet(), Self::ice_fire()]
    }

    fn jet() -> Self {
        Self::new(
            "Jet",
            ControlPoints::new(vec![
                ColorPoint::new(0.0, 0.0, 0.0, 1.0),
                ColorPoint::new(0.3, 0.0, 1.0, 1.0),
                ColorPoint::new(0.6, 1.0, 1.0, 0.0),
                ColorPoint::new(1.0, 1.0, 0.0, 0.0),
            ]),
            ControlPoints::identity_ramp(),
        )
    }

    fn ice_fire() -> Self {
        let spacing = 1.0 / 16.0;
        let stops: [[f32; 3]; 16] = [
            [0.0, 0.0, 0.0],
            [0.0, 0.120394, 0.302678],
            [0.0, 0.216587, 0.524575],
            [0.0552529, 0.345022, 0.659495],
            [0.128054, 0.492592, 0.720287],
            [0.188952, 0.641306, 0.792096],
            [0.327672, 0.784939, 0.873426],
            [0.60824, 0.892164, 0.935546],
            [0.881376, 0.912184, 0.818097],
            [0.9514, 0.835615, 0.449271],
            [0.904479, 0.690486, 0.0],
            [0.854063, 0.510857, 0.0],
            [0.777096, 0.330175, 0.000885023],
            [0.672862, 0.139086, 0.00270085],
            [0.508812, 0.0, 0.0],
            [0.299413, 0.000366217, 0.000549325],
        ];

        let mut colors: Vec<ColorPoint> = stops
            .iter()
            .enumerate()
            .map(|(i, [r, g, b])| ColorPoint::new(i as f32 * spacing, *r, *g, *b))
            .collect();
        colors.push(ColorPoint::new(1.0, 0.0157473, 0.00332647, 0.0));

        Self::new(
            "Ice Fire",
            ControlPoints::new(colors),
            ControlPoints::identity_ramp(),
        )
    }
}
