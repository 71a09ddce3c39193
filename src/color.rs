use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: region label → Color32
// ---------------------------------------------------------------------------

/// Maps each region label to a distinct colour, used for chart lines and
/// the sidebar filter labels. Stable for a given region set because the
/// input is sorted.
#[derive(Debug, Clone)]
pub struct RegionColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl RegionColorMap {
    /// Build a colour map from the table's sorted region index.
    pub fn new(regions: &BTreeSet<String>) -> Self {
        let palette = generate_palette(regions.len());
        let mapping: BTreeMap<String, Color32> = regions
            .iter()
            .zip(palette.into_iter())
            .map(|(region, color)| (region.clone(), color))
            .collect();

        RegionColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a region; unknown or missing labels fall back
    /// to the default grey.
    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping
            .get(region)
            .copied()
            .unwrap_or(self.default_color)
    }
}
