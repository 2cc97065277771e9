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
            let hsl = Hsl::new(hue, 0.70, 0.52);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Category → Color32
// ---------------------------------------------------------------------------

/// Stable colours for a fixed list of category labels (sites, booster
/// categories). The colour of a label does not depend on which labels are
/// currently visible, so filtering never recolours a chart.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    mapping: Vec<(String, Color32)>,
    default_color: Color32,
}

impl CategoryColors {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let mapping = labels
            .iter()
            .map(|l| l.as_ref().to_string())
            .zip(generate_palette(labels.len()))
            .collect();
        CategoryColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a label; unknown labels are grey.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_entries() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        for (i, a) in p.iter().enumerate() {
            for b in &p[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn colors_are_stable_per_label() {
        let colors = CategoryColors::new(&["v1.0", "v1.1", "FT"]);
        let again = CategoryColors::new(&["v1.0", "v1.1", "FT"]);
        assert_eq!(colors.color_for("FT"), again.color_for("FT"));
        assert_ne!(colors.color_for("v1.0"), colors.color_for("v1.1"));
        assert_eq!(colors.color_for("B5"), Color32::GRAY);
    }
}
