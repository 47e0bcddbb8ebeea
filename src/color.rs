use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use aim_trends::state::{SeriesEmphasis, SeriesKind};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize, lightness: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, lightness);
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
// Series colours for one scenario chart
// ---------------------------------------------------------------------------

/// Accent colour of a scenario chart plus the derived trend colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColors {
    pub score: Color32,
    pub trend: Color32,
}

impl SeriesColors {
    /// Colours for every scenario chart, in dataset order.
    pub fn for_scenarios(n: usize) -> Vec<SeriesColors> {
        let scores = generate_palette(n, 0.40);
        let trends = generate_palette(n, 0.65);
        scores
            .into_iter()
            .zip(trends)
            .map(|(score, trend)| SeriesColors { score, trend })
            .collect()
    }

    /// Stroke colour of `kind` with the current emphasis applied.
    pub fn stroke(&self, kind: SeriesKind, emphasis: &SeriesEmphasis) -> Color32 {
        let base = match kind {
            SeriesKind::Score => self.score,
            SeriesKind::Trend => self.trend,
        };
        base.gamma_multiply(emphasis.weight(kind))
    }
}
