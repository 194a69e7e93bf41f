//! Search heatmap over the 8x8 board

use std::collections::HashMap;

/// Board files in display order
pub const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Strongest alpha a cell can reach
pub const MAX_INTENSITY: f64 = 0.85;

/// Gain applied to a square's visit share before clamping
pub const INTENSITY_GAIN: f64 = 1.2;

/// Heat colour (RGB) blended over the cell background
pub const HEAT_RGB: (u8, u8, u8) = (255, 70, 0);

/// Display alpha for a visit share: `min(0.85, value * 1.2)`, floored at 0.
pub fn intensity(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * INTENSITY_GAIN).clamp(0.0, MAX_INTENSITY)
}

/// Square name for a grid cell; row 0 is rank 8, column 0 is file a.
pub fn square_name(row: usize, col: usize) -> String {
    format!("{}{}", FILES[col % 8], 8 - (row % 8))
}

/// Per-cell display intensities, rank 8 first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Heatmap {
    cells: [[f64; 8]; 8],
}

impl Heatmap {
    /// Recompute every cell from a sparse square mapping; `None` clears the grid.
    pub fn render(&mut self, data: Option<&HashMap<String, f64>>) {
        for (row, cells) in self.cells.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let value = data
                    .and_then(|d| d.get(&square_name(row, col)))
                    .copied()
                    .unwrap_or(0.0);
                *cell = intensity(value);
            }
        }
    }

    pub fn clear(&mut self) {
        self.render(None);
    }

    /// Intensity grid, rank 8 to rank 1, file a to h
    pub fn rows(&self) -> &[[f64; 8]; 8] {
        &self.cells
    }

    /// Intensity for a square name such as `"e4"`
    pub fn get(&self, square: &str) -> Option<f64> {
        let mut chars = square.chars();
        let file = chars.next()?;
        let rank = chars.next()?.to_digit(10)? as usize;
        if chars.next().is_some() || !(1..=8).contains(&rank) {
            return None;
        }
        let col = FILES.iter().position(|f| *f == file)?;
        Some(self.cells[8 - rank][col])
    }

    /// Heat colour blended over `background` at the cell's intensity
    pub fn blend(alpha: f64, background: (u8, u8, u8)) -> (u8, u8, u8) {
        let mix = |fg: u8, bg: u8| -> u8 {
            (fg as f64 * alpha + bg as f64 * (1.0 - alpha)).round() as u8
        };
        (
            mix(HEAT_RGB.0, background.0),
            mix(HEAT_RGB.1, background.1),
            mix(HEAT_RGB.2, background.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_scaling() {
        assert_eq!(intensity(0.0), 0.0);
        assert!((intensity(0.5) - 0.6).abs() < 1e-12);
        assert_eq!(intensity(0.7084), MAX_INTENSITY);
        assert_eq!(intensity(0.71), MAX_INTENSITY);
        assert_eq!(intensity(5.0), MAX_INTENSITY);
        assert_eq!(intensity(-0.3), 0.0);
        assert_eq!(intensity(f64::NAN), 0.0);
    }

    #[test]
    fn test_square_order_rank8_first() {
        assert_eq!(square_name(0, 0), "a8");
        assert_eq!(square_name(0, 7), "h8");
        assert_eq!(square_name(7, 0), "a1");
        assert_eq!(square_name(4, 4), "e4");
    }

    #[test]
    fn test_render_sparse_mapping() {
        let mut heatmap = Heatmap::default();
        let data = HashMap::from([("e4".to_string(), 0.5), ("a8".to_string(), 1.0)]);

        heatmap.render(Some(&data));

        assert!((heatmap.get("e4").unwrap() - 0.6).abs() < 1e-12);
        assert_eq!(heatmap.rows()[0][0], MAX_INTENSITY);
        assert_eq!(heatmap.get("d4"), Some(0.0));
        assert_eq!(heatmap.get("z9"), None);
    }

    #[test]
    fn test_render_none_clears() {
        let mut heatmap = Heatmap::default();
        let data = HashMap::from([("c3".to_string(), 0.4)]);
        heatmap.render(Some(&data));
        assert!(heatmap.get("c3").unwrap() > 0.0);

        heatmap.render(None);
        assert!(heatmap.rows().iter().flatten().all(|v| *v == 0.0));
    }

    #[test]
    fn test_blend() {
        assert_eq!(Heatmap::blend(0.0, (250, 250, 250)), (250, 250, 250));
        assert_eq!(Heatmap::blend(1.0, (250, 250, 250)), HEAT_RGB);
    }
}
