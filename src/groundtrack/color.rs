use crate::groundtrack::types::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorMode {
    /// Red to yellow by distance covered per step.
    Gradient,
    Uniform(Rgb),
}

/// One color per edge between consecutive TEME positions.
///
/// With a fixed time step the straight-line distance between samples is a
/// speed proxy: the slowest edge gets `G = 0`, the fastest `G = 1`. When all
/// distances are equal every edge gets `G = 0`.
pub fn edge_colors(positions: &[[f64; 3]], mode: ColorMode) -> Vec<Rgb> {
    let distances: Vec<f64> = positions
        .windows(2)
        .map(|pair| distance(pair[0], pair[1]))
        .collect();

    match mode {
        ColorMode::Uniform(color) => vec![color; distances.len()],
        ColorMode::Gradient => {
            let min = distances.iter().copied().fold(f64::INFINITY, f64::min);
            let max = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let range = max - min;

            distances
                .iter()
                .map(|d| {
                    let g = if range > 0.0 { (d - min) / range } else { 0.0 };
                    Rgb::new(1.0, g, 0.0)
                })
                .collect()
        }
    }
}

fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let dz = b[2] - a[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}
