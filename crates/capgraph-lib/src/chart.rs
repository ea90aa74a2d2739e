//! Fixed-height ASCII chart rendering
//!
//! A port of the classic terminal line-chart format: each series is drawn
//! with box-drawing characters on a shared vertical scale, with an
//! 8-character value label and an axis column on the left. Values round to
//! the nearest of `height` buckets, so vertical resolution is lossy for
//! wide-ranging data; that is inherent to the format.

/// Vertical scale settings, immutable for one render call.
#[derive(Debug, Clone, Copy)]
pub struct ChartConfig {
    /// Number of value rows the chart may use.
    pub height: usize,
    /// The y-axis floor is pinned at or below this value regardless of the
    /// data minimum, so separate charts keep a comparable scale.
    pub minimum: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            height: 15,
            minimum: 0.0,
        }
    }
}

/// Draw one or more series on a shared vertical scale.
///
/// The output has at most `height` value rows plus the axis decoration.
/// Input with no finite values renders as an empty string rather than an
/// error. Pure and deterministic.
pub fn render(series: &[Vec<f64>], config: &ChartConfig) -> String {
    let finite: Vec<f64> = series
        .iter()
        .flat_map(|values| values.iter().copied())
        .filter(|value| value.is_finite())
        .collect();
    let Some((&first, rest)) = finite.split_first() else {
        return String::new();
    };
    let data_min = rest.iter().fold(first, |acc, &value| acc.min(value));
    let data_max = rest.iter().fold(first, |acc, &value| acc.max(value));

    // Pin the floor at or below the configured minimum.
    let minimum = data_min.min(config.minimum);
    let maximum = data_max;
    let interval = maximum - minimum;
    let ratio = if interval > 0.0 {
        config.height as f64 / interval
    } else {
        1.0
    };
    let min2 = (minimum * ratio).floor() as i64;
    let max2 = (maximum * ratio).ceil() as i64;
    let rows = (max2 - min2) as usize;
    let columns = series.iter().map(Vec::len).max().unwrap_or(0);

    let mut grid = vec![vec![' '; columns]; rows + 1];
    let mut axis: Vec<char> = (0..=rows as i64)
        .map(|row| if row + min2 == 0 { '┼' } else { '┤' })
        .collect();

    let level = |value: f64| (value * ratio).round() as i64 - min2;
    for values in series {
        if let Some(&start) = values.first() {
            if start.is_finite() {
                axis[rows - level(start) as usize] = '┼';
            }
        }
        for (x, pair) in values.windows(2).enumerate() {
            if !pair[0].is_finite() || !pair[1].is_finite() {
                continue;
            }
            let y0 = level(pair[0]);
            let y1 = level(pair[1]);
            if y0 == y1 {
                grid[rows - y0 as usize][x] = '─';
            } else {
                if y0 > y1 {
                    grid[rows - y1 as usize][x] = '╰';
                    grid[rows - y0 as usize][x] = '╮';
                } else {
                    grid[rows - y1 as usize][x] = '╭';
                    grid[rows - y0 as usize][x] = '╯';
                }
                let (low, high) = (y0.min(y1), y0.max(y1));
                for y in low + 1..high {
                    grid[rows - y as usize][x] = '│';
                }
            }
        }
    }

    let span = if rows == 0 { 1.0 } else { rows as f64 };
    let mut lines = Vec::with_capacity(rows + 1);
    for (row, cells) in grid.iter().enumerate() {
        let label = maximum - row as f64 * interval / span;
        let data: String = cells.iter().collect();
        let line = format!("{:8.2} {}{}", label, axis[row], data);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// A zero-valued reference row of the given length, printed beneath a chart
/// as a visual baseline. Zero length renders nothing.
pub fn render_baseline(len: usize) -> String {
    if len == 0 {
        return String::new();
    }
    render(&[vec![0.0; len]], &ChartConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(height: usize, minimum: f64) -> ChartConfig {
        ChartConfig { height, minimum }
    }

    #[test]
    fn empty_series_render_to_nothing() {
        assert_eq!(render(&[], &cfg(15, 10.0)), "");
        assert_eq!(render(&[vec![]], &cfg(15, 10.0)), "");
    }

    #[test]
    fn line_count_stays_within_the_configured_height() {
        let values: Vec<f64> = (0..100)
            .map(|i| 110.0 + (i as f64 * 0.7).sin() * 90.0)
            .collect();
        for height in [1usize, 5, 15, 40] {
            let out = render(&[values.clone()], &cfg(height, 10.0));
            let lines = out.lines().count();
            assert!(lines <= height + 2, "height {height} produced {lines} lines");
        }
    }

    #[test]
    fn floor_is_pinned_at_or_below_the_configured_minimum() {
        let out = render(&[vec![50.0, 60.0]], &cfg(4, 10.0));
        assert!(out.lines().next().unwrap().starts_with("   60.00"));
        assert!(out.lines().last().unwrap().starts_with("   10.00"));
    }

    #[test]
    fn data_below_the_floor_extends_the_scale() {
        // A datum under the configured minimum drags the floor down with it.
        let out = render(&[vec![4.0, 20.0]], &cfg(4, 10.0));
        assert!(out.lines().last().unwrap().starts_with("    4.00"));
    }

    #[test]
    fn rising_pair_draws_a_step() {
        let out = render(&[vec![50.0, 60.0]], &cfg(4, 10.0));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "   60.00 ┼╭");
        assert_eq!(lines[1], "   50.00 ┼╯");
        assert_eq!(lines.last().unwrap(), &"   10.00 ┤");
    }

    #[test]
    fn flat_series_renders_a_single_row() {
        let out = render(&[vec![7.0, 7.0, 7.0]], &cfg(15, 10.0));
        assert_eq!(out, "    7.00 ┼──");
    }

    #[test]
    fn deterministic_given_identical_inputs() {
        let values = vec![12.0, 48.5, 33.1, 90.0];
        let first = render(&[values.clone()], &cfg(6, 10.0));
        let second = render(&[values], &cfg(6, 10.0));
        assert_eq!(first, second);
    }

    #[test]
    fn shared_scale_across_multiple_series() {
        let out = render(&[vec![10.0, 20.0], vec![90.0]], &cfg(4, 10.0));
        assert!(out.lines().next().unwrap().starts_with("   90.00"));
        assert!(out.lines().last().unwrap().starts_with("   10.00"));
    }

    #[test]
    fn baseline_is_a_single_zero_row() {
        assert_eq!(render_baseline(5), "    0.00 ┼────");
        assert_eq!(render_baseline(1), "    0.00 ┼");
        assert_eq!(render_baseline(0), "");
    }
}
