use series::SeriesPoint;

/// The chart shows at most this many trailing points.
pub const VISIBLE_WINDOW: usize = 20;

const EMPTY_DOMAIN: (f64, f64) = (0.0, 10.0);
const LABEL_WIDTH: usize = 10;
const MIN_CHART_WIDTH: usize = 8;
const MIN_CHART_HEIGHT: usize = 2;

/// Index range of the trailing window over a series of `len` points.
pub fn visible_window(len: usize) -> (usize, usize) {
    (len.saturating_sub(VISIBLE_WINDOW), len)
}

/// Y-axis bounds padded to 90% of the minimum and 110% of the maximum price,
/// falling back to a fixed range when the series is empty or flat at zero.
pub fn price_domain(points: &[SeriesPoint]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in points {
        min = min.min(point.price);
        max = max.max(point.price);
    }

    if !min.is_finite() || !max.is_finite() {
        return EMPTY_DOMAIN;
    }

    let (low, high) = (min * 0.9, max * 1.1);
    if high - low <= f64::EPSILON {
        return EMPTY_DOMAIN;
    }
    (low, high)
}

/// Renders the trailing window of the series as a fixed-size character grid
/// with the domain bounds labelled on the left edge.
pub fn render_chart(points: &[SeriesPoint], width: usize, height: usize) -> String {
    let width = width.max(MIN_CHART_WIDTH);
    let height = height.max(MIN_CHART_HEIGHT);

    let (start, end) = visible_window(points.len());
    let visible = &points[start..end];
    if visible.is_empty() {
        return String::from("(no samples yet)\n");
    }

    let (low, high) = price_domain(visible);
    let span = high - low;
    let mut grid = vec![vec![' '; width]; height];
    let count = visible.len();
    for (index, point) in visible.iter().enumerate() {
        let column = if count == 1 {
            0
        } else {
            index * (width - 1) / (count - 1)
        };
        let unit = ((point.price - low) / span).clamp(0.0, 1.0);
        let row = ((1.0 - unit) * (height - 1) as f64).round() as usize;
        grid[row][column] = '*';
    }

    let mut out = String::new();
    for (row_index, row) in grid.iter().enumerate() {
        if row_index == 0 {
            out.push_str(&format!("{high:>LABEL_WIDTH$.2}"));
        } else if row_index == height - 1 {
            out.push_str(&format!("{low:>LABEL_WIDTH$.2}"));
        } else {
            out.push_str(&" ".repeat(LABEL_WIDTH));
        }
        out.push_str(" |");
        out.extend(row.iter());
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }
    out.push_str(&" ".repeat(LABEL_WIDTH + 1));
    out.push('+');
    out.push_str(&"-".repeat(width));
    out.push('\n');
    out.push_str(&format!("{}time {start}..{end}\n", " ".repeat(LABEL_WIDTH + 2)));
    out
}

#[cfg(test)]
mod tests {
    use series::SeriesPoint;

    use super::{price_domain, render_chart, visible_window};

    fn rising_series(len: usize) -> Vec<SeriesPoint> {
        (0..len)
            .map(|index| SeriesPoint::new(index as u64, 10.0 + index as f64))
            .collect()
    }

    #[test]
    fn domain_pads_min_and_max() {
        let points = vec![SeriesPoint::new(0, 10.0), SeriesPoint::new(1, 20.0)];

        assert_eq!(price_domain(&points), (9.0, 22.0));
    }

    #[test]
    fn empty_series_falls_back_to_fixed_domain() {
        assert_eq!(price_domain(&[]), (0.0, 10.0));
    }

    #[test]
    fn all_zero_series_falls_back_to_fixed_domain() {
        let points = vec![SeriesPoint::new(0, 0.0), SeriesPoint::new(1, 0.0)];

        assert_eq!(price_domain(&points), (0.0, 10.0));
    }

    #[test]
    fn window_keeps_the_last_twenty_points() {
        assert_eq!(visible_window(5), (0, 5));
        assert_eq!(visible_window(20), (0, 20));
        assert_eq!(visible_window(25), (5, 25));
    }

    #[test]
    fn empty_series_renders_placeholder() {
        assert_eq!(render_chart(&[], 40, 10), "(no samples yet)\n");
    }

    #[test]
    fn single_point_lands_in_the_grid() {
        let rendered = render_chart(&[SeriesPoint::new(0, 10.0)], 20, 5);

        assert_eq!(rendered.matches('*').count(), 1);
    }

    #[test]
    fn rising_series_puts_newer_points_on_higher_rows() {
        let points = rising_series(2);
        let rendered = render_chart(&points, 20, 8);
        let rows: Vec<&str> = rendered.lines().collect();

        let first_star_row = rows.iter().position(|row| row.contains('*')).unwrap();
        let last_star_row = rows.iter().rposition(|row| row.contains('*')).unwrap();

        // Higher price renders nearer the top of the grid.
        assert!(first_star_row < last_star_row);
        let top = &rows[first_star_row];
        let bottom = &rows[last_star_row];
        assert!(top.rfind('*').unwrap() > bottom.rfind('*').unwrap());
    }

    #[test]
    fn long_series_reports_the_trailing_window() {
        let rendered = render_chart(&rising_series(25), 40, 6);

        assert!(rendered.contains("time 5..25"));
    }

    #[test]
    fn labels_carry_the_padded_domain_bounds() {
        let points = vec![SeriesPoint::new(0, 10.0), SeriesPoint::new(1, 20.0)];
        let rendered = render_chart(&points, 20, 5);

        assert!(rendered.contains("22.00"));
        assert!(rendered.contains("9.00"));
    }
}
