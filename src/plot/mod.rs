//! PNG figure rendering
//!
//! One function per figure, all rendered with plotters' bitmap backend.
//! The driver decides which figures to produce and where they go.

use crate::distribution::{DayDistribution, DAYS_IN_YEAR};
use crate::error::Result;
use plotters::prelude::*;
use std::path::Path;

const CURVE_SIZE: (u32, u32) = (900, 900);
const HEATMAP_SIZE: (u32, u32) = (1400, 800);

/// Draw one or more labeled probability curves over room size
pub fn probability_curves(
    path: &Path,
    title: &str,
    room_sizes: &[usize],
    series: &[(&str, &[f64])],
) -> Result<()> {
    let x_max = room_sizes.iter().copied().max().unwrap_or(1) as f64;

    let root = BitMapBackend::new(path, CURVE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..1.05f64)?;

    chart
        .configure_mesh()
        .x_desc("# People in Room")
        .y_desc("Probability")
        .draw()?;

    for (i, (label, values)) in series.iter().enumerate() {
        let color = Palette99::pick(i);
        let points = room_sizes
            .iter()
            .zip(values.iter())
            .map(|(&n, &p)| (n as f64, p));
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(3)))?
            .label(*label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Scatter the per-day probabilities of a distribution against the
/// uniform 1/365 reference line
pub fn birth_probability_scatter(path: &Path, dist: &DayDistribution) -> Result<()> {
    let uniform_p = 1.0 / DAYS_IN_YEAR as f64;
    let y_max = dist
        .weights()
        .iter()
        .copied()
        .fold(uniform_p, f64::max)
        * 1.25;

    let root = BitMapBackend::new(path, CURVE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Birth Probability vs. Yearday", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..366.0, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Yearday")
        .y_desc("Probability")
        .draw()?;

    let points = dist
        .weights()
        .iter()
        .enumerate()
        .map(|(i, &p)| Circle::new(((i + 1) as f64, p), 2, BLUE.filled()));
    chart
        .draw_series(points)?
        .label("Actual Probs")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, uniform_p), (366.0, uniform_p)],
            BLACK.stroke_width(2),
        )))?
        .label("Uniform P (1/365)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// 12x31 heatmap of total births by month and day-of-month
///
/// Cells for nonexistent dates stay unfilled.
pub fn births_heatmap(path: &Path, grid: &[[u64; 31]; 12]) -> Result<()> {
    let max = grid
        .iter()
        .flat_map(|row| row.iter())
        .copied()
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    let root = BitMapBackend::new(path, HEATMAP_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Number of Births vs. Month and Day", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.5..31.5, 0.5..12.5)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Day of Month")
        .y_desc("Month")
        .x_labels(31)
        .y_labels(12)
        .draw()?;

    chart.draw_series(grid.iter().enumerate().flat_map(|(m, row)| {
        row.iter().enumerate().filter(|(_, &v)| v > 0).map(move |(d, &v)| {
            let intensity = v as f64 / max;
            let color = HSLColor(0.08, 0.9, 0.15 + 0.75 * intensity);
            let x = (d + 1) as f64;
            let y = (m + 1) as f64;
            Rectangle::new([(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)], color.filled())
        })
    }))?;

    root.present()?;
    Ok(())
}

/// Line plot of a distribution's weights by day
pub fn weight_profile(path: &Path, title: &str, dist: &DayDistribution) -> Result<()> {
    let y_max = dist.weights().iter().copied().fold(0.0, f64::max) * 1.1;

    let root = BitMapBackend::new(path, CURVE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..366.0, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Yearday")
        .y_desc("Probability")
        .draw()?;

    let points = dist
        .weights()
        .iter()
        .enumerate()
        .map(|(i, &p)| ((i + 1) as f64, p));
    chart.draw_series(LineSeries::new(points, RED.stroke_width(3)))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_figures_render_to_png() {
        let dir = tempdir().unwrap();

        let room_sizes: Vec<usize> = (1..=10).collect();
        let curve: Vec<f64> = room_sizes.iter().map(|&n| n as f64 / 10.0).collect();
        let path = dir.path().join("curve.png");
        probability_curves(&path, "Test Curve", &room_sizes, &[("p", &curve)]).unwrap();
        assert!(path.exists());

        let path = dir.path().join("scatter.png");
        birth_probability_scatter(&path, DayDistribution::uniform()).unwrap();
        assert!(path.exists());

        let path = dir.path().join("profile.png");
        weight_profile(&path, "Profile", &DayDistribution::sinusoidal()).unwrap();
        assert!(path.exists());

        let mut grid = [[0u64; 31]; 12];
        grid[0][0] = 10;
        grid[11][30] = 5;
        let path = dir.path().join("heatmap.png");
        births_heatmap(&path, &grid).unwrap();
        assert!(path.exists());
    }
}
