use std::error::Error;

use plotters::coord::combinators::WithKeyPoints;
use plotters::prelude::*;

use crate::data::ConvergenceTable;
use crate::data::convergence::EIGENVALUE_COLUMNS;
use crate::render::canvas::{Area, FigureSpec};

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// One log-log panel per eigenvalue mode, side by side.
pub(crate) fn draw_convergence(
    root: &Area<'_>,
    table: &ConvergenceTable,
    spec: &FigureSpec,
    font: &str,
) -> Result<(), Box<dyn Error>> {
    let panels = root.split_evenly((1, EIGENVALUE_COLUMNS));
    let (x_lo, x_hi) = log_bounds(table.grid_sizes().iter().map(|&n| f64::from(n)));

    for (k, panel) in panels.iter().enumerate() {
        let mode = k + 1;
        let series = table
            .mode_series(mode)
            .ok_or_else(|| format!("no eigenvalue column for mode {mode}"))?;
        let (y_lo, y_hi) = log_bounds(series.iter().map(|&(_, y)| y));

        let mut chart = ChartBuilder::on(panel)
            .caption(
                format!("Mode {mode} Eigenvalue Convergence"),
                (font, spec.pt(11.0)),
            )
            .margin(spec.px(5.0))
            .x_label_area_size(spec.px(30.0))
            .y_label_area_size(spec.px(44.0))
            .build_cartesian_2d(log_axis(x_lo, x_hi), log_axis(y_lo, y_hi))?;

        chart
            .configure_mesh()
            .x_desc("Grid Size N")
            .y_desc("Eigenvalue")
            .label_style((font, spec.pt(8.0)))
            .axis_desc_style((font, spec.pt(10.0)))
            .bold_line_style(BLACK.mix(0.3))
            .light_line_style(BLACK.mix(0.08))
            .x_label_formatter(&|v| format_tick(*v))
            .y_label_formatter(&|v| format_tick(*v))
            .draw()?;

        let stroke = spec.px(2.0) as u32;
        chart.draw_series(LineSeries::new(
            series.iter().copied(),
            LINE_COLOR.stroke_width(stroke),
        ))?;
        chart.draw_series(
            series
                .iter()
                .map(|&p| Circle::new(p, spec.px(3.0), LINE_COLOR.filled())),
        )?;
    }
    Ok(())
}

/// Axis bounds with a little headroom on a log scale. Inputs are positive.
fn log_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() || lo <= 0.0 {
        return (1.0, 10.0);
    }
    (lo / 1.15, hi * 1.15)
}

/// Log axis with explicit ticks. Plotters' own log ticks vanish on ranges
/// narrower than a decade, which is the usual case for converged eigenvalues.
fn log_axis(lo: f64, hi: f64) -> WithKeyPoints<LogCoord<f64>> {
    (lo..hi).log_scale().with_key_points(log_ticks(lo, hi))
}

/// 1-2-5 ticks per decade (decades only on very wide ranges), or five
/// geometrically spaced ticks when fewer than three nice values fit.
fn log_ticks(lo: f64, hi: f64) -> Vec<f64> {
    let mantissas: &[f64] = if hi / lo > 1e3 { &[1.0] } else { &[1.0, 2.0, 5.0] };
    let first = lo.log10().floor() as i32;
    let last = hi.log10().ceil() as i32;
    let nice: Vec<f64> = (first..=last)
        .flat_map(|e| mantissas.iter().map(move |m| m * 10f64.powi(e)))
        .filter(|v| (lo..=hi).contains(v))
        .collect();
    if nice.len() >= 3 {
        return nice;
    }
    let ratio = hi / lo;
    (1..=5)
        .map(|i| lo * ratio.powf(f64::from(i) / 6.0))
        .collect()
}

fn format_tick(v: f64) -> String {
    if v >= 1e5 || v < 1e-2 {
        return format!("{v:.1e}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use plotters::coord::ranged1d::BoldPoints;

    use super::*;

    #[test]
    fn log_bounds_pad_and_fallback() {
        let (lo, hi) = log_bounds([20.0, 40.0, 80.0].into_iter());
        assert!(lo < 20.0 && lo > 15.0);
        assert!(hi > 80.0 && hi < 100.0);
        // single grid size still spans a range
        let (lo, hi) = log_bounds(std::iter::once(50.0));
        assert!(lo < 50.0 && hi > 50.0);
        assert_eq!(log_bounds(std::iter::empty()), (1.0, 10.0));
    }

    #[test]
    fn converged_panels_keep_their_ticks() {
        // eigenvalues that barely move across grid refinements
        let series = [19.2, 19.6, 19.7];
        let (lo, hi) = log_bounds(series.into_iter());
        let ticks = log_axis(lo, hi).key_points(BoldPoints(10));
        assert!(ticks.len() >= 2, "{ticks:?}");
        assert!(ticks.iter().all(|t| (lo..=hi).contains(t)));
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn wide_ranges_use_round_ticks() {
        let ticks = log_ticks(10.0, 200.0);
        assert_eq!(ticks, vec![10.0, 20.0, 50.0, 100.0, 200.0]);
        let ticks = log_ticks(1.0, 1e6);
        assert_eq!(ticks.len(), 7);
        assert_eq!(ticks[3], 1000.0);
    }

    #[test]
    fn ticks_are_compact() {
        assert_eq!(format_tick(20.0), "20");
        assert_eq!(format_tick(19.7392), "19.739");
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(250000.0), "2.5e5");
    }
}
