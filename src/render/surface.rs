use std::error::Error;

use plotters::prelude::*;

use crate::data::ModeGrid;
use crate::render::canvas::{Area, FigureSpec};
use crate::render::colormap::{Normalize, RD_BU_R};

/// Camera angles for the 3D view, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub yaw: f64,
    pub pitch: f64,
}

const COLORBAR_STEPS: usize = 128;

/// Shaded surface of one mode with a colorbar on the right.
pub(crate) fn draw_mode_surface(
    root: &Area<'_>,
    mode: usize,
    grid: &ModeGrid,
    spec: &FigureSpec,
    font: &str,
    view: View,
) -> Result<(), Box<dyn Error>> {
    let (width, _) = root.dim_in_pixel();
    let (plot_area, bar_area) = root.split_horizontally((f64::from(width) * 0.84) as i32);

    let (amp_lo, amp_hi) = grid.amplitude_range();
    let norm = Normalize::new(amp_lo, amp_hi);
    let (x_lo, x_hi) = padded(grid.x_range());
    let (y_lo, y_hi) = padded(grid.y_range());
    let (z_lo, z_hi) = padded((amp_lo, amp_hi));

    // plotters' vertical axis is the second coordinate: points are (x, amplitude, y)
    let mut chart = ChartBuilder::on(&plot_area)
        .caption(format!("Membrane Mode {mode}"), (font, spec.pt(14.0)))
        .margin(spec.px(8.0))
        .build_cartesian_3d(x_lo..x_hi, z_lo..z_hi, y_lo..y_hi)?;
    chart.with_projection(|mut pb| {
        pb.yaw = view.yaw;
        pb.pitch = view.pitch;
        pb.scale = 0.8;
        pb.into_matrix()
    });
    chart
        .configure_axes()
        .label_style((font, spec.pt(8.0)))
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .draw()?;

    chart.draw_series(
        surface_quads(grid, &norm, view)
            .into_iter()
            .map(|(points, color)| Polygon::new(points, color.filled())),
    )?;

    let label_style = TextStyle::from((font, spec.pt(10.0)).into_font());
    let x_mid = 0.5 * (x_lo + x_hi);
    let y_mid = 0.5 * (y_lo + y_hi);
    chart.draw_series([
        Text::new("X coordinate".to_string(), (x_mid, z_lo, y_lo), label_style.clone()),
        Text::new("Y coordinate".to_string(), (x_hi, z_lo, y_mid), label_style.clone()),
        Text::new("Amplitude".to_string(), (x_lo, z_hi, y_hi), label_style),
    ])?;

    draw_colorbar(&bar_area, (amp_lo, amp_hi), spec, font)
}

/// Quads between neighbouring grid points, farthest first so nearer faces
/// paint over them. Each quad takes the colour of its mean amplitude.
fn surface_quads(
    grid: &ModeGrid,
    norm: &Normalize,
    view: View,
) -> Vec<(Vec<(f64, f64, f64)>, RGBColor)> {
    let n = grid.n();
    if n < 2 {
        return Vec::new();
    }
    let x_norm = {
        let (lo, hi) = grid.x_range();
        Normalize::new(lo, hi)
    };
    let y_norm = {
        let (lo, hi) = grid.y_range();
        Normalize::new(lo, hi)
    };
    let (sin_yaw, cos_yaw) = view.yaw.sin_cos();

    let mut quads = Vec::with_capacity((n - 1) * (n - 1));
    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let corners = [(i, j), (i, j + 1), (i + 1, j + 1), (i + 1, j)];
            let points: Vec<(f64, f64, f64)> = corners
                .iter()
                .map(|&(a, b)| (grid.x[[a, b]], grid.amplitude[[a, b]], grid.y[[a, b]]))
                .collect();
            let mean_amp = points.iter().map(|p| p.1).sum::<f64>() / 4.0;
            let cx = points.iter().map(|p| x_norm.apply(p.0)).sum::<f64>() / 4.0;
            let cy = points.iter().map(|p| y_norm.apply(p.2)).sum::<f64>() / 4.0;
            let depth = cx * sin_yaw + cy * cos_yaw;
            quads.push((depth, points, RD_BU_R.at(norm.apply(mean_amp))));
        }
    }
    quads.sort_by(|a, b| b.0.total_cmp(&a.0));
    quads
        .into_iter()
        .map(|(_, points, color)| (points, color))
        .collect()
}

fn draw_colorbar(
    area: &Area<'_>,
    (lo, hi): (f64, f64),
    spec: &FigureSpec,
    font: &str,
) -> Result<(), Box<dyn Error>> {
    let (_, height) = area.dim_in_pixel();
    let inset = (height / 4) as i32;
    let bar = area.margin(inset, inset, spec.px(4.0), spec.px(4.0));
    let (lo, hi) = padded((lo, hi));

    let mut chart = ChartBuilder::on(&bar)
        .right_y_label_area_size(spec.px(40.0))
        .build_cartesian_2d(0.0..1.0, lo..hi)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_labels(6)
        .label_style((font, spec.pt(8.0)))
        .y_label_formatter(&|v| format!("{v:.2}"))
        .draw()?;

    let step = (hi - lo) / COLORBAR_STEPS as f64;
    chart.draw_series((0..COLORBAR_STEPS).map(|s| {
        let y0 = lo + step * s as f64;
        let t = (s as f64 + 0.5) / COLORBAR_STEPS as f64;
        Rectangle::new([(0.0, y0), (1.0, y0 + step)], RD_BU_R.at(t).filled())
    }))?;
    Ok(())
}

/// Widens a degenerate interval so an axis can still be built.
fn padded((lo, hi): (f64, f64)) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if (hi - lo).abs() <= f64::EPSILON * lo.abs().max(1.0) {
        let pad = 0.5 * lo.abs().max(1.0);
        return (lo - pad, hi + pad);
    }
    (lo, hi)
}
