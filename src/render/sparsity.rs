use std::error::Error;

use plotters::prelude::*;

use crate::data::SparsityPattern;
use crate::render::canvas::{Area, FigureSpec};

const MARKER_COLOR: RGBColor = RGBColor(0, 0, 255);
const WHEAT: RGBColor = RGBColor(245, 222, 179);

/// Scatter of non-zero entries with row 0 at the top and a summary box in the
/// upper-left corner.
pub(crate) fn draw_sparsity(
    root: &Area<'_>,
    pattern: &SparsityPattern,
    spec: &FigureSpec,
    font: &str,
) -> Result<(), Box<dyn Error>> {
    let dims = pattern.dims();
    // same span on both axes keeps cells square
    let span = dims.rows.max(dims.cols).max(1) as f64;

    // rows are drawn at -row so larger indices go down
    let mut chart = ChartBuilder::on(root)
        .caption("Matrix Sparsity Pattern", (font, spec.pt(14.0)))
        .margin(spec.px(10.0))
        .x_label_area_size(spec.px(30.0))
        .y_label_area_size(spec.px(40.0))
        .build_cartesian_2d(-0.5..span - 0.5, -(span - 0.5)..0.5)?;

    chart
        .configure_mesh()
        .x_desc("Column Index")
        .y_desc("Row Index")
        .label_style((font, spec.pt(9.0)))
        .axis_desc_style((font, spec.pt(12.0)))
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(BLACK.mix(0.05))
        .x_label_formatter(&|v| format!("{}", v.round() as i64))
        .y_label_formatter(&|v| format!("{}", (-v).round() as i64))
        .draw()?;

    let half = (spec.pt(0.7) / 2.0).ceil().max(1.0) as i32;
    let style = MARKER_COLOR.mix(0.6).filled();
    chart.draw_series(pattern.entries().iter().map(|&(r, c)| {
        EmptyElement::at((c as f64, -(r as f64)))
            + Rectangle::new([(-half, -half), (half, half)], style)
    }))?;

    draw_summary_box(root, &pattern.summary_lines(), spec, font)
}

fn draw_summary_box(
    root: &Area<'_>,
    lines: &[String],
    spec: &FigureSpec,
    font: &str,
) -> Result<(), Box<dyn Error>> {
    let (width, height) = root.dim_in_pixel();
    let style = TextStyle::from((font, spec.pt(10.0)).into_font());
    let pad = spec.px(4.0);
    let line_height = (spec.pt(10.0) * 1.3).round() as i32;

    let mut text_width = 0;
    for line in lines {
        let (w, _) = root.estimate_text_size(line, &style)?;
        text_width = text_width.max(w as i32);
    }

    let x0 = (f64::from(width) * 0.02) as i32;
    let y0 = (f64::from(height) * 0.02) as i32;
    let x1 = x0 + text_width + 2 * pad;
    let y1 = y0 + line_height * lines.len() as i32 + 2 * pad;

    root.draw(&Rectangle::new([(x0, y0), (x1, y1)], WHEAT.mix(0.8).filled()))?;
    root.draw(&Rectangle::new([(x0, y0), (x1, y1)], BLACK.mix(0.5)))?;
    for (i, line) in lines.iter().enumerate() {
        root.draw(&Text::new(
            line.as_str(),
            (x0 + pad, y0 + pad + line_height * i as i32),
            style.clone(),
        ))?;
    }
    Ok(())
}
