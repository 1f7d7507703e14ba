use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{PlotError, Result};

/// Caps the pixel buffer at 200 megapixels.
const MAX_PIXELS: u64 = 200_000_000;

pub type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Physical figure size; pixel size is inches × dpi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSpec {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl FigureSpec {
    pub fn pixels(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }

    /// Typographic points to pixels.
    pub fn pt(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }

    pub fn px(&self, points: f64) -> i32 {
        self.pt(points).round().max(1.0) as i32
    }
}

/// In-memory RGB surface for one figure. Nothing reaches the disk until
/// [`Canvas::save_png`], so a failed draw leaves no partial image behind and
/// dropping the canvas releases everything it held.
pub struct Canvas {
    size: (u32, u32),
    buffer: Vec<u8>,
}

impl Canvas {
    pub fn new(spec: &FigureSpec) -> Result<Self, Box<dyn Error>> {
        let size = spec.pixels();
        let pixels = u64::from(size.0) * u64::from(size.1);
        if pixels > MAX_PIXELS {
            return Err(format!("figure of {}x{} pixels is too large", size.0, size.1).into());
        }
        Ok(Self {
            size,
            buffer: vec![0u8; pixels as usize * 3],
        })
    }

    pub fn draw<F>(&mut self, draw: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&Area<'_>) -> Result<(), Box<dyn Error>>,
    {
        let root = BitMapBackend::with_buffer(&mut self.buffer, self.size).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
        Ok(())
    }

    pub fn save_png(self, path: &Path) -> Result<(), Box<dyn Error>> {
        let (w, h) = self.size;
        let img = image::RgbImage::from_raw(w, h, self.buffer)
            .ok_or("pixel buffer does not match figure size")?;
        img.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

/// Draws one figure and writes it to `out_path` as PNG.
pub fn render_png<F>(spec: &FigureSpec, out_path: &Path, draw: F) -> Result<()>
where
    F: FnOnce(&Area<'_>) -> Result<(), Box<dyn Error>>,
{
    let mut canvas = Canvas::new(spec).map_err(|e| PlotError::render(out_path, e))?;
    canvas
        .draw(draw)
        .map_err(|e| PlotError::render(out_path, e))?;
    canvas
        .save_png(out_path)
        .map_err(|e| PlotError::render(out_path, e))
}
