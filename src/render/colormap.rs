use plotters::style::RGBColor;

/// Piecewise-linear color map over evenly spaced stops.
#[derive(Debug, Clone, Copy)]
pub struct ColorMap {
    stops: &'static [RGBColor],
}

/// ColorBrewer RdBu, reversed: blue for low values, red for high.
pub const RD_BU_R: ColorMap = ColorMap {
    stops: &[
        RGBColor(5, 48, 97),
        RGBColor(33, 102, 172),
        RGBColor(67, 147, 195),
        RGBColor(146, 197, 222),
        RGBColor(209, 229, 240),
        RGBColor(247, 247, 247),
        RGBColor(253, 219, 199),
        RGBColor(244, 165, 130),
        RGBColor(214, 96, 77),
        RGBColor(178, 24, 43),
        RGBColor(103, 0, 31),
    ],
};

impl ColorMap {
    /// Color at `t` in `[0, 1]`; out-of-range values clamp, NaN maps to the centre.
    pub fn at(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;
        let pos = t * last as f64;
        let i = (pos.floor() as usize).min(last - 1);
        let frac = pos - i as f64;
        let (a, b) = (self.stops[i], self.stops[i + 1]);
        let lerp = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * frac).round() as u8;
        RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
    }
}

/// Linear map of a data interval onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    lo: f64,
    hi: f64,
}

impl Normalize {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// A degenerate interval maps everything to the centre.
    pub fn apply(&self, value: f64) -> f64 {
        let span = self.hi - self.lo;
        if span.is_nan() || span.abs() <= f64::EPSILON {
            return 0.5;
        }
        ((value - self.lo) / span).clamp(0.0, 1.0)
    }
}
