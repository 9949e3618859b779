use super::{min_and_max, Error, Result, Series};
use log::debug;
use plotters::prelude::*;
use std::ops::Range;

pub const TITLE: &str = "My Plot";
pub const X_TITLE: &str = "X";
pub const Y_TITLE: &str = "Y";

const SIZE: (u32, u32) = (1600, 800);
const PALETTE: [RGBColor; 3] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
];

/// One line of the figure: y against x, drawn in line mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Trace {
    pub fn new(name: &str, x: &[f64], y: &[f64]) -> Trace {
        Trace {
            name: name.to_string(),
            x: x.to_vec(),
            y: y.to_vec(),
        }
    }

    /// splits the line at non-finite points, leaving a gap
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (&x, &y) in self.x.iter().zip(self.y.iter()) {
            if x.is_finite() && y.is_finite() {
                current.push((x, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub traces: Vec<Trace>,
}

impl Figure {
    /// y1, y2 and y3 against the shared x, with the fixed title and axis labels
    pub fn from_series(series: &Series) -> Figure {
        let traces = series
            .columns()
            .iter()
            .map(|(name, y)| Trace::new(name, &series.x, y))
            .collect();
        Figure {
            title: TITLE.to_string(),
            x_title: X_TITLE.to_string(),
            y_title: Y_TITLE.to_string(),
            traces,
        }
    }

    pub fn x_range(&self) -> Range<f64> {
        padded(span(self.traces.iter().map(|t| &t.x[..])), 20.)
    }

    pub fn y_range(&self) -> Range<f64> {
        padded(span(self.traces.iter().map(|t| &t.y[..])), 10.)
    }

    pub fn to_svg(&self) -> Result<String> {
        let (x_range, y_range) = (self.x_range(), self.y_range());
        for r in [&x_range, &y_range].iter() {
            if !(r.end - r.start).is_finite() {
                return Err(Error::Render(format!("axis range {:?} is too wide to draw", r)));
            }
        }
        let mut svg = String::new();
        self.draw(SVGBackend::with_string(&mut svg, SIZE), x_range, y_range)
            .map_err(|e| Error::Render(e.to_string()))?;
        debug!("rendered {} traces to {} bytes of svg", self.traces.len(), svg.len());
        Ok(svg)
    }

    fn draw(
        &self,
        backend: SVGBackend,
        x_range: Range<f64>,
        y_range: Range<f64>,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let root = backend.into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(100)
            .build_cartesian_2d(x_range, y_range)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(1))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 24))
            .x_desc(self.x_title.as_str())
            .y_desc(self.y_title.as_str())
            .draw()?;

        for (trace, color) in self.traces.iter().zip(PALETTE.iter().cycle()) {
            let style = color.stroke_width(3);
            chart
                .draw_series(
                    trace
                        .segments()
                        .into_iter()
                        .map(move |segment| PathElement::new(segment, style)),
                )?
                .label(trace.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], style));
        }
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(("sans-serif", 24))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
        root.present()?;
        Ok(())
    }
}

fn span<'a, I: Iterator<Item = &'a [f64]>>(columns: I) -> Option<(f64, f64)> {
    columns
        .filter_map(min_and_max)
        .fold(None, |acc, (min, max)| match acc {
            None => Some((min, max)),
            Some((amin, amax)) => Some((amin.min(min), amax.max(max))),
        })
}

/// widens the span by span/divisor on each side; empty or flat spans get a width of
/// at least one, the ends stay finite
fn padded(minmax: Option<(f64, f64)>, divisor: f64) -> Range<f64> {
    let (min, max, margin) = match minmax {
        None => return 0.0..1.0,
        Some((min, max)) if max <= min => (min, max, (min.abs() / divisor).max(0.5)),
        Some((min, max)) => (min, max, max / divisor - min / divisor),
    };
    (min - margin).max(f64::MIN)..(max + margin).min(f64::MAX)
}
