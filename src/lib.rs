use log::debug;
use std::io::BufRead;
use std::path::Path;
pub mod chart;
pub mod cli;
pub mod error;
pub mod show;

pub use error::{Error, Result};

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

pub const DELIMITER: char = ';';
pub const FIELDS: usize = 4;

/// The x column and the three y columns, index-aligned row by row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub x: Vec<f64>,
    pub y1: Vec<f64>,
    pub y2: Vec<f64>,
    pub y3: Vec<f64>,
}

impl Series {
    pub fn new(capacity: usize) -> Series {
        Series {
            x: Vec::with_capacity(capacity),
            y1: Vec::with_capacity(capacity),
            y2: Vec::with_capacity(capacity),
            y3: Vec::with_capacity(capacity),
        }
    }

    /// Parse one `x;y1;y2;y3` line and append it.
    /// Fields after the fourth are ignored; the row is appended only if all four parse.
    pub fn push_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let line = line.trim();
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() < FIELDS {
            return Err(Error::FieldCount {
                line_no,
                line: line.to_string(),
                found: fields.len(),
            });
        }
        let mut row = [0f64; FIELDS];
        for (i, (v, f)) in row.iter_mut().zip(fields.iter()).enumerate() {
            *v = parse_field(line_no, i + 1, f)?;
        }
        self.x.push(row[0]);
        self.y1.push(row[1]);
        self.y2.push(row[2]);
        self.y3.push(row[3]);
        Ok(())
    }

    /// Every line is a data row, the first one included; blank lines are errors.
    pub fn from_lines<I, S>(lines: I) -> Result<Series>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = lines.into_iter();
        let mut series = Series::new(lines.size_hint().0);
        for (i, l) in lines.enumerate() {
            series.push_line(i + 1, l.as_ref())?;
        }
        Ok(series)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Series> {
        let mut series = Series::new(1024);
        for (i, l) in reader.lines().enumerate() {
            let l = l.map_err(Error::Read)?;
            series.push_line(i + 1, &l)?;
        }
        Ok(series)
    }

    /// The whole file is read and closed before any line is parsed.
    pub fn from_file<P: AsRef<Path>>(fin: P) -> Result<Series> {
        let fin = fin.as_ref();
        let content = std::fs::read_to_string(fin).map_err(|e| Error::io(fin, e))?;
        debug!("read {} bytes from {}", content.len(), fin.display());
        Series::from_reader(content.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The y columns with their trace names, in plotting order.
    pub fn columns(&self) -> [(&'static str, &[f64]); 3] {
        [
            ("y1", self.y1.as_slice()),
            ("y2", self.y2.as_slice()),
            ("y3", self.y3.as_slice()),
        ]
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.len() {
            writeln!(
                f,
                "{}{d}{}{d}{}{d}{}",
                self.x[i],
                self.y1[i],
                self.y2[i],
                self.y3[i],
                d = DELIMITER
            )?;
        }
        Ok(())
    }
}

/// Load `fin`, build the figure and show it once; nothing is shown if loading fails.
pub fn plot_file<V: show::Viewer + ?Sized>(fin: &Path, viewer: &mut V) -> Result<()> {
    let series = Series::from_file(fin)?;
    debug!("parsed {} rows", series.len());
    let figure = chart::Figure::from_series(&series);
    viewer.show(&figure)
}

fn parse_field(line_no: usize, field: usize, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|source| Error::ParseFloat {
            line_no,
            field,
            value: value.to_string(),
            source,
        })
}

/// Min and max of the finite values, None if there are none.
pub fn min_and_max(s: &[f64]) -> Option<(f64, f64)> {
    let mut finite = s.iter().copied().filter(|v| v.is_finite());
    let first = finite.next()?;
    let (mut min, mut max) = (first, first);
    for es in finite {
        if es > max {
            max = es
        }
        if es < min {
            min = es
        }
    }
    Some((min, max))
}
