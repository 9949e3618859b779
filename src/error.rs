use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is fatal for a run; nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_no}: expected {} ';'-separated fields, found {found}: {line:?}", crate::FIELDS)]
    FieldCount {
        line_no: usize,
        line: String,
        found: usize,
    },

    #[error("line {line_no}, field {field}: could not convert {value:?} to float")]
    ParseFloat {
        line_no: usize,
        field: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("could not read the input")]
    Read(#[source] std::io::Error),

    #[error("could not render the chart: {0}")]
    Render(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
