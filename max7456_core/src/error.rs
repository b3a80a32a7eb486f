use std::num::ParseIntError;
use std::path::PathBuf;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug)]
pub enum Error {
    /// The input does not start with the `MAX7456` tag.
    InvalidFormat,
    ReadFailure {
        context: String,
        source: BoxError,
    },
    WriteFailure {
        context: String,
        source: BoxError,
    },
    /// A `0x??.png` entry whose slot index is not hexadecimal.
    MalformedFilename {
        name: String,
        source: ParseIntError,
    },
    DimensionMismatch {
        entry: PathBuf,
        width: u32,
        height: u32,
    },
}

impl Error {
    pub(crate) fn read(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::ReadFailure {
            context: context.into(),
            source: source.into(),
        }
    }

    pub(crate) fn write(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::WriteFailure {
            context: context.into(),
            source: source.into(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidFormat => {
                write!(f, "invalid file: missing {} tag", crate::MAX7456_TAG)
            }
            Error::ReadFailure { context, .. } | Error::WriteFailure { context, .. } => {
                write!(f, "{}", context)
            }
            Error::MalformedFilename { name, .. } => {
                write!(f, "can't parse slot index from {}", name)
            }
            Error::DimensionMismatch {
                entry,
                width,
                height,
            } => write!(
                f,
                "image {} is {}x{}, expected {}px wide by {}px high",
                entry.display(),
                width,
                height,
                crate::GLYPH_WIDTH,
                crate::GLYPH_HEIGHT
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadFailure { source, .. } | Error::WriteFailure { source, .. } => {
                let source: &(dyn std::error::Error + 'static) = &**source;
                Some(source)
            }
            Error::MalformedFilename { source, .. } => Some(source),
            Error::InvalidFormat | Error::DimensionMismatch { .. } => None,
        }
    }
}
