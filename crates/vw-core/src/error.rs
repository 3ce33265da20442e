use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidShape { height: usize, width: usize },
    InvalidParameter(&'static str),
    SizeMismatch { expected: usize, actual: usize },
    InvalidStride,
    NonFiniteCoordinate { row: usize, col: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { height, width } => {
                write!(f, "invalid shape {height}x{width}: dimensions must be positive")
            }
            Self::InvalidParameter(what) => write!(f, "invalid parameter: {what}"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidStride => write!(f, "invalid stride"),
            Self::NonFiniteCoordinate { row, col } => {
                write!(f, "warp produced a non-finite source coordinate for pixel ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for Error {}
