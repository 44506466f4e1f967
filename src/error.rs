use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A zero sized grid or image was requested.
    InvalidDimensions { width: usize, height: usize },
    /// The image backend failed to encode or write the buffer.
    Encode(image::ImageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimensions { width, height } => write!(
                f,
                "invalid maze dimensions {}x{}, both must be positive",
                width, height
            ),
            Error::Encode(err) => write!(f, "failed to encode maze image: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidDimensions { .. } => None,
            Error::Encode(err) => Some(err),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encode(err)
    }
}
