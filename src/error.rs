use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Malformed puzzle board input.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board width must be at least 1")]
    ZeroWidth,
    #[error("board has {len} tiles, expected {expected} for width {width}")]
    WrongLength {
        len: usize,
        expected: usize,
        width: usize,
    },
    #[error("board has {len} tiles, which does not fill a square grid")]
    NotSquare { len: usize },
    #[error("tile value {tile} appears more than once")]
    DuplicateTile { tile: u8 },
    #[error("tile value {tile} is out of range for a {width}x{width} board")]
    TileOutOfRange { tile: u8, width: usize },
}

/// Malformed colouring model input.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("region `{0}` is declared more than once")]
    DuplicateRegion(String),
    #[error("colour `{0}` is declared more than once")]
    DuplicateColour(String),
    #[error("border references unknown region `{0}`")]
    UnknownRegion(String),
    #[error("unknown colour `{0}`")]
    UnknownColour(String),
    #[error("region `{0}` borders itself")]
    SelfBorder(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Board: {inner}\n{backtrace}")]
    Board {
        inner: Box<BoardError>,
        backtrace: Box<Backtrace>,
    },
    #[error("Model: {inner}\n{backtrace}")]
    Model {
        inner: Box<ModelError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<BoardError> for Error {
    fn from(inner: BoardError) -> Self {
        Error::Board {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl From<ModelError> for Error {
    fn from(inner: ModelError) -> Self {
        Error::Model {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl Error {
    /// The board error behind this error, if that is what it wraps.
    pub fn as_board_error(&self) -> Option<&BoardError> {
        match self {
            Error::Board { inner, .. } => Some(inner),
            _ => None,
        }
    }

    /// The model error behind this error, if that is what it wraps.
    pub fn as_model_error(&self) -> Option<&ModelError> {
        match self {
            Error::Model { inner, .. } => Some(inner),
            _ => None,
        }
    }
}
