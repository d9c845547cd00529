use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("backend failure: {0}")]
    Backend(String),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Failure to place the plot image on the exported page.
///
/// The exporter recovers from these locally and still produces a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("image data is not a PNG stream: {0}")]
    InvalidImage(String),

    #[error("image has zero width or height")]
    EmptyImage,

    #[error("no vertical room left for the image (available height {available_height:.1} pt)")]
    NoRoom { available_height: f64 },

    #[error("failed to decode image: {0}")]
    Decode(String),
}
