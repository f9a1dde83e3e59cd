//! Error handling for Layerpaint
//!
//! Store operations report "nothing changed" through booleans, never
//! through errors. Everything here belongs to the boundary: registry
//! lookups, grid addressing, color parsing and script loading.

use thiserror::Error;

/// Result type alias for Layerpaint operations
pub type Result<T> = std::result::Result<T, LayerPaintError>;

/// Main error type for Layerpaint operations
#[derive(Error, Debug)]
pub enum LayerPaintError {
    // Registry Errors
    #[error("Unknown layer: {name}")]
    UnknownLayer { name: String },

    #[error("Unknown layer index: {index}")]
    UnknownLayerIndex { index: usize },

    #[error("Layer '{name}' is already registered")]
    DuplicateLayer { name: String },

    // Grid Errors
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    CellOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Unknown draw style: {style}")]
    UnknownDrawStyle { style: String },

    // Color Errors
    #[error("Invalid color: {value}")]
    InvalidColor { value: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Image Export Errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl LayerPaintError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            LayerPaintError::UnknownLayer { .. } => "UNKNOWN_LAYER",
            LayerPaintError::UnknownLayerIndex { .. } => "UNKNOWN_LAYER_INDEX",
            LayerPaintError::DuplicateLayer { .. } => "DUPLICATE_LAYER",
            LayerPaintError::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            LayerPaintError::CellOutOfBounds { .. } => "CELL_OUT_OF_BOUNDS",
            LayerPaintError::UnknownDrawStyle { .. } => "UNKNOWN_DRAW_STYLE",
            LayerPaintError::InvalidColor { .. } => "INVALID_COLOR",
            LayerPaintError::Io(_) => "IO_ERROR",
            LayerPaintError::Serialization(_) => "SERIALIZATION_ERROR",
            LayerPaintError::Image(_) => "IMAGE_ERROR",
        }
    }

    /// Check if this error is recoverable
    ///
    /// Bad input from the caller can be corrected and retried; I/O and
    /// registry construction failures cannot.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LayerPaintError::UnknownLayer { .. }
                | LayerPaintError::UnknownLayerIndex { .. }
                | LayerPaintError::CellOutOfBounds { .. }
                | LayerPaintError::UnknownDrawStyle { .. }
                | LayerPaintError::InvalidColor { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            LayerPaintError::UnknownLayer { .. } | LayerPaintError::UnknownLayerIndex { .. } => {
                vec![
                    "Run 'layerpaint-cli layers' to list the available layers",
                    "Layer names are case-sensitive",
                ]
            }
            LayerPaintError::CellOutOfBounds { .. } => vec![
                "Coordinates start at 0",
                "Check the width and height declared in the script",
            ],
            LayerPaintError::UnknownDrawStyle { .. } => {
                vec!["Supported draw styles: set, additive, sequence"]
            }
            LayerPaintError::InvalidColor { .. } => {
                vec!["Use hex notation such as #ff8800 or #f80"]
            }
            LayerPaintError::InvalidDimensions { .. } => {
                vec!["Width and height must both be at least 1"]
            }
            LayerPaintError::Image(_) => {
                vec!["Choose an output path ending in .png or .ppm"]
            }
            _ => vec![],
        }
    }
}
