use crate::error::ExportError;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
const IHDR_END: usize = 24;

/// Rasterized plot, produced once per render cycle.
///
/// The same image is shown on screen and embedded into the exported
/// document, so both outputs are pixel-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotImage {
    png: Vec<u8>,
    width: u32,
    height: u32,
    dpi: u32,
}

impl PlotImage {
    /// Wraps an encoded PNG stream, reading its size from the `IHDR` chunk.
    pub fn from_png(png: Vec<u8>, dpi: u32) -> Result<Self, ExportError> {
        let (width, height) = png_dimensions(&png)?;
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyImage);
        }
        Ok(Self {
            png,
            width,
            height,
            dpi,
        })
    }

    #[must_use]
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    #[must_use]
    pub fn into_png(self) -> Vec<u8> {
        self.png
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn dpi(&self) -> u32 {
        self.dpi
    }
}

fn png_dimensions(png: &[u8]) -> Result<(u32, u32), ExportError> {
    if png.len() < IHDR_END {
        return Err(ExportError::InvalidImage(format!(
            "stream is {} bytes, shorter than a PNG header",
            png.len()
        )));
    }
    if png[..8] != PNG_SIGNATURE {
        return Err(ExportError::InvalidImage("missing PNG signature".to_owned()));
    }
    if &png[12..16] != b"IHDR" {
        return Err(ExportError::InvalidImage(
            "first chunk is not IHDR".to_owned(),
        ));
    }

    let read_u32 = |offset: usize| {
        u32::from_be_bytes([
            png[offset],
            png[offset + 1],
            png[offset + 2],
            png[offset + 3],
        ])
    };
    Ok((read_u32(16), read_u32(20)))
}
