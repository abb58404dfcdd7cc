use crate::core::data::colour::Colour;
use crate::core::data::row_colours::RowColours;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameBufferError {
    RowOutOfBounds {
        row_index: usize,
        display_size: usize,
    },
    RowLengthMismatch {
        row_index: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutOfBounds {
                row_index,
                display_size,
            } => {
                write!(
                    f,
                    "row {} is outside a {}x{} frame",
                    row_index, display_size, display_size
                )
            }
            Self::RowLengthMismatch {
                row_index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {} has {} colours, expected {}",
                    row_index, actual, expected
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// A square RGB frame, three bytes per pixel, written one row at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    display_size: usize,
    buffer: Vec<u8>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(display_size: usize) -> Self {
        Self {
            display_size,
            buffer: vec![0; display_size * display_size * 3],
        }
    }

    #[must_use]
    pub fn display_size(&self) -> usize {
        self.display_size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn write_row(&mut self, row: RowColours) -> Result<(), FrameBufferError> {
        if row.row_index >= self.display_size {
            return Err(FrameBufferError::RowOutOfBounds {
                row_index: row.row_index,
                display_size: self.display_size,
            });
        }

        if row.colours.len() != self.display_size {
            return Err(FrameBufferError::RowLengthMismatch {
                row_index: row.row_index,
                expected: self.display_size,
                actual: row.colours.len(),
            });
        }

        let start = row.row_index * self.display_size * 3;
        for (offset, colour) in row.colours.iter().enumerate() {
            let index = start + offset * 3;
            self.buffer[index] = colour.r;
            self.buffer[index + 1] = colour.g;
            self.buffer[index + 2] = colour.b;
        }

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Colour> {
        if x >= self.display_size || y >= self.display_size {
            return None;
        }

        let index = (y * self.display_size + x) * 3;
        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Copies the frame into an RGBA destination, one alpha-opaque pixel per
    /// source pixel. The destination must hold exactly `size * size * 4`
    /// bytes.
    ///
    /// # Panics
    /// Panics when the destination length does not match.
    pub fn copy_into_rgba(&self, dest: &mut [u8]) {
        let expected = self.display_size * self.display_size * 4;
        assert_eq!(
            dest.len(),
            expected,
            "rgba destination length {} does not match expected {}",
            dest.len(),
            expected
        );

        for (src, dst) in self.buffer.chunks_exact(3).zip(dest.chunks_exact_mut(4)) {
            dst[0] = src[0];
            dst[1] = src[1];
            dst[2] = src[2];
            dst[3] = 255;
        }
    }
}
