use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::row_colours::RowColours;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::hue_map::colour_for_count;
use crate::core::fractals::variant::FractalVariant;
use crate::core::util::map_coordinate::map_coordinate;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPassError {
    Cancelled(Cancelled),
    FrameBuffer(FrameBufferError),
}

impl fmt::Display for RenderPassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(e) => write!(f, "{}", e),
            Self::FrameBuffer(e) => write!(f, "{}", e),
        }
    }
}

impl Error for RenderPassError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(e) => Some(e),
            Self::FrameBuffer(e) => Some(e),
        }
    }
}

impl From<Cancelled> for RenderPassError {
    fn from(e: Cancelled) -> Self {
        Self::Cancelled(e)
    }
}

impl From<FrameBufferError> for RenderPassError {
    fn from(e: FrameBufferError) -> Self {
        Self::FrameBuffer(e)
    }
}

/// Computes the colours of one display row.
///
/// The vertical axis is mapped across the horizontal extent; every viewport
/// this program produces is square, so the two extents agree.
#[must_use]
pub fn compute_row(
    variant: FractalVariant,
    viewport: Viewport,
    display_size: usize,
    row_index: usize,
) -> RowColours {
    let y = map_coordinate(
        viewport.y(),
        viewport.y() + viewport.width(),
        display_size,
        row_index,
    );

    let colours = (0..display_size)
        .map(|column| {
            let x = map_coordinate(
                viewport.x(),
                viewport.x() + viewport.width(),
                display_size,
                column,
            );
            colour_for_count(variant.iterate(x, y))
        })
        .collect();

    RowColours { row_index, colours }
}

/// Fans one unit of work per row out over rayon's pool. Rows carry no
/// cross-row dependency and may complete in any order; the returned vector
/// is ordered by row index because the fan-out preserves input order.
#[must_use]
pub fn compute_rows(
    variant: FractalVariant,
    viewport: Viewport,
    display_size: usize,
) -> Vec<RowColours> {
    (0..display_size)
        .into_par_iter()
        .map(|row_index| compute_row(variant, viewport, display_size, row_index))
        .collect()
}

fn compute_rows_cancelable<C: CancelToken>(
    variant: FractalVariant,
    viewport: Viewport,
    display_size: usize,
    cancel: &C,
) -> Result<Vec<RowColours>, Cancelled> {
    (0..display_size)
        .into_par_iter()
        .map(|row_index| {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }
            Ok(compute_row(variant, viewport, display_size, row_index))
        })
        .collect()
}

/// Renders a full frame: a parallel compute phase producing one
/// [`RowColours`] per row, then a single-threaded apply phase writing them
/// into a fresh frame buffer. The buffer is private to this pass until it is
/// returned whole.
pub fn render_pass(
    variant: FractalVariant,
    viewport: Viewport,
    display_size: usize,
) -> Result<FrameBuffer, RenderPassError> {
    render_pass_cancelable(variant, viewport, display_size, &NeverCancel)
}

pub fn render_pass_cancelable<C: CancelToken>(
    variant: FractalVariant,
    viewport: Viewport,
    display_size: usize,
    cancel: &C,
) -> Result<FrameBuffer, RenderPassError> {
    let rows = compute_rows_cancelable(variant, viewport, display_size, cancel)?;

    let mut frame = FrameBuffer::new(display_size);
    for row in rows {
        frame.write_row(row)?;
    }

    Ok(frame)
}
