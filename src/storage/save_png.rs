use crate::core::data::frame_buffer::FrameBuffer;
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Encodes the frame as PNG at `filepath`. Failures come back as values for
/// the caller to report; nothing here aborts the session.
pub fn save_png(buffer: &FrameBuffer, filepath: impl AsRef<Path>) -> image::ImageResult<()> {
    let size = buffer.display_size() as u32;
    let img = RgbImage::from_raw(size, size, buffer.buffer().to_vec())
        .expect("frame buffer length matches its dimensions");

    img.save_with_format(filepath, ImageFormat::Png)
}
