use std::path::Path;

use crate::core::data::frame_buffer::FrameBuffer;

pub trait FilePresenterPort {
    fn present(&self, buffer: &FrameBuffer, filepath: impl AsRef<Path>) -> image::ImageResult<()>;
}
