use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::storage::save_png::save_png;
use std::path::Path;

pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &FrameBuffer, filepath: impl AsRef<Path>) -> image::ImageResult<()> {
        save_png(buffer, filepath)
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presenter_writes_png_through_the_port() {
        let presenter = PngFilePresenter::new();
        let frame = FrameBuffer::new(2);
        let path = std::env::temp_dir().join(format!(
            "escapetime_presenter_{}.png",
            std::process::id()
        ));

        presenter.present(&frame, &path).unwrap();

        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }
}
