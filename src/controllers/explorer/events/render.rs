use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::errors::render::RenderError;

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}
