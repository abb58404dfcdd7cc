use crate::core::data::viewport::Viewport;
use crate::core::fractals::variant::FractalVariant;

/// Snapshot of everything a render pass needs, taken at dispatch time.
/// Row workers see only this copy, never the live session state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub variant: FractalVariant,
    pub viewport: Viewport,
    pub display_size: usize,
}
