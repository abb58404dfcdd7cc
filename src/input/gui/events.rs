/// Custom user events for the GUI event loop.
///
/// These let the render worker wake the UI thread when a frame lands.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A new render event may be waiting in the presenter adapter. The
    /// handler still has to request a redraw to actually show it.
    Wake,
}
