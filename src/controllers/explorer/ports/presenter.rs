use crate::controllers::explorer::events::render::RenderEvent;

pub trait ExplorerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
