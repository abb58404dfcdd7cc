use crate::controllers::explorer::data::render_request::RenderRequest;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::variant::FractalVariant;
use crate::core::util::map_coordinate::map_coordinate;

pub const DEFAULT_DISPLAY_SIZE: usize = 600;

/// Each click multiplies the viewport extent by this factor.
pub const CLICK_ZOOM_SCALE: f64 = 0.5;

/// What the user is currently exploring: the selected variant and the
/// viewport onto its plane. The display size is fixed for the session.
///
/// Navigation replaces the viewport value; render passes work from
/// snapshots, so nothing here is shared with row workers.
#[derive(Debug)]
pub struct ExplorerSession {
    display_size: usize,
    variant: FractalVariant,
    viewport: Viewport,
    last_submitted: Option<RenderRequest>,
    latest_submitted_generation: u64,
}

impl ExplorerSession {
    #[must_use]
    pub fn new(display_size: usize) -> Self {
        let variant = FractalVariant::default();

        Self {
            display_size,
            variant,
            viewport: variant.initial_range(),
            last_submitted: None,
            latest_submitted_generation: 0,
        }
    }

    #[must_use]
    pub fn display_size(&self) -> usize {
        self.display_size
    }

    #[must_use]
    pub fn variant(&self) -> FractalVariant {
        self.variant
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn latest_submitted_generation(&self) -> u64 {
        self.latest_submitted_generation
    }

    /// Switches variant and jumps to that variant's initial range.
    pub fn select_variant(&mut self, variant: FractalVariant) {
        self.variant = variant;
        self.viewport = variant.initial_range();
    }

    /// Returns the current variant's viewport to its initial range.
    pub fn reset_view(&mut self) {
        self.viewport = self.variant.initial_range();
    }

    /// Zooms in on the complex-plane point under a display pixel.
    ///
    /// Both pixel axes are mapped over the viewport width; the viewports
    /// this session produces are always square, so width and height agree.
    pub fn zoom_to_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let centre_x = map_coordinate(
            self.viewport.x(),
            self.viewport.x() + self.viewport.width(),
            self.display_size,
            pixel_x,
        );
        let centre_y = map_coordinate(
            self.viewport.y(),
            self.viewport.y() + self.viewport.width(),
            self.display_size,
            pixel_y,
        );

        self.viewport = self
            .viewport
            .recentre_and_zoom(centre_x, centre_y, CLICK_ZOOM_SCALE);
    }

    #[must_use]
    pub fn build_render_request(&self) -> RenderRequest {
        RenderRequest {
            variant: self.variant,
            viewport: self.viewport,
            display_size: self.display_size,
        }
    }

    /// True when `request` differs from the one submitted last, so redraws
    /// of an unchanged view are not resubmitted.
    #[must_use]
    pub fn should_submit(&self, request: &RenderRequest) -> bool {
        self.last_submitted.is_none_or(|last| last != *request)
    }

    pub fn record_submission(&mut self, request: RenderRequest, generation: u64) {
        self.last_submitted = Some(request);
        self.latest_submitted_generation = generation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_on_mandelbrot_initial_range() {
        let session = ExplorerSession::new(DEFAULT_DISPLAY_SIZE);

        assert_eq!(session.variant(), FractalVariant::Mandelbrot);
        assert_eq!(
            session.viewport(),
            FractalVariant::Mandelbrot.initial_range()
        );
        assert_eq!(session.display_size(), 600);
    }

    #[test]
    fn test_select_variant_resets_viewport_to_its_range() {
        let mut session = ExplorerSession::new(DEFAULT_DISPLAY_SIZE);
        session.zoom_to_pixel(100, 100);

        session.select_variant(FractalVariant::BurningShip);

        assert_eq!(session.variant(), FractalVariant::BurningShip);
        assert_eq!(
            session.viewport(),
            FractalVariant::BurningShip.initial_range()
        );
    }

    #[test]
    fn test_reset_view_restores_initial_range_without_changing_variant() {
        let mut session = ExplorerSession::new(DEFAULT_DISPLAY_SIZE);
        session.select_variant(FractalVariant::Tricorn);
        session.zoom_to_pixel(42, 17);

        session.reset_view();

        assert_eq!(session.variant(), FractalVariant::Tricorn);
        assert_eq!(session.viewport(), FractalVariant::Tricorn.initial_range());
    }

    #[test]
    fn test_zoom_on_centre_pixel_halves_the_viewport() {
        let mut session = ExplorerSession::new(600);

        session.zoom_to_pixel(300, 300);

        // Centre pixel of the initial Mandelbrot range maps to (-0.5, 0.0);
        // halving the 3.0 extent around it gives this rectangle.
        let viewport = session.viewport();
        assert_eq!(viewport.x(), -1.25);
        assert_eq!(viewport.y(), -0.75);
        assert_eq!(viewport.width(), 1.5);
        assert_eq!(viewport.height(), 1.5);
    }

    #[test]
    fn test_zoom_keeps_viewport_square() {
        let mut session = ExplorerSession::new(600);

        session.zoom_to_pixel(17, 583);
        session.zoom_to_pixel(0, 0);
        session.zoom_to_pixel(599, 599);

        let viewport = session.viewport();
        assert_eq!(viewport.width(), viewport.height());
    }

    #[test]
    fn test_should_submit_dedupes_unchanged_requests() {
        let mut session = ExplorerSession::new(DEFAULT_DISPLAY_SIZE);

        let request = session.build_render_request();
        assert!(session.should_submit(&request));

        session.record_submission(request, 1);
        assert!(!session.should_submit(&session.build_render_request()));

        session.zoom_to_pixel(300, 300);
        assert!(session.should_submit(&session.build_render_request()));
    }

    #[test]
    fn test_record_submission_tracks_generation() {
        let mut session = ExplorerSession::new(DEFAULT_DISPLAY_SIZE);

        session.record_submission(session.build_render_request(), 7);

        assert_eq!(session.latest_submitted_generation(), 7);
    }

    #[test]
    fn test_build_render_request_snapshots_current_state() {
        let mut session = ExplorerSession::new(DEFAULT_DISPLAY_SIZE);
        session.select_variant(FractalVariant::Tricorn);

        let request = session.build_render_request();

        assert_eq!(request.variant, FractalVariant::Tricorn);
        assert_eq!(request.viewport, session.viewport());
        assert_eq!(request.display_size, DEFAULT_DISPLAY_SIZE);
    }
}
