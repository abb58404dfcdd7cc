use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_pass::render_pass;
use crate::core::fractals::variant::{FractalVariant, MAX_ITERATIONS};
use crate::presenters::file::png::PngFilePresenter;
use std::path::Path;

/// Renders a variant's initial view and writes it as PNG.
pub fn render_to_file_controller(
    variant: FractalVariant,
    display_size: usize,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let filepath = filepath.as_ref();
    let viewport = variant.initial_range();

    println!("Rendering {} set...", variant.display_name());
    println!("Image size: {}x{}", display_size, display_size);
    println!("Max iterations: {}", MAX_ITERATIONS);

    let start = Instant::now();
    let frame = render_pass(variant, viewport, display_size)?;
    println!("Duration:   {:?}", start.elapsed());

    if let Some(parent) = filepath.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let presenter = PngFilePresenter::new();
    presenter.present(&frame, filepath)?;
    println!("Saved to {}", filepath.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_to_file_writes_every_variant() {
        for &variant in FractalVariant::ALL {
            let path = std::env::temp_dir().join(format!(
                "escapetime_cli_{}_{}.png",
                variant.display_name().replace(' ', "_"),
                std::process::id()
            ));

            let result = render_to_file_controller(variant, 24, &path);

            assert!(result.is_ok(), "{}", variant.display_name());
            assert!(path.exists());
            std::fs::remove_file(&path).unwrap();
        }
    }
}
