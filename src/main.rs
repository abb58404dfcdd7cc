use escapetime::{DEFAULT_DISPLAY_SIZE, FractalVariant, render_to_file_controller};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for &variant in FractalVariant::ALL {
        let filename = variant.display_name().to_lowercase().replace(' ', "_");
        render_to_file_controller(
            variant,
            DEFAULT_DISPLAY_SIZE,
            format!("output/{}.png", filename),
        )?;
    }

    Ok(())
}
