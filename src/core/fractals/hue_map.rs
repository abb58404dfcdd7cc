use crate::core::data::colour::Colour;
use crate::core::fractals::variant::BOUNDED;

/// Maps an iteration count to a display colour.
///
/// Bounded points get the background colour; escaping points walk a hue
/// wheel starting at 0.7 and advancing one full turn every 200 iterations.
#[must_use]
pub fn colour_for_count(count: i32) -> Colour {
    if count == BOUNDED {
        return Colour::BLACK;
    }

    let hue = 0.7 + f64::from(count) / 200.0;
    hsb_to_rgb(hue, 1.0, 1.0)
}

/// Converts hue/saturation/brightness to RGB. Hue wraps modulo 1.0;
/// saturation and brightness are expected in [0, 1].
#[must_use]
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Colour {
    let h = (hue - hue.floor()) * 6.0;
    let sector = h as u32;
    let f = h - h.floor();

    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    Colour {
        r: channel_byte(r),
        g: channel_byte(g),
        b: channel_byte(b),
    }
}

fn channel_byte(value: f64) -> u8 {
    (value * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_sentinel_maps_to_background() {
        assert_eq!(colour_for_count(BOUNDED), Colour::BLACK);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        for count in [1, 17, 199, 1000] {
            assert_eq!(colour_for_count(count), colour_for_count(count));
        }
    }

    #[test]
    fn test_escaping_counts_are_never_background() {
        for count in 1..400 {
            assert_ne!(colour_for_count(count), Colour::BLACK, "count {}", count);
        }
    }

    #[test]
    fn test_count_sixty_lands_on_pure_red() {
        // hue = 0.7 + 60/200 = 1.0, which wraps to 0.
        assert_eq!(
            colour_for_count(60),
            Colour {
                r: 255,
                g: 0,
                b: 0
            }
        );
    }

    #[test]
    fn test_hue_wraps_every_two_hundred_counts() {
        assert_eq!(colour_for_count(60), colour_for_count(260));
        assert_eq!(colour_for_count(1), colour_for_count(201));
    }

    #[test]
    fn test_hsb_primaries() {
        assert_eq!(
            hsb_to_rgb(0.0, 1.0, 1.0),
            Colour {
                r: 255,
                g: 0,
                b: 0
            }
        );
        assert_eq!(
            hsb_to_rgb(1.0 / 3.0, 1.0, 1.0),
            Colour {
                r: 0,
                g: 255,
                b: 0
            }
        );
        assert_eq!(
            hsb_to_rgb(2.0 / 3.0, 1.0, 1.0),
            Colour {
                r: 0,
                g: 0,
                b: 255
            }
        );
    }

    #[test]
    fn test_hsb_zero_saturation_is_grey() {
        assert_eq!(
            hsb_to_rgb(0.4, 0.0, 0.5),
            Colour {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_hsb_negative_hue_wraps() {
        assert_eq!(hsb_to_rgb(-0.25, 1.0, 1.0), hsb_to_rgb(0.75, 1.0, 1.0));
    }
}
