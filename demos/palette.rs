//! Derive a 16 color terminal palette from a base hue.
//!
//! Run with `cargo run --example palette`.

use tristim::{
    models::{gamma, Basis, Lch, Srgb, ToXyz},
    Component, GamutSearch,
};

/// The chroma requested for every accent color. Most hues can not be shown at
/// this chroma, so the gamut search lowers it.
const ACCENT_CHROMA: Component = 180.0;

/// The chroma of the neutral colors, tinted towards the base hue.
const BASE_CHROMA: Component = 15.0;

/// Lightness levels, spaced by contrast ratio over relative luminance.
struct Levels {
    black: Component,
    dim: Component,
    normal: Component,
    bright: Component,
    white: Component,
}

impl Levels {
    fn new() -> Self {
        let normal: Component = (0.05_f64 * 1.05).sqrt() - 0.05;
        let black = (normal + 0.05) / 4.5 - 0.05;
        let white = (normal + 0.05) * 4.5 - 0.05;
        let dim = (black + 0.05) * 3.0 - 0.05;
        let bright = (white + 0.05) / 3.0 - 0.05;

        Self {
            black: black * 100.0,
            dim: dim * 100.0,
            normal: normal * 100.0,
            bright: bright * 100.0,
            white: white * 100.0,
        }
    }
}

/// The hue of the complement of the gamma encoded luminance coefficients.
fn base_hue() -> Result<Component, tristim::Error> {
    let base = Srgb::new(
        1.0 - gamma::encode(0.2126729),
        1.0 - gamma::encode(0.7151522),
        1.0 - gamma::encode(0.0721750),
    )?;

    Ok(Lch::from_luv(&base.to_xyz()?.to_luv()?)?.hue)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let search = GamutSearch::default();
    let levels = Levels::new();
    let base_hue = base_hue()?;

    #[rustfmt::skip]
    let palette = [
        ("black", levels.black, BASE_CHROMA, base_hue),
        ("red", levels.normal, ACCENT_CHROMA, 15.0),
        ("green", levels.normal, ACCENT_CHROMA, 135.0),
        ("yellow", levels.normal, ACCENT_CHROMA, 75.0),
        ("blue", levels.normal, ACCENT_CHROMA, 255.0),
        ("magenta", levels.normal, ACCENT_CHROMA, 315.0),
        ("cyan", levels.normal, ACCENT_CHROMA, 195.0),
        ("white", levels.bright, BASE_CHROMA, base_hue),
        ("bright_black", levels.dim, BASE_CHROMA, base_hue),
        ("bright_red", levels.bright, ACCENT_CHROMA, 15.0),
        ("bright_green", levels.bright, ACCENT_CHROMA, 135.0),
        ("bright_yellow", levels.bright, ACCENT_CHROMA, 75.0),
        ("bright_blue", levels.bright, ACCENT_CHROMA, 255.0),
        ("bright_magenta", levels.bright, ACCENT_CHROMA, 315.0),
        ("bright_cyan", levels.bright, ACCENT_CHROMA, 195.0),
        ("bright_white", levels.white, BASE_CHROMA, base_hue),
    ];

    for (name, lightness, chroma, hue) in palette {
        let color = search.resolve(lightness, chroma, hue, Basis::Luv)?;
        let lch = Lch::from_luv(&color.to_xyz()?.to_luv()?)?;

        println!("{} {name}", color.hex());
        println!("{lch}");
        println!();
    }

    Ok(())
}
