//! Gamma encoding and decoding of sRGB components.

use crate::color::{Component, Components};

/// Linear-light values up to this breakpoint are encoded linearly.
pub const LINEAR_BREAKPOINT: Component = 0.0031308;

/// The encoded value of [`LINEAR_BREAKPOINT`]. Deriving one breakpoint from
/// the other makes [`encode`] and [`decode`] exact inverses.
pub const ENCODED_BREAKPOINT: Component = 12.92 * LINEAR_BREAKPOINT;

/// Convert a linear-light component to gamma encoded.
pub fn encode(value: Component) -> Component {
    let abs = value.abs();

    if abs <= LINEAR_BREAKPOINT {
        12.92 * value
    } else {
        value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    }
}

/// Convert a gamma encoded component to linear light.
pub fn decode(value: Component) -> Component {
    let abs = value.abs();

    if abs <= ENCODED_BREAKPOINT {
        value / 12.92
    } else {
        value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert the components from linear light to gamma encoded.
pub fn to_gamma_encoded(from: &Components) -> Components {
    from.map(encode)
}

/// Convert the components from gamma encoded to linear light.
pub fn to_linear_light(from: &Components) -> Components {
    from.map(decode)
}
