//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A linear map of color components.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Linear-light values and relative luminances this close outside of `[0, 1]`
/// are rounding noise of the conversion matrices.
pub const GAMUT_TOLERANCE: Component = 1.0e-6;

/// Build a [`Transform`] from a 3x3 matrix.
///
/// Components are multiplied as a row vector, so each row of arguments holds
/// the coefficients applied to one input component.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let v = transform.transform_vector3d(Vector::new(x, y, z));
    Components(v.x, v.y, v.z)
}

/// Normalize a hue in degrees into `[0, 360)`.
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let full = T::from(360.0).unwrap_or_else(T::max_value);
    let hue = hue % full;
    let hue = if hue < T::zero() { hue + full } else { hue };
    // A tiny negative hue rounds up to a full turn.
    if hue >= full {
        T::zero()
    } else {
        hue
    }
}

/// Move values within [`GAMUT_TOLERANCE`] outside of `[0, 1]` onto the
/// nearest bound. Other values are left alone.
pub fn snap_to_unit_range(value: Component) -> Component {
    if value < 0.0 && value >= -GAMUT_TOLERANCE {
        0.0
    } else if value > 1.0 && value <= 1.0 + GAMUT_TOLERANCE {
        1.0
    } else {
        value
    }
}
