//! Model a color in the CIE-L\*a\*b\* color space.

use crate::{
    color::{Component, Components},
    error::Error,
    math::snap_to_unit_range,
    models::{
        lch::{Lch, Polar},
        xyz::{ReferenceWhite, WhitePoint, Xyz},
        FromXyz, ToXyz,
    },
};

/// The breakpoint of the nonlinearity on the normalized tristimulus values,
/// (6/29)^3.
const EPSILON: Component = 216.0 / 24389.0;

/// The breakpoint of the inverse nonlinearity, 6/29.
const DELTA: Component = 6.0 / 29.0;

tristim_macros::gen_model! {
    /// A color in the CIE-L\*a\*b\* color space.
    pub struct Lab {
        /// The lightness component, 0 for black and 100 for the reference
        /// white.
        #[range(0.0..=100.0)]
        pub lightness: Component,
        /// The green-red opponent axis.
        pub a: Component,
        /// The blue-yellow opponent axis.
        pub b: Component,
    }
}

/// The CIE-Lab nonlinearity: a cube root, with a linear segment near zero.
fn f(t: Component) -> Component {
    if t > EPSILON {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// The exact inverse of [`f`], meeting it at the breakpoint.
fn f_inv(t: Component) -> Component {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

impl Lab {
    /// Create a rectangular color from its polar form.
    pub fn from_lch(lch: &Lch) -> Result<Self, Error> {
        let (a, b) = lch.to_chromatic_axes();
        Self::new(lch.lightness, a, b)
    }

    /// Convert this color into its polar form.
    pub fn to_lch(&self) -> Result<Lch, Error> {
        Lch::from_polar(self)
    }
}

impl Polar for Lab {
    fn lightness(&self) -> Component {
        self.lightness
    }

    fn chromatic_axes(&self) -> (Component, Component) {
        (self.a, self.b)
    }

    fn from_lch(lch: &Lch) -> Result<Self, Error> {
        Lab::from_lch(lch)
    }
}

impl FromXyz for Lab {
    fn from_xyz(xyz: &Xyz) -> Result<Self, Error> {
        let Components(wx, wy, wz) = ReferenceWhite::WHITE_POINT;
        // The luminance of sRGB white overshoots the reference white by the
        // rounding noise of the sRGB matrix.
        let y = snap_to_unit_range(xyz.y / wy);
        let Components(f0, f1, f2) = Components(xyz.x / wx, y, xyz.z / wz).map(f);

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Self::new(lightness, a, b)
    }
}

impl ToXyz for Lab {
    fn to_xyz(&self) -> Result<Xyz, Error> {
        let Components(wx, wy, wz) = ReferenceWhite::WHITE_POINT;

        let f1 = (self.lightness + 16.0) / 116.0;
        let f0 = f1 + self.a / 500.0;
        let f2 = f1 - self.b / 200.0;

        Xyz::new(wx * f_inv(f0), wy * f_inv(f1), wz * f_inv(f2))
    }
}
