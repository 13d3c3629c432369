//! Model a color in the CIE-xyY color space.

use crate::{
    color::Component,
    error::Error,
    math::snap_to_unit_range,
    models::{
        xyz::{ReferenceWhite, WhitePoint, Xyz},
        FromXyz, ToXyz,
    },
};

tristim_macros::gen_model! {
    /// A color given by its (x, y) chromaticity and its luminance Y.
    pub struct XyY {
        /// The x chromaticity coordinate.
        #[range(0.0..=1.0)]
        pub x: Component,
        /// The y chromaticity coordinate.
        #[range(0.0..=1.0)]
        pub y: Component,
        /// The luminance, identical to CIE-XYZ's Y.
        #[range(0.0..=1.0)]
        pub luminance: Component,
    }
}

impl FromXyz for XyY {
    /// Black has no chromaticity of its own and takes the reference white's.
    /// A luminance within [`GAMUT_TOLERANCE`](crate::math::GAMUT_TOLERANCE)
    /// above 1 is taken as 1.
    fn from_xyz(xyz: &Xyz) -> Result<Self, Error> {
        let sum = xyz.x + xyz.y + xyz.z;
        if sum == 0.0 {
            let (x, y) = ReferenceWhite::chromaticity();
            return Self::new(x, y, 0.0);
        }

        Self::new(xyz.x / sum, xyz.y / sum, snap_to_unit_range(xyz.y))
    }
}

impl ToXyz for XyY {
    fn to_xyz(&self) -> Result<Xyz, Error> {
        if self.y == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }

        let scale = self.luminance / self.y;
        Xyz::new(
            self.x * scale,
            self.luminance,
            (1.0 - self.x - self.y) * scale,
        )
    }
}
