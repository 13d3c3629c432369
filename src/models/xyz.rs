//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, Components},
    error::Error,
    models::{FromXyz, Lab, Luv, Srgb, ToXyz, XyY},
};

/// A reference white, given as CIE-XYZ tristimulus values with Y = 1.
pub trait WhitePoint {
    /// The tristimulus values of the white point.
    const WHITE_POINT: Components;

    /// The (x, y) chromaticity coordinates of the white point.
    fn chromaticity() -> (Component, Component) {
        let Components(x, y, z) = Self::WHITE_POINT;
        let sum = x + y + z;
        (x / sum, y / sum)
    }
}

/// The CIE standard illuminant D65 (noon daylight).
#[derive(Clone, Debug)]
pub struct D65;

impl WhitePoint for D65 {
    const WHITE_POINT: Components = Components(0.95047, 1.0, 1.08883);
}

/// The white point every model is normalized against.
pub type ReferenceWhite = D65;

tristim_macros::gen_model! {
    /// A color in the CIE-XYZ color space, relative to [`ReferenceWhite`].
    pub struct Xyz {
        /// The X tristimulus value.
        #[range(0.0..)]
        pub x: Component,
        /// The Y tristimulus value, the relative luminance.
        #[range(0.0..)]
        pub y: Component,
        /// The Z tristimulus value.
        #[range(0.0..)]
        pub z: Component,
    }
}

impl Xyz {
    /// The reference white.
    pub fn white() -> Self {
        let Components(x, y, z) = ReferenceWhite::WHITE_POINT;
        Self { x, y, z }
    }

    /// Convert a CIE-Lab color to CIE-XYZ.
    pub fn from_lab(lab: &Lab) -> Result<Self, Error> {
        lab.to_xyz()
    }

    /// Convert a CIE-Luv color to CIE-XYZ.
    pub fn from_luv(luv: &Luv) -> Result<Self, Error> {
        luv.to_xyz()
    }

    /// Convert a gamma encoded sRGB color to CIE-XYZ.
    pub fn from_srgb(srgb: &Srgb) -> Result<Self, Error> {
        srgb.to_xyz()
    }

    /// Convert a CIE-xyY color to CIE-XYZ.
    pub fn from_xyy(xyy: &XyY) -> Result<Self, Error> {
        xyy.to_xyz()
    }

    /// Convert this color to CIE-Lab.
    pub fn to_lab(&self) -> Result<Lab, Error> {
        Lab::from_xyz(self)
    }

    /// Convert this color to CIE-Luv.
    pub fn to_luv(&self) -> Result<Luv, Error> {
        Luv::from_xyz(self)
    }

    /// Convert this color to gamma encoded sRGB. Fails if the color lies
    /// outside of the sRGB gamut.
    pub fn to_srgb(&self) -> Result<Srgb, Error> {
        Srgb::from_xyz(self)
    }

    /// Convert this color to CIE-xyY.
    pub fn to_xyy(&self) -> Result<XyY, Error> {
        XyY::from_xyz(self)
    }
}

impl ToXyz for Xyz {
    fn to_xyz(&self) -> Result<Xyz, Error> {
        Ok(*self)
    }
}

impl FromXyz for Xyz {
    fn from_xyz(xyz: &Xyz) -> Result<Self, Error> {
        Ok(*xyz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, assert_model_eq, error::Bound};

    #[test]
    fn negative_tristimulus_values_are_rejected() {
        let Err(Error::Domain(err)) = Xyz::new(0.2, -0.01, 0.3) else {
            panic!("negative Y should not construct");
        };
        assert_eq!(err.model, "Xyz");
        assert_eq!(err.component, "y");
        assert_eq!(err.bound, Bound::Minimum(0.0));

        assert!(Xyz::new(0.0, 0.0, 0.0).is_ok());
        assert!(Xyz::new(2.0, 3.0, 4.0).is_ok());
    }

    #[test]
    fn white_point_chromaticity() {
        let (x, y) = ReferenceWhite::chromaticity();
        assert_component_eq!(x, 0.312727, epsilon = 1.0e-6);
        assert_component_eq!(y, 0.329023, epsilon = 1.0e-6);
    }

    #[test]
    fn named_conversions_round_trip() {
        let xyz = Xyz::new(0.3, 0.25, 0.4).unwrap();

        assert_model_eq!(Xyz::from_lab(&xyz.to_lab().unwrap()).unwrap(), xyz);
        assert_model_eq!(Xyz::from_luv(&xyz.to_luv().unwrap()).unwrap(), xyz);
        assert_model_eq!(Xyz::from_srgb(&xyz.to_srgb().unwrap()).unwrap(), xyz);
        assert_model_eq!(Xyz::from_xyy(&xyz.to_xyy().unwrap()).unwrap(), xyz);
    }

    #[test]
    fn display() {
        let xyz = Xyz::new(0.5, 0.25, 0.125).unwrap();
        assert_eq!(xyz.to_string(), "Xyz(0.5, 0.25, 0.125)");
    }
}
