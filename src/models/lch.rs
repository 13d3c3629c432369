//! The cylindrical polar form shared by CIE-L\*a\*b\* and CIE-L\*u\*v\*.

use crate::{
    color::Component,
    error::Error,
    math::normalize_hue,
    models::{Lab, Luv, Srgb, ToXyz, Xyz},
};

tristim_macros::gen_model! {
    /// A color given by lightness, chroma and hue. The rectangular model it
    /// is the polar form of is supplied where it matters, as a [`Basis`].
    ///
    /// Chroma is not bounded here; callers that need it non-negative clamp
    /// it themselves.
    pub struct Lch {
        /// The lightness component, shared with the rectangular model.
        #[range(0.0..)]
        pub lightness: Component,
        /// The chroma component, the distance from the neutral axis.
        pub chroma: Component,
        /// The hue angle in degrees.
        #[range(0.0..=360.0)]
        pub hue: Component,
    }
}

/// A rectangular model with a lightness and two chromatic axes, which can be
/// converted to and from [`Lch`].
pub trait Polar: Sized {
    /// The lightness component.
    fn lightness(&self) -> Component;

    /// The two chromatic axes, e.g. `(a, b)` for CIE-Lab.
    fn chromatic_axes(&self) -> (Component, Component);

    /// Create the rectangular form of a polar color.
    fn from_lch(lch: &Lch) -> Result<Self, Error>;
}

/// The rectangular model an [`Lch`] color is the polar form of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Basis {
    /// CIE-L\*a\*b\*.
    Lab,
    /// CIE-L\*u\*v\*.
    Luv,
}

impl Basis {
    /// Convert a polar color in this basis to CIE-XYZ.
    pub fn to_xyz(self, lch: &Lch) -> Result<Xyz, Error> {
        match self {
            Self::Lab => lch.to_lab()?.to_xyz(),
            Self::Luv => lch.to_luv()?.to_xyz(),
        }
    }

    /// Convert a CIE-XYZ color to its polar form in this basis.
    pub fn from_xyz(self, xyz: &Xyz) -> Result<Lch, Error> {
        match self {
            Self::Lab => Lch::from_polar(&xyz.to_lab()?),
            Self::Luv => Lch::from_polar(&xyz.to_luv()?),
        }
    }
}

impl Lch {
    /// Convert a rectangular color into its polar form. The hue of a neutral
    /// color is 0.
    pub fn from_polar<P: Polar>(rectangular: &P) -> Result<Self, Error> {
        let (x, y) = rectangular.chromatic_axes();
        let chroma = x.hypot(y);
        let hue = normalize_hue(y.atan2(x).to_degrees());

        Self::new(rectangular.lightness(), chroma, hue)
    }

    /// Convert this color into the rectangular model `P`.
    pub fn to_polar<P: Polar>(&self) -> Result<P, Error> {
        P::from_lch(self)
    }

    /// Convert a CIE-Lab color into its polar form.
    pub fn from_lab(lab: &Lab) -> Result<Self, Error> {
        Self::from_polar(lab)
    }

    /// Convert a CIE-Luv color into its polar form.
    pub fn from_luv(luv: &Luv) -> Result<Self, Error> {
        Self::from_polar(luv)
    }

    /// Convert this color into CIE-Lab.
    pub fn to_lab(&self) -> Result<Lab, Error> {
        Lab::from_lch(self)
    }

    /// Convert this color into CIE-Luv.
    pub fn to_luv(&self) -> Result<Luv, Error> {
        Luv::from_lch(self)
    }

    /// Convert this color, in the given basis, to gamma encoded sRGB. Fails if
    /// the color lies outside of the sRGB gamut.
    pub fn to_srgb(&self, basis: Basis) -> Result<Srgb, Error> {
        basis.to_xyz(self)?.to_srgb()
    }

    /// This color with a different chroma.
    pub fn with_chroma(&self, chroma: Component) -> Result<Self, Error> {
        Self::new(self.lightness, chroma, self.hue)
    }

    /// The two chromatic axes of the rectangular form.
    pub(crate) fn to_chromatic_axes(&self) -> (Component, Component) {
        let (sin, cos) = self.hue.to_radians().sin_cos();
        (self.chroma * cos, self.chroma * sin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, assert_model_eq, color::Components};

    #[test]
    fn hue_is_bounded() {
        assert!(Lch::new(50.0, 30.0, 0.0).is_ok());
        assert!(Lch::new(50.0, 30.0, 360.0).is_ok());
        assert!(Lch::new(50.0, 30.0, 360.5).is_err());
        assert!(Lch::new(50.0, 30.0, -0.5).is_err());
        assert!(Lch::new(-1.0, 30.0, 10.0).is_err());
        // Chroma is left to the caller.
        assert!(Lch::new(50.0, -5.0, 10.0).is_ok());
    }

    #[test]
    fn hue_wraps_into_positive_degrees() {
        let lab = Lab::new(50.0, 10.0, -10.0).unwrap();
        let lch = Lch::from_lab(&lab).unwrap();
        assert_component_eq!(lch.hue, 315.0);
        assert_component_eq!(lch.chroma, 200.0_f64.sqrt());

        let lab = Lab::new(50.0, -10.0, 0.0).unwrap();
        assert_component_eq!(Lch::from_lab(&lab).unwrap().hue, 180.0);
    }

    #[test]
    fn neutral_colors_have_zero_hue() {
        let lch = Lch::from_lab(&Lab::new(50.0, 0.0, 0.0).unwrap()).unwrap();
        assert_model_eq!(lch, Components(50.0, 0.0, 0.0));
    }

    #[test]
    fn polar_round_trip_across_zero_degrees() {
        for (a, b) in [(30.0, -1.0e-3), (30.0, 1.0e-3), (-5.0, -40.0), (0.0, 25.0)] {
            let lab = Lab::new(70.0, a, b).unwrap();
            assert_model_eq!(Lch::from_lab(&lab).unwrap().to_lab().unwrap(), lab);

            let luv = Luv::new(70.0, a, b).unwrap();
            assert_model_eq!(Lch::from_luv(&luv).unwrap().to_luv().unwrap(), luv);
        }
    }

    #[test]
    fn generic_polar_conversion() {
        let luv = Luv::new(30.0, 12.0, -7.0).unwrap();
        let lch = Lch::from_polar(&luv).unwrap();
        let back: Luv = lch.to_polar().unwrap();
        assert_model_eq!(back, luv);
    }

    #[test]
    fn basis_selects_rectangular_model() {
        let lch = Lch::new(60.0, 20.0, 140.0).unwrap();

        let via_lab = Basis::Lab.to_xyz(&lch).unwrap();
        assert_model_eq!(via_lab, lch.to_lab().unwrap().to_xyz().unwrap());

        let via_luv = Basis::Luv.to_xyz(&lch).unwrap();
        assert_model_eq!(via_luv, lch.to_luv().unwrap().to_xyz().unwrap());

        assert_model_eq!(Basis::Lab.from_xyz(&via_lab).unwrap(), lch);
        assert_model_eq!(Basis::Luv.from_xyz(&via_luv).unwrap(), lch);
    }
}
