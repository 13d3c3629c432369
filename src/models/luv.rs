//! Model a color in the CIE-L\*u\*v\* color space.

use crate::{
    color::{Component, Components},
    error::{Degeneracy, Error},
    models::{
        lch::{Lch, Polar},
        xyz::{ReferenceWhite, WhitePoint, Xyz},
        FromXyz, ToXyz,
    },
};

/// The breakpoint on the relative luminance, (6/29)^3.
const EPSILON: Component = 216.0 / 24389.0;

/// The slope of the linear segment, (29/3)^3.
const KAPPA: Component = 24389.0 / 27.0;

tristim_macros::gen_model! {
    /// A color in the CIE-L\*u\*v\* color space.
    pub struct Luv {
        /// The lightness component, identical to CIE-Lab's.
        #[range(0.0..)]
        pub lightness: Component,
        /// The u chromatic axis.
        pub u: Component,
        /// The v chromatic axis.
        pub v: Component,
    }
}

/// The projective (u', v') chromaticity of tristimulus values. Black has no
/// chromaticity and maps to (0, 0).
fn chromaticity(Components(x, y, z): Components) -> (Component, Component) {
    let denominator = x + 15.0 * y + 3.0 * z;
    if denominator == 0.0 {
        return (0.0, 0.0);
    }
    (4.0 * x / denominator, 9.0 * y / denominator)
}

impl Luv {
    /// Create a rectangular color from its polar form.
    pub fn from_lch(lch: &Lch) -> Result<Self, Error> {
        let (u, v) = lch.to_chromatic_axes();
        Self::new(lch.lightness, u, v)
    }

    /// Convert this color into its polar form.
    pub fn to_lch(&self) -> Result<Lch, Error> {
        Lch::from_polar(self)
    }
}

impl Polar for Luv {
    fn lightness(&self) -> Component {
        self.lightness
    }

    fn chromatic_axes(&self) -> (Component, Component) {
        (self.u, self.v)
    }

    fn from_lch(lch: &Lch) -> Result<Self, Error> {
        Luv::from_lch(lch)
    }
}

impl FromXyz for Luv {
    fn from_xyz(xyz: &Xyz) -> Result<Self, Error> {
        let y = xyz.y / ReferenceWhite::WHITE_POINT.1;
        let lightness = if y > EPSILON {
            116.0 * y.cbrt() - 16.0
        } else {
            KAPPA * y
        };

        let (u_prime, v_prime) = chromaticity(xyz.to_components());
        let (u_white, v_white) = chromaticity(ReferenceWhite::WHITE_POINT);

        Self::new(
            lightness,
            13.0 * lightness * (u_prime - u_white),
            13.0 * lightness * (v_prime - v_white),
        )
    }
}

impl ToXyz for Luv {
    fn to_xyz(&self) -> Result<Xyz, Error> {
        if self.lightness == 0.0 {
            return Err(Degeneracy::ZeroLightness.into());
        }

        let (u_white, v_white) = chromaticity(ReferenceWhite::WHITE_POINT);
        let u_prime = self.u / (13.0 * self.lightness) + u_white;
        let v_prime = self.v / (13.0 * self.lightness) + v_white;
        if v_prime == 0.0 {
            return Err(Degeneracy::ZeroChromaticity.into());
        }

        let y = ReferenceWhite::WHITE_POINT.1
            * if self.lightness > KAPPA * EPSILON {
                let f = (self.lightness + 16.0) / 116.0;
                f * f * f
            } else {
                self.lightness / KAPPA
            };

        let x = y * 9.0 * u_prime / (4.0 * v_prime);
        let z = y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime);

        Xyz::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, assert_model_eq};

    #[test]
    fn black_has_no_chromaticity() {
        assert_eq!(chromaticity(Components(0.0, 0.0, 0.0)), (0.0, 0.0));

        let luv = Luv::from_xyz(&Xyz::new(0.0, 0.0, 0.0).unwrap()).unwrap();
        assert_eq!(luv.to_components(), Components(0.0, 0.0, 0.0));
    }

    #[test]
    fn white_is_neutral() {
        let luv = Luv::from_xyz(&Xyz::white()).unwrap();
        assert_model_eq!(luv, Components(100.0, 0.0, 0.0));
    }

    #[test]
    fn known_value() {
        // sRGB red: Luv(53.2408, 175.0151, 37.7564).
        let xyz = Xyz::new(0.4124564, 0.2126729, 0.0193339).unwrap();
        let luv = Luv::from_xyz(&xyz).unwrap();
        assert_component_eq!(luv.lightness, 53.2408, epsilon = 1.0e-3);
        assert_component_eq!(luv.u, 175.0151, epsilon = 1.0e-3);
        assert_component_eq!(luv.v, 37.7564, epsilon = 1.0e-3);
    }

    #[test]
    fn lightness_branches_meet() {
        let just_below = Xyz::new(0.0, EPSILON * 0.999_999, 0.0).unwrap();
        let just_above = Xyz::new(0.0, EPSILON * 1.000_001, 0.0).unwrap();
        let below = Luv::from_xyz(&just_below).unwrap().lightness;
        let above = Luv::from_xyz(&just_above).unwrap().lightness;
        assert_component_eq!(below, 8.0, epsilon = 1.0e-4);
        assert_component_eq!(above, 8.0, epsilon = 1.0e-4);
    }

    #[test]
    fn xyz_round_trip() {
        for xyz in [
            Xyz::new(0.3, 0.25, 0.4).unwrap(),
            Xyz::new(0.002, 0.003, 0.001).unwrap(),
            Xyz::new(0.9, 0.95, 1.0).unwrap(),
        ] {
            let luv = Luv::from_xyz(&xyz).unwrap();
            assert_model_eq!(luv.to_xyz().unwrap(), xyz);
        }
    }

    #[test]
    fn zero_lightness_is_degenerate() {
        let luv = Luv::new(0.0, 0.0, 0.0).unwrap();
        assert_eq!(
            luv.to_xyz(),
            Err(Error::Degenerate(Degeneracy::ZeroLightness))
        );
    }

    #[test]
    fn zero_v_prime_is_degenerate() {
        let (_, v_white) = chromaticity(ReferenceWhite::WHITE_POINT);
        // 13 * lightness is exactly 64, so v' cancels to exactly zero.
        let luv = Luv::new(64.0 / 13.0, 0.0, -64.0 * v_white).unwrap();
        assert_eq!(
            luv.to_xyz(),
            Err(Error::Degenerate(Degeneracy::ZeroChromaticity))
        );
    }
}
