//! Conversions between colors held at runtime.
//!
//! Lab and Luv convert to and from their polar forms directly, and so do
//! gamma encoded and linear light sRGB. Every other pair goes through CIE-XYZ.
//!
//! ```rust
//! use tristim::{models::Basis, Color, Space};
//! let teal: Color = "#008080".parse::<tristim::models::Srgb>()?.into();
//! let lch = teal.to_space(Space::Lch(Basis::Luv))?;
//! assert_eq!(lch.space(), Space::Lch(Basis::Luv));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    color::{Color, Space},
    error::Error,
    models::{Basis, FromXyz, Lab, Luv, Srgb, SrgbLinear, ToXyz, XyY, Xyz},
};

impl Color {
    /// Convert this color to the specified space. Fails if the color has no
    /// representation in that space, e.g. when it lies outside of the sRGB
    /// gamut.
    pub fn to_space(&self, space: Space) -> Result<Self, Error> {
        use Space as S;

        if self.space() == space {
            return Ok(*self);
        }

        // Handle direct conversions.
        match (*self, space) {
            (Self::Lab(lab), S::Lch(Basis::Lab)) => return Ok(Self::Lch(lab.to_lch()?, Basis::Lab)),
            (Self::Luv(luv), S::Lch(Basis::Luv)) => return Ok(Self::Lch(luv.to_lch()?, Basis::Luv)),
            (Self::Lch(lch, Basis::Lab), S::Lab) => return Ok(lch.to_lab()?.into()),
            (Self::Lch(lch, Basis::Luv), S::Luv) => return Ok(lch.to_luv()?.into()),
            (Self::Srgb(srgb), S::SrgbLinear) => return Ok(srgb.to_linear_light().into()),
            (Self::SrgbLinear(linear), S::Srgb) => return Ok(linear.to_gamma_encoded().into()),
            _ => {}
        }

        // The rest converts through CIE-XYZ.
        let xyz = self.to_xyz()?;

        Ok(match space {
            S::Xyz => xyz.into(),
            S::Lab => Lab::from_xyz(&xyz)?.into(),
            S::Luv => Luv::from_xyz(&xyz)?.into(),
            S::Lch(basis) => Self::Lch(basis.from_xyz(&xyz)?, basis),
            S::Srgb => Srgb::from_xyz(&xyz)?.into(),
            S::SrgbLinear => SrgbLinear::from_xyz(&xyz)?.into(),
            S::XyY => XyY::from_xyz(&xyz)?.into(),
        })
    }
}

impl ToXyz for Color {
    fn to_xyz(&self) -> Result<Xyz, Error> {
        match *self {
            Self::Xyz(ref m) => m.to_xyz(),
            Self::Lab(ref m) => m.to_xyz(),
            Self::Luv(ref m) => m.to_xyz(),
            Self::Lch(ref m, basis) => basis.to_xyz(m),
            Self::Srgb(ref m) => m.to_xyz(),
            Self::SrgbLinear(ref m) => m.to_xyz(),
            Self::XyY(ref m) => m.to_xyz(),
        }
    }
}
