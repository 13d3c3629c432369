//! Models are structs that represent a color in a specified color space or
//! form. Each model validates its components on construction and converts to
//! and from CIE-XYZ, the hub of all conversions.
//!
//! ```rust
//! use tristim::models::{Basis, Lch, Srgb, ToXyz};
//! let red = Srgb::new(1.0, 0.0, 0.0)?;
//! let lch = Lch::from_luv(&red.to_xyz()?.to_luv()?)?;
//! let back = lch.to_srgb(Basis::Luv)?;
//! assert_eq!(back.hex(), "#ff0000");
//! # Ok::<(), tristim::Error>(())
//! ```

use crate::error::Error;

mod lab;
mod lch;
mod luv;
pub mod rgb;
mod xyy;
mod xyz;

pub use lab::Lab;
pub use lch::{Basis, Lch, Polar};
pub use luv::Luv;
pub use rgb::{gamma, Srgb, SrgbLinear};
pub use xyy::XyY;
pub use xyz::{ReferenceWhite, WhitePoint, Xyz, D65};

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Result<Xyz, Error>;
}

/// Specify that a color model can be created from CIE-XYZ.
pub trait FromXyz: Sized {
    /// Convert a CIE-XYZ color to this model.
    fn from_xyz(xyz: &Xyz) -> Result<Self, Error>;
}

/// Convert between any two models by way of CIE-XYZ.
pub trait Convert: ToXyz {
    /// Convert this color to the model `T`.
    fn convert<T: FromXyz>(&self) -> Result<T, Error> {
        T::from_xyz(&self.to_xyz()?)
    }
}

impl<M: ToXyz> Convert for M {}
