//! tristim converts colors between the CIE color spaces and sRGB, and maps
//! colors that can not be displayed into the sRGB gamut.
//!
//! CIE-XYZ, relative to the D65 reference white, is the hub of every
//! conversion. CIE-L\*a\*b\*, CIE-L\*u\*v\*, CIE-xyY and sRGB each convert to
//! and from it, and CIE-LCh is the polar form of either Lab or Luv.
//!
//! ```rust
//! use tristim::{gamut, models::Basis};
//! let red = gamut::resolve(53.0, 180.0, 15.0, Basis::Luv)?;
//! assert_eq!(red.hex(), "#f13300");
//! # Ok::<(), tristim::Error>(())
//! ```

#![deny(missing_docs)]


pub mod color;
mod convert;
pub mod error;
pub mod gamut;
pub mod math;
pub mod models;

pub use color::{Channels, Color, Component, Components, Space};
pub use error::{Bound, Degeneracy, DomainError, Error, HexFormatError};
pub use gamut::{resolve, GamutSearch, Mapping, Strategy};
pub use models::{Basis, Lab, Lch, Luv, Srgb, SrgbLinear, XyY, Xyz};
