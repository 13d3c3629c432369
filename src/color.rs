//! The building blocks shared by every model: the [`Component`] type, a
//! generic triple of [`Components`], and a [`Color`] that can hold a color of
//! any supported [`Space`].

use std::fmt;

use bitflags::bitflags;

use crate::{
    error::Error,
    models::{Basis, Lab, Lch, Luv, Srgb, SrgbLinear, XyY, Xyz},
};

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// A set of sRGB channels, used to report which channels of a color left
    /// the unit interval.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Channels : u8 {
        /// The red channel.
        const RED = 1 << 0;
        /// The green channel.
        const GREEN = 1 << 1;
        /// The blue channel.
        const BLUE = 1 << 2;
    }
}

impl Channels {
    /// Return the channels of the given RGB components that lie outside of
    /// `[0, 1]`. NaN components are always reported.
    pub fn outside_unit_range(components: &Components) -> Self {
        let outside = |value: Component| !(0.0..=1.0).contains(&value);

        let mut channels = Self::empty();
        channels.set(Self::RED, outside(components.0));
        channels.set(Self::GREEN, outside(components.1));
        channels.set(Self::BLUE, outside(components.2));
        channels
    }
}

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, _)) in self.iter_names().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&name.to_lowercase())?;
        }
        Ok(())
    }
}

/// The color spaces a [`Color`] can be held in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    /// CIE-XYZ, relative to the reference white.
    Xyz,
    /// CIE-L\*a\*b\*.
    Lab,
    /// CIE-L\*u\*v\*.
    Luv,
    /// The polar form of CIE-L\*a\*b\* or CIE-L\*u\*v\*.
    Lch(Basis),
    /// Gamma encoded sRGB.
    Srgb,
    /// sRGB without gamma encoding.
    SrgbLinear,
    /// CIE-xyY chromaticity and luminance.
    XyY,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Xyz => f.write_str("xyz"),
            Self::Lab => f.write_str("lab"),
            Self::Luv => f.write_str("luv"),
            Self::Lch(Basis::Lab) => f.write_str("lch(ab)"),
            Self::Lch(Basis::Luv) => f.write_str("lch(uv)"),
            Self::Srgb => f.write_str("srgb"),
            Self::SrgbLinear => f.write_str("srgb-linear"),
            Self::XyY => f.write_str("xyy"),
        }
    }
}

/// A color held in any of the supported color spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// A color in CIE-XYZ.
    Xyz(Xyz),
    /// A color in CIE-L\*a\*b\*.
    Lab(Lab),
    /// A color in CIE-L\*u\*v\*.
    Luv(Luv),
    /// A polar color, together with the rectangular model it is the polar
    /// form of.
    Lch(Lch, Basis),
    /// A gamma encoded sRGB color.
    Srgb(Srgb),
    /// A linear light sRGB color.
    SrgbLinear(SrgbLinear),
    /// A color in CIE-xyY.
    XyY(XyY),
}

impl Color {
    /// Create a color in the given space from its raw components, validating
    /// them against the model of that space.
    pub fn new(space: Space, components: Components) -> Result<Self, Error> {
        Ok(match space {
            Space::Xyz => Self::Xyz(Xyz::try_from(components)?),
            Space::Lab => Self::Lab(Lab::try_from(components)?),
            Space::Luv => Self::Luv(Luv::try_from(components)?),
            Space::Lch(basis) => Self::Lch(Lch::try_from(components)?, basis),
            Space::Srgb => Self::Srgb(Srgb::try_from(components)?),
            Space::SrgbLinear => Self::SrgbLinear(SrgbLinear::try_from(components)?),
            Space::XyY => Self::XyY(XyY::try_from(components)?),
        })
    }

    /// The space this color is held in.
    pub fn space(&self) -> Space {
        match *self {
            Self::Xyz(_) => Space::Xyz,
            Self::Lab(_) => Space::Lab,
            Self::Luv(_) => Space::Luv,
            Self::Lch(_, basis) => Space::Lch(basis),
            Self::Srgb(_) => Space::Srgb,
            Self::SrgbLinear(_) => Space::SrgbLinear,
            Self::XyY(_) => Space::XyY,
        }
    }

    /// The raw components of this color, in the order of its model.
    pub fn components(&self) -> Components {
        match *self {
            Self::Xyz(ref m) => m.to_components(),
            Self::Lab(ref m) => m.to_components(),
            Self::Luv(ref m) => m.to_components(),
            Self::Lch(ref m, _) => m.to_components(),
            Self::Srgb(ref m) => m.to_components(),
            Self::SrgbLinear(ref m) => m.to_components(),
            Self::XyY(ref m) => m.to_components(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Xyz(ref m) => m.fmt(f),
            Self::Lab(ref m) => m.fmt(f),
            Self::Luv(ref m) => m.fmt(f),
            Self::Lch(ref m, _) => m.fmt(f),
            Self::Srgb(ref m) => m.fmt(f),
            Self::SrgbLinear(ref m) => m.fmt(f),
            Self::XyY(ref m) => m.fmt(f),
        }
    }
}

macro_rules! impl_from_model {
    ($($model:ident),*) => {
        $(
            impl From<$model> for Color {
                fn from(value: $model) -> Self {
                    Self::$model(value)
                }
            }
        )*
    };
}

impl_from_model!(Xyz, Lab, Luv, Srgb, SrgbLinear, XyY);
