//! Model a color in the sRGB color space, either gamma encoded or in linear
//! light.

use std::str::FromStr;

use crate::{
    color::{Channels, Component, Components},
    error::{Error, HexFormatError},
    math::{snap_to_unit_range, transform, transform_3x3, Transform},
    models::{FromXyz, ToXyz, Xyz},
};

pub mod gamma;

tristim_macros::gen_model! {
    /// A gamma encoded color in the sRGB color space.
    pub struct Srgb {
        /// The red channel.
        #[range(0.0..=1.0)]
        pub red: Component,
        /// The green channel.
        #[range(0.0..=1.0)]
        pub green: Component,
        /// The blue channel.
        #[range(0.0..=1.0)]
        pub blue: Component,
    }
}

tristim_macros::gen_model! {
    /// A color in the sRGB color space with linear light components.
    pub struct SrgbLinear {
        /// The red channel.
        #[range(0.0..=1.0)]
        pub red: Component,
        /// The green channel.
        #[range(0.0..=1.0)]
        pub green: Component,
        /// The blue channel.
        #[range(0.0..=1.0)]
        pub blue: Component,
    }
}

#[rustfmt::skip]
const TO_XYZ: Transform = transform_3x3(
    0.4124564, 0.2126729, 0.0193339,
    0.3575761, 0.7151522, 0.1191920,
    0.1804375, 0.0721750, 0.9503041,
);

#[rustfmt::skip]
const FROM_XYZ: Transform = transform_3x3(
     3.2404548360214083, -0.9692663898756537,    0.05564341960421366,
    -1.5371388501025751,  1.8760109288424913,   -0.20402585426769815,
    -0.4985315468684809,  0.041556082346673524,  1.0572251624579287,
);

impl Srgb {
    /// Black, the origin of the unit cube.
    pub const BLACK: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    /// White, the far corner of the unit cube.
    pub const WHITE: Self = Self {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };

    /// Convert this color to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        // Decoding maps the unit interval onto itself.
        let Components(red, green, blue) = gamma::to_linear_light(&self.to_components());
        SrgbLinear { red, green, blue }
    }

    /// Format this color as a lowercase `#rrggbb` string. Each channel is
    /// scaled to `[0, 255]` and rounded half away from zero.
    pub fn hex(&self) -> String {
        let [red, green, blue] =
            [self.red, self.green, self.blue].map(|c| (c * 255.0).round() as u8);
        format!("#{red:02x}{green:02x}{blue:02x}")
    }
}

impl FromStr for Srgb {
    type Err = HexFormatError;

    /// Parse a `#rrggbb` or `#rgb` hex color. Digits may be of either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(HexFormatError::MissingHash)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexFormatError::MalformedHex);
        }

        let width = match digits.len() {
            3 => 1,
            6 => 2,
            len => return Err(HexFormatError::UnexpectedLength(len)),
        };

        let channel = |index: usize| -> Result<Component, HexFormatError> {
            let hex = &digits[index * width..(index + 1) * width];
            let value = u8::from_str_radix(hex, 16).map_err(|_| HexFormatError::MalformedHex)?;
            // A single digit is repeated, so `f` is `ff`.
            let value = if width == 1 { value * 17 } else { value };
            Ok(Component::from(value) / 255.0)
        };

        Ok(Self {
            red: channel(0)?,
            green: channel(1)?,
            blue: channel(2)?,
        })
    }
}

impl SrgbLinear {
    /// Convert this color to gamma encoded sRGB.
    pub fn to_gamma_encoded(&self) -> Srgb {
        // Encoding maps the unit interval onto itself.
        let Components(red, green, blue) = gamma::to_gamma_encoded(&self.to_components());
        Srgb { red, green, blue }
    }
}

impl ToXyz for SrgbLinear {
    fn to_xyz(&self) -> Result<Xyz, Error> {
        Xyz::try_from(transform(&TO_XYZ, self.to_components()))
    }
}

impl FromXyz for SrgbLinear {
    /// Fails with [`Error::OutOfGamut`] if any channel leaves `[0, 1]` by more
    /// than [`GAMUT_TOLERANCE`](crate::math::GAMUT_TOLERANCE).
    fn from_xyz(xyz: &Xyz) -> Result<Self, Error> {
        let linear = transform(&FROM_XYZ, xyz.to_components()).map(snap_to_unit_range);

        let outside = Channels::outside_unit_range(&linear);
        if !outside.is_empty() {
            return Err(Error::OutOfGamut(outside));
        }

        Self::try_from(linear)
    }
}

impl ToXyz for Srgb {
    fn to_xyz(&self) -> Result<Xyz, Error> {
        self.to_linear_light().to_xyz()
    }
}

impl FromXyz for Srgb {
    fn from_xyz(xyz: &Xyz) -> Result<Self, Error> {
        Ok(SrgbLinear::from_xyz(xyz)?.to_gamma_encoded())
    }
}
