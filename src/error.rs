//! Errors raised while constructing, converting, and gamut mapping colors.

use std::fmt;

use crate::color::{Channels, Component};

/// The bound a component violated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bound {
    /// The component must be a finite number.
    Finite,
    /// The component must not be less than this value.
    Minimum(Component),
    /// The component must not be greater than this value.
    Maximum(Component),
}

/// A component fell outside of the domain declared by its model.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainError {
    /// The name of the model, e.g. `Lab`.
    pub model: &'static str,
    /// The name of the offending component, e.g. `lightness`.
    pub component: &'static str,
    /// The offending value.
    pub value: Component,
    /// The bound that was violated.
    pub bound: Bound,
}

impl DomainError {
    /// Check a single component against its (inclusive) bounds.
    pub fn check(
        model: &'static str,
        component: &'static str,
        value: Component,
        min: Option<Component>,
        max: Option<Component>,
    ) -> Result<(), Self> {
        let violated = if !value.is_finite() {
            Some(Bound::Finite)
        } else if let Some(min) = min.filter(|min| value < *min) {
            Some(Bound::Minimum(min))
        } else {
            max.filter(|max| value > *max).map(Bound::Maximum)
        };

        match violated {
            None => Ok(()),
            Some(bound) => Err(Self {
                model,
                component,
                value,
                bound,
            }),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} is {}, ", self.model, self.component, self.value)?;
        match self.bound {
            Bound::Finite => f.write_str("but should be a finite number"),
            Bound::Minimum(min) => write!(f, "but should be at least {min}"),
            Bound::Maximum(max) => write!(f, "but should be at most {max}"),
        }
    }
}

impl std::error::Error for DomainError {}

/// A conversion whose formula divides by zero for the given input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degeneracy {
    /// CIE-L\*u\*v\* to CIE-XYZ divides by the lightness, which is zero.
    ZeroLightness,
    /// CIE-L\*u\*v\* to CIE-XYZ divides by the v' chromaticity, which is zero.
    ZeroChromaticity,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ZeroLightness => f.write_str("Luv with zero lightness has no XYZ equivalent"),
            Self::ZeroChromaticity => {
                f.write_str("Luv with zero v' chromaticity has no XYZ equivalent")
            }
        }
    }
}

/// The error type of this crate.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A component lies outside of its model's domain.
    Domain(DomainError),
    /// A conversion into sRGB left the unit cube on the given channels.
    OutOfGamut(Channels),
    /// A conversion is undefined for its input.
    Degenerate(Degeneracy),
    /// A gamut search was configured with a step that is not a positive
    /// number.
    InvalidStep(Component),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Domain(ref err) => err.fmt(f),
            Self::OutOfGamut(channels) => {
                write!(f, "sRGB {channels} should be between 0 and 1")
            }
            Self::Degenerate(degeneracy) => degeneracy.fmt(f),
            Self::InvalidStep(step) => {
                write!(f, "gamut search step is {step}, but should be positive")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Domain(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for Error {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}

impl From<Degeneracy> for Error {
    fn from(value: Degeneracy) -> Self {
        Self::Degenerate(value)
    }
}

/// A string that could not be parsed as a `#rrggbb` or `#rgb` hex color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexFormatError {
    /// The string does not start with `#`.
    MissingHash,
    /// The string has neither 3 nor 6 hexadecimal digits.
    UnexpectedLength(usize),
    /// The string contains a character that is not a hexadecimal digit.
    MalformedHex,
}

impl fmt::Display for HexFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MissingHash => f.write_str("hex color should start with `#`"),
            Self::UnexpectedLength(len) => {
                write!(f, "hex color should have 3 or 6 digits but has {len}")
            }
            Self::MalformedHex => f.write_str("hex color should contain only hexadecimal digits"),
        }
    }
}

impl std::error::Error for HexFormatError {}
