//! Gamut mapping of polar colors into sRGB.
//!
//! A color given as lightness, chroma and hue may not be displayable. The
//! search keeps the lightness and hue and lowers the chroma until the color
//! fits into the sRGB unit cube. Chroma 0 lies on the neutral axis, which is
//! always displayable, so the search can not fail for a valid color.

use crate::{
    color::{Channels, Component},
    error::Error,
    models::{Basis, Lch, Srgb},
};

/// How the search moves towards the gamut boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Lower the chroma by one step at a time, starting from the requested
    /// chroma.
    #[default]
    Linear,
    /// Halve the interval between the neutral axis and the requested chroma
    /// until it is no wider than one step.
    Bisection,
}

/// The outcome of a gamut search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mapping {
    /// The displayable color.
    pub color: Srgb,
    /// The chroma the color was found at. Never more than the requested
    /// chroma.
    pub chroma: Component,
    /// The number of candidates converted to sRGB, the returned one
    /// included.
    pub iterations: usize,
    /// The channels that left the unit cube for the rejected candidate closest
    /// to the boundary. Empty if the requested chroma was displayable, or if
    /// that candidate had no valid tristimulus values at all.
    pub limited_by: Channels,
}

/// Search for the largest displayable chroma at a given lightness and hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GamutSearch {
    step: Component,
    strategy: Strategy,
    max_iterations: Option<usize>,
}

impl Default for GamutSearch {
    fn default() -> Self {
        Self {
            step: Self::DEFAULT_STEP,
            strategy: Strategy::Linear,
            max_iterations: None,
        }
    }
}

impl GamutSearch {
    /// The precision of the search if none is given.
    pub const DEFAULT_STEP: Component = 1.0e-3;

    /// Create a search with the given step, the precision the boundary is
    /// found with. Fails if the step is not a positive finite number.
    pub fn new(step: Component) -> Result<Self, Error> {
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::InvalidStep(step));
        }

        Ok(Self {
            step,
            ..Self::default()
        })
    }

    /// Use the given strategy.
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Give up after `max_iterations` rejected candidates and fall back to
    /// the neutral axis. This holds for both strategies: a capped bisection
    /// discards the displayable chroma it may have found so far.
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations: Some(max_iterations),
            ..self
        }
    }

    /// The step this search was created with.
    pub fn step(&self) -> Component {
        self.step
    }

    /// The strategy of this search.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Map the polar color `(lightness, chroma, hue)` in the given basis into
    /// sRGB.
    ///
    /// A lightness of 0 or less is black and a lightness of 100 or more is
    /// white, whatever the chroma and hue. Otherwise the triple must be a
    /// valid [`Lch`] color; a negative chroma is treated as 0.
    pub fn map(
        &self,
        lightness: Component,
        chroma: Component,
        hue: Component,
        basis: Basis,
    ) -> Result<Mapping, Error> {
        if lightness <= 0.0 {
            return Ok(Mapping::boundary(Srgb::BLACK));
        }
        if lightness >= 100.0 {
            return Ok(Mapping::boundary(Srgb::WHITE));
        }

        let origin = Lch::new(lightness, chroma, hue)?;
        let requested = origin.chroma.max(0.0);

        match self.strategy {
            Strategy::Linear => self.linear(&origin, requested, basis),
            Strategy::Bisection => self.bisection(&origin, requested, basis),
        }
    }

    /// Map the polar color into sRGB and return only the color. See
    /// [`GamutSearch::map`].
    pub fn resolve(
        &self,
        lightness: Component,
        chroma: Component,
        hue: Component,
        basis: Basis,
    ) -> Result<Srgb, Error> {
        self.map(lightness, chroma, hue, basis)
            .map(|mapping| mapping.color)
    }

    fn exhausted(&self, rejected: usize) -> bool {
        self.max_iterations.is_some_and(|max| rejected >= max)
    }

    fn linear(&self, origin: &Lch, requested: Component, basis: Basis) -> Result<Mapping, Error> {
        let mut limited_by = Channels::empty();
        let mut rejected = 0;

        loop {
            // Stepping from the request keeps rounding errors from adding up.
            let chroma = if self.exhausted(rejected) {
                0.0
            } else {
                (requested - self.step * rejected as Component).max(0.0)
            };

            match candidate(origin, chroma, basis) {
                Ok(color) => {
                    return Ok(Mapping {
                        color,
                        chroma,
                        iterations: rejected + 1,
                        limited_by,
                    })
                }
                Err(err) if chroma > 0.0 => {
                    limited_by = rejected_channels(&err);
                    rejected += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn bisection(
        &self,
        origin: &Lch,
        requested: Component,
        basis: Basis,
    ) -> Result<Mapping, Error> {
        let mut limited_by = match candidate(origin, requested, basis) {
            Ok(color) => {
                return Ok(Mapping {
                    color,
                    chroma: requested,
                    iterations: 1,
                    limited_by: Channels::empty(),
                })
            }
            Err(err) if requested > 0.0 => rejected_channels(&err),
            Err(err) => return Err(err),
        };

        let mut iterations = 1;
        let mut rejected = 1;
        let mut min = 0.0;
        let mut max = requested;
        let mut found = None;

        while max - min > self.step && !self.exhausted(rejected) {
            let chroma = (min + max) / 2.0;
            iterations += 1;

            match candidate(origin, chroma, basis) {
                Ok(color) => {
                    min = chroma;
                    found = Some(color);
                }
                Err(err) => {
                    max = chroma;
                    limited_by = rejected_channels(&err);
                    rejected += 1;
                }
            }
        }

        if self.exhausted(rejected) {
            min = 0.0;
            found = None;
        }

        let color = match found {
            Some(color) => color,
            None => {
                iterations += 1;
                candidate(origin, min, basis)?
            }
        };

        Ok(Mapping {
            color,
            chroma: min,
            iterations,
            limited_by,
        })
    }
}

impl Mapping {
    fn boundary(color: Srgb) -> Self {
        Self {
            color,
            chroma: 0.0,
            iterations: 0,
            limited_by: Channels::empty(),
        }
    }
}

fn candidate(origin: &Lch, chroma: Component, basis: Basis) -> Result<Srgb, Error> {
    origin.with_chroma(chroma)?.to_srgb(basis)
}

fn rejected_channels(err: &Error) -> Channels {
    match *err {
        Error::OutOfGamut(channels) => channels,
        _ => Channels::empty(),
    }
}

/// Map the polar color `(lightness, chroma, hue)` in the given basis into sRGB
/// with the default [`GamutSearch`].
///
/// ```rust
/// use tristim::{gamut, models::Basis};
/// let white = gamut::resolve(100.0, 50.0, 120.0, Basis::Luv)?;
/// assert_eq!(white.hex(), "#ffffff");
/// # Ok::<(), tristim::Error>(())
/// ```
pub fn resolve(
    lightness: Component,
    chroma: Component,
    hue: Component,
    basis: Basis,
) -> Result<Srgb, Error> {
    GamutSearch::default().resolve(lightness, chroma, hue, basis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_component_eq, assert_model_eq,
        color::Components,
        models::{FromXyz, Luv, ToXyz},
    };

    fn is_displayable(
        lightness: Component,
        chroma: Component,
        hue: Component,
        basis: Basis,
    ) -> bool {
        Lch::new(lightness, chroma, hue)
            .and_then(|lch| lch.to_srgb(basis))
            .is_ok()
    }

    #[test]
    fn step_must_be_positive() {
        assert_eq!(GamutSearch::new(0.0), Err(Error::InvalidStep(0.0)));
        assert_eq!(GamutSearch::new(-1.0e-3), Err(Error::InvalidStep(-1.0e-3)));
        assert!(GamutSearch::new(Component::NAN).is_err());
        assert!(GamutSearch::new(Component::INFINITY).is_err());
        assert_eq!(GamutSearch::new(0.5).unwrap().step(), 0.5);
    }

    #[test]
    fn default_search() {
        let search = GamutSearch::default();
        assert_eq!(search.step(), 1.0e-3);
        assert_eq!(search.strategy(), Strategy::Linear);
    }

    #[test]
    fn lightness_boundaries() {
        for basis in [Basis::Lab, Basis::Luv] {
            assert_eq!(resolve(0.0, 80.0, 200.0, basis), Ok(Srgb::BLACK));
            assert_eq!(resolve(-5.0, 1.0e6, 1000.0, basis), Ok(Srgb::BLACK));
            assert_eq!(resolve(100.0, 80.0, 200.0, basis), Ok(Srgb::WHITE));
            assert_eq!(resolve(150.0, -3.0, -90.0, basis), Ok(Srgb::WHITE));
        }

        let mapping = GamutSearch::default()
            .map(100.0, 50.0, 10.0, Basis::Lab)
            .unwrap();
        assert_eq!(mapping.chroma, 0.0);
        assert_eq!(mapping.iterations, 0);
    }

    #[test]
    fn invalid_hue_is_rejected() {
        assert!(matches!(
            resolve(50.0, 10.0, 400.0, Basis::Luv),
            Err(Error::Domain(_))
        ));
        assert!(matches!(
            resolve(50.0, Component::NAN, 10.0, Basis::Luv),
            Err(Error::Domain(_))
        ));
    }

    #[test]
    fn displayable_chroma_is_kept() {
        let red = Srgb::new(1.0, 0.0, 0.0).unwrap();
        let lch = Lch::from_luv(&Luv::from_xyz(&red.to_xyz().unwrap()).unwrap()).unwrap();

        for strategy in [Strategy::Linear, Strategy::Bisection] {
            let mapping = GamutSearch::default()
                .with_strategy(strategy)
                .map(lch.lightness, lch.chroma, lch.hue, Basis::Luv)
                .unwrap();
            assert_eq!(mapping.chroma, lch.chroma);
            assert_eq!(mapping.iterations, 1);
            assert!(mapping.limited_by.is_empty());
            assert_model_eq!(mapping.color, red, epsilon = 1.0e-6);
        }
    }

    #[test]
    fn linear_descent_stops_at_the_boundary() {
        let search = GamutSearch::default();
        let mapping = search.map(60.0, 100.0, 135.0, Basis::Luv).unwrap();

        assert!(mapping.chroma < 100.0);
        assert_component_eq!(mapping.chroma, 76.999, epsilon = 1.0e-9);
        assert!(!is_displayable(60.0, mapping.chroma + search.step(), 135.0, Basis::Luv));
        assert_eq!(mapping.limited_by, Channels::RED);
        assert_eq!(mapping.iterations, 23_002);
    }

    #[test]
    fn bisection_agrees_with_linear_descent() {
        let linear = GamutSearch::default();
        let bisection = linear.with_strategy(Strategy::Bisection);

        for (lightness, chroma, hue, basis) in [
            (50.0, 180.0, 15.0, Basis::Luv),
            (50.0, 180.0, 15.0, Basis::Lab),
            (60.0, 100.0, 135.0, Basis::Luv),
            (30.0, 60.0, 255.0, Basis::Lab),
        ] {
            let a = linear.map(lightness, chroma, hue, basis).unwrap();
            let b = bisection.map(lightness, chroma, hue, basis).unwrap();

            assert!(b.chroma <= chroma);
            assert_component_eq!(a.chroma, b.chroma, epsilon = linear.step());
            assert!(b.iterations < a.iterations);
            assert!(is_displayable(lightness, b.chroma, hue, basis));
            assert!(!is_displayable(lightness, b.chroma + linear.step(), hue, basis));
        }
    }

    #[test]
    fn limited_by_names_the_clipped_channel() {
        let bisection = GamutSearch::default().with_strategy(Strategy::Bisection);

        let mapping = bisection.map(50.0, 180.0, 15.0, Basis::Luv).unwrap();
        assert_eq!(mapping.limited_by, Channels::BLUE);
        assert_component_eq!(mapping.color.blue, 0.0, epsilon = 1.0e-3);

        let mapping = bisection.map(50.0, 180.0, 15.0, Basis::Lab).unwrap();
        assert_eq!(mapping.limited_by, Channels::GREEN);
    }

    #[test]
    fn iteration_cap_falls_back_to_neutral() {
        for strategy in [Strategy::Linear, Strategy::Bisection] {
            let mapping = GamutSearch::default()
                .with_strategy(strategy)
                .with_max_iterations(1)
                .map(50.0, 180.0, 15.0, Basis::Luv)
                .unwrap();
            assert_eq!(mapping.chroma, 0.0);
            assert_eq!(mapping.iterations, 2);

            let Components(red, green, blue) = mapping.color.to_components();
            assert_component_eq!(red, green, epsilon = 1.0e-6);
            assert_component_eq!(green, blue, epsilon = 1.0e-6);
        }
    }

    #[test]
    fn iteration_cap_applies_to_both_strategies() {
        let capped = GamutSearch::default().with_max_iterations(3);

        let linear = capped.map(50.0, 180.0, 15.0, Basis::Luv).unwrap();
        assert_eq!(linear.chroma, 0.0);
        assert_eq!(linear.iterations, 4);

        // The bisection finds displayable midpoints before its third
        // rejection, but still ends on the neutral axis.
        let bisection = capped
            .with_strategy(Strategy::Bisection)
            .map(50.0, 180.0, 15.0, Basis::Luv)
            .unwrap();
        assert_eq!(bisection.chroma, 0.0);
        assert_eq!(bisection.iterations, 7);
        assert_model_eq!(bisection.color, linear.color, epsilon = 1.0e-12);

        // A cap the search never reaches changes nothing.
        let uncapped = GamutSearch::default().with_strategy(Strategy::Bisection);
        let generous = uncapped.with_max_iterations(1_000);
        assert_eq!(
            generous.map(50.0, 180.0, 15.0, Basis::Luv),
            uncapped.map(50.0, 180.0, 15.0, Basis::Luv)
        );
    }

    #[test]
    fn negative_chroma_is_neutral() {
        let mapping = GamutSearch::default()
            .map(50.0, -20.0, 15.0, Basis::Lab)
            .unwrap();
        assert_eq!(mapping.chroma, 0.0);
        assert_eq!(mapping.iterations, 1);

        let gray = mapping.color;
        assert_component_eq!(gray.red, gray.green, epsilon = 1.0e-6);
        assert_component_eq!(gray.green, gray.blue, epsilon = 1.0e-6);
    }

    #[test]
    fn neutral_axis_next_to_white() {
        for basis in [Basis::Lab, Basis::Luv] {
            let color = resolve(99.9999, 0.0, 0.0, basis).unwrap();
            assert_eq!(color.hex(), "#ffffff");
        }
    }
}
