use std::{fmt, str::FromStr, sync::Arc};

use super::{Error, Moduli, State};

/// A rule that returns a yielding state to the yield surface.
///
/// `excess` is the positive distance of the trial stress outside the yield
/// surface. Implementations update `state` in place.
///
/// Closures with the signature `Fn(&Moduli, &mut State, f64)` implement this
/// trait.
pub trait Hardening {
    fn harden(&self, moduli: &Moduli, state: &mut State, excess: f64);
}

impl<F> Hardening for F
where
    F: Fn(&Moduli, &mut State, f64),
{
    fn harden(&self, moduli: &Moduli, state: &mut State, excess: f64) {
        self(moduli, state, excess);
    }
}

/// The hardening law applied when a material yields.
#[derive(Clone)]
pub enum HardeningLaw {
    /// Translates the yield surface; the yield strength is unchanged.
    Kinematic,
    /// Expands the yield surface about a fixed center.
    Isotropic,
    /// A user-supplied rule.
    Custom(Arc<dyn Hardening + Send + Sync>),
}

impl HardeningLaw {
    /// Wraps a user-supplied hardening rule.
    ///
    /// ```
    /// use yieldpoint_materials::{HardeningLaw, Moduli, State};
    ///
    /// let perfectly_plastic = HardeningLaw::custom(|m: &Moduli, s: &mut State, excess: f64| {
    ///     let dp = excess / m.elastic;
    ///     s.stress -= (s.stress - s.yield_center).signum() * m.elastic * dp;
    ///     s.plastic_strain += dp;
    /// });
    /// assert_eq!(perfectly_plastic.name(), "Custom");
    /// ```
    pub fn custom<H>(rule: H) -> Self
    where
        H: Hardening + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(rule))
    }

    /// Returns the display name of the law.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kinematic => "Kinematic",
            Self::Isotropic => "Isotropic",
            Self::Custom(_) => "Custom",
        }
    }
}

impl Hardening for HardeningLaw {
    fn harden(&self, moduli: &Moduli, state: &mut State, excess: f64) {
        match self {
            Self::Kinematic => kinematic(moduli, state, excess),
            Self::Isotropic => isotropic(moduli, state, excess),
            Self::Custom(rule) => rule.harden(moduli, state, excess),
        }
    }
}

impl fmt::Debug for HardeningLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HardeningLaw {
    type Err = Error;

    /// Parses a built-in law. Custom laws are built with [`HardeningLaw::custom`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "k" | "K" | "kinematic" | "Kinematic" => Ok(Self::Kinematic),
            "i" | "I" | "isotropic" | "Isotropic" => Ok(Self::Isotropic),
            other => Err(Error::UnknownHardeningModel(other.to_owned())),
        }
    }
}

/// Plastic strain increment that consumes `excess`: `dp = excess / (E + H)`.
#[must_use]
pub fn plastic_increment(moduli: &Moduli, excess: f64) -> f64 {
    excess / (moduli.elastic + moduli.plastic)
}

/// Kinematic hardening: the yield center follows the stress.
pub fn kinematic(moduli: &Moduli, state: &mut State, excess: f64) {
    let direction = sign(state.stress - state.yield_center);
    let dp = plastic_increment(moduli, excess);

    state.stress -= direction * moduli.elastic * dp;
    state.plastic_strain += dp;
    state.yield_center += direction * moduli.plastic * dp;
}

/// Isotropic hardening: the yield strength grows with plastic strain.
pub fn isotropic(moduli: &Moduli, state: &mut State, excess: f64) {
    let dp = plastic_increment(moduli, excess);

    state.stress -= sign(state.stress) * moduli.elastic * dp;
    state.plastic_strain += dp;
    state.yield_strength += moduli.plastic * dp;
}

// Unlike `f64::signum`, zero maps to zero.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
