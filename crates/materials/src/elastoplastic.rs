//! Rate-independent 1-D plasticity with a pluggable hardening law.
//!
//! Each strain increment `Δε` is applied in two stages:
//!
//! 1. Elastic trial: `ε += Δε`, `σ += E·Δε`.
//! 2. Return: with `excess = |σ − α| − Y`, if `excess > 0` the hardening law
//!    consumes `excess` and brings the state back to the yield surface.
//!
//! Stress is always updated incrementally from the previous state.

mod error;
mod hardening;
mod modulus;
mod state;


use std::fmt;

use tracing::{debug, trace};

pub use error::Error;
pub use hardening::{Hardening, HardeningLaw, isotropic, kinematic, plastic_increment};
pub use modulus::{ModulusKind, Moduli, SecondaryModulus};
pub use state::State;

/// A one-dimensional elastoplastic material.
#[derive(Debug, Clone)]
pub struct ElastoPlastic {
    moduli: Moduli,
    state: State,
    law: HardeningLaw,
}

impl ElastoPlastic {
    /// Creates an unloaded material.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if a modulus or the yield strength
    /// is out of range. See [`Moduli::new`].
    pub fn new(
        elastic_modulus: f64,
        secondary: SecondaryModulus,
        yield_strength: f64,
        law: HardeningLaw,
    ) -> Result<Self, Error> {
        let moduli = Moduli::new(elastic_modulus, secondary)?;
        let yield_strength = state::validate_yield_strength(yield_strength)?;

        Ok(Self {
            moduli,
            state: State::virgin(yield_strength),
            law,
        })
    }

    /// Replaces the initial state, for a material that starts preloaded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if any field is non-finite or the
    /// yield strength is negative.
    pub fn with_state(mut self, state: State) -> Result<Self, Error> {
        self.state = state.validate()?;
        Ok(self)
    }

    /// Applies a strain increment.
    pub fn update_state(&mut self, strain_increment: f64) {
        self.state.strain += strain_increment;
        self.state.stress += self.elastic_stress(strain_increment);

        let excess = self.state.yield_excess();
        if excess > 0.0 {
            self.law.harden(&self.moduli, &mut self.state, excess);
            debug!(
                law = self.law.name(),
                excess,
                stress = self.state.stress,
                plastic_strain = self.state.plastic_strain,
                "material yielded"
            );
        } else {
            trace!(strain_increment, stress = self.state.stress, "elastic step");
        }
    }

    /// Applies each increment in turn and returns the state after each one.
    pub fn update_path(&mut self, strain_increments: &[f64]) -> Vec<State> {
        strain_increments
            .iter()
            .map(|&increment| {
                self.update_state(increment);
                self.state
            })
            .collect()
    }

    /// Stress produced by `strain` under purely elastic response.
    #[must_use]
    pub fn elastic_stress(&self, strain: f64) -> f64 {
        self.moduli.elastic * strain
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns `(stress, strain, plastic_strain, yield_strength, yield_center)`.
    #[must_use]
    pub fn return_state(&self) -> (f64, f64, f64, f64, f64) {
        self.state.as_tuple()
    }

    #[must_use]
    pub fn moduli(&self) -> Moduli {
        self.moduli
    }

    #[must_use]
    pub fn hardening_law(&self) -> &HardeningLaw {
        &self.law
    }

    /// Returns `"Kinematic"`, `"Isotropic"`, or `"Custom"`.
    #[must_use]
    pub fn model_name(&self) -> &'static str {
        self.law.name()
    }
}

impl fmt::Display for ElastoPlastic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Moduli {
            elastic,
            tangent,
            plastic,
        } = self.moduli;
        let State {
            stress,
            strain,
            plastic_strain,
            yield_strength,
            yield_center,
        } = self.state;

        writeln!(f, "{} Elasto-Plastic Model", self.model_name())?;
        writeln!(f, "Elastic Modulus: {elastic:.6}")?;
        writeln!(f, "Tangent Modulus: {tangent:.6}")?;
        writeln!(f, "Plastic Modulus: {plastic:.6}")?;
        writeln!(f, "Current Stress: {stress:.6}")?;
        writeln!(f, "Current Total Strain: {strain:.6}")?;
        writeln!(f, "Current Plastic Strain: {plastic_strain:.6}")?;
        writeln!(f, "Current Yield Strength: {yield_strength:.6}")?;
        write!(f, "Current Yield Center: {yield_center:.6}")
    }
}
