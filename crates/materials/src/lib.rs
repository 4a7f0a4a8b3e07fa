//! One-dimensional elastoplastic material models.
//!
//! An [`ElastoPlastic`] material tracks stress, total strain, plastic strain,
//! yield strength and yield-surface center as it is driven through strain
//! increments. Each increment is applied as an elastic trial followed, when
//! the trial stress lies outside the yield surface, by a return governed by a
//! [`HardeningLaw`].
//!
//! ```
//! use yieldpoint_materials::{ElastoPlastic, HardeningLaw, SecondaryModulus};
//!
//! let mut steel = ElastoPlastic::new(
//!     1000.0,
//!     SecondaryModulus::Tangent(100.0),
//!     10.0,
//!     HardeningLaw::Isotropic,
//! )?;
//!
//! steel.update_state(0.03);
//! let (stress, strain, plastic_strain, yield_strength, _) = steel.return_state();
//!
//! assert!((stress - 12.0).abs() < 1e-9);
//! assert!((strain - 0.03).abs() < 1e-12);
//! assert!((plastic_strain - 0.018).abs() < 1e-9);
//! assert!((yield_strength - 12.0).abs() < 1e-9);
//! # Ok::<(), yieldpoint_materials::Error>(())
//! ```

pub mod elastoplastic;

pub use elastoplastic::{
    ElastoPlastic, Error, Hardening, HardeningLaw, ModulusKind, Moduli, SecondaryModulus, State,
};
