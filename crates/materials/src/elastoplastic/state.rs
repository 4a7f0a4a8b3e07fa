use super::Error;

/// Mutable state of a one-dimensional elastoplastic material.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    /// Current stress.
    pub stress: f64,
    /// Current total strain.
    pub strain: f64,
    /// Accumulated plastic strain.
    pub plastic_strain: f64,
    /// Current yield strength (radius of the elastic range).
    pub yield_strength: f64,
    /// Current yield-surface center (back stress).
    pub yield_center: f64,
}

impl State {
    /// Returns an unloaded state with the given yield strength.
    #[must_use]
    pub fn virgin(yield_strength: f64) -> Self {
        Self {
            yield_strength,
            ..Self::default()
        }
    }

    /// Returns `(stress, strain, plastic_strain, yield_strength, yield_center)`.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.stress,
            self.strain,
            self.plastic_strain,
            self.yield_strength,
            self.yield_center,
        )
    }

    /// Amount by which the stress lies outside the yield surface.
    ///
    /// Positive values mean the material is yielding.
    #[must_use]
    pub fn yield_excess(&self) -> f64 {
        (self.stress - self.yield_center).abs() - self.yield_strength
    }

    pub(super) fn validate(self) -> Result<Self, Error> {
        let fields = [
            ("stress", self.stress),
            ("strain", self.strain),
            ("plastic strain", self.plastic_strain),
            ("yield center", self.yield_center),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::invalid(name, value, "must be finite"));
            }
        }
        validate_yield_strength(self.yield_strength)?;
        Ok(self)
    }
}

pub(super) fn validate_yield_strength(value: f64) -> Result<f64, Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid(
            "yield strength",
            value,
            "must be finite and non-negative",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn virgin_state_is_unloaded() {
        let state = State::virgin(10.0);
        assert_eq!(state.as_tuple(), (0.0, 0.0, 0.0, 10.0, 0.0));
        assert_relative_eq!(state.yield_excess(), -10.0);
    }

    #[test]
    fn yield_excess_is_measured_from_center() {
        let state = State {
            stress: -3.0,
            yield_center: 4.0,
            yield_strength: 5.0,
            ..State::default()
        };
        assert_relative_eq!(state.yield_excess(), 2.0);
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let nan_stress = State {
            stress: f64::NAN,
            ..State::virgin(1.0)
        };
        assert!(matches!(
            nan_stress.validate(),
            Err(Error::InvalidParameter { name: "stress", .. })
        ));

        assert!(matches!(
            State::virgin(-1.0).validate(),
            Err(Error::InvalidParameter {
                name: "yield strength",
                ..
            })
        ));
    }
}
