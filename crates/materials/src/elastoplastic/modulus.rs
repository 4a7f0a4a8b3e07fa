use std::str::FromStr;

use super::Error;

/// Which modulus governs the plastic branch of the stress-strain curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModulusKind {
    /// Slope of the total stress-strain curve past yield, `Et`.
    Tangent,
    /// Slope of the stress versus plastic strain curve, `H`.
    Plastic,
}

impl FromStr for ModulusKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t" | "T" | "tangent" | "Tangent" => Ok(Self::Tangent),
            "p" | "P" | "plastic" | "Plastic" => Ok(Self::Plastic),
            other => Err(Error::UnknownModulusKind(other.to_owned())),
        }
    }
}

/// The secondary modulus supplied alongside the elastic modulus.
///
/// Either one determines the other through
///
/// ```text
/// H  = E·Et / (E − Et)
/// Et = E·H  / (E + H)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecondaryModulus {
    Tangent(f64),
    Plastic(f64),
}

impl SecondaryModulus {
    /// Builds a secondary modulus from a kind selector and a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownModulusKind`] if `kind` is not a recognized
    /// selector.
    pub fn parse(kind: &str, value: f64) -> Result<Self, Error> {
        Ok(match kind.parse()? {
            ModulusKind::Tangent => Self::Tangent(value),
            ModulusKind::Plastic => Self::Plastic(value),
        })
    }

    #[must_use]
    pub fn kind(&self) -> ModulusKind {
        match self {
            Self::Tangent(_) => ModulusKind::Tangent,
            Self::Plastic(_) => ModulusKind::Plastic,
        }
    }
}

/// Elastic, tangent and plastic moduli of a material.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moduli {
    /// Elastic modulus `E`.
    pub elastic: f64,
    /// Tangent modulus `Et`.
    pub tangent: f64,
    /// Plastic modulus `H`.
    pub plastic: f64,
}

impl Moduli {
    /// Completes the moduli from `E` and a secondary modulus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `E` is not finite and positive,
    /// if a tangent modulus is outside `[0, E)`, or if a plastic modulus is
    /// negative or non-finite.
    pub fn new(elastic: f64, secondary: SecondaryModulus) -> Result<Self, Error> {
        if !elastic.is_finite() || elastic <= 0.0 {
            return Err(Error::invalid(
                "elastic modulus",
                elastic,
                "must be finite and positive",
            ));
        }

        match secondary {
            SecondaryModulus::Tangent(tangent) => {
                if !tangent.is_finite() || tangent < 0.0 || tangent >= elastic {
                    return Err(Error::invalid(
                        "tangent modulus",
                        tangent,
                        "must be non-negative and less than the elastic modulus",
                    ));
                }
                Ok(Self {
                    elastic,
                    tangent,
                    plastic: elastic * tangent / (elastic - tangent),
                })
            }
            SecondaryModulus::Plastic(plastic) => {
                if !plastic.is_finite() || plastic < 0.0 {
                    return Err(Error::invalid(
                        "plastic modulus",
                        plastic,
                        "must be finite and non-negative",
                    ));
                }
                Ok(Self {
                    elastic,
                    tangent: elastic * plastic / (elastic + plastic),
                    plastic,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parses_all_selectors() {
        for s in ["t", "T", "tangent", "Tangent"] {
            assert_eq!(s.parse::<ModulusKind>(), Ok(ModulusKind::Tangent));
        }
        for s in ["p", "P", "plastic", "Plastic"] {
            assert_eq!(s.parse::<ModulusKind>(), Ok(ModulusKind::Plastic));
        }
    }

    #[test]
    fn unknown_selector_mentions_modulus() {
        let err = SecondaryModulus::parse("q", 100.0).unwrap_err();
        assert_eq!(err, Error::UnknownModulusKind("q".into()));
        assert!(err.to_string().contains("modulus"));
    }

    #[test]
    fn tangent_and_plastic_are_consistent() {
        let from_tangent = Moduli::new(1000.0, SecondaryModulus::Tangent(100.0)).unwrap();
        assert_relative_eq!(from_tangent.plastic, 1000.0 / 9.0, max_relative = 1e-12);

        let from_plastic = Moduli::new(1000.0, SecondaryModulus::Plastic(1000.0 / 9.0)).unwrap();
        assert_relative_eq!(from_plastic.tangent, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn perfectly_plastic_has_zero_moduli() {
        let moduli = Moduli::new(200.0, SecondaryModulus::Tangent(0.0)).unwrap();
        assert_relative_eq!(moduli.plastic, 0.0);

        let moduli = Moduli::new(200.0, SecondaryModulus::Plastic(0.0)).unwrap();
        assert_relative_eq!(moduli.tangent, 0.0);
    }

    #[test]
    fn rejects_out_of_range_moduli() {
        let cases = [
            (0.0, SecondaryModulus::Tangent(1.0), "elastic modulus"),
            (f64::NAN, SecondaryModulus::Plastic(1.0), "elastic modulus"),
            (100.0, SecondaryModulus::Tangent(100.0), "tangent modulus"),
            (100.0, SecondaryModulus::Tangent(-1.0), "tangent modulus"),
            (100.0, SecondaryModulus::Plastic(-1.0), "plastic modulus"),
            (100.0, SecondaryModulus::Plastic(f64::INFINITY), "plastic modulus"),
        ];

        for (elastic, secondary, expected) in cases {
            let Err(Error::InvalidParameter { name, .. }) = Moduli::new(elastic, secondary) else {
                panic!("expected an invalid {expected}");
            };
            assert_eq!(name, expected);
        }
    }
}
