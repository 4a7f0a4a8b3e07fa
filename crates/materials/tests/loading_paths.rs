//! Load-unload cycles through yield for each hardening law.

use approx::assert_abs_diff_eq;
use yieldpoint_materials::{ElastoPlastic, HardeningLaw, Moduli, SecondaryModulus, State};

/// Total strain history: hold, load elastically, yield, load further, unload.
const STRAIN_PATH: [f64; 6] = [0.0, 0.0, 0.0075, 0.03, 0.05, 0.0];

fn increments() -> Vec<f64> {
    STRAIN_PATH.windows(2).map(|w| w[1] - w[0]).collect()
}

fn run(mut material: ElastoPlastic) -> Vec<(f64, f64, f64, f64, f64)> {
    material
        .update_path(&increments())
        .iter()
        .map(State::as_tuple)
        .collect()
}

fn assert_path(actual: &[(f64, f64, f64, f64, f64)], expected: &[[f64; 5]]) {
    assert_eq!(actual.len(), expected.len());
    for (got, want) in actual.iter().zip(expected) {
        let got = [got.0, got.1, got.2, got.3, got.4];
        for (g, w) in got.iter().zip(want) {
            assert_abs_diff_eq!(*g, *w, epsilon = 1e-9);
        }
    }
}

fn tangent_material(law: HardeningLaw) -> ElastoPlastic {
    ElastoPlastic::new(1000.0, SecondaryModulus::Tangent(100.0), 10.0, law)
        .expect("valid material")
}

#[test]
fn isotropic_hardening() {
    let path = run(tangent_material(HardeningLaw::Isotropic));

    assert_path(
        &path,
        &[
            [0.0, 0.0, 0.0, 10.0, 0.0],
            [7.5, 0.0075, 0.0, 10.0, 0.0],
            [12.0, 0.03, 0.018, 12.0, 0.0],
            [14.0, 0.05, 0.036, 14.0, 0.0],
            [-16.2, 0.0, 0.0558, 16.2, 0.0],
        ],
    );
}

#[test]
fn kinematic_hardening() {
    let path = run(tangent_material("k".parse().expect("known model")));

    assert_path(
        &path,
        &[
            [0.0, 0.0, 0.0, 10.0, 0.0],
            [7.5, 0.0075, 0.0, 10.0, 0.0],
            [12.0, 0.03, 0.018, 10.0, 2.0],
            [14.0, 0.05, 0.036, 10.0, 4.0],
            [-9.0, 0.0, 0.063, 10.0, 1.0],
        ],
    );
}

#[test]
fn mixed_custom_hardening() {
    // Half of the hardening expands the surface, half translates it.
    let mixed = HardeningLaw::custom(|m: &Moduli, s: &mut State, excess: f64| {
        let direction = (s.stress - s.yield_center).signum();
        let dp = excess / (m.elastic + m.plastic);

        s.stress -= direction * m.elastic * dp;
        s.plastic_strain += dp;
        s.yield_strength += m.plastic * dp / 2.0;
        s.yield_center += direction * m.plastic * dp / 2.0;
    });

    let material = tangent_material(mixed);
    assert_eq!(material.model_name(), "Custom");

    assert_path(
        &run(material),
        &[
            [0.0, 0.0, 0.0, 10.0, 0.0],
            [7.5, 0.0075, 0.0, 10.0, 0.0],
            [12.0, 0.03, 0.018, 11.0, 1.0],
            [14.0, 0.05, 0.036, 12.0, 2.0],
            [-12.6, 0.0, 0.0594, 13.3, 0.7],
        ],
    );
}

#[test]
fn plastic_modulus_matches_equivalent_tangent_modulus() {
    let secondary = SecondaryModulus::parse("p", 1000.0 / 9.0).expect("known modulus kind");
    let material = ElastoPlastic::new(1000.0, secondary, 10.0, HardeningLaw::Isotropic)
        .expect("valid material");

    assert_path(
        &run(material),
        &run(tangent_material(HardeningLaw::Isotropic))
            .iter()
            .map(|t| [t.0, t.1, t.2, t.3, t.4])
            .collect::<Vec<_>>(),
    );
}

#[test]
fn unknown_selectors_are_reported() {
    let err = SecondaryModulus::parse("q", 100.0).unwrap_err();
    assert!(err.to_string().contains("modulus"));

    let err = "q".parse::<HardeningLaw>().unwrap_err();
    assert!(err.to_string().contains("model"));
}

#[test]
fn display_names_the_model() {
    let material = tangent_material(HardeningLaw::Isotropic);
    assert!(material.to_string().starts_with("Isotropic Elasto-Plastic Model"));
}
