//! End-to-end root finding through the public solver API.

use approx::assert_relative_eq;
use yieldpoint_solvers::equation::{
    bisection,
    newton::{self, Shape},
};

#[test]
fn bisection_and_newton_agree_on_a_scalar_root() {
    let f = |x: f64| x.powi(5) - x.powi(3) + 2.0;

    let config = bisection::Config::new(100, 1e-10).expect("valid config");
    let bracketed = bisection::solve_fn(f, [-2.0, 0.0], &config).expect("should bracket");

    let newton = newton::solve_fn(|x: &[f64; 1]| [f(x[0])], [2.0], &newton::Config::default())
        .expect("should solve");

    assert!(bracketed.is_converged());
    assert!(newton.is_converged());
    assert_relative_eq!(bracketed.x, newton.x[0], epsilon = 1e-6);
    assert_eq!(newton.iters, 10);
}

#[test]
fn newton_handles_every_shape() {
    let config = newton::Config::default();

    let wide = newton::solve_fn(|x: &[f64; 2]| [x[0] * x[1] - 2.0], [1.0, 1.0], &config)
        .expect("under-determined system");
    assert!(wide.is_converged());

    let tall = newton::solve_fn(
        |x: &[f64; 1]| [x[0] - 3.0, 2.0 * x[0] - 6.0],
        [1.0],
        &config,
    )
    .expect("over-determined system");
    assert!(tall.is_converged());
    assert_relative_eq!(tall.x[0], 3.0, epsilon = 1e-6);

    assert_eq!(Shape::of(2, 1), Shape::UnderDetermined);
    assert_eq!(Shape::of(1, 2), Shape::OverDetermined);
    assert_eq!(Shape::of(3, 3).to_string(), "square");
}

#[test]
fn config_errors_are_distinct() {
    assert_ne!(
        newton::Config::new(50, 0.0, 1e-8).unwrap_err().to_string(),
        newton::Config::new(0, 1e-6, 1e-8).unwrap_err().to_string(),
    );
    assert_ne!(
        bisection::Config::new(50, 0.0).unwrap_err().to_string(),
        bisection::Config::new(0, 1e-3).unwrap_err().to_string(),
    );
}
