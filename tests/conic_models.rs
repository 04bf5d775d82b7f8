//! End-to-end properties of the ellipse and circle estimators.

use approx::assert_relative_eq;
use curvefit::{CircleRegression, EllipseRegression, Error};
use std::f64::consts::PI;

/// Sample an ellipse with semi-axes `a`, `b`, rotated by `theta`,
/// centered at `(cx, cy)`.
fn ellipse_samples(
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    theta: f64,
    count: usize,
) -> (Vec<f64>, Vec<f64>) {
    let (sin, cos) = theta.sin_cos();
    let mut xs = Vec::with_capacity(count);
    let mut ys = Vec::with_capacity(count);
    for i in 0..count {
        let phi = 2.0 * PI * i as f64 / count as f64;
        xs.push(cx + a * cos * phi.cos() - b * sin * phi.sin());
        ys.push(cy + a * sin * phi.cos() + b * cos * phi.sin());
    }
    (xs, ys)
}

#[test]
fn ellipse_recovers_an_axis_aligned_shape() {
    // x²/4 + y² = 1: semi-axes 2 and 1.
    let (xs, ys) = ellipse_samples(0.0, 0.0, 2.0, 1.0, 0.0, 32);
    let ellipse = EllipseRegression::new(ys, xs).unwrap();

    let (cx, cy) = ellipse.center();
    assert_relative_eq!(cx, 0.0, epsilon = 1e-6);
    assert_relative_eq!(cy, 0.0, epsilon = 1e-6);
    assert_relative_eq!(ellipse.axis_major().length(), 4.0, epsilon = 1e-6);
    assert_relative_eq!(ellipse.axis_minor().length(), 2.0, epsilon = 1e-6);
    assert_relative_eq!(ellipse.area(), 2.0 * PI, epsilon = 1e-6);
    assert_relative_eq!(ellipse.eccentricity(), 3.0f64.sqrt() / 2.0, epsilon = 1e-6);
}

#[test]
fn ellipse_domain_and_codomain_are_sorted_extents() {
    let (xs, ys) = ellipse_samples(0.0, 0.0, 2.0, 1.0, 0.0, 32);
    let ellipse = EllipseRegression::new(ys, xs).unwrap();

    let (left, right) = ellipse.domain().unwrap();
    assert_relative_eq!(left, -2.0, epsilon = 1e-6);
    assert_relative_eq!(right, 2.0, epsilon = 1e-6);

    let (bottom, top) = ellipse.codomain().unwrap();
    assert_relative_eq!(bottom, -1.0, epsilon = 1e-6);
    assert_relative_eq!(top, 1.0, epsilon = 1e-6);
}

#[test]
fn ellipse_foci_lie_on_the_major_axis() {
    let (xs, ys) = ellipse_samples(0.0, 0.0, 2.0, 1.0, 0.0, 32);
    let ellipse = EllipseRegression::new(ys, xs).unwrap();

    let ((f0x, f0y), (f1x, f1y)) = ellipse.foci();
    let c = 3.0f64.sqrt();
    assert_relative_eq!(f0x.min(f1x), -c, epsilon = 1e-6);
    assert_relative_eq!(f0x.max(f1x), c, epsilon = 1e-6);
    assert_relative_eq!(f0y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(f1y, 0.0, epsilon = 1e-6);
}

#[test]
fn ellipse_recovers_a_rotated_shifted_shape() {
    let (xs, ys) = ellipse_samples(3.0, -2.0, 5.0, 2.0, 0.5, 48);
    let ellipse = EllipseRegression::new(ys, xs).unwrap();

    let (cx, cy) = ellipse.center();
    assert_relative_eq!(cx, 3.0, epsilon = 1e-6);
    assert_relative_eq!(cy, -2.0, epsilon = 1e-6);
    assert_relative_eq!(ellipse.axis_major().length(), 10.0, epsilon = 1e-6);
    assert_relative_eq!(ellipse.axis_minor().length(), 4.0, epsilon = 1e-6);
    assert_relative_eq!(ellipse.axis_major().angle(), 0.5, epsilon = 1e-6);
    assert_relative_eq!(ellipse.area(), 10.0 * PI, epsilon = 1e-5);
}

#[test]
fn ellipse_perimeter_matches_the_circle_closed_form() {
    // A circle is an ellipse with h = 0: the series must collapse to 2πr.
    let (xs, ys) = ellipse_samples(0.0, 0.0, 3.0, 3.0, 0.0, 32);
    let ellipse = EllipseRegression::new(ys, xs).unwrap();
    assert_relative_eq!(ellipse.perimeter(), 6.0 * PI, epsilon = 1e-6);
}

#[test]
fn ellipse_inverse_lookups_return_both_branches() {
    let (xs, ys) = ellipse_samples(0.0, 0.0, 2.0, 1.0, 0.0, 32);
    let ellipse = EllipseRegression::new(ys, xs).unwrap();

    let at_zero = ellipse.predict_y(0.0).unwrap();
    assert_eq!(at_zero.columns(), ["Y0", "Y1"]);
    assert_relative_eq!(at_zero.get(0, 0).max(at_zero.get(0, 1)), 1.0, epsilon = 1e-6);
    assert_relative_eq!(at_zero.get(0, 0).min(at_zero.get(0, 1)), -1.0, epsilon = 1e-6);

    let at_zero_y = ellipse.predict_x(0.0).unwrap();
    assert_eq!(at_zero_y.columns(), ["X0", "X1"]);
    assert_relative_eq!(
        at_zero_y.get(0, 0).max(at_zero_y.get(0, 1)),
        2.0,
        epsilon = 1e-6
    );
}

#[test]
fn ellipse_out_of_domain_rows_become_nan_pairs() {
    let (xs, ys) = ellipse_samples(0.0, 0.0, 2.0, 1.0, 0.0, 32);
    let ellipse = EllipseRegression::new(ys, xs).unwrap();

    // One row inside the extent, one outside: the batch still succeeds.
    let mixed = ellipse.predict_y(vec![0.0, 5.0]).unwrap();
    assert!(mixed.get(0, 0).is_finite());
    assert!(mixed.get(1, 0).is_nan());
    assert!(mixed.get(1, 1).is_nan());
}

#[test]
fn ellipse_containment_rule() {
    let (xs, ys) = ellipse_samples(0.0, 0.0, 2.0, 1.0, 0.0, 32);
    let ellipse = EllipseRegression::new(ys, xs).unwrap();

    assert!(ellipse.is_inside(0.0, 0.0));
    assert!(ellipse.is_inside(1.9, 0.0));
    assert!(!ellipse.is_inside(2.5, 0.0));
    assert!(!ellipse.is_inside(0.0, 1.5));
    // The upper boundary is included, the lower one is not. Probe with
    // the model's own roots so fit noise cannot flip the comparison.
    let roots = ellipse.predict_y(0.0).unwrap();
    let (top, bottom) = (
        roots.get(0, 0).max(roots.get(0, 1)),
        roots.get(0, 0).min(roots.get(0, 1)),
    );
    assert!(ellipse.is_inside(0.0, top));
    assert!(!ellipse.is_inside(0.0, bottom));
}

#[test]
fn ellipse_crossings_with_an_arbitrary_line() {
    let (xs, ys) = ellipse_samples(0.0, 0.0, 2.0, 1.0, 0.0, 32);
    let ellipse = EllipseRegression::new(ys, xs).unwrap();

    // y = 0 crosses at (±2, 0).
    let ((x0, y0), (x1, y1)) = ellipse.crossings(0.0, 0.0).unwrap();
    assert_relative_eq!(x0.max(x1), 2.0, epsilon = 1e-6);
    assert_relative_eq!(x0.min(x1), -2.0, epsilon = 1e-6);
    assert_relative_eq!(y0, 0.0, epsilon = 1e-6);
    assert_relative_eq!(y1, 0.0, epsilon = 1e-6);

    // y = 2 misses entirely.
    assert!(ellipse.crossings(0.0, 2.0).is_err());
}

#[test]
fn ellipse_rejects_collinear_samples() {
    let xs = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let ys = xs.clone();
    let err = EllipseRegression::new(ys, xs).unwrap_err();
    assert!(matches!(err, Error::DegenerateConic(_)));
}

#[test]
fn ellipse_rejects_multidimensional_input() {
    let xs = vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]];
    let ys = vec![0.0, 1.0, 2.0];
    let err = EllipseRegression::new(ys, xs).unwrap_err();
    assert_eq!(err, Error::NotUnidimensional { name: "x", got: 2 });
}

#[test]
fn ellipse_rejects_mismatched_row_counts() {
    let err = EllipseRegression::new(vec![0.0, 1.0], vec![0.0, 1.0, 2.0]).unwrap_err();
    assert_eq!(err, Error::RowCountMismatch { x_rows: 3, y_rows: 2 });
}

#[test]
fn circle_recovers_center_and_radius() {
    // (x−1)² + (y−2)² = 9 sampled at 8 angles.
    let (xs, ys) = ellipse_samples(1.0, 2.0, 3.0, 3.0, 0.0, 8);
    let circle = CircleRegression::new(ys, xs).unwrap();

    let (cx, cy) = circle.center();
    assert_relative_eq!(cx, 1.0, epsilon = 1e-9);
    assert_relative_eq!(cy, 2.0, epsilon = 1e-9);
    assert_relative_eq!(circle.radius(), 3.0, epsilon = 1e-9);
    assert_relative_eq!(circle.area(), 9.0 * PI, epsilon = 1e-9);
    assert_relative_eq!(circle.perimeter(), 6.0 * PI, epsilon = 1e-9);
}

#[test]
fn circle_extents() {
    let (xs, ys) = ellipse_samples(1.0, 2.0, 3.0, 3.0, 0.0, 8);
    let circle = CircleRegression::new(ys, xs).unwrap();

    let (left, right) = circle.domain();
    assert_relative_eq!(left, -2.0, epsilon = 1e-9);
    assert_relative_eq!(right, 4.0, epsilon = 1e-9);

    let (bottom, top) = circle.codomain();
    assert_relative_eq!(bottom, -1.0, epsilon = 1e-9);
    assert_relative_eq!(top, 5.0, epsilon = 1e-9);
}

#[test]
fn circle_inverse_lookups_and_sentinels() {
    let (xs, ys) = ellipse_samples(1.0, 2.0, 3.0, 3.0, 0.0, 8);
    let circle = CircleRegression::new(ys, xs).unwrap();

    let at_center = circle.predict_y(1.0).unwrap();
    assert_relative_eq!(
        at_center.get(0, 0).max(at_center.get(0, 1)),
        5.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        at_center.get(0, 0).min(at_center.get(0, 1)),
        -1.0,
        epsilon = 1e-9
    );

    let miss = circle.predict_y(10.0).unwrap();
    assert!(miss.get(0, 0).is_nan());
    assert!(miss.get(0, 1).is_nan());

    let sideways = circle.predict_x(2.0).unwrap();
    assert_relative_eq!(
        sideways.get(0, 0).max(sideways.get(0, 1)),
        4.0,
        epsilon = 1e-9
    );
}

#[test]
fn circle_containment_rule() {
    let (xs, ys) = ellipse_samples(1.0, 2.0, 3.0, 3.0, 0.0, 8);
    let circle = CircleRegression::new(ys, xs).unwrap();

    assert!(circle.is_inside(1.0, 2.0));
    assert!(!circle.is_inside(5.0, 2.0));

    // Inclusive above, exclusive below, probed with the model's own roots.
    let roots = circle.predict_y(1.0).unwrap();
    let (top, bottom) = (
        roots.get(0, 0).max(roots.get(0, 1)),
        roots.get(0, 0).min(roots.get(0, 1)),
    );
    assert!(circle.is_inside(1.0, top));
    assert!(!circle.is_inside(1.0, bottom));
}

#[test]
fn circle_rejects_multidimensional_input() {
    let ys = vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]];
    let xs = vec![0.0, 1.0, 2.0];
    let err = CircleRegression::new(ys, xs).unwrap_err();
    assert_eq!(err, Error::NotUnidimensional { name: "y", got: 2 });
}

#[test]
fn conic_predictions_are_bit_identical_across_calls() {
    let (xs, ys) = ellipse_samples(0.0, 0.0, 2.0, 1.0, 0.0, 32);
    let ellipse = EllipseRegression::new(ys, xs).unwrap();

    let first = ellipse.predict_y(vec![0.0, 1.0, 1.5]).unwrap();
    let second = ellipse.predict_y(vec![0.0, 1.0, 1.5]).unwrap();
    for row in 0..first.nrows() {
        for column in 0..2 {
            assert_eq!(
                first.get(row, column).to_bits(),
                second.get(row, column).to_bits()
            );
        }
    }
}
