//! Conic least-squares fits (ellipse, circle) and their geometric queries.
//!
//! # Info on implementation
//!
//! The ellipse estimator is the numerically stable direct least-squares fit
//! of Halir & Flusser: the design matrix is split into a quadratic part
//! `[x², xy, y²]` and a linear part `[x, y, 1]`, the scatter matrices are
//! reduced against the ellipse constraint matrix, and the conic
//! coefficients come from the one eigenvector of the reduced 3×3 system
//! whose discriminant `4·e0·e2 − e1²` is positive.
//!
//! The reduced system is not symmetric, so its eigenvalues are computed
//! from the characteristic cubic and each eigenvector is recovered as a
//! null vector of the shifted matrix (largest adjugate row). Construction
//! fails hard on any algebraic dead end; per-point inverse queries instead
//! report NaN sentinel pairs for coordinates outside the shape.
//!
//! The circle estimator is the classic linearised fit: solving
//! `a·x + b·y + c = x² + y²` in the least-squares sense gives the center
//! `(a/2, b/2)` and radius `√(4c + a² + b²)/2` in closed form.

use std::fmt::{self, Display};

use nalgebra::{DMatrix, Matrix3, Vector3};

use crate::error::{Error, Result};
use crate::regression::{least_squares, simplify_pair, Coefficients};
use crate::table::{IntoTable, Table};

/// Real roots of `a·x² + b·x + c = 0`, in the order
/// `((−b + √disc)/2a, (−b − √disc)/2a)`.
///
/// A zero discriminant yields two identical roots. A negative discriminant
/// or a zero leading coefficient is a hard failure; callers that want a
/// sentinel instead (per-point lookups) match on the error themselves.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<(f64, f64)> {
    if a == 0.0 {
        return Err(Error::DegenerateQuadratic);
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Err(Error::NoRealRoots { discriminant });
    }
    let scale = (2.0 * a).recip();
    let vertex = -b * scale;
    let offset = discriminant.sqrt() * scale;
    Ok((vertex + offset, vertex - offset))
}

/// One axis of a fitted ellipse: the segment between its two crossings
/// with the conic. Computed once during the fit, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    vertices: ((f64, f64), (f64, f64)),
}

impl Axis {
    fn new(first: (f64, f64), second: (f64, f64)) -> Self {
        Self {
            vertices: (first, second),
        }
    }

    /// The two end points of the axis.
    pub fn vertices(&self) -> ((f64, f64), (f64, f64)) {
        self.vertices
    }

    /// Euclidean distance between the two vertices (the full axis length,
    /// twice the semi-axis).
    pub fn length(&self) -> f64 {
        let ((x0, y0), (x1, y1)) = self.vertices;
        ((x0 - x1).powi(2) + (y0 - y1).powi(2)).sqrt()
    }

    /// Angle of the axis in radians, in `(−π/2, π/2]`.
    pub fn angle(&self) -> f64 {
        let ((x0, y0), (x1, y1)) = self.vertices;
        ((y1 - y0) / (x1 - x0)).atan()
    }
}

/// Normalise a conic `(y, x)` pair down to two coordinate vectors.
fn coordinate_pair(y: impl IntoTable, x: impl IntoTable) -> Result<(Vec<f64>, Vec<f64>)> {
    let (y, x) = simplify_pair(y, x)?;
    if x.ncols() != 1 {
        return Err(Error::NotUnidimensional {
            name: "x",
            got: x.ncols(),
        });
    }
    if y.ncols() != 1 {
        return Err(Error::NotUnidimensional {
            name: "y",
            got: y.ncols(),
        });
    }
    Ok((y.column(0), x.column(0)))
}

/// Check that a query table is a single column.
fn single_column(table: &Table, name: &'static str) -> Result<()> {
    if table.ncols() != 1 {
        return Err(Error::NotUnidimensional {
            name,
            got: table.ncols(),
        });
    }
    Ok(())
}

/// Real roots of the depressed characteristic cubic
/// `x³ + b·x² + c·x + d = 0` (leading coefficient already 1).
fn cubic_real_roots(b: f64, c: f64, d: f64) -> Vec<f64> {
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;
    let shift = -b / 3.0;

    let discriminant = -4.0 * p * p * p - 27.0 * q * q;
    if discriminant >= 0.0 {
        // Three real roots via the trigonometric branch.
        let radius = (-p / 3.0).sqrt();
        let argument = if radius.abs() < 1e-15 {
            0.0
        } else {
            (-q / (2.0 * radius * radius * radius)).clamp(-1.0, 1.0)
        };
        let theta = argument.acos();
        let scale = 2.0 * radius;
        (0..3)
            .map(|k| scale * ((theta + 2.0 * std::f64::consts::PI * k as f64) / 3.0).cos() + shift)
            .collect()
    } else {
        // One real root via Cardano.
        let root = (q * q / 4.0 + p * p * p / 27.0).sqrt();
        vec![(-q / 2.0 + root).cbrt() + (-q / 2.0 - root).cbrt() + shift]
    }
}

/// Null vector of a (near-)singular 3×3 matrix: the adjugate row with the
/// largest norm, normalised. Each adjugate row of a rank-2 matrix is
/// proportional to the null vector.
fn null_vector(m: &Matrix3<f64>) -> Option<Vector3<f64>> {
    let rows = [
        Vector3::new(
            m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)],
            -(m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)]),
            m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)],
        ),
        Vector3::new(
            -(m[(0, 1)] * m[(2, 2)] - m[(0, 2)] * m[(2, 1)]),
            m[(0, 0)] * m[(2, 2)] - m[(0, 2)] * m[(2, 0)],
            -(m[(0, 0)] * m[(2, 1)] - m[(0, 1)] * m[(2, 0)]),
        ),
        Vector3::new(
            m[(0, 1)] * m[(1, 2)] - m[(0, 2)] * m[(1, 1)],
            -(m[(0, 0)] * m[(1, 2)] - m[(0, 2)] * m[(1, 0)]),
            m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        ),
    ];

    let mut best = &rows[0];
    let mut best_norm = best.norm_squared();
    for row in &rows[1..] {
        let norm = row.norm_squared();
        if norm > best_norm {
            best = row;
            best_norm = norm;
        }
    }
    if best_norm < 1e-30 {
        return None;
    }
    Some(best / best_norm.sqrt())
}

/// Eigen-decompose the reduced Halir-Flusser system and return the one
/// eigenvector whose conic discriminant `4·v0·v2 − v1²` is positive.
///
/// Zero or several qualifying eigenvectors mean the sample does not
/// determine an ellipse. Numerically coincident eigenvalues are merged
/// first so a repeated root is not counted twice.
fn ellipse_eigenvector(m: &Matrix3<f64>) -> Result<Vector3<f64>> {
    let trace = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];
    let minor_sum = m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)] + m[(0, 0)] * m[(2, 2)]
        - m[(0, 2)] * m[(2, 0)]
        + m[(1, 1)] * m[(2, 2)]
        - m[(1, 2)] * m[(2, 1)];
    let det = m.determinant();

    // Characteristic polynomial: λ³ − tr·λ² + minors·λ − det.
    let mut eigenvalues = cubic_real_roots(-trace, minor_sum, -det);
    eigenvalues.sort_by(f64::total_cmp);
    eigenvalues.dedup_by(|a, b| (*a - *b).abs() <= 1e-9 * (1.0 + b.abs()));

    let mut selected = None;
    let mut matches = 0usize;
    for &eigenvalue in &eigenvalues {
        let shifted = m - Matrix3::identity() * eigenvalue;
        let Some(vector) = null_vector(&shifted) else {
            continue;
        };
        if 4.0 * vector[0] * vector[2] - vector[1] * vector[1] > 0.0 {
            matches += 1;
            selected = Some(vector);
        }
    }

    match (selected, matches) {
        (Some(vector), 1) => Ok(vector),
        (_, 0) => Err(Error::DegenerateConic(
            "no eigenvector satisfies the ellipse constraint".into(),
        )),
        (_, n) => Err(Error::DegenerateConic(format!(
            "{n} eigenvectors satisfy the ellipse constraint"
        ))),
    }
}

/// Halir-Flusser direct fit: sample coordinates in, six conic
/// coefficients `(a, b, c, d, e, f)` out.
fn fit_conic(xs: &[f64], ys: &[f64]) -> Result<[f64; 6]> {
    let n = xs.len();
    let quadratic = DMatrix::from_fn(n, 3, |row, column| match column {
        0 => xs[row] * xs[row],
        1 => xs[row] * ys[row],
        _ => ys[row] * ys[row],
    });
    let linear = DMatrix::from_fn(n, 3, |row, column| match column {
        0 => xs[row],
        1 => ys[row],
        _ => 1.0,
    });

    let s1: Matrix3<f64> = (quadratic.transpose() * &quadratic)
        .fixed_view::<3, 3>(0, 0)
        .into_owned();
    let s2: Matrix3<f64> = (quadratic.transpose() * &linear)
        .fixed_view::<3, 3>(0, 0)
        .into_owned();
    let s3: Matrix3<f64> = (linear.transpose() * &linear)
        .fixed_view::<3, 3>(0, 0)
        .into_owned();

    let s3_inv = s3.try_inverse().ok_or_else(|| {
        Error::DegenerateConic("the linear scatter matrix is singular".into())
    })?;
    let reduction = -s3_inv * s2.transpose();

    // Inverse of the constraint matrix [[0,0,2],[0,-1,0],[2,0,0]].
    let constraint_inv = Matrix3::new(0.0, 0.0, 0.5, 0.0, -1.0, 0.0, 0.5, 0.0, 0.0);
    let reduced = constraint_inv * (s1 + s2 * reduction);

    let quadratic_part = ellipse_eigenvector(&reduced)?;
    let linear_part = reduction * quadratic_part;

    Ok([
        quadratic_part[0],
        quadratic_part[1],
        quadratic_part[2],
        linear_part[0],
        linear_part[1],
        linear_part[2],
    ])
}

/// Center of the conic `a·x² + b·xy + c·y² + d·x + e·y + f = 0`.
fn conic_center(coefficients: &[f64; 6]) -> Result<(f64, f64)> {
    let [a, b, c, d, e, _] = *coefficients;
    let denominator = b * b - 4.0 * a * c;
    if denominator == 0.0 {
        return Err(Error::DegenerateConic(
            "the quadratic part has a zero discriminant".into(),
        ));
    }
    Ok((
        (2.0 * c * d - b * e) / denominator,
        (2.0 * a * e - b * d) / denominator,
    ))
}

/// Crossing points between the line `y = slope·x + intercept` and the
/// conic. Hard failure when they do not intersect; only used on
/// construction-time necessities, where a miss means the fit is invalid.
fn line_crossings(
    coefficients: &[f64; 6],
    slope: f64,
    intercept: f64,
) -> Result<((f64, f64), (f64, f64))> {
    let [a, b, c, d, e, f] = *coefficients;
    let qa = a + b * slope + c * slope * slope;
    let qb = b * intercept + 2.0 * slope * intercept * c + d + e * slope;
    let qc = c * intercept * intercept + e * intercept + f;
    let (x0, x1) = solve_quadratic(qa, qb, qc)?;
    Ok(((x0, x0 * slope + intercept), (x1, x1 * slope + intercept)))
}

/// Crossing points between the vertical line `x = at` and the conic.
fn vertical_crossings(coefficients: &[f64; 6], at: f64) -> Result<((f64, f64), (f64, f64))> {
    let [a, b, c, d, e, f] = *coefficients;
    let (y0, y1) = solve_quadratic(c, b * at + e, a * at * at + d * at + f)?;
    Ok(((at, y0), (at, y1)))
}

/// The two `y` values on the conic at abscissa `x`, or `None` when the
/// vertical line misses the shape.
fn roots_for_x(coefficients: &[f64; 6], x: f64) -> Option<(f64, f64)> {
    let [a, b, c, d, e, f] = *coefficients;
    solve_quadratic(c, b * x + e, f + a * x * x + d * x).ok()
}

/// The two `x` values on the conic at ordinate `y`, or `None`.
fn roots_for_y(coefficients: &[f64; 6], y: f64) -> Option<(f64, f64)> {
    let [a, b, c, d, e, f] = *coefficients;
    solve_quadratic(a, b * y + d, f + c * y * y + e * y).ok()
}

/// Map every row of a single-column query through a root lookup, with NaN
/// sentinel pairs for misses.
fn root_table(
    query: &Table,
    labels: [&str; 2],
    mut roots: impl FnMut(f64) -> Option<(f64, f64)>,
) -> Table {
    let mut values = DMatrix::from_element(query.nrows(), 2, f64::NAN);
    for row in 0..query.nrows() {
        if let Some((first, second)) = roots(query.get(row, 0)) {
            values[(row, 0)] = first;
            values[(row, 1)] = second;
        }
    }
    Table::from_parts(values, labels.iter().map(|l| l.to_string()).collect())
}

/// Strictly-above-the-lower-root, inclusive-of-the-upper-root containment
/// rule shared by the ellipse and the circle.
fn between_roots(roots: Option<(f64, f64)>, y: f64) -> bool {
    match roots {
        Some((first, second)) => y > first.min(second) && y <= first.max(second),
        None => false,
    }
}

/// An ellipse fitted to 2D samples in the least-squares sense.
///
/// The six betas describe
/// `b0·x² + b1·xy + b2·y² + b3·x + b4·y + b5 = 0`; center and axes are
/// derived once at construction. Requires exactly one `x` and one `y`
/// column.
#[derive(Debug, Clone)]
pub struct EllipseRegression {
    betas: Coefficients,
    coefficients: [f64; 6],
    center: (f64, f64),
    axis_major: Axis,
    axis_minor: Axis,
}

impl EllipseRegression {
    pub fn new(y: impl IntoTable, x: impl IntoTable) -> Result<Self> {
        let (ys, xs) = coordinate_pair(y, x)?;
        let coefficients = fit_conic(&xs, &ys)?;
        let center = conic_center(&coefficients)?;
        let (axis_major, axis_minor) = Self::derive_axes(&coefficients, center)?;
        let betas = Coefficients::new(
            DMatrix::from_column_slice(6, 1, &coefficients),
            0,
            vec!["COEF".into()],
        );
        Ok(Self {
            betas,
            coefficients,
            center,
            axis_major,
            axis_minor,
        })
    }

    /// Axis slopes from the branch formula `m = (c−a)/b`,
    /// `m0 = √(m²+1) + m`, `m1 = −1/m0`, then each axis from its two
    /// crossings with the conic.
    ///
    /// When the cross term `b` is zero the branch formula is undefined and
    /// the axes run along the coordinate directions through the center.
    fn derive_axes(coefficients: &[f64; 6], center: (f64, f64)) -> Result<(Axis, Axis)> {
        let [a, b, c, ..] = *coefficients;
        let (cx, cy) = center;

        let branch = (c - a) / b;
        let (first, second) = if b == 0.0 || !branch.is_finite() {
            (
                line_crossings(coefficients, 0.0, cy)?,
                vertical_crossings(coefficients, cx)?,
            )
        } else {
            let slope_major = (branch * branch + 1.0).sqrt() + branch;
            if slope_major == 0.0 {
                return Err(Error::DegenerateConic("the axis slope branch vanished".into()));
            }
            let slope_minor = -slope_major.recip();
            (
                line_crossings(coefficients, slope_major, cy - cx * slope_major)?,
                line_crossings(coefficients, slope_minor, cy - cx * slope_minor)?,
            )
        };

        let first = Axis::new(first.0, first.1);
        let second = Axis::new(second.0, second.1);
        if first.length() >= second.length() {
            Ok((first, second))
        } else {
            Ok((second, first))
        }
    }

    /// For each row of `x`, the two `y` values on the ellipse at that
    /// abscissa (columns `Y0`, `Y1`). Rows outside the horizontal extent
    /// come back as NaN pairs rather than failing the batch.
    pub fn predict_y(&self, x: impl IntoTable) -> Result<Table> {
        let x = x.into_table("X")?;
        single_column(&x, "x")?;
        Ok(root_table(&x, ["Y0", "Y1"], |v| {
            roots_for_x(&self.coefficients, v)
        }))
    }

    /// For each row of `y`, the two `x` values on the ellipse at that
    /// ordinate (columns `X0`, `X1`), NaN pairs for misses.
    pub fn predict_x(&self, y: impl IntoTable) -> Result<Table> {
        let y = y.into_table("Y")?;
        single_column(&y, "y")?;
        Ok(root_table(&y, ["X0", "X1"], |v| {
            roots_for_y(&self.coefficients, v)
        }))
    }

    /// Whether `(x, y)` lies within the ellipse: strictly above the lower
    /// boundary, up to and including the upper one.
    pub fn is_inside(&self, x: f64, y: f64) -> bool {
        between_roots(roots_for_x(&self.coefficients, x), y)
    }

    /// Crossing points between the line `y = slope·x + intercept` and the
    /// ellipse.
    pub fn crossings(&self, slope: f64, intercept: f64) -> Result<((f64, f64), (f64, f64))> {
        line_crossings(&self.coefficients, slope, intercept)
    }

    /// The six conic coefficients `(a, b, c, d, e, f)`.
    pub fn coefficients(&self) -> [f64; 6] {
        self.coefficients
    }

    pub fn betas(&self) -> &Coefficients {
        &self.betas
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn axis_major(&self) -> &Axis {
        &self.axis_major
    }

    pub fn axis_minor(&self) -> &Axis {
        &self.axis_minor
    }

    /// Enclosed area, `π·a·b` over the semi-axes.
    pub fn area(&self) -> f64 {
        let a = self.axis_major.length() / 2.0;
        let b = self.axis_minor.length() / 2.0;
        std::f64::consts::PI * a * b
    }

    /// Perimeter by the infinite series `π(a+b)·Σ hⁿ/4ⁿ` with
    /// `h = (a−b)²/(a²+b²)`, summed until successive values differ by less
    /// than 1e-12. `0 ≤ h < 1` guarantees convergence.
    pub fn perimeter(&self) -> f64 {
        let a = self.axis_major.length() / 2.0;
        let b = self.axis_minor.length() / 2.0;
        let h = (a - b).powi(2) / (a * a + b * b);
        let scale = std::f64::consts::PI * (a + b);

        let mut sum = 1.0;
        let mut term = 1.0;
        let mut perimeter = scale;
        loop {
            term *= h / 4.0;
            sum += term;
            let next = scale * sum;
            if (next - perimeter).abs() < 1e-12 {
                return next;
            }
            perimeter = next;
        }
    }

    /// `√(1 − (b/a)²)` over the semi-axes.
    pub fn eccentricity(&self) -> f64 {
        let a = self.axis_major.length() / 2.0;
        let b = self.axis_minor.length() / 2.0;
        (1.0 - (b * b) / (a * a)).sqrt()
    }

    /// The two foci: center ± `a·e·(cos θ, sin θ)` along the major axis.
    pub fn foci(&self) -> ((f64, f64), (f64, f64)) {
        let a = self.axis_major.length() / 2.0;
        let theta = self.axis_major.angle();
        let distance = a * self.eccentricity();
        let (dx, dy) = (distance * theta.cos(), distance * theta.sin());
        let (cx, cy) = self.center;
        ((cx - dx, cy - dy), (cx + dx, cy + dy))
    }

    /// The x extent of the ellipse, sorted ascending.
    pub fn domain(&self) -> Result<(f64, f64)> {
        let [a, b, c, d, e, f] = self.coefficients;
        let (r0, r1) = solve_quadratic(
            b * b - 4.0 * a * c,
            2.0 * b * e - 4.0 * c * d,
            e * e - 4.0 * c * f,
        )?;
        Ok(if r0 <= r1 { (r0, r1) } else { (r1, r0) })
    }

    /// The y extent of the ellipse, sorted ascending.
    pub fn codomain(&self) -> Result<(f64, f64)> {
        let [a, b, c, d, e, f] = self.coefficients;
        let (r0, r1) = solve_quadratic(
            b * b - 4.0 * a * c,
            2.0 * b * d - 4.0 * a * e,
            d * d - 4.0 * a * f,
        )?;
        Ok(if r0 <= r1 { (r0, r1) } else { (r1, r0) })
    }
}

impl Display for EllipseRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.betas, f)
    }
}

/// A circle fitted to 2D samples in the least-squares sense.
///
/// The betas `(a, b, c)` solve `a·x + b·y + c = x² + y²`; center and
/// radius follow in closed form. Requires exactly one `x` and one `y`
/// column.
///
/// ```
/// use curvefit::CircleRegression;
///
/// let x = vec![5.0, -5.0, 0.0, 0.0];
/// let y = vec![0.0, 0.0, 5.0, -5.0];
/// let circle = CircleRegression::new(y, x)?;
/// assert!((circle.radius() - 5.0).abs() < 1e-9);
/// # Ok::<(), curvefit::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CircleRegression {
    betas: Coefficients,
    center: (f64, f64),
    radius: f64,
}

impl CircleRegression {
    pub fn new(y: impl IntoTable, x: impl IntoTable) -> Result<Self> {
        let (ys, xs) = coordinate_pair(y, x)?;
        let n = xs.len();
        let design = DMatrix::from_fn(n, 3, |row, column| match column {
            0 => xs[row],
            1 => ys[row],
            _ => 1.0,
        });
        let target = DMatrix::from_fn(n, 1, |row, _| xs[row] * xs[row] + ys[row] * ys[row]);
        let solved = least_squares(&design, &target)?;

        let (a, b, c) = (solved[(0, 0)], solved[(1, 0)], solved[(2, 0)]);
        let radius_squared = 4.0 * c + a * a + b * b;
        if radius_squared <= 0.0 {
            return Err(Error::DegenerateConic(
                "the fitted circle has a non-positive radius".into(),
            ));
        }

        let betas = Coefficients::new(solved, 0, vec!["COEF".into()]);
        Ok(Self {
            betas,
            center: (a / 2.0, b / 2.0),
            radius: 0.5 * radius_squared.sqrt(),
        })
    }

    fn roots_for_x(&self, x: f64) -> Option<(f64, f64)> {
        let (cx, cy) = self.center;
        let offset = x - cx;
        solve_quadratic(
            1.0,
            -2.0 * cy,
            cy * cy - self.radius * self.radius + offset * offset,
        )
        .ok()
    }

    fn roots_for_y(&self, y: f64) -> Option<(f64, f64)> {
        let (cx, cy) = self.center;
        let offset = y - cy;
        solve_quadratic(
            1.0,
            -2.0 * cx,
            cx * cx - self.radius * self.radius + offset * offset,
        )
        .ok()
    }

    /// For each row of `x`, the two `y` values on the circle at that
    /// abscissa (columns `Y0`, `Y1`), NaN pairs for misses.
    pub fn predict_y(&self, x: impl IntoTable) -> Result<Table> {
        let x = x.into_table("X")?;
        single_column(&x, "x")?;
        Ok(root_table(&x, ["Y0", "Y1"], |v| self.roots_for_x(v)))
    }

    /// For each row of `y`, the two `x` values on the circle at that
    /// ordinate (columns `X0`, `X1`), NaN pairs for misses.
    pub fn predict_x(&self, y: impl IntoTable) -> Result<Table> {
        let y = y.into_table("Y")?;
        single_column(&y, "y")?;
        Ok(root_table(&y, ["X0", "X1"], |v| self.roots_for_y(v)))
    }

    /// Whether `(x, y)` lies within the circle: strictly above the lower
    /// boundary, up to and including the upper one.
    pub fn is_inside(&self, x: f64, y: f64) -> bool {
        between_roots(self.roots_for_x(x), y)
    }

    pub fn betas(&self) -> &Coefficients {
        &self.betas
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// The x extent of the circle, sorted ascending.
    pub fn domain(&self) -> (f64, f64) {
        (self.center.0 - self.radius, self.center.0 + self.radius)
    }

    /// The y extent of the circle, sorted ascending.
    pub fn codomain(&self) -> (f64, f64) {
        (self.center.1 - self.radius, self.center.1 + self.radius)
    }
}

impl Display for CircleRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.betas, f)
    }
}
