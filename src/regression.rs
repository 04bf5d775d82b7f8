//! Closed-form regression models backed by one shared least-squares solve.
//!
//! # Info on implementation
//!
//! Every model here is the same estimator with a different design matrix:
//! `betas = pinv(DᵗD) · Dᵗ · Y`, where [`Transform`] decides how the raw
//! predictors become `D`. The pseudo-inverse keeps rank-deficient normal
//! matrices solvable where a plain inverse would fail.
//!
//! ## Power
//!
//! y = b0 · x₁^b1 · … · xₖ^bk
//!
//! ln(y) = ln(b0) + b1·ln(x₁) + … + bk·ln(xₖ)
//!
//! Transform: y => ln(y), x => ln(x). The solve happens in log-space, then
//! row 0 of the coefficients is mapped through `exp` once at fit time.
//! Prediction reconstructs the product form directly rather than going back
//! through logs, which keeps it accurate and defined for any positive input.
//!
//! ## Hyperbolic
//!
//! y = b0 + b1/x
//!
//! Transform: x => 1/x. Linear in the transformed predictor, no log step.
//!
//! ## Exponential
//!
//! y = b0 + b1 · baseˣ
//!
//! Transform: x => baseˣ. Also linear in the transformed predictor; the
//! base is configurable and defaults to Euler's number.

use std::fmt::{self, Display};

use nalgebra::DMatrix;

use crate::error::{Error, Result};
use crate::table::{write_aligned, IntoTable, Table};

/// Singular values below this are treated as zero by the pseudo-inverse.
const PINV_EPS: f64 = 1e-12;

/// How raw predictors are expanded into design-matrix columns.
///
/// Each variant generates [`Transform::arity`] columns per feature; an
/// optional leading constant column is added by [`design_matrix`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Use the features as-is.
    Identity,
    /// Raise each feature to the powers `1..=n`, grouped by power.
    Polynomial(usize),
    /// Natural logarithm of each feature.
    Log,
    /// Reciprocal of each feature.
    Reciprocal,
    /// The stored base raised to each feature.
    Exponent(f64),
}

impl Transform {
    /// Number of design columns generated per feature.
    pub fn arity(&self) -> usize {
        match self {
            Transform::Polynomial(n) => *n,
            _ => 1,
        }
    }

    /// Apply the transform, producing `arity() * x.ncols()` columns.
    pub fn apply(&self, x: &DMatrix<f64>) -> DMatrix<f64> {
        match *self {
            Transform::Identity => x.clone(),
            Transform::Polynomial(n) => {
                let features = x.ncols();
                DMatrix::from_fn(x.nrows(), features * n, |row, column| {
                    let power = (column / features + 1) as i32;
                    x[(row, column % features)].powi(power)
                })
            }
            Transform::Log => x.map(f64::ln),
            Transform::Reciprocal => x.map(f64::recip),
            Transform::Exponent(base) => x.map(|v| base.powf(v)),
        }
    }
}

/// Build the design matrix fed to [`least_squares`].
///
/// With `intercept`, a constant `1` column is prepended ahead of the
/// transformed columns.
pub fn design_matrix(x: &DMatrix<f64>, transform: Transform, intercept: bool) -> DMatrix<f64> {
    let transformed = transform.apply(x);
    if !intercept {
        return transformed;
    }
    DMatrix::from_fn(transformed.nrows(), transformed.ncols() + 1, |row, column| {
        if column == 0 {
            1.0
        } else {
            transformed[(row, column - 1)]
        }
    })
}

/// Solve `betas = pinv(Dᵗ D) · Dᵗ · Y`.
///
/// Returns one coefficient column per target dimension. Non-finite output
/// coefficients reject the fit outright; no partial model escapes.
pub fn least_squares(design: &DMatrix<f64>, target: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    let transposed = design.transpose();
    let normal = &transposed * design;
    let pinv = normal.pseudo_inverse(PINV_EPS).map_err(Error::PseudoInverse)?;
    let betas = pinv * (transposed * target);
    if betas.iter().any(|value| !value.is_finite()) {
        return Err(Error::NonFiniteCoefficients);
    }
    Ok(betas)
}

/// A fitted coefficient table: one row per design column (labelled
/// `beta0..betaN`), one column per target dimension.
///
/// Produced once at fit time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    values: DMatrix<f64>,
    row_labels: Vec<String>,
    column_labels: Vec<String>,
}

impl Coefficients {
    /// `label_offset` is 1 when the intercept column was excluded, so the
    /// remaining rows keep their `beta1..` names.
    pub(crate) fn new(
        values: DMatrix<f64>,
        label_offset: usize,
        column_labels: Vec<String>,
    ) -> Self {
        let row_labels = (0..values.nrows())
            .map(|i| format!("beta{}", i + label_offset))
            .collect();
        Self {
            values,
            row_labels,
            column_labels,
        }
    }

    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Entry at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.values[(row, column)]
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }
}

impl Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aligned(f, &self.row_labels, &self.column_labels, &self.values)
    }
}

/// Normalise a `(y, x)` pair and check the shared row count.
pub(crate) fn simplify_pair(y: impl IntoTable, x: impl IntoTable) -> Result<(Table, Table)> {
    let y = y.into_table("Y")?;
    let x = x.into_table("X")?;
    if x.nrows() != y.nrows() {
        return Err(Error::RowCountMismatch {
            x_rows: x.nrows(),
            y_rows: y.nrows(),
        });
    }
    Ok((y, x))
}

fn require_positive(table: &Table, name: &'static str) -> Result<()> {
    for row in 0..table.nrows() {
        for column in 0..table.ncols() {
            let value = table.get(row, column);
            if value <= 0.0 {
                return Err(Error::NonPositive { name, value });
            }
        }
    }
    Ok(())
}

fn require_nonzero(table: &Table, name: &'static str) -> Result<()> {
    for row in 0..table.nrows() {
        for column in 0..table.ncols() {
            if table.get(row, column) == 0.0 {
                return Err(Error::ZeroEntry { name });
            }
        }
    }
    Ok(())
}

/// `D_new · betas` with a width check, wrapped as an output table.
fn predict_design(design: &DMatrix<f64>, betas: &Coefficients) -> Result<Table> {
    if design.ncols() != betas.nrows() {
        return Err(Error::DesignWidthMismatch {
            expected: betas.nrows(),
            got: design.ncols(),
        });
    }
    let values = design * betas.values();
    Ok(Table::from_parts(values, betas.column_labels().to_vec()))
}

/// Squared Pearson correlation between the first target column and the
/// first predicted column over the training samples.
///
/// NaN when either side has no variance, matching the definition of the
/// correlation itself.
fn pearson_r_squared(truth: &DMatrix<f64>, predicted: &DMatrix<f64>) -> f64 {
    let n = truth.nrows() as f64;
    let truth = truth.column(0);
    let predicted = predicted.column(0);
    let truth_mean = truth.sum() / n;
    let predicted_mean = predicted.sum() / n;

    let mut covariance = 0.0;
    let mut truth_var = 0.0;
    let mut predicted_var = 0.0;
    for row in 0..truth.nrows() {
        let dt = truth[row] - truth_mean;
        let dp = predicted[row] - predicted_mean;
        covariance += dt * dp;
        truth_var += dt * dt;
        predicted_var += dp * dp;
    }

    let r = covariance / (truth_var.sqrt() * predicted_var.sqrt());
    r * r
}

/// Ordinary least squares: `y = b0 + b1·x₁ + … + bk·xₖ`.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    betas: Coefficients,
    fit_intercept: bool,
    r_squared: f64,
}

impl LinearRegression {
    /// Fit with an intercept term.
    pub fn new(y: impl IntoTable, x: impl IntoTable) -> Result<Self> {
        Self::with_options(y, x, true)
    }

    /// Fit, optionally forcing the intercept to zero.
    pub fn with_options(y: impl IntoTable, x: impl IntoTable, fit_intercept: bool) -> Result<Self> {
        let (y, x) = simplify_pair(y, x)?;
        let design = design_matrix(x.values(), Transform::Identity, fit_intercept);
        let solved = least_squares(&design, y.values())?;
        let betas = Coefficients::new(solved, usize::from(!fit_intercept), y.columns().to_vec());
        let predicted = &design * betas.values();
        let r_squared = pearson_r_squared(y.values(), &predicted);
        Ok(Self {
            betas,
            fit_intercept,
            r_squared,
        })
    }

    /// Predict `y` for new predictors, reapplying the identity design.
    pub fn predict(&self, x: impl IntoTable) -> Result<Table> {
        let x = x.into_table("X")?;
        let design = design_matrix(x.values(), Transform::Identity, self.fit_intercept);
        predict_design(&design, &self.betas)
    }

    pub fn betas(&self) -> &Coefficients {
        &self.betas
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    /// Squared Pearson correlation between observed and fitted targets.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }
}

impl Display for LinearRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.betas, f)
    }
}

/// Polynomial expansion of order `n`.
///
/// Each feature is raised independently to the powers `1..=n`; design
/// columns are grouped by power, so the betas read
/// `[intercept, all features¹, all features², …]`.
#[derive(Debug, Clone)]
pub struct PolynomialRegression {
    betas: Coefficients,
    fit_intercept: bool,
    order: usize,
    r_squared: f64,
}

impl PolynomialRegression {
    /// Fit a polynomial of order `n` with an intercept.
    pub fn new(y: impl IntoTable, x: impl IntoTable, n: usize) -> Result<Self> {
        Self::with_options(y, x, n, true)
    }

    /// Fit a polynomial of order `n`, optionally without intercept.
    pub fn with_options(
        y: impl IntoTable,
        x: impl IntoTable,
        n: usize,
        fit_intercept: bool,
    ) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidOrder);
        }
        let (y, x) = simplify_pair(y, x)?;
        let design = design_matrix(x.values(), Transform::Polynomial(n), fit_intercept);
        let solved = least_squares(&design, y.values())?;
        let betas = Coefficients::new(solved, usize::from(!fit_intercept), y.columns().to_vec());
        let predicted = &design * betas.values();
        let r_squared = pearson_r_squared(y.values(), &predicted);
        Ok(Self {
            betas,
            fit_intercept,
            order: n,
            r_squared,
        })
    }

    pub fn predict(&self, x: impl IntoTable) -> Result<Table> {
        let x = x.into_table("X")?;
        let design = design_matrix(
            x.values(),
            Transform::Polynomial(self.order),
            self.fit_intercept,
        );
        predict_design(&design, &self.betas)
    }

    pub fn betas(&self) -> &Coefficients {
        &self.betas
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }
}

impl Display for PolynomialRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.betas, f)
    }
}

/// Power model `y = b0 · x₁^b1 · … · xₖ^bk`, solved in log-space.
///
/// Requires strictly positive predictors and targets. Row 0 of the betas is
/// the multiplicative constant (already back-transformed through `exp`);
/// the remaining rows are the exponents.
#[derive(Debug, Clone)]
pub struct PowerRegression {
    betas: Coefficients,
    r_squared: f64,
}

impl PowerRegression {
    pub fn new(y: impl IntoTable, x: impl IntoTable) -> Result<Self> {
        let (y, x) = simplify_pair(y, x)?;
        require_positive(&y, "y")?;
        require_positive(&x, "x")?;

        let design = design_matrix(x.values(), Transform::Log, true);
        let log_target = y.values().map(f64::ln);
        let mut solved = least_squares(&design, &log_target)?;
        // One atomic back-transform of the intercept row; the betas are
        // only ever observed after it.
        for column in 0..solved.ncols() {
            solved[(0, column)] = solved[(0, column)].exp();
        }
        let betas = Coefficients::new(solved, 0, y.columns().to_vec());
        let predicted = Self::product(x.values(), &betas);
        let r_squared = pearson_r_squared(y.values(), &predicted);
        Ok(Self { betas, r_squared })
    }

    /// `b0 · ∏ xᵢ^bᵢ`, evaluated directly instead of through logs.
    fn product(x: &DMatrix<f64>, betas: &Coefficients) -> DMatrix<f64> {
        DMatrix::from_fn(x.nrows(), betas.ncols(), |row, column| {
            let mut value = betas.get(0, column);
            for feature in 0..x.ncols() {
                value *= x[(row, feature)].powf(betas.get(feature + 1, column));
            }
            value
        })
    }

    pub fn predict(&self, x: impl IntoTable) -> Result<Table> {
        let x = x.into_table("X")?;
        if x.ncols() + 1 != self.betas.nrows() {
            return Err(Error::DesignWidthMismatch {
                expected: self.betas.nrows(),
                got: x.ncols() + 1,
            });
        }
        let values = Self::product(x.values(), &self.betas);
        Ok(Table::from_parts(values, self.betas.column_labels().to_vec()))
    }

    pub fn betas(&self) -> &Coefficients {
        &self.betas
    }

    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }
}

impl Display for PowerRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.betas, f)
    }
}

/// Rectangular hyperbola `y = b0 + b1/x`.
#[derive(Debug, Clone)]
pub struct HyperbolicRegression {
    betas: Coefficients,
    r_squared: f64,
}

impl HyperbolicRegression {
    pub fn new(y: impl IntoTable, x: impl IntoTable) -> Result<Self> {
        let (y, x) = simplify_pair(y, x)?;
        require_nonzero(&x, "x")?;
        let design = design_matrix(x.values(), Transform::Reciprocal, true);
        let solved = least_squares(&design, y.values())?;
        let betas = Coefficients::new(solved, 0, y.columns().to_vec());
        let predicted = &design * betas.values();
        let r_squared = pearson_r_squared(y.values(), &predicted);
        Ok(Self { betas, r_squared })
    }

    pub fn predict(&self, x: impl IntoTable) -> Result<Table> {
        let x = x.into_table("X")?;
        require_nonzero(&x, "x")?;
        let design = design_matrix(x.values(), Transform::Reciprocal, true);
        predict_design(&design, &self.betas)
    }

    pub fn betas(&self) -> &Coefficients {
        &self.betas
    }

    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }
}

impl Display for HyperbolicRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.betas, f)
    }
}

/// Exponential model `y = b0 + b1 · baseˣ`.
#[derive(Debug, Clone)]
pub struct ExponentialRegression {
    betas: Coefficients,
    base: f64,
    r_squared: f64,
}

impl ExponentialRegression {
    /// Fit with the natural base `e`.
    pub fn new(y: impl IntoTable, x: impl IntoTable) -> Result<Self> {
        Self::with_base(y, x, std::f64::consts::E)
    }

    /// Fit with a custom base.
    pub fn with_base(y: impl IntoTable, x: impl IntoTable, base: f64) -> Result<Self> {
        if !base.is_finite() || base <= 0.0 {
            return Err(Error::InvalidBase { base });
        }
        let (y, x) = simplify_pair(y, x)?;
        let design = design_matrix(x.values(), Transform::Exponent(base), true);
        let solved = least_squares(&design, y.values())?;
        let betas = Coefficients::new(solved, 0, y.columns().to_vec());
        let predicted = &design * betas.values();
        let r_squared = pearson_r_squared(y.values(), &predicted);
        Ok(Self {
            betas,
            base,
            r_squared,
        })
    }

    pub fn predict(&self, x: impl IntoTable) -> Result<Table> {
        let x = x.into_table("X")?;
        let design = design_matrix(x.values(), Transform::Exponent(self.base), true);
        predict_design(&design, &self.betas)
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn betas(&self) -> &Coefficients {
        &self.betas
    }

    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }
}

impl Display for ExponentialRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.betas, f)
    }
}
