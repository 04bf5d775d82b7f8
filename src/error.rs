//! The failure taxonomy shared by every model constructor and query.
//!
//! Construction is all-or-nothing: any error below aborts the fit and no
//! partial model is returned. Per-row query failures (a single abscissa
//! outside an ellipse, say) are *not* errors; they surface as in-band NaN
//! sentinels in the returned table instead.

use thiserror::Error;

/// Alias for `Result` with the crate-wide [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while normalising input, estimating
/// coefficients or deriving conic geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// `x` and `y` must describe the same samples.
    #[error("'x' has {x_rows} rows but 'y' has {y_rows}")]
    RowCountMismatch { x_rows: usize, y_rows: usize },

    /// 2D input must be rectangular.
    #[error("ragged input: row {row} has {got} columns while the first row has {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// The conic models accept exactly one predictor and one target column.
    #[error("'{name}' must have exactly one column, got {got}")]
    NotUnidimensional { name: &'static str, got: usize },

    /// Tables need at least one row and one column.
    #[error("input contains no data")]
    Empty,

    /// Column labels must match the column count.
    #[error("{got} column labels provided for {columns} columns")]
    LabelCount { columns: usize, got: usize },

    /// Inputs must be finite real numbers.
    #[error("non-finite entry {value} at row {row}, column {column}")]
    NonFinite {
        row: usize,
        column: usize,
        value: f64,
    },

    /// The power model is solved in log-space and needs positive data.
    #[error("'{name}' must be strictly positive, found {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// The hyperbolic model takes reciprocals of the predictors.
    #[error("'{name}' must not contain zeros")]
    ZeroEntry { name: &'static str },

    /// The exponential base must be usable as `base^x`.
    #[error("the exponential base must be a positive finite number, got {base}")]
    InvalidBase { base: f64 },

    /// Polynomial expansion needs at least order 1.
    #[error("the polynomial order must be at least 1")]
    InvalidOrder,

    /// The model was fitted against a different predictor width.
    #[error("the design matrix has {got} columns but the model was fitted with {expected}")]
    DesignWidthMismatch { expected: usize, got: usize },

    /// The least-squares solve left the reals; the model is rejected whole.
    #[error("the least-squares solve produced non-finite coefficients")]
    NonFiniteCoefficients,

    /// The SVD behind the pseudo-inverse failed to converge.
    #[error("pseudo-inverse failed: {0}")]
    PseudoInverse(&'static str),

    /// The sample does not determine a valid ellipse or circle.
    #[error("degenerate conic: {0}")]
    DegenerateConic(String),

    /// `a·x² + b·x + c = 0` has no real solution.
    #[error("no real roots: the discriminant {discriminant} is negative")]
    NoRealRoots { discriminant: f64 },

    /// `a·x² + b·x + c = 0` with `a == 0` is not a quadratic.
    #[error("degenerate quadratic: the leading coefficient is zero")]
    DegenerateQuadratic,
}
