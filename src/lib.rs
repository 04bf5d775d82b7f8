//! Closed-form least-squares fitting of curves to numeric data.
//!
//! Five regression families solved directly through the Moore-Penrose
//! pseudo-inverse (no iterative optimisation, no hyperparameters):
//! linear, polynomial, power, hyperbolic and exponential. Two conic
//! estimators on top of the same solver: a direct least-squares ellipse
//! fit and a linearised circle fit, both with geometric queries (axes,
//! area, perimeter, foci, containment, inverse lookups).
//!
//! All models accept anything implementing [`IntoTable`] — scalars, flat
//! slices, nested rows, `nalgebra` matrices — validate it up front and
//! fit eagerly in the constructor. A constructed model is immutable and
//! every query on it is deterministic.
//!
//! ```
//! use curvefit::LinearRegression;
//!
//! // y = 3x + 2
//! let model = LinearRegression::new(vec![2.0, 5.0, 8.0], vec![0.0, 1.0, 2.0])?;
//! assert!((model.betas().get(0, 0) - 2.0).abs() < 1e-9);
//! assert!((model.betas().get(1, 0) - 3.0).abs() < 1e-9);
//!
//! let predicted = model.predict(3.0)?;
//! assert!((predicted.get(0, 0) - 11.0).abs() < 1e-9);
//! # Ok::<(), curvefit::Error>(())
//! ```

pub mod conic;
pub mod error;
pub mod regression;
pub mod table;

pub use conic::{solve_quadratic, Axis, CircleRegression, EllipseRegression};
pub use error::{Error, Result};
pub use regression::{
    design_matrix, least_squares, Coefficients, ExponentialRegression, HyperbolicRegression,
    LinearRegression, PolynomialRegression, PowerRegression, Transform,
};
pub use table::{IntoTable, Table};
