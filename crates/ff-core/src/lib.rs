//! Fleet Forecast core: record store and maintenance projection engine.
//!
//! Estimates when a fleet vehicle's component (tires, battery, general
//! service) will next require maintenance from a sparse, irregular history
//! of odometer readings. The engine fits an ordinary least-squares trend to
//! the readings, looks up the component's maintenance interval, and projects
//! the calendar date at which cumulative distance crosses the threshold.
//!
//! The whole pipeline is a pure function of its inputs: same observations,
//! same interval table, same reference date, same answer. Degenerate inputs
//! surface as typed failures, never as panics.

pub mod fit;
pub mod forecast;
pub mod project;
pub mod store;
pub mod urgency;

pub use fit::{linear_regression, TrendFit};
pub use forecast::{forecast, Forecast};
pub use project::{project, Projection, ProjectionFailure};
pub use store::RecordStore;
pub use urgency::{classify_urgency, Urgency};
