//! Convenient prelude: import the most commonly used traits, types, and
//! functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use odestep::prelude::*;
//! ```

pub use crate::rk::{euler, midpoint, rk4};
pub use crate::stepcontrol::{stepcontrol_midpoint, StepControlSettings, StepControlSolution};
pub use crate::{Error, EvalResult, Float, Interval, ODE, RunMap, Status, Trajectory};
