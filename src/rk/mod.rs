//! Fixed-step explicit integrators (Euler, midpoint, RK4).
//!
//! All three methods share the same contract: given the right-hand side, the
//! interval endpoints (in either order), the initial state, and a uniform
//! step `h > 0`, they produce a [`Trajectory`](crate::Trajectory) whose first
//! sample is the initial condition.
//!
//! The number of transitions is `ceil((end - start) / h)`, fixed up front, so
//! the trajectory always holds `ceil((end - start) / h) + 1` samples. Sample
//! times are computed as `start + i * h` rather than by accumulating `h`,
//! which keeps long runs free of additive rounding drift. The final sample is
//! not clamped: when the interval length is not an exact multiple of `h` it
//! lands past `end` by less than one step.

mod euler;
mod midpoint;
mod rk4;

pub use euler::euler;
pub use midpoint::midpoint;
pub use rk4::rk4;

use crate::{Error, Float, Interval};

/// Validate common fixed-step arguments and resolve the interval.
fn check_args(t0: Float, tend: Float, y0: &[Float], h: Float) -> Result<Interval, Error> {
    let span = Interval::new(t0, tend)?;
    if h <= 0.0 {
        return Err(Error::InvalidStepSize(h));
    }
    if y0.is_empty() {
        return Err(Error::EmptyState);
    }
    Ok(span)
}

/// Number of uniform transitions needed to cover `span` with step `h`.
fn step_count(span: &Interval, h: Float) -> usize {
    (span.length() / h).ceil() as usize
}
