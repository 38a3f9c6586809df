//! A library of explicit numerical methods for solving initial value problems
//! (IVPs) for ordinary differential equations (ODEs).
//!
//! Two families of integrators are provided:
//!
//! - Fixed-step methods in [`rk`]: forward [`rk::euler`], explicit
//!   [`rk::midpoint`] (RK2), and the classical [`rk::rk4`]. All of them march
//!   a uniform step `h` across the interval and return the full [`Trajectory`].
//! - An adaptive controller in [`stepcontrol`]: an embedded Euler/midpoint
//!   pair that estimates the local error from the two candidate states,
//!   rejects and halves the step when the error is out of band, and grows the
//!   step when the error leaves headroom.
//!
//! The right-hand side of the system is supplied through the [`ODE`] trait;
//! any type implementing it is interchangeable. See `demos/` for complete
//! drivers (a damped pendulum and a battery equivalent-circuit model).
//!
//! # Example
//!
//! ```
//! use odestep::prelude::*;
//!
//! struct Decay;
//!
//! impl ODE for Decay {
//!     fn ode(&self, _t: Float, y: &[Float], dydt: &mut [Float]) -> EvalResult {
//!         dydt[0] = -y[0];
//!         Ok(())
//!     }
//! }
//!
//! let traj = rk4(&Decay, 0.0, 5.0, &[1.0], 0.1).unwrap();
//! let (t_last, y_last) = traj.last().unwrap();
//! assert!((y_last[0] - (-t_last).exp()).abs() < 1e-6);
//! ```

mod error;
mod interval;
mod ode;
mod status;
mod trajectory;

pub mod rk;
pub mod stepcontrol;

pub mod prelude;

pub use error::Error;
pub use interval::Interval;
pub use ode::{EvalResult, ODE};
pub use status::Status;
pub use trajectory::{RunMap, Trajectory};

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Floating-point scalar used throughout the crate, selected by feature.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
