//! User-supplied ODE system.

use crate::Float;

/// Result of a single right-hand-side evaluation.
///
/// Most physical models cannot fail and simply end with `Ok(())`; models that
/// look up external data (tables, interpolants) can report a boxed error,
/// which the integrators propagate unmodified as
/// [`Error::Evaluation`](crate::Error::Evaluation).
pub type EvalResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// User-supplied ODE system.
///
/// Implement this trait for your problem to provide the right-hand side
/// y' = f(t, y). The integrators repeatedly call `ode` with the current time
/// `t` and state `y` and expect you to fill `dydt` with the derivative
/// values. `dydt` has the same length as `y`.
///
/// Implementations must be pure: deterministic in `(t, y)` and free of side
/// effects. The methods evaluate the right-hand side between one and four
/// times per attempted step, so the same `(t, y)` may be visited more than
/// once when the adaptive controller rejects a step.
///
/// # Example
///
/// ```ignore
/// struct DampedPendulum { omega0: f64, damping: f64 }
/// impl ODE for DampedPendulum {
///     fn ode(&self, _t: f64, y: &[f64], dydt: &mut [f64]) -> EvalResult {
///         dydt[0] = y[1];
///         dydt[1] = -2.0 * self.damping * self.omega0 * y[1]
///             - self.omega0.powi(2) * y[0].sin();
///         Ok(())
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&self, t: Float, y: &[Float], dydt: &mut [Float]) -> EvalResult;
}
