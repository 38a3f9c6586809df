//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use odestep::prelude::*;

/// Simple harmonic oscillator `x'' = -x` as a first-order system.
///
/// With `y0 = [1, 0]` the exact solution is `[cos t, -sin t]`.
pub struct SHO;

impl ODE for SHO {
    fn ode(&self, _t: Float, y: &[Float], dydt: &mut [Float]) -> EvalResult {
        dydt[0] = y[1];
        dydt[1] = -y[0];
        Ok(())
    }
}

/// Exact oscillator solution for the `[1, 0]` initial condition.
pub fn sho_exact(t: Float) -> [Float; 2] {
    [t.cos(), -t.sin()]
}

/// Distance between a computed state and the exact oscillator solution at `t`.
pub fn sho_error(t: Float, y: &[Float]) -> Float {
    let exact = sho_exact(t);
    ((y[0] - exact[0]).powi(2) + (y[1] - exact[1]).powi(2)).sqrt()
}

/// Exponential decay `y' = -y`.
pub struct Decay;

impl ODE for Decay {
    fn ode(&self, _t: Float, y: &[Float], dydt: &mut [Float]) -> EvalResult {
        dydt[0] = -y[0];
        Ok(())
    }
}

/// Very fast linear decay `y' = -rate * y`; drives an explicit method with a
/// bounded step straight into its stability limit.
pub struct StiffDecay {
    pub rate: Float,
}

impl ODE for StiffDecay {
    fn ode(&self, _t: Float, y: &[Float], dydt: &mut [Float]) -> EvalResult {
        dydt[0] = -self.rate * y[0];
        Ok(())
    }
}

/// Right-hand side that fails once the time passes a trigger, standing in for
/// a model whose external data runs out.
pub struct FailsAfter {
    pub t_fail: Float,
}

impl ODE for FailsAfter {
    fn ode(&self, t: Float, y: &[Float], dydt: &mut [Float]) -> EvalResult {
        if t >= self.t_fail {
            return Err(format!("no input data beyond t = {}", self.t_fail).into());
        }
        dydt[0] = -y[0];
        Ok(())
    }
}
