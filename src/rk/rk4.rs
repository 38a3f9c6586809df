//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use crate::{Error, Float, ODE, Trajectory};

use super::{check_args, step_count};

/// Classical explicit Runge-Kutta 4 (RK4) fixed-step integrator:
/// `y_{i+1} = y_i + h/6 * (k1 + 2*k2 + 2*k3 + k4)`.
///
/// Fourth-order accurate. Four derivative evaluations per step.
pub fn rk4<F>(f: &F, t0: Float, tend: Float, y0: &[Float], h: Float) -> Result<Trajectory, Error>
where
    F: ODE,
{
    let span = check_args(t0, tend, y0, h)?;
    let steps = step_count(&span, h);
    let n = y0.len();

    let mut y = y0.to_vec();
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut yt = vec![0.0; n];

    let mut trajectory = Trajectory::with_capacity(steps + 1);
    trajectory.push(span.start(), y.clone());

    for i in 1..=steps {
        let t = span.start() + (i - 1) as Float * h;

        // Stage computations
        f.ode(t, &y, &mut k1).map_err(|e| Error::evaluation(t, e))?;

        for j in 0..n {
            yt[j] = y[j] + h * A21 * k1[j];
        }
        f.ode(t + C2 * h, &yt, &mut k2)
            .map_err(|e| Error::evaluation(t + C2 * h, e))?;

        for j in 0..n {
            yt[j] = y[j] + h * A32 * k2[j];
        }
        f.ode(t + C3 * h, &yt, &mut k3)
            .map_err(|e| Error::evaluation(t + C3 * h, e))?;

        for j in 0..n {
            yt[j] = y[j] + h * A43 * k3[j];
        }
        f.ode(t + C4 * h, &yt, &mut k4)
            .map_err(|e| Error::evaluation(t + C4 * h, e))?;

        // Update state
        for j in 0..n {
            y[j] += h * (B1 * k1[j] + B2 * k2[j] + B3 * k3[j] + B4 * k4[j]);
        }

        trajectory.push(span.start() + i as Float * h, y.clone());
    }

    Ok(trajectory)
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
