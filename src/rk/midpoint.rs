//! Explicit midpoint (RK2) fixed-step integrator.

use crate::{Error, Float, ODE, Trajectory};

use super::{check_args, step_count};

/// Explicit midpoint rule: evaluate the slope at the half step and advance
/// the full step with it.
///
/// ```text
/// k1 = f(t_i, y_i)
/// k2 = f(t_i + h/2, y_i + h/2 * k1)
/// y_{i+1} = y_i + h * k2
/// ```
///
/// Second-order accurate. Two derivative evaluations per step.
pub fn midpoint<F>(
    f: &F,
    t0: Float,
    tend: Float,
    y0: &[Float],
    h: Float,
) -> Result<Trajectory, Error>
where
    F: ODE,
{
    let span = check_args(t0, tend, y0, h)?;
    let steps = step_count(&span, h);
    let n = y0.len();

    let mut y = y0.to_vec();
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut yt = vec![0.0; n];

    let mut trajectory = Trajectory::with_capacity(steps + 1);
    trajectory.push(span.start(), y.clone());

    for i in 1..=steps {
        let t = span.start() + (i - 1) as Float * h;
        f.ode(t, &y, &mut k1).map_err(|e| Error::evaluation(t, e))?;

        for j in 0..n {
            yt[j] = y[j] + 0.5 * h * k1[j];
        }
        let tm = t + 0.5 * h;
        f.ode(tm, &yt, &mut k2)
            .map_err(|e| Error::evaluation(tm, e))?;

        for j in 0..n {
            y[j] += h * k2[j];
        }

        trajectory.push(span.start() + i as Float * h, y.clone());
    }

    Ok(trajectory)
}
