//! Forward (explicit) Euler fixed-step integrator.

use crate::{Error, Float, ODE, Trajectory};

use super::{check_args, step_count};

/// Forward Euler integrator: `y_{i+1} = y_i + h * f(t_i, y_i)`.
///
/// First-order accurate. One derivative evaluation per step.
pub fn euler<F>(f: &F, t0: Float, tend: Float, y0: &[Float], h: Float) -> Result<Trajectory, Error>
where
    F: ODE,
{
    let span = check_args(t0, tend, y0, h)?;
    let steps = step_count(&span, h);
    let n = y0.len();

    let mut y = y0.to_vec();
    let mut k1 = vec![0.0; n];

    let mut trajectory = Trajectory::with_capacity(steps + 1);
    trajectory.push(span.start(), y.clone());

    for i in 1..=steps {
        let t = span.start() + (i - 1) as Float * h;
        f.ode(t, &y, &mut k1).map_err(|e| Error::evaluation(t, e))?;

        for j in 0..n {
            y[j] += h * k1[j];
        }

        trajectory.push(span.start() + i as Float * h, y.clone());
    }

    Ok(trajectory)
}
