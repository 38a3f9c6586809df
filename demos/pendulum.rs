//! # Demo: damped pendulum
//!
//! Integrate a damped pendulum with every method in the crate and compare the
//! endpoints. The equation of motion as a first-order system:
//!
//! theta' = dtheta
//! dtheta' = -2*D*omega0*dtheta - omega0^2 * sin(theta)
//!
//! with omega0 = sqrt(g/L) and damping ratio D = d / (2*m*omega0).
//!
//! Initial condition: released from 75 degrees at rest.

use odestep::prelude::*;

struct DampedPendulum {
    omega0: Float,
    damping_ratio: Float,
}

impl DampedPendulum {
    fn new(gravity: Float, length: Float, mass: Float, damping: Float) -> Self {
        let omega0 = (gravity / length).sqrt();
        Self {
            omega0,
            damping_ratio: damping / (2.0 * mass * omega0),
        }
    }
}

impl ODE for DampedPendulum {
    fn ode(&self, _t: Float, y: &[Float], dydt: &mut [Float]) -> EvalResult {
        dydt[0] = y[1];
        dydt[1] = -2.0 * self.damping_ratio * self.omega0 * y[1]
            - self.omega0.powi(2) * y[0].sin();
        Ok(())
    }
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => eprintln!("Integration failed: {e}"),
    }
}

fn run() -> Result<(), Error> {
    let pendulum = DampedPendulum::new(9.81, 0.5, 0.2, 0.2);
    let t_end = 5.0;
    let h = 0.1;
    let y0 = [75.0_f64.to_radians(), 0.0];

    // Fixed-step runs, batched in insertion order for downstream comparison.
    let mut runs = RunMap::new();
    runs.insert("euler", euler(&pendulum, 0.0, t_end, &y0, h)?);
    runs.insert("midpoint", midpoint(&pendulum, 0.0, t_end, &y0, h)?);
    runs.insert("rk4", rk4(&pendulum, 0.0, t_end, &y0, h)?);

    println!("Fixed-step methods, h = {h}:");
    for (name, traj) in runs.iter() {
        let (t_last, y_last) = traj.last().expect("trajectory is never empty");
        println!(
            "  {name:>8}: {} samples, theta({t_last:.2}) = {:>8.4} deg, omega = {:>8.4} rad/s",
            traj.len(),
            y_last[0].to_degrees(),
            y_last[1],
        );
    }

    // Adaptive run with the same initial step as a guess.
    let sol = stepcontrol_midpoint(
        &pendulum,
        0.0,
        t_end,
        &y0,
        h,
        &StepControlSettings::default(),
    )?;
    let (t_last, y_last) = sol.trajectory.last().expect("trajectory is never empty");
    let h_min_used = sol.h[1..].iter().cloned().fold(Float::INFINITY, Float::min);
    let h_max_used = sol.h[1..].iter().cloned().fold(0.0, Float::max);

    println!("Adaptive embedded Euler/midpoint:");
    println!(
        "  theta({t_last:.2}) = {:>8.4} deg, omega = {:>8.4} rad/s",
        y_last[0].to_degrees(),
        y_last[1],
    );
    println!(
        "  accepted {} steps, rejected {}, {} derivative evaluations",
        sol.naccpt, sol.nrejct, sol.nfev
    );
    println!("  step sizes used: {h_min_used:.2e} ..= {h_max_used:.2e}");

    Ok(())
}
