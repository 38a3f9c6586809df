//! # Demo: dual-polarization battery equivalent circuit
//!
//! A battery cell modeled as a series resistance and two RC polarization
//! branches (one fast, one slow), driven by a pulsed current profile:
//!
//! soc' = -i / Qn
//! u1'  = -u1 / (R1*C1) + i / C1
//! u2'  = -u2 / (R2*C2) + i / C2
//!
//! The fast branch has a time constant of 10 ms against a 90 s horizon, which
//! makes the system stiff for explicit methods; the adaptive controller keeps
//! the step inside the stable region during the pulses and grows it again in
//! the quiet phases.

use odestep::prelude::*;

struct DpEcBattery {
    r0: Float,
    r1: Float,
    c1: Float,
    r2: Float,
    c2: Float,
    qn: Float,
    u_min: Float,
    u_max: Float,
}

impl DpEcBattery {
    fn new() -> Self {
        Self {
            r0: 0.005,       // Ohmic resistance [Ohm]
            r1: 0.010,       // Fast polarization resistance [Ohm]
            c1: 1.0,         // Fast capacitance [F] (tau1 = 10 ms)
            r2: 0.050,       // Slow polarization resistance [Ohm]
            c2: 2000.0,      // Slow capacitance [F] (tau2 = 100 s)
            qn: 3600.0 * 10.0, // Nominal capacity [As] (10 Ah)
            u_min: 3.0,      // Voltage at soc = 0 [V]
            u_max: 4.2,      // Voltage at soc = 1 [V]
        }
    }

    /// Load current in Amperes. Positive = discharge, negative = charge.
    /// A 20 A discharge pulse and a short regen pulse.
    fn current(&self, t: Float) -> Float {
        if (10.0..=30.0).contains(&t) {
            20.0
        } else if (60.0..=70.0).contains(&t) {
            -10.0
        } else {
            0.0
        }
    }

    /// Terminal voltage from a linear open-circuit map minus the drops.
    fn terminal_voltage(&self, t: Float, y: &[Float]) -> Float {
        let ocv = self.u_min + y[0] * (self.u_max - self.u_min);
        ocv - self.current(t) * self.r0 - y[1] - y[2]
    }
}

impl ODE for DpEcBattery {
    fn ode(&self, t: Float, y: &[Float], dydt: &mut [Float]) -> EvalResult {
        let i = self.current(t);
        dydt[0] = -i / self.qn;
        dydt[1] = -y[1] / (self.r1 * self.c1) + i / self.c1;
        dydt[2] = -y[2] / (self.r2 * self.c2) + i / self.c2;
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
    let battery = DpEcBattery::new();
    let t_end = 90.0;
    let y0 = [0.8, 0.0, 0.0]; // [soc, u1, u2]

    let sol = stepcontrol_midpoint(
        &battery,
        0.0,
        t_end,
        &y0,
        0.1,
        &StepControlSettings::default(),
    )?;

    println!("Adaptive run over [0, {t_end}] s:");
    println!(
        "  accepted {} steps, rejected {}, {} derivative evaluations, status {:?}",
        sol.naccpt, sol.nrejct, sol.nfev, sol.status
    );
    let h_min_used = sol.h[1..].iter().cloned().fold(Float::INFINITY, Float::min);
    let h_max_used = sol.h[1..].iter().cloned().fold(0.0, Float::max);
    println!("  step sizes used: {h_min_used:.2e} ..= {h_max_used:.2e} s");

    // Print roughly one sample per ten seconds.
    println!("       t [s]    soc [-]    u1 [V]    u2 [V]   u_term [V]");
    let mut next_print = 0.0;
    for (t, y) in sol.trajectory.iter() {
        if t >= next_print {
            println!(
                "  {t:>10.3}  {:>9.5}  {:>8.5}  {:>8.5}  {:>10.5}",
                y[0],
                y[1],
                y[2],
                battery.terminal_voltage(t, y),
            );
            next_print += 10.0;
        }
    }

    let (t_last, y_last) = sol.trajectory.last().expect("trajectory is never empty");
    println!(
        "Final state at t = {t_last:.1} s: soc = {:.5}, terminal voltage = {:.4} V",
        y_last[0],
        battery.terminal_voltage(t_last, y_last),
    );

    Ok(())
}
