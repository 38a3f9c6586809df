//! Adaptive step-size control with an embedded Euler/midpoint pair.
//!
//! The controller advances the solution with the second-order midpoint rule
//! and reuses the same two derivative evaluations to form a first-order Euler
//! prediction. The distance between the two candidates is a cheap local
//! truncation error estimate; the controller rejects and halves the step when
//! the normalized estimate is out of band, and grows the step when the
//! estimate leaves headroom.

use bon::Builder;

use crate::{Error, Float, Interval, ODE, Status, Trajectory};

/// Tuning constants for [`stepcontrol_midpoint`].
///
/// A settings value is plain data; build one per tolerance regime and share
/// it across runs. Defaults follow the controller's standard tuning.
#[derive(Builder, Clone, Debug)]
pub struct StepControlSettings {
    /// Smallest allowed step. Steps at the floor are force-accepted so the
    /// controller always makes progress.
    #[builder(default = 1e-4)]
    pub h_min: Float,
    /// Largest allowed step.
    #[builder(default = 1.0)]
    pub h_max: Float,
    /// Relative tolerance in the error scale `atol + rtol * ||y||`.
    #[builder(default = 1e-8)]
    pub rtol: Float,
    /// Absolute tolerance in the error scale. Must be positive; it keeps the
    /// scale away from zero when the state does.
    #[builder(default = 1e-6)]
    pub atol: Float,
    /// Step multiplier applied on rejection.
    #[builder(default = 0.5)]
    pub shrink: Float,
    /// Step multiplier applied after a comfortable acceptance.
    #[builder(default = 1.2)]
    pub growth: Float,
    /// Accepted steps with a normalized error below this grow the next step.
    #[builder(default = 0.5)]
    pub growth_threshold: Float,
    /// Steps with a normalized error above this are rejected (unless already
    /// at the floor).
    #[builder(default = 1.0)]
    pub rejection_threshold: Float,
    /// Maximum number of attempted steps before giving up with
    /// [`Status::NeedLargerNmax`].
    #[builder(default = 100_000)]
    pub nmax: usize,
}

impl StepControlSettings {
    fn validate(&self) -> Result<(), Error> {
        if self.atol <= 0.0 {
            return Err(Error::NonPositiveAbsTol(self.atol));
        }
        if !(self.h_min > 0.0 && self.h_min <= self.h_max) {
            return Err(Error::InvalidStepBounds {
                h_min: self.h_min,
                h_max: self.h_max,
            });
        }
        if self.nmax == 0 {
            return Err(Error::NMaxMustBePositive(self.nmax));
        }
        Ok(())
    }
}

impl Default for StepControlSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// The output of an adaptive integration run.
///
/// `trajectory`, `h`, and `err` are parallel: index `i` describes the
/// transition that produced sample `i`. Index 0 is the initial condition,
/// recorded with the initial step guess and an error of zero.
#[derive(Debug, Clone)]
pub struct StepControlSolution {
    /// Accepted samples.
    pub trajectory: Trajectory,
    /// Step size actually used for each accepted transition.
    pub h: Vec<Float>,
    /// Normalized error estimate of each accepted transition. Values above
    /// the rejection threshold mark steps force-accepted at the floor.
    pub err: Vec<Float>,
    /// Number of derivative evaluations.
    pub nfev: usize,
    /// Number of accepted steps.
    pub naccpt: usize,
    /// Number of rejected steps.
    pub nrejct: usize,
    /// How the run terminated.
    pub status: Status,
}

/// Integrate `f` from the initial state with automatic step-size control.
///
/// Per attempted step, with state `(t, y, h)`:
///
/// 1. Clamp `h` to the remaining span so the step never overshoots the end.
/// 2. Form the embedded pair from the same two evaluations:
///    `k1 = f(t, y)`, `k2 = f(t + h/2, y + h/2 * k1)`, giving the Euler
///    candidate `y + h*k1` and the midpoint candidate `y + h*k2`.
/// 3. Normalize the candidate distance by the mixed tolerance band and the
///    state dimension: `err = ||diff|| / (atol + rtol * ||y_mpr||) / sqrt(n)`.
/// 4. Reject when `err` exceeds the rejection threshold and `h` is still
///    above the floor: halve `h` (floored at `h_min`) and retry from the same
///    state, recording nothing.
/// 5. Accept otherwise, advancing to the midpoint candidate. A step at the
///    floor is accepted regardless of its error, so the controller always
///    terminates; such samples are visible in [`StepControlSolution::err`]
///    as values above the threshold. After a comfortable acceptance the next
///    step grows by the growth factor, capped at `h_max`.
///
/// `h0` is only an initial guess; the recorded step sizes are the ones
/// actually used.
pub fn stepcontrol_midpoint<F>(
    f: &F,
    t0: Float,
    tend: Float,
    y0: &[Float],
    h0: Float,
    settings: &StepControlSettings,
) -> Result<StepControlSolution, Error>
where
    F: ODE,
{
    let span = Interval::new(t0, tend)?;
    if h0 <= 0.0 {
        return Err(Error::InvalidStepSize(h0));
    }
    if y0.is_empty() {
        return Err(Error::EmptyState);
    }
    settings.validate()?;

    let n = y0.len();
    let mut t = span.start();
    let mut y = y0.to_vec();
    let mut h = h0;

    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut yt = vec![0.0; n];
    let mut y_ee = vec![0.0; n];
    let mut y_mpr = vec![0.0; n];

    let mut trajectory = Trajectory::new();
    trajectory.push(t, y.clone());
    let mut h_used = vec![h0];
    let mut err_norm = vec![0.0];

    let mut nfev = 0;
    let mut naccpt = 0;
    let mut nrejct = 0;
    let mut status = Status::Success;

    while t < span.end() {
        if naccpt + nrejct >= settings.nmax {
            status = Status::NeedLargerNmax;
            break;
        }

        // Do not overshoot the end of the interval.
        h = h.min(span.end() - t);

        f.ode(t, &y, &mut k1).map_err(|e| Error::evaluation(t, e))?;
        for j in 0..n {
            yt[j] = y[j] + 0.5 * h * k1[j];
        }
        let tm = t + 0.5 * h;
        f.ode(tm, &yt, &mut k2)
            .map_err(|e| Error::evaluation(tm, e))?;
        nfev += 2;

        for j in 0..n {
            y_ee[j] = y[j] + h * k1[j];
            y_mpr[j] = y[j] + h * k2[j];
        }

        // RMS-normalized error estimate in the mixed tolerance band.
        let mut diff_sq = 0.0;
        let mut norm_sq = 0.0;
        for j in 0..n {
            diff_sq += (y_mpr[j] - y_ee[j]).powi(2);
            norm_sq += y_mpr[j].powi(2);
        }
        let scale = settings.atol + settings.rtol * norm_sq.sqrt();
        let err = diff_sq.sqrt() / scale / (n as Float).sqrt();

        if err > settings.rejection_threshold && h > settings.h_min {
            // Step rejected: shrink and retry from the same state.
            nrejct += 1;
            h = (h * settings.shrink).max(settings.h_min);
            continue;
        }

        // Step accepted. At the floor this happens regardless of the error.
        t += h;
        y.copy_from_slice(&y_mpr);
        naccpt += 1;

        trajectory.push(t, y.clone());
        h_used.push(h);
        err_norm.push(err);

        if err < settings.growth_threshold {
            h = (h * settings.growth).min(settings.h_max);
        }
    }

    Ok(StepControlSolution {
        trajectory,
        h: h_used,
        err: err_norm,
        nfev,
        naccpt,
        nrejct,
        status,
    })
}
