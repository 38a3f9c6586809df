use approx::assert_abs_diff_eq;
use odestep::prelude::*;

mod common;
use common::{sho_error, Decay, FailsAfter, StiffDecay, SHO};

const TAU: Float = 2.0 * std::f64::consts::PI;

#[test]
fn oscillator_run_stays_within_the_error_band() {
    let settings = StepControlSettings::default();
    let sol = stepcontrol_midpoint(&SHO, 0.0, TAU, &[1.0, 0.0], 0.1, &settings).unwrap();

    assert_eq!(sol.status, Status::Success);

    // Four parallel sequences of identical length; index 0 is the initial
    // condition with the initial step guess and zero error.
    let len = sol.trajectory.len();
    assert_eq!(sol.h.len(), len);
    assert_eq!(sol.err.len(), len);
    assert_eq!(sol.naccpt, len - 1);
    assert_eq!(sol.h[0], 0.1);
    assert_eq!(sol.err[0], 0.0);

    // Strictly increasing times, never past the end of the interval.
    assert!(sol.trajectory.t.windows(2).all(|w| w[0] < w[1]));
    assert!(sol.trajectory.t.iter().all(|&t| t <= TAU + 1e-12));
    let (t_last, y_last) = sol.trajectory.last().unwrap();
    assert_abs_diff_eq!(t_last, TAU, epsilon = 1e-9);

    // Every accepted step sits inside the tolerance band; the step size stays
    // within its bounds except for the final boundary-clamped step.
    assert!(sol.err[1..].iter().all(|&e| e <= 1.0));
    for &h in &sol.h[1..len - 1] {
        assert!((settings.h_min..=settings.h_max).contains(&h), "h = {h}");
    }
    let h_last = *sol.h.last().unwrap();
    assert!(h_last > 0.0 && h_last <= settings.h_max);

    // The initial guess is far too coarse for these tolerances, so the run
    // must open with rejections; two evaluations per attempted step.
    assert!(sol.nrejct > 0);
    assert_eq!(sol.nfev, 2 * (sol.naccpt + sol.nrejct));

    assert!(sho_error(t_last, y_last) < 1e-4);
}

#[test]
fn decay_run_is_accurate() {
    let sol =
        stepcontrol_midpoint(&Decay, 0.0, 5.0, &[1.0], 0.01, &StepControlSettings::default())
            .unwrap();
    let (t_last, y_last) = sol.trajectory.last().unwrap();
    assert_abs_diff_eq!(t_last, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y_last[0], (-t_last).exp(), epsilon = 1e-4);
}

#[test]
fn growth_is_capped_at_h_max() {
    let settings = StepControlSettings::builder()
        .atol(1e-2)
        .rtol(1e-2)
        .h_max(0.05)
        .build();
    let sol = stepcontrol_midpoint(&Decay, 0.0, 5.0, &[1.0], 1e-3, &settings).unwrap();

    assert_eq!(sol.status, Status::Success);
    assert!(sol.h[1..].iter().all(|&h| h <= 0.05));
    // Loose tolerances leave plenty of headroom: the step must actually reach
    // the cap instead of stalling below it.
    assert!(sol.h[1..].iter().any(|&h| h == 0.05));
}

// A decay rate of 1e6 against a step floor of 1e-4 puts the midpoint rule far
// outside its stability region: every attempt at the floor reports an error
// above the rejection threshold, and the controller must force-accept to keep
// moving. That policy is what guarantees termination here.
#[test]
fn forced_acceptance_at_the_floor_terminates_stiff_runs() {
    let settings = StepControlSettings::default();
    let f = StiffDecay { rate: 1e6 };
    let sol = stepcontrol_midpoint(&f, 0.0, 0.005, &[1.0], 0.1, &settings).unwrap();

    assert_eq!(sol.status, Status::Success);
    let (t_last, _) = sol.trajectory.last().unwrap();
    assert_abs_diff_eq!(t_last, 0.005, epsilon = 1e-9);

    // The initial guess is halved down to the floor, then every accepted step
    // runs at h_min with an out-of-band error. The final step may be clamped
    // to the tiny remaining span, so it is exempt from the error assertion.
    assert!(sol.nrejct >= 5);
    assert!((49..=52).contains(&sol.naccpt), "naccpt = {}", sol.naccpt);
    assert!(sol.h[1..].iter().all(|&h| h <= settings.h_min * (1.0 + 1e-12)));
    let len = sol.err.len();
    assert!(sol.err[1..len - 1].iter().all(|&e| e > 1.0));
}

#[test]
fn step_cap_returns_the_partial_prefix() {
    let settings = StepControlSettings::builder().nmax(10).build();
    let sol = stepcontrol_midpoint(&SHO, 0.0, TAU, &[1.0, 0.0], 0.1, &settings).unwrap();

    assert_eq!(sol.status, Status::NeedLargerNmax);
    assert_eq!(sol.naccpt + sol.nrejct, 10);
    assert_eq!(sol.trajectory.len(), sol.naccpt + 1);
    let (t_last, _) = sol.trajectory.last().unwrap();
    assert!(t_last < TAU);
}

#[test]
fn reversed_endpoints_are_normalized() {
    let settings = StepControlSettings::default();
    let fwd = stepcontrol_midpoint(&SHO, 0.0, TAU, &[1.0, 0.0], 0.1, &settings).unwrap();
    let rev = stepcontrol_midpoint(&SHO, TAU, 0.0, &[1.0, 0.0], 0.1, &settings).unwrap();
    assert_eq!(fwd.trajectory, rev.trajectory);
    assert_eq!(fwd.h, rev.h);
    assert_eq!(fwd.err, rev.err);
}

#[test]
fn arguments_and_settings_are_validated() {
    let ok = StepControlSettings::default();

    assert!(matches!(
        stepcontrol_midpoint(&SHO, 0.0, 1.0, &[1.0, 0.0], 0.0, &ok),
        Err(Error::InvalidStepSize(_))
    ));
    assert!(matches!(
        stepcontrol_midpoint(&SHO, 0.0, 1.0, &[], 0.1, &ok),
        Err(Error::EmptyState)
    ));
    assert!(matches!(
        stepcontrol_midpoint(&SHO, 1.0, 1.0, &[1.0, 0.0], 0.1, &ok),
        Err(Error::EmptyInterval(_))
    ));

    let zero_atol = StepControlSettings::builder().atol(0.0).build();
    assert!(matches!(
        stepcontrol_midpoint(&SHO, 0.0, 1.0, &[1.0, 0.0], 0.1, &zero_atol),
        Err(Error::NonPositiveAbsTol(_))
    ));

    let zero_floor = StepControlSettings::builder().h_min(0.0).build();
    assert!(matches!(
        stepcontrol_midpoint(&SHO, 0.0, 1.0, &[1.0, 0.0], 0.1, &zero_floor),
        Err(Error::InvalidStepBounds { .. })
    ));

    let crossed_bounds = StepControlSettings::builder().h_min(2.0).h_max(1.0).build();
    assert!(matches!(
        stepcontrol_midpoint(&SHO, 0.0, 1.0, &[1.0, 0.0], 0.1, &crossed_bounds),
        Err(Error::InvalidStepBounds { .. })
    ));

    let zero_cap = StepControlSettings::builder().nmax(0).build();
    assert!(matches!(
        stepcontrol_midpoint(&SHO, 0.0, 1.0, &[1.0, 0.0], 0.1, &zero_cap),
        Err(Error::NMaxMustBePositive(0))
    ));
}

#[test]
fn rhs_failure_propagates() {
    let f = FailsAfter { t_fail: 0.5 };
    let res = stepcontrol_midpoint(&f, 0.0, 1.0, &[1.0], 0.1, &StepControlSettings::default());
    assert!(matches!(res, Err(Error::Evaluation { t, .. }) if t >= 0.5));
}
