use approx::assert_relative_eq;

use super::{
    Action, Config, DEFAULT_MAX_STEPS, Error, Event, Input, MAX_TOLERANCE, Solution, Status,
    solve, solve_unobserved,
};

/// Checks the structural guarantees every successful solve must satisfy.
fn assert_consistent(solution: &Solution) {
    let Input { k, x0, y0, h, .. } = solution.input;

    assert_eq!(solution.steps.len(), solution.errors.len());

    for (i, (step, record)) in solution.steps.iter().zip(&solution.errors).enumerate() {
        assert_eq!(step.index, i);
        assert_eq!(step.slope, k * step.y);
        assert_eq!(step.delta_y, step.slope * h);
        assert_eq!(step.y_next, step.y + step.slope * h);

        assert_eq!(record.x, step.x_next);
        assert_eq!(record.numerical_y, step.y_next);
        assert_relative_eq!(
            record.analytical_y,
            y0 * (k * (step.x + h - x0)).exp(),
            max_relative = 1e-12
        );
    }

    for pair in solution.steps.windows(2) {
        assert_relative_eq!(pair[1].x, pair[0].x + h, epsilon = 1e-12);
        assert_eq!(pair[1].x, pair[0].x_next);
        assert_eq!(pair[1].y, pair[0].y_next);
    }
}

#[test]
fn growth_with_two_half_steps() {
    let input = Input::new(0.1, 0.0, 1.0, 1.0, 0.5);

    let solution = solve_unobserved(input, &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps.len(), 2);
    assert_consistent(&solution);

    let first = solution.steps[0];
    assert_eq!(first.index, 0);
    assert_relative_eq!(first.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(first.y, 1.0, epsilon = 1e-12);
    assert_relative_eq!(first.slope, 0.1, epsilon = 1e-12);
    assert_relative_eq!(first.delta_y, 0.05, epsilon = 1e-12);
    assert_relative_eq!(first.y_next, 1.05, epsilon = 1e-12);

    let second = solution.steps[1];
    assert_eq!(second.index, 1);
    assert_relative_eq!(second.x, 0.5, epsilon = 1e-12);
    assert_relative_eq!(second.y, 1.05, epsilon = 1e-12);
    assert_relative_eq!(second.slope, 0.105, epsilon = 1e-12);
    assert_relative_eq!(second.delta_y, 0.0525, epsilon = 1e-12);
    assert_relative_eq!(second.y_next, 1.1025, epsilon = 1e-12);

    let last = solution.errors[1];
    assert_relative_eq!(last.x, 1.0);
    assert_relative_eq!(last.analytical_y, 1.105_17, epsilon = 1e-5);
    assert_relative_eq!(last.absolute_error, 0.002_67, epsilon = 1e-5);
}

#[test]
fn decay_integrated_backward() {
    let input = Input::new(-1.0, 0.0, 1.0, -1.0, -0.5);

    let solution = solve_unobserved(input, &Config::default()).expect("negative h toward target");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps.len(), 2);
    assert_consistent(&solution);

    // Going backward, dy/dx = -y makes y grow: y_next = y·(1 + 0.5).
    let xs: Vec<f64> = solution.steps.iter().map(|s| s.x).collect();
    assert_eq!(xs, vec![0.0, -0.5]);
    assert_relative_eq!(solution.steps[0].y_next, 1.5);
    assert_relative_eq!(solution.steps[1].y_next, 2.25);
    assert_relative_eq!(solution.errors[1].analytical_y, 1.0_f64.exp());
}

#[test]
fn tiny_step_over_long_span_is_rejected() {
    let input = Input::new(0.1, 0.0, 1.0, 1000.0, 1e-9);

    let error = solve_unobserved(input, &Config::default()).expect_err("should refuse");

    assert!(
        matches!(error, Error::TooManySteps { max, projected } if max == DEFAULT_MAX_STEPS && projected > 1e11),
        "unexpected error: {error:?}"
    );
}

#[test]
fn zero_initial_value_leaves_relative_error_undefined() {
    let input = Input::new(0.7, 0.0, 0.0, 2.0, 0.25);

    let solution = solve_unobserved(input, &Config::default()).expect("should solve");

    assert_eq!(solution.steps.len(), 8);
    assert_consistent(&solution);
    for record in &solution.errors {
        assert_eq!(record.analytical_y, 0.0);
        assert_eq!(record.relative_error, None);
        assert_eq!(record.absolute_error, record.numerical_y.abs());
    }
    assert_eq!(solution.summary().max_relative_error, None);
}

#[test]
fn mismatched_direction_is_rejected() {
    let config = Config::default();

    let backward = Input::new(1.0, 0.0, 1.0, 1.0, -0.1);
    assert_eq!(
        solve_unobserved(backward, &config),
        Err(Error::InvalidStepDirection { h: -0.1, span: 1.0 })
    );

    let forward = Input::new(1.0, 0.0, 1.0, -1.0, 0.1);
    assert_eq!(
        solve_unobserved(forward, &config),
        Err(Error::InvalidStepDirection { h: 0.1, span: -1.0 })
    );
}

#[test]
fn zero_step_size_is_rejected() {
    let input = Input::new(1.0, 0.0, 1.0, 1.0, 0.0);
    assert_eq!(
        solve_unobserved(input, &Config::default()),
        Err(Error::ZeroStepSize)
    );
}

#[test]
fn non_finite_inputs_are_rejected() {
    let cases = [
        (Input::new(f64::NAN, 0.0, 1.0, 1.0, 0.1), "k"),
        (Input::new(1.0, f64::INFINITY, 1.0, 1.0, 0.1), "x0"),
        (Input::new(1.0, 0.0, f64::NEG_INFINITY, 1.0, 0.1), "y0"),
        (Input::new(1.0, 0.0, 1.0, f64::NAN, 0.1), "x_target"),
        (Input::new(1.0, 0.0, 1.0, 1.0, f64::INFINITY), "h"),
    ];

    for (input, expected) in cases {
        let error = solve_unobserved(input, &Config::default()).expect_err("should refuse");
        assert!(
            matches!(error, Error::NonFiniteInput { name, .. } if name == expected),
            "expected {expected} to be rejected, got {error:?}"
        );
    }
}

#[test]
fn target_at_start_produces_no_steps() {
    for h in [0.1, -0.1] {
        let input = Input::new(0.5, 2.0, 3.0, 2.0, h);

        let solution = solve_unobserved(input, &Config::default()).expect("degenerate solve");

        assert_eq!(solution.status, Status::Complete);
        assert!(solution.steps.is_empty());
        assert!(solution.errors.is_empty());
        assert_eq!(solution.final_state(), solution.initial());
        assert_eq!(solution.trajectory(), vec![[2.0, 3.0]]);

        let summary = solution.summary();
        assert_eq!(summary.steps, 0);
        assert_relative_eq!(summary.final_y, 3.0);
        assert_relative_eq!(summary.final_analytical_y, 3.0);
        assert_eq!(summary.max_absolute_error, 0.0);
        assert_eq!(summary.max_relative_error, None);
    }
}

#[test]
fn rounding_drift_does_not_add_a_step() {
    let config = Config::default();

    // 0.3 / 0.1 evaluates to 2.9999999999999996.
    let input = Input::new(1.0, 0.0, 1.0, 0.3, 0.1);
    assert_eq!(input.projected_steps(&config), Ok(3));

    // 2.0 / 0.1 is exact; the defaults of the interactive tool.
    let input = Input::new(0.1, 0.0, 1.0, 2.0, 0.1);
    let solution = solve_unobserved(input, &config).expect("should solve");
    assert_eq!(solution.steps.len(), 20);
    assert_relative_eq!(solution.final_state().x, 2.0, epsilon = 1e-12);
    assert_consistent(&solution);
}

#[test]
fn uneven_span_overshoots_by_less_than_one_step() {
    let input = Input::new(0.5, 0.0, 1.0, 1.0, 0.3);

    let solution = solve_unobserved(input, &Config::default()).expect("should solve");

    assert_eq!(solution.steps.len(), 4);
    let last = solution.steps.last().expect("has steps");
    assert!(last.x < 1.0);
    assert!(last.x_next >= 1.0);
    assert!(last.x_next - 1.0 < 0.3);
    assert_consistent(&solution);
}

#[test]
fn initial_record_is_exact() {
    let solution =
        solve_unobserved(Input::new(0.1, 0.0, 1.0, 1.0, 0.5), &Config::default()).expect("solve");
    let record = solution.initial_record();
    assert_eq!((record.x, record.numerical_y, record.analytical_y), (0.0, 1.0, 1.0));
    assert_eq!(record.absolute_error, 0.0);
    assert_eq!(record.relative_error, Some(0.0));

    let zero =
        solve_unobserved(Input::new(0.1, 0.0, 0.0, 1.0, 0.5), &Config::default()).expect("solve");
    assert_eq!(zero.initial_record().relative_error, None);
}

#[test]
fn coarsest_tolerance_still_reaches_the_target() {
    let config = Config::new(DEFAULT_MAX_STEPS, MAX_TOLERANCE).expect("valid config");
    let input = Input::new(1.0, 0.0, 1.0, 1.0, 0.4);

    let solution = solve_unobserved(input, &config).expect("should solve");

    assert_eq!(solution.steps.len(), 3);
    assert!(solution.final_state().x >= 1.0);
    assert_consistent(&solution);
}

#[test]
fn step_below_float_spacing_is_rejected() {
    // Near 1e16 consecutive f64 values are 2 apart, so x would repeat.
    let forward = Input::new(0.0, 1e16, 1.0, 1e16 + 10.0, 1.0);
    assert!(matches!(
        solve_unobserved(forward, &Config::default()),
        Err(Error::StepTooSmall { h, magnitude }) if h == 1.0 && magnitude >= 1e16
    ));

    let backward = Input::new(0.0, -1e16, 1.0, -1e16 - 10.0, -1.0);
    assert!(matches!(
        backward.steps(&Config::default()),
        Err(Error::StepTooSmall { .. })
    ));
}

#[test]
fn small_step_far_from_origin_stays_strictly_monotonic() {
    let input = Input::new(0.0, 1e9, 1.0, 1e9 + 1e-5, 1e-6);

    let solution = solve_unobserved(input, &Config::default()).expect("resolvable step");

    assert!(solution.steps.len() >= 10);
    assert!(solution.steps.windows(2).all(|pair| pair[1].x > pair[0].x));
    assert!(solution.final_state().x >= input.x_target);
}

#[test]
fn step_limit_is_configurable() {
    let input = Input::new(1.0, 0.0, 1.0, 1.0, 0.25);

    let tight = Config::new(3, 1e-9).expect("valid config");
    assert!(matches!(
        solve_unobserved(input, &tight),
        Err(Error::TooManySteps { max: 3, .. })
    ));

    let enough = Config::new(4, 1e-9).expect("valid config");
    let solution = solve_unobserved(input, &enough).expect("exactly at the limit");
    assert_eq!(solution.steps.len(), 4);
}

#[test]
fn solving_twice_gives_identical_results() {
    let input = Input::new(-0.8, 1.0, 5.0, 4.0, 0.07);
    let config = Config::default();

    let first = solve_unobserved(input, &config).expect("should solve");
    let second = solve_unobserved(input, &config).expect("should solve");

    assert_eq!(first, second);
    assert_consistent(&first);
}

#[test]
fn observer_sees_each_step_in_order() {
    let input = Input::new(0.1, 0.0, 1.0, 1.0, 0.25);

    let mut seen = Vec::new();
    let solution = solve(input, &Config::default(), |event: &Event| -> Option<Action> {
        seen.push((event.step.index, event.record.x));
        None
    })
    .expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(seen, vec![(0, 0.25), (1, 0.5), (2, 0.75), (3, 1.0)]);
}

#[test]
fn observer_can_stop_early() {
    let input = Input::new(0.1, 0.0, 1.0, 10.0, 0.1);

    let observer = |event: &Event| (event.step.index >= 2).then_some(Action::StopEarly);
    let solution = solve(input, &Config::default(), observer).expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps.len(), 3);
    assert_eq!(solution.errors.len(), 3);
    assert_consistent(&solution);
}

#[test]
fn steps_replay_from_a_clone() {
    let input = Input::new(2.0, 0.0, 1.0, 1.0, 0.1);
    let steps = input.steps(&Config::default()).expect("valid input");
    let replay = steps.clone();

    assert_eq!(steps.len(), 10);
    assert_eq!(steps.input(), &input);

    let first: Vec<_> = steps.collect();
    let second: Vec<_> = replay.collect();
    assert_eq!(first, second);

    let solution = solve_unobserved(input, &Config::default()).expect("should solve");
    assert_eq!(first, solution.steps);
}

#[test]
fn steps_report_exact_remaining_length() {
    let input = Input::new(1.0, 0.0, 1.0, 1.0, 0.2);
    let mut steps = input.steps(&Config::default()).expect("valid input");

    assert_eq!(steps.len(), 5);
    steps.next();
    steps.next();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps.by_ref().count(), 3);
    assert_eq!(steps.next(), None);
}

#[test]
fn summary_reports_final_state_and_worst_errors() {
    let input = Input::new(1.0, 0.0, 1.0, 1.0, 0.5);

    let summary = solve_unobserved(input, &Config::default())
        .expect("should solve")
        .summary();

    // y: 1 → 1.5 → 2.25; exact: e^0.5, e^1.
    let exact_half = 0.5_f64.exp();
    let exact_one = 1.0_f64.exp();

    assert_eq!(summary.steps, 2);
    assert_relative_eq!(summary.final_x, 1.0);
    assert_relative_eq!(summary.final_y, 2.25);
    assert_relative_eq!(summary.final_analytical_y, exact_one);
    assert_relative_eq!(summary.max_absolute_error, exact_one - 2.25);
    assert_relative_eq!(
        summary.max_relative_error.expect("defined"),
        ((exact_one - 2.25) / exact_one).max((exact_half - 1.5) / exact_half)
    );
    assert_relative_eq!(
        summary.max_relative_error_percent().expect("defined"),
        summary.max_relative_error.expect("defined") * 100.0
    );
}

#[test]
fn smaller_steps_are_more_accurate() {
    let config = Config::default();
    let error_with = |h: f64| {
        solve_unobserved(Input::new(1.0, 0.0, 1.0, 1.0, h), &config)
            .expect("should solve")
            .summary()
            .max_absolute_error
    };

    let coarse = error_with(0.1);
    let fine = error_with(0.01);
    let finer = error_with(0.001);

    assert!(fine < coarse);
    assert!(finer < fine);

    // First-order method: error shrinks roughly in proportion to h.
    assert_relative_eq!(coarse / fine, 10.0, max_relative = 0.1);
}
