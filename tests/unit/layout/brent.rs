use super::*;

fn recording<F>(f: F, seen: &mut Vec<f64>) -> impl FnMut(f64) -> f64 + '_
where
    F: Fn(f64) -> f64 + 'static,
{
    move |x| {
        seen.push(x);
        f(x)
    }
}

#[test]
fn finds_interior_minimum_of_v_shape() {
    let m = minimize(
        Bracket::new(0.0, 50.0, 580.0),
        |x| (x - 290.0).abs(),
        BrentOptions::default(),
    );
    assert!(m.converged);
    assert!((m.x - 290.0).abs() < 0.5, "x={}", m.x);
}

#[test]
fn finds_smooth_minimum_precisely() {
    let m = minimize(
        Bracket::new(-10.0, 0.0, 10.0),
        |x| (x - 3.25) * (x - 3.25) + 1.0,
        BrentOptions::default(),
    );
    assert!(m.converged);
    assert!((m.x - 3.25).abs() < 5e-3);
    assert!((m.value - 1.0).abs() < 1e-4);
}

#[test]
fn boundary_minimum_is_returned_exactly() {
    let m = minimize(
        Bracket::new(0.0, 40.0, 100.0),
        |x| 1000.0 * x + 3.0,
        BrentOptions::default(),
    );
    assert_eq!(m.x, 0.0);
    assert_eq!(m.value, 3.0);

    let m = minimize(
        Bracket::new(0.0, 40.0, 100.0),
        |x| -x,
        BrentOptions::default(),
    );
    assert_eq!(m.x, 100.0);
}

#[test]
fn never_evaluates_outside_bracket() {
    let mut seen = Vec::new();
    let _ = minimize(
        Bracket::new(2.0, -50.0, 8.0),
        recording(|x| (x - 9.5).abs(), &mut seen),
        BrentOptions::default(),
    );
    assert!(!seen.is_empty());
    assert!(seen.iter().all(|&x| (2.0..=8.0).contains(&x)), "{seen:?}");
}

#[test]
fn degenerate_bracket_picks_better_bound() {
    let mut seen = Vec::new();
    let m = minimize(
        Bracket::new(0.0, 10.0, -50.0),
        recording(|x| (x + 50.0).abs(), &mut seen),
        BrentOptions::default(),
    );
    assert_eq!(m.x, -50.0);
    assert_eq!(m.iterations, 0);
    assert_eq!(seen.len(), 2);

    let m = minimize(
        Bracket::new(5.0, 5.0, 5.0),
        |x| x * 2.0,
        BrentOptions::default(),
    );
    assert_eq!(m.x, 5.0);
    assert_eq!(m.value, 10.0);
}

#[test]
fn degenerate_tie_prefers_lower() {
    let m = minimize(
        Bracket::new(3.0, 0.0, 1.0),
        |_| 7.0,
        BrentOptions::default(),
    );
    assert_eq!(m.x, 3.0);
}

#[test]
fn iteration_cap_returns_best_so_far() {
    let opts = BrentOptions {
        tolerance: 1e-12,
        max_iterations: 3,
    };
    let m = minimize(Bracket::new(0.0, 1.0, 1000.0), |x| (x - 612.5).abs(), opts);
    assert!(!m.converged);
    assert_eq!(m.iterations, 3);
    assert!((0.0..=1000.0).contains(&m.x));
    assert!(m.value <= (1.0_f64 - 612.5).abs());
}

#[test]
fn non_finite_guess_starts_mid_bracket() {
    let m = minimize(
        Bracket::new(0.0, f64::NAN, 10.0),
        |x| (x - 7.0).abs(),
        BrentOptions::default(),
    );
    assert!((m.x - 7.0).abs() < 1e-2);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let f = |x: f64| (x - 123.456).abs() + 0.25 * (x - 200.0).max(0.0);
    let a = minimize(Bracket::new(0.0, 10.0, 500.0), f, BrentOptions::default());
    let b = minimize(Bracket::new(0.0, 10.0, 500.0), f, BrentOptions::default());
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.iterations, b.iterations);
}
