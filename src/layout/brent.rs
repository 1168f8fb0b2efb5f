//! Bounded one-dimensional minimization (Brent's method).
//!
//! Golden-section steps interleaved with successive parabolic interpolation. The
//! search never leaves `[lower, upper]`, evaluates both bounds so that boundary optima
//! are returned exactly, and stops after a fixed number of iterations.

use std::cmp::Ordering;

/// Golden-section step ratio, `(3 - sqrt(5)) / 2`.
const CGOLD: f64 = 0.381_966_011_250_105;
/// Absolute tolerance floor, protects the relative tolerance near zero.
const ZEPS: f64 = 1.0e-10;

/// Search interval plus a starting point inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bracket {
    /// Smallest admissible argument.
    pub lower: f64,
    /// Initial estimate; clamped into `[lower, upper]`.
    pub guess: f64,
    /// Largest admissible argument.
    pub upper: f64,
}

impl Bracket {
    /// Build a bracket from its bounds and starting point.
    pub fn new(lower: f64, guess: f64, upper: f64) -> Self {
        Self {
            lower,
            guess,
            upper,
        }
    }
}

/// Termination controls for [`minimize`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BrentOptions {
    /// Fractional tolerance on the argument.
    pub tolerance: f64,
    /// Hard cap on iterations.
    pub max_iterations: usize,
}

impl Default for BrentOptions {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-4,
            max_iterations: 100,
        }
    }
}

/// Result of a bounded minimization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Minimum {
    /// Best argument found.
    pub x: f64,
    /// Objective value at `x`.
    pub value: f64,
    /// Iterations spent.
    pub iterations: usize,
    /// `false` when the iteration cap was hit before the tolerance was met.
    pub converged: bool,
}

/// Minimize `objective` over `bracket`.
///
/// A degenerate bracket (`lower >= upper`) evaluates only the two bounds and returns
/// the better one, preferring `lower` on ties.
pub fn minimize<F>(bracket: Bracket, mut objective: F, opts: BrentOptions) -> Minimum
where
    F: FnMut(f64) -> f64,
{
    let Bracket { lower, upper, .. } = bracket;
    if lower.partial_cmp(&upper) != Some(Ordering::Less) {
        return degenerate(lower, upper, objective);
    }

    let f_lower = objective(lower);
    let f_upper = objective(upper);

    let guess = if bracket.guess.is_finite() {
        bracket.guess.clamp(lower, upper)
    } else {
        0.5 * (lower + upper)
    };

    let (mut a, mut b) = (lower, upper);
    let (mut x, mut w, mut v) = (guess, guess, guess);
    let mut fx = objective(x);
    let (mut fw, mut fv) = (fx, fx);
    // `d` is the last step, `e` the step before it
    let (mut d, mut e) = (0.0_f64, 0.0_f64);

    let mut iterations = 0;
    let mut converged = false;
    while iterations < opts.max_iterations {
        let xm = 0.5 * (a + b);
        let tol1 = opts.tolerance * x.abs() + ZEPS;
        let tol2 = 2.0 * tol1;
        if (x - xm).abs() <= tol2 - 0.5 * (b - a) {
            converged = true;
            break;
        }
        iterations += 1;

        let mut golden = true;
        if e.abs() > tol1 {
            let r = (x - w) * (fx - fv);
            let mut q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            let e_prev = e;
            e = d;
            let acceptable =
                p.abs() < (0.5 * q * e_prev).abs() && p > q * (a - x) && p < q * (b - x);
            if acceptable {
                golden = false;
                d = p / q;
                let u = x + d;
                if u - a < tol2 || b - u < tol2 {
                    d = tol1.copysign(xm - x);
                }
            }
        }
        if golden {
            e = if x >= xm { a - x } else { b - x };
            d = CGOLD * e;
        }

        let step = if d.abs() >= tol1 { d } else { tol1.copysign(d) };
        let u = (x + step).clamp(lower, upper);
        let fu = objective(u);

        if fu <= fx {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            (v, w, x) = (w, x, u);
            (fv, fw, fx) = (fw, fx, fu);
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                (v, w) = (w, u);
                (fv, fw) = (fw, fu);
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }
    }

    if !converged {
        tracing::trace!(
            x,
            fx,
            iterations,
            "brent search hit the iteration cap; keeping best point"
        );
    }

    let (x, value) = best_of(&[(x, fx), (lower, f_lower), (upper, f_upper)]);
    Minimum {
        x,
        value,
        iterations,
        converged,
    }
}

fn degenerate<F>(lower: f64, upper: f64, mut objective: F) -> Minimum
where
    F: FnMut(f64) -> f64,
{
    let f_lower = objective(lower);
    let (x, value) = if lower == upper {
        (lower, f_lower)
    } else {
        best_of(&[(lower, f_lower), (upper, objective(upper))])
    };
    Minimum {
        x,
        value,
        iterations: 0,
        converged: true,
    }
}

/// First candidate with the smallest value; NaN values never win.
fn best_of(candidates: &[(f64, f64)]) -> (f64, f64) {
    let mut best = candidates[0];
    for &(x, fx) in &candidates[1..] {
        if fx < best.1 || best.1.is_nan() {
            best = (x, fx);
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/unit/layout/brent.rs"]
mod tests;
