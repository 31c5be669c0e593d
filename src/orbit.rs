//! The point classifier.  Iterates `z = z² + c` for a single point on
//! the complex plane and reports whether the orbit escaped, settled
//! into a cycle, or ran out its iteration budget undecided.

use num::Complex;

use config;

/// The verdict for one classified point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OrbitClass {
    /// The orbit's squared magnitude reached 4 at the given (0-based)
    /// iteration; the point is outside the set.
    Escaped {
        /// Iteration index at which the escape radius was exceeded.
        time: usize,
    },
    /// The orbit revisited one of its recent iterates; the point is
    /// inside the set and the cycle is this many iterations long.
    Periodic {
        /// Detected cycle length, in `[1, MAX_PERIOD]`.
        period: usize,
    },
    /// Neither escaped nor cycled within the budget.  Likely on the
    /// boundary, or periodic with a period longer than the detection
    /// window.
    Unresolved,
}

/// The last [`config::MAX_PERIOD`] iterates of one orbit, oldest
/// overwritten first.  Lives for the duration of a single
/// [`classify`] call; the cycle check never needs to look back
/// further than the longest period it can report.
pub struct OrbitHistory {
    entries: [Complex<f64>; config::MAX_PERIOD],
    head: usize,
    len: usize,
}

impl OrbitHistory {
    /// An empty history.
    pub fn new() -> OrbitHistory {
        OrbitHistory {
            entries: [Complex::new(0.0, 0.0); config::MAX_PERIOD],
            head: 0,
            len: 0,
        }
    }

    /// The number of iterates currently held, at most
    /// [`config::MAX_PERIOD`].
    pub fn len(&self) -> usize {
        self.len
    }

    /// True before the first push.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Records an iterate, displacing the oldest entry once the
    /// history is at capacity.
    pub fn push(&mut self, z: Complex<f64>) {
        self.entries[self.head] = z;
        self.head = (self.head + 1) % config::MAX_PERIOD;
        if self.len < config::MAX_PERIOD {
            self.len += 1;
        }
    }

    /// Visits the held iterates newest-first.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &Complex<f64>> {
        let entries = &self.entries;
        let head = self.head;
        (1..=self.len).map(move |k| &entries[(head + config::MAX_PERIOD - k) % config::MAX_PERIOD])
    }

    /// Scans the history newest-first for an entry within
    /// [`config::THRESHOLD`] of `z`, comparing squared magnitudes.
    /// Returns the number of iterations separating the two, which is
    /// the detected cycle length.  Because the scan starts at the
    /// newest entry, the shortest candidate period wins.
    pub fn find_cycle(&self, z: Complex<f64>) -> Option<usize> {
        self.iter_newest_first()
            .position(|&past| (past - z).norm_sqr() <= config::THRESHOLD_SQUARED)
            .map(|k| k + 1)
    }
}

/// Classifies one point of the complex plane.  Pure function of `c`:
/// all state is local, so it is reentrant and safe to call from any
/// number of threads at once.
pub fn classify(c: Complex<f64>) -> OrbitClass {
    let mut z = Complex::new(0.0, 0.0);
    let mut history = OrbitHistory::new();
    for i in 0..config::MAX_ITERATIONS {
        z = z * z + c;
        if z.norm_sqr() >= 4.0 {
            return OrbitClass::Escaped { time: i };
        }
        if let Some(period) = history.find_cycle(z) {
            return OrbitClass::Periodic { period };
        }
        history.push(z);
    }
    OrbitClass::Unresolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::{Distribution, Uniform};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn far_points_escape_immediately() {
        for &c in &[
            Complex::new(3.0, 0.0),
            Complex::new(0.0, -2.5),
            Complex::new(2.0, 2.0),
        ] {
            assert_eq!(classify(c), OrbitClass::Escaped { time: 0 });
        }
    }

    #[test]
    fn origin_is_a_fixed_point() {
        // The orbit of c = 0 never moves, so the very first revisit
        // of the history detects a one-cycle.
        assert_eq!(
            classify(Complex::new(0.0, 0.0)),
            OrbitClass::Periodic { period: 1 }
        );
    }

    #[test]
    fn known_two_cycles() {
        // c = -1 oscillates 0, -1, 0, -1, ...; c = i falls into the
        // two-cycle -1+i, -i after a single step.
        assert_eq!(
            classify(Complex::new(-1.0, 0.0)),
            OrbitClass::Periodic { period: 2 }
        );
        assert_eq!(
            classify(Complex::new(0.0, 1.0)),
            OrbitClass::Periodic { period: 2 }
        );
    }

    #[test]
    fn render_center_does_not_escape() {
        // (-0.75, 0) sits where the main cardioid meets the period-2
        // bulb; convergence is slow but it never escapes.
        match classify(Complex::new(-0.75, 0.0)) {
            OrbitClass::Escaped { .. } => panic!("interior point escaped"),
            _ => {}
        }
    }

    #[test]
    fn detected_periods_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(0x0cb1);
        let ux = Uniform::new(-2.5, 1.0);
        let uy = Uniform::new(-1.0, 1.0);
        for _ in 0..512 {
            let c = Complex::new(ux.sample(&mut rng), uy.sample(&mut rng));
            if let OrbitClass::Periodic { period } = classify(c) {
                assert!(period >= 1 && period <= config::MAX_PERIOD, "period {} for {}", period, c);
            }
        }
    }

    #[test]
    fn history_clamps_at_capacity() {
        let mut history = OrbitHistory::new();
        for i in 0..config::MAX_PERIOD + 5 {
            history.push(Complex::new(i as f64, 0.0));
            assert!(history.len() <= config::MAX_PERIOD);
        }
        assert_eq!(history.len(), config::MAX_PERIOD);
    }

    #[test]
    fn history_displaces_oldest_first() {
        let mut history = OrbitHistory::new();
        for i in 0..config::MAX_PERIOD + 5 {
            history.push(Complex::new(i as f64, 0.0));
        }
        let held: Vec<f64> = history.iter_newest_first().map(|z| z.re).collect();
        // Newest first, and the five oldest entries are gone.
        assert_eq!(held[0], (config::MAX_PERIOD + 4) as f64);
        assert_eq!(held[held.len() - 1], 5.0);
    }

    #[test]
    fn nearest_match_wins() {
        // The same value sits at distances 1 and 3 from the probe;
        // the newest-first scan must report the shorter cycle.
        let mut history = OrbitHistory::new();
        history.push(Complex::new(7.0, 0.0));
        history.push(Complex::new(1.0, 0.0));
        history.push(Complex::new(7.0, 0.0));
        assert_eq!(history.find_cycle(Complex::new(7.0, 0.0)), Some(1));
        assert_eq!(history.find_cycle(Complex::new(1.0, 0.0)), Some(2));
        assert_eq!(history.find_cycle(Complex::new(9.0, 0.0)), None);
    }
}
