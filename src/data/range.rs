// ---------------------------------------------------------------------------
// Payload bounds and the payload range selector
// ---------------------------------------------------------------------------

/// Global payload extent of the loaded table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// Min/max over all payloads, or `None` when there are none.
    pub fn from_payloads(payloads: impl IntoIterator<Item = f64>) -> Option<Self> {
        payloads.into_iter().fold(None, |acc, p| match acc {
            None => Some(PayloadBounds { min: p, max: p }),
            Some(b) => Some(PayloadBounds {
                min: b.min.min(p),
                max: b.max.max(p),
            }),
        })
    }

    /// The range selector's initial value: the whole extent.
    pub fn full_range(self) -> PayloadRange {
        PayloadRange::new(self.min, self.max)
    }

    /// Snap `value` to the nearest allowed stop: `min + k * step`, `max`, or
    /// one of the tick `marks`. Grid stops win ties.
    pub fn snap(self, value: f64, step: f64, marks: &[(f64, String)]) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let grid = if step <= 0.0 || clamped >= self.max {
            clamped
        } else {
            let snapped = self.min + ((clamped - self.min) / step).round() * step;
            // The upper bound stays reachable when the extent is not a
            // multiple of `step`.
            let snapped = snapped.min(self.max);
            if (self.max - clamped).abs() < (snapped - clamped).abs() {
                self.max
            } else {
                snapped
            }
        };

        marks
            .iter()
            .map(|(tick, _)| tick.clamp(self.min, self.max))
            .fold(grid, |best, tick| {
                if (tick - clamped).abs() < (best - clamped).abs() {
                    tick
                } else {
                    best
                }
            })
    }

    /// Evenly spaced tick marks between `min` and `max` (inclusive), labelled
    /// with the truncated integer value. Ticks that truncate to the same
    /// integer collapse into one.
    pub fn slider_marks(self, count: usize) -> Vec<(f64, String)> {
        let mut marks: Vec<(f64, String)> = Vec::with_capacity(count);
        for i in 0..count {
            let value = if count == 1 {
                self.min
            } else {
                self.min + (self.max - self.min) * i as f64 / (count - 1) as f64
            };
            let tick = value.trunc();
            if marks.last().is_some_and(|(last, _)| *last == tick) {
                continue;
            }
            marks.push((tick, format!("{}", tick as i64)));
        }
        marks
    }
}

/// A `(low, high)` payload selection. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_from_payloads() {
        let b = PayloadBounds::from_payloads([3000.0, 500.0, 2000.0]).unwrap();
        assert_eq!(b, PayloadBounds { min: 500.0, max: 3000.0 });
        assert!(PayloadBounds::from_payloads(std::iter::empty()).is_none());
        assert_eq!(b.full_range(), PayloadRange::new(500.0, 3000.0));
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let r = PayloadRange::new(1000.0, 3000.0);
        assert!(r.contains(1000.0));
        assert!(r.contains(3000.0));
        assert!(!r.contains(999.9));
        assert!(!r.contains(3000.1));
    }

    #[test]
    fn marks_match_linear_interpolation() {
        let b = PayloadBounds { min: 0.0, max: 9600.0 };
        let marks = b.slider_marks(5);
        let labels: Vec<&str> = marks.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(labels, ["0", "2400", "4800", "7200", "9600"]);
    }

    #[test]
    fn marks_truncate_fractional_ticks() {
        let b = PayloadBounds { min: 0.0, max: 10.0 };
        let marks = b.slider_marks(4);
        let ticks: Vec<f64> = marks.iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, [0.0, 3.0, 6.0, 10.0]);
    }

    #[test]
    fn degenerate_extent_collapses_marks() {
        let b = PayloadBounds { min: 500.0, max: 500.0 };
        assert_eq!(b.slider_marks(5), vec![(500.0, "500".to_string())]);
        assert!(b.slider_marks(0).is_empty());
    }

    #[test]
    fn snap_steps_from_min_and_keeps_max_reachable() {
        let b = PayloadBounds { min: 500.0, max: 3200.0 };
        assert_eq!(b.snap(1400.0, 1000.0, &[]), 1500.0);
        assert_eq!(b.snap(-10.0, 1000.0, &[]), 500.0);
        assert_eq!(b.snap(3100.0, 1000.0, &[]), 3200.0);
        assert_eq!(b.snap(9000.0, 1000.0, &[]), 3200.0);
        assert_eq!(b.snap(2700.0, 1000.0, &[]), 2500.0);
        // Nearer to max than to the last grid stop.
        assert_eq!(b.snap(2900.0, 1000.0, &[]), 3200.0);
    }

    #[test]
    fn snap_also_stops_on_tick_marks() {
        let b = PayloadBounds { min: 0.0, max: 9600.0 };
        let marks = b.slider_marks(5);
        // Marks at 2400 / 4800 / 7200 sit between the 1000 kg grid stops.
        assert_eq!(b.snap(2450.0, 1000.0, &marks), 2400.0);
        assert_eq!(b.snap(4700.0, 1000.0, &marks), 4800.0);
        assert_eq!(b.snap(7300.0, 1000.0, &marks), 7200.0);
        // Grid stops still win when nearer, and ties.
        assert_eq!(b.snap(2100.0, 1000.0, &marks), 2000.0);
        assert_eq!(b.snap(2200.0, 1000.0, &marks), 2000.0);
        assert_eq!(b.snap(2800.0, 1000.0, &marks), 3000.0);
    }
}
