//! Injected current waveforms indexed by simulation step.

/// A deterministic input current defined for every step of a simulation
pub trait CurrentSource {
    /// Input current (uA/cm^2) at the given step
    fn current_at(&self, step: usize) -> f64;
}

/// Current that does not change over time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCurrent(pub f64);

impl CurrentSource for ConstantCurrent {
    fn current_at(&self, _step: usize) -> f64 {
        self.0
    }
}

/// A change in current that applies to every step after `onset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepChange {
    /// Last step before the change takes effect
    pub onset: usize,
    /// Amount added to the current
    pub amplitude: f64,
}

/// Piecewise constant current built from a baseline and a set of step changes
#[derive(Debug, Clone, PartialEq)]
pub struct StepCurrent {
    pub baseline: f64,
    pub changes: Vec<StepChange>,
}

impl Default for StepCurrent {
    /// Alternating pulses of `-10`, `10`, `20`, and `30` separated by
    /// periods at `0`, with a level change every `10000` steps
    fn default() -> Self {
        let amplitudes = [-10., 10., 10., -10., 20., -20., 30., -30.];

        StepCurrent {
            baseline: 0.,
            changes: amplitudes.iter()
                .enumerate()
                .map(|(i, amplitude)| StepChange { onset: (i + 1) * 10_000, amplitude: *amplitude })
                .collect(),
        }
    }
}

impl StepCurrent {
    pub fn new(baseline: f64, changes: Vec<StepChange>) -> Self {
        StepCurrent { baseline, changes }
    }
}

impl CurrentSource for StepCurrent {
    fn current_at(&self, step: usize) -> f64 {
        self.baseline + self.changes.iter()
            .filter(|change| step > change.onset)
            .map(|change| change.amplitude)
            .sum::<f64>()
    }
}

impl<F: Fn(usize) -> f64> CurrentSource for F {
    fn current_at(&self, step: usize) -> f64 {
        self(step)
    }
}
