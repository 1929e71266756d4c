//! Frequency-current analysis, firing rate of the neuron under a
//! range of constant input currents.

use std::path::Path;
use ndarray::Array1;
use rayon::prelude::*;
use serde::Serialize;
use crate::error::{ConfigurationError, SimulationError};
use crate::neuron::hodgkin_huxley::{HodgkinHuxleyNeuron, NeuronParameters, RESTING_VOLTAGE};


/// Settings for a frequency-current sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FICurveParameters {
    /// Timestep used by every trial (ms)
    pub dt: f64,
    /// Duration of each trial (ms)
    pub total_time: f64,
    /// Lowest input current
    pub min_current: f64,
    /// Highest input current
    pub max_current: f64,
    /// Number of evenly spaced current levels between the minimum and maximum
    pub num_levels: usize,
    /// Number of samples at the start of each trial replaced with the resting potential
    pub transient_steps: usize,
}

impl Default for FICurveParameters {
    fn default() -> Self {
        FICurveParameters {
            dt: 0.05,
            total_time: 1000.,
            min_current: 0.,
            max_current: 20.,
            num_levels: 10,
            transient_steps: 200,
        }
    }
}

impl FICurveParameters {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let named = [
            ("dt", self.dt),
            ("total_time", self.total_time),
            ("min_current", self.min_current),
            ("max_current", self.max_current),
        ];
        if let Some((name, _)) = named.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigurationError::NonFiniteParameter(*name));
        }

        if self.dt <= 0. {
            return Err(ConfigurationError::NonPositiveTimestep(self.dt));
        }
        if self.total_time <= 0. {
            return Err(ConfigurationError::NonPositiveDuration(self.total_time));
        }
        if self.num_levels == 0 {
            return Err(ConfigurationError::EmptyCurrentSweep);
        }
        if self.min_current > self.max_current {
            return Err(ConfigurationError::InvalidCurrentRange(self.min_current, self.max_current));
        }

        Ok(())
    }

    /// Number of steps in each trial
    pub fn steps(&self) -> usize {
        (self.total_time / self.dt) as usize
    }

    /// Evenly spaced input currents in increasing order
    pub fn current_levels(&self) -> Vec<f64> {
        Array1::linspace(self.min_current, self.max_current, self.num_levels).to_vec()
    }
}

/// Replaces the first `transient_steps` samples of the trace with `resting_voltage`
pub fn discard_transient(trace: &mut [f64], transient_steps: usize, resting_voltage: f64) {
    let end = transient_steps.min(trace.len());
    trace[..end].fill(resting_voltage);
}

/// Counts the number of times the trace goes from at or above `0.` to below `0.`
/// between consecutive samples
pub fn count_zero_crossings(trace: &[f64]) -> usize {
    trace.windows(2)
        .filter(|pair| pair[0] >= 0. && pair[1] < 0.)
        .count()
}

/// Firing rate (Hz) of a trace recorded over `total_time` (ms), the transient
/// samples are reset before counting
pub fn firing_rate(trace: &mut [f64], fi_params: &FICurveParameters) -> f64 {
    discard_transient(trace, fi_params.transient_steps, RESTING_VOLTAGE);

    count_zero_crossings(trace) as f64 * 1000. / fi_params.total_time
}

/// Runs a fresh neuron at a constant input current and returns its firing rate (Hz),
/// the timestep of `neuron_params` is replaced with the timestep of the sweep
pub fn run_fi_trial(
    neuron_params: &NeuronParameters,
    current: f64,
    fi_params: &FICurveParameters,
) -> Result<f64, ConfigurationError> {
    let mut neuron = HodgkinHuxleyNeuron::new(NeuronParameters { dt: fi_params.dt, ..*neuron_params })?;
    let steps = fi_params.steps();

    let mut trace: Vec<f64> = Vec::with_capacity(steps);
    for _ in 0..steps {
        trace.push(neuron.step(current).v);
    }

    let rate = firing_rate(&mut trace, fi_params);
    log::debug!("current: {}, rate: {} Hz", current, rate);

    Ok(rate)
}

/// Pairs of input current and firing rate (Hz) in increasing current order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FICurve {
    pub points: Vec<(f64, f64)>,
}

#[derive(Serialize)]
struct FICurveRecord {
    current: f64,
    rate: f64,
}

impl FICurve {
    pub fn currents(&self) -> Vec<f64> {
        self.points.iter().map(|(current, _)| *current).collect()
    }

    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|(_, rate)| *rate).collect()
    }

    /// Writes the curve as `.csv` with a `current,rate` header
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), SimulationError> {
        let mut writer = csv::Writer::from_path(path)?;

        for (current, rate) in &self.points {
            writer.serialize(FICurveRecord { current: *current, rate: *rate })?;
        }
        writer.flush()?;

        Ok(())
    }
}

/// Calculates the firing rate at every current level of the sweep, each level is
/// simulated independently in parallel
pub fn fi_curve(
    neuron_params: &NeuronParameters,
    fi_params: &FICurveParameters,
) -> Result<FICurve, ConfigurationError> {
    fi_params.validate()?;
    NeuronParameters { dt: fi_params.dt, ..*neuron_params }.validate()?;

    let points = fi_params.current_levels()
        .into_par_iter()
        .map(|current| {
            run_fi_trial(neuron_params, current, fi_params)
                .map(|rate| (current, rate))
        })
        .collect::<Result<Vec<(f64, f64)>, ConfigurationError>>()?;

    log::info!(
        "F-I sweep over {} levels from {} to {}",
        fi_params.num_levels, fi_params.min_current, fi_params.max_current,
    );

    Ok(FICurve { points })
}
