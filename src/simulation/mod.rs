//! Driving a neuron with a current waveform and recording its state over time.

use std::path::Path;
use serde::Serialize;
use crate::error::SimulationError;
use crate::neuron::{
    hodgkin_huxley::HodgkinHuxleyNeuron,
    iterate_and_spike::{GaussianFactor, IterateAndSpike, Timestep},
};
use crate::stimulus::CurrentSource;


/// Time series of input current, voltage, and gating variables of one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationHistory {
    /// Time at the end of each step (ms)
    pub time: Vec<f64>,
    /// Input current applied during each step
    pub current: Vec<f64>,
    /// Membrane potential after each step (mV)
    pub voltage: Vec<f64>,
    pub m: Vec<f64>,
    pub h: Vec<f64>,
    pub n: Vec<f64>,
    /// Steps at which the neuron spiked
    pub spike_times: Vec<usize>,
}

#[derive(Serialize)]
struct HistoryRecord {
    time: f64,
    current: f64,
    voltage: f64,
    m: f64,
    h: f64,
    n: f64,
}

impl SimulationHistory {
    /// Creates an empty history with room for the given number of steps
    pub fn with_capacity(iterations: usize) -> Self {
        SimulationHistory {
            time: Vec::with_capacity(iterations),
            current: Vec::with_capacity(iterations),
            voltage: Vec::with_capacity(iterations),
            m: Vec::with_capacity(iterations),
            h: Vec::with_capacity(iterations),
            n: Vec::with_capacity(iterations),
            spike_times: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.voltage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voltage.is_empty()
    }

    pub fn spike_count(&self) -> usize {
        self.spike_times.len()
    }

    /// Writes the history as `.csv` with a `time,current,voltage,m,h,n` header
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), SimulationError> {
        let mut writer = csv::Writer::from_path(path)?;

        for i in 0..self.len() {
            writer.serialize(HistoryRecord {
                time: self.time[i],
                current: self.current[i],
                voltage: self.voltage[i],
                m: self.m[i],
                h: self.h[i],
                n: self.n[i],
            })?;
        }
        writer.flush()?;

        Ok(())
    }
}

/// Iterates the neuron for the given number of steps with the current supplied
/// by `stimulus`, set `gaussian` to true to scale each input with the neuron's
/// normally distributed noise factor
pub fn run_simulation<S: CurrentSource + ?Sized>(
    neuron: &mut HodgkinHuxleyNeuron,
    stimulus: &S,
    iterations: usize,
    gaussian: bool,
) -> SimulationHistory {
    let mut history = SimulationHistory::with_capacity(iterations);
    let dt = neuron.get_dt();
    let start = neuron.timestep;

    for step in 0..iterations {
        let input = if gaussian {
            stimulus.current_at(step) * neuron.get_gaussian_factor()
        } else {
            stimulus.current_at(step)
        };

        if neuron.iterate_and_spike(input) {
            history.spike_times.push(step);
        }
        let state = neuron.state();

        history.time.push((start + step + 1) as f64 * dt);
        history.current.push(input);
        history.voltage.push(state.v);
        history.m.push(state.m);
        history.h.push(state.h);
        history.n.push(state.n);
    }

    if history.voltage.last().is_some_and(|v| !v.is_finite()) {
        log::warn!("Membrane potential is no longer finite, timestep {} may be too large", dt);
    }
    log::debug!("Ran {} iterations with {} spikes", iterations, history.spike_count());

    history
}
