//! An implementation of a single compartment Hodgkin Huxley neuron integrated
//! with a fixed timestep forward Euler scheme

use super::iterate_and_spike::{
    CurrentVoltage, GaussianFactor, GaussianParameters, IterateAndSpike,
    LastFiringTime, Timestep,
};
use crate::error::ConfigurationError;
use crate::simulation::{run_simulation, SimulationHistory};
use crate::stimulus::ConstantCurrent;


/// Resting membrane potential (mV)
pub const RESTING_VOLTAGE: f64 = -65.0;

/// Fixed biophysical parameters of the neuron
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeuronParameters {
    /// Timestep (ms)
    pub dt: f64,
    /// Membrane capacitance (uF/cm^2)
    pub c_m: f64,
    /// Maximal sodium conductance (mS/cm^2)
    pub g_na: f64,
    /// Maximal potassium conductance (mS/cm^2)
    pub g_k: f64,
    /// Maximal leak conductance (mS/cm^2)
    pub g_l: f64,
    /// Sodium reversal potential (mV)
    pub e_na: f64,
    /// Potassium reversal potential (mV)
    pub e_k: f64,
    /// Leak reversal potential (mV)
    pub e_l: f64,
}

impl Default for NeuronParameters {
    fn default() -> Self {
        NeuronParameters {
            dt: 0.01,
            c_m: 1.0,
            g_na: 120.0,
            g_k: 36.0,
            g_l: 0.3,
            e_na: 55.0,
            e_k: -72.0,
            e_l: -49.387,
        }
    }
}

impl NeuronParameters {
    /// Checks that every parameter is finite and that the capacitance and
    /// timestep are positive
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let named = [
            ("dt", self.dt),
            ("c_m", self.c_m),
            ("g_na", self.g_na),
            ("g_k", self.g_k),
            ("g_l", self.g_l),
            ("e_na", self.e_na),
            ("e_k", self.e_k),
            ("e_l", self.e_l),
        ];
        if let Some((name, _)) = named.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigurationError::NonFiniteParameter(*name));
        }

        if self.c_m <= 0. {
            return Err(ConfigurationError::NonPositiveCapacitance(self.c_m));
        }
        if self.dt <= 0. {
            return Err(ConfigurationError::NonPositiveTimestep(self.dt));
        }

        Ok(())
    }
}

/// Membrane potential and gating probabilities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeuronState {
    /// Membrane potential (mV)
    pub v: f64,
    /// Sodium activation
    pub m: f64,
    /// Sodium inactivation
    pub h: f64,
    /// Potassium activation
    pub n: f64,
}

impl Default for NeuronState {
    fn default() -> Self {
        NeuronState {
            v: RESTING_VOLTAGE,
            m: 0.05,
            h: 0.6,
            n: 0.32,
        }
    }
}

/// Returns `z / (1 - e^-z)`, which tends to `1` as `z` tends to `0`
fn exprel(z: f64) -> f64 {
    if z.abs() < 1e-4 {
        1. + z / 2. + z * z / 12.
    } else {
        z / -(-z).exp_m1()
    }
}

/// Opening and closing rates (1/ms) of each gating variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GatingRates {
    pub alpha_m: f64,
    pub beta_m: f64,
    pub alpha_h: f64,
    pub beta_h: f64,
    pub alpha_n: f64,
    pub beta_n: f64,
}

impl GatingRates {
    /// Evaluates every rate at the given membrane potential (mV), the removable
    /// singularities of `alpha_m` at `-40` mV and `alpha_n` at `-55` mV take
    /// their limiting values
    pub fn at_voltage(v: f64) -> Self {
        GatingRates {
            alpha_m: exprel((v + 40.) / 10.),
            beta_m: 4. * (-(v + 65.) / 18.).exp(),
            alpha_h: 0.07 * (-(v + 65.) / 20.).exp(),
            beta_h: 1. / (1. + (-(v + 35.) / 10.).exp()),
            alpha_n: 0.1 * exprel((v + 55.) / 10.),
            beta_n: 0.125 * (-(v + 65.) / 80.).exp(),
        }
    }
}

/// Sodium, potassium, and leak currents (uA/cm^2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonicCurrents {
    pub i_na: f64,
    pub i_k: f64,
    pub i_leak: f64,
}

impl IonicCurrents {
    /// Sum of all ionic currents
    pub fn total(&self) -> f64 {
        self.i_na + self.i_k + self.i_leak
    }
}

fn gating_change(x: f64, alpha: f64, beta: f64) -> f64 {
    alpha * (1. - x) - beta * x
}

#[derive(Debug, Clone)]
pub struct HodgkinHuxleyNeuron {
    /// Biophysical parameters, fixed after construction
    params: NeuronParameters,
    /// Membrane potential and gating variables
    state: NeuronState,
    /// Voltage that must be crossed downwards to register a spike (mV)
    pub v_th: f64,
    /// Number of steps taken so far
    pub timestep: usize,
    /// Last timestep the neuron has spiked
    pub last_firing_time: Option<usize>,
    /// Whether the neuron spiked during the last step
    pub is_spiking: bool,
    /// Parameters used in generating noise
    pub gaussian_params: GaussianParameters,
}

impl Default for HodgkinHuxleyNeuron {
    fn default() -> Self {
        HodgkinHuxleyNeuron {
            params: NeuronParameters::default(),
            state: NeuronState::default(),
            v_th: 0.,
            timestep: 0,
            last_firing_time: None,
            is_spiking: false,
            gaussian_params: GaussianParameters::default(),
        }
    }
}

impl HodgkinHuxleyNeuron {
    /// Creates a neuron at the resting state, fails if the parameters
    /// would produce a degenerate integration
    pub fn new(params: NeuronParameters) -> Result<Self, ConfigurationError> {
        params.validate()?;

        Ok(HodgkinHuxleyNeuron {
            params,
            ..HodgkinHuxleyNeuron::default()
        })
    }

    /// Returns the default implementation of the neuron
    pub fn default_impl() -> Self {
        HodgkinHuxleyNeuron::default()
    }

    pub fn params(&self) -> &NeuronParameters {
        &self.params
    }

    /// Returns a snapshot of the current state
    pub fn state(&self) -> NeuronState {
        self.state
    }

    /// Evaluates the gating rates at the current membrane potential
    pub fn rate_functions(&self) -> GatingRates {
        GatingRates::at_voltage(self.state.v)
    }

    /// Calculates the ionic currents from the current state
    pub fn ionic_currents(&self) -> IonicCurrents {
        let NeuronState { v, m, h, n } = self.state;

        IonicCurrents {
            i_na: self.params.g_na * m.powi(3) * h * (v - self.params.e_na),
            i_k: self.params.g_k * n.powi(4) * (v - self.params.e_k),
            i_leak: self.params.g_l * (v - self.params.e_l),
        }
    }

    /// Advances the neuron by one timestep given an input current, every derivative
    /// is calculated from the state before the step, returns the state after the step
    pub fn step(&mut self, input_current: f64) -> NeuronState {
        let rates = self.rate_functions();
        let currents = self.ionic_currents();
        let NeuronState { v, m, h, n } = self.state;
        let dt = self.params.dt;

        let dm = gating_change(m, rates.alpha_m, rates.beta_m);
        let dh = gating_change(h, rates.alpha_h, rates.beta_h);
        let dn = gating_change(n, rates.alpha_n, rates.beta_n);
        let dv = (input_current - currents.total()) / self.params.c_m;

        self.state = NeuronState {
            v: v + dv * dt,
            m: m + dm * dt,
            h: h + dh * dt,
            n: n + dn * dt,
        };
        self.timestep += 1;

        self.state
    }

    /// Puts the neuron back at the resting state and clears spike history
    pub fn reset(&mut self) {
        self.state = NeuronState::default();
        self.timestep = 0;
        self.last_firing_time = None;
        self.is_spiking = false;
    }
}

impl CurrentVoltage for HodgkinHuxleyNeuron {
    fn get_current_voltage(&self) -> f64 {
        self.state.v
    }
}

impl Timestep for HodgkinHuxleyNeuron {
    fn get_dt(&self) -> f64 {
        self.params.dt
    }
}

impl GaussianFactor for HodgkinHuxleyNeuron {
    fn get_gaussian_factor(&self) -> f64 {
        self.gaussian_params.get_random_number()
    }
}

impl LastFiringTime for HodgkinHuxleyNeuron {
    fn get_last_firing_time(&self) -> Option<usize> {
        self.last_firing_time
    }

    fn set_last_firing_time(&mut self, timestep: Option<usize>) {
        self.last_firing_time = timestep;
    }
}

impl IterateAndSpike for HodgkinHuxleyNeuron {
    fn iterate_and_spike(&mut self, input_current: f64) -> bool {
        let last_voltage = self.state.v;
        let current_voltage = self.step(input_current).v;

        let is_spiking = last_voltage >= self.v_th && current_voltage < self.v_th;
        if is_spiking {
            self.last_firing_time = Some(self.timestep);
        }
        self.is_spiking = is_spiking;

        is_spiking
    }
}

/// Takes in a static current as an input and iterates the given
/// neuron for a given duration, set `gaussian` to true to add
/// normally distributed noise to the input as it iterates,
/// returns the voltage and gating states over time
pub fn run_static_input_hodgkin_huxley(
    hodgkin_huxley_neuron: &mut HodgkinHuxleyNeuron,
    input: f64,
    gaussian: bool,
    iterations: usize,
) -> SimulationHistory {
    run_simulation(hodgkin_huxley_neuron, &ConstantCurrent(input), iterations, gaussian)
}

#[cfg(test)]
mod test {
    use super::exprel;

    #[test]
    fn test_exprel_is_continuous_at_cutoff() {
        for z in [1e-4, -1e-4] {
            let below = exprel(z * 0.999999);
            let above = exprel(z * 1.000001);
            assert!((below - above).abs() < 1e-9);
        }
    }

    #[test]
    fn test_exprel_matches_direct_formula() {
        for z in [-3., -0.5, 0.25, 2., 10.] {
            let direct = z / (1. - f64::exp(-z));
            assert!((exprel(z) - direct).abs() < 1e-12);
        }
    }
}
