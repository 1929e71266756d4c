//! The [`IterateAndSpike`] trait for encapsulating basic neuronal and spiking dynamics
//! along with the smaller traits it is built from.

/// Parameters of a clamped normal distribution used to scale input with noise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianParameters {
    /// Mean of distribution
    pub mean: f64,
    /// Standard deviation of distribution
    pub std: f64,
    /// Maximum cutoff value
    pub max: f64,
    /// Minimum cutoff value
    pub min: f64,
}

impl Default for GaussianParameters {
    fn default() -> Self {
        GaussianParameters {
            mean: 1.0, // center of norm distr
            std: 0.0, // std of norm distr
            max: 2.0, // maximum cutoff for norm distr
            min: 0.0, // minimum cutoff for norm distr
        }
    }
}

impl GaussianParameters {
    /// Generates a normally distributed random number clamped between
    /// a minimum and a maximum
    pub fn get_random_number(&self) -> f64 {
        crate::distribution::limited_distr(
            self.mean,
            self.std,
            self.min,
            self.max,
        )
    }
}

/// Gets current voltage (mV) of model
pub trait CurrentVoltage {
    fn get_current_voltage(&self) -> f64;
}

/// Gets the integration timestep (ms) of model
pub trait Timestep {
    fn get_dt(&self) -> f64;
}

/// Gets a normally distributed factor to scale input with
pub trait GaussianFactor {
    fn get_gaussian_factor(&self) -> f64;
}

/// Handles the firing times of the neuron
pub trait LastFiringTime {
    /// Gets the last firing time of the neuron, (`None` if the neuron has not fired yet)
    fn get_last_firing_time(&self) -> Option<usize>;
    /// Sets the last firing time of the neuron, (use `None` to reset)
    fn set_last_firing_time(&mut self, timestep: Option<usize>);
}

/// Handles dynamics of a neuron that can be iterated one timestep at a time
/// and report whether it spiked during that timestep
pub trait IterateAndSpike: CurrentVoltage + Timestep + GaussianFactor + LastFiringTime {
    /// Takes in an input current and returns whether the model is spiking
    /// after the membrane potential is updated
    fn iterate_and_spike(&mut self, input_current: f64) -> bool;
}
