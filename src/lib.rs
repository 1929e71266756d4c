//! # Hodgkin Huxley Simulation
//!
//! `hh_simulation` integrates the Hodgkin Huxley neuron model, four coupled
//! differential equations for membrane potential and the `m`, `h`, and `n`
//! gating variables, with a fixed timestep forward Euler scheme. It also
//! calculates frequency-current (F-I) curves by counting spikes of fresh neurons
//! held at a range of constant input currents.
//!
//! ## Example Code
//!
//! ### Running a neuron with a step current
//!
//! ```rust
//! use hh_simulation::{
//!     neuron::hodgkin_huxley::{HodgkinHuxleyNeuron, NeuronParameters},
//!     simulation::run_simulation,
//!     stimulus::StepCurrent,
//!     error::ConfigurationError,
//! };
//!
//! fn main() -> Result<(), ConfigurationError> {
//!     let mut neuron = HodgkinHuxleyNeuron::new(NeuronParameters::default())?;
//!     let history = run_simulation(&mut neuron, &StepCurrent::default(), 90_000, false);
//!
//!     assert_eq!(history.len(), 90_000);
//!     println!("spikes: {}", history.spike_count());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Frequency-current curve
//!
//! ```rust
//! use hh_simulation::{
//!     neuron::hodgkin_huxley::NeuronParameters,
//!     fi_curve::{fi_curve, FICurveParameters},
//!     error::ConfigurationError,
//! };
//!
//! fn main() -> Result<(), ConfigurationError> {
//!     let fi_params = FICurveParameters {
//!         total_time: 200.,
//!         num_levels: 3,
//!         ..FICurveParameters::default()
//!     };
//!     let curve = fi_curve(&NeuronParameters::default(), &fi_params)?;
//!
//!     for (current, rate) in curve.points {
//!         println!("{} -> {} Hz", current, rate);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod distribution;
pub mod error;
pub mod fi_curve;
pub mod neuron;
pub mod simulation;
pub mod stimulus;
