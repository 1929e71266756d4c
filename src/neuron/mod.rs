//! The Hodgkin Huxley conductance based neuron model along with the traits
//! used to iterate it and read its state.
//!
//! The model is integrated with a fixed timestep forward Euler scheme, every
//! derivative of a step is calculated from the state before the step.

pub mod hodgkin_huxley;
pub mod iterate_and_spike;
