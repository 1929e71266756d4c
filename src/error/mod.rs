use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for invalid neuron, sweep, or configuration parameters
pub enum ConfigurationError {
    /// Membrane capacitance must be greater than zero
    NonPositiveCapacitance(f64),
    /// Timestep must be greater than zero
    NonPositiveTimestep(f64),
    /// Parameter is NaN or infinite
    NonFiniteParameter(&'static str),
    /// Sweep duration must be greater than zero
    NonPositiveDuration(f64),
    /// Sweep must contain at least one current level
    EmptyCurrentSweep,
    /// Minimum sweep current is greater than maximum sweep current
    InvalidCurrentRange(f64, f64),
    /// Configuration value could not be parsed as the expected type
    InvalidValue { key: String, expected: &'static str },
    /// Two configuration keys cannot be given together
    ConflictingKeys(&'static str, &'static str),
    /// Configuration file is not valid TOML
    InvalidToml(String),
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ConfigurationError::NonPositiveCapacitance(c_m) =>
                write!(f, "Membrane capacitance must be positive, got {}", c_m),
            ConfigurationError::NonPositiveTimestep(dt) =>
                write!(f, "Timestep must be positive, got {}", dt),
            ConfigurationError::NonFiniteParameter(name) =>
                write!(f, "Parameter '{}' must be finite", name),
            ConfigurationError::NonPositiveDuration(total_time) =>
                write!(f, "Sweep duration must be positive, got {}", total_time),
            ConfigurationError::EmptyCurrentSweep =>
                write!(f, "Sweep must contain at least one current level"),
            ConfigurationError::InvalidCurrentRange(min, max) =>
                write!(f, "Minimum current {} is greater than maximum current {}", min, max),
            ConfigurationError::InvalidValue { key, expected } =>
                write!(f, "Cannot parse '{}' as {}", key, expected),
            ConfigurationError::ConflictingKeys(first, second) =>
                write!(f, "Cannot have both '{}' and '{}' argument", first, second),
            ConfigurationError::InvalidToml(msg) =>
                write!(f, "Cannot read config: {}", msg),
        }
    }
}

impl Debug for ConfigurationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
pub enum SimulationError {
    /// Errors related to parameters and configuration
    ConfigurationRelatedError(ConfigurationError),
    /// Errors related to reading configuration or writing output files
    IORelatedError(std::io::Error),
    /// Errors related to writing CSV output
    CSVRelatedError(csv::Error),
}

impl Display for SimulationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            SimulationError::ConfigurationRelatedError(err) => write!(f, "{}", err),
            SimulationError::IORelatedError(err) => write!(f, "{}", err),
            SimulationError::CSVRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for SimulationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl From<ConfigurationError> for SimulationError {
    fn from(err: ConfigurationError) -> SimulationError {
        SimulationError::ConfigurationRelatedError(err)
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> SimulationError {
        SimulationError::IORelatedError(err)
    }
}

impl From<csv::Error> for SimulationError {
    fn from(err: csv::Error) -> SimulationError {
        SimulationError::CSVRelatedError(err)
    }
}
