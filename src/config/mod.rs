//! Reading simulation settings from a `.toml` file, any value that is not
//! given falls back to the defaults of the corresponding parameters.
//!
//! ```toml
//! [neuron]
//! dt = 0.01
//! g_l = 0.3
//!
//! [neuron.gaussian]
//! std = 0.1
//!
//! [simulation]
//! iterations = 90000
//! gaussian = true
//! output = "hodgkin_huxley"
//! baseline = 0.0
//!
//! [[simulation.steps]]
//! onset = 10000
//! amplitude = 10
//!
//! [fi_curve]
//! total_time = 1000
//! num_levels = 10
//! ```

use toml::{from_str, Value};
use crate::error::ConfigurationError;
use crate::fi_curve::FICurveParameters;
use crate::neuron::{
    hodgkin_huxley::NeuronParameters,
    iterate_and_spike::GaussianParameters,
};
use crate::stimulus::{StepChange, StepCurrent};


fn invalid(key: &str, expected: &'static str) -> ConfigurationError {
    ConfigurationError::InvalidValue { key: key.to_string(), expected }
}

pub fn parse_bool(value: &Value, field_name: &str) -> Result<bool, ConfigurationError> {
    value
        .as_bool()
        .ok_or_else(|| invalid(field_name, "boolean"))
}

pub fn parse_usize(value: &Value, field_name: &str) -> Result<usize, ConfigurationError> {
    value
        .as_integer()
        .filter(|v| *v >= 0)
        .ok_or_else(|| invalid(field_name, "unsigned integer"))
        .map(|v| v as usize)
}

/// Parses a float, integers are converted
pub fn parse_f64(value: &Value, field_name: &str) -> Result<f64, ConfigurationError> {
    value
        .as_float()
        .or_else(|| value.as_integer().map(|v| v as f64))
        .ok_or_else(|| invalid(field_name, "float"))
}

pub fn parse_string(value: &Value, field_name: &str) -> Result<String, ConfigurationError> {
    value
        .as_str()
        .ok_or_else(|| invalid(field_name, "string"))
        .map(String::from)
}

pub fn parse_value_with_default<T>(
    table: &Value,
    key: &str,
    parser: impl Fn(&Value, &str) -> Result<T, ConfigurationError>,
    default: T,
) -> Result<T, ConfigurationError> {
    table
        .get(key)
        .map_or(Ok(default), |value| parser(value, key))
}

/// Settings of the main simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSettings {
    pub iterations: usize,
    /// Scale the input with gaussian noise
    pub gaussian: bool,
    /// Prefix of the output files
    pub output: String,
    pub stimulus: StepCurrent,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            iterations: 90_000,
            gaussian: false,
            output: String::from("hodgkin_huxley"),
            stimulus: StepCurrent::default(),
        }
    }
}

/// Everything needed to run a main simulation followed by a frequency-current sweep
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub neuron: NeuronParameters,
    /// Spike threshold of the main simulation (mV)
    pub v_th: f64,
    pub gaussian_params: GaussianParameters,
    pub simulation: SimulationSettings,
    /// Run the sweep after the main simulation
    pub fi_curve_enabled: bool,
    pub fi_curve: FICurveParameters,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            neuron: NeuronParameters::default(),
            v_th: 0.,
            gaussian_params: GaussianParameters::default(),
            simulation: SimulationSettings::default(),
            fi_curve_enabled: true,
            fi_curve: FICurveParameters::default(),
        }
    }
}

fn get_neuron_parameters(table: &Value) -> Result<NeuronParameters, ConfigurationError> {
    let mut params = NeuronParameters::default();

    params.dt = parse_value_with_default(table, "dt", parse_f64, params.dt)?;
    params.c_m = parse_value_with_default(table, "c_m", parse_f64, params.c_m)?;
    params.g_na = parse_value_with_default(table, "g_na", parse_f64, params.g_na)?;
    params.g_k = parse_value_with_default(table, "g_k", parse_f64, params.g_k)?;
    params.g_l = parse_value_with_default(table, "g_l", parse_f64, params.g_l)?;
    params.e_na = parse_value_with_default(table, "e_na", parse_f64, params.e_na)?;
    params.e_k = parse_value_with_default(table, "e_k", parse_f64, params.e_k)?;
    params.e_l = parse_value_with_default(table, "e_l", parse_f64, params.e_l)?;

    params.validate()?;

    Ok(params)
}

fn get_gaussian_parameters(table: &Value) -> Result<GaussianParameters, ConfigurationError> {
    let mut params = GaussianParameters::default();

    params.mean = parse_value_with_default(table, "mean", parse_f64, params.mean)?;
    params.std = parse_value_with_default(table, "std", parse_f64, params.std)?;
    params.min = parse_value_with_default(table, "min", parse_f64, params.min)?;
    params.max = parse_value_with_default(table, "max", parse_f64, params.max)?;

    Ok(params)
}

fn get_stimulus(table: &Value) -> Result<StepCurrent, ConfigurationError> {
    let default_stimulus = StepCurrent::default();

    let steps = match table.get("steps") {
        Some(steps) => steps,
        None => {
            let baseline = parse_value_with_default(table, "baseline", parse_f64, default_stimulus.baseline)?;
            return Ok(StepCurrent { baseline, ..default_stimulus });
        }
    };

    let steps = steps.as_array().ok_or_else(|| invalid("steps", "array of tables"))?;
    let changes = steps.iter()
        .map(|step| -> Result<StepChange, ConfigurationError> {
            let onset = step.get("onset")
                .ok_or_else(|| invalid("onset", "unsigned integer"))
                .and_then(|value| parse_usize(value, "onset"))?;
            let amplitude = step.get("amplitude")
                .ok_or_else(|| invalid("amplitude", "float"))
                .and_then(|value| parse_f64(value, "amplitude"))?;

            Ok(StepChange { onset, amplitude })
        })
        .collect::<Result<Vec<StepChange>, ConfigurationError>>()?;

    let baseline = parse_value_with_default(table, "baseline", parse_f64, 0.)?;

    Ok(StepCurrent::new(baseline, changes))
}

fn get_simulation_settings(table: &Value, dt: f64) -> Result<SimulationSettings, ConfigurationError> {
    let default_settings = SimulationSettings::default();

    // in ms
    let total_time: Option<f64> = table.get("total_time")
        .map(|value| parse_f64(value, "total_time"))
        .transpose()?;

    let iterations: usize = match (table.get("iterations"), total_time) {
        (Some(_), Some(_)) => { return Err(ConfigurationError::ConflictingKeys("iterations", "total_time")); },
        (Some(value), None) => parse_usize(value, "iterations")?,
        (None, Some(total_time_value)) => {
            if !(total_time_value > 0.) {
                return Err(ConfigurationError::NonPositiveDuration(total_time_value));
            }
            (total_time_value / dt) as usize
        },
        (None, None) => default_settings.iterations,
    };

    Ok(SimulationSettings {
        iterations,
        gaussian: parse_value_with_default(table, "gaussian", parse_bool, default_settings.gaussian)?,
        output: parse_value_with_default(table, "output", parse_string, default_settings.output)?,
        stimulus: get_stimulus(table)?,
    })
}

fn get_fi_curve_parameters(table: &Value) -> Result<FICurveParameters, ConfigurationError> {
    let mut params = FICurveParameters::default();

    params.dt = parse_value_with_default(table, "dt", parse_f64, params.dt)?;
    params.total_time = parse_value_with_default(table, "total_time", parse_f64, params.total_time)?;
    params.min_current = parse_value_with_default(table, "min_current", parse_f64, params.min_current)?;
    params.max_current = parse_value_with_default(table, "max_current", parse_f64, params.max_current)?;
    params.num_levels = parse_value_with_default(table, "num_levels", parse_usize, params.num_levels)?;
    params.transient_steps = parse_value_with_default(
        table, "transient_steps", parse_usize, params.transient_steps
    )?;

    params.validate()?;

    Ok(params)
}

impl Config {
    /// Reads the configuration from the contents of a `.toml` file
    pub fn from_toml_str(toml_content: &str) -> Result<Config, ConfigurationError> {
        let config: Value = from_str(toml_content)
            .map_err(|e| ConfigurationError::InvalidToml(e.to_string()))?;
        let empty = Value::Table(toml::map::Map::new());

        let neuron_table = config.get("neuron").unwrap_or(&empty);
        let neuron = get_neuron_parameters(neuron_table)?;
        let v_th = parse_value_with_default(neuron_table, "v_th", parse_f64, 0.)?;
        let gaussian_params = get_gaussian_parameters(neuron_table.get("gaussian").unwrap_or(&empty))?;

        let simulation = get_simulation_settings(config.get("simulation").unwrap_or(&empty), neuron.dt)?;

        let fi_table = config.get("fi_curve").unwrap_or(&empty);
        let fi_curve_enabled = parse_value_with_default(fi_table, "enabled", parse_bool, true)?;
        let fi_curve = get_fi_curve_parameters(fi_table)?;

        Ok(Config {
            neuron,
            v_th,
            gaussian_params,
            simulation,
            fi_curve_enabled,
            fi_curve,
        })
    }
}
