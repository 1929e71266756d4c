use std::{env, fs::read_to_string};
use hh_simulation::{
    config::Config,
    error::SimulationError,
    fi_curve::fi_curve,
    neuron::hodgkin_huxley::HodgkinHuxleyNeuron,
    simulation::run_simulation,
};


// Runs a Hodgkin Huxley neuron with a step current protocol and then sweeps
// constant currents to build a frequency-current curve, settings are read
// from the .toml file given as the first argument (defaults are used otherwise),
// outputs are written as .csv files to the working directory
fn main() -> Result<(), SimulationError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let config = match args.get(1) {
        Some(path) => {
            let toml_content = read_to_string(path)?;
            Config::from_toml_str(&toml_content)?
        },
        None => {
            log::info!("No .toml argument file given, using defaults");
            Config::default()
        },
    };
    log::info!("{:#?}", config.neuron);

    let mut neuron = HodgkinHuxleyNeuron::new(config.neuron)?;
    neuron.v_th = config.v_th;
    neuron.gaussian_params = config.gaussian_params;

    let settings = &config.simulation;
    log::info!("iterations: {}", settings.iterations);

    let history = run_simulation(&mut neuron, &settings.stimulus, settings.iterations, settings.gaussian);
    log::info!("spikes: {}", history.spike_count());

    let history_file = format!("{}_history.csv", settings.output);
    history.write_csv(&history_file)?;
    log::info!("Wrote {}", history_file);

    if config.fi_curve_enabled {
        log::info!("{:#?}", config.fi_curve);

        let curve = fi_curve(&config.neuron, &config.fi_curve)?;
        for (current, rate) in &curve.points {
            log::info!("I: {:.3}, f: {} Hz", current, rate);
        }

        let curve_file = format!("{}_fi_curve.csv", settings.output);
        curve.write_csv(&curve_file)?;
        log::info!("Wrote {}", curve_file);
    }

    Ok(())
}
