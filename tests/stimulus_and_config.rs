#[cfg(test)]
mod tests {
    use hh_simulation::{
        config::Config,
        error::{ConfigurationError, SimulationError},
        fi_curve::FICurveParameters,
        neuron::hodgkin_huxley::{HodgkinHuxleyNeuron, NeuronParameters},
        simulation::run_simulation,
        stimulus::{ConstantCurrent, CurrentSource, StepChange, StepCurrent},
    };


    #[test]
    fn test_default_protocol_levels() {
        let stimulus = StepCurrent::default();
        let expected = [0., -10., 0., 10., 0., 20., 0., 30., 0.];

        for (block, level) in expected.iter().enumerate() {
            // changes apply strictly after the onset step
            let first = if block == 0 { 0 } else { block * 10_000 + 1 };
            let last = (block + 1) * 10_000;

            assert_eq!(stimulus.current_at(first), *level);
            assert_eq!(stimulus.current_at(last), *level);
        }
        assert_eq!(stimulus.current_at(89_999), 0.);
    }

    #[test]
    fn test_custom_step_current() {
        let stimulus = StepCurrent::new(
            2.,
            vec![StepChange { onset: 5, amplitude: 3. }, StepChange { onset: 7, amplitude: -1. }],
        );
        let currents: Vec<f64> = (0..10).map(|step| stimulus.current_at(step)).collect();

        assert_eq!(currents, vec![2., 2., 2., 2., 2., 2., 5., 5., 4., 4.]);
    }

    #[test]
    fn test_closures_and_constants_are_sources() -> Result<(), ConfigurationError> {
        let ramp = |step: usize| step as f64 * 0.001;
        assert_eq!(ramp.current_at(1000), 1.);
        assert_eq!(ConstantCurrent(3.).current_at(12345), 3.);

        let mut neuron = HodgkinHuxleyNeuron::new(NeuronParameters::default())?;
        let history = run_simulation(&mut neuron, &ramp, 100, false);
        assert_eq!(history.current[99], 0.099);

        Ok(())
    }

    #[test]
    fn test_empty_config_uses_defaults() -> Result<(), ConfigurationError> {
        let config = Config::from_toml_str("")?;

        assert_eq!(config, Config::default());
        assert_eq!(config.simulation.iterations, 90_000);
        assert_eq!(config.fi_curve, FICurveParameters::default());

        Ok(())
    }

    #[test]
    fn test_shipped_config_matches_defaults() -> Result<(), ConfigurationError> {
        let config = Config::from_toml_str(include_str!("../configs/hodgkin_huxley.toml"))?;

        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_full_config() -> Result<(), ConfigurationError> {
        let toml_content = r#"
            [neuron]
            dt = 0.02
            g_l = 0.5
            e_na = 50
            v_th = -10.0

            [neuron.gaussian]
            std = 0.1
            min = 0.5
            max = 1.5

            [simulation]
            total_time = 100
            gaussian = true
            output = "run"
            baseline = 1.0

            [[simulation.steps]]
            onset = 100
            amplitude = 5

            [[simulation.steps]]
            onset = 200
            amplitude = -5.5

            [fi_curve]
            enabled = false
            num_levels = 4
            max_current = 12
        "#;
        let config = Config::from_toml_str(toml_content)?;

        assert_eq!(config.neuron, NeuronParameters { dt: 0.02, g_l: 0.5, e_na: 50., ..NeuronParameters::default() });
        assert_eq!(config.v_th, -10.);
        assert_eq!(config.gaussian_params.std, 0.1);
        assert_eq!(config.gaussian_params.mean, 1.);
        assert_eq!(config.simulation.iterations, 5000);
        assert!(config.simulation.gaussian);
        assert_eq!(config.simulation.output, "run");
        assert_eq!(
            config.simulation.stimulus,
            StepCurrent::new(
                1.,
                vec![StepChange { onset: 100, amplitude: 5. }, StepChange { onset: 200, amplitude: -5.5 }],
            )
        );
        assert!(!config.fi_curve_enabled);
        assert_eq!(config.fi_curve.num_levels, 4);
        assert_eq!(config.fi_curve.max_current, 12.);
        assert_eq!(config.fi_curve.dt, 0.05);

        Ok(())
    }

    #[test]
    fn test_baseline_without_steps_keeps_default_protocol() -> Result<(), ConfigurationError> {
        let config = Config::from_toml_str("[simulation]\nbaseline = 2.5\n")?;

        assert_eq!(config.simulation.stimulus.baseline, 2.5);
        assert_eq!(config.simulation.stimulus.changes, StepCurrent::default().changes);

        Ok(())
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            Config::from_toml_str("[simulation]\niterations = 10\ntotal_time = 10\n"),
            Err(ConfigurationError::ConflictingKeys("iterations", "total_time"))
        ));
        assert!(matches!(
            Config::from_toml_str("[simulation]\niterations = \"many\"\n"),
            Err(ConfigurationError::InvalidValue { .. })
        ));
        assert!(matches!(
            Config::from_toml_str("[simulation]\niterations = -1\n"),
            Err(ConfigurationError::InvalidValue { .. })
        ));
        assert!(matches!(
            Config::from_toml_str("[neuron]\nc_m = 0\n"),
            Err(ConfigurationError::NonPositiveCapacitance(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[fi_curve]\nnum_levels = 0\n"),
            Err(ConfigurationError::EmptyCurrentSweep)
        ));
        assert!(matches!(
            Config::from_toml_str("[[simulation.steps]]\nonset = 10\n"),
            Err(ConfigurationError::InvalidValue { .. })
        ));
        assert!(matches!(
            Config::from_toml_str("[neuron"),
            Err(ConfigurationError::InvalidToml(_))
        ));
    }

    #[test]
    fn test_invalid_value_names_key() {
        match Config::from_toml_str("[neuron]\ng_k = true\n") {
            Err(err) => assert_eq!(err.to_string(), "Cannot parse 'g_k' as float"),
            Ok(_) => panic!("Boolean conductance should not parse"),
        }
    }

    #[test]
    fn test_write_history_csv() -> Result<(), SimulationError> {
        let mut neuron = HodgkinHuxleyNeuron::new(NeuronParameters::default())?;
        let history = run_simulation(&mut neuron, &ConstantCurrent(10.), 50, false);
        let path = std::env::temp_dir().join("hh_simulation_history_test.csv");

        history.write_csv(&path)?;
        let contents = std::fs::read_to_string(&path)?;
        std::fs::remove_file(&path)?;

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 51);
        assert_eq!(lines[0], "time,current,voltage,m,h,n");

        Ok(())
    }
}
