#[cfg(test)]
mod tests {
    use hh_simulation::neuron::hodgkin_huxley::{
        GatingRates, HodgkinHuxleyNeuron, NeuronParameters,
    };


    fn naive_alpha_m(v: f64) -> f64 {
        0.1 * (v + 40.) / (1. - (-(v + 40.) / 10.).exp())
    }

    fn naive_alpha_n(v: f64) -> f64 {
        0.01 * (v + 55.) / (1. - (-(v + 55.) / 10.).exp())
    }

    #[test]
    fn test_alpha_m_limit_at_singularity() {
        let rates = GatingRates::at_voltage(-40.);

        assert!(naive_alpha_m(-40.).is_nan());
        assert_eq!(rates.alpha_m, 1.);
    }

    #[test]
    fn test_alpha_n_limit_at_singularity() {
        let rates = GatingRates::at_voltage(-55.);

        assert!(naive_alpha_n(-55.).is_nan());
        assert!((rates.alpha_n - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_rates_finite_around_singularities() {
        for center in [-40., -55.] {
            for offset in [-1e-3, -1e-6, -1e-10, 0., 1e-10, 1e-6, 1e-3] {
                let rates = GatingRates::at_voltage(center + offset);

                assert!(rates.alpha_m.is_finite());
                assert!(rates.alpha_n.is_finite());
            }
        }
    }

    #[test]
    fn test_rates_continuous_across_singularities() {
        let below = GatingRates::at_voltage(-40. - 1e-6);
        let at = GatingRates::at_voltage(-40.);
        let above = GatingRates::at_voltage(-40. + 1e-6);
        assert!((below.alpha_m - at.alpha_m).abs() < 1e-6);
        assert!((above.alpha_m - at.alpha_m).abs() < 1e-6);

        let below = GatingRates::at_voltage(-55. - 1e-6);
        let at = GatingRates::at_voltage(-55.);
        let above = GatingRates::at_voltage(-55. + 1e-6);
        assert!((below.alpha_n - at.alpha_n).abs() < 1e-7);
        assert!((above.alpha_n - at.alpha_n).abs() < 1e-7);
    }

    #[test]
    fn test_rates_match_closed_form_away_from_singularities() {
        for v in [-80., -65., -30., 0., 20.] {
            let rates = GatingRates::at_voltage(v);

            assert!((rates.alpha_m - naive_alpha_m(v)).abs() < 1e-12);
            assert!((rates.alpha_n - naive_alpha_n(v)).abs() < 1e-12);
            assert!((rates.beta_m - 4. * (-(v + 65.) / 18.).exp()).abs() < 1e-12);
            assert!((rates.alpha_h - 0.07 * (-(v + 65.) / 20.).exp()).abs() < 1e-12);
            assert!((rates.beta_h - 1. / (1. + (-(v + 35.) / 10.).exp())).abs() < 1e-12);
            assert!((rates.beta_n - 0.125 * (-(v + 65.) / 80.).exp()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_neuron_rates_use_current_voltage() {
        let neuron = HodgkinHuxleyNeuron::new(NeuronParameters::default())
            .expect("Default parameters should be valid");

        assert_eq!(neuron.rate_functions(), GatingRates::at_voltage(-65.));
    }
}
