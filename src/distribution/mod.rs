//! A tool to generate and clamp noise.

use rand_distr::{Normal, Distribution};


/// Calculates the normal distribution at the given mean and standard deviation and clamps
/// the output value between the given minimum and maximum, if standard deviation is `0.`
/// (or not a valid standard deviation) the mean is always returned
pub fn limited_distr(mean: f64, std: f64, minimum: f64, maximum: f64) -> f64 {
    if std == 0.0 {
        return mean;
    }

    let normal = match Normal::new(mean, std) {
        Ok(normal) => normal,
        Err(_) => return mean,
    };
    let output: f64 = normal.sample(&mut rand::thread_rng());

    output.max(minimum).min(maximum)
}

#[cfg(test)]
mod test {
    use super::limited_distr;

    #[test]
    fn test_zero_std_returns_mean() {
        for _ in 0..100 {
            assert_eq!(limited_distr(1., 0., 0., 2.), 1.);
        }
    }

    #[test]
    fn test_output_is_clamped() {
        for _ in 0..1000 {
            let output = limited_distr(1., 5., 0.5, 1.5);
            assert!((0.5..=1.5).contains(&output));
        }
    }
}
