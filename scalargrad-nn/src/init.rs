use crate::activation::Activation;
use rand::Rng;
use rand_distr::StandardNormal;

/// He-normal draw, `N(0, sqrt(2 / fan_in))`.
///
/// Suits relu layers, which zero roughly half of their pre-activations.
pub fn he_normal<R: Rng + ?Sized>(rng: &mut R, fan_in: usize) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    z * (2.0 / fan_in as f64).sqrt()
}

/// Xavier-uniform draw, `U(-1/sqrt(fan_in), 1/sqrt(fan_in))`.
///
/// Suits the saturating activations (tanh, sigmoid), keeping
/// pre-activations inside their responsive range.
pub fn xavier_uniform<R: Rng + ?Sized>(rng: &mut R, fan_in: usize) -> f64 {
    let bound = 1.0 / (fan_in as f64).sqrt();
    rng.gen_range(-bound..=bound)
}

/// Draws one weight for a neuron with the given fan-in, using the scheme
/// matched to its activation.
pub fn init_weight<R: Rng + ?Sized>(rng: &mut R, fan_in: usize, activation: Activation) -> f64 {
    match activation {
        Activation::Relu => he_normal(rng, fan_in),
        Activation::Tanh | Activation::Sigmoid => xavier_uniform(rng, fan_in),
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
