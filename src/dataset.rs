//! Showcase dataset synthesis.
//!
//! Simulates three marketing channels across four quarters: base levels
//! with gentle trends plus small Gaussian noise, so the groups are
//! visually distinct. Deterministic for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::plots::Series;

/// Default seed for the showcase dataset.
pub const DEFAULT_SEED: u64 = 7;

/// Create a small but realistic multi-series dataset.
///
/// Returns the category labels (quarters) and three named series, all of
/// length 4. The same seed always produces the same values.
#[must_use]
pub fn showcase_dataset(seed: u64) -> (Vec<String>, Vec<Series>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let quarters = vec![
        "Q1".to_string(),
        "Q2".to_string(),
        "Q3".to_string(),
        "Q4".to_string(),
    ];

    let web = noisy(&mut rng, &[220.0, 245.0, 270.0, 310.0], 10.0);
    let email = noisy(&mut rng, &[150.0, 165.0, 160.0, 175.0], 8.0);
    let referral = noisy(&mut rng, &[90.0, 110.0, 140.0, 155.0], 6.0);

    let series = vec![
        Series::new("Web Ads", &web),
        Series::new("Email", &email),
        Series::new("Referrals", &referral),
    ];
    (quarters, series)
}

/// Add zero-mean Gaussian noise with the given standard deviation.
fn noisy(rng: &mut StdRng, base: &[f32], std_dev: f32) -> Vec<f32> {
    base.iter().map(|&b| b + gaussian(rng) * std_dev).collect()
}

/// Standard normal sample via the Box-Muller transform.
fn gaussian(rng: &mut StdRng) -> f32 {
    let u1: f32 = rng.gen_range(f32::EPSILON..1.0);
    let u2: f32 = rng.gen_range(0.0..1.0);
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos()
}
