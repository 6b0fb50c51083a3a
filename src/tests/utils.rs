use rand::Rng;

use crate::{colormap::ScaleParams, ternary::TernaryData};

pub const TEST_SCALE: usize = 12;

/// Names covering sequential, diverging and reversed maps.
pub const TEST_BASES: [&str; 6] = ["viridis_r", "viridis", "magma", "cividis", "rdbu", "turbo_r"];

pub fn rand_params(rng: &mut rand::rngs::ThreadRng) -> ScaleParams {
    ScaleParams::new(
        rng.random_range(0.05..8.0),
        rng.random_range(0.0..=1.0),
        rng.random_range(0.0..=1.0),
    )
}

/// Values drawn from `[low, high)` at every lattice point.
pub fn gen_random_data(scale: usize, low: f64, high: f64) -> TernaryData {
    let mut rng = rand::rng();
    TernaryData::from_fn(scale, |_, _, _| rng.random_range(low..high))
}

/// Only the points whose `i` coordinate is even.
pub fn gen_sparse_data(scale: usize) -> TernaryData {
    let mut rng = rand::rng();
    let mut data = TernaryData::new(scale);
    for (i, j, _) in crate::ternary::simplex_points(scale) {
        if i % 2 == 0 {
            let _ = data.insert(i, j, rng.random_range(0.5..1.0));
        }
    }
    data
}
