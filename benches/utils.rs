use rand::Rng;
use ternplot::ternary::TernaryData;

pub const BENCH_SCALES: [usize; 3] = [16, 32, 64];

/// Random values over the whole lattice, inside the default color range.
pub fn random_data(scale: usize) -> TernaryData {
    let mut rng = rand::rng();
    std::hint::black_box(TernaryData::from_fn(scale, |_, _, _| {
        rng.random_range(0.5..1.0)
    }))
}
