use descent_rs::{Dataset, LogProgress, Logistic, Params, Trainer, TrainingConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

const DATA_POINTS: usize = 100;
const NOISE: f64 = 0.1;

fn main() -> descent_rs::Result<()> {
    env_logger::init();

    // points labelled by the side of x0 + x1 - 1 = 0 they fall on, with a few flipped
    let mut rng = StdRng::seed_from_u64(42);
    let data = Dataset::new((0..DATA_POINTS).map(|_| {
        let x: [f32; 2] = [rng.gen_range(-2.0..3.0), rng.gen_range(-2.0..3.0)];
        let mut y = if x[0] + x[1] - 1.0 > 0.0 { 1.0 } else { 0.0 };
        if rng.gen_bool(NOISE) {
            y = 1.0 - y;
        }
        (x, y)
    }))?;
    let mut params = Params::zeros(data.feature_count());

    let config = TrainingConfig::new(0.01, 1000, 1e-6);
    let outcome = Trainer::new(Logistic, config)
        .with_progress(LogProgress)
        .batch(&data, &mut params)?;

    println!(
        "Weights: [{:.4}, {:.4}], bias: {:.4}",
        params.weights()[0],
        params.weights()[1],
        params.bias()
    );
    println!("Cost: {:.6}", outcome.cost);
    println!(
        "Training accuracy: {:.1}%",
        100.0 * Logistic.accuracy(&params, &data, config.threshold)
    );

    Ok(())
}
