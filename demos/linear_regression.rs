use descent_rs::{Dataset, Linear, LogProgress, Params, Trainer, TrainingConfig};

const DATA_POINTS: usize = 100;
const SLOPE: f32 = 2.0;
const Y_INTERCEPT: f32 = 1.0;

fn main() -> descent_rs::Result<()> {
    env_logger::init();

    let data = Dataset::new(
        (0..DATA_POINTS).map(|i| ([i as f32], SLOPE * i as f32 + Y_INTERCEPT)),
    )?;
    let mut params = Params::zeros(data.feature_count());

    let config = TrainingConfig::new(0.0001, 1000, 1e-6);
    let outcome = Trainer::new(Linear, config)
        .with_progress(LogProgress)
        .batch(&data, &mut params)?;

    for (i, w) in params.weights().iter().enumerate() {
        println!("Weight {i}: {w:.6}");
    }
    println!("Bias: {:.6}", params.bias());
    println!("Cost: {:.6}", outcome.cost);

    Ok(())
}
