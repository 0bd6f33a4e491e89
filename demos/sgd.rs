use descent_rs::{Dataset, Linear, LogProgress, Objective, Params, Trainer, TrainingConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

const TRUE_WEIGHTS: [f32; 3] = [2.5, -1.3, 0.8];
const TRUE_BIAS: f32 = 1.2;

fn synthetic(rng: &mut impl Rng, size: usize) -> descent_rs::Result<Dataset<f32>> {
    Dataset::new((0..size).map(|_| {
        let x: [f32; 3] = std::array::from_fn(|_| rng.gen_range(-2.0..2.0));
        let y = TRUE_BIAS
            + TRUE_WEIGHTS.iter().zip(&x).map(|(w, x)| w * x).sum::<f32>()
            + rng.gen_range(-0.1..0.1);
        (x, y)
    }))
}

fn main() -> descent_rs::Result<()> {
    env_logger::init();

    println!("Testing SGD on synthetic linear regression problem");
    println!("True model: y = 2.5*x1 - 1.3*x2 + 0.8*x3 + 1.2 + noise\n");

    let mut rng = StdRng::seed_from_u64(42);
    let data = synthetic(&mut rng, 1000)?;
    let mut params = Params::random(data.feature_count(), &mut rng);

    println!("Initial loss: {:.6}", Linear.cost(&params, &data));
    println!("Initial weights: {}, bias: {:.3}", params.weights(), params.bias());

    let config = TrainingConfig::new(0.01, 100, 1e-6).with_report_every(1);
    let outcome = Trainer::new(Linear, config)
        .with_progress(LogProgress)
        .stochastic(&data, &mut params, &mut rng)?;

    match outcome.converged_at() {
        Some(epoch) => println!("\nConverged at epoch {epoch}"),
        None => println!("\nStopped after {} epochs", outcome.epochs),
    }
    println!("Final loss: {:.6}", outcome.cost);
    println!("Final weights: {:.3}, bias: {:.3}", params.weights(), params.bias());
    println!("Expected weights: [2.500, -1.300, 0.800], bias: 1.200");

    Ok(())
}
