use descent_rs::{optimize_scalar, TrainingConfig};

fn main() {
    env_logger::init();

    println!("Minimizing f(x) = (x-3)^2 + 2");
    println!("Expected minimum: x = 3, f(x) = 2\n");

    let f = |x: f32| (x - 3.0) * (x - 3.0) + 2.0;
    let df = |x: f32| 2.0 * (x - 3.0);

    let config = TrainingConfig::new(0.01, 1000, 1e-6);
    match optimize_scalar(f, df, -2.0, &config) {
        Ok(outcome) => println!(
            "Final result: x = {:.6}, f(x) = {:.6} ({:?} after {} iterations)",
            outcome.x,
            f(outcome.x),
            outcome.status,
            outcome.iterations
        ),
        Err(e) => eprintln!("optimisation failed: {e}"),
    }
}
