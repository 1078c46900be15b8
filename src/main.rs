use mandelbrot_bench::{BenchmarkConfig, BenchmarkController, ConsolePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let presenter = ConsolePresenter::stdout();
    let mut controller = BenchmarkController::new(BenchmarkConfig::default(), presenter)?;

    controller.run()?;

    Ok(())
}
