use std::hint::black_box;
use std::time::Instant;

use log::{debug, info};

use crate::{
    controllers::{
        benchmark::{
            benchmark_config::BenchmarkConfig,
            errors::BenchmarkError,
            report::{BenchmarkReport, RunTiming},
        },
        ports::run_presenter::RunPresenterPort,
    },
    core::{
        actions::generate_fractal::generate_fractal::generate_fractal,
        fractals::mandelbrot::{algorithm::MandelbrotAlgorithm, compute::render},
    },
};

/// Times repeated single-threaded escape grid computations and keeps the
/// fastest.
pub struct BenchmarkController<P: RunPresenterPort> {
    config: BenchmarkConfig,
    presenter: P,
}

impl<P: RunPresenterPort> BenchmarkController<P> {
    pub fn new(config: BenchmarkConfig, presenter: P) -> Result<Self, BenchmarkError> {
        config.validate()?;

        Ok(Self { config, presenter })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn run(&mut self) -> Result<BenchmarkReport, BenchmarkError> {
        let algorithm = self.config.fractal.build_algorithm(self.config.size)?;
        let iterations = self.config.iterations;

        debug!(
            "benchmarking {}x{} grid, cap {}, {} runs",
            self.config.size.width,
            self.config.size.height,
            algorithm.max_iterations(),
            iterations
        );

        self.presenter.begin(&self.config.label, iterations)?;

        let mut runs = Vec::with_capacity(iterations as usize);
        let mut checksum = 0;

        for index in 1..=iterations {
            let start = Instant::now();
            let grid = black_box(render(&algorithm, generate_fractal::<MandelbrotAlgorithm>));
            let duration = start.elapsed();

            checksum = grid.checksum();
            drop(grid);

            let run = RunTiming { index, duration };
            debug!("run {} finished in {:.6}s", index, run.seconds());

            self.presenter.run_completed(&run)?;
            runs.push(run);
        }

        let report = BenchmarkReport::from_runs(self.config.label.as_str(), runs, checksum)
            .ok_or(BenchmarkError::ZeroIterations)?;

        info!(
            "checksum {}, slowest {:.4}s, mean {:.4}s, median {:.4}s",
            report.checksum(),
            report.slowest().as_secs_f64(),
            report.mean().as_secs_f64(),
            report.median().as_secs_f64()
        );

        self.presenter.finish(&report)?;

        Ok(report)
    }
}
