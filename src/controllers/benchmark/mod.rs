pub mod benchmark_config;
pub mod controller;
pub mod errors;
pub mod report;
