pub mod benchmark;
pub mod ports;
