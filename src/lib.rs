pub mod crawlers;
pub mod domain;
pub mod errors;
pub mod models;
pub mod processing;

/// Annual work hours used to turn an hourly rate into yearly pay (40h x 50 weeks).
pub const HOURS_PER_YEAR: f64 = 2000.0;
