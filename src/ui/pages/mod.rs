pub mod best_crops;
pub mod calculator;

pub use best_crops::BestCropsPage;
pub use calculator::CalculatorPage;
