mod calculation;

pub use calculation::CalculationService;
