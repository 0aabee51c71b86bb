pub mod input;
pub mod layout;
pub mod result;
pub mod state;

pub use input::{CalculationInput, Reflectances};
pub use layout::{FixtureLayout, FixturePosition};
pub use result::{CalculationResult, LampPlan};
pub use state::{validate_layout_request, CalculatorState, SavedState, MAX_LAYOUT_FIXTURES};
