pub mod request;
pub mod response;

pub use request::{CalculateRequest, LayoutRequest};
pub use response::{CalculateResponse, HealthResponse, LayoutResponse, ShareResponse};
