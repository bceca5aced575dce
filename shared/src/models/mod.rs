//! Request and response records exchanged with the prediction service

mod crop;
mod fertilizer;
mod service;
mod yield_estimation;

pub use crop::*;
pub use fertilizer::*;
pub use service::*;
pub use yield_estimation::*;
