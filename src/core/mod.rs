pub mod demo;
pub mod payment;
pub mod theater;

pub use crate::domain::model::{AmplifierState, ProjectorState, ScreenState};
pub use crate::domain::ports::{DemoConfig, PaymentProcessor, StatusSink};
pub use crate::utils::error::Result;
