pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::sink::{ConsoleSink, MemorySink};
pub use config::CliConfig;
pub use core::demo::DemoEngine;
pub use core::payment::{LegacyPaymentSystem, NewPaymentAdapter, NewPaymentService};
pub use core::theater::{Amplifier, HomeTheaterFacade, Projector, Screen};
pub use utils::error::{DemoError, Result};
