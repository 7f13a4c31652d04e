use crate::domain::ports::DemoConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "patterns-demo")]
#[command(about = "Console demonstration of the Adapter and Facade patterns")]
pub struct CliConfig {
    /// Payment amount in rubles for the adapter demonstration
    #[arg(long, default_value = "1000")]
    pub amount: f64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl DemoConfig for CliConfig {
    fn payment_amount(&self) -> f64 {
        self.amount
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("amount", self.amount)
    }
}
