use crate::utils::error::Result;

/// Text-output boundary for human-readable status lines. The console is the
/// production sink; tests substitute a recording sink to observe the exact
/// line sequence.
pub trait StatusSink {
    fn status(&self, line: &str);
}

/// The old-shape payment capability that callers program against.
/// Amounts are rubles. Non-positive amounts are rejected.
pub trait PaymentProcessor {
    fn process_payment(&self, amount: f64) -> Result<()>;
}

pub trait DemoConfig {
    fn payment_amount(&self) -> f64;
}
