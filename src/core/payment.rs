use crate::core::{PaymentProcessor, Result, StatusSink};
use crate::utils::validation::validate_payment_amount;

/// Fixed conversion rate used by the adapter: rubles per US dollar.
pub const RUB_PER_USD: f64 = 75.0;

const USD_CODE: &str = "USD";

/// The payment system callers have always used. Takes rubles directly.
pub struct LegacyPaymentSystem<S: StatusSink> {
    sink: S,
}

impl<S: StatusSink> LegacyPaymentSystem<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S: StatusSink> PaymentProcessor for LegacyPaymentSystem<S> {
    fn process_payment(&self, amount: f64) -> Result<()> {
        validate_payment_amount(amount)?;
        tracing::debug!(amount, "legacy payment");
        self.sink
            .status(&format!("Paid {} RUB via the legacy system", amount));
        Ok(())
    }
}

/// The replacement provider. Its interface is shaped differently from
/// `PaymentProcessor`: it wants an explicit currency code.
pub struct NewPaymentService<S: StatusSink> {
    sink: S,
}

impl<S: StatusSink> NewPaymentService<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Fire-and-forget: no return value, observable only through the sink.
    pub fn pay(&self, amount: f64, currency: &str) {
        tracing::debug!(amount, currency, "new provider payment");
        self.sink
            .status(&format!("Paid {:.2} {} via the new provider", amount, currency));
    }
}

/// Adapter: presents the old `PaymentProcessor` shape while delegating to
/// the wrapped `NewPaymentService`, converting rubles to dollars on the way.
pub struct NewPaymentAdapter<S: StatusSink> {
    service: NewPaymentService<S>,
}

impl<S: StatusSink> NewPaymentAdapter<S> {
    pub fn new(service: NewPaymentService<S>) -> Self {
        Self { service }
    }
}

impl<S: StatusSink> PaymentProcessor for NewPaymentAdapter<S> {
    fn process_payment(&self, amount: f64) -> Result<()> {
        validate_payment_amount(amount)?;
        self.service.pay(amount / RUB_PER_USD, USD_CODE);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;
    use crate::utils::error::DemoError;

    #[test]
    fn test_legacy_payment_emits_single_line() {
        let sink = MemorySink::new();
        let legacy = LegacyPaymentSystem::new(sink.clone());

        legacy.process_payment(1000.0).unwrap();

        assert_eq!(sink.lines(), vec!["Paid 1000 RUB via the legacy system"]);
    }

    #[test]
    fn test_adapter_converts_rubles_to_usd() {
        let sink = MemorySink::new();
        let adapter = NewPaymentAdapter::new(NewPaymentService::new(sink.clone()));

        adapter.process_payment(1000.0).unwrap();

        // 1000 / 75 = 13.333...
        assert_eq!(sink.lines(), vec!["Paid 13.33 USD via the new provider"]);
    }

    #[test]
    fn test_adapter_delegates_exactly_once() {
        let sink = MemorySink::new();
        let adapter = NewPaymentAdapter::new(NewPaymentService::new(sink.clone()));

        adapter.process_payment(750.0).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "Paid 10.00 USD via the new provider");
    }

    #[test]
    fn test_conversion_rate() {
        assert!((1000.0 / RUB_PER_USD - 13.333333333333334).abs() < 1e-9);
    }

    #[test]
    fn test_legacy_rejects_non_positive_amount() {
        let sink = MemorySink::new();
        let legacy = LegacyPaymentSystem::new(sink.clone());

        let err = legacy.process_payment(0.0).unwrap_err();
        assert!(matches!(err, DemoError::InvalidAmount { .. }));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_adapter_rejects_before_delegating() {
        let sink = MemorySink::new();
        let adapter = NewPaymentAdapter::new(NewPaymentService::new(sink.clone()));

        let err = adapter.process_payment(-5.0).unwrap_err();
        assert!(matches!(err, DemoError::InvalidAmount { value } if value == -5.0));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_both_processors_behind_one_contract() {
        let sink = MemorySink::new();
        let legacy = LegacyPaymentSystem::new(sink.clone());
        let adapter = NewPaymentAdapter::new(NewPaymentService::new(sink.clone()));

        let processors: [&dyn PaymentProcessor; 2] = [&legacy, &adapter];
        for processor in processors {
            processor.process_payment(1000.0).unwrap();
        }

        assert_eq!(
            sink.lines(),
            vec![
                "Paid 1000 RUB via the legacy system",
                "Paid 13.33 USD via the new provider",
            ]
        );
    }
}
