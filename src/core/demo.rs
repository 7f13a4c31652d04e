use crate::core::payment::{LegacyPaymentSystem, NewPaymentAdapter, NewPaymentService};
use crate::core::theater::{Amplifier, HomeTheaterFacade, Projector, Screen};
use crate::core::{DemoConfig, PaymentProcessor, Result, StatusSink};

/// Runs the fixed demonstration script: the payment adapter first, then the
/// home-theater facade. Every status line goes through the sink in a
/// deterministic order.
pub struct DemoEngine<C: DemoConfig, S: StatusSink + Clone> {
    config: C,
    sink: S,
}

impl<C: DemoConfig, S: StatusSink + Clone> DemoEngine<C, S> {
    pub fn new(config: C, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn run(&self) -> Result<()> {
        self.run_adapter_demo()?;
        self.run_facade_demo();
        Ok(())
    }

    fn run_adapter_demo(&self) -> Result<()> {
        tracing::info!("Running adapter demonstration");
        self.sink.status("Adapter:");

        let amount = self.config.payment_amount();
        let legacy = LegacyPaymentSystem::new(self.sink.clone());
        let adapted = NewPaymentAdapter::new(NewPaymentService::new(self.sink.clone()));

        // Both go through the old-shape contract; the caller cannot tell
        // the adapted provider from the legacy one.
        let processors: [&dyn PaymentProcessor; 2] = [&legacy, &adapted];
        for processor in processors {
            processor.process_payment(amount)?;
        }

        self.sink.status("");
        Ok(())
    }

    fn run_facade_demo(&self) {
        tracing::info!("Running facade demonstration");
        self.sink.status("Facade:");

        let amp = Amplifier::new(self.sink.clone());
        let projector = Projector::new(self.sink.clone());
        let screen = Screen::new(self.sink.clone());

        let mut theater = HomeTheaterFacade::new(amp, projector, screen, self.sink.clone());
        theater.start_movie();
        theater.end_movie();
    }
}
