//! The billing engine: classification, recovery, orchestration.

use std::sync::Arc;

use dunn_core::{Invoice, InvoiceStatus};
use dunn_store::{InvoiceStore, StoreError};

use crate::config::BillingConfig;
use crate::error::Result;
use crate::gateway::{ChargeError, PaymentGateway};
use crate::rates::ExchangeRates;
use crate::run::{BillingOutcome, BillingRun};

/// Orchestrates billing batches over the collaborator seams.
///
/// A batch processes invoices sequentially, one outcome group at a time; the
/// engine takes no locks over the store, so a manual batch may overlap a
/// scheduled one. The store's atomic update semantics are the consistency
/// seam for that case.
pub struct BillingEngine {
    store: Arc<dyn InvoiceStore>,
    gateway: Arc<dyn PaymentGateway>,
    rates: Arc<dyn ExchangeRates>,
    config: BillingConfig,
}

impl BillingEngine {
    /// Create an engine over the given collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn InvoiceStore>,
        gateway: Arc<dyn PaymentGateway>,
        rates: Arc<dyn ExchangeRates>,
        config: BillingConfig,
    ) -> Self {
        Self {
            store,
            gateway,
            rates,
            config,
        }
    }

    /// Run one billing batch over every pending invoice.
    ///
    /// Classifies each invoice, then applies the recovery steps in their
    /// fixed order: currency correction first (so a corrected invoice gets
    /// its own retry window), network retries under the absolute timeout,
    /// then insufficient-balance accrual and success finalization over the
    /// by-then stable outcomes. Returns the final outcome mapping; only the
    /// individual invoice updates issued along the way are durable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BillingError`] when the persistence collaborator
    /// fails; gateway failures are absorbed into per-invoice outcomes.
    pub async fn bill(&self) -> Result<BillingRun> {
        let pending: Vec<Invoice> = self
            .store
            .fetch_invoices()?
            .into_iter()
            .filter(Invoice::is_pending)
            .collect();

        tracing::info!(invoices = pending.len(), "Starting billing run");

        let mut run = BillingRun::new();
        for invoice in pending {
            let outcome = self.classify(&invoice).await;
            run.record(invoice, outcome);
        }

        self.resolve_currency_mismatches(&mut run).await?;

        let retries = self.retry_network_errors(&mut run);
        if tokio::time::timeout(self.config.retry_timeout, retries)
            .await
            .is_err()
        {
            tracing::warn!(
                timeout_secs = self.config.retry_timeout.as_secs(),
                "Network retry loop aborted by overall timeout"
            );
        }
        self.settle_network_errors(&mut run)?;

        self.accrue_interest(&mut run)?;
        self.finalize_successes(&mut run)?;

        tracing::info!(invoices = run.len(), "Billing run complete");
        Ok(run)
    }

    /// Attempt one charge and map the result into the outcome taxonomy.
    ///
    /// A pure total mapping over the gateway's tagged result; no retries
    /// happen here, and the single side effect is the charge attempt itself.
    async fn classify(&self, invoice: &Invoice) -> BillingOutcome {
        match self.gateway.charge(invoice).await {
            Ok(true) => BillingOutcome::Success,
            Ok(false) => BillingOutcome::InsufficientBalance,
            Err(ChargeError::CurrencyMismatch { .. }) => BillingOutcome::CurrencyMismatch,
            Err(ChargeError::CustomerNotFound { .. }) => BillingOutcome::CustomerNotFound,
            Err(ChargeError::Network) => BillingOutcome::NetworkError,
            Err(ChargeError::Other(reason)) => {
                tracing::warn!(invoice_id = %invoice.id, %reason, "Unclassified gateway failure");
                BillingOutcome::Unknown
            }
        }
    }

    /// Convert mismatched invoices into the customer's currency and re-charge
    /// each exactly once.
    ///
    /// The second attempt's outcome replaces the mismatch in the run mapping;
    /// a second mismatch is terminal for this batch.
    async fn resolve_currency_mismatches(&self, run: &mut BillingRun) -> Result<()> {
        for id in run.ids_with(BillingOutcome::CurrencyMismatch) {
            let Some(invoice) = run.invoice(&id).cloned() else {
                continue;
            };

            let customer = match self.store.fetch_customer(&invoice.customer_id) {
                Ok(customer) => customer,
                Err(StoreError::NotFound { .. }) => {
                    tracing::warn!(
                        invoice_id = %id,
                        customer_id = %invoice.customer_id,
                        "Customer missing during currency resolution"
                    );
                    run.set_outcome(&id, BillingOutcome::CustomerNotFound);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            let rate = match self
                .rates
                .multiplier(invoice.amount.currency, customer.currency)
                .await
            {
                Ok(rate) => rate,
                Err(err) => {
                    // No rate, no correction; the mismatch stays terminal
                    // for this run.
                    tracing::warn!(invoice_id = %id, error = %err, "Exchange rate lookup failed");
                    continue;
                }
            };

            let converted = invoice.amount.convert(rate, customer.currency);
            let updated = self.store.update_invoice(&invoice.with_amount(converted))?;
            tracing::info!(
                invoice_id = %id,
                amount = %updated.amount,
                "Converted invoice to customer currency, re-attempting charge"
            );

            let outcome = self.classify(&updated).await;
            run.update(&id, updated, outcome);
        }
        Ok(())
    }

    /// Re-attempt invoices stuck on network failures with linear backoff.
    ///
    /// Round `n` waits `n × base_delay` (a non-blocking suspension) before
    /// re-charging every invoice still classified `NetworkError`. The loop
    /// ends when the attempt counter passes the limit or no stuck invoices
    /// remain; the caller additionally races it against the absolute
    /// timeout, and whichever trigger fires first wins.
    async fn retry_network_errors(&self, run: &mut BillingRun) {
        let mut attempt: u32 = 1;
        while attempt <= self.config.retry_limit {
            if run.ids_with(BillingOutcome::NetworkError).is_empty() {
                return;
            }

            tokio::time::sleep(self.config.retry_base_delay * attempt).await;

            let stuck = run.ids_with(BillingOutcome::NetworkError);
            tracing::info!(attempt, invoices = stuck.len(), "Retrying network failures");
            for id in stuck {
                let Some(invoice) = run.invoice(&id).cloned() else {
                    continue;
                };
                let outcome = self.classify(&invoice).await;
                run.set_outcome(&id, outcome);
            }

            attempt += 1;
        }
    }

    /// Persist `NetworkError` status for every invoice the retry loop could
    /// not recover, whether it stopped on the limit or on the timeout.
    fn settle_network_errors(&self, run: &mut BillingRun) -> Result<()> {
        for id in run.ids_with(BillingOutcome::NetworkError) {
            let Some(invoice) = run.invoice(&id).cloned() else {
                continue;
            };
            let updated = self
                .store
                .update_invoice(&invoice.with_status(InvoiceStatus::NetworkError))?;
            tracing::warn!(invoice_id = %id, "Invoice gave up after network retries");
            run.set_invoice(&id, updated);
        }
        Ok(())
    }

    /// Mark declined invoices unpaid and accrue late-payment interest into a
    /// successor invoice.
    ///
    /// The successor is a fresh `Pending` invoice at `amount × interest`,
    /// same currency, and is not charged within this batch; it becomes
    /// eligible in a future run. The original keeps its
    /// `InsufficientBalance` outcome as the batch's final record.
    fn accrue_interest(&self, run: &mut BillingRun) -> Result<()> {
        for id in run.ids_with(BillingOutcome::InsufficientBalance) {
            let Some(invoice) = run.invoice(&id).cloned() else {
                continue;
            };
            let unpaid = self
                .store
                .update_invoice(&invoice.with_status(InvoiceStatus::Unpaid))?;

            match self.store.fetch_customer(&unpaid.customer_id) {
                Ok(customer) => {
                    let accrued = unpaid.amount.scaled(self.config.interest_multiplier);
                    let successor = self.store.create_invoice(accrued, &customer)?;
                    tracing::info!(
                        invoice_id = %id,
                        successor_id = %successor.id,
                        amount = %successor.amount,
                        "Accrued late-payment interest into successor invoice"
                    );
                }
                Err(StoreError::NotFound { .. }) => {
                    tracing::error!(
                        invoice_id = %id,
                        customer_id = %unpaid.customer_id,
                        "Customer missing during interest accrual; no successor created"
                    );
                }
                Err(err) => return Err(err.into()),
            }

            run.set_invoice(&id, unpaid);
        }
        Ok(())
    }

    /// Persist `Paid` for every successfully charged invoice.
    ///
    /// Idempotent in effect: re-marking a paid invoice changes nothing,
    /// though the update is still issued.
    fn finalize_successes(&self, run: &mut BillingRun) -> Result<()> {
        for id in run.ids_with(BillingOutcome::Success) {
            let Some(invoice) = run.invoice(&id).cloned() else {
                continue;
            };
            let updated = self
                .store
                .update_invoice(&invoice.with_status(InvoiceStatus::Paid))?;
            run.set_invoice(&id, updated);
        }
        Ok(())
    }
}
