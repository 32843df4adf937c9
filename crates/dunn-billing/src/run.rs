//! The per-batch run mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use dunn_core::{Invoice, InvoiceId};

/// Transient per-invoice result of a charge attempt within a batch.
///
/// Never persisted; only `InvoiceStatus` is durable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingOutcome {
    /// The charge went through.
    Success,
    /// The customer's balance did not cover the amount.
    InsufficientBalance,
    /// The invoice currency does not match the customer's billing currency.
    CurrencyMismatch,
    /// The gateway has no record of the customer. Terminal for the batch.
    CustomerNotFound,
    /// The gateway could not be reached.
    NetworkError,
    /// Any other gateway failure. Terminal for the batch.
    Unknown,
}

/// One invoice's entry in the run mapping: its latest known snapshot plus
/// its current outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEntry {
    /// Latest persisted snapshot of the invoice.
    pub invoice: Invoice,
    /// Current outcome for this batch.
    pub outcome: BillingOutcome,
}

/// Outcome mapping for one billing batch, keyed by invoice identity.
///
/// Recovery steps replace invoice values mid-batch (currency conversion,
/// status changes), so entries are indexed by `InvoiceId` rather than by the
/// invoice value itself; lookups stay valid across replacements. Every
/// `Pending` invoice fetched at batch start has exactly one entry until the
/// batch completes.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillingRun {
    entries: HashMap<InvoiceId, RunEntry>,
}

impl BillingRun {
    /// An empty run mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of invoices in this batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch selected no invoices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record the initial outcome for an invoice.
    pub fn record(&mut self, invoice: Invoice, outcome: BillingOutcome) {
        self.entries.insert(invoice.id, RunEntry { invoice, outcome });
    }

    /// Ids of every invoice currently carrying `outcome`.
    #[must_use]
    pub fn ids_with(&self, outcome: BillingOutcome) -> Vec<InvoiceId> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.outcome == outcome)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Latest snapshot of an invoice in this batch.
    #[must_use]
    pub fn invoice(&self, id: &InvoiceId) -> Option<&Invoice> {
        self.entries.get(id).map(|entry| &entry.invoice)
    }

    /// Current outcome of an invoice in this batch.
    #[must_use]
    pub fn outcome(&self, id: &InvoiceId) -> Option<BillingOutcome> {
        self.entries.get(id).map(|entry| entry.outcome)
    }

    /// Replace the outcome for an invoice already in the batch.
    pub fn set_outcome(&mut self, id: &InvoiceId, outcome: BillingOutcome) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.outcome = outcome;
        }
    }

    /// Replace the invoice snapshot for an entry already in the batch.
    pub fn set_invoice(&mut self, id: &InvoiceId, invoice: Invoice) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.invoice = invoice;
        }
    }

    /// Replace both snapshot and outcome for an entry already in the batch.
    pub fn update(&mut self, id: &InvoiceId, invoice: Invoice, outcome: BillingOutcome) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.invoice = invoice;
            entry.outcome = outcome;
        }
    }
}
