//! Insight Requester: state snapshot in, analysis text out, never an error.

use drilltrack_inventory::InventoryState;

use crate::client::{InsightClient, InsightError};
use crate::prompt::build_prompt;

/// Shown when the model produced no usable text.
pub const EMPTY_ANALYSIS_MESSAGE: &str = "Não foi possível gerar a análise no momento.";

/// Shown when the service could not be reached.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Erro ao conectar com a IA para análise preditiva.";

/// Requests a natural-language stock analysis from the configured client.
///
/// Every failure is recovered here: callers always receive either real
/// analysis text or one of the fixed fallback messages. The requester reads a
/// snapshot and never touches the store.
pub struct InsightRequester<C> {
    client: C,
}

impl<C: InsightClient> InsightRequester<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Produce the analysis for a state snapshot.
    pub async fn analyze(&self, state: &InventoryState) -> String {
        let prompt = build_prompt(state);

        match self.client.generate(&prompt).await {
            Ok(text) => text,
            Err(InsightError::EmptyResponse) => {
                tracing::warn!("text-generation service returned no analysis text");
                EMPTY_ANALYSIS_MESSAGE.to_string()
            }
            Err(err) => {
                tracing::warn!(error = %err, "stock analysis request failed");
                SERVICE_UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }
}
