//! Campaign event operations.

use crate::client::{InteractClient, OneOrMany, arg};
use interact_protocol::{CustomEvent, RecipientData, TriggerResult};
use interact_runtime::Result;

impl InteractClient {
    /// `triggerCustomEvent` call: fires a custom event for each recipient,
    /// reporting per-recipient results.
    pub async fn trigger_custom_event(
        &self,
        custom_event: &CustomEvent,
        recipient_data: &[RecipientData],
    ) -> Result<Vec<TriggerResult>> {
        let response: OneOrMany<TriggerResult> = self
            .call(
                "triggerCustomEvent",
                vec![arg(custom_event)?, arg(&recipient_data)?],
            )
            .await?;
        Ok(response.into_vec())
    }
}
