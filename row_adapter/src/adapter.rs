//! Row-update pipeline
//!
//! This module drives the before-event / execute / after-event loop for
//! a batch of row changes, honoring the handler-controlled status
//! protocol at both notification points.

use crate::errors::AdapterError;
use crate::executor::RowExecutor;
use crate::row_change::RowChange;
use event_system::{
    EventDispatcher, RowUpdatedEvent, RowUpdatingEvent, Sender, StatementType, UpdateStatus,
};
use std::sync::Arc;

/// Per-row failure recorded when the adapter continues past errors
#[derive(Debug, Clone)]
pub struct RowError {
    pub row_index: usize,
    pub message: String,
}

/// Result of processing a batch of row changes
#[derive(Debug, Clone, Default)]
pub struct UpdateOutcome {
    /// Sum of executor-reported affected rows
    pub applied_rows: u64,
    /// Rows skipped by handlers
    pub skipped_rows: usize,
    /// Per-row failures collected under continue-on-error
    pub errors: Vec<RowError>,
}

/// Coordinates row updates for one table
///
/// The adapter raises a row-updating event before handing each change to
/// the executor and a row-updated event after, giving subscribers a
/// chance to veto, rewrite, or observe every row.
#[derive(Clone)]
pub struct RowAdapter {
    table_name: String,
    dispatcher: Option<Arc<EventDispatcher>>,
    continue_on_error: bool,
    max_batch_size: Option<usize>,
    sender: Sender,
}

impl std::fmt::Debug for RowAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowAdapter")
            .field("table_name", &self.table_name)
            .field("has_dispatcher", &self.has_dispatcher())
            .field("continue_on_error", &self.continue_on_error)
            .field("max_batch_size", &self.max_batch_size)
            .finish()
    }
}

impl RowAdapter {
    pub fn new(table_name: String) -> Self {
        let sender = Sender::new(table_name.clone());
        Self {
            table_name,
            dispatcher: None,
            continue_on_error: false,
            max_batch_size: None,
            sender,
        }
    }

    pub fn with_dispatcher(mut self, dispatcher: Arc<EventDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Keep processing rows after a failure, collecting errors per row
    pub fn continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }

    /// Reject batches larger than `max` rows
    pub fn with_max_batch_size(mut self, max: usize) -> Self {
        self.max_batch_size = Some(max);
        self
    }

    pub fn max_batch_size(&self) -> Option<usize> {
        self.max_batch_size
    }

    /// Set event dispatcher for this adapter
    pub fn set_dispatcher(&mut self, dispatcher: Arc<EventDispatcher>) {
        self.dispatcher = Some(dispatcher);
    }

    /// Remove event dispatcher from this adapter
    pub fn remove_dispatcher(&mut self) {
        self.dispatcher = None;
    }

    /// Check if an event dispatcher is set
    pub fn has_dispatcher(&self) -> bool {
        self.dispatcher.is_some()
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Identity passed to handlers as the notification sender
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    fn raise_updating(&self, event: &mut RowUpdatingEvent) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.raise_row_updating(&self.sender, event);
        }
    }

    fn raise_updated(&self, event: &mut RowUpdatedEvent) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.raise_row_updated(&self.sender, event);
        }
    }

    /// Process a batch of row changes through the executor
    ///
    /// Each row goes through: raise updating event, apply via executor
    /// (unless a handler skipped or failed it), raise updated event.
    /// Handlers steer the batch through the event status; see
    /// `UpdateStatus` for the protocol.
    pub async fn update<E>(
        &self,
        executor: &E,
        changes: Vec<RowChange>,
    ) -> Result<UpdateOutcome, AdapterError>
    where
        E: RowExecutor + ?Sized,
    {
        let mut outcome = UpdateOutcome::default();
        let total = changes.len();

        if let Some(max) = self.max_batch_size {
            if total > max {
                return Err(AdapterError::BatchTooLarge { size: total, max });
            }
        }

        for (row_index, change) in changes.into_iter().enumerate() {
            if change.statement == StatementType::Select {
                return Err(AdapterError::InvalidRowChange {
                    row_index,
                    message: "SELECT is not a row change".to_string(),
                });
            }

            let mut updating =
                RowUpdatingEvent::new(change.statement, self.table_name.clone())
                    .with_values(change.values);
            if let Some(record_id) = change.record_id {
                updating = updating.with_record_id(record_id);
            }

            self.raise_updating(&mut updating);

            match updating.status {
                UpdateStatus::Continue => {}
                UpdateStatus::SkipCurrentRow => {
                    tracing::debug!(
                        table = %self.table_name,
                        row_index,
                        "row skipped by updating handler"
                    );
                    outcome.skipped_rows += 1;
                    continue;
                }
                UpdateStatus::SkipAllRemainingRows => {
                    outcome.skipped_rows += total - row_index;
                    break;
                }
                UpdateStatus::ErrorsOccurred => {
                    let message = updating
                        .error
                        .clone()
                        .unwrap_or_else(|| "row rejected by updating handler".to_string());
                    if self.continue_on_error {
                        outcome.errors.push(RowError { row_index, message });
                        continue;
                    }
                    return Err(AdapterError::Aborted { row_index, message });
                }
            }

            // Handlers may have rewritten the pending values or record id.
            let effective = RowChange {
                statement: updating.statement,
                record_id: updating.record_id.clone(),
                values: updating.values.clone(),
            };

            let mut updated = RowUpdatedEvent::from_updating(&updating);
            let mut exec_error: Option<anyhow::Error> = None;
            match executor.apply(&self.table_name, &effective).await {
                Ok(rows_affected) => {
                    updated.rows_affected = rows_affected;
                }
                Err(err) => {
                    tracing::warn!(
                        table = %self.table_name,
                        row_index,
                        error = %err,
                        "executor failed for row"
                    );
                    updated.status = UpdateStatus::ErrorsOccurred;
                    updated.error = Some(err.to_string());
                    exec_error = Some(err);
                }
            }

            self.raise_updated(&mut updated);

            match updated.status {
                UpdateStatus::Continue => {
                    outcome.applied_rows += updated.rows_affected;
                }
                UpdateStatus::SkipCurrentRow => {
                    // Row executed but a handler discarded it from the tally.
                    outcome.skipped_rows += 1;
                }
                UpdateStatus::SkipAllRemainingRows => {
                    // This row already executed; the untouched remainder
                    // counts as skipped, matching the updating phase.
                    outcome.applied_rows += updated.rows_affected;
                    outcome.skipped_rows += total - row_index - 1;
                    break;
                }
                UpdateStatus::ErrorsOccurred => {
                    let message = updated
                        .error
                        .clone()
                        .unwrap_or_else(|| "row update failed".to_string());
                    if self.continue_on_error {
                        outcome.errors.push(RowError { row_index, message });
                        continue;
                    }
                    return Err(match exec_error {
                        Some(source) => AdapterError::ExecutorFailure {
                            table: self.table_name.clone(),
                            statement: effective.statement.as_str(),
                            source,
                        },
                        None => AdapterError::Aborted { row_index, message },
                    });
                }
            }
        }

        Ok(outcome)
    }
}
