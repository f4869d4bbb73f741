use crate::event::{RowUpdatedEvent, RowUpdatingEvent};
use crate::types::{RowUpdatedHandler, RowUpdatingHandler, Sender};
use config::EventConfig;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Dispatcher for row-update notifications
///
/// Keeps separate handler lists for the before-action and after-action
/// phases and raises events to every subscriber in registration order.
pub struct EventDispatcher {
    updating_handlers: std::sync::RwLock<Vec<RowUpdatingHandler>>,
    updated_handlers: std::sync::RwLock<Vec<RowUpdatedHandler>>,
    max_handlers: Option<usize>,
    warn_slow_handler: Option<Duration>,
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("updating_handler_count", &self.updating_handler_count())
            .field("updated_handler_count", &self.updated_handler_count())
            .finish()
    }
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            updating_handlers: std::sync::RwLock::new(Vec::new()),
            updated_handlers: std::sync::RwLock::new(Vec::new()),
            max_handlers: None,
            warn_slow_handler: None,
        }
    }

    /// Create a dispatcher honoring the configured handler cap and
    /// slow-handler warning threshold
    pub fn with_config(config: &EventConfig) -> Self {
        Self {
            updating_handlers: std::sync::RwLock::new(Vec::new()),
            updated_handlers: std::sync::RwLock::new(Vec::new()),
            max_handlers: Some(config.max_handlers),
            warn_slow_handler: Some(Duration::from_millis(config.warn_slow_handler_ms)),
        }
    }

    fn warn_if_slow(&self, phase: &str, sender: &Sender, elapsed: Duration) {
        if let Some(threshold) = self.warn_slow_handler {
            if elapsed >= threshold {
                tracing::warn!(
                    phase,
                    table = %sender.table_name,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "slow event handler"
                );
            }
        }
    }

    fn at_capacity(&self, current: usize) -> bool {
        match self.max_handlers {
            Some(max) => current >= max,
            None => false,
        }
    }

    /// Register a before-action handler
    pub fn on_row_updating<F>(&self, handler: F)
    where
        F: Fn(&Sender, &mut RowUpdatingEvent) + Send + Sync + 'static,
    {
        if let Ok(mut handlers) = self.updating_handlers.write() {
            if self.at_capacity(handlers.len()) {
                tracing::warn!("row-updating handler limit reached, handler dropped");
                return;
            }
            handlers.push(Arc::new(handler));
        }
    }

    /// Register an after-action handler
    pub fn on_row_updated<F>(&self, handler: F)
    where
        F: Fn(&Sender, &mut RowUpdatedEvent) + Send + Sync + 'static,
    {
        if let Ok(mut handlers) = self.updated_handlers.write() {
            if self.at_capacity(handlers.len()) {
                tracing::warn!("row-updated handler limit reached, handler dropped");
                return;
            }
            handlers.push(Arc::new(handler));
        }
    }

    /// Raise the before-action event to all subscribers
    ///
    /// Handlers run in registration order; later handlers observe the
    /// mutations earlier ones made.
    pub fn raise_row_updating(&self, sender: &Sender, event: &mut RowUpdatingEvent) {
        if let Ok(handlers) = self.updating_handlers.read() {
            for handler in handlers.iter() {
                let started = Instant::now();
                handler(sender, event);
                self.warn_if_slow("row-updating", sender, started.elapsed());
            }
        }
    }

    /// Raise the after-action event to all subscribers
    pub fn raise_row_updated(&self, sender: &Sender, event: &mut RowUpdatedEvent) {
        if let Ok(handlers) = self.updated_handlers.read() {
            for handler in handlers.iter() {
                let started = Instant::now();
                handler(sender, event);
                self.warn_if_slow("row-updated", sender, started.elapsed());
            }
        }
    }

    /// Clear all handlers for both phases
    pub fn clear_handlers(&self) {
        if let Ok(mut handlers) = self.updating_handlers.write() {
            handlers.clear();
        }
        if let Ok(mut handlers) = self.updated_handlers.write() {
            handlers.clear();
        }
    }

    /// Get number of registered before-action handlers
    pub fn updating_handler_count(&self) -> usize {
        self.updating_handlers.read().map(|h| h.len()).unwrap_or(0)
    }

    /// Get number of registered after-action handlers
    pub fn updated_handler_count(&self) -> usize {
        self.updated_handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{StatementType, UpdateStatus};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sender() -> Sender {
        Sender::new("users".to_string())
    }

    #[test]
    fn test_raise_with_no_handlers_is_noop() {
        let dispatcher = EventDispatcher::new();
        let mut event = RowUpdatingEvent::new(StatementType::Insert, "users".to_string());

        dispatcher.raise_row_updating(&sender(), &mut event);

        assert_eq!(event.status, UpdateStatus::Continue);
        assert_eq!(dispatcher.updating_handler_count(), 0);
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let dispatcher = EventDispatcher::new();

        dispatcher.on_row_updating(|_, event| {
            event.add_value("first".to_string(), 1i32.into());
        });
        dispatcher.on_row_updating(|_, event| {
            // Second handler sees what the first one wrote.
            assert!(event.values.contains_key("first"));
            event.add_value("second".to_string(), 2i32.into());
        });

        let mut event = RowUpdatingEvent::new(StatementType::Update, "users".to_string());
        dispatcher.raise_row_updating(&sender(), &mut event);

        assert!(event.values.contains_key("second"));
    }

    #[test]
    fn test_handler_can_set_status() {
        let dispatcher = EventDispatcher::new();
        dispatcher.on_row_updating(|_, event| {
            event.status = UpdateStatus::SkipCurrentRow;
        });

        let mut event = RowUpdatingEvent::new(StatementType::Delete, "users".to_string());
        dispatcher.raise_row_updating(&sender(), &mut event);

        assert_eq!(event.status, UpdateStatus::SkipCurrentRow);
    }

    #[test]
    fn test_updated_handlers_observe_outcome() {
        let dispatcher = EventDispatcher::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);

        dispatcher.on_row_updated(move |_, event| {
            seen_clone.fetch_add(event.rows_affected as usize, Ordering::SeqCst);
        });

        let mut event = RowUpdatedEvent::new(StatementType::Update, "users".to_string())
            .with_rows_affected(3);
        dispatcher.raise_row_updated(&sender(), &mut event);

        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_clear_handlers() {
        let dispatcher = EventDispatcher::new();
        dispatcher.on_row_updating(|_, _| {});
        dispatcher.on_row_updated(|_, _| {});
        assert_eq!(dispatcher.updating_handler_count(), 1);
        assert_eq!(dispatcher.updated_handler_count(), 1);

        dispatcher.clear_handlers();

        assert_eq!(dispatcher.updating_handler_count(), 0);
        assert_eq!(dispatcher.updated_handler_count(), 0);
    }

    #[test]
    fn test_handler_cap_from_config() {
        let config = EventConfig {
            max_handlers: 1,
            warn_slow_handler_ms: 100,
        };
        let dispatcher = EventDispatcher::with_config(&config);

        dispatcher.on_row_updating(|_, _| {});
        dispatcher.on_row_updating(|_, _| {});

        assert_eq!(dispatcher.updating_handler_count(), 1);
    }

    #[test]
    fn test_handler_over_slow_threshold_still_dispatches() {
        let config = EventConfig {
            max_handlers: 10,
            warn_slow_handler_ms: 1,
        };
        let dispatcher = EventDispatcher::with_config(&config);

        dispatcher.on_row_updating(|_, event| {
            std::thread::sleep(Duration::from_millis(5));
            event.add_value("slow".to_string(), true.into());
        });

        let mut event = RowUpdatingEvent::new(StatementType::Update, "users".to_string());
        dispatcher.raise_row_updating(&sender(), &mut event);

        // Crossing the threshold warns but never alters dispatch.
        assert!(event.values.contains_key("slow"));
        assert_eq!(event.status, UpdateStatus::Continue);
    }
}
