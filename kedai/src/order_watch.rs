//! Order status watch
//!
//! Screen state for a single order: the locally-fetched copy, the
//! derived estimated-ready countdown, and the presentational ready
//! inference. Server status stays authoritative; each refetch replaces
//! the local copy and the ready hint is recomputed from timestamps.

use shared::models::{Order, OrderStatus};

/// Fallback when the server sends no estimate
pub const DEFAULT_ESTIMATED_MINUTES: i64 = 15;

/// Reconcile refetch cadence while the screen is open
pub const POLL_INTERVAL_SECS: u64 = 10;

/// Live view state for one order
pub struct OrderWatch {
    order_id: String,
    order: Option<Order>,
    error: Option<String>,
    remaining_secs: Option<i64>,
    loading: bool,
}

impl OrderWatch {
    /// Start watching an order; the first fetch is still in flight
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            order: None,
            error: None,
            remaining_secs: None,
            loading: true,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Estimated-ready instant (Unix millis), defaulting a missing
    /// estimate to [`DEFAULT_ESTIMATED_MINUTES`]
    pub fn ready_at(order: &Order) -> i64 {
        let minutes = order.estimated_minutes.unwrap_or(DEFAULT_ESTIMATED_MINUTES);
        order.created_at + minutes * 60_000
    }

    /// Replace the local copy with a freshly fetched order
    ///
    /// Returns `true` when the displayed order or its status changed,
    /// so the caller can reset its repeating tasks.
    pub fn on_order(&mut self, order: Order, now_millis: i64) -> bool {
        let changed = match self.order {
            Some(ref prev) => prev.id != order.id || prev.status != order.status,
            None => true,
        };
        if changed {
            tracing::debug!(order_id = %order.id, status = ?order.status, "Order state updated");
        }
        self.loading = false;
        self.error = None;
        self.order = Some(order);
        self.recompute(now_millis);
        changed
    }

    /// Record a failed fetch; the screen shows the message with a
    /// manual retry action
    pub fn on_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Mark a manual retry in flight
    pub fn retrying(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// One-second tick: recompute the countdown
    ///
    /// Returns `true` while the countdown should keep ticking; `false`
    /// once it expired or no countdown applies.
    pub fn on_tick(&mut self, now_millis: i64) -> bool {
        self.recompute(now_millis);
        self.countdown_active()
    }

    fn recompute(&mut self, now_millis: i64) {
        self.remaining_secs = self.order.as_ref().and_then(|order| {
            if order.status != OrderStatus::Processing {
                return None;
            }
            Some((Self::ready_at(order) - now_millis).div_euclid(1000))
        });
    }

    /// Seconds until the estimated-ready instant, while processing
    pub fn remaining_secs(&self) -> Option<i64> {
        self.remaining_secs
    }

    /// Presentational inference: the countdown expired while the server
    /// still reports `PROCESSING`. Not a server-confirmed transition;
    /// cleared or confirmed by the next fetch.
    pub fn locally_ready(&self) -> bool {
        self.remaining_secs.is_some_and(|s| s <= 0)
    }

    /// Whether the one-second tick has work to do
    pub fn countdown_active(&self) -> bool {
        self.remaining_secs.is_some_and(|s| s > 0)
    }

    /// Whether the reconcile poll should keep running
    pub fn poll_active(&self) -> bool {
        match self.order {
            Some(ref order) => !order.status.is_terminal(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ServiceType;

    const T: i64 = 1_722_945_600_000;
    const MINUTE: i64 = 60_000;

    fn order(status: OrderStatus, estimated_minutes: Option<i64>) -> Order {
        Order {
            id: "ord-1".to_string(),
            status,
            created_at: T,
            estimated_minutes,
            service: ServiceType::Takeaway,
            table: None,
            items: vec![],
            total: 35000,
        }
    }

    #[test]
    fn test_countdown_reaches_ready() {
        let mut watch = OrderWatch::new("ord-1");
        watch.on_order(order(OrderStatus::Processing, Some(15)), T);
        assert_eq!(watch.remaining_secs(), Some(15 * 60));
        assert!(watch.countdown_active());
        assert!(!watch.locally_ready());

        // one second past the estimate: countdown stops, ready is shown
        let active = watch.on_tick(T + 15 * MINUTE + 1_000);
        assert!(!active);
        assert!(watch.remaining_secs().unwrap() <= 0);
        assert!(watch.locally_ready());
    }

    #[test]
    fn test_missing_estimate_defaults_to_fifteen_minutes() {
        let processing = order(OrderStatus::Processing, None);
        assert_eq!(OrderWatch::ready_at(&processing), T + 15 * MINUTE);
    }

    #[test]
    fn test_no_countdown_outside_processing() {
        let mut watch = OrderWatch::new("ord-1");
        watch.on_order(order(OrderStatus::Pending, Some(15)), T);
        assert_eq!(watch.remaining_secs(), None);
        assert!(!watch.countdown_active());
        assert!(!watch.locally_ready());

        watch.on_order(order(OrderStatus::Cancelled, Some(15)), T);
        assert!(!watch.poll_active());
    }

    #[test]
    fn test_server_status_wins_over_local_inference() {
        let mut watch = OrderWatch::new("ord-1");
        watch.on_order(order(OrderStatus::Processing, Some(15)), T);
        watch.on_tick(T + 16 * MINUTE);
        assert!(watch.locally_ready());

        // reconcile: the server confirms completion
        let changed = watch.on_order(order(OrderStatus::Completed, Some(15)), T + 16 * MINUTE);
        assert!(changed);
        assert_eq!(watch.order().unwrap().status, OrderStatus::Completed);
        assert!(!watch.locally_ready());
        assert!(!watch.poll_active());
    }

    #[test]
    fn test_unchanged_status_does_not_signal_change() {
        let mut watch = OrderWatch::new("ord-1");
        assert!(watch.on_order(order(OrderStatus::Processing, Some(15)), T));
        assert!(!watch.on_order(order(OrderStatus::Processing, Some(15)), T + 10_000));
    }

    #[test]
    fn test_fetch_error_keeps_screen_alive() {
        let mut watch = OrderWatch::new("ord-1");
        watch.on_error("Internal error: boom".to_string());
        assert!(!watch.is_loading());
        assert_eq!(watch.error(), Some("Internal error: boom"));

        watch.retrying();
        assert!(watch.is_loading());
        assert!(watch.error().is_none());
    }
}
