//! Client-side state of the order history page.
//!
//! Everything here is plain data so the page logic can be exercised without a
//! browser: the Leptos view wraps [`OrderHistoryState`] in a signal and only
//! performs the side effects (HTTP, timers, scrolling) the state asks for.

use contracts::orders::history::OrderHistoryItem;

use super::arrival::ArrivalContext;
use super::error::OrderHistoryError;

/// Which card shows its detail panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded(u64),
}

impl Expansion {
    /// Clicking the open card closes it, clicking any other card opens that one
    pub fn toggle(self, id: u64) -> Self {
        match self {
            Expansion::Expanded(current) if current == id => Expansion::Collapsed,
            _ => Expansion::Expanded(id),
        }
    }

    pub fn is_expanded(&self, id: u64) -> bool {
        *self == Expansion::Expanded(id)
    }
}

/// Identifies one fetch; only the most recently issued one may touch the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer fetch was started before this one finished
    Stale,
}

/// What the page should render
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    Loading,
    Error(String),
    Empty,
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistoryState {
    pub orders: Vec<OrderHistoryItem>,
    pub loading: bool,
    pub error: Option<String>,
    pub expansion: Expansion,
    pub highlighted: Option<u64>,
    pub auto_refresh: bool,
    pub arrival: ArrivalContext,
    pending_scroll: Option<u64>,
    latest_request: u64,
}

impl Default for OrderHistoryState {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            loading: true,
            error: None,
            expansion: Expansion::Collapsed,
            highlighted: None,
            auto_refresh: false,
            arrival: ArrivalContext::default(),
            pending_scroll: None,
            latest_request: 0,
        }
    }
}

impl OrderHistoryState {
    /// Register a new fetch. Background refreshes keep the current list on screen.
    pub fn begin_fetch(&mut self, show_spinner: bool) -> RequestTicket {
        self.latest_request += 1;
        if show_spinner {
            self.loading = true;
        }
        RequestTicket(self.latest_request)
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// The loading flag is cleared on both success and failure. A failed fetch
    /// keeps the previously loaded orders.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<OrderHistoryItem>, OrderHistoryError>,
    ) -> Completion {
        if ticket.0 != self.latest_request {
            return Completion::Stale;
        }

        self.loading = false;
        match result {
            Ok(orders) => {
                self.orders = orders;
                self.error = None;
                if let Expansion::Expanded(id) = self.expansion {
                    if !self.orders.iter().any(|o| o.id == id) {
                        self.expansion = Expansion::Collapsed;
                    }
                }
            }
            Err(err) => {
                self.error = Some(err.user_message());
            }
        }
        self.refresh_highlight();
        Completion::Applied
    }

    /// Re-evaluate the arrival context. Returns `true` when the caller should
    /// fetch right away.
    pub fn apply_arrival(&mut self, arrival: ArrivalContext) -> bool {
        self.arrival = arrival;
        if arrival.from_email {
            self.auto_refresh = true;
        }
        self.refresh_highlight();
        arrival.from_email
    }

    /// Highlight the first order when arriving from an e-mail link.
    ///
    /// The backend lists orders newest first; nothing here re-sorts them.
    fn refresh_highlight(&mut self) {
        if !self.arrival.from_email {
            return;
        }
        let Some(first) = self.orders.first() else {
            return;
        };
        if self.highlighted != Some(first.id) {
            self.highlighted = Some(first.id);
            self.pending_scroll = Some(first.id);
        }
    }

    /// Order to scroll into view, handed out once per highlight
    pub fn take_scroll_target(&mut self) -> Option<u64> {
        self.pending_scroll.take()
    }

    pub fn toggle_expanded(&mut self, id: u64) {
        self.expansion = self.expansion.toggle(id);
    }

    pub fn is_expanded(&self, id: u64) -> bool {
        self.expansion.is_expanded(id)
    }

    pub fn is_highlighted(&self, id: u64) -> bool {
        self.highlighted == Some(id)
    }

    pub fn toggle_auto_refresh(&mut self) {
        self.auto_refresh = !self.auto_refresh;
    }

    /// The refresh interval runs only while auto-refresh is on and nothing is loading
    pub fn should_poll(&self) -> bool {
        self.auto_refresh && !self.loading
    }

    pub fn view_mode(&self) -> ViewMode {
        if self.loading {
            ViewMode::Loading
        } else if let Some(message) = &self.error {
            ViewMode::Error(message.clone())
        } else if self.orders.is_empty() {
            ViewMode::Empty
        } else {
            ViewMode::List
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::api::{decode_history, server_error};
    use crate::domain::orders::error::FALLBACK_MESSAGE;

    fn orders(ids: &[u64]) -> Vec<OrderHistoryItem> {
        let json = ids
            .iter()
            .map(|id| format!(r#"{{"ID":{},"item_price":10}}"#, id))
            .collect::<Vec<_>>()
            .join(",");
        decode_history(&format!("[{}]", json)).unwrap()
    }

    fn from_email() -> ArrivalContext {
        ArrivalContext::from_query("?from=email")
    }

    #[test]
    fn test_initial_state() {
        let state = OrderHistoryState::default();
        assert!(state.loading);
        assert_eq!(state.expansion, Expansion::Collapsed);
        assert_eq!(state.view_mode(), ViewMode::Loading);
        assert!(!state.should_poll());
    }

    #[test]
    fn test_expansion_toggle() {
        let mut state = OrderHistoryState::default();
        state.toggle_expanded(5);
        assert!(state.is_expanded(5));
        state.toggle_expanded(2);
        assert!(state.is_expanded(2));
        assert!(!state.is_expanded(5));
        state.toggle_expanded(2);
        assert_eq!(state.expansion, Expansion::Collapsed);
    }

    #[test]
    fn test_success_replaces_list() {
        let mut state = OrderHistoryState::default();
        let ticket = state.begin_fetch(true);
        assert_eq!(state.complete(ticket, Ok(orders(&[1, 2]))), Completion::Applied);
        assert!(!state.loading);
        assert_eq!(state.view_mode(), ViewMode::List);

        let ticket = state.begin_fetch(false);
        state.complete(ticket, Ok(orders(&[3])));
        assert_eq!(state.orders.len(), 1);
        assert_eq!(state.orders[0].id, 3);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let mut state = OrderHistoryState::default();
        let ticket = state.begin_fetch(true);
        state.complete(ticket, decode_history("null"));
        assert_eq!(state.view_mode(), ViewMode::Empty);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failure_keeps_list_and_clears_loading() {
        let mut state = OrderHistoryState::default();
        let ticket = state.begin_fetch(true);
        state.complete(ticket, Ok(orders(&[1])));

        let ticket = state.begin_fetch(true);
        state.complete(ticket, Err(server_error(429, r#"{"error":"rate limited"}"#)));
        assert!(!state.loading);
        assert_eq!(state.orders.len(), 1);
        assert_eq!(state.view_mode(), ViewMode::Error("rate limited".into()));
    }

    #[test]
    fn test_auth_failure_uses_fallback() {
        let mut state = OrderHistoryState::default();
        let ticket = state.begin_fetch(true);
        state.complete(ticket, Err(OrderHistoryError::AuthenticationRequired));
        assert_eq!(state.view_mode(), ViewMode::Error(FALLBACK_MESSAGE.into()));
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut state = OrderHistoryState::default();
        let ticket = state.begin_fetch(true);
        state.complete(ticket, Err(OrderHistoryError::Network("offline".into())));
        let ticket = state.begin_fetch(false);
        state.complete(ticket, Ok(orders(&[4])));
        assert_eq!(state.error, None);
        assert_eq!(state.view_mode(), ViewMode::List);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut state = OrderHistoryState::default();
        let slow = state.begin_fetch(true);
        let fast = state.begin_fetch(false);

        assert_eq!(state.complete(fast, Ok(orders(&[7, 6]))), Completion::Applied);
        assert_eq!(state.complete(slow, Ok(orders(&[1]))), Completion::Stale);
        let ids: Vec<u64> = state.orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![7, 6]);
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_failure_does_not_set_error() {
        let mut state = OrderHistoryState::default();
        let slow = state.begin_fetch(true);
        let fast = state.begin_fetch(false);
        state.complete(fast, Ok(orders(&[1])));
        state.complete(slow, Err(OrderHistoryError::Network("timeout".into())));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_expansion_dropped_when_order_disappears() {
        let mut state = OrderHistoryState::default();
        let ticket = state.begin_fetch(true);
        state.complete(ticket, Ok(orders(&[1, 2])));
        state.toggle_expanded(2);

        let ticket = state.begin_fetch(false);
        state.complete(ticket, Ok(orders(&[2, 3])));
        assert!(state.is_expanded(2));

        let ticket = state.begin_fetch(false);
        state.complete(ticket, Ok(orders(&[3])));
        assert_eq!(state.expansion, Expansion::Collapsed);
    }

    #[test]
    fn test_email_arrival_highlights_first_order() {
        let mut state = OrderHistoryState::default();
        assert!(state.apply_arrival(from_email()));
        assert!(state.auto_refresh);
        assert_eq!(state.highlighted, None);

        let ticket = state.begin_fetch(false);
        state.complete(ticket, Ok(orders(&[5, 2])));
        assert_eq!(state.highlighted, Some(5));
        assert!(state.is_highlighted(5));
        assert_eq!(state.take_scroll_target(), Some(5));
        assert_eq!(state.take_scroll_target(), None);
    }

    #[test]
    fn test_arrival_after_list_loaded() {
        let mut state = OrderHistoryState::default();
        let ticket = state.begin_fetch(true);
        state.complete(ticket, Ok(orders(&[5, 2])));
        assert_eq!(state.highlighted, None);

        state.apply_arrival(from_email());
        assert_eq!(state.highlighted, Some(5));
        assert_eq!(state.take_scroll_target(), Some(5));
    }

    #[test]
    fn test_repeated_arrival_is_idempotent() {
        let mut state = OrderHistoryState::default();
        state.apply_arrival(from_email());
        let ticket = state.begin_fetch(false);
        state.complete(ticket, Ok(orders(&[5, 2])));
        state.take_scroll_target();

        let before = state.clone();
        assert!(state.apply_arrival(from_email()));
        assert_eq!(state, before);
        assert_eq!(state.take_scroll_target(), None);
    }

    #[test]
    fn test_refresh_scrolls_only_for_new_highlight() {
        let mut state = OrderHistoryState::default();
        state.apply_arrival(from_email());
        let ticket = state.begin_fetch(false);
        state.complete(ticket, Ok(orders(&[5, 2])));
        assert_eq!(state.take_scroll_target(), Some(5));

        let ticket = state.begin_fetch(false);
        state.complete(ticket, Ok(orders(&[5, 2])));
        assert_eq!(state.take_scroll_target(), None);

        let ticket = state.begin_fetch(false);
        state.complete(ticket, Ok(orders(&[8, 5, 2])));
        assert_eq!(state.highlighted, Some(8));
        assert_eq!(state.take_scroll_target(), Some(8));
    }

    #[test]
    fn test_plain_arrival_does_nothing() {
        let mut state = OrderHistoryState::default();
        assert!(!state.apply_arrival(ArrivalContext::from_query("")));
        let ticket = state.begin_fetch(true);
        state.complete(ticket, Ok(orders(&[5, 2])));
        assert!(!state.auto_refresh);
        assert_eq!(state.highlighted, None);
        assert_eq!(state.take_scroll_target(), None);
    }

    #[test]
    fn test_should_poll() {
        let mut state = OrderHistoryState::default();
        state.toggle_auto_refresh();
        assert!(!state.should_poll(), "initial load still running");

        let ticket = state.begin_fetch(true);
        state.complete(ticket, Ok(Vec::new()));
        assert!(state.should_poll());

        state.begin_fetch(false);
        assert!(state.should_poll(), "background refresh keeps polling");

        state.toggle_auto_refresh();
        assert!(!state.should_poll());
    }
}
