use leptos::prelude::*;

use crate::domain::orders::controller::OrderHistoryState;

pub fn create_state() -> RwSignal<OrderHistoryState> {
    RwSignal::new(OrderHistoryState::default())
}
