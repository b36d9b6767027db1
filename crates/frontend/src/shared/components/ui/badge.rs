use contracts::orders::history::OrderStatus;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Color and icon for an order status
pub fn order_status_style(status: OrderStatus) -> (BadgeColor, &'static str) {
    match status {
        OrderStatus::Approved => (BadgeColor::Success, "check-circle"),
        OrderStatus::Rejected => (BadgeColor::Danger, "x-circle"),
        OrderStatus::Pending => (BadgeColor::Warning, "clock"),
    }
}

/// Status pill on an order card
#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> impl IntoView {
    let (color, icon_name) = order_status_style(status);

    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {icon(icon_name)}
            " "
            {status.label()}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_style() {
        assert_eq!(order_status_style(OrderStatus::Approved).1, "check-circle");
        assert_eq!(order_status_style(OrderStatus::Rejected).1, "x-circle");
        assert_eq!(order_status_style(OrderStatus::Pending).1, "clock");
        assert!(matches!(
            order_status_style(OrderStatus::Pending).0,
            BadgeColor::Warning
        ));
    }
}
