use contracts::orders::history::OrderHistoryItem;
use leptos::prelude::*;

use crate::shared::date_utils::format_order_date;
use crate::shared::icons::icon;

const CONTACT_PENDING_NOTE: &str =
    "Contact information will be available once the seller approves your request.";

/// "buy" -> "Buy"
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Detail panel under an expanded order card
#[component]
pub fn OrderDetails(order: OrderHistoryItem) -> impl IntoView {
    let order_date = order
        .order_date
        .as_deref()
        .map(format_order_date)
        .unwrap_or_default();
    let quantity = order.explicit_quantity().map(|q| {
        view! {
            <li>
                <span class="order-details__label">"Quantity:"</span>
                <span class="order-details__value">{q}</span>
            </li>
        }
    });

    let seller = match order.seller_contact() {
        Some(contact) => {
            let name = contact.name.to_string();
            let email = contact.email.to_string();
            let hostel = format!("Hostel: {}", contact.hostel);
            let phone = contact.phone.map(|p| {
                let phone = p.to_string();
                view! {
                    <div class="order-details__contact-row">
                        {icon("phone")}
                        <span>{phone}</span>
                    </div>
                }
            });
            view! {
                <div class="order-details__contact order-details__contact--approved">
                    <h4>"Seller Contact Information"</h4>
                    <div class="order-details__contact-grid">
                        <div class="order-details__contact-row">
                            {icon("user")}
                            <span>{name}</span>
                        </div>
                        <div class="order-details__contact-row">
                            {icon("mail")}
                            <span>{email}</span>
                        </div>
                        {phone}
                        <div class="order-details__contact-row">
                            {icon("map-pin")}
                            <span>{hostel}</span>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="order-details__contact order-details__contact--pending">
                <p>{CONTACT_PENDING_NOTE}</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="order-details">
            <div class="order-details__grid">
                <div>
                    <h4 class="order-details__heading">"Order Details"</h4>
                    <ul class="order-details__list">
                        <li>
                            <span class="order-details__label">"Status:"</span>
                            <span class="order-details__value">{order.status.as_str()}</span>
                        </li>
                        <li>
                            <span class="order-details__label">"Order Date:"</span>
                            <span class="order-details__value">{order_date}</span>
                        </li>
                        <li>
                            <span class="order-details__label">"Transaction Type:"</span>
                            <span class="order-details__value">{capitalize(&order.transaction_type)}</span>
                        </li>
                        {quantity}
                    </ul>
                </div>
                <div>
                    <h4 class="order-details__heading">"Seller Information"</h4>
                    {seller}
                </div>
            </div>
            <div class="order-details__item">
                <h4 class="order-details__heading">"Item Details"</h4>
                <p>{order.item_description.clone()}</p>
            </div>
        </div>
    }
}
