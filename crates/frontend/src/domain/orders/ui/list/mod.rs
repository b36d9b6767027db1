pub mod state;

use std::time::Duration;

use contracts::orders::history::{order_anchor_id, OrderHistoryItem};
use gloo_timers::future::TimeoutFuture;
use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use thaw::*;

use self::state::create_state;
use crate::domain::orders::api::{fetch_order_history, HttpOrderHistoryApi};
use crate::domain::orders::arrival::ArrivalContext;
use crate::domain::orders::controller::{Completion, OrderHistoryState, ViewMode};
use crate::domain::orders::refresh::RefreshTimer;
use crate::domain::orders::ui::details::OrderDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::badge::OrderStatusBadge;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::system::auth::storage::LocalStorage;

/// Scroll the card of `order_id` to the middle of the viewport once layout settled
fn scroll_to_order(order_id: u64, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&order_anchor_id(order_id)));
        if let Some(element) = element {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Center);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[component]
pub fn OrderHistoryList() -> impl IntoView {
    let config = AppConfig::load();
    let api = StoredValue::new(HttpOrderHistoryApi::new(config.api_url()));
    let refresh_interval = Duration::from_millis(u64::from(config.refresh.interval_ms));
    let scroll_delay_ms = config.highlight.scroll_delay_ms;

    let state = create_state();

    // Every fetch goes through here: mount, arrival, Refresh button and the timer
    let load_orders = move |show_spinner: bool| {
        let Some(ticket) = state.try_update(|s| s.begin_fetch(show_spinner)) else {
            return;
        };
        let Some(api) = api.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let result = fetch_order_history(&api, &LocalStorage).await;
            if let Err(e) = &result {
                log::error!("Error fetching order history: {}", e);
            }
            let outcome = state.try_update(|s| (s.complete(ticket, result), s.take_scroll_target()));
            if let Some((completion, scroll_target)) = outcome {
                if completion == Completion::Stale {
                    log::debug!("Discarded stale order history response");
                }
                if let Some(order_id) = scroll_target {
                    scroll_to_order(order_id, scroll_delay_ms);
                }
            }
        });
    };

    // Load on mount
    Effect::new(move |_| {
        load_orders(true);
    });

    // Arrival via e-mail link: refetch, enable auto-refresh, highlight newest order
    let location = use_location();
    Effect::new(move |_| {
        let arrival = ArrivalContext::from_query(&location.search.get());
        let outcome = state.try_update(|s| (s.apply_arrival(arrival), s.take_scroll_target()));
        if let Some((refetch, scroll_target)) = outcome {
            if let Some(order_id) = scroll_target {
                scroll_to_order(order_id, scroll_delay_ms);
            }
            if refetch {
                log::debug!("Arrived from e-mail link, refreshing order history");
                load_orders(false);
            }
        }
    });

    // Auto-refresh interval
    let should_poll = Memo::new(move |_| state.with(|s| s.should_poll()));
    let timer = StoredValue::new(RefreshTimer::<IntervalHandle>::default());
    Effect::new(move |_| {
        let run = should_poll.get();
        timer.update_value(|timer| {
            timer.sync(run, || {
                set_interval_with_handle(move || load_orders(false), refresh_interval)
                    .map_err(|e| log::error!("Failed to start auto-refresh: {:?}", e))
                    .ok()
            });
        });
    });
    on_cleanup(move || {
        timer.try_update_value(|timer| timer.cancel());
    });

    let view_mode = Memo::new(move |_| state.with(|s| s.view_mode()));
    let orders = Memo::new(move |_| state.with(|s| s.orders.clone()));
    let auto_refresh = Memo::new(move |_| state.with(|s| s.auto_refresh));

    view! {
        <div class="page order-history">
            {move || match view_mode.get() {
                ViewMode::Loading => view! {
                    <div class="order-history__loading">
                        <Spinner />
                    </div>
                }.into_any(),
                ViewMode::Error(message) => view! {
                    <div class="order-history__error">
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">{icon("alert-circle")}</span>
                            <span class="warning-box__text">{message}</span>
                        </div>
                        <div class="order-history__retry">
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| reload_page()>
                                "Try Again"
                            </Button>
                        </div>
                    </div>
                }.into_any(),
                mode => view! {
                    <PageHeader
                        title="My Purchase History"
                        subtitle="View all your past and pending orders"
                    >
                        <Space>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| load_orders(false)>
                                {icon("refresh")}
                                " Refresh"
                            </Button>
                            <Button
                                appearance=Signal::derive(move || {
                                    if auto_refresh.get() {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                })
                                on_click=move |_| state.update(|s| s.toggle_auto_refresh())
                            >
                                {move || if auto_refresh.get() {
                                    view! { {icon("pause")} " Auto-refresh ON" }.into_any()
                                } else {
                                    view! { {icon("play")} " Auto-refresh OFF" }.into_any()
                                }}
                            </Button>
                        </Space>
                    </PageHeader>
                    {if mode == ViewMode::Empty {
                        view! { <EmptyOrderHistory /> }.into_any()
                    } else {
                        view! {
                            <div class="order-history__cards">
                                <For
                                    each=move || orders.get()
                                    key=card_key
                                    children=move |order| view! { <OrderCard order=order state=state /> }
                                />
                            </div>
                        }.into_any()
                    }}
                }.into_any(),
            }}
        </div>
    }
}

/// Cards are keyed by order id plus row content, so a poll only rebuilds rows that changed
fn card_key(order: &OrderHistoryItem) -> (u64, String) {
    (order.id, serde_json::to_string(order).unwrap_or_default())
}

#[component]
fn EmptyOrderHistory() -> impl IntoView {
    view! {
        <div class="card order-history__empty">
            <div class="order-history__empty-icon">{icon("shopping-bag")}</div>
            <h3>"No orders yet"</h3>
            <p>"You haven't made any purchases yet. Explore our marketplace to find items!"</p>
            <a href="/app" rel="external" class="button button--primary">
                "Browse Marketplace"
            </a>
        </div>
    }
}

/// Summary row of one order; clicking it opens or closes the details
#[component]
fn OrderCard(order: OrderHistoryItem, state: RwSignal<OrderHistoryState>) -> impl IntoView {
    let id = order.id;
    let expanded = Memo::new(move |_| state.with(|s| s.is_expanded(id)));
    let highlighted = Memo::new(move |_| state.with(|s| s.is_highlighted(id)));

    let thumbnail = match order.image_url() {
        Some(url) => view! {
            <img src=url.to_string() alt=order.item_title.clone() class="order-card__image" />
        }
        .into_any(),
        None => view! {
            <div class="order-card__image-placeholder">{icon("shopping-bag")}</div>
        }
        .into_any(),
    };
    let total = format_money(order.line_total());
    let unit_price = format!("{} per item", format_money(order.item_price));
    let quantity = format!("Quantity: {}", order.effective_quantity());
    let anchor = order.anchor_id();
    let status = order.status;
    let title = order.item_title.clone();
    let excerpt = order.item_description.clone();

    view! {
        <div
            id=anchor
            class=move || {
                if highlighted.get() { "card order-card order-card--highlighted" } else { "card order-card" }
            }
        >
            <div class="order-card__header" on:click=move |_| state.update(|s| s.toggle_expanded(id))>
                <div class="order-card__summary">
                    <div class="order-card__thumbnail">{thumbnail}</div>
                    <div>
                        <div class="order-card__meta">
                            <OrderStatusBadge status=status />
                            <span class="order-card__id">{format!("Order ID: #{}", id)}</span>
                        </div>
                        <h3 class="order-card__title">{title}</h3>
                        <p class="order-card__excerpt">{excerpt}</p>
                    </div>
                </div>
                <div class="order-card__pricing">
                    <div class="order-card__total">{total}</div>
                    <div class="order-card__unit-price">{unit_price}</div>
                    <div class="order-card__quantity">{quantity}</div>
                    {move || if expanded.get() { icon("chevron-up") } else { icon("chevron-down") }}
                </div>
            </div>
            {move || expanded.get().then(|| view! { <OrderDetails order=order.clone() /> })}
        </div>
    }
}
