use crate::domain::orders::ui::list::OrderHistoryList;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="page">"Page not found."</div> }>
                <Route path=path!("/orders/history") view=OrderHistoryList />
            </Routes>
        </Router>
    }
}
