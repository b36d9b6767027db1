//! Buyer's purchase history: fetching, page state and the list view

pub mod api;
pub mod arrival;
pub mod controller;
pub mod error;
pub mod refresh;
pub mod ui;
