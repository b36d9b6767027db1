//! Wire types shared between the marketplace backend and the web client

pub mod orders;
pub mod system;
