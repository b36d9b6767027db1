//! Persisted sign-in records left by the marketplace login flows

pub mod storage;
pub mod token;
