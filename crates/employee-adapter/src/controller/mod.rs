//! Inbound Adapters - Turn external requests into use case calls

pub mod http;
