//! nibbledns application layer: response strategies and query dispatch.
pub mod services;
pub mod use_cases;
