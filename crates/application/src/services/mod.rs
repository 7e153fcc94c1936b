pub mod name_synthesis;
pub mod response_strategy;

pub use name_synthesis::{get_ipv6_for_name, get_name_for_ipv6};
pub use response_strategy::{respond, StrategyResponse};
