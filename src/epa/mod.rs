pub mod aggregate;
pub mod calculator;
pub mod recommend;

pub use aggregate::aggregate_net_epa;
pub use calculator::calculate_epa;
pub use recommend::generate_recommendations;
