pub mod browse;
pub mod listing;
pub mod pipeline;
pub mod price;
