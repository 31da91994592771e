pub mod browse;

pub use browse::browse_page;
