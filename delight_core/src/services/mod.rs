pub mod order_service;

pub use order_service::{processed_edit, processing_edit, OrderService};
