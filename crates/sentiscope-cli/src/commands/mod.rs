//! Command implementations.

pub mod analyze;
pub mod batch;
pub mod examples;
pub mod health;
pub mod scale;

pub use self::analyze::{execute_analyze, submit_and_render};
pub use self::batch::execute_batch;
pub use self::examples::{execute_examples, try_example};
pub use self::health::execute_health;
pub use self::scale::execute_scale;
