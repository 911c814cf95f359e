pub mod input;
pub mod metrics;
pub mod patterns;
