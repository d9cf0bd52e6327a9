pub mod config;
pub mod logging;

pub mod cache;
pub mod catalog;
pub mod fetch;
pub mod sampler;
pub mod sections;
