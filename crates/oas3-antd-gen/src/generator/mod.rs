pub mod analyzer;
pub mod assembler;
pub mod config;
pub mod context;
pub mod errors;
pub mod grouping;
pub mod metrics;
pub mod mode;
pub mod model;
pub mod naming;
pub mod operation_filter;
pub mod orchestrator;
pub mod render;
pub(crate) mod schema;
pub mod sections;
pub mod selection;

#[cfg(test)]
mod tests;
