pub mod identifiers;
pub mod packages;

pub use packages::{NamingStrategy, PackageNaming};
