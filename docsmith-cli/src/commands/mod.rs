//! CLI command implementations.

pub mod build;
pub mod check;

pub use build::build_site;
pub use check::check_site;
