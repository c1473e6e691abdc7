//! CLI command handlers, one per file.

mod check;
mod describe;
mod digest;
mod resolve;

pub use check::run_check;
pub use describe::run_describe;
pub use digest::run_digest;
pub use resolve::run_resolve;
