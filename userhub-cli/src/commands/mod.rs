pub mod args;
pub mod import;
pub mod serve;

pub use import::run_import;
pub use serve::run_serve;
