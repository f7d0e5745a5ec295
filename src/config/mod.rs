//! Configuration module for kas-kelas
//!
//! - Path resolution (environment override or platform config directory)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::KasPaths;
pub use settings::Settings;
