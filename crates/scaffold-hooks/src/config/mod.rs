//! Hook configuration
//!
//! This module provides:
//! - Boolean coercion for rendered answer strings
//! - Untyped context loading (command line, environment, context files)
//! - The typed [`HookConfig`] consumed by the hook

pub mod context;
pub mod flags;
pub mod settings;

pub use context::RawContext;
pub use flags::is_yes;
pub use settings::HookConfig;
