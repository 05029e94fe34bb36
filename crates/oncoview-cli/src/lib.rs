// NOTE: oncoview Architecture Rationale
//
// Why a separate presentation layer (not render straight from the payload)?
// - The inference service owns the wire format; it adds fields and models over time
// - View models are plain data, so JSON output and text output never disagree
// - Display lookups (colors, icons, descriptions) are total: unknown codes and
//   model names degrade to fallbacks instead of failing the whole report
//
// Why is expansion state outside the view models?
// - A view model is a read-only snapshot of one response
// - Which models are expanded is user state; it is reset on every new response
//   and must never leak into the prediction data itself

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat, ViewModeArg};
pub use commands::run;
