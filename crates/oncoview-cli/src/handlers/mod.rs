mod context;

pub mod classes;
pub mod config;
pub mod show;

pub use context::HandlerContext;
