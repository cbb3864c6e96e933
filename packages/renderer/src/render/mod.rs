//! Tag dispatch and rendering engine.
//!
//! This module maps XML tag names to handlers through a registry built
//! once at startup, then folds the document tree into an abstract
//! `RenderNode` tree. Unknown tags fall back to a generic column-grid
//! container.

mod config;
mod engine;
mod handler;
pub mod handlers;
mod node;
mod registry;
mod types;

pub use config::create_resume_registry;
pub use engine::RenderEngine;
pub use handler::{RecurseFn, TagHandler};
pub use node::{RenderNode, Tone};
pub use registry::HandlerRegistry;
pub use types::{ContactStyle, HandlerKind, RenderOptions, RootMode};
