//! Adapter utilities for the `snapsheet` crate.
//!
//! The `snapsheet` crate is UI-agnostic and focuses on the drag/snap state machine. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - `Tween`/`Tweener`: the interpolation primitive the sheet animates with
//! - `Controller`: pointer tracking, release velocity and a frame `tick`
//! - `SheetContent`: full-content or pinned-header + body builders
//!
//! This crate is intentionally framework-agnostic (no egui/iced/ratatui bindings).
#![forbid(unsafe_code)]

extern crate alloc;

mod content;
mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use content::{FullBuilder, SectionBuilder, SheetContent, SheetLayout};
pub use controller::Controller;
pub use tween::{Tween, Tweener};
