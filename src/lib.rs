//! # infobox
//!
//! Structured field extraction from wiki markup.
//!
//! Two dialects are understood:
//!
//! - infobox template invocations, `{{Infobox Item |name = ... |weight = ... }}`
//! - data-module table literals, `return { limit = 70, value = 1200 }`
//!
//! Both parse into a [`wiki::Template`], a read-only mapping that answers
//! typed, sentinel-aware queries. The [`dump`] module builds the item dumpers
//! on top of it.

pub mod dump;
pub mod wiki;
