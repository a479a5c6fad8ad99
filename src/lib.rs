//! # bmml2dot
//!
//! Extract the links between Balsamiq mockups (`.bmml` files) and write
//! them as a Graphviz `dot` graph.
//!
//! Each link-bearing control contributes one edge per caption/destination
//! pair:
//!
//! ```text
//! digraph G {
//! 	"Login.bmml" -> "Home.bmml"[label="Sign in"]
//! }
//! ```
//!
//! Render with `dot -Tpng graph.dot > graph.png`.

pub mod core;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod parsers;
