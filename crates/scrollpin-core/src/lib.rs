//! Scroll choreography for pinned full-viewport sections.
//!
//! Everything in this crate is platform-free: the web front-end feeds it
//! scroll offsets and measured geometry and pushes the resulting visual
//! states back into the DOM through a [`VisualSink`].

pub mod constants;
pub mod contact;
pub mod controller;
pub mod easing;
pub mod error;
pub mod layout;
pub mod page;
pub mod range;
pub mod registry;
pub mod reveal;
pub mod scrub;
pub mod sections;
pub mod snap;
pub mod stage;
pub mod timeline;
pub mod visual;

pub use constants::*;
pub use contact::*;
pub use controller::*;
pub use easing::*;
pub use error::*;
pub use layout::*;
pub use page::*;
pub use range::*;
pub use registry::*;
pub use reveal::*;
pub use scrub::*;
pub use snap::*;
pub use stage::*;
pub use timeline::*;
pub use visual::*;
