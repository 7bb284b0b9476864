#![forbid(unsafe_code)]
#![warn(missing_docs)]
//! Deterministic scroll mountings and the render pipeline for vertical classical poems.
//!
//! A request names a poem (2, 4 or 6 verse lines), a subject name for the seal, a script style
//! and either a curated frame or a seed for a generated mounting. The pipeline resolves fonts,
//! builds a layered node tree, lays it out with taffy, serializes it as SVG and rasterizes the
//! SVG to PNG with resvg.
//!
//! ```no_run
//! use inkframe::{FrameId, FsFontLoader, Mounting, RenderRequest};
//!
//! let request = RenderRequest::new(["白日依山尽", "黄河入海流"], Some("王之涣"), 2024)?
//!     .with_mounting(Mounting::Frame(FrameId::SilkScroll));
//! let out = inkframe::render(&request, FsFontLoader::new("fonts"))?;
//! std::fs::write("poem.png", out.bytes())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod config;
pub mod fonts;
pub mod foundation;
pub mod frames;
pub mod mount;
pub mod poem;
pub mod render;
pub mod server;
pub mod style;
pub mod tree;

pub use api::{ApiResponse, PoemSource, RenderPayload};
pub use config::ServiceConfig;
pub use fonts::{
    CachedFontLoader, FontAsset, FontLoader, FontResolution, FontResolver, FontStyle,
    FsFontLoader,
};
pub use foundation::core::{Canvas, Color, Hsl};
pub use foundation::error::{InkError, InkResult, Stage};
pub use frames::{FrameId, compose_frame};
pub use mount::{compose_mounting, sanitize_identifier};
pub use poem::{Poem, SealLayout, SealSpec, VerseLine, build_poem_tree};
pub use render::{
    Mounting, OutputFormat, RenderPool, RenderRequest, RenderResult, render, render_with_fonts,
};
pub use style::{SeededRng, StyleParameters, seed_hash, seed_unit};
pub use tree::{LaidOut, Node, layout_tree};
