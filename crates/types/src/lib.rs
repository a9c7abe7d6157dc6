//! Shared configuration value contract
//!
//! This crate defines the format-independent interface that every format
//! adapter exposes to the host: the [`Value`] and [`Cursor`] traits, the
//! decoding capabilities, the [`Loader`] trait and the error taxonomy.

pub mod context;
pub mod data;
pub mod decode;
pub mod error;
pub mod fileset;
pub mod kind;
pub mod loader;
pub mod utils;
pub mod value;

// Re-export commonly used types
pub use context::Context;
pub use data::Data;
pub use decode::{
    select, Capability, CtxConfigDecoder, CtxDecoder, DecodeTarget, Decoder, Structural,
    StructuralDecode,
};
pub use error::{BoxError, ConfigError, Result};
pub use fileset::FileSet;
pub use kind::Kind;
pub use loader::Loader;
pub use value::{Cursor, Entries, Value};
