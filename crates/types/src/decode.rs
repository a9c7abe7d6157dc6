//! Decoding capabilities a target may implement
//!
//! When a value is decoded into a target, the capabilities are tried in a
//! fixed order: [`Decoder`], then [`CtxDecoder`], then [`CtxConfigDecoder`],
//! and finally [`StructuralDecode`], which reads the value's marshalled
//! document through serde.

use crate::{Context, Value};
use serde::de::DeserializeOwned;

/// Target that decodes itself from a value
pub trait Decoder {
    fn decode(&mut self, value: &dyn Value) -> anyhow::Result<()>;
}

/// Target that decodes itself from a value with a caller context
pub trait CtxDecoder {
    fn decode(&mut self, ctx: &Context, value: &dyn Value) -> anyhow::Result<()>;
}

/// Context-aware decoder under a distinct method name
pub trait CtxConfigDecoder {
    fn decode_config(&mut self, ctx: &Context, value: &dyn Value) -> anyhow::Result<()>;
}

/// Target filled by serde from a marshalled YAML document
pub trait StructuralDecode {
    fn decode_document(&mut self, document: &[u8]) -> Result<(), serde_yaml::Error>;
}

impl<T: DeserializeOwned> StructuralDecode for T {
    fn decode_document(&mut self, document: &[u8]) -> Result<(), serde_yaml::Error> {
        *self = serde_yaml::from_slice(document)?;
        Ok(())
    }
}

/// Something a value can be decoded into
///
/// Each accessor returns `None` unless the target opts into that capability.
pub trait DecodeTarget {
    fn as_decoder(&mut self) -> Option<&mut dyn Decoder> {
        None
    }

    fn as_ctx_decoder(&mut self) -> Option<&mut dyn CtxDecoder> {
        None
    }

    fn as_ctx_config_decoder(&mut self) -> Option<&mut dyn CtxConfigDecoder> {
        None
    }

    fn as_structural(&mut self) -> Option<&mut dyn StructuralDecode> {
        None
    }
}

/// Capability selected for a decode call, borrowing the target
pub enum Capability<'a> {
    PlainSelfDecode(&'a mut dyn Decoder),
    ContextSelfDecode(&'a mut dyn CtxDecoder),
    ContextConfigDecode(&'a mut dyn CtxConfigDecoder),
    Structural(&'a mut dyn StructuralDecode),
    None,
}

impl Capability<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Capability::PlainSelfDecode(_) => "plain",
            Capability::ContextSelfDecode(_) => "context",
            Capability::ContextConfigDecode(_) => "context-config",
            Capability::Structural(_) => "structural",
            Capability::None => "none",
        }
    }
}

/// Pick the first capability `target` implements, in decode priority order
pub fn select(target: &mut dyn DecodeTarget) -> Capability<'_> {
    if target.as_decoder().is_some() {
        return target
            .as_decoder()
            .map_or(Capability::None, Capability::PlainSelfDecode);
    }
    if target.as_ctx_decoder().is_some() {
        return target
            .as_ctx_decoder()
            .map_or(Capability::None, Capability::ContextSelfDecode);
    }
    if target.as_ctx_config_decoder().is_some() {
        return target
            .as_ctx_config_decoder()
            .map_or(Capability::None, Capability::ContextConfigDecode);
    }
    target
        .as_structural()
        .map_or(Capability::None, Capability::Structural)
}

/// Decode target wrapping any serde-deserializable type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structural<T>(pub T);

impl<T> Structural<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> DecodeTarget for Structural<T> {
    fn as_structural(&mut self) -> Option<&mut dyn StructuralDecode> {
        Some(&mut self.0)
    }
}

/// Mark serde types as structural decode targets
///
/// ```ignore
/// #[derive(Deserialize, Default)]
/// struct Server { host: String, port: u16 }
/// types::structural_target!(Server);
/// ```
#[macro_export]
macro_rules! structural_target {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::DecodeTarget for $ty {
                fn as_structural(&mut self) -> ::std::option::Option<&mut dyn $crate::StructuralDecode> {
                    ::std::option::Option::Some(self)
                }
            }
        )+
    };
}
