//! Hand-off to a 2D symbol renderer
//!
//! Drawing PDF417 bars is not this crate's job. A renderer implements
//! [`SymbolRenderer`] and receives the finished payload text; the codec makes
//! sure it only ever sees a complete, valid payload.

use crate::error::Error;
use crate::payload::{encode_with, EncodedPayload};
use crate::record::PaymentRecord;
use crate::validation::ValidationPolicy;
use thiserror::Error as ThisError;

/// Something that turns payload text into a drawable symbol
pub trait SymbolRenderer {
    /// The rendered symbol (an image, a bar matrix, an SVG string, ...)
    type Symbol;
    /// Renderer failure
    type Error: std::error::Error + Send + Sync + 'static;

    fn render(&self, payload: &str) -> Result<Self::Symbol, Self::Error>;
}

/// How the payload is prepared for the renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fold diacritics to ASCII before rendering
    pub transliterate: bool,
    pub policy: ValidationPolicy,
}

/// Failure while producing a symbol
#[derive(Debug, ThisError)]
pub enum RenderError<E: std::error::Error + 'static> {
    /// The record could not be encoded
    #[error(transparent)]
    Codec(#[from] Error),

    /// The renderer rejected the payload
    #[error("Renderer error: {0}")]
    Renderer(#[source] E),
}

/// A rendered symbol together with the payload it encodes
#[derive(Debug, Clone)]
pub struct RenderedSymbol<S> {
    pub payload: EncodedPayload,
    pub symbol: S,
}

/// Validate and encode `record`, then hand the payload to `renderer`
pub fn render_record<R: SymbolRenderer>(
    record: &PaymentRecord,
    renderer: &R,
    options: RenderOptions,
) -> Result<RenderedSymbol<R::Symbol>, RenderError<R::Error>> {
    let payload = encode_with(record, &options.policy)?;

    let symbol = if options.transliterate {
        renderer.render(&payload.transliterated())
    } else {
        renderer.render(payload.as_str())
    }
    .map_err(RenderError::Renderer)?;

    Ok(RenderedSymbol { payload, symbol })
}
