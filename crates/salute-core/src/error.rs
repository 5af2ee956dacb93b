use thiserror::Error;

/// Failures surfaced by greeter construction and chain operations.
///
/// All variants abort the chain at the failing call; side effects of earlier
/// links stand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetError {
    /// The language code is not in `catalogs::SUPPORTED_LANGUAGES`.
    #[error("unsupported language code \"{code}\"")]
    InvalidLanguage { code: String },

    /// `render_to` was called on a greeter with no rendering surface bound.
    #[error("no rendering surface is bound")]
    RenderSurfaceUnavailable,

    /// The selector was empty or matched no target on the rendering surface.
    #[error("selector \"{selector}\" matched no render target")]
    MissingTarget { selector: String },
}
