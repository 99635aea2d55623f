mod decode;
mod dispatch;
mod error;
mod handle;
mod json;
mod region;
mod value;

/// Query-name constants and symbolic lookup.
pub mod constants;

/// Decoder strategy identifiers and strategy-selected decoding.
pub use decode::{ScalarKind, Strategy, decode_with};
/// Query-name classification and the dispatching decode entry point.
pub use dispatch::{decode_query, strategy_for};
/// Error and result aliases.
pub use error::{ClError, Result};
/// Handle wrapping and release management.
pub use handle::{Handle, HandleKind, HandleTemplate, RawHandle, ReleaseFn};
/// Host-value delivery as JSON.
pub use json::to_json;
/// Result-region view type.
pub use region::Region;
/// Decoded runtime value types.
pub use value::{ImageFormat, Value};
