use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ClError>;

/// Errors produced at the symbolic constant surface.
///
/// The decode path itself is total: degenerate inputs degrade to documented
/// default values and never surface here.
#[derive(Debug, Error)]
pub enum ClError {
	/// Symbolic query-name lookup failed.
	#[error("unknown query constant: {name}")]
	UnknownConstant {
		/// User-provided constant name.
		name: String,
	},
}
