//! Decoding of OpenCL query results into dynamically typed host values.

/// Result-region decoding, query-name dispatch, and native handle wrapping.
pub mod cl;
