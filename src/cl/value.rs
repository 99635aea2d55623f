use serde::Serialize;

use crate::cl::handle::Handle;

/// Dynamically typed result of one query decode.
#[derive(Debug, Clone)]
pub enum Value {
	Null,
	Bool(bool),
	U32(u32),
	I32(i32),
	U64(u64),
	I64(i64),
	F32(f32),
	F64(f64),
	Bytes(Vec<u8>),
	String(Box<str>),
	Handle(Handle),
	Array(Vec<Value>),
	ImageFormat(ImageFormat),
}

/// The one fixed-shape record a query can produce: an image format
/// described by its two channel fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageFormat {
	/// Channel order constant.
	pub image_channel_order: u32,
	/// Channel data type constant.
	pub image_channel_data_type: u32,
}
