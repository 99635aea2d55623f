use serde_json::{Map, Value as JsonValue};

use crate::cl::value::Value;

/// Render a decoded value as a host JSON value.
///
/// Null, booleans, numbers, strings, and arrays map directly. Byte blobs
/// render as arrays of byte numbers, the image-format record as an object
/// with its two named fields, and opaque handles as `{"kind", "handle"}`
/// objects with the raw value in hex.
pub fn to_json(value: &Value) -> JsonValue {
	match value {
		Value::Null => JsonValue::Null,
		Value::Bool(v) => serde_json::json!(v),
		Value::U32(v) => serde_json::json!(v),
		Value::I32(v) => serde_json::json!(v),
		Value::U64(v) => serde_json::json!(v),
		Value::I64(v) => serde_json::json!(v),
		Value::F32(v) => serde_json::json!(v),
		Value::F64(v) => serde_json::json!(v),
		Value::Bytes(v) => {
			let bytes: Vec<JsonValue> = v.iter().map(|item| serde_json::json!(item)).collect();
			JsonValue::Array(bytes)
		}
		Value::String(v) => serde_json::json!(v),
		Value::Handle(v) => {
			let mut out = Map::new();
			out.insert("kind".to_owned(), serde_json::json!(v.kind().label()));
			out.insert("handle".to_owned(), serde_json::json!(format!("0x{:016x}", v.raw())));
			JsonValue::Object(out)
		}
		Value::Array(items) => {
			let values: Vec<JsonValue> = items.iter().map(to_json).collect();
			JsonValue::Array(values)
		}
		Value::ImageFormat(format) => serde_json::to_value(format).unwrap_or(JsonValue::Null),
	}
}

#[cfg(test)]
mod tests {
	use super::to_json;
	use crate::cl::handle::{HandleKind, HandleTemplate};
	use crate::cl::value::{ImageFormat, Value};

	#[test]
	fn image_format_keeps_exact_field_names() {
		let value = Value::ImageFormat(ImageFormat {
			image_channel_order: 10,
			image_channel_data_type: 20,
		});
		assert_eq!(
			to_json(&value),
			serde_json::json!({"image_channel_order": 10, "image_channel_data_type": 20})
		);
	}

	#[test]
	fn handle_renders_kind_and_hex_value() {
		let template = HandleTemplate::new(HandleKind::Device, |_| {});
		let value = Value::Handle(template.wrap(0xAB));
		assert_eq!(
			to_json(&value),
			serde_json::json!({"kind": "device", "handle": "0x00000000000000ab"})
		);
	}

	#[test]
	fn scalars_and_arrays_map_directly() {
		let value = Value::Array(vec![Value::Null, Value::Bool(true), Value::U64(7), Value::String("x".into())]);
		assert_eq!(to_json(&value), serde_json::json!([null, true, 7, "x"]));
	}

	#[test]
	fn bytes_render_as_byte_numbers() {
		let value = Value::Bytes(vec![1, 2, 255]);
		assert_eq!(to_json(&value), serde_json::json!([1, 2, 255]));
	}
}
