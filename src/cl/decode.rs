use crate::cl::handle::HandleTemplate;
use crate::cl::region::Region;
use crate::cl::value::{ImageFormat, Value};

/// Machine-word width of the queried platform (`size_t`).
const WORD_SIZE: usize = 8;
/// Native pointer width of the queried platform.
const POINTER_SIZE: usize = 8;
/// Byte size of one packed image-format record.
const IMAGE_FORMAT_SIZE: usize = 8;

/// Scalar widths and numeric kinds a query can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
	/// Unsigned 32-bit integer.
	U32,
	/// Signed 32-bit integer.
	I32,
	/// Unsigned 64-bit integer.
	U64,
	/// Machine-word (`size_t`) unsigned integer.
	Word,
	/// Boolean carried in a 32-bit integer; nonzero is true.
	Bool,
	/// 32-bit float.
	F32,
	/// 64-bit float.
	F64,
}

/// Decoder strategy identifiers: the result-region layouts a query can
/// produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
	/// One fixed-width value in region 0.
	Scalar(ScalarKind),
	/// NUL-terminated native string in region 0; any length region is
	/// ignored.
	Str,
	/// Machine-word array in region 0, byte length in region 1.
	WordArray,
	/// One raw handle in region 0, wrapped through the template.
	Pointer,
	/// Raw handle array in region 0, byte length in region 1.
	PointerArray,
	/// Null-terminated word list in region 0; a null region decodes to
	/// null, not an empty array.
	PropertyList,
	/// One packed image-format record in region 0.
	ImageFormat,
	/// Packed image-format records in region 0, record count in region 1.
	ImageFormatArray,
	/// Per-blob byte sizes in region 0, blob count in region 1, one region
	/// per blob from region 2 on.
	BinaryArray,
}

/// Decode one query result with an explicitly selected strategy.
///
/// Total over all inputs: degenerate region lists degrade to the documented
/// default shapes instead of erroring. `args` carries the original native
/// call arguments for strategies that need call context; none of the
/// current strategies read them.
pub fn decode_with(strategy: Strategy, template: Option<&HandleTemplate>, args: &[u64], regions: &[Region<'_>]) -> Value {
	let _ = args;
	match strategy {
		Strategy::Scalar(kind) => decode_scalar(kind, regions),
		Strategy::Str => decode_string(regions),
		Strategy::WordArray => decode_word_array(regions),
		Strategy::Pointer => decode_pointer(template, regions),
		Strategy::PointerArray => decode_pointer_array(template, regions),
		Strategy::PropertyList => decode_property_list(regions),
		Strategy::ImageFormat => decode_image_format(regions),
		Strategy::ImageFormatArray => decode_image_format_array(regions),
		Strategy::BinaryArray => decode_binary_array(regions),
	}
}

fn region<'a>(regions: &[Region<'a>], index: usize) -> Region<'a> {
	regions.get(index).copied().unwrap_or_else(Region::null)
}

/// Element count for a sized-array layout: the size region's value is a
/// byte length, integer-divided by the element width (a trailing partial
/// element is dropped, not an error). Bounded by region 0's capacity, which
/// is invisible for layout-conforming inputs.
fn element_count(regions: &[Region<'_>], width: usize) -> usize {
	let declared = (region(regions, 1).read_u64(0) / width as u64) as usize;
	declared.min(region(regions, 0).len() / width)
}

fn decode_scalar(kind: ScalarKind, regions: &[Region<'_>]) -> Value {
	let data = region(regions, 0);
	match kind {
		ScalarKind::U32 => Value::U32(data.read_u32(0)),
		ScalarKind::I32 => Value::I32(data.read_i32(0)),
		ScalarKind::U64 => Value::U64(data.read_u64(0)),
		ScalarKind::Word => Value::U64(data.read_u64(0)),
		ScalarKind::Bool => Value::Bool(data.read_u32(0) != 0),
		ScalarKind::F32 => Value::F32(data.read_f32(0)),
		ScalarKind::F64 => Value::F64(data.read_f64(0)),
	}
}

fn decode_string(regions: &[Region<'_>]) -> Value {
	let bytes = region(regions, 0).bytes();
	let end = bytes.iter().position(|byte| *byte == 0).unwrap_or(bytes.len());
	Value::String(String::from_utf8_lossy(&bytes[..end]).into_owned().into_boxed_str())
}

fn decode_word_array(regions: &[Region<'_>]) -> Value {
	let data = region(regions, 0);
	let count = element_count(regions, WORD_SIZE);
	let mut values = Vec::with_capacity(count);
	for i in 0..count {
		values.push(Value::U64(data.read_u64(i * WORD_SIZE)));
	}
	Value::Array(values)
}

fn decode_pointer(template: Option<&HandleTemplate>, regions: &[Region<'_>]) -> Value {
	match template {
		Some(template) => Value::Handle(template.wrap(region(regions, 0).read_u64(0))),
		None => Value::Null,
	}
}

fn decode_pointer_array(template: Option<&HandleTemplate>, regions: &[Region<'_>]) -> Value {
	let Some(template) = template else {
		return Value::Null;
	};

	let data = region(regions, 0);
	let count = element_count(regions, POINTER_SIZE);
	let mut values = Vec::with_capacity(count);
	for i in 0..count {
		values.push(Value::Handle(template.wrap(data.read_u64(i * POINTER_SIZE))));
	}
	Value::Array(values)
}

fn decode_property_list(regions: &[Region<'_>]) -> Value {
	let data = region(regions, 0);
	if data.is_null() {
		return Value::Null;
	}

	// Minus one for the implicit terminator element, saturating for
	// degenerate length values.
	let count = element_count(regions, WORD_SIZE).saturating_sub(1);
	let mut values = Vec::with_capacity(count);
	for i in 0..count {
		values.push(Value::I64(data.read_i64(i * WORD_SIZE)));
	}
	Value::Array(values)
}

fn decode_image_format(regions: &[Region<'_>]) -> Value {
	Value::ImageFormat(read_image_format(region(regions, 0), 0))
}

fn decode_image_format_array(regions: &[Region<'_>]) -> Value {
	let data = region(regions, 0);
	// The second region carries a direct record count here, not a byte
	// length.
	let declared = region(regions, 1).read_u32(0) as usize;
	let count = declared.min(data.len() / IMAGE_FORMAT_SIZE);
	let mut values = Vec::with_capacity(count);
	for i in 0..count {
		values.push(Value::ImageFormat(read_image_format(data, i * IMAGE_FORMAT_SIZE)));
	}
	Value::Array(values)
}

fn read_image_format(data: Region<'_>, offset: usize) -> ImageFormat {
	ImageFormat {
		image_channel_order: data.read_u32(offset),
		image_channel_data_type: data.read_u32(offset + 4),
	}
}

fn decode_binary_array(regions: &[Region<'_>]) -> Value {
	let sizes = region(regions, 0);
	let declared = region(regions, 1).read_u64(0) as usize;
	let count = declared.min(regions.len().saturating_sub(2));
	let mut values = Vec::with_capacity(count);
	for i in 0..count {
		let size = sizes.read_u64(i * WORD_SIZE) as usize;
		values.push(Value::Bytes(region(regions, i + 2).prefix(size).to_vec()));
	}
	Value::Array(values)
}

#[cfg(test)]
mod tests {
	use super::{ScalarKind, Strategy, decode_with};
	use crate::cl::region::Region;
	use crate::cl::value::Value;

	fn word_region(value: u64) -> Vec<u8> {
		value.to_le_bytes().to_vec()
	}

	#[test]
	fn scalar_kinds_decode_at_their_width() {
		let bytes = 0x8000_0001_u32.to_le_bytes();
		let regions = [Region::new(&bytes)];

		let Value::U32(v) = decode_with(Strategy::Scalar(ScalarKind::U32), None, &[], &regions) else {
			panic!("expected u32");
		};
		assert_eq!(v, 0x8000_0001);

		let Value::I32(v) = decode_with(Strategy::Scalar(ScalarKind::I32), None, &[], &regions) else {
			panic!("expected i32");
		};
		assert_eq!(v, 0x8000_0001_u32 as i32);

		let Value::Bool(v) = decode_with(Strategy::Scalar(ScalarKind::Bool), None, &[], &regions) else {
			panic!("expected bool");
		};
		assert!(v);
	}

	#[test]
	fn zero_scalar_bool_is_false() {
		let bytes = 0_u32.to_le_bytes();
		let regions = [Region::new(&bytes)];
		let Value::Bool(v) = decode_with(Strategy::Scalar(ScalarKind::Bool), None, &[], &regions) else {
			panic!("expected bool");
		};
		assert!(!v);
	}

	#[test]
	fn word_scalar_widens_to_u64() {
		let bytes = 0x0000_0010_0000_0000_u64.to_le_bytes();
		let regions = [Region::new(&bytes)];
		let Value::U64(v) = decode_with(Strategy::Scalar(ScalarKind::Word), None, &[], &regions) else {
			panic!("expected u64");
		};
		assert_eq!(v, 0x10_0000_0000);
	}

	#[test]
	fn float_scalars_decode() {
		let bytes = 1.5_f64.to_le_bytes();
		let regions = [Region::new(&bytes)];
		let Value::F64(v) = decode_with(Strategy::Scalar(ScalarKind::F64), None, &[], &regions) else {
			panic!("expected f64");
		};
		assert_eq!(v, 1.5);

		let bytes = 0.25_f32.to_le_bytes();
		let regions = [Region::new(&bytes)];
		let Value::F32(v) = decode_with(Strategy::Scalar(ScalarKind::F32), None, &[], &regions) else {
			panic!("expected f32");
		};
		assert_eq!(v, 0.25);
	}

	#[test]
	fn word_array_divides_byte_length() {
		let mut data = Vec::new();
		data.extend_from_slice(&7_u64.to_le_bytes());
		data.extend_from_slice(&9_u64.to_le_bytes());
		data.extend_from_slice(&11_u64.to_le_bytes());
		let len = word_region(24);
		let regions = [Region::new(&data), Region::new(&len)];

		let Value::Array(items) = decode_with(Strategy::WordArray, None, &[], &regions) else {
			panic!("expected array");
		};
		assert_eq!(items.len(), 3);
		let Some(Value::U64(first)) = items.first() else {
			panic!("expected u64 element");
		};
		assert_eq!(*first, 7);
	}

	#[test]
	fn word_array_truncates_partial_trailing_element() {
		let mut data = Vec::new();
		data.extend_from_slice(&7_u64.to_le_bytes());
		data.extend_from_slice(&9_u64.to_le_bytes());
		data.extend_from_slice(&[0xAA; 4]);
		let len = word_region(20);
		let regions = [Region::new(&data), Region::new(&len)];

		let Value::Array(items) = decode_with(Strategy::WordArray, None, &[], &regions) else {
			panic!("expected array");
		};
		assert_eq!(items.len(), 2, "remainder bytes are dropped");
	}

	#[test]
	fn word_array_without_length_region_is_empty() {
		let data = word_region(7);
		let regions = [Region::new(&data)];

		let Value::Array(items) = decode_with(Strategy::WordArray, None, &[], &regions) else {
			panic!("expected array");
		};
		assert!(items.is_empty());
	}

	#[test]
	fn word_array_with_zero_length_is_empty() {
		let data = Vec::new();
		let len = word_region(0);
		let regions = [Region::new(&data), Region::new(&len)];

		let Value::Array(items) = decode_with(Strategy::WordArray, None, &[], &regions) else {
			panic!("expected array");
		};
		assert!(items.is_empty());
	}

	#[test]
	fn property_list_null_region_is_null() {
		let len = word_region(24);
		let regions = [Region::null(), Region::new(&len)];

		assert!(matches!(decode_with(Strategy::PropertyList, None, &[], &regions), Value::Null));
	}

	#[test]
	fn property_list_drops_terminator() {
		let mut data = Vec::new();
		data.extend_from_slice(&0x1004_i64.to_le_bytes());
		data.extend_from_slice(&(-3_i64).to_le_bytes());
		data.extend_from_slice(&0_i64.to_le_bytes());
		let len = word_region(24);
		let regions = [Region::new(&data), Region::new(&len)];

		let Value::Array(items) = decode_with(Strategy::PropertyList, None, &[], &regions) else {
			panic!("expected array");
		};
		assert_eq!(items.len(), 2);
		let Some(Value::I64(second)) = items.get(1) else {
			panic!("expected i64 element");
		};
		assert_eq!(*second, -3);
	}

	#[test]
	fn string_stops_at_terminator_and_ignores_length() {
		let data = b"OpenCL 1.2\0garbage".to_vec();
		let len = word_region(3);
		let regions = [Region::new(&data), Region::new(&len)];

		let Value::String(text) = decode_with(Strategy::Str, None, &[], &regions) else {
			panic!("expected string");
		};
		assert_eq!(text.as_ref(), "OpenCL 1.2");
	}

	#[test]
	fn string_without_terminator_takes_whole_region() {
		let data = b"no-nul".to_vec();
		let regions = [Region::new(&data)];

		let Value::String(text) = decode_with(Strategy::Str, None, &[], &regions) else {
			panic!("expected string");
		};
		assert_eq!(text.as_ref(), "no-nul");
	}

	#[test]
	fn image_format_reads_both_fields() {
		let mut data = Vec::new();
		data.extend_from_slice(&10_u32.to_le_bytes());
		data.extend_from_slice(&20_u32.to_le_bytes());
		let regions = [Region::new(&data)];

		let Value::ImageFormat(format) = decode_with(Strategy::ImageFormat, None, &[], &regions) else {
			panic!("expected image format");
		};
		assert_eq!(format.image_channel_order, 10);
		assert_eq!(format.image_channel_data_type, 20);
	}

	#[test]
	fn image_format_array_uses_direct_count() {
		let mut data = Vec::new();
		for pair in [(1_u32, 2_u32), (3, 4)] {
			data.extend_from_slice(&pair.0.to_le_bytes());
			data.extend_from_slice(&pair.1.to_le_bytes());
		}
		let count = 2_u32.to_le_bytes().to_vec();
		let regions = [Region::new(&data), Region::new(&count)];

		let Value::Array(items) = decode_with(Strategy::ImageFormatArray, None, &[], &regions) else {
			panic!("expected array");
		};
		assert_eq!(items.len(), 2);
		let Some(Value::ImageFormat(last)) = items.last() else {
			panic!("expected image format element");
		};
		assert_eq!(last.image_channel_order, 3);
		assert_eq!(last.image_channel_data_type, 4);
	}

	#[test]
	fn binary_array_slices_each_blob_to_its_size() {
		let mut sizes = Vec::new();
		sizes.extend_from_slice(&3_u64.to_le_bytes());
		sizes.extend_from_slice(&5_u64.to_le_bytes());
		let count = word_region(2);
		let blob_a = b"abc".to_vec();
		let blob_b = b"wxyz5".to_vec();
		let regions = [Region::new(&sizes), Region::new(&count), Region::new(&blob_a), Region::new(&blob_b)];

		let Value::Array(items) = decode_with(Strategy::BinaryArray, None, &[], &regions) else {
			panic!("expected array");
		};
		assert_eq!(items.len(), 2);
		let Some(Value::Bytes(first)) = items.first() else {
			panic!("expected bytes element");
		};
		assert_eq!(first, b"abc");
		let Some(Value::Bytes(second)) = items.get(1) else {
			panic!("expected bytes element");
		};
		assert_eq!(second, b"wxyz5");
	}

	#[test]
	fn pointer_without_template_is_null() {
		let data = word_region(0x1000);
		let regions = [Region::new(&data)];
		assert!(matches!(decode_with(Strategy::Pointer, None, &[], &regions), Value::Null));
	}
}
