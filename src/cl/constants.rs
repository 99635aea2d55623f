//! Query-name constants for the platform info surface.
//!
//! Values follow the native headers; names drop the `CL_` prefix, matching
//! how the host surface exposes them. Names with no dedicated dispatch
//! entry (reference counts, vendor ids, and similar) decode through the
//! default scalar-u32 strategy.

#![allow(missing_docs)]

use crate::cl::{ClError, Result};

// platform info
pub const PLATFORM_PROFILE: u32 = 0x0900;
pub const PLATFORM_VERSION: u32 = 0x0901;
pub const PLATFORM_NAME: u32 = 0x0902;
pub const PLATFORM_VENDOR: u32 = 0x0903;
pub const PLATFORM_EXTENSIONS: u32 = 0x0904;

// device info
pub const DEVICE_TYPE: u32 = 0x1000;
pub const DEVICE_VENDOR_ID: u32 = 0x1001;
pub const DEVICE_MAX_COMPUTE_UNITS: u32 = 0x1002;
pub const DEVICE_MAX_WORK_ITEM_DIMENSIONS: u32 = 0x1003;
pub const DEVICE_MAX_WORK_GROUP_SIZE: u32 = 0x1004;
pub const DEVICE_MAX_WORK_ITEM_SIZES: u32 = 0x1005;
pub const DEVICE_MAX_CLOCK_FREQUENCY: u32 = 0x100C;
pub const DEVICE_ADDRESS_BITS: u32 = 0x100D;
pub const DEVICE_MAX_READ_IMAGE_ARGS: u32 = 0x100E;
pub const DEVICE_MAX_WRITE_IMAGE_ARGS: u32 = 0x100F;
pub const DEVICE_MAX_MEM_ALLOC_SIZE: u32 = 0x1010;
pub const DEVICE_IMAGE2D_MAX_WIDTH: u32 = 0x1011;
pub const DEVICE_IMAGE2D_MAX_HEIGHT: u32 = 0x1012;
pub const DEVICE_IMAGE3D_MAX_WIDTH: u32 = 0x1013;
pub const DEVICE_IMAGE3D_MAX_HEIGHT: u32 = 0x1014;
pub const DEVICE_IMAGE3D_MAX_DEPTH: u32 = 0x1015;
pub const DEVICE_IMAGE_SUPPORT: u32 = 0x1016;
pub const DEVICE_MAX_PARAMETER_SIZE: u32 = 0x1017;
pub const DEVICE_MAX_SAMPLERS: u32 = 0x1018;
pub const DEVICE_MEM_BASE_ADDR_ALIGN: u32 = 0x1019;
pub const DEVICE_MIN_DATA_TYPE_ALIGN_SIZE: u32 = 0x101A;
pub const DEVICE_GLOBAL_MEM_CACHE_TYPE: u32 = 0x101C;
pub const DEVICE_GLOBAL_MEM_CACHELINE_SIZE: u32 = 0x101D;
pub const DEVICE_GLOBAL_MEM_CACHE_SIZE: u32 = 0x101E;
pub const DEVICE_GLOBAL_MEM_SIZE: u32 = 0x101F;
pub const DEVICE_MAX_CONSTANT_BUFFER_SIZE: u32 = 0x1020;
pub const DEVICE_MAX_CONSTANT_ARGS: u32 = 0x1021;
pub const DEVICE_LOCAL_MEM_TYPE: u32 = 0x1022;
pub const DEVICE_LOCAL_MEM_SIZE: u32 = 0x1023;
pub const DEVICE_ERROR_CORRECTION_SUPPORT: u32 = 0x1024;
pub const DEVICE_PROFILING_TIMER_RESOLUTION: u32 = 0x1025;
pub const DEVICE_ENDIAN_LITTLE: u32 = 0x1026;
pub const DEVICE_AVAILABLE: u32 = 0x1027;
pub const DEVICE_COMPILER_AVAILABLE: u32 = 0x1028;
pub const DEVICE_NAME: u32 = 0x102B;
pub const DEVICE_VENDOR: u32 = 0x102C;
pub const DRIVER_VERSION: u32 = 0x102D;
pub const DEVICE_PROFILE: u32 = 0x102E;
pub const DEVICE_VERSION: u32 = 0x102F;
pub const DEVICE_EXTENSIONS: u32 = 0x1030;
pub const DEVICE_PLATFORM: u32 = 0x1031;
pub const DEVICE_HOST_UNIFIED_MEMORY: u32 = 0x1035;
pub const DEVICE_OPENCL_C_VERSION: u32 = 0x103D;

// context info
pub const CONTEXT_REFERENCE_COUNT: u32 = 0x1080;
pub const CONTEXT_DEVICES: u32 = 0x1081;
pub const CONTEXT_PROPERTIES: u32 = 0x1082;
pub const CONTEXT_NUM_DEVICES: u32 = 0x1083;

// command queue info
pub const QUEUE_CONTEXT: u32 = 0x1090;
pub const QUEUE_DEVICE: u32 = 0x1091;
pub const QUEUE_REFERENCE_COUNT: u32 = 0x1092;

// mem object info
pub const MEM_TYPE: u32 = 0x1100;
pub const MEM_SIZE: u32 = 0x1102;
pub const MEM_HOST_PTR: u32 = 0x1103;
pub const MEM_MAP_COUNT: u32 = 0x1104;
pub const MEM_REFERENCE_COUNT: u32 = 0x1105;
pub const MEM_CONTEXT: u32 = 0x1106;
pub const MEM_ASSOCIATED_MEMOBJECT: u32 = 0x1107;
pub const MEM_OFFSET: u32 = 0x1108;

// image info
pub const IMAGE_FORMAT: u32 = 0x1110;
pub const IMAGE_ELEMENT_SIZE: u32 = 0x1111;
pub const IMAGE_ROW_PITCH: u32 = 0x1112;
pub const IMAGE_SLICE_PITCH: u32 = 0x1113;
pub const IMAGE_WIDTH: u32 = 0x1114;
pub const IMAGE_HEIGHT: u32 = 0x1115;
pub const IMAGE_DEPTH: u32 = 0x1116;

// sampler info
pub const SAMPLER_REFERENCE_COUNT: u32 = 0x1150;
pub const SAMPLER_CONTEXT: u32 = 0x1151;
pub const SAMPLER_NORMALIZED_COORDS: u32 = 0x1152;
pub const SAMPLER_ADDRESSING_MODE: u32 = 0x1153;
pub const SAMPLER_FILTER_MODE: u32 = 0x1154;

// program info
pub const PROGRAM_REFERENCE_COUNT: u32 = 0x1160;
pub const PROGRAM_CONTEXT: u32 = 0x1161;
pub const PROGRAM_NUM_DEVICES: u32 = 0x1162;
pub const PROGRAM_DEVICES: u32 = 0x1163;
pub const PROGRAM_SOURCE: u32 = 0x1164;
pub const PROGRAM_BINARY_SIZES: u32 = 0x1165;
pub const PROGRAM_BINARIES: u32 = 0x1166;

// program build info
pub const PROGRAM_BUILD_STATUS: u32 = 0x1181;
pub const PROGRAM_BUILD_OPTIONS: u32 = 0x1182;
pub const PROGRAM_BUILD_LOG: u32 = 0x1183;

// kernel info
pub const KERNEL_FUNCTION_NAME: u32 = 0x1190;
pub const KERNEL_NUM_ARGS: u32 = 0x1191;
pub const KERNEL_REFERENCE_COUNT: u32 = 0x1192;
pub const KERNEL_CONTEXT: u32 = 0x1193;
pub const KERNEL_PROGRAM: u32 = 0x1194;

// kernel work group info
pub const KERNEL_WORK_GROUP_SIZE: u32 = 0x11B0;
pub const KERNEL_COMPILE_WORK_GROUP_SIZE: u32 = 0x11B1;
pub const KERNEL_LOCAL_MEM_SIZE: u32 = 0x11B2;
pub const KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE: u32 = 0x11B3;
pub const KERNEL_PRIVATE_MEM_SIZE: u32 = 0x11B4;

// event info
pub const EVENT_COMMAND_QUEUE: u32 = 0x11D0;
pub const EVENT_COMMAND_TYPE: u32 = 0x11D1;
pub const EVENT_REFERENCE_COUNT: u32 = 0x11D2;
pub const EVENT_COMMAND_EXECUTION_STATUS: u32 = 0x11D3;
pub const EVENT_CONTEXT: u32 = 0x11D4;

/// Name/value pairs for every query-name the dispatcher classifies,
/// including the names that ride the default scalar strategy.
const QUERY_CONSTANTS: &[(&str, u32)] = &[
	("PLATFORM_PROFILE", PLATFORM_PROFILE),
	("PLATFORM_VERSION", PLATFORM_VERSION),
	("PLATFORM_NAME", PLATFORM_NAME),
	("PLATFORM_VENDOR", PLATFORM_VENDOR),
	("PLATFORM_EXTENSIONS", PLATFORM_EXTENSIONS),
	("DEVICE_TYPE", DEVICE_TYPE),
	("DEVICE_VENDOR_ID", DEVICE_VENDOR_ID),
	("DEVICE_MAX_COMPUTE_UNITS", DEVICE_MAX_COMPUTE_UNITS),
	("DEVICE_MAX_WORK_ITEM_DIMENSIONS", DEVICE_MAX_WORK_ITEM_DIMENSIONS),
	("DEVICE_MAX_WORK_GROUP_SIZE", DEVICE_MAX_WORK_GROUP_SIZE),
	("DEVICE_MAX_WORK_ITEM_SIZES", DEVICE_MAX_WORK_ITEM_SIZES),
	("DEVICE_MAX_CLOCK_FREQUENCY", DEVICE_MAX_CLOCK_FREQUENCY),
	("DEVICE_ADDRESS_BITS", DEVICE_ADDRESS_BITS),
	("DEVICE_MAX_READ_IMAGE_ARGS", DEVICE_MAX_READ_IMAGE_ARGS),
	("DEVICE_MAX_WRITE_IMAGE_ARGS", DEVICE_MAX_WRITE_IMAGE_ARGS),
	("DEVICE_MAX_MEM_ALLOC_SIZE", DEVICE_MAX_MEM_ALLOC_SIZE),
	("DEVICE_IMAGE2D_MAX_WIDTH", DEVICE_IMAGE2D_MAX_WIDTH),
	("DEVICE_IMAGE2D_MAX_HEIGHT", DEVICE_IMAGE2D_MAX_HEIGHT),
	("DEVICE_IMAGE3D_MAX_WIDTH", DEVICE_IMAGE3D_MAX_WIDTH),
	("DEVICE_IMAGE3D_MAX_HEIGHT", DEVICE_IMAGE3D_MAX_HEIGHT),
	("DEVICE_IMAGE3D_MAX_DEPTH", DEVICE_IMAGE3D_MAX_DEPTH),
	("DEVICE_IMAGE_SUPPORT", DEVICE_IMAGE_SUPPORT),
	("DEVICE_MAX_PARAMETER_SIZE", DEVICE_MAX_PARAMETER_SIZE),
	("DEVICE_MAX_SAMPLERS", DEVICE_MAX_SAMPLERS),
	("DEVICE_MEM_BASE_ADDR_ALIGN", DEVICE_MEM_BASE_ADDR_ALIGN),
	("DEVICE_MIN_DATA_TYPE_ALIGN_SIZE", DEVICE_MIN_DATA_TYPE_ALIGN_SIZE),
	("DEVICE_GLOBAL_MEM_CACHE_TYPE", DEVICE_GLOBAL_MEM_CACHE_TYPE),
	("DEVICE_GLOBAL_MEM_CACHELINE_SIZE", DEVICE_GLOBAL_MEM_CACHELINE_SIZE),
	("DEVICE_GLOBAL_MEM_CACHE_SIZE", DEVICE_GLOBAL_MEM_CACHE_SIZE),
	("DEVICE_GLOBAL_MEM_SIZE", DEVICE_GLOBAL_MEM_SIZE),
	("DEVICE_MAX_CONSTANT_BUFFER_SIZE", DEVICE_MAX_CONSTANT_BUFFER_SIZE),
	("DEVICE_MAX_CONSTANT_ARGS", DEVICE_MAX_CONSTANT_ARGS),
	("DEVICE_LOCAL_MEM_TYPE", DEVICE_LOCAL_MEM_TYPE),
	("DEVICE_LOCAL_MEM_SIZE", DEVICE_LOCAL_MEM_SIZE),
	("DEVICE_ERROR_CORRECTION_SUPPORT", DEVICE_ERROR_CORRECTION_SUPPORT),
	("DEVICE_PROFILING_TIMER_RESOLUTION", DEVICE_PROFILING_TIMER_RESOLUTION),
	("DEVICE_ENDIAN_LITTLE", DEVICE_ENDIAN_LITTLE),
	("DEVICE_AVAILABLE", DEVICE_AVAILABLE),
	("DEVICE_COMPILER_AVAILABLE", DEVICE_COMPILER_AVAILABLE),
	("DEVICE_NAME", DEVICE_NAME),
	("DEVICE_VENDOR", DEVICE_VENDOR),
	("DRIVER_VERSION", DRIVER_VERSION),
	("DEVICE_PROFILE", DEVICE_PROFILE),
	("DEVICE_VERSION", DEVICE_VERSION),
	("DEVICE_EXTENSIONS", DEVICE_EXTENSIONS),
	("DEVICE_PLATFORM", DEVICE_PLATFORM),
	("DEVICE_HOST_UNIFIED_MEMORY", DEVICE_HOST_UNIFIED_MEMORY),
	("DEVICE_OPENCL_C_VERSION", DEVICE_OPENCL_C_VERSION),
	("CONTEXT_REFERENCE_COUNT", CONTEXT_REFERENCE_COUNT),
	("CONTEXT_DEVICES", CONTEXT_DEVICES),
	("CONTEXT_PROPERTIES", CONTEXT_PROPERTIES),
	("CONTEXT_NUM_DEVICES", CONTEXT_NUM_DEVICES),
	("QUEUE_CONTEXT", QUEUE_CONTEXT),
	("QUEUE_DEVICE", QUEUE_DEVICE),
	("QUEUE_REFERENCE_COUNT", QUEUE_REFERENCE_COUNT),
	("MEM_TYPE", MEM_TYPE),
	("MEM_SIZE", MEM_SIZE),
	("MEM_HOST_PTR", MEM_HOST_PTR),
	("MEM_MAP_COUNT", MEM_MAP_COUNT),
	("MEM_REFERENCE_COUNT", MEM_REFERENCE_COUNT),
	("MEM_CONTEXT", MEM_CONTEXT),
	("MEM_ASSOCIATED_MEMOBJECT", MEM_ASSOCIATED_MEMOBJECT),
	("MEM_OFFSET", MEM_OFFSET),
	("IMAGE_FORMAT", IMAGE_FORMAT),
	("IMAGE_ELEMENT_SIZE", IMAGE_ELEMENT_SIZE),
	("IMAGE_ROW_PITCH", IMAGE_ROW_PITCH),
	("IMAGE_SLICE_PITCH", IMAGE_SLICE_PITCH),
	("IMAGE_WIDTH", IMAGE_WIDTH),
	("IMAGE_HEIGHT", IMAGE_HEIGHT),
	("IMAGE_DEPTH", IMAGE_DEPTH),
	("SAMPLER_REFERENCE_COUNT", SAMPLER_REFERENCE_COUNT),
	("SAMPLER_CONTEXT", SAMPLER_CONTEXT),
	("SAMPLER_NORMALIZED_COORDS", SAMPLER_NORMALIZED_COORDS),
	("SAMPLER_ADDRESSING_MODE", SAMPLER_ADDRESSING_MODE),
	("SAMPLER_FILTER_MODE", SAMPLER_FILTER_MODE),
	("PROGRAM_REFERENCE_COUNT", PROGRAM_REFERENCE_COUNT),
	("PROGRAM_CONTEXT", PROGRAM_CONTEXT),
	("PROGRAM_NUM_DEVICES", PROGRAM_NUM_DEVICES),
	("PROGRAM_DEVICES", PROGRAM_DEVICES),
	("PROGRAM_SOURCE", PROGRAM_SOURCE),
	("PROGRAM_BINARY_SIZES", PROGRAM_BINARY_SIZES),
	("PROGRAM_BINARIES", PROGRAM_BINARIES),
	("PROGRAM_BUILD_STATUS", PROGRAM_BUILD_STATUS),
	("PROGRAM_BUILD_OPTIONS", PROGRAM_BUILD_OPTIONS),
	("PROGRAM_BUILD_LOG", PROGRAM_BUILD_LOG),
	("KERNEL_FUNCTION_NAME", KERNEL_FUNCTION_NAME),
	("KERNEL_NUM_ARGS", KERNEL_NUM_ARGS),
	("KERNEL_REFERENCE_COUNT", KERNEL_REFERENCE_COUNT),
	("KERNEL_CONTEXT", KERNEL_CONTEXT),
	("KERNEL_PROGRAM", KERNEL_PROGRAM),
	("KERNEL_WORK_GROUP_SIZE", KERNEL_WORK_GROUP_SIZE),
	("KERNEL_COMPILE_WORK_GROUP_SIZE", KERNEL_COMPILE_WORK_GROUP_SIZE),
	("KERNEL_LOCAL_MEM_SIZE", KERNEL_LOCAL_MEM_SIZE),
	("KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE", KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE),
	("KERNEL_PRIVATE_MEM_SIZE", KERNEL_PRIVATE_MEM_SIZE),
	("EVENT_COMMAND_QUEUE", EVENT_COMMAND_QUEUE),
	("EVENT_COMMAND_TYPE", EVENT_COMMAND_TYPE),
	("EVENT_REFERENCE_COUNT", EVENT_REFERENCE_COUNT),
	("EVENT_COMMAND_EXECUTION_STATUS", EVENT_COMMAND_EXECUTION_STATUS),
	("EVENT_CONTEXT", EVENT_CONTEXT),
];

/// All query-name constants the dispatcher classifies, as name/value pairs.
pub fn all() -> &'static [(&'static str, u32)] {
	QUERY_CONSTANTS
}

/// Canonical name for a query-name value, when the dispatcher knows it.
pub fn constant_name(value: u32) -> Option<&'static str> {
	QUERY_CONSTANTS.iter().find(|(_, item)| *item == value).map(|(name, _)| *name)
}

/// Resolve a symbolic query-name to its numeric value.
pub fn lookup(name: &str) -> Result<u32> {
	QUERY_CONSTANTS
		.iter()
		.find(|(item, _)| *item == name)
		.map(|(_, value)| *value)
		.ok_or_else(|| ClError::UnknownConstant { name: name.to_owned() })
}

#[cfg(test)]
mod tests {
	use super::{DEVICE_NAME, PROGRAM_BINARIES, all, constant_name, lookup};
	use crate::cl::ClError;

	#[test]
	fn lookup_round_trips_known_names() {
		assert_eq!(lookup("DEVICE_NAME").expect("known constant"), DEVICE_NAME);
		assert_eq!(constant_name(PROGRAM_BINARIES), Some("PROGRAM_BINARIES"));
	}

	#[test]
	fn unknown_name_is_an_error() {
		let err = lookup("DEVICE_WARP_SIZE").expect_err("unknown constant");
		assert!(matches!(err, ClError::UnknownConstant { name } if name == "DEVICE_WARP_SIZE"));
	}

	#[test]
	fn unknown_value_has_no_name() {
		assert_eq!(constant_name(0xFFFF_FFFF), None);
	}

	#[test]
	fn table_has_no_duplicate_values() {
		for (index, (_, value)) in all().iter().enumerate() {
			let dup = all().iter().skip(index + 1).find(|(_, other)| other == value);
			assert!(dup.is_none(), "duplicate constant value 0x{value:04X}");
		}
	}
}
