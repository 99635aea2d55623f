use crate::cl::constants as c;
use crate::cl::decode::{ScalarKind, Strategy, decode_with};
use crate::cl::handle::HandleTemplate;
use crate::cl::region::Region;
use crate::cl::value::Value;

/// Classify a query-name into its decoder strategy.
///
/// This is the process-wide dispatch table, rendered as a compile-time
/// `match`: immutable, constructed before any decode call, safe to read
/// from anywhere. Unrecognized names fall back to the scalar u32 strategy;
/// the native table this port preserves behaves the same way, so a
/// query-name added to the platform after this table was authored decodes
/// with possibly the wrong shape rather than failing. Pinned by tests.
pub fn strategy_for(name: u32) -> Strategy {
	match name {
		c::PLATFORM_PROFILE
		| c::PLATFORM_VERSION
		| c::PLATFORM_NAME
		| c::PLATFORM_VENDOR
		| c::PLATFORM_EXTENSIONS
		| c::DEVICE_NAME
		| c::DEVICE_VENDOR
		| c::DRIVER_VERSION
		| c::DEVICE_PROFILE
		| c::DEVICE_VERSION
		| c::DEVICE_OPENCL_C_VERSION
		| c::DEVICE_EXTENSIONS
		| c::PROGRAM_SOURCE
		| c::PROGRAM_BUILD_OPTIONS
		| c::PROGRAM_BUILD_LOG
		| c::KERNEL_FUNCTION_NAME => Strategy::Str,
		c::DEVICE_MAX_WORK_ITEM_SIZES | c::PROGRAM_BINARY_SIZES | c::KERNEL_COMPILE_WORK_GROUP_SIZE => Strategy::WordArray,
		c::DEVICE_MAX_WORK_GROUP_SIZE
		| c::DEVICE_IMAGE2D_MAX_WIDTH
		| c::DEVICE_IMAGE2D_MAX_HEIGHT
		| c::DEVICE_IMAGE3D_MAX_WIDTH
		| c::DEVICE_IMAGE3D_MAX_HEIGHT
		| c::DEVICE_IMAGE3D_MAX_DEPTH
		| c::DEVICE_MAX_PARAMETER_SIZE
		| c::DEVICE_PROFILING_TIMER_RESOLUTION
		| c::MEM_SIZE
		| c::MEM_OFFSET
		| c::IMAGE_ELEMENT_SIZE
		| c::IMAGE_ROW_PITCH
		| c::IMAGE_SLICE_PITCH
		| c::IMAGE_WIDTH
		| c::IMAGE_HEIGHT
		| c::IMAGE_DEPTH
		| c::KERNEL_WORK_GROUP_SIZE
		| c::KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE => Strategy::Scalar(ScalarKind::Word),
		c::DEVICE_MAX_MEM_ALLOC_SIZE
		| c::DEVICE_GLOBAL_MEM_CACHE_SIZE
		| c::DEVICE_GLOBAL_MEM_SIZE
		| c::DEVICE_MAX_CONSTANT_BUFFER_SIZE
		| c::DEVICE_LOCAL_MEM_SIZE
		| c::KERNEL_LOCAL_MEM_SIZE
		| c::KERNEL_PRIVATE_MEM_SIZE => Strategy::Scalar(ScalarKind::U64),
		c::DEVICE_IMAGE_SUPPORT
		| c::DEVICE_ERROR_CORRECTION_SUPPORT
		| c::DEVICE_HOST_UNIFIED_MEMORY
		| c::DEVICE_ENDIAN_LITTLE
		| c::DEVICE_AVAILABLE
		| c::DEVICE_COMPILER_AVAILABLE
		| c::SAMPLER_NORMALIZED_COORDS => Strategy::Scalar(ScalarKind::Bool),
		c::DEVICE_PLATFORM
		| c::QUEUE_CONTEXT
		| c::QUEUE_DEVICE
		| c::MEM_HOST_PTR
		| c::MEM_CONTEXT
		| c::MEM_ASSOCIATED_MEMOBJECT
		| c::SAMPLER_CONTEXT
		| c::PROGRAM_CONTEXT
		| c::KERNEL_CONTEXT
		| c::KERNEL_PROGRAM
		| c::EVENT_COMMAND_QUEUE
		| c::EVENT_CONTEXT => Strategy::Pointer,
		c::CONTEXT_DEVICES | c::PROGRAM_DEVICES => Strategy::PointerArray,
		c::CONTEXT_PROPERTIES => Strategy::PropertyList,
		c::IMAGE_FORMAT => Strategy::ImageFormat,
		c::PROGRAM_BINARIES => Strategy::BinaryArray,
		c::PROGRAM_BUILD_STATUS | c::EVENT_COMMAND_EXECUTION_STATUS => Strategy::Scalar(ScalarKind::I32),
		_ => Strategy::Scalar(ScalarKind::U32),
	}
}

/// Decode a query result, selecting the strategy from the query-name
/// carried in the final element of `args`.
///
/// Re-dispatches on every call; nothing is cached. An empty argument list
/// degrades to query-name 0, which is unrecognized and takes the default
/// strategy.
pub fn decode_query(template: Option<&HandleTemplate>, args: &[u64], regions: &[Region<'_>]) -> Value {
	let name = args.last().copied().unwrap_or_default() as u32;
	decode_with(strategy_for(name), template, args, regions)
}
