use std::fmt;
use std::rc::Rc;

/// Raw native handle value as produced by the platform layer.
pub type RawHandle = u64;

/// Release callback invoked when a wrapper's last reference drops.
pub type ReleaseFn = Rc<dyn Fn(RawHandle)>;

/// Native object kinds a query can hand back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
	Platform,
	Device,
	Context,
	CommandQueue,
	Mem,
	Program,
	Kernel,
	Event,
	Sampler,
}

impl HandleKind {
	/// Lowercase label used for host-facing rendering.
	pub fn label(&self) -> &'static str {
		match self {
			HandleKind::Platform => "platform",
			HandleKind::Device => "device",
			HandleKind::Context => "context",
			HandleKind::CommandQueue => "command_queue",
			HandleKind::Mem => "mem",
			HandleKind::Program => "program",
			HandleKind::Kernel => "kernel",
			HandleKind::Event => "event",
			HandleKind::Sampler => "sampler",
		}
	}
}

/// Per-kind template supplied by the registration layer.
///
/// Tags handles wrapped through it with the object kind and carries the
/// native release callback for that kind.
#[derive(Clone)]
pub struct HandleTemplate {
	kind: HandleKind,
	release: ReleaseFn,
}

impl HandleTemplate {
	/// Build a template for `kind` with its native release callback.
	pub fn new(kind: HandleKind, release: impl Fn(RawHandle) + 'static) -> Self {
		Self {
			kind,
			release: Rc::new(release),
		}
	}

	/// Object kind this template tags.
	pub fn kind(&self) -> HandleKind {
		self.kind
	}

	/// Wrap a raw native handle value.
	///
	/// Every call creates a fresh wrapper carrying its own release
	/// obligation, even for a raw value that was wrapped before; handle
	/// identity is never deduplicated.
	pub fn wrap(&self, raw: RawHandle) -> Handle {
		Handle {
			slot: Rc::new(HandleSlot {
				kind: self.kind,
				raw,
				release: Rc::clone(&self.release),
			}),
		}
	}
}

impl fmt::Debug for HandleTemplate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HandleTemplate").field("kind", &self.kind).finish()
	}
}

/// Host-visible owner of one native handle.
///
/// Clones share a single release obligation. When the last clone drops, the
/// template's release callback fires exactly once with the raw value; a
/// wrapper that is kept reachable never releases. The wrapped resource is
/// externally refcounted, so a process exiting without dropping is
/// acceptable.
#[derive(Clone)]
pub struct Handle {
	slot: Rc<HandleSlot>,
}

impl Handle {
	/// Object kind the wrapping template tagged.
	pub fn kind(&self) -> HandleKind {
		self.slot.kind
	}

	/// Wrapped raw native handle value.
	pub fn raw(&self) -> RawHandle {
		self.slot.raw
	}
}

impl fmt::Debug for Handle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Handle")
			.field("kind", &self.kind())
			.field("raw", &format_args!("0x{:016x}", self.raw()))
			.finish()
	}
}

struct HandleSlot {
	kind: HandleKind,
	raw: RawHandle,
	release: ReleaseFn,
}

impl Drop for HandleSlot {
	fn drop(&mut self) {
		(self.release)(self.raw);
	}
}
