//! Typed native resource handles.
//!
//! Buffers and sources are both plain `u32` names on the native side. The
//! kind tag keeps them apart at compile time, so a source can never be passed
//! where a buffer is expected.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Marker trait for native resource kinds.
pub trait ResourceKind: 'static {
    /// Short label used in `Debug` output and logs.
    const LABEL: &'static str;
}

/// Kind tag for sample buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {}

/// Kind tag for playback sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {}

impl ResourceKind for BufferKind {
    const LABEL: &'static str = "Buffer";
}

impl ResourceKind for SourceKind {
    const LABEL: &'static str = "Source";
}

/// A native resource name tagged with its kind.
///
/// `0` is the null handle. Handles carry no ownership: copying one does not
/// duplicate the native resource and dropping one does not free it.
pub struct Handle<K: ResourceKind> {
    raw: u32,
    _kind: PhantomData<fn() -> K>,
}

/// Handle to a native sample buffer.
pub type BufferId = Handle<BufferKind>;

/// Handle to a native playback source.
pub type SourceId = Handle<SourceKind>;

impl<K: ResourceKind> Handle<K> {
    /// The null handle.
    pub const NULL: Self = Self::new(0);

    /// Wrap an explicit native name.
    pub const fn new(raw: u32) -> Self {
        Self {
            raw,
            _kind: PhantomData,
        }
    }

    /// The underlying native name.
    pub const fn raw(self) -> u32 {
        self.raw
    }

    /// Whether this is the null handle.
    pub const fn is_null(self) -> bool {
        self.raw == 0
    }
}

impl<K: ResourceKind> Default for Handle<K> {
    fn default() -> Self {
        Self::NULL
    }
}

impl<K: ResourceKind> Clone for Handle<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ResourceKind> Copy for Handle<K> {}

impl<K: ResourceKind> PartialEq for Handle<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K: ResourceKind> Eq for Handle<K> {}

impl<K: ResourceKind> Hash for Handle<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<K: ResourceKind> fmt::Debug for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::LABEL, self.raw)
    }
}
