//! Source buffer store for migration pipelines.
//!
//! Buffers are registered once and never mutated. Callers refer to them
//! through [`BufferId`] handles, which only a [`BufferStore`] can issue.
//! A handle does not keep its buffer alive on its own: validity is governed
//! by the store that issued it.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::trace;

static NEXT_STORE: AtomicU32 = AtomicU32::new(0);

/// Opaque handle to a buffer registered in a [`BufferStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId {
    store: u32,
    index: usize,
}

impl BufferId {
    /// Position of the buffer in registration order.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buffer #{} (store {})", self.index, self.store)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("unknown {id}")]
    UnknownBuffer { id: BufferId },

    #[error("{id} was issued by a different store")]
    ForeignStore { id: BufferId },
}

/// A registered buffer: the name it was registered under and its text.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    pub identifier: String,
    pub text: Arc<str>,
}

/// Append-only store of source buffers.
///
/// Shared between the driver and migration steps via `Arc`. Registration
/// takes a write lock; lookups take a read lock and copy out the text.
#[derive(Debug)]
pub struct BufferStore {
    id: u32,
    buffers: RwLock<Vec<SourceBuffer>>,
}

impl Default for BufferStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferStore {
    pub fn new() -> Self {
        Self {
            id: NEXT_STORE.fetch_add(1, Ordering::Relaxed),
            buffers: RwLock::new(Vec::new()),
        }
    }

    /// Register a buffer and return its handle.
    pub fn add_buffer(
        &self,
        identifier: impl Into<String>,
        text: impl Into<Arc<str>>,
    ) -> BufferId {
        let buffer = SourceBuffer {
            identifier: identifier.into(),
            text: text.into(),
        };
        let mut buffers = self.buffers.write().unwrap_or_else(PoisonError::into_inner);
        let id = BufferId {
            store: self.id,
            index: buffers.len(),
        };
        trace!(
            %id,
            identifier = buffer.identifier.as_str(),
            bytes = buffer.text.len(),
            "registered buffer"
        );
        buffers.push(buffer);
        id
    }

    /// Full text of the buffer as an independent copy.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this store.
    pub fn entire_text(&self, id: BufferId) -> String {
        match self.try_entire_text(id) {
            Ok(text) => text,
            Err(err) => panic!("buffer lookup failed: {err}"),
        }
    }

    pub fn try_entire_text(&self, id: BufferId) -> Result<String, BufferError> {
        self.with_buffer(id, |b| b.text.to_string())
    }

    /// Name the buffer was registered under.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`BufferStore::entire_text`].
    pub fn identifier(&self, id: BufferId) -> String {
        match self.with_buffer(id, |b| b.identifier.clone()) {
            Ok(identifier) => identifier,
            Err(err) => panic!("buffer lookup failed: {err}"),
        }
    }

    pub fn get(&self, id: BufferId) -> Result<SourceBuffer, BufferError> {
        self.with_buffer(id, SourceBuffer::clone)
    }

    /// Most recently registered buffer with the given identifier.
    pub fn find(&self, identifier: &str) -> Option<BufferId> {
        let buffers = self.buffers.read().unwrap_or_else(PoisonError::into_inner);
        buffers
            .iter()
            .rposition(|b| b.identifier == identifier)
            .map(|index| BufferId {
                store: self.id,
                index,
            })
    }

    pub fn contains(&self, id: BufferId) -> bool {
        self.with_buffer(id, |_| ()).is_ok()
    }

    pub fn len(&self) -> usize {
        self.buffers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_buffer<T>(
        &self,
        id: BufferId,
        f: impl FnOnce(&SourceBuffer) -> T,
    ) -> Result<T, BufferError> {
        if id.store != self.id {
            return Err(BufferError::ForeignStore { id });
        }
        let buffers = self.buffers.read().unwrap_or_else(PoisonError::into_inner);
        buffers
            .get(id.index)
            .map(f)
            .ok_or(BufferError::UnknownBuffer { id })
    }
}
