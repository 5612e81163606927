//! Camera snapshot shared between an input thread and render consumers.

use std::sync::Arc;

use parking_lot::RwLock;

use super::Camera;

/// Whole-camera snapshot behind a lock.
///
/// Writers publish a complete [`Camera`]; readers clone the current `Arc`,
/// so a reader never observes a half-applied orbit update.
#[derive(Debug, Default)]
pub struct SharedCamera {
    current: RwLock<Arc<Camera>>,
}

impl SharedCamera {
    pub fn new(camera: Camera) -> Self {
        Self {
            current: RwLock::new(Arc::new(camera)),
        }
    }

    /// Replace the snapshot.
    pub fn publish(&self, camera: Camera) {
        *self.current.write() = Arc::new(camera);
    }

    pub fn snapshot(&self) -> Arc<Camera> {
        Arc::clone(&self.current.read())
    }
}
