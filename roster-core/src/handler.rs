use crate::allocator::IdAllocator;
use crate::models::User;
use std::sync::Arc;

/// Assigns ids to incoming users.
#[derive(Debug, Clone, Default)]
pub struct CreationHandler {
    allocator: Arc<IdAllocator>,
}

impl CreationHandler {
    pub fn new(allocator: Arc<IdAllocator>) -> Self {
        Self { allocator }
    }

    /// Stamp `user` with the next id. Any id already on the record is
    /// replaced; nothing else is touched.
    pub fn create(&self, user: User) -> User {
        let id = self.allocator.next();
        tracing::trace!(user_id = id, "assigned user id");
        user.with_id(id)
    }

    pub fn allocator(&self) -> &Arc<IdAllocator> {
        &self.allocator
    }
}
