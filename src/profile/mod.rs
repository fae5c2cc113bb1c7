pub mod models;
pub mod storage;

pub use models::{AvatarPreference, AVATAR_COUNT};
pub use storage::{ProfileStorage, StorageError};
