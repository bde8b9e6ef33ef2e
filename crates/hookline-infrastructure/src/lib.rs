pub mod config_service;
pub mod logging;
pub mod notification;
pub mod paths;
pub mod secret_service;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::notification::{ChannelNotificationSink, TracingNotificationSink};
pub use crate::secret_service::{SecretCredentialSource, StaticCredentialSource};
pub use crate::storage::{FileSnapshotStorage, MemorySnapshotStorage};
