//! Business layer of the Roster dashboard: the user directory store, the
//! gateways it talks through, and the notification channel that surfaces
//! outcomes to the presentation layer.
//!
//! A typical composition:
//!
//! ```ignore
//! use roster_business::{BusinessConfig, ChannelNotifier, DirectoryStore, HttpGateway};
//!
//! let (notifier, toasts) = ChannelNotifier::channel();
//! let gateway = HttpGateway::new(&BusinessConfig::from_env()?, notifier.clone())?;
//! let store = DirectoryStore::new(gateway, notifier);
//! store.fetch_page(1).await;
//! ```

mod config;
pub mod directory;
pub mod form;
pub mod gateway;
pub mod http;
pub mod model;
mod notify;

pub use config::{BusinessConfig, ConfigError, ENV_PREFIX};
pub use directory::{
    DirectoryState, DirectoryStore, DirectorySummary, DirectoryView, PageMeta, UserFilter,
};
pub use form::{UserForm, ValidationError};
pub use gateway::{
    GatewayResult, HttpGateway, InMemoryGateway, RequestError, RequestErrorKind, UserGateway,
};
pub use model::{BadgeTone, PAGE_SIZE, Role, Status, User, UserDraft};
pub use notify::{ChannelNotifier, LogNotifier, Notification, NotificationVariant, Notifier};
