//! Host bridge: method channel wire types and the view registry
//!
//! The embedding application talks to the engine over one named channel.
//! Inbound calls (`setUsers`, `requestUsers`) go through
//! [`ViewRegistry::handle_call`]; field updates produce [`HostEvent`]s
//! (`onTextChanged`, `onTap`) delivered to a [`Notifier`].

pub mod channel;
pub mod registry;

pub use channel::{ErrorPayload, HostEvent, HostEventKind, MethodCall, MethodResult};
pub use registry::{CollectingNotifier, JsonLinesNotifier, Notifier, ViewRegistry};

/// Name of the method channel shared with the host
pub const CHANNEL_NAME: &str = "com.mybusiness/mention_textfield";
