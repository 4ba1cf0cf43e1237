//! View registry: owns every live field and routes host traffic to it

use std::collections::HashMap;
use std::io::Write;

use serde_json::Value;

use crate::commands::Cmd;
use crate::config::FieldConfig;
use crate::error::MentionError;
use crate::messages::Msg;
use crate::model::{entities_from_entries, MentionField, UserEntry, ViewId, ViewParams};
use crate::update::update;

use super::channel::{HostEvent, MethodCall};

/// Receiver for everything a field update asks the host to do
pub trait Notifier {
    /// Forward a notification to the embedding application
    fn notify(&mut self, event: HostEvent);

    /// Apply a widget command (restyle, dropdown, text replacement)
    fn apply(&mut self, _view_id: ViewId, _cmd: &Cmd) {}
}

/// Records events and widget commands in memory
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    pub events: Vec<HostEvent>,
    pub commands: Vec<(ViewId, Cmd)>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts carried by `onTextChanged` events, in order
    pub fn texts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match &e.kind {
                super::HostEventKind::OnTextChanged { text } => Some(text.as_str()),
                super::HostEventKind::OnTap => None,
            })
            .collect()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&mut self, event: HostEvent) {
        self.events.push(event);
    }

    fn apply(&mut self, view_id: ViewId, cmd: &Cmd) {
        self.commands.push((view_id, cmd.clone()));
    }
}

/// Writes each event as one JSON object per line
pub struct JsonLinesNotifier<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Notifier for JsonLinesNotifier<W> {
    fn notify(&mut self, event: HostEvent) {
        let written = serde_json::to_writer(&mut self.writer, &event)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(self.writer));
        if let Err(e) = written {
            tracing::warn!("failed to write event for view {}: {}", event.view_id, e);
        }
    }
}

/// All live fields, keyed by host view id
pub struct ViewRegistry<N: Notifier> {
    views: HashMap<ViewId, MentionField>,
    config: FieldConfig,
    notifier: N,
}

impl<N: Notifier> ViewRegistry<N> {
    pub fn new(config: FieldConfig, notifier: N) -> Self {
        Self {
            views: HashMap::new(),
            config,
            notifier,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn get(&self, view_id: ViewId) -> Option<&MentionField> {
        self.views.get(&view_id)
    }

    pub fn contains(&self, view_id: ViewId) -> bool {
        self.views.contains_key(&view_id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Create a field from host creation parameters, replacing any previous
    /// field with the same id
    pub fn create_view(&mut self, view_id: ViewId, params: &ViewParams) -> &MentionField {
        let field = MentionField::new(view_id, params, &self.config);
        if self.views.insert(view_id, field).is_some() {
            tracing::debug!(view = view_id, "replaced existing view");
        } else {
            tracing::debug!(view = view_id, "created view");
        }
        let field = &self.views[&view_id];
        self.notifier.apply(view_id, &Cmd::Restyle(field.styled()));
        field
    }

    /// Drop a field; returns false if it was not registered
    pub fn dispose(&mut self, view_id: ViewId) -> bool {
        let removed = self.views.remove(&view_id).is_some();
        tracing::debug!(view = view_id, removed, "dispose");
        removed
    }

    /// Run one message through the field's update loop and route the
    /// resulting commands to the notifier
    pub fn dispatch(&mut self, view_id: ViewId, msg: Msg) -> Result<(), MentionError> {
        let field = self
            .views
            .get_mut(&view_id)
            .ok_or(MentionError::UnknownView(view_id))?;

        let Some(cmd) = update(field, msg)? else {
            return Ok(());
        };
        for leaf in cmd.flatten() {
            match leaf {
                Cmd::NotifyTextChanged(text) => {
                    self.notifier.notify(HostEvent::text_changed(view_id, text))
                }
                Cmd::NotifyTap => self.notifier.notify(HostEvent::tap(view_id)),
                other => self.notifier.apply(view_id, &other),
            }
        }
        Ok(())
    }

    /// Handle an inbound method call from the embedding application
    pub fn handle_call(&mut self, call: &MethodCall) -> Result<Value, MentionError> {
        match call.method.as_str() {
            "setUsers" => self.set_users(&call.args),
            "requestUsers" => Ok(Value::Array(Vec::new())),
            other => {
                tracing::debug!("unknown method: {}", other);
                Err(MentionError::UnknownCommand(other.to_string()))
            }
        }
    }

    fn set_users(&mut self, args: &Value) -> Result<Value, MentionError> {
        let required = || MentionError::InvalidArgument("viewId and users are required".into());
        let view_id = args.get("viewId").and_then(Value::as_i64).ok_or_else(required)?;
        let users = args.get("users").and_then(Value::as_array).ok_or_else(required)?;

        if !self.contains(view_id) {
            return Err(MentionError::UnknownView(view_id));
        }

        let entries: Vec<UserEntry> = users.iter().map(UserEntry::from_value).collect();
        self.dispatch(view_id, Msg::SetUsers(entities_from_entries(&entries)))?;
        Ok(Value::Bool(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> ViewRegistry<CollectingNotifier> {
        let mut registry = ViewRegistry::new(FieldConfig::default(), CollectingNotifier::new());
        registry.create_view(1, &ViewParams::default());
        registry
    }

    #[test]
    fn test_set_users_replaces_entities() {
        let mut registry = registry();
        let call = MethodCall::new(
            "setUsers",
            json!({"viewId": 1, "users": [{"id": "1", "name": "Ana"}, {"id": "2"}]}),
        );
        assert_eq!(registry.handle_call(&call), Ok(json!(true)));
        assert_eq!(registry.get(1).unwrap().users.len(), 1);
    }

    #[test]
    fn test_set_users_requires_arguments() {
        let mut registry = registry();
        let call = MethodCall::new("setUsers", json!({"users": []}));
        let err = registry.handle_call(&call).unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_set_users_unknown_view() {
        let mut registry = registry();
        let call = MethodCall::new("setUsers", json!({"viewId": 9, "users": []}));
        assert_eq!(registry.handle_call(&call), Err(MentionError::UnknownView(9)));
    }

    #[test]
    fn test_request_users_and_unknown_method() {
        let mut registry = registry();
        let call = MethodCall::new("requestUsers", Value::Null);
        assert_eq!(registry.handle_call(&call), Ok(json!([])));
        let call = MethodCall::new("doSomething", Value::Null);
        assert_eq!(
            registry.handle_call(&call).unwrap_err().code(),
            "NOT_IMPLEMENTED"
        );
    }

    #[test]
    fn test_tap_is_forwarded() {
        let mut registry = registry();
        registry.dispatch(1, Msg::Tap).unwrap();
        assert_eq!(registry.notifier().events, vec![HostEvent::tap(1)]);
    }

    #[test]
    fn test_dispose() {
        let mut registry = registry();
        assert!(registry.dispose(1));
        assert!(!registry.dispose(1));
        assert_eq!(registry.dispatch(1, Msg::Tap), Err(MentionError::UnknownView(1)));
    }

    #[test]
    fn test_json_lines_output() {
        let mut notifier = JsonLinesNotifier::new(Vec::new());
        notifier.notify(HostEvent::tap(2));
        notifier.notify(HostEvent::text_changed(2, "a"));
        let out = String::from_utf8(notifier.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"viewId":2,"method":"onTap","args":null}"#);
    }
}
