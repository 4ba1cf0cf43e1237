//! Wire types exchanged with the host over the method channel

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::MentionError;
use crate::model::ViewId;

/// An inbound command from the embedding application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
}

/// Reply to a [`MethodCall`]: `{"ok": value}` or `{"error": {code, message}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodResult {
    Ok(Value),
    Error(ErrorPayload),
}

impl MethodResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, MethodResult::Ok(_))
    }
}

impl From<Result<Value, MentionError>> for MethodResult {
    fn from(result: Result<Value, MentionError>) -> Self {
        match result {
            Ok(value) => MethodResult::Ok(value),
            Err(e) => MethodResult::Error(ErrorPayload {
                code: e.code().to_string(),
                message: e.to_string(),
            }),
        }
    }
}

/// Outbound notification payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEventKind {
    OnTextChanged { text: String },
    OnTap,
}

impl HostEventKind {
    pub fn method(&self) -> &'static str {
        match self {
            HostEventKind::OnTextChanged { .. } => "onTextChanged",
            HostEventKind::OnTap => "onTap",
        }
    }

    fn args(&self) -> Value {
        match self {
            HostEventKind::OnTextChanged { text } => serde_json::json!({ "text": text }),
            HostEventKind::OnTap => Value::Null,
        }
    }
}

/// A notification addressed to the application that owns `view_id`.
///
/// Serializes as `{"viewId": 1, "method": "onTextChanged", "args": {"text": ..}}`
/// or `{"viewId": 1, "method": "onTap", "args": null}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEvent {
    pub view_id: ViewId,
    pub kind: HostEventKind,
}

impl HostEvent {
    pub fn text_changed(view_id: ViewId, text: impl Into<String>) -> Self {
        Self {
            view_id,
            kind: HostEventKind::OnTextChanged { text: text.into() },
        }
    }

    pub fn tap(view_id: ViewId) -> Self {
        Self {
            view_id,
            kind: HostEventKind::OnTap,
        }
    }
}

#[derive(Serialize)]
struct WireEvent<'a> {
    #[serde(rename = "viewId")]
    view_id: ViewId,
    method: &'a str,
    args: Value,
}

impl Serialize for HostEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireEvent {
            view_id: self.view_id,
            method: self.kind.method(),
            args: self.kind.args(),
        }
        .serialize(serializer)
    }
}
