use super::display::{FieldList, Fixed6};
use super::response::impl_has_response_error;
use super::{EntityMap, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the bot wants to do next in a dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConverseType {
    /// Say `msg` to the user.
    Msg,
    /// Run `action`, then report back with `converse_next`.
    Action,
    /// Merge newly extracted entities into the context.
    Merge,
    /// The bot is done; wait for the next user message.
    Stop,
    #[serde(other)]
    Unknown,
}

impl ConverseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Msg => "msg",
            Self::Action => "action",
            Self::Merge => "merge",
            Self::Stop => "stop",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ConverseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of a `/converse` session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Converse {
    #[serde(flatten)]
    pub response: ResponseError,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ConverseType>,
    #[serde(rename = "msg", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<EntityMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quickreplies: Option<Vec<String>>,
    #[serde(default)]
    pub confidence: f64,
}

impl_has_response_error!(Converse);

impl Converse {
    pub fn is_stop(&self) -> bool {
        self.kind == Some(ConverseType::Stop)
    }

    pub fn is_action(&self) -> bool {
        self.kind == Some(ConverseType::Action)
    }
}

impl fmt::Display for Converse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = FieldList::new();
        self.response.describe(&mut fields);
        fields
            .opt("Type", self.kind.as_ref())
            .opt("Message", self.message.as_ref())
            .opt("Action", self.action.as_ref())
            .opt("Entities", self.entities.as_ref())
            .list(
                "QuickReplies",
                self.quickreplies.as_deref().unwrap_or_default(),
            )
            .field("Confidence", Fixed6(self.confidence))
            .finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_turn_types() {
        let t: Converse = serde_json::from_value(json!({
            "type": "action",
            "action": "fetch-weather",
            "entities": {"location": [{"value": "Seoul"}]},
            "confidence": 0.96
        }))
        .unwrap();
        assert!(t.is_action());
        assert_eq!(t.action.as_deref(), Some("fetch-weather"));

        let t: Converse = serde_json::from_value(json!({"type": "stop", "confidence": 0.2})).unwrap();
        assert!(t.is_stop());
    }

    #[test]
    fn unknown_type_does_not_fail_decoding() {
        let t: Converse = serde_json::from_value(json!({"type": "handoff"})).unwrap();
        assert_eq!(t.kind, Some(ConverseType::Unknown));
        assert!(!t.is_stop());
    }

    #[test]
    fn display_skips_absent_fields() {
        let t = Converse {
            kind: Some(ConverseType::Msg),
            message: Some("It's sunny in Seoul".into()),
            confidence: 0.987,
            ..Default::default()
        };
        assert_eq!(
            t.to_string(),
            "{Type: msg, Message: It's sunny in Seoul, Confidence: 0.987000}"
        );
    }
}
