//! Serde models for the subset of the Discord API this service touches.

use serde::{Deserialize, Serialize};

pub const COLOR_YELLOW: u32 = 16_776_960;
pub const COLOR_BLUE: u32 = 5_793_266;
pub const COLOR_ORANGE: u32 = 15_105_570;
pub const COLOR_GREEN: u32 = 5_763_719;

pub const STATUS_FIELD_NAME: &str = "📊 Statut";
pub const STATUS_PENDING: &str = "En attente de traitement";
pub const STATUS_PROCESSING: &str = "En cours de traitement";
pub const STATUS_PROCESSED: &str = "Traitée";

pub const CUSTOM_ID_PROCESS_ORDER: &str = "process_order";
pub const CUSTOM_ID_MARK_AS_PROCESSED: &str = "mark_as_processed";

pub const INTERACTION_TYPE_PING: u8 = 1;
pub const INTERACTION_TYPE_MESSAGE_COMPONENT: u8 = 3;

pub const RESPONSE_TYPE_PONG: u8 = 1;
pub const RESPONSE_TYPE_CHANNEL_MESSAGE: u8 = 4;
pub const MESSAGE_FLAG_EPHEMERAL: u64 = 64;

pub const COMPONENT_TYPE_ACTION_ROW: u8 = 1;
pub const COMPONENT_TYPE_BUTTON: u8 = 2;
pub const BUTTON_STYLE_PRIMARY: u8 = 1;
pub const BUTTON_STYLE_SUCCESS: u8 = 3;

/// A notification embed. Unmodeled embed properties survive edits through
/// the flattened `extra` map, so rewriting a status field never drops what
/// another producer put on the message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl EmbedField {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            inline: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionRow {
    #[serde(rename = "type")]
    pub kind: u8,
    pub components: Vec<Button>,
}

impl ActionRow {
    pub fn new(components: Vec<Button>) -> Self {
        Self {
            kind: COMPONENT_TYPE_ACTION_ROW,
            components,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Button {
    #[serde(rename = "type")]
    pub kind: u8,
    pub style: u8,
    pub label: String,
    pub custom_id: String,
}

impl Button {
    pub fn primary(label: &str, custom_id: &str) -> Self {
        Self {
            kind: COMPONENT_TYPE_BUTTON,
            style: BUTTON_STYLE_PRIMARY,
            label: label.to_string(),
            custom_id: custom_id.to_string(),
        }
    }

    pub fn success(label: &str, custom_id: &str) -> Self {
        Self {
            kind: COMPONENT_TYPE_BUTTON,
            style: BUTTON_STYLE_SUCCESS,
            label: label.to_string(),
            custom_id: custom_id.to_string(),
        }
    }
}

/// Body posted to the incoming webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ActionRow>,
}

/// Body of a message PATCH. `components` always serializes: an empty array
/// is how Discord is told to strip every button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEdit {
    pub embeds: Vec<Embed>,
    pub components: Vec<ActionRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub data: Option<InteractionData>,
    #[serde(default)]
    pub message: Option<InteractionMessage>,
    #[serde(default)]
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    #[serde(default)]
    pub custom_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionMessage {
    pub id: String,
    #[serde(default)]
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionCallbackData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InteractionCallbackData {
    pub content: String,
    pub flags: u64,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            kind: RESPONSE_TYPE_PONG,
            data: None,
        }
    }

    pub fn ephemeral(content: &str) -> Self {
        Self {
            kind: RESPONSE_TYPE_CHANNEL_MESSAGE,
            data: Some(InteractionCallbackData {
                content: content.to_string(),
                flags: MESSAGE_FLAG_EPHEMERAL,
            }),
        }
    }
}
