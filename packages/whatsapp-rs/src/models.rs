use serde::{Deserialize, Serialize};

/// Body of a `POST /{phone_number_id}/messages` call carrying a template message.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateMessageRequest<'a> {
    pub messaging_product: &'static str,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub template: Template<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Template<'a> {
    pub name: &'a str,
    pub language: Language<'a>,
    pub components: Vec<Component<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Language<'a> {
    pub code: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Component<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub parameters: Vec<Parameter<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parameter<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: &'a str,
}

impl<'a> TemplateMessageRequest<'a> {
    pub fn new(to: String, template_name: &'a str, language_code: &'a str, params: &[&'a str]) -> Self {
        Self {
            messaging_product: "whatsapp",
            to,
            kind: "template",
            template: Template {
                name: template_name,
                language: Language {
                    code: language_code,
                },
                components: vec![Component {
                    kind: "body",
                    parameters: params
                        .iter()
                        .copied()
                        .map(|text| Parameter { kind: "text", text })
                        .collect(),
                }],
            },
        }
    }
}

/// Successful response from the messages endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub messages: Vec<MessageId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageId {
    pub id: String,
}

/// Error envelope returned by the Graph API.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub code: Option<i64>,
}
