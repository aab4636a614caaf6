use anyhow::anyhow;
use axum::{
    Json,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::ProcessError;
use serde_json::Value;

use crate::models::{CardRequest, ProcessedCard};
use crate::services::{audio_url::validate_audio_url, card_parser::extract_fields};

/// Successful result of handling one request.
#[derive(Debug)]
pub enum Outcome {
    /// CORS pre-flight answered without reading the body.
    Preflight,
    Processed(ProcessedCard),
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Preflight => (
                StatusCode::OK,
                [
                    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
                    (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
                ],
                (),
            )
                .into_response(),
            Outcome::Processed(card) => (
                StatusCode::OK,
                [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
                Json(card),
            )
                .into_response(),
        }
    }
}

/// Handles one card request: answers pre-flight, rejects anything but POST,
/// then parses the body, extracts the card fields and validates the audio URL.
pub fn handle(method: &Method, body: &[u8]) -> Result<Outcome, ProcessError> {
    if *method == Method::OPTIONS {
        return Ok(Outcome::Preflight);
    }

    if *method != Method::POST {
        return Err(ProcessError::MethodNotAllowed);
    }

    let body: Value =
        serde_json::from_slice(body).map_err(|err| ProcessError::Internal(err.into()))?;
    let request = CardRequest::from_json(body).map_err(ProcessError::Internal)?;

    process_card(request).map(Outcome::Processed)
}

fn process_card(request: CardRequest) -> Result<ProcessedCard, ProcessError> {
    let parsed = extract_fields(description_text(request.card_desc.as_ref())?);

    // An empty value counts as missing.
    let audio_url = parsed
        .audio_url
        .filter(|url| !url.is_empty())
        .ok_or(ProcessError::MissingAudioUrl)?;

    if !validate_audio_url(&audio_url) {
        return Err(ProcessError::InvalidAudioUrl);
    }

    Ok(ProcessedCard {
        title: request.card_name,
        description: parsed.description,
        audio_url,
        tags: parsed.tags,
        card_id: request.card_id,
        success: true,
    })
}

/// Falsy descriptions (absent, `null`, `false`, `0`, `""`) read as empty
/// text; any other non-string value cannot be scanned.
fn description_text(desc: Option<&Value>) -> Result<&str, ProcessError> {
    match desc {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(""),
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(""),
        Some(other) => Err(ProcessError::Internal(anyhow!(
            "cardDesc must be a string, got {other}"
        ))),
    }
}
