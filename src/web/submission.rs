// [business] Request body shared by POST /participantes and POST /ganadores
// Fields arrive as loose JSON so a wrong type becomes a 400 with the
// endpoint's own message instead of an extractor rejection

// [library] Serde - rename keeps the Spanish wire names, alias accepts the English ones
use serde::Deserialize;
use serde_json::Value;

// [library] Calendar date parsing for the fecha field
use time::{macros::format_description, Date};

use crate::{
    db::{NewParticipants, NewWinner},
    error::ApiError,
};

pub const PARTICIPANTS_REQUIRED: &str =
    "Todos los campos son requeridos y numeroRifa debe ser un array";
pub const WINNER_REQUIRED: &str = "Faltan campos obligatorios";

#[derive(Debug, Default, Deserialize)]
pub struct SubmissionPayload {
    #[serde(default, rename = "nombre", alias = "name")]
    pub name: Option<Value>,
    #[serde(default, rename = "whatsapp", alias = "contact")]
    pub contact: Option<Value>,
    #[serde(default, rename = "numeroRifa", alias = "raffleNumbers")]
    pub raffle_numbers: Option<Value>,
    #[serde(default, rename = "fecha", alias = "date")]
    pub date: Option<Value>,
    #[serde(default, rename = "servidor", alias = "sourceChannel")]
    pub source_channel: Option<Value>,
}

impl SubmissionPayload {
    /// Every field is required and `numeroRifa` must be a non-empty array of scalars.
    pub fn into_participants(self) -> Result<NewParticipants, ApiError> {
        let invalid = || ApiError::Validation(PARTICIPANTS_REQUIRED.to_string());

        Ok(NewParticipants {
            name: text_field(self.name.as_ref()).ok_or_else(invalid)?,
            contact: text_field(self.contact.as_ref()).ok_or_else(invalid)?,
            raffle_numbers: raffle_list(self.raffle_numbers.as_ref()).ok_or_else(invalid)?,
            date: date_field(self.date.as_ref()).ok_or_else(invalid)?,
            source_channel: text_field(self.source_channel.as_ref()).ok_or_else(invalid)?,
        })
    }

    /// Only `nombre`, `numeroRifa` and `fecha` are required for a winner;
    /// `whatsapp` and `servidor` may be absent but not a bool, object or array.
    pub fn into_winner(self) -> Result<NewWinner, ApiError> {
        let invalid = || ApiError::Validation(WINNER_REQUIRED.to_string());

        Ok(NewWinner {
            name: text_field(self.name.as_ref()).ok_or_else(invalid)?,
            contact: optional_text_field(self.contact.as_ref()).ok_or_else(invalid)?,
            raffle_numbers: collapse_raffle_numbers(self.raffle_numbers.as_ref())
                .ok_or_else(invalid)?,
            date: date_field(self.date.as_ref()).ok_or_else(invalid)?,
            source_channel: optional_text_field(self.source_channel.as_ref())
                .ok_or_else(invalid)?,
        })
    }
}

/// Non-blank string or number, as text.
pub fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Optional scalar: `Some(None)` when absent or null, `Some(Some(text))` for a
/// string (an empty one included) or number, `None` for any other JSON type.
pub fn optional_text_field(value: Option<&Value>) -> Option<Option<String>> {
    match value {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.trim().to_string())),
        Some(Value::Number(n)) => Some(Some(n.to_string())),
        Some(_) => None,
    }
}

/// Accepts `YYYY-MM-DD`, or an ISO (`T`) or MySQL-style (space) timestamp whose date part is `YYYY-MM-DD`.
pub fn date_field(value: Option<&Value>) -> Option<Date> {
    let raw = match value? {
        Value::String(s) => s.trim(),
        _ => return None,
    };
    let day = raw.split(|c: char| c == 'T' || c == ' ').next().unwrap_or(raw);
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

/// The participant form of `numeroRifa`: must be a non-empty array.
pub fn raffle_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    if items.is_empty() {
        return None;
    }
    items.iter().map(|item| text_field(Some(item))).collect()
}

/// The winner form of `numeroRifa`: arrays are joined with `,`, scalars kept as-is.
pub fn collapse_raffle_numbers(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Array(_) => raffle_list(value).map(|numbers| numbers.join(",")),
        scalar => text_field(Some(scalar)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::date;

    fn payload(body: Value) -> SubmissionPayload {
        serde_json::from_value(body).expect("Failed to deserialize payload")
    }

    #[test]
    fn test_participant_scenario() {
        let submission = payload(json!({
            "nombre": "Ana",
            "whatsapp": "555",
            "numeroRifa": ["01", "02"],
            "fecha": "2024-01-01",
            "servidor": "s1"
        }))
        .into_participants()
        .expect("valid submission");

        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.contact, "555");
        assert_eq!(submission.raffle_numbers, vec!["01", "02"]);
        assert_eq!(submission.date, date!(2024 - 01 - 01));
        assert_eq!(submission.source_channel, "s1");
    }

    #[test]
    fn test_participant_accepts_english_aliases() {
        let submission = payload(json!({
            "name": "Ana",
            "contact": 555,
            "raffleNumbers": [7, "08"],
            "date": "2024-01-01T10:30:00.000Z",
            "sourceChannel": "s1"
        }))
        .into_participants()
        .expect("valid submission");

        assert_eq!(submission.contact, "555");
        assert_eq!(submission.raffle_numbers, vec!["7", "08"]);
        assert_eq!(submission.date, date!(2024 - 01 - 01));
    }

    #[test]
    fn test_participant_rejects_scalar_raffle_numbers() {
        let err = payload(json!({
            "nombre": "Ana",
            "whatsapp": "555",
            "numeroRifa": "01",
            "fecha": "2024-01-01",
            "servidor": "s1"
        }))
        .into_participants()
        .unwrap_err();

        assert!(matches!(err, ApiError::Validation(msg) if msg == PARTICIPANTS_REQUIRED));
    }

    #[test]
    fn test_participant_requires_every_field() {
        let complete = json!({
            "nombre": "Ana",
            "whatsapp": "555",
            "numeroRifa": ["01"],
            "fecha": "2024-01-01",
            "servidor": "s1"
        });

        for field in ["nombre", "whatsapp", "numeroRifa", "fecha", "servidor"] {
            let mut body = complete.clone();
            body.as_object_mut().unwrap().remove(field);
            assert!(
                payload(body).into_participants().is_err(),
                "missing {} should be rejected",
                field
            );
        }
    }

    #[test]
    fn test_participant_rejects_empty_and_nested_lists() {
        assert_eq!(raffle_list(Some(&json!([]))), None);
        assert_eq!(raffle_list(Some(&json!(["01", ["02"]]))), None);
        assert_eq!(raffle_list(Some(&json!(["01", ""]))), None);
    }

    #[test]
    fn test_winner_collapses_list() {
        let winner = payload(json!({
            "nombre": "Luis",
            "numeroRifa": ["A", "B", "C"],
            "fecha": "2024-02-14"
        }))
        .into_winner()
        .expect("valid winner");

        assert_eq!(winner.raffle_numbers, "A,B,C");
        assert_eq!(winner.contact, None);
        assert_eq!(winner.source_channel, None);
    }

    #[test]
    fn test_winner_keeps_scalar_unchanged() {
        assert_eq!(
            collapse_raffle_numbers(Some(&json!("A,B,C"))).as_deref(),
            Some("A,B,C")
        );
        assert_eq!(collapse_raffle_numbers(Some(&json!(42))).as_deref(), Some("42"));
    }

    #[test]
    fn test_winner_requires_name_numbers_and_date() {
        for field in ["nombre", "numeroRifa", "fecha"] {
            let mut body = json!({
                "nombre": "Luis",
                "whatsapp": "555",
                "numeroRifa": "A",
                "fecha": "2024-02-14",
                "servidor": "s1"
            });
            body.as_object_mut().unwrap().remove(field);
            let err = payload(body).into_winner().unwrap_err();
            assert!(matches!(err, ApiError::Validation(msg) if msg == WINNER_REQUIRED));
        }
    }

    #[test]
    fn test_winner_optional_fields_keep_empty_string() {
        let winner = payload(json!({
            "nombre": "Luis",
            "whatsapp": "",
            "numeroRifa": "A",
            "fecha": "2024-02-14",
            "servidor": 7
        }))
        .into_winner()
        .expect("valid winner");

        assert_eq!(winner.contact.as_deref(), Some(""));
        assert_eq!(winner.source_channel.as_deref(), Some("7"));
    }

    #[test]
    fn test_winner_rejects_non_scalar_optional_fields() {
        for (field, value) in [
            ("whatsapp", json!(true)),
            ("whatsapp", json!({"n": "555"})),
            ("servidor", json!(["s1"])),
        ] {
            let mut body = json!({
                "nombre": "Luis",
                "numeroRifa": "A",
                "fecha": "2024-02-14"
            });
            body.as_object_mut().unwrap().insert(field.to_string(), value);
            let err = payload(body).into_winner().unwrap_err();
            assert!(matches!(err, ApiError::Validation(msg) if msg == WINNER_REQUIRED));
        }
    }

    #[test]
    fn test_date_field_accepts_timestamps() {
        assert_eq!(
            date_field(Some(&json!("2024-01-01 10:00:00"))),
            Some(date!(2024 - 01 - 01))
        );
        assert_eq!(
            date_field(Some(&json!("2024-01-01T10:00:00Z"))),
            Some(date!(2024 - 01 - 01))
        );
    }

    #[test]
    fn test_date_field_rejects_garbage() {
        assert_eq!(date_field(Some(&json!("01/02/2024"))), None);
        assert_eq!(date_field(Some(&json!(20240101))), None);
        assert_eq!(date_field(None), None);
    }
}
