// [library] Serde - JSON serialization for API responses
use serde::{Deserialize, Serialize};

// [library] Calendar date type - maps to MySQL DATE and serializes as YYYY-MM-DD
use time::Date;

// [business] Participant row - one (participant, raffle number) pairing
// JSON keys mirror the column names the frontends already consume
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, PartialEq)]
pub struct Participant {
    pub id: i32, // [business] Auto-assigned row id - deletion key
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[serde(rename = "whatsapp")]
    #[sqlx(rename = "whatsapp")]
    pub contact: Option<String>,
    #[serde(rename = "numeroRifa")]
    #[sqlx(rename = "numeroRifa")]
    pub raffle_number: Option<String>, // [business] Exactly one raffle number per row
    #[serde(rename = "fecha")]
    #[sqlx(rename = "fecha")]
    pub date: Option<Date>,
    #[serde(rename = "servidor")]
    #[sqlx(rename = "servidor")]
    pub source_channel: Option<String>,
}

// [business] Winner row - raffle numbers already collapsed into one comma-joined string
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, PartialEq)]
pub struct Winner {
    pub id: i32,
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[serde(rename = "whatsapp")]
    #[sqlx(rename = "whatsapp")]
    pub contact: Option<String>,
    #[serde(rename = "numeroRifa")]
    #[sqlx(rename = "numeroRifa")]
    pub raffle_numbers: String,
    #[serde(rename = "fecha")]
    #[sqlx(rename = "fecha")]
    pub date: Option<Date>,
    #[serde(rename = "servidor")]
    #[sqlx(rename = "servidor")]
    pub source_channel: Option<String>,
}

// [business] Validated participant submission - every field required, raffle numbers non-empty
#[derive(Debug, Clone, PartialEq)]
pub struct NewParticipants {
    pub name: String,
    pub contact: String,
    pub raffle_numbers: Vec<String>,
    pub date: Date,
    pub source_channel: String,
}

// [business] One row to insert into participantes
#[derive(Debug, Clone, PartialEq)]
pub struct NewParticipantRow {
    pub name: String,
    pub contact: String,
    pub raffle_number: String,
    pub date: Date,
    pub source_channel: String,
}

impl NewParticipants {
    /// Denormalizes the submission into one row per raffle number, in submission order.
    pub fn expand(&self) -> Vec<NewParticipantRow> {
        self.raffle_numbers
            .iter()
            .map(|number| NewParticipantRow {
                name: self.name.clone(),
                contact: self.contact.clone(),
                raffle_number: number.clone(),
                date: self.date,
                source_channel: self.source_channel.clone(),
            })
            .collect()
    }
}

// [business] Validated winner submission - contact and source channel stay optional
#[derive(Debug, Clone, PartialEq)]
pub struct NewWinner {
    pub name: String,
    pub contact: Option<String>,
    pub raffle_numbers: String, // [business] Already collapsed
    pub date: Date,
    pub source_channel: Option<String>,
}

// [business] Confirmation body for successful writes
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
