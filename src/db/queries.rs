// [business] Participant and winner repository operations over the shared pool
use super::models::*;
use crate::db::Database;

// [library] SQLx runtime queries - QueryBuilder assembles the multi-row participant insert
use sqlx::{query, query_as, MySql, QueryBuilder};

const INSERT_PARTICIPANTS: &str =
    "INSERT INTO participantes (nombre, whatsapp, numeroRifa, fecha, servidor) ";

// [business] Bound parameters per participant row
const PARTICIPANT_COLUMNS: usize = 5;

// [business] MySQL rejects prepared statements with more than 65535 placeholders
pub const MAX_ROWS_PER_INSERT: usize = u16::MAX as usize / PARTICIPANT_COLUMNS;

// Participant queries
pub async fn list_participants(db: &Database) -> Result<Vec<Participant>, sqlx::Error> {
    query_as::<_, Participant>(
        "SELECT id, nombre, whatsapp, numeroRifa, fecha, servidor
         FROM participantes
         ORDER BY id ASC",
    )
    .fetch_all(db.as_ref())
    .await
}

/// One multi-row INSERT per chunk of at most `MAX_ROWS_PER_INSERT` rows.
pub fn participant_inserts(rows: Vec<NewParticipantRow>) -> Vec<QueryBuilder<'static, MySql>> {
    rows.chunks(MAX_ROWS_PER_INSERT)
        .map(|chunk| {
            let mut builder: QueryBuilder<'static, MySql> = QueryBuilder::new(INSERT_PARTICIPANTS);
            builder.push_values(chunk.iter().cloned(), |mut b, row| {
                b.push_bind(row.name)
                    .push_bind(row.contact)
                    .push_bind(row.raffle_number)
                    .push_bind(row.date)
                    .push_bind(row.source_channel);
            });
            builder
        })
        .collect()
}

/// Inserts every expanded row inside one transaction, so either all raffle
/// numbers of a submission are stored or none are.
pub async fn insert_participants(
    db: &Database,
    submission: &NewParticipants,
) -> Result<u64, sqlx::Error> {
    let rows = submission.expand();
    if rows.is_empty() {
        return Ok(0);
    }

    // [rust] Dropping the transaction without commit rolls it back on every error path
    let mut tx = db.begin().await?;
    let mut inserted = 0;
    for mut builder in participant_inserts(rows) {
        inserted += builder.build().execute(&mut *tx).await?.rows_affected();
    }
    tx.commit().await?;

    Ok(inserted)
}

/// Returns the number of rows removed; zero is not an error.
pub async fn delete_participant(db: &Database, id: i32) -> Result<u64, sqlx::Error> {
    let result = query("DELETE FROM participantes WHERE id = ?")
        .bind(id)
        .execute(db.as_ref())
        .await?;

    Ok(result.rows_affected())
}

// Winner queries
pub async fn list_winners(db: &Database) -> Result<Vec<Winner>, sqlx::Error> {
    query_as::<_, Winner>(
        "SELECT id, nombre, whatsapp, numeroRifa, fecha, servidor
         FROM ganadores
         ORDER BY id DESC",
    )
    .fetch_all(db.as_ref())
    .await
}

pub async fn insert_winner(db: &Database, winner: &NewWinner) -> Result<u64, sqlx::Error> {
    let result = query(
        "INSERT INTO ganadores (nombre, whatsapp, numeroRifa, fecha, servidor)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&winner.name)
    .bind(&winner.contact)
    .bind(&winner.raffle_numbers)
    .bind(winner.date)
    .bind(&winner.source_channel)
    .execute(db.as_ref())
    .await?;

    Ok(result.last_insert_id())
}

// Diagnostics
pub async fn ping(db: &Database) -> Result<(), sqlx::Error> {
    query("SELECT 1").execute(db.as_ref()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn submission(count: usize) -> NewParticipants {
        NewParticipants {
            name: "Ana".to_string(),
            contact: "555".to_string(),
            raffle_numbers: (0..count).map(|n| format!("{:05}", n)).collect(),
            date: date!(2024 - 01 - 01),
            source_channel: "s1".to_string(),
        }
    }

    #[test]
    fn test_batched_insert_sql_has_one_tuple_per_raffle_number() {
        let builders = participant_inserts(submission(3).expand());

        assert_eq!(builders.len(), 1);
        let sql = builders[0].sql();
        assert!(sql.starts_with("INSERT INTO participantes"));
        assert_eq!(sql.matches("(?, ?, ?, ?, ?)").count(), 3);
    }

    #[test]
    fn test_chunk_boundary_stays_under_placeholder_limit() {
        assert_eq!(MAX_ROWS_PER_INSERT, 13107);

        let exact = participant_inserts(submission(MAX_ROWS_PER_INSERT).expand());
        assert_eq!(exact.len(), 1);

        let builders = participant_inserts(submission(MAX_ROWS_PER_INSERT + 1).expand());
        assert_eq!(builders.len(), 2);

        let placeholders: Vec<usize> = builders
            .iter()
            .map(|builder| builder.sql().matches('?').count())
            .collect();
        assert_eq!(placeholders, vec![MAX_ROWS_PER_INSERT * 5, 5]);
        assert!(placeholders.iter().all(|&count| count <= u16::MAX as usize));
    }
}
