// [business] Idempotent table creation - runs once at startup before the server binds
// [library] SQLx pool - one connection is acquired for both statements
use sqlx::MySqlPool;

// [library] Structured logging of each table becoming ready
use tracing::info;

pub const CREATE_PARTICIPANTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS participantes (
      id INT AUTO_INCREMENT PRIMARY KEY,
      nombre VARCHAR(255) NOT NULL,
      whatsapp VARCHAR(255),
      numeroRifa VARCHAR(255),
      fecha DATE,
      servidor VARCHAR(255)
    )
"#;

pub const CREATE_WINNERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS ganadores (
      id INT AUTO_INCREMENT PRIMARY KEY,
      nombre VARCHAR(255) NOT NULL,
      whatsapp VARCHAR(255),
      numeroRifa TEXT NOT NULL,
      fecha DATE,
      servidor VARCHAR(255)
    )
"#;

/// Idempotently creates both tables on one pooled connection.
///
/// Any failure is returned to the caller; startup treats it as fatal.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    // Connection goes back to the pool when `conn` drops, on every path.
    let mut conn = pool.acquire().await?;

    sqlx::query(CREATE_PARTICIPANTS_TABLE)
        .execute(&mut *conn)
        .await?;
    info!("Table 'participantes' ready");

    sqlx::query(CREATE_WINNERS_TABLE).execute(&mut *conn).await?;
    info!("Table 'ganadores' ready");

    Ok(())
}
