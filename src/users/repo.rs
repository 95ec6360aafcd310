use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Internal user record. `subject` is the external auth-provider identifier.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub subject: String,
    pub email: String,
    pub created_at: OffsetDateTime,
}

impl User {
    /// Find a user by the external subject identifier.
    pub async fn find_by_subject(db: &PgPool, subject: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, subject, email, created_at
            FROM users
            WHERE subject = $1
            "#,
        )
        .bind(subject)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Return the user for this subject, creating one on first sight.
    ///
    /// A single upsert statement: concurrent first requests for the same
    /// subject resolve to one row through the uniqueness constraint instead
    /// of a find-then-create race.
    pub async fn find_or_create_by_subject(db: &PgPool, subject: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (subject, email)
            VALUES ($1, $2)
            ON CONFLICT (subject) DO UPDATE SET subject = EXCLUDED.subject
            RETURNING id, subject, email, created_at
            "#,
        )
        .bind(subject)
        .bind(placeholder_email(subject))
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}

/// Placeholder address stored until a real one is known; derived from the
/// subject so it stays unique per user.
fn placeholder_email(subject: &str) -> String {
    format!("{subject}@placeholder.invalid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_email_embeds_the_subject() {
        assert_eq!(
            placeholder_email("user_2x7k"),
            "user_2x7k@placeholder.invalid"
        );
    }

    #[test]
    fn placeholder_email_is_distinct_per_subject() {
        assert_ne!(placeholder_email("a"), placeholder_email("b"));
    }
}
