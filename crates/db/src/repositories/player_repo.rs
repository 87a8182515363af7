//! Repository for the `players` table.

use arena_core::filter::{Predicate, Span};
use arena_core::paging::PageRequest;
use arena_core::player::PlayerOrder;
use arena_core::types::{DbId, Timestamp};
use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::PgPool;
use sqlx::Postgres;

use crate::models::player::{NewPlayer, Player};
use crate::store::PlayerStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, title, race, profession, experience, level, \
                       until_next_level, birthday, banned";

/// PostgreSQL-backed [`PlayerStore`].
///
/// Every write is a single statement, so each one is atomic on its own.
#[derive(Debug, Clone)]
pub struct PlayerRepo {
    pool: PgPool,
}

impl PlayerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerStore for PlayerRepo {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM players WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn insert(&self, player: &NewPlayer) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players
                (name, title, race, profession, experience, level, until_next_level, birthday, banned)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(&player.name)
            .bind(&player.title)
            .bind(player.race.as_str())
            .bind(player.profession.as_str())
            .bind(player.experience())
            .bind(player.level())
            .bind(player.until_next_level())
            .bind(player.birthday)
            .bind(player.banned)
            .fetch_one(&self.pool)
            .await
    }

    async fn save(&self, player: &Player) -> Result<Player, sqlx::Error> {
        let query = format!(
            "UPDATE players SET
                name = $2,
                title = $3,
                race = $4,
                profession = $5,
                experience = $6,
                level = $7,
                until_next_level = $8,
                birthday = $9,
                banned = $10
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(player.id)
            .bind(&player.name)
            .bind(&player.title)
            .bind(player.race.as_str())
            .bind(player.profession.as_str())
            .bind(player.experience())
            .bind(player.level())
            .bind(player.until_next_level())
            .bind(player.birthday)
            .bind(player.banned)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, predicates: &[Predicate]) -> Result<i64, sqlx::Error> {
        let (where_clause, bind_values, _) = build_player_filter(predicates);

        let query = format!("SELECT COUNT(*)::BIGINT AS count FROM players {where_clause}");

        let q = bind_player_values_scalar(sqlx::query_scalar::<_, i64>(&query), &bind_values);
        q.fetch_one(&self.pool).await
    }

    async fn find_all(
        &self,
        predicates: &[Predicate],
        page: &PageRequest,
    ) -> Result<Vec<Player>, sqlx::Error> {
        let (where_clause, bind_values, bind_idx) = build_player_filter(predicates);

        let query = format!(
            "SELECT {COLUMNS} FROM players {where_clause} \
             ORDER BY {} \
             LIMIT ${bind_idx} OFFSET ${}",
            order_clause(page.order()),
            bind_idx + 1
        );

        let q = bind_player_values(sqlx::query_as::<_, Player>(&query), &bind_values);
        q.bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Dynamic filter helpers
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built player queries.
#[derive(Debug, Clone, PartialEq)]
enum BindValue {
    Int(i32),
    Bool(bool),
    Text(String),
    Timestamp(Timestamp),
}

/// Bounds for bound `timestamptz` values: 4001 BC and 200000 AD, both
/// inside PostgreSQL's range. Stored birthdays never come close.
const TIMESTAMP_BIND_MIN_MILLIS: i64 = -188_395_027_200_000;
const TIMESTAMP_BIND_MAX_MILLIS: i64 = 6_249_223_180_800_000;

/// Bind a filter instant, clamped into the range PostgreSQL accepts.
fn bind_timestamp(ts: Timestamp) -> BindValue {
    let millis = ts
        .timestamp_millis()
        .clamp(TIMESTAMP_BIND_MIN_MILLIS, TIMESTAMP_BIND_MAX_MILLIS);
    BindValue::Timestamp(Timestamp::from_timestamp_millis(millis).unwrap_or(ts))
}

/// `ORDER BY` body for a sort field; `id` breaks ties so pages are stable.
fn order_clause(order: PlayerOrder) -> String {
    match order {
        PlayerOrder::Id => "id ASC".to_string(),
        other => format!("{} ASC, id ASC", other.column()),
    }
}

/// Build a WHERE clause and bind values from a predicate conjunction.
///
/// Returns `(where_clause, bind_values, next_bind_index)`.
/// The `where_clause` is empty if there are no predicates, or starts with `WHERE `.
fn build_player_filter(predicates: &[Predicate]) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    for predicate in predicates {
        match predicate {
            // strpos keeps `%` and `_` literal, unlike LIKE.
            Predicate::NameContains(needle) => {
                conditions.push(format!("strpos(name, ${bind_idx}) > 0"));
                bind_idx += 1;
                bind_values.push(BindValue::Text(needle.clone()));
            }
            Predicate::TitleContains(needle) => {
                conditions.push(format!("strpos(title, ${bind_idx}) > 0"));
                bind_idx += 1;
                bind_values.push(BindValue::Text(needle.clone()));
            }
            Predicate::RaceIs(race) => {
                conditions.push(format!("race = ${bind_idx}"));
                bind_idx += 1;
                bind_values.push(BindValue::Text(race.as_str().to_string()));
            }
            Predicate::ProfessionIs(profession) => {
                conditions.push(format!("profession = ${bind_idx}"));
                bind_idx += 1;
                bind_values.push(BindValue::Text(profession.as_str().to_string()));
            }
            Predicate::BannedIs(banned) => {
                conditions.push(format!("banned = ${bind_idx}"));
                bind_idx += 1;
                bind_values.push(BindValue::Bool(*banned));
            }
            Predicate::ExperienceIn(span) => {
                push_span(
                    &mut conditions,
                    &mut bind_values,
                    &mut bind_idx,
                    "experience",
                    span,
                    BindValue::Int,
                );
            }
            Predicate::LevelIn(span) => {
                push_span(
                    &mut conditions,
                    &mut bind_values,
                    &mut bind_idx,
                    "level",
                    span,
                    BindValue::Int,
                );
            }
            Predicate::BirthdayIn(span) => {
                push_span(
                    &mut conditions,
                    &mut bind_values,
                    &mut bind_idx,
                    "birthday",
                    span,
                    bind_timestamp,
                );
            }
        }
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Append an inclusive range condition on `column`.
fn push_span<T: Copy>(
    conditions: &mut Vec<String>,
    bind_values: &mut Vec<BindValue>,
    bind_idx: &mut u32,
    column: &str,
    span: &Span<T>,
    to_bind: fn(T) -> BindValue,
) {
    match *span {
        Span::AtLeast(min) => {
            conditions.push(format!("{column} >= ${bind_idx}"));
            *bind_idx += 1;
            bind_values.push(to_bind(min));
        }
        Span::AtMost(max) => {
            conditions.push(format!("{column} <= ${bind_idx}"));
            *bind_idx += 1;
            bind_values.push(to_bind(max));
        }
        Span::Between(min, max) => {
            conditions.push(format!(
                "{column} BETWEEN ${bind_idx} AND ${}",
                *bind_idx + 1
            ));
            *bind_idx += 2;
            bind_values.push(to_bind(min));
            bind_values.push(to_bind(max));
        }
    }
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_player_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, Postgres, O, PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, Postgres, O, PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Int(v) => q = q.bind(*v),
            BindValue::Bool(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Timestamp(v) => q = q.bind(*v),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_player_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, Postgres, i64, PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, Postgres, i64, PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Int(v) => q = q.bind(*v),
            BindValue::Bool(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Timestamp(v) => q = q.bind(*v),
        }
    }
    q
}
