//! Summary entity model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notecrunch_core::types::id::{SummaryId, UserId};

/// Where the transcript behind a summary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    /// Media uploaded by the user.
    Upload,
    /// A remote video URL.
    Url,
}

impl fmt::Display for SummarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SummarySource {
    /// Column value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Url => "url",
        }
    }
}

impl FromStr for SummarySource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upload" => Ok(Self::Upload),
            "url" => Ok(Self::Url),
            other => Err(format!("unknown summary source '{other}'")),
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for SummarySource {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for SummarySource {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for SummarySource {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        raw.parse().map_err(Into::into)
    }
}

/// AI-generated study notes for a lecture.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Summary {
    /// Unique summary identifier.
    pub id: SummaryId,
    /// The summary owner.
    pub owner_id: UserId,
    /// Display title.
    pub title: String,
    /// Generated notes.
    pub summary: String,
    /// Transcript the notes were generated from.
    pub transcript: String,
    /// Upload or URL.
    pub source: SummarySource,
    /// When the summary was stored.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a summary.
#[derive(Debug, Clone)]
pub struct NewSummary {
    pub owner_id: UserId,
    pub title: String,
    pub summary: String,
    pub transcript: String,
    pub source: SummarySource,
}
