use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum MatchStatus {
    #[sea_orm(string_value = "SCHEDULED")]
    #[serde(rename = "SCHEDULED")]
    Scheduled,
    #[sea_orm(string_value = "LIVE")]
    #[serde(rename = "LIVE")]
    Live,
    #[sea_orm(string_value = "AWAITING_CONFIRMATION")]
    #[serde(rename = "AWAITING_CONFIRMATION")]
    AwaitingConfirmation,
    #[sea_orm(string_value = "COMPLETED")]
    #[serde(rename = "COMPLETED")]
    Completed,
}

/// Game format: the countdown a leg starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum MatchFormat {
    #[sea_orm(string_value = "301")]
    #[serde(rename = "301")]
    ThreeOhOne,
    #[sea_orm(string_value = "501")]
    #[serde(rename = "501")]
    FiveOhOne,
}

impl MatchFormat {
    /// The score every participant counts down from.
    pub fn starting_score(&self) -> i32 {
        match self {
            MatchFormat::ThreeOhOne => 301,
            MatchFormat::FiveOhOne => 501,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "tournament_id")]
    pub tournament_id: i64,
    #[sea_orm(column_name = "group_id")]
    pub group_id: Option<i64>,
    #[sea_orm(column_name = "match_format")]
    pub match_format: MatchFormat,
    pub status: MatchStatus,
    #[sea_orm(column_name = "scheduled_start")]
    pub scheduled_start: Option<OffsetDateTime>,
    #[sea_orm(column_name = "actual_start")]
    pub actual_start: Option<OffsetDateTime>,
    #[sea_orm(column_name = "actual_end")]
    pub actual_end: Option<OffsetDateTime>,
    /// Optimistic lock; bumped by every scoring mutation.
    pub version: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournaments::Entity",
        from = "Column::TournamentId",
        to = "super::tournaments::Column::Id"
    )]
    Tournament,
    #[sea_orm(has_many = "super::match_participants::Entity")]
    MatchParticipants,
    #[sea_orm(has_many = "super::dart_throws::Entity")]
    DartThrows,
}

impl Related<super::tournaments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl Related<super::match_participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchParticipants.def()
    }
}

impl Related<super::dart_throws::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DartThrows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
