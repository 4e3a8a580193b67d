use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::matches::MatchFormat;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TournamentStatus {
    #[sea_orm(string_value = "PLANNING")]
    #[serde(rename = "PLANNING")]
    Planning,
    #[sea_orm(string_value = "ACTIVE")]
    #[serde(rename = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "COMPLETED")]
    #[serde(rename = "COMPLETED")]
    Completed,
}

/// Pairing structure metadata; no bracket/group generation consumes it.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TournamentFormat {
    #[sea_orm(string_value = "GROUP")]
    #[serde(rename = "GROUP")]
    Group,
    #[sea_orm(string_value = "SERIES")]
    #[serde(rename = "SERIES")]
    Series,
    #[sea_orm(string_value = "KNOCKOUT")]
    #[serde(rename = "KNOCKOUT")]
    Knockout,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tournaments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: TournamentStatus,
    pub format: TournamentFormat,
    #[sea_orm(column_name = "match_format")]
    pub match_format: MatchFormat,
    #[sea_orm(column_name = "start_date")]
    pub start_date: OffsetDateTime,
    #[sea_orm(column_name = "end_date")]
    pub end_date: Option<OffsetDateTime>,
    #[sea_orm(column_name = "registration_deadline")]
    pub registration_deadline: Option<OffsetDateTime>,
    #[sea_orm(column_name = "max_players")]
    pub max_players: i32,
    #[sea_orm(column_name = "number_of_groups")]
    pub number_of_groups: i32,
    #[sea_orm(column_name = "admin_id")]
    pub admin_id: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AdminId",
        to = "super::users::Column::Id"
    )]
    Admin,
    #[sea_orm(has_many = "super::matches::Entity")]
    Matches,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
    }
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
