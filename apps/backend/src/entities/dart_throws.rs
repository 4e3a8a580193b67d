use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One dart, immutable once accepted. Only ever deleted by undo, and only the
/// newest row for a (match, user) pair. Ordering key is (thrown_at, id).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dart_throws")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "match_id")]
    pub match_id: i64,
    #[sea_orm(column_name = "user_id")]
    pub user_id: i64,
    #[sea_orm(column_name = "round_number")]
    pub round_number: i32,
    /// Position within the round, 1-3.
    #[sea_orm(column_name = "throw_number")]
    pub throw_number: i32,
    pub points: i32,
    /// Denormalized running score after this throw.
    #[sea_orm(column_name = "remaining_score")]
    pub remaining_score: i32,
    #[sea_orm(column_name = "is_double")]
    pub is_double: bool,
    #[sea_orm(column_name = "thrown_at")]
    pub thrown_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::MatchId",
        to = "super::matches::Column::Id"
    )]
    Match,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
