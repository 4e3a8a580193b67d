use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FullName,
    Role,
    IsActive,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Tournaments {
    Table,
    Id,
    Name,
    Description,
    Status,
    Format,
    MatchFormat,
    StartDate,
    EndDate,
    RegistrationDeadline,
    MaxPlayers,
    NumberOfGroups,
    AdminId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TournamentGroups {
    Table,
    Id,
    TournamentId,
    GroupName,
    GroupNumber,
    CreatedAt,
}

#[derive(Iden)]
enum TournamentParticipants {
    Table,
    Id,
    TournamentId,
    UserId,
    GroupId,
    Status,
    RegisteredAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Matches {
    Table,
    Id,
    TournamentId,
    GroupId,
    MatchFormat,
    Status,
    ScheduledStart,
    ActualStart,
    ActualEnd,
    Version,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum MatchParticipants {
    Table,
    Id,
    MatchId,
    UserId,
    FinishingScore,
    Placement,
    IsConfirmed,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum DartThrows {
    Table,
    Id,
    MatchId,
    UserId,
    RoundNumber,
    ThrowNumber,
    Points,
    RemainingScore,
    IsDouble,
    ThrownAt,
}

#[derive(Iden)]
enum MatchConfirmations {
    Table,
    Id,
    MatchId,
    UserId,
    Confirmed,
    ConfirmedAt,
    CreatedAt,
}

#[derive(Iden)]
enum PlayerStatistics {
    Table,
    Id,
    TournamentId,
    UserId,
    MatchesPlayed,
    MatchesWon,
    MatchesLost,
    AverageScore,
    Ranking,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::FullName).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(16)
                            .not_null()
                            .default("PLAYER"),
                    )
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::LastLogin)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_users_username")
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // tournaments
        manager
            .create_table(
                Table::create()
                    .table(Tournaments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tournaments::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Tournaments::Name).string().not_null())
                    .col(ColumnDef::new(Tournaments::Description).string().null())
                    .col(
                        ColumnDef::new(Tournaments::Status)
                            .string_len(16)
                            .not_null()
                            .default("PLANNING"),
                    )
                    .col(
                        ColumnDef::new(Tournaments::Format)
                            .string_len(16)
                            .not_null()
                            .default("GROUP"),
                    )
                    .col(
                        ColumnDef::new(Tournaments::MatchFormat)
                            .string_len(8)
                            .not_null()
                            .default("501"),
                    )
                    .col(
                        ColumnDef::new(Tournaments::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tournaments::EndDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Tournaments::RegistrationDeadline)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Tournaments::MaxPlayers)
                            .integer()
                            .not_null()
                            .default(100),
                    )
                    .col(
                        ColumnDef::new(Tournaments::NumberOfGroups)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Tournaments::AdminId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Tournaments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tournaments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournaments_admin_id")
                            .from(Tournaments::Table, Tournaments::AdminId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_tournaments_admin_id")
                    .table(Tournaments::Table)
                    .col(Tournaments::AdminId)
                    .to_owned(),
            )
            .await?;

        // tournament_groups
        manager
            .create_table(
                Table::create()
                    .table(TournamentGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TournamentGroups::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(TournamentGroups::TournamentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TournamentGroups::GroupName).string().not_null())
                    .col(
                        ColumnDef::new(TournamentGroups::GroupNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentGroups::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournament_groups_tournament_id")
                            .from(TournamentGroups::Table, TournamentGroups::TournamentId)
                            .to(Tournaments::Table, Tournaments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // tournament_participants
        manager
            .create_table(
                Table::create()
                    .table(TournamentParticipants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TournamentParticipants::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(TournamentParticipants::TournamentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentParticipants::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentParticipants::GroupId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TournamentParticipants::Status)
                            .string_len(16)
                            .not_null()
                            .default("REGISTERED"),
                    )
                    .col(
                        ColumnDef::new(TournamentParticipants::RegisteredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentParticipants::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournament_participants_tournament_id")
                            .from(
                                TournamentParticipants::Table,
                                TournamentParticipants::TournamentId,
                            )
                            .to(Tournaments::Table, Tournaments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournament_participants_user_id")
                            .from(
                                TournamentParticipants::Table,
                                TournamentParticipants::UserId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_tournament_participants_tournament_user")
                    .table(TournamentParticipants::Table)
                    .col(TournamentParticipants::TournamentId)
                    .col(TournamentParticipants::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // matches
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Matches::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Matches::TournamentId).big_integer().not_null())
                    .col(ColumnDef::new(Matches::GroupId).big_integer().null())
                    .col(
                        ColumnDef::new(Matches::MatchFormat)
                            .string_len(8)
                            .not_null()
                            .default("501"),
                    )
                    .col(
                        ColumnDef::new(Matches::Status)
                            .string_len(32)
                            .not_null()
                            .default("SCHEDULED"),
                    )
                    .col(
                        ColumnDef::new(Matches::ScheduledStart)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Matches::ActualStart)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Matches::ActualEnd)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Matches::Version)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Matches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Matches::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_tournament_id")
                            .from(Matches::Table, Matches::TournamentId)
                            .to(Tournaments::Table, Tournaments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_group_id")
                            .from(Matches::Table, Matches::GroupId)
                            .to(TournamentGroups::Table, TournamentGroups::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_matches_tournament_id")
                    .table(Matches::Table)
                    .col(Matches::TournamentId)
                    .to_owned(),
            )
            .await?;

        // match_participants
        manager
            .create_table(
                Table::create()
                    .table(MatchParticipants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MatchParticipants::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(MatchParticipants::MatchId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchParticipants::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchParticipants::FinishingScore)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(MatchParticipants::Placement).integer().null())
                    .col(
                        ColumnDef::new(MatchParticipants::IsConfirmed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(MatchParticipants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchParticipants::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_participants_match_id")
                            .from(MatchParticipants::Table, MatchParticipants::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_participants_user_id")
                            .from(MatchParticipants::Table, MatchParticipants::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_match_participants_match_user")
                    .table(MatchParticipants::Table)
                    .col(MatchParticipants::MatchId)
                    .col(MatchParticipants::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // dart_throws
        manager
            .create_table(
                Table::create()
                    .table(DartThrows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DartThrows::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(DartThrows::MatchId).big_integer().not_null())
                    .col(ColumnDef::new(DartThrows::UserId).big_integer().not_null())
                    .col(ColumnDef::new(DartThrows::RoundNumber).integer().not_null())
                    .col(ColumnDef::new(DartThrows::ThrowNumber).integer().not_null())
                    .col(ColumnDef::new(DartThrows::Points).integer().not_null())
                    .col(
                        ColumnDef::new(DartThrows::RemainingScore)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DartThrows::IsDouble)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(DartThrows::ThrownAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dart_throws_match_id")
                            .from(DartThrows::Table, DartThrows::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dart_throws_user_id")
                            .from(DartThrows::Table, DartThrows::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_dart_throws_match_user_thrown_at")
                    .table(DartThrows::Table)
                    .col(DartThrows::MatchId)
                    .col(DartThrows::UserId)
                    .col(DartThrows::ThrownAt)
                    .to_owned(),
            )
            .await?;

        // match_confirmations
        manager
            .create_table(
                Table::create()
                    .table(MatchConfirmations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MatchConfirmations::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(MatchConfirmations::MatchId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchConfirmations::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchConfirmations::Confirmed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(MatchConfirmations::ConfirmedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MatchConfirmations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_confirmations_match_id")
                            .from(MatchConfirmations::Table, MatchConfirmations::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_confirmations_user_id")
                            .from(MatchConfirmations::Table, MatchConfirmations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // player_statistics
        manager
            .create_table(
                Table::create()
                    .table(PlayerStatistics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlayerStatistics::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(PlayerStatistics::TournamentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlayerStatistics::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlayerStatistics::MatchesPlayed)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PlayerStatistics::MatchesWon)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PlayerStatistics::MatchesLost)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(PlayerStatistics::AverageScore).double().null())
                    .col(ColumnDef::new(PlayerStatistics::Ranking).integer().null())
                    .col(
                        ColumnDef::new(PlayerStatistics::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_statistics_tournament_id")
                            .from(PlayerStatistics::Table, PlayerStatistics::TournamentId)
                            .to(Tournaments::Table, Tournaments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_statistics_user_id")
                            .from(PlayerStatistics::Table, PlayerStatistics::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerStatistics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatchConfirmations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DartThrows::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatchParticipants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TournamentParticipants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TournamentGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tournaments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}
