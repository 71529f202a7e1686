use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profiles::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Profiles::AppId)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profiles::Name).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Profiles::Username)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profiles::Url).text().not_null())
                    .col(ColumnDef::new(Profiles::Stats).string_len(150).null())
                    .col(ColumnDef::new(Profiles::Description).text().null())
                    .col(
                        ColumnDef::new(Profiles::Color)
                            .string_len(100)
                            .not_null()
                            .default("bg-foreground"),
                    )
                    .col(
                        ColumnDef::new(Profiles::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    AppId,
    Name,
    Username,
    Url,
    Stats,
    Description,
    Color,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
