use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HomePages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HomePages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HomePages::Key)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(HomePages::Name).string_len(150).not_null())
                    .col(ColumnDef::new(HomePages::Tagline).text().not_null())
                    .col(ColumnDef::new(HomePages::ResumeUrl).text().null())
                    .col(ColumnDef::new(HomePages::PhotoUrl).text().null())
                    .col(
                        ColumnDef::new(HomePages::AvailableForOpportunities)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(HomePages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(HomePages::UpdatedAt)
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
            .drop_table(Table::drop().table(HomePages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HomePages {
    Table,
    Id,
    Key,
    Name,
    Tagline,
    ResumeUrl,
    PhotoUrl,
    AvailableForOpportunities,
    CreatedAt,
    UpdatedAt,
}
