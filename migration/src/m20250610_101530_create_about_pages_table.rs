use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AboutPages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AboutPages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AboutPages::Key)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AboutPages::Bio).text().not_null())
                    .col(
                        ColumnDef::new(AboutPages::Education)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AboutPages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AboutPages::UpdatedAt)
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
            .drop_table(Table::drop().table(AboutPages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AboutPages {
    Table,
    Id,
    Key,
    Bio,
    Education,
    CreatedAt,
    UpdatedAt,
}
