use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactDetails::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContactDetails::Key)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ContactDetails::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContactDetails::Phone).string_len(50).null())
                    .col(
                        ColumnDef::new(ContactDetails::Location)
                            .string_len(150)
                            .null(),
                    )
                    .col(ColumnDef::new(ContactDetails::Description).text().null())
                    .col(
                        ColumnDef::new(ContactDetails::SocialLinks)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactDetails::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ContactDetails::UpdatedAt)
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
            .drop_table(Table::drop().table(ContactDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactDetails {
    Table,
    Id,
    Key,
    Email,
    Phone,
    Location,
    Description,
    SocialLinks,
    CreatedAt,
    UpdatedAt,
}
