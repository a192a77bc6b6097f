use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clinic::Table)
                    .if_not_exists()
                    .col(pk_auto(Clinic::Id))
                    .col(string(Clinic::Name))
                    .col(string(Clinic::Phone).default(""))
                    .col(string(Clinic::Email))
                    .col(string(Clinic::TaxId).default(""))
                    .col(string(Clinic::LegalName).default(""))
                    .col(string(Clinic::PostalCode).default(""))
                    .col(string(Clinic::Street).default(""))
                    .col(string(Clinic::Number).default(""))
                    .col(string_null(Clinic::Complement))
                    .col(string(Clinic::District).default(""))
                    .col(string(Clinic::City).default(""))
                    .col(string(Clinic::State).default(""))
                    .col(string(Clinic::IbgeCode).default(""))
                    .col(
                        timestamp_with_time_zone(Clinic::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clinic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Clinic {
    Table,
    Id,
    Name,
    Phone,
    Email,
    TaxId,
    LegalName,
    PostalCode,
    Street,
    Number,
    Complement,
    District,
    City,
    State,
    IbgeCode,
    CreatedAt,
}
