use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Title is the key: two movies sharing a title collapse to one row.
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(string(Movies::Title).primary_key())
                    .col(string(Movies::Year).default(""))
                    .col(string(Movies::Rated).default(""))
                    .col(string(Movies::Released).default(""))
                    .col(string(Movies::Runtime).default(""))
                    .col(string(Movies::Genre).default(""))
                    .col(string(Movies::Director).default(""))
                    .col(text(Movies::Writer).default(""))
                    .col(text(Movies::Actors).default(""))
                    .col(text(Movies::Plot).default(""))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Title,
    Year,
    Rated,
    Released,
    Runtime,
    Genre,
    Director,
    Writer,
    Actors,
    Plot,
}
