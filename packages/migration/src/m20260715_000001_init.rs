use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum GameSets {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum Rounds {
    Table,
    Id,
    GameSet,
    Category,
    Prompt,
    Kind,
    CurrentTeam,
    Status,
    TargetItemId,
    WinnerTeam,
    LoserTeam,
    ImageData,
    CreatedAt,
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
    RoundId,
    Title,
    Rating,
    SecretText,
    ImageData,
    Eliminated,
    EliminatedByTeam,
    CreatedAt,
}

#[derive(Iden)]
enum Templates {
    Table,
    Id,
    GameSet,
    Name,
    Prompt,
    Kind,
    ImageData,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TemplateItems {
    Table,
    Id,
    TemplateId,
    Title,
    Rating,
    SecretText,
    IsTarget,
    ImageData,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // game_sets
        manager
            .create_table(
                Table::create()
                    .table(GameSets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GameSets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(GameSets::Name).string_len(6).not_null())
                    .col(
                        ColumnDef::new(GameSets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_sets_name_unique")
                    .table(GameSets::Table)
                    .col(GameSets::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // rounds
        // target_item_id carries no foreign key: rounds are created with a nil
        // placeholder and the real id is written later in the same transaction.
        manager
            .create_table(
                Table::create()
                    .table(Rounds::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rounds::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Rounds::GameSet).string_len(6).not_null())
                    .col(ColumnDef::new(Rounds::Category).string().not_null())
                    .col(ColumnDef::new(Rounds::Prompt).string().not_null())
                    .col(ColumnDef::new(Rounds::Kind).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Rounds::CurrentTeam)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Rounds::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Rounds::TargetItemId).uuid().not_null())
                    .col(ColumnDef::new(Rounds::WinnerTeam).small_integer().null())
                    .col(ColumnDef::new(Rounds::LoserTeam).small_integer().null())
                    .col(ColumnDef::new(Rounds::ImageData).text().null())
                    .col(
                        ColumnDef::new(Rounds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rounds_game_set")
                    .table(Rounds::Table)
                    .col(Rounds::GameSet)
                    .to_owned(),
            )
            .await?;

        // items
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Items::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Items::RoundId).uuid().not_null())
                    .col(ColumnDef::new(Items::Title).string().not_null())
                    .col(ColumnDef::new(Items::Rating).decimal_len(6, 2).null())
                    .col(ColumnDef::new(Items::SecretText).text().null())
                    .col(ColumnDef::new(Items::ImageData).text().null())
                    .col(
                        ColumnDef::new(Items::Eliminated)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Items::EliminatedByTeam)
                            .small_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Items::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_items_round_id")
                            .from(Items::Table, Items::RoundId)
                            .to(Rounds::Table, Rounds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_items_round_id")
                    .table(Items::Table)
                    .col(Items::RoundId)
                    .to_owned(),
            )
            .await?;

        // templates
        manager
            .create_table(
                Table::create()
                    .table(Templates::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Templates::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Templates::GameSet).string_len(6).not_null())
                    .col(ColumnDef::new(Templates::Name).string().not_null())
                    .col(ColumnDef::new(Templates::Prompt).string().not_null())
                    .col(ColumnDef::new(Templates::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(Templates::ImageData).text().null())
                    .col(
                        ColumnDef::new(Templates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Templates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_templates_game_set")
                    .table(Templates::Table)
                    .col(Templates::GameSet)
                    .to_owned(),
            )
            .await?;

        // template_items
        manager
            .create_table(
                Table::create()
                    .table(TemplateItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TemplateItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TemplateItems::TemplateId).uuid().not_null())
                    .col(ColumnDef::new(TemplateItems::Title).string().not_null())
                    .col(
                        ColumnDef::new(TemplateItems::Rating)
                            .decimal_len(6, 2)
                            .null(),
                    )
                    .col(ColumnDef::new(TemplateItems::SecretText).text().null())
                    .col(
                        ColumnDef::new(TemplateItems::IsTarget)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(TemplateItems::ImageData).text().null())
                    .col(
                        ColumnDef::new(TemplateItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_template_items_template_id")
                            .from(TemplateItems::Table, TemplateItems::TemplateId)
                            .to(Templates::Table, Templates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_template_items_template_id")
                    .table(TemplateItems::Table)
                    .col(TemplateItems::TemplateId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TemplateItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Templates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rounds::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GameSets::Table).to_owned())
            .await?;
        Ok(())
    }
}
