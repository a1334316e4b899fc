use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioSections::Table)
                    .if_not_exists()
                    // Section ids are allocated by the builder (UUID v7), not by the DB.
                    .col(
                        ColumnDef::new(PortfolioSections::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PortfolioSections::PortfolioId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioSections::SectionType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioSections::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioSections::Content)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioSections::IsVisible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PortfolioSections::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PortfolioSections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PortfolioSections::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_sections_portfolio_id")
                            .from(PortfolioSections::Table, PortfolioSections::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolio_sections_portfolio_order
                ON portfolio_sections (portfolio_id, sort_order);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE portfolio_sections
                ADD CONSTRAINT chk_portfolio_sections_type
                CHECK (section_type IN ('text', 'list', 'cards', 'skills', 'experience', 'education'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_portfolio_sections_updated_at
                BEFORE UPDATE ON portfolio_sections
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_portfolio_sections_updated_at ON portfolio_sections;
                DROP INDEX IF EXISTS idx_portfolio_sections_portfolio_order;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioSections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioSections {
    Table,
    Id,
    PortfolioId,
    SectionType,
    Title,
    Content,
    IsVisible,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
}
