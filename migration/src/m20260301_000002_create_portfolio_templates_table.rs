use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioTemplates::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(PortfolioTemplates::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioTemplates::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PortfolioTemplates::Category)
                            .string_len(50)
                            .not_null()
                            .default("professional"),
                    )
                    .col(
                        ColumnDef::new(PortfolioTemplates::IsPremium)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PortfolioTemplates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_portfolio_templates_name_unique
                ON portfolio_templates (lower(name));
                "#,
            )
            .await?;

        // Seed the two themes the renderer knows about.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                INSERT INTO portfolio_templates (name, description, category, is_premium)
                VALUES
                    ('Modern Clean', 'Professional and minimalist design with clean typography', 'professional', false),
                    ('Minimalist', 'Centered, whitespace-first layout that puts content forward', 'minimal', false)
                ON CONFLICT DO NOTHING;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_portfolio_templates_name_unique;")
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioTemplates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioTemplates {
    Table,
    Id,
    Name,
    Description,
    Category,
    IsPremium,
    CreatedAt,
}
