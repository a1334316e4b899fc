use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create portfolios table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolios::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Portfolios::UserId).uuid().not_null())
                    .col(ColumnDef::new(Portfolios::TemplateId).uuid())
                    .col(ColumnDef::new(Portfolios::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Portfolios::Slug).string_len(180).not_null())
                    .col(
                        ColumnDef::new(Portfolios::ProfileData)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Portfolios::DesignSettings)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Portfolios::Status)
                            .string_len(20)
                            .not_null()
                            .default("draft"),
                    )
                    .col(ColumnDef::new(Portfolios::PublishedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Portfolios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Portfolios::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolios_user_id")
                            .from(Portfolios::Table, Portfolios::UserId)
                            .to(UserProfiles::Table, UserProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolios_template_id")
                            .from(Portfolios::Table, Portfolios::TemplateId)
                            .to(PortfolioTemplates::Table, PortfolioTemplates::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Owner listing, most recently updated first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolios_user_updated
                ON portfolios (user_id, updated_at DESC);
                "#,
            )
            .await?;

        // Global, case-insensitive slug uniqueness
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_portfolios_slug_unique
                ON portfolios (lower(slug));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE portfolios
                ADD CONSTRAINT chk_portfolios_status
                CHECK (status IN ('draft', 'published'));
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_portfolios_updated_at
                BEFORE UPDATE ON portfolios
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
                DROP TRIGGER IF EXISTS update_portfolios_updated_at ON portfolios;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_portfolios_user_updated;
                DROP INDEX IF EXISTS idx_portfolios_slug_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    UserId,
    TemplateId,
    Title,
    Slug,
    ProfileData,
    DesignSettings,
    Status,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserProfiles {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum PortfolioTemplates {
    Table,
    Id,
}
