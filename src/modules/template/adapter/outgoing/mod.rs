pub mod sea_orm_entity;
mod template_query_postgres;

pub use template_query_postgres::TemplateQueryPostgres;
