pub mod jwt;
pub mod sea_orm_entity;
pub mod user_profile_query_postgres;

pub use user_profile_query_postgres::UserProfileQueryPostgres;
