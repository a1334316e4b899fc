pub mod session_provider;
pub mod token_provider;
pub mod user_profile_query;

pub use session_provider::{FixedSession, SessionProvider};
pub use token_provider::TokenProvider;
pub use user_profile_query::{UserProfileQuery, UserProfileQueryError};
