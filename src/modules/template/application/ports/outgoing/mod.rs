pub mod template_query;

pub use template_query::{TemplateListFilter, TemplateQuery, TemplateQueryError, TemplateView};
