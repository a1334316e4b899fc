mod get_template_use_case;
mod get_templates_use_case;

pub use get_template_use_case::{GetTemplateError, GetTemplateUseCase};
pub use get_templates_use_case::{GetTemplatesError, GetTemplatesUseCase};
