mod get_template_service;
mod get_templates_service;

pub use get_template_service::GetTemplateService;
pub use get_templates_service::GetTemplatesService;
