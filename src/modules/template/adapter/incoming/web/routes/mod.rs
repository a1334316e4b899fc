mod get_template;
mod get_templates;

pub use get_template::get_template_handler;
pub use get_templates::get_templates_handler;
