pub mod node;
pub mod render;
pub mod template_key;

pub use node::{Element, Node};
pub use render::{render, render_document};
pub use template_key::TemplateKey;
