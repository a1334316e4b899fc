use serde::Serialize;
use std::fmt;

/// Theme understood by the renderer. Anything else falls back to `ModernClean`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKey {
    #[default]
    ModernClean,
    Minimalist,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 2] = [TemplateKey::ModernClean, TemplateKey::Minimalist];

    pub fn from_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "minimalist" => TemplateKey::Minimalist,
            _ => TemplateKey::ModernClean,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKey::ModernClean => "modern-clean",
            TemplateKey::Minimalist => "minimalist",
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
