pub mod document;
pub mod reducer;
pub mod section;
pub mod section_store;
pub mod slug;
pub mod validation;

pub use document::{DesignSettings, Document, PortfolioStatus, Profile, TemplateRef};
pub use reducer::{decode_action, reduce, reduce_all, EditAction};
pub use section::{
    CardItem, ContentShapeError, EducationItem, ExperienceItem, Section, SectionContent,
    SectionId, SectionType,
};
pub use validation::{validate_for_publish, PublishValidation};
