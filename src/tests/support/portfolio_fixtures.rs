use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::outgoing::{PortfolioRecord, PortfolioView};
use crate::modules::portfolio::domain::section_store::create_section;
use crate::modules::portfolio::domain::{
    DesignSettings, Document, PortfolioStatus, Profile, SectionType, TemplateRef,
};

pub fn complete_profile() -> Profile {
    Profile {
        name: "Ada Lovelace".to_string(),
        title: "Analytical Engineer".to_string(),
        bio: "Writes programs for engines that do not exist yet.".to_string(),
        email: "ada@example.com".to_string(),
        location: "London".to_string(),
        github: "https://github.com/ada".to_string(),
        ..Default::default()
    }
}

/// Unsaved document with a publishable profile and two sections.
pub fn sample_document() -> Document {
    Document {
        profile: complete_profile(),
        sections: vec![
            create_section(SectionType::Text),
            create_section(SectionType::Skills),
        ],
        ..Default::default()
    }
}

pub fn sample_record(owner: UserId, id: Uuid) -> PortfolioRecord {
    let now = Utc::now();
    PortfolioRecord {
        id,
        owner,
        title: "Ada Lovelace Portfolio".to_string(),
        slug: "ada-lovelace-portfolio-1b4e28ba".to_string(),
        template_id: None,
        profile: complete_profile(),
        design: DesignSettings::default(),
        status: PortfolioStatus::Draft,
        published_at: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_view(owner: UserId, id: Uuid) -> PortfolioView {
    PortfolioView::from_record(
        sample_record(owner, id),
        TemplateRef::default(),
        sample_document().sections,
    )
}

/// Stored portfolio whose profile is still blank.
pub fn incomplete_view(owner: UserId, id: Uuid) -> PortfolioView {
    let mut view = sample_view(owner, id);
    view.document.profile = Profile::default();
    view
}

pub fn published_record(owner: UserId, id: Uuid) -> PortfolioRecord {
    PortfolioRecord {
        status: PortfolioStatus::Published,
        published_at: Some(Utc::now()),
        ..sample_record(owner, id)
    }
}
