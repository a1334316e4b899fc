use crate::modules::portfolio::domain::{DesignSettings, Document, Section, SectionContent};

use super::super::node::{Element, Node};
use super::{
    display_or, education_cards, experience_cards, external_link, root, section_shell,
    visible_sections,
};

// Centered, whitespace-first layout. No contact block in the header.
pub(super) fn render(document: &Document, design: &DesignSettings) -> Element {
    let profile = &document.profile;

    let mut header = Element::new("header")
        .class("pf-header pf-centered")
        .child(Element::new("h1").text(display_or(&profile.name, "Your Name")))
        .child(
            Element::new("p")
                .class("pf-title")
                .text(display_or(&profile.title, "Your Professional Title")),
        );

    if !profile.bio.is_empty() {
        header = header.child(Element::new("p").class("pf-bio").text(&profile.bio));
    }

    let main = Element::new("main")
        .class("pf-main pf-narrow")
        .children(visible_sections(document).map(|s| render_section(s, design)));

    root("pf-root pf-minimalist", design).child(header).child(main)
}

fn render_section(section: &Section, design: &DesignSettings) -> Node {
    let color = design.primary_color.as_str();

    let body: Element = match &section.content {
        SectionContent::Text(text) => Element::new("div").class("pf-centered").child(
            Element::new("p")
                .style("white-space", "pre-wrap")
                .text(text),
        ),

        SectionContent::List(items) => Element::new("ul")
            .class("pf-list pf-centered")
            .style("list-style", "none")
            .children(items.iter().map(|item| Element::new("li").text(item))),

        SectionContent::Skills(skills) => Element::new("div")
            .class("pf-tags pf-centered")
            .children(skills.iter().map(|skill| {
                Element::new("span")
                    .class("pf-tag")
                    .style("border-color", color)
                    .style("color", color)
                    .text(skill)
            })),

        SectionContent::Cards(cards) => {
            Element::new("div")
                .class("pf-stack")
                .children(cards.iter().map(|card| {
                    let mut el = Element::new("div")
                        .class("pf-entry pf-centered")
                        .child(Element::new("h3").text(&card.name))
                        .child(Element::new("p").text(&card.description));
                    if let Some(link) = external_link(&card.url, "View Project") {
                        el = el.child(link.class("pf-card-link").style("color", color));
                    }
                    el
                }))
        }

        SectionContent::Experience(items) => Element::new("div")
            .class("pf-stack")
            .children(experience_cards(items, "pf-entry pf-centered")),

        SectionContent::Education(items) => Element::new("div")
            .class("pf-stack")
            .children(education_cards(items, "pf-entry pf-centered")),
    };

    section_shell(section, "pf-section")
        .child(
            Element::new("h2")
                .class("pf-section-title pf-centered")
                .text(&section.title),
        )
        .child(body)
        .into()
}
