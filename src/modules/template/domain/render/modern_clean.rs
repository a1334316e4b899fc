use crate::modules::portfolio::domain::{DesignSettings, Document, Profile, Section, SectionContent};

use super::super::node::{Element, Node};
use super::{
    display_or, education_cards, experience_cards, external_link, root, section_shell,
    visible_sections,
};

pub(super) fn render(document: &Document, design: &DesignSettings) -> Element {
    let main = Element::new("main")
        .class("pf-main")
        .children(visible_sections(document).map(|s| render_section(s, design)));

    root("pf-root pf-modern-clean", design)
        .child(header(&document.profile))
        .child(main)
}

fn header(profile: &Profile) -> Element {
    let mut header = Element::new("header")
        .class("pf-header")
        .child(Element::new("h1").text(display_or(&profile.name, "Your Name")))
        .child(
            Element::new("p")
                .class("pf-title")
                .text(display_or(&profile.title, "Your Professional Title")),
        );

    if !profile.bio.is_empty() {
        header = header.child(Element::new("p").class("pf-bio").text(&profile.bio));
    }

    let contacts: Vec<Element> = [
        ("email", &profile.email),
        ("phone", &profile.phone),
        ("location", &profile.location),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(kind, value)| {
        Element::new("span")
            .class("pf-contact-item")
            .attr("data-contact", kind)
            .text(value)
    })
    .collect();

    if !contacts.is_empty() {
        header = header.child(Element::new("div").class("pf-contact").children(contacts));
    }

    let links: Vec<Element> = [
        (&profile.website, "Website"),
        (&profile.linkedin, "LinkedIn"),
        (&profile.github, "GitHub"),
    ]
    .into_iter()
    .filter_map(|(href, label)| external_link(href, label))
    .map(|link| link.class("pf-social-link"))
    .collect();

    if !links.is_empty() {
        header = header.child(Element::new("div").class("pf-links").children(links));
    }

    header
}

fn render_section(section: &Section, design: &DesignSettings) -> Node {
    let color = design.primary_color.as_str();

    let body: Element = match &section.content {
        SectionContent::Text(text) => Element::new("div")
            .class("pf-prose")
            .child(Element::new("p").style("white-space", "pre-wrap").text(text)),

        SectionContent::List(items) => Element::new("ul").class("pf-list").children(
            items.iter().map(|item| {
                Element::new("li")
                    .child(
                        Element::new("span")
                            .class("pf-bullet")
                            .style("color", color)
                            .text("✓"),
                    )
                    .child(Element::new("span").text(item))
            }),
        ),

        SectionContent::Skills(skills) => {
            let tint = format!("{}20", color);
            Element::new("div").class("pf-tags").children(skills.iter().map(|skill| {
                Element::new("span")
                    .class("pf-tag")
                    .style("background-color", &tint)
                    .style("border-color", color)
                    .style("color", color)
                    .text(skill)
            }))
        }

        SectionContent::Cards(cards) => {
            Element::new("div")
                .class("pf-card-grid")
                .children(cards.iter().map(|card| {
                    let mut el = Element::new("div")
                        .class("pf-card")
                        .child(Element::new("h3").text(&card.name))
                        .child(Element::new("p").text(&card.description));
                    if let Some(link) = external_link(&card.url, "View Project") {
                        el = el.child(link.class("pf-card-link").style("color", color));
                    }
                    el
                }))
        }

        SectionContent::Experience(items) => Element::new("div")
            .class("pf-card-list")
            .children(experience_cards(items, "pf-card")),

        SectionContent::Education(items) => Element::new("div")
            .class("pf-card-list")
            .children(education_cards(items, "pf-card")),
    };

    section_shell(section, "pf-section")
        .child(Element::new("h2").class("pf-section-title").text(&section.title))
        .child(body)
        .into()
}
