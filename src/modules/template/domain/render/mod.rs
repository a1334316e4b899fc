// src/modules/template/domain/render/mod.rs

mod minimalist;
mod modern_clean;

use std::sync::LazyLock;

use regex::Regex;

use crate::modules::portfolio::domain::document::{DEFAULT_FONT_FAMILY, DEFAULT_PRIMARY_COLOR};
use crate::modules::portfolio::domain::{
    DesignSettings, Document, EducationItem, ExperienceItem, Section,
};

use super::node::{Element, Node};
use super::template_key::TemplateKey;

/// Projects a document onto the presentational tree of one theme.
/// Deterministic; hidden sections are skipped and order is preserved.
pub fn render(document: &Document, design: &DesignSettings, key: TemplateKey) -> Node {
    let design = safe_design(design);
    let root = match key {
        TemplateKey::ModernClean => modern_clean::render(document, &design),
        TemplateKey::Minimalist => minimalist::render(document, &design),
    };

    root.attr("data-template", key.as_str()).into()
}

/// Renders with the document's own design and template value.
pub fn render_document(document: &Document) -> Node {
    render(
        document,
        &document.design,
        TemplateKey::from_value(&document.template.value),
    )
}

//
// ──────────────────────────────────────────────────────────
// Untrusted values
// ──────────────────────────────────────────────────────────
//

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid color regex")
});

static FONT_FAMILY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 ,'-]{1,64}$").expect("valid font regex"));

const LINK_SCHEMES: [&str; 3] = ["http:", "https:", "mailto:"];

/// Design values end up in inline styles; anything outside a hex color or
/// a plain font list falls back to the default.
fn safe_design(design: &DesignSettings) -> DesignSettings {
    let font_family = design.font_family.trim();
    let primary_color = design.primary_color.trim();

    DesignSettings {
        font_family: if FONT_FAMILY_RE.is_match(font_family) {
            font_family.to_string()
        } else {
            DEFAULT_FONT_FAMILY.to_string()
        },
        primary_color: if HEX_COLOR_RE.is_match(primary_color) {
            primary_color.to_string()
        } else {
            DEFAULT_PRIMARY_COLOR.to_string()
        },
    }
}

/// `None` unless the URL is http(s) or mailto.
fn safe_href(url: &str) -> Option<&str> {
    let url = url.trim();
    let allowed = LINK_SCHEMES.iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });
    allowed.then_some(url)
}

//
// ──────────────────────────────────────────────────────────
// Shared pieces
// ──────────────────────────────────────────────────────────
//

fn root(class: &str, design: &DesignSettings) -> Element {
    Element::new("div")
        .class(class)
        .style("font-family", &design.font_family)
        .style("--primary-color", &design.primary_color)
}

fn visible_sections(document: &Document) -> impl Iterator<Item = &Section> {
    document.sections.iter().filter(|s| s.visible)
}

fn section_shell(section: &Section, class: &str) -> Element {
    Element::new("section")
        .class(class)
        .attr("data-section-id", &section.id.to_string())
        .attr("data-section-type", section.section_type().as_str())
}

fn display_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Dropped entirely when the URL has no safe scheme.
fn external_link(url: &str, label: &str) -> Option<Element> {
    let href = safe_href(url)?;
    Some(
        Element::new("a")
            .attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .text(label),
    )
}

/// Generic card used for experience and education entries.
fn fallback_card(class: &str, heading: &str, meta: &[&str], body: &str) -> Element {
    let meta_line = meta
        .iter()
        .filter(|m| !m.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" · ");

    let mut card = Element::new("div")
        .class(class)
        .child(Element::new("h3").text(heading));

    if !meta_line.is_empty() {
        card = card.child(Element::new("p").class("pf-meta").text(&meta_line));
    }

    if !body.trim().is_empty() {
        card = card.child(Element::new("p").text(body));
    }

    card
}

fn experience_cards(items: &[ExperienceItem], class: &str) -> Vec<Element> {
    items
        .iter()
        .map(|item| {
            fallback_card(
                class,
                &item.position,
                &[&item.company, &item.duration],
                &item.description,
            )
        })
        .collect()
}

fn education_cards(items: &[EducationItem], class: &str) -> Vec<Element> {
    items
        .iter()
        .map(|item| {
            let gpa = if item.gpa.trim().is_empty() {
                String::new()
            } else {
                format!("GPA: {}", item.gpa)
            };
            fallback_card(
                class,
                &item.degree,
                &[&item.institution, &item.duration],
                &gpa,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::domain::section_store::{create_section, toggle_visibility};
    use crate::modules::portfolio::domain::{Profile, SectionContent, SectionType};

    fn document() -> Document {
        let mut doc = Document {
            profile: Profile {
                name: "Ada Lovelace".to_string(),
                title: "Analyst".to_string(),
                bio: "First programmer.".to_string(),
                email: "ada@example.com".to_string(),
                github: "https://github.com/ada".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        doc.sections = SectionType::ALL.into_iter().map(create_section).collect();
        doc
    }

    fn rendered_section_ids(node: &Node) -> Vec<String> {
        node.find_by_tag("section")
            .into_iter()
            .filter_map(|e| e.attrs.get("data-section-id").cloned())
            .collect()
    }

    #[test]
    fn test_hidden_sections_are_not_rendered_in_any_template() {
        let mut doc = document();
        let hidden = doc.sections[1].id;
        let also_hidden = doc.sections[4].id;
        doc.sections = toggle_visibility(&doc.sections, hidden);
        doc.sections = toggle_visibility(&doc.sections, also_hidden);

        for key in TemplateKey::ALL {
            let tree = render(&doc, &doc.design, key);
            let ids = rendered_section_ids(&tree);

            assert_eq!(ids.len(), doc.sections.len() - 2, "template {}", key);
            assert!(!ids.contains(&hidden.to_string()));
            assert!(!ids.contains(&also_hidden.to_string()));
        }
    }

    #[test]
    fn test_sections_render_in_document_order() {
        let doc = document();
        let expected: Vec<String> = doc.sections.iter().map(|s| s.id.to_string()).collect();

        for key in TemplateKey::ALL {
            assert_eq!(rendered_section_ids(&render(&doc, &doc.design, key)), expected);
        }
    }

    #[test]
    fn test_design_applied_at_root() {
        let mut doc = document();
        doc.design = DesignSettings {
            font_family: "Poppins".to_string(),
            primary_color: "#ef4444".to_string(),
        };

        for key in TemplateKey::ALL {
            let tree = render(&doc, &doc.design, key);
            let root = tree.as_element().unwrap();

            assert_eq!(root.style.get("font-family").unwrap(), "Poppins");
            assert_eq!(root.style.get("--primary-color").unwrap(), "#ef4444");
            assert_eq!(root.attrs.get("data-template").unwrap(), key.as_str());
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = document();
        for key in TemplateKey::ALL {
            assert_eq!(
                render(&doc, &doc.design, key),
                render(&doc, &doc.design, key)
            );
        }
    }

    #[test]
    fn test_render_document_falls_back_for_unknown_template() {
        let mut doc = document();
        doc.template.value = "does-not-exist".to_string();

        let tree = render_document(&doc);
        let root = tree.as_element().unwrap();
        assert_eq!(root.attrs.get("data-template").unwrap(), "modern-clean");
    }

    #[test]
    fn test_experience_and_education_use_card_fallback() {
        let doc = document();
        let text = render(&doc, &doc.design, TemplateKey::ModernClean).text_content();

        assert!(text.contains("Job Title"));
        assert!(text.contains("Company Name · Jan 2023 - Present"));
        assert!(text.contains("Bachelor of Science in Computer Science"));
        assert!(text.contains("GPA: 3.8/4.0"));
    }

    #[test]
    fn test_card_link_omitted_when_url_empty() {
        let mut doc = document();
        doc.sections = vec![Section {
            content: SectionContent::Cards(vec![
                crate::modules::portfolio::domain::CardItem {
                    id: "1".to_string(),
                    name: "No link".to_string(),
                    description: "Offline project".to_string(),
                    url: String::new(),
                },
            ]),
            ..create_section(SectionType::Cards)
        }];

        for key in TemplateKey::ALL {
            let tree = render(&doc, &doc.design, key);
            let links = tree
                .find_by_tag("a")
                .into_iter()
                .filter(|a| a.children.iter().any(|c| c.text_content() == "View Project"))
                .count();
            assert_eq!(links, 0, "template {}", key);
        }
    }

    #[test]
    fn test_unsafe_link_schemes_are_dropped() {
        let mut doc = document();
        doc.profile.website = "javascript:alert(document.cookie)".to_string();
        doc.profile.linkedin = " JavaScript:alert(1)".to_string();
        doc.profile.github = "mailto:ada@example.com".to_string();
        doc.sections = vec![Section {
            content: SectionContent::Cards(vec![
                crate::modules::portfolio::domain::CardItem {
                    id: "1".to_string(),
                    name: "Sneaky".to_string(),
                    description: String::new(),
                    url: "data:text/html,<script>alert(1)</script>".to_string(),
                },
            ]),
            ..create_section(SectionType::Cards)
        }];

        for key in TemplateKey::ALL {
            let tree = render(&doc, &doc.design, key);
            let hrefs: Vec<String> = tree
                .find_by_tag("a")
                .into_iter()
                .filter_map(|a| a.attrs.get("href").cloned())
                .collect();

            assert!(hrefs.iter().all(|h| h == "mailto:ada@example.com"), "template {}: {:?}", key, hrefs);
            assert!(!tree.to_html().to_lowercase().contains("javascript:"));
        }
    }

    #[test]
    fn test_safe_href_schemes() {
        assert_eq!(safe_href("https://ada.dev"), Some("https://ada.dev"));
        assert_eq!(safe_href(" HTTP://ada.dev "), Some("HTTP://ada.dev"));
        assert_eq!(safe_href("mailto:ada@example.com"), Some("mailto:ada@example.com"));
        assert_eq!(safe_href("javascript:alert(1)"), None);
        assert_eq!(safe_href("//evil.example"), None);
        assert_eq!(safe_href("ada.dev"), None);
    }

    #[test]
    fn test_unsafe_design_values_fall_back_to_defaults() {
        let mut doc = document();
        doc.sections = vec![create_section(SectionType::Skills)];
        doc.design = DesignSettings {
            font_family: "x;}</style><script>alert(1)</script>".to_string(),
            primary_color: "red; background:url(javascript:alert(1))".to_string(),
        };

        for key in TemplateKey::ALL {
            let tree = render(&doc, &doc.design, key);
            let root = tree.as_element().unwrap();

            assert_eq!(root.style.get("font-family").unwrap(), DEFAULT_FONT_FAMILY);
            assert_eq!(root.style.get("--primary-color").unwrap(), DEFAULT_PRIMARY_COLOR);
            assert!(!tree.to_html().contains("javascript:"), "template {}", key);
        }
    }

    #[test]
    fn test_font_list_with_quotes_is_kept() {
        let design = DesignSettings {
            font_family: "'Open Sans', sans-serif".to_string(),
            primary_color: "#FFF".to_string(),
        };

        assert_eq!(safe_design(&design), design);
    }
}
