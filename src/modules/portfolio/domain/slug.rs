use uuid::Uuid;

const MAX_TITLE_SLUG_LEN: usize = 160;
const FALLBACK_SLUG: &str = "portfolio";

/// Lowercase ASCII words joined by single hyphens. Blank input yields "portfolio".
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }

        if slug.len() >= MAX_TITLE_SLUG_LEN {
            break;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// `<slugified title>-<first 8 hex chars of the owner id>`.
pub fn base_slug(title: &str, owner: Uuid) -> String {
    let owner_hex = owner.simple().to_string();
    format!("{}-{}", slugify(title), &owner_hex[..8])
}

/// Attempt 1 is the base itself; later attempts append `-2`, `-3`, ...
pub fn slug_candidate(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}
