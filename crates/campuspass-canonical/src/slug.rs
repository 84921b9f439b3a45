use crate::identifiers::EventSlug;

/// Converts an event title into its upper snake-case code segment.
///
/// Runs of anything other than letters and digits collapse into one `_`;
/// leading and trailing separators are dropped. Returns `None` when nothing
/// printable remains.
///
/// ```rust
/// use campuspass_canonical::title_slug;
///
/// assert_eq!(title_slug("Science Fair").unwrap().as_str(), "SCIENCE_FAIR");
/// assert!(title_slug("  --  ").is_none());
/// ```
pub fn title_slug(title: &str) -> Option<EventSlug> {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.extend(ch.to_uppercase());
        } else {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        None
    } else {
        Some(EventSlug::new(slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_and_whitespace() {
        assert_eq!(
            title_slug("  Science & Tech: 2024 ").unwrap().as_str(),
            "SCIENCE_TECH_2024"
        );
        assert_eq!(title_slug("already_snake").unwrap().as_str(), "ALREADY_SNAKE");
    }

    #[test]
    fn slug_always_parses_as_event_slug() {
        for title in ["Science Fair", "a", "Intramurals  Opening__Day", "Café Night"] {
            let slug = title_slug(title).unwrap();
            assert!(EventSlug::parse(slug.as_str()).is_ok(), "{title}");
        }
    }
}
