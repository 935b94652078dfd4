//! Query-string boot links shared by the site entrypoint and the runtime.
//!
//! `?screen=desktop` skips the hero screen; `?open=<folder-id>` opens that
//! folder on entry. Unknown keys and values are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Screen override requested by a boot link.
pub enum BootScreen {
    /// Land directly on the desktop.
    Desktop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Parsed boot-link payload, applied once at provider mount.
pub struct BootLink {
    /// Optional screen override.
    pub screen: Option<BootScreen>,
    /// Raw folder slug to open; resolved against the catalog by the reducer.
    pub open: Option<String>,
}

impl BootLink {
    /// Whether the link asks to skip the hero screen.
    pub fn wants_desktop(&self) -> bool {
        matches!(self.screen, Some(BootScreen::Desktop))
    }
}

/// Parses a boot link from a query string. Returns `None` when nothing in
/// the query is recognized.
pub fn parse_boot_from_query(query: &str) -> Option<BootLink> {
    let mut link = BootLink::default();

    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "screen" => {
                if value.trim() == "desktop" {
                    link.screen = Some(BootScreen::Desktop);
                }
            }
            "open" => {
                let slug = value.trim();
                if !slug.is_empty() {
                    link.open = Some(slug.to_string());
                }
            }
            _ => {}
        }
    }

    if link == BootLink::default() {
        None
    } else {
        Some(link)
    }
}

/// Returns the boot link requested by the current URL, if any.
pub fn current_boot_link() -> Option<BootLink> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let search = window.location().search().ok()?;
        parse_boot_from_query(&search)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_screen_and_open_together() {
        let link = parse_boot_from_query("?screen=desktop&open=about-me").expect("link");
        assert!(link.wants_desktop());
        assert_eq!(link.open.as_deref(), Some("about-me"));
    }

    #[test]
    fn open_alone_is_enough() {
        let link = parse_boot_from_query("open=showreel").expect("link");
        assert_eq!(link.screen, None);
        assert_eq!(link.open.as_deref(), Some("showreel"));
    }

    #[test]
    fn unknown_keys_and_values_are_ignored() {
        assert_eq!(parse_boot_from_query("?screen=hero&utm_source=x"), None);
        let link = parse_boot_from_query("?screen=hero&open=about-me").expect("link");
        assert_eq!(link.screen, None);
    }

    #[test]
    fn empty_query_parses_to_nothing() {
        assert_eq!(parse_boot_from_query(""), None);
        assert_eq!(parse_boot_from_query("?"), None);
        assert_eq!(parse_boot_from_query("?open="), None);
    }
}
