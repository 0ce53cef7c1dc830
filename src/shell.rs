//! Navigation Shell
//!
//! Theme flag, hash-based routes and in-page anchors.

use percent_encoding::percent_decode_str;

/// Light/dark flag, applied as `data-theme` on the document element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Library,
}

impl Route {
    pub fn href(&self) -> &'static str {
        match self {
            Route::Home => "#/",
            Route::Library => "#/biblioteca",
        }
    }
}

/// Where the hash points: a route, plus an optional section id on the landing page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub route: Route,
    pub anchor: Option<String>,
}

impl Location {
    /// `#/biblioteca` selects the library, `#/...` anything else the landing
    /// page; a plain `#section` is an anchor on the landing page.
    pub fn parse(hash: &str) -> Self {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        let decoded = percent_decode_str(fragment).decode_utf8_lossy();
        let decoded = decoded.trim();

        if let Some(path) = decoded.strip_prefix('/') {
            let route = match path.trim_end_matches('/') {
                "biblioteca" => Route::Library,
                _ => Route::Home,
            };
            return Self { route, anchor: None };
        }

        Self {
            route: Route::Home,
            anchor: (!decoded.is_empty()).then(|| decoded.to_string()),
        }
    }
}

/// Current `location.hash`, empty when unavailable
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|win| win.location().hash().ok())
        .unwrap_or_default()
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_round_trip() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(Location::parse(""), Location::default());
        assert_eq!(Location::parse("#/").route, Route::Home);
        assert_eq!(Location::parse("#/biblioteca").route, Route::Library);
        assert_eq!(Location::parse("#/biblioteca/").route, Route::Library);
        assert_eq!(Location::parse("#/desconhecida"), Location::default());
    }

    #[test]
    fn test_parse_anchor() {
        let loc = Location::parse("#descobrir");
        assert_eq!(loc.route, Route::Home);
        assert_eq!(loc.anchor.as_deref(), Some("descobrir"));

        let loc = Location::parse("#cole%C3%A7%C3%B5es");
        assert_eq!(loc.anchor.as_deref(), Some("coleções"));
    }

    #[test]
    fn test_route_href_parses_back() {
        for route in [Route::Home, Route::Library] {
            assert_eq!(Location::parse(route.href()).route, route);
        }
    }
}
