//! Click dispatch tables
//!
//! Maps the element a user clicked to the command it stands for, instead of
//! each handler walking the DOM on its own.

use web_sys::Element;

use crate::config::MapConfig;
use crate::zoom::MapCommand;

/// Attribute carrying the fragment URL on sidebar links
pub const PAGE_ATTR: &str = "data-page";

/// What a click inside the sidebar asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Load this fragment into the content area
    Load(String),
    /// Not a navigation link; let the browser handle it
    Ignore,
}

impl NavAction {
    /// Action for a link with the given `data-page` value
    pub fn from_page_attr(page: Option<&str>) -> Self {
        match page.map(str::trim) {
            Some(page) if !page.is_empty() => NavAction::Load(page.to_string()),
            _ => NavAction::Ignore,
        }
    }
}

/// Resolve a click target inside the sidebar; the nearest enclosing link
/// decides
pub fn resolve_nav_click(target: &Element) -> NavAction {
    match target.closest("a") {
        Ok(Some(link)) => NavAction::from_page_attr(link.get_attribute(PAGE_ATTR).as_deref()),
        _ => NavAction::Ignore,
    }
}

impl MapCommand {
    /// Id of the button issuing this command
    pub fn element_id(self, config: &MapConfig) -> &str {
        match self {
            MapCommand::ZoomIn => &config.zoom_in_id,
            MapCommand::ZoomOut => &config.zoom_out_id,
            MapCommand::Reset => &config.reset_id,
            MapCommand::Locate => &config.locate_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_action_from_attr() {
        assert_eq!(
            NavAction::from_page_attr(Some("settings.html")),
            NavAction::Load("settings.html".to_string())
        );
        assert_eq!(
            NavAction::from_page_attr(Some("  map.html ")),
            NavAction::Load("map.html".to_string())
        );
        assert_eq!(NavAction::from_page_attr(Some("")), NavAction::Ignore);
        assert_eq!(NavAction::from_page_attr(None), NavAction::Ignore);
    }

    #[test]
    fn test_map_command_table() {
        let config = MapConfig::default();
        assert_eq!(MapCommand::ZoomIn.element_id(&config), "zoomIn");
        assert_eq!(MapCommand::ZoomOut.element_id(&config), "zoomOut");
        assert_eq!(MapCommand::Reset.element_id(&config), "resetView");
        assert_eq!(MapCommand::Locate.element_id(&config), "myLocation");
    }
}
