use crossterm::style::Stylize;

use assetree::domain::entities::NodeKind;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Error,
    Warning,
    Pointer,
    Location,
    Asset,
    Component,
    Energy,
    Alert,
    Operating,
    Company,
    Search,
}

impl Icon {
    /// Icon drawn in front of a node of this kind
    pub fn for_kind(kind: &NodeKind) -> Self {
        match kind {
            NodeKind::Location => Icon::Location,
            NodeKind::Asset => Icon::Asset,
            NodeKind::Component(_) => Icon::Component,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons as u, icons_ascii as a};
        let (unicode, ascii) = match self {
            Icon::Error => (u::ERROR, a::ERROR),
            Icon::Warning => (u::WARNING, a::WARNING),
            Icon::Pointer => (u::POINTER, a::POINTER),
            Icon::Location => (u::LOCATION, a::LOCATION),
            Icon::Asset => (u::ASSET, a::ASSET),
            Icon::Component => (u::COMPONENT, a::COMPONENT),
            Icon::Energy => (u::ENERGY, a::ENERGY),
            Icon::Alert => (u::ALERT, a::ALERT),
            Icon::Operating => (u::OPERATING, a::OPERATING),
            Icon::Company => (u::COMPANY, a::COMPANY),
            Icon::Search => (u::SEARCH, a::SEARCH),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Operating => theme::colors::SUCCESS,
            Icon::Error | Icon::Alert => theme::colors::ERROR,
            Icon::Warning | Icon::Energy => theme::colors::WARNING,
            Icon::Pointer | Icon::Company | Icon::Search => theme::colors::INFO,
            Icon::Location | Icon::Asset | Icon::Component => theme::colors::DIM,
        };
        format!("{}", s.with(color))
    }
}
