//! # Component Library
//!
//! Catalogue of insertable component kinds with their starting props, plus
//! the placement rules drop targets consult. The mutation engine never
//! enforces these rules itself.

use crate::model::{ComponentType, NodeData, Props};
use serde_json::{json, Value};

/// One entry of the insertable-component palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    pub kind: ComponentType,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Whether the entry may be dropped into a grid
    pub can_be_in_grid: bool,
}

impl LibraryEntry {
    fn new(
        kind: ComponentType,
        name: &'static str,
        description: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            kind,
            name,
            description,
            icon,
            can_be_in_grid: false,
        }
    }

    fn in_grid(mut self) -> Self {
        self.can_be_in_grid = true;
        self
    }

    pub fn default_props(&self) -> Props {
        default_props(&self.kind)
    }

    pub fn node_data(&self) -> NodeData {
        NodeData::new(self.kind.clone()).with_props(self.default_props())
    }
}

/// The palette, in display order
pub fn component_library() -> Vec<LibraryEntry> {
    vec![
        LibraryEntry::new(ComponentType::Header, "Header", "Main site navigation", "Layout"),
        LibraryEntry::new(ComponentType::Hero, "Hero", "Headline section with a call to action", "Star"),
        LibraryEntry::new(ComponentType::About, "About", "Introduction section", "User"),
        LibraryEntry::new(ComponentType::Services, "Services", "List of services", "Grid3X3").in_grid(),
        LibraryEntry::new(ComponentType::Portfolio, "Portfolio", "Project gallery", "Image").in_grid(),
        LibraryEntry::new(ComponentType::Testimonials, "Testimonials", "Customer reviews", "MessageSquare")
            .in_grid(),
        LibraryEntry::new(ComponentType::Contact, "Contact", "Contact form and details", "Mail"),
        LibraryEntry::new(ComponentType::Footer, "Footer", "Closing links and copyright", "Layout"),
        LibraryEntry::new(ComponentType::Grid, "Grid", "Container with an adaptive grid", "Grid3X3"),
        LibraryEntry::new(
            ComponentType::ScrollableGrid,
            "Scrollable grid",
            "Grid with a capped height that scrolls",
            "Grid3X3",
        ),
        LibraryEntry::new(ComponentType::GridItem, "Grid item", "Cell placed inside a grid", "Square")
            .in_grid(),
        LibraryEntry::new(ComponentType::Container, "Container", "Plain wrapper for grouping", "Square"),
    ]
}

pub fn find_entry(kind: &ComponentType) -> Option<LibraryEntry> {
    component_library().into_iter().find(|entry| &entry.kind == kind)
}

/// Starting props for a freshly inserted component
pub fn default_props(kind: &ComponentType) -> Props {
    let value = match kind {
        ComponentType::Header => json!({
            "title": "Mon Site",
            "navigation": ["Accueil", "À propos", "Services", "Contact"],
            "showLogo": true
        }),
        ComponentType::Hero => json!({
            "title": "Bienvenue sur mon site",
            "subtitle": "Une description captivante de votre activité",
            "buttonText": "En savoir plus",
            "backgroundImage": "",
            "overlay": true
        }),
        ComponentType::About => json!({
            "title": "À propos de nous",
            "content": "Découvrez notre histoire et nos valeurs...",
            "image": "",
            "imagePosition": "right"
        }),
        ComponentType::Services => json!({
            "title": "Nos Services",
            "services": [
                { "title": "Service 1", "description": "Description du service", "icon": "Star" },
                { "title": "Service 2", "description": "Description du service", "icon": "Heart" },
                { "title": "Service 3", "description": "Description du service", "icon": "Zap" }
            ]
        }),
        ComponentType::Portfolio => json!({
            "title": "Notre Portfolio",
            "projects": [
                { "title": "Projet 1", "description": "Description", "image": "", "url": "#" },
                { "title": "Projet 2", "description": "Description", "image": "", "url": "#" },
                { "title": "Projet 3", "description": "Description", "image": "", "url": "#" }
            ]
        }),
        ComponentType::Testimonials => json!({
            "title": "Ce que disent nos clients",
            "testimonials": [
                { "name": "Client 1", "text": "Excellent service !", "rating": 5, "avatar": "" },
                { "name": "Client 2", "text": "Très professionnel", "rating": 5, "avatar": "" }
            ]
        }),
        ComponentType::Contact => json!({
            "title": "Contactez-nous",
            "showForm": true,
            "showMap": true,
            "address": "123 Rue Example, Ville",
            "phone": "+33 1 23 45 67 89",
            "email": "contact@example.com"
        }),
        ComponentType::Footer => json!({
            "copyright": "© 2024 Mon Site. Tous droits réservés.",
            "links": ["Mentions légales", "Politique de confidentialité"],
            "socialLinks": [
                { "platform": "facebook", "url": "#" },
                { "platform": "twitter", "url": "#" },
                { "platform": "linkedin", "url": "#" }
            ]
        }),
        ComponentType::Grid => json!({
            "columns": 2,
            "rows": 1,
            "gap": "4",
            "alignItems": "start",
            "justifyContent": "start"
        }),
        ComponentType::ScrollableGrid => json!({
            "columns": 3,
            "gap": "1rem",
            "maxHeight": "400px",
            "scrollable": true
        }),
        ComponentType::GridItem => json!({
            "minWidth": "200px",
            "minHeight": "150px",
            "content": "Élément de grille"
        }),
        ComponentType::Container => json!({
            "padding": "4",
            "margin": "2",
            "maxWidth": "full"
        }),
        _ => Value::Null,
    };

    match value {
        Value::Object(props) => props,
        _ => Props::new(),
    }
}

impl NodeData {
    /// Node data for a library kind, pre-filled with its default props
    pub fn from_library(kind: ComponentType) -> Self {
        let props = default_props(&kind);
        NodeData::new(kind).with_props(props)
    }
}

/// Kinds a grid accepts as children
pub fn accepts_as_child(parent: &ComponentType, child: &ComponentType) -> bool {
    if !parent.is_grid() {
        return false;
    }
    matches!(
        child,
        ComponentType::Services
            | ComponentType::Portfolio
            | ComponentType::Testimonials
            | ComponentType::GridItem
    )
}

/// Kinds the canvas and its insert zones accept at root level
pub fn accepts_at_root(kind: &ComponentType) -> bool {
    matches!(
        kind,
        ComponentType::Header
            | ComponentType::Hero
            | ComponentType::About
            | ComponentType::Services
            | ComponentType::Portfolio
            | ComponentType::Testimonials
            | ComponentType::Contact
            | ComponentType::Footer
            | ComponentType::Grid
            | ComponentType::ScrollableGrid
    )
}
