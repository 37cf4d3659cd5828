//! Starter sites shipped with the builder.

use crate::model::{ComponentNode, ComponentStyles, ComponentType, Document};
use crate::theme::Theme;
use serde_json::{json, Value};
use std::sync::Arc;

/// A ready-made document and theme
#[derive(Debug, Clone, PartialEq)]
pub struct SiteTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub components: Document,
    pub theme: Theme,
}

fn node(id: &str, kind: ComponentType, props: Value) -> ComponentNode {
    let mut node = ComponentNode::new(id, kind);
    if let Value::Object(map) = props {
        node.props = map;
    }
    node
}

fn business_modern() -> SiteTemplate {
    let mut grid = node(
        "grid-1",
        ComponentType::Grid,
        json!({ "columns": 2, "rows": 1, "gap": "4", "alignItems": "start", "justifyContent": "start" }),
    );
    grid.styles = Some(ComponentStyles {
        margin: Some("2rem 0".to_string()),
        padding: Some("2rem".to_string()),
        border_radius: Some("8px".to_string()),
        height: Some("200px".to_string()),
        ..ComponentStyles::default()
    });
    grid.children = Some(Vec::<Arc<ComponentNode>>::new());

    let components = Document::from_nodes(vec![
        node(
            "header-1",
            ComponentType::Header,
            json!({
                "title": "Votre Entreprise",
                "navigation": ["Accueil", "Services", "À propos", "Contact"],
                "showLogo": true
            }),
        ),
        node(
            "hero-1",
            ComponentType::Hero,
            json!({
                "title": "Développez votre activité avec nous",
                "subtitle": "Solutions professionnelles adaptées à vos besoins",
                "buttonText": "Découvrir nos services"
            }),
        ),
        node(
            "services-1",
            ComponentType::Services,
            json!({
                "title": "Nos Services",
                "services": [
                    { "title": "Conseil", "description": "Accompagnement stratégique", "icon": "Star" },
                    { "title": "Développement", "description": "Solutions sur mesure", "icon": "Code" },
                    { "title": "Support", "description": "Assistance continue", "icon": "Support" }
                ]
            }),
        ),
        grid,
        node(
            "contact-1",
            ComponentType::Contact,
            json!({
                "title": "Contactez-nous",
                "showForm": true,
                "address": "123 Avenue des Entreprises, Paris",
                "phone": "+33 1 23 45 67 89",
                "email": "contact@votre-entreprise.com"
            }),
        ),
        node(
            "footer-1",
            ComponentType::Footer,
            json!({ "copyright": "© 2024 Votre Entreprise. Tous droits réservés." }),
        ),
    ]);

    SiteTemplate {
        id: "business-modern",
        name: "Business Modern",
        description: "Professional site for a company",
        components,
        theme: Theme::business_blue(),
    }
}

fn portfolio_creative() -> SiteTemplate {
    let components = Document::from_nodes(vec![
        node(
            "header-2",
            ComponentType::Header,
            json!({ "title": "Votre Nom", "navigation": ["Portfolio", "À propos", "Contact"], "showLogo": false }),
        ),
        node(
            "hero-2",
            ComponentType::Hero,
            json!({
                "title": "Créateur Visuel",
                "subtitle": "Design • Art • Innovation",
                "buttonText": "Voir mes créations"
            }),
        ),
        node(
            "portfolio-1",
            ComponentType::Portfolio,
            json!({
                "title": "Mes Réalisations",
                "projects": [
                    { "title": "Projet Créatif 1", "description": "Design graphique", "image": "", "url": "#" },
                    { "title": "Projet Créatif 2", "description": "Illustration", "image": "", "url": "#" },
                    { "title": "Projet Créatif 3", "description": "Branding", "image": "", "url": "#" }
                ]
            }),
        ),
        node(
            "about-1",
            ComponentType::About,
            json!({
                "title": "À propos",
                "content": "Passionné par la création visuelle depuis plus de 10 ans...",
                "imagePosition": "left"
            }),
        ),
        node(
            "contact-2",
            ComponentType::Contact,
            json!({ "title": "Travaillons ensemble", "showForm": true, "email": "hello@votre-nom.com" }),
        ),
    ]);

    SiteTemplate {
        id: "portfolio-creative",
        name: "Creative Portfolio",
        description: "Showcase for artists and creatives",
        components,
        theme: Theme::creative_dark(),
    }
}

pub fn builtin_templates() -> Vec<SiteTemplate> {
    vec![business_modern(), portfolio_creative()]
}

pub fn find_template(id: &str) -> Option<SiteTemplate> {
    builtin_templates().into_iter().find(|template| template.id == id)
}
