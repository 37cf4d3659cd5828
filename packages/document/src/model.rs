//! # Component Tree
//!
//! Data definitions for a site under construction.
//!
//! A [`Document`] is an ordered forest of [`ComponentNode`]s. Every node owns
//! its children exclusively; nodes are held behind `Arc` so that edited
//! documents can share untouched subtrees with the snapshots kept in history.
//!
//! ```text
//! Document
//!  ├─ header            (root, order is user-visible)
//!  ├─ grid
//!  │   ├─ grid-item
//!  │   └─ services
//!  └─ footer
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Free-form component properties. Only presentation code interprets them.
pub type Props = Map<String, Value>;

/// Closed set of component kinds understood by the builder
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentType {
    Header,
    Hero,
    About,
    Services,
    Portfolio,
    Testimonials,
    Contact,
    Footer,
    Text,
    Image,
    Button,
    Container,
    Grid,
    GridItem,
    ScrollableGrid,
    Spacer,
    /// Tag written by a newer or foreign editor, kept verbatim
    Other(String),
}

impl ComponentType {
    pub const KNOWN: [ComponentType; 16] = [
        ComponentType::Header,
        ComponentType::Hero,
        ComponentType::About,
        ComponentType::Services,
        ComponentType::Portfolio,
        ComponentType::Testimonials,
        ComponentType::Contact,
        ComponentType::Footer,
        ComponentType::Text,
        ComponentType::Image,
        ComponentType::Button,
        ComponentType::Container,
        ComponentType::Grid,
        ComponentType::GridItem,
        ComponentType::ScrollableGrid,
        ComponentType::Spacer,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ComponentType::Header => "header",
            ComponentType::Hero => "hero",
            ComponentType::About => "about",
            ComponentType::Services => "services",
            ComponentType::Portfolio => "portfolio",
            ComponentType::Testimonials => "testimonials",
            ComponentType::Contact => "contact",
            ComponentType::Footer => "footer",
            ComponentType::Text => "text",
            ComponentType::Image => "image",
            ComponentType::Button => "button",
            ComponentType::Container => "container",
            ComponentType::Grid => "grid",
            ComponentType::GridItem => "grid-item",
            ComponentType::ScrollableGrid => "scrollable-grid",
            ComponentType::Spacer => "spacer",
            ComponentType::Other(tag) => tag,
        }
    }

    /// Parse a type tag. Unknown tags map to [`ComponentType::Other`].
    pub fn parse(tag: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|kind| kind.as_str() == tag)
            .cloned()
            .unwrap_or_else(|| ComponentType::Other(tag.to_string()))
    }

    /// Grids arrange their children as a collection
    pub fn is_grid(&self) -> bool {
        matches!(self, ComponentType::Grid | ComponentType::ScrollableGrid)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ComponentType::Other(_))
    }

    /// Stand-in for a node that carries no type tag
    pub fn untyped() -> Self {
        ComponentType::Other(String::new())
    }
}

impl From<String> for ComponentType {
    fn from(tag: String) -> Self {
        ComponentType::parse(&tag)
    }
}

impl From<ComponentType> for String {
    fn from(kind: ComponentType) -> Self {
        match kind {
            ComponentType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Visible,
    Hidden,
    Scroll,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    Flex,
    Grid,
    Block,
    InlineBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

/// One animation phase (entrance or exit).
///
/// Timing fields left out of a file stay out when it is written back;
/// the accessors fill in the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSpec {
    #[serde(rename = "type", default = "no_animation")]
    pub kind: String,
    #[serde(rename = "duration", default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
    #[serde(rename = "delay", default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

pub const DEFAULT_DURATION_MS: u32 = 300;
pub const DEFAULT_EASING: &str = "ease-out";

fn no_animation() -> String {
    "none".to_string()
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::new(no_animation())
    }
}

impl AnimationSpec {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            duration_ms: None,
            delay_ms: None,
            easing: None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.kind == "none"
    }

    pub fn duration(&self) -> u32 {
        self.duration_ms.unwrap_or(DEFAULT_DURATION_MS)
    }

    pub fn delay(&self) -> u32 {
        self.delay_ms.unwrap_or(0)
    }

    pub fn easing(&self) -> &str {
        self.easing.as_deref().unwrap_or(DEFAULT_EASING)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance: Option<AnimationSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<AnimationSpec>,
}

/// Recognised visual keys. Anything else lands in `extra` and is written back as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ComponentStyles {
    pub fn is_empty(&self) -> bool {
        self == &ComponentStyles::default()
    }

    /// Read a raw style map. Keys whose values do not fit their typed slot
    /// (e.g. `"columns": "three"`) are kept verbatim in `extra`.
    pub fn from_map(map: Map<String, Value>) -> Self {
        if let Ok(styles) = serde_json::from_value::<ComponentStyles>(Value::Object(map.clone())) {
            return styles;
        }

        let mut typed = Map::new();
        let mut raw = Map::new();
        for (key, value) in map {
            let mut trial = typed.clone();
            trial.insert(key.clone(), value.clone());
            if serde_json::from_value::<ComponentStyles>(Value::Object(trial)).is_ok() {
                typed.insert(key, value);
            } else {
                tracing::warn!("Keeping style {} as a raw value: {}", key, value);
                raw.insert(key, value);
            }
        }

        let mut styles: ComponentStyles =
            serde_json::from_value(Value::Object(typed)).unwrap_or_default();
        styles.extra.extend(raw);
        styles
    }
}

/// A single element of the component tree.
///
/// Reading is lenient: a missing or non-string `type` becomes an empty
/// [`ComponentType::Other`], and bad `props`/`styles`/`children` values fall
/// back to their empty forms with a warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,

    #[serde(
        rename = "type",
        default = "ComponentType::untyped",
        deserialize_with = "lenient_kind"
    )]
    pub kind: ComponentType,

    #[serde(default, deserialize_with = "lenient_props")]
    pub props: Props,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_styles"
    )]
    pub styles: Option<ComponentStyles>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_children"
    )]
    pub children: Option<Vec<Arc<ComponentNode>>>,
}

impl ComponentNode {
    pub fn new(id: impl Into<String>, kind: ComponentType) -> Self {
        Self {
            id: id.into(),
            kind,
            props: Props::new(),
            styles: None,
            children: None,
        }
    }

    /// Children in order (empty when the node has none)
    pub fn children(&self) -> &[Arc<ComponentNode>] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }
}

fn lenient_props<'de, D>(deserializer: D) -> Result<Props, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Props::new()),
        other => {
            tracing::warn!("Ignoring non-object props: {}", other);
            Ok(Props::new())
        }
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => {
            tracing::warn!("Ignoring non-string id: {}", other);
            Ok(String::new())
        }
    }
}

fn lenient_kind<'de, D>(deserializer: D) -> Result<ComponentType, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(tag) => Ok(ComponentType::from(tag)),
        other => {
            tracing::warn!("Ignoring non-string type: {}", other);
            Ok(ComponentType::untyped())
        }
    }
}

fn lenient_styles<'de, D>(deserializer: D) -> Result<Option<ComponentStyles>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(ComponentStyles::from_map(map))),
        other => {
            tracing::warn!("Ignoring non-object styles: {}", other);
            Ok(None)
        }
    }
}

fn lenient_children<'de, D>(deserializer: D) -> Result<Option<Vec<Arc<ComponentNode>>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(items) => Ok(Some(read_nodes(items))),
        other => {
            tracing::warn!("Ignoring non-array children: {}", other);
            Ok(None)
        }
    }
}

/// Read each entry as a node, dropping the ones that are not objects
fn read_nodes(items: Vec<Value>) -> Vec<Arc<ComponentNode>> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<ComponentNode>(item) {
            Ok(node) => Some(Arc::new(node)),
            Err(err) => {
                tracing::warn!("Dropping unreadable node: {}", err);
                None
            }
        })
        .collect()
}

/// Everything a caller supplies to create a node; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(rename = "type")]
    pub kind: ComponentType,

    #[serde(default)]
    pub props: Props,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<ComponentStyles>,
}

impl NodeData {
    pub fn new(kind: ComponentType) -> Self {
        Self {
            kind,
            props: Props::new(),
            styles: None,
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_styles(mut self, styles: ComponentStyles) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Materialise a node with the given id and no children yet
    pub fn into_node(self, id: String) -> ComponentNode {
        ComponentNode {
            id,
            kind: self.kind,
            props: self.props,
            styles: self.styles,
            children: Some(Vec::new()),
        }
    }
}

/// Ordered forest of root-level nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    roots: Vec<Arc<ComponentNode>>,
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(Self::from_roots(read_nodes(items))),
            other => {
                tracing::warn!("Components are not a list, reading as empty: {}", other);
                Ok(Self::new())
            }
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_roots(roots: Vec<Arc<ComponentNode>>) -> Self {
        Self { roots }
    }

    pub fn from_nodes(nodes: impl IntoIterator<Item = ComponentNode>) -> Self {
        Self {
            roots: nodes.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn roots(&self) -> &[Arc<ComponentNode>] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<Arc<ComponentNode>> {
        self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Position of a root node by id
    pub fn root_index(&self, id: &str) -> Option<usize> {
        self.roots.iter().position(|node| node.id == id)
    }

    pub fn root_ids(&self) -> Vec<&str> {
        self.roots.iter().map(|node| node.id.as_str()).collect()
    }
}
