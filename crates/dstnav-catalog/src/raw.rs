//! Raw sidebar definitions.
//!
//! Mirrors the sidebar vocabulary of the site generator so definition files
//! can be deserialized directly:
//!
//! ```yaml
//! docs:
//!   - type: category
//!     label: Getting Started
//!     link: { type: doc, id: getting-started }
//!     items:
//!       - getting-started/introduction
//!       - type: html
//!         value: "<hr/>"
//!       - Tutorials: [tutorials/first-mod]
//! ```
//!
//! A bare string is a document shorthand and a mapping whose first key is
//! not a node field is a category shorthand. Everything else must carry a
//! `type` discriminator.
//!
//! Nodes marked `draft: true` are staged content: they are parsed but dropped,
//! together with their subtree, before validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::value::{MapAccessDeserializer, StringDeserializer};
use serde::de::{self, DeserializeSeed, IntoDeserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{BuildError, NodePath, PathSegment};
use crate::model::{Category, DocRef, GeneratedIndex, LandingPage, NavNode, Separator};

/// Raw sidebar definitions keyed by sidebar name.
pub type RawSidebars = BTreeMap<String, Vec<RawItem>>;

const TYPE_DOC: &str = "doc";
const TYPE_CATEGORY: &str = "category";
const TYPE_HTML: &str = "html";
const LINK_DOC: &str = "doc";
const LINK_GENERATED_INDEX: &str = "generated-index";

/// Keys of a [`RawNode`] object as they appear in definition files.
const NODE_FIELDS: &[&str] = &[
    "type",
    "id",
    "label",
    "value",
    "className",
    "collapsed",
    "collapsible",
    "link",
    "items",
    "draft",
    "customProps",
];

/// One entry of a raw item list.
///
/// Deserialized by hand so that errors inside a node (unknown or mistyped
/// fields) surface with the field name instead of a generic variant mismatch.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawItem {
    /// `"some/doc-id"`
    DocId(String),
    /// Object with an explicit `type`.
    Node(RawNode),
    /// `{ "Label": [items] }`
    Shorthand(BTreeMap<String, Vec<RawItem>>),
}

impl RawItem {
    /// Document shorthand.
    #[must_use]
    pub fn doc(id: &str) -> Self {
        Self::DocId(id.to_owned())
    }
}

impl From<RawNode> for RawItem {
    fn from(node: RawNode) -> Self {
        Self::Node(node)
    }
}

impl<'de> Deserialize<'de> for RawItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawItemVisitor)
    }
}

struct RawItemVisitor;

impl<'de> Visitor<'de> for RawItemVisitor {
    type Value = RawItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a document id, a `{label: [items]}` category or a node object")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawItem, E> {
        Ok(RawItem::DocId(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RawItem, E> {
        Ok(RawItem::DocId(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawItem, A::Error> {
        let Some(first) = map.next_key::<String>()? else {
            // Reported as a missing `type` during conversion
            return Ok(RawItem::Node(RawNode::default()));
        };

        if NODE_FIELDS.contains(&first.as_str()) {
            let rest = WithFirstKey {
                first: Some(first),
                map,
            };
            return RawNode::deserialize(MapAccessDeserializer::new(rest)).map(RawItem::Node);
        }

        let mut shorthand = BTreeMap::new();
        let items = map.next_value_seed(ShorthandItems(&first))?;
        shorthand.insert(first, items);
        while let Some(label) = map.next_key::<String>()? {
            let items = map.next_value_seed(ShorthandItems(&label))?;
            shorthand.insert(label, items);
        }
        Ok(RawItem::Shorthand(shorthand))
    }
}

/// Map access that yields an already consumed key before the remaining entries.
struct WithFirstKey<A> {
    first: Option<String>,
    map: A,
}

impl<'de, A: MapAccess<'de>> MapAccess<'de> for WithFirstKey<A> {
    type Error = A::Error;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, Self::Error> {
        match self.first.take() {
            Some(key) => {
                let key: StringDeserializer<A::Error> = key.into_deserializer();
                seed.deserialize(key).map(Some)
            }
            None => self.map.next_key_seed(seed),
        }
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Self::Error> {
        self.map.next_value_seed(seed)
    }

    fn size_hint(&self) -> Option<usize> {
        self.map
            .size_hint()
            .map(|n| n + usize::from(self.first.is_some()))
    }
}

/// Item list of a shorthand category, labeled for error messages.
struct ShorthandItems<'a>(&'a str);

impl<'de> DeserializeSeed<'de> for ShorthandItems<'_> {
    type Value = Vec<RawItem>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for ShorthandItems<'_> {
    type Value = Vec<RawItem>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a list of items for shorthand category `{}` (or one of the node fields {})",
            self.0,
            NODE_FIELDS.join(", ")
        )
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(items)
    }
}

/// Raw item object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RawNode {
    /// Discriminator: `doc`, `category` or `html`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Markup of an `html` item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    /// Category landing page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<RawLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RawItem>>,
    /// Staged content excluded from the catalog.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_props: Option<Value>,
}

impl RawNode {
    /// `type: doc` node.
    #[must_use]
    pub fn doc(id: &str) -> Self {
        Self {
            kind: Some(TYPE_DOC.to_owned()),
            id: Some(id.to_owned()),
            ..Self::default()
        }
    }

    /// `type: category` node.
    #[must_use]
    pub fn category(label: &str, items: Vec<RawItem>) -> Self {
        Self {
            kind: Some(TYPE_CATEGORY.to_owned()),
            label: Some(label.to_owned()),
            items: Some(items),
            ..Self::default()
        }
    }

    /// `type: html` node.
    #[must_use]
    pub fn html(value: &str) -> Self {
        Self {
            kind: Some(TYPE_HTML.to_owned()),
            value: Some(value.to_owned()),
            ..Self::default()
        }
    }

    /// Set `link`.
    #[must_use]
    pub fn with_link(mut self, link: RawLink) -> Self {
        self.link = Some(link);
        self
    }

    /// Set `collapsible` and `collapsed`.
    #[must_use]
    pub fn with_collapse(mut self, collapsible: bool, collapsed: bool) -> Self {
        self.collapsible = Some(collapsible);
        self.collapsed = Some(collapsed);
        self
    }

    /// Mark as draft.
    #[must_use]
    pub fn draft(mut self) -> Self {
        self.draft = true;
        self
    }

    fn to_nav_node(&self, item_path: &NodePath, parent: &NodePath) -> Result<NavNode, BuildError> {
        match self.kind.as_deref() {
            None => Err(malformed(item_path, "missing `type` discriminator")),
            Some(TYPE_DOC) => {
                self.reject_fields(item_path, TYPE_DOC, &["items", "link", "value"])?;
                let id = required(self.id.as_deref(), item_path, TYPE_DOC, "id")?;
                Ok(NavNode::Doc(DocRef {
                    id: id.to_owned(),
                    label: self.label.clone(),
                    class_name: self.class_name.clone(),
                    custom_props: self.custom_props.clone(),
                }))
            }
            Some(TYPE_HTML) => {
                self.reject_fields(item_path, TYPE_HTML, &["id", "items", "link"])?;
                let value = required(self.value.as_deref(), item_path, TYPE_HTML, "value")?;
                Ok(NavNode::Separator(Separator {
                    value: value.to_owned(),
                    class_name: self.class_name.clone(),
                }))
            }
            Some(TYPE_CATEGORY) => {
                self.reject_fields(item_path, TYPE_CATEGORY, &["id", "value"])?;
                let Some(label) = &self.label else {
                    return Err(malformed(item_path, "category requires `label`"));
                };
                check_label(label, item_path)?;
                let Some(items) = &self.items else {
                    return Err(malformed(item_path, "category requires `items`"));
                };
                let category_path = parent.join(PathSegment::Category(label.clone()));
                let landing = self
                    .link
                    .as_ref()
                    .map(|link| link.to_landing(label, &category_path.join(PathSegment::Landing)))
                    .transpose()?;
                let collapsible = self.collapsible.unwrap_or(true);

                Ok(NavNode::Category(Category {
                    label: label.clone(),
                    landing,
                    collapsed: self.collapsed.unwrap_or(collapsible),
                    collapsible,
                    class_name: self.class_name.clone(),
                    items: convert_items(items, &category_path)?,
                }))
            }
            Some(other) => Err(malformed(item_path, &format!("unknown node type `{other}`"))),
        }
    }

    /// Reject fields that make no sense for the given node type.
    fn reject_fields(
        &self,
        path: &NodePath,
        kind: &str,
        fields: &[&str],
    ) -> Result<(), BuildError> {
        for &field in fields {
            let present = match field {
                "id" => self.id.is_some(),
                "items" => self.items.is_some(),
                "link" => self.link.is_some(),
                "value" => self.value.is_some(),
                _ => false,
            };
            if present {
                return Err(malformed(
                    path,
                    &format!("`{kind}` node cannot have `{field}`"),
                ));
            }
        }
        Ok(())
    }
}

/// Raw category landing page (`link`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLink {
    /// `doc` or `generated-index`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl RawLink {
    /// `type: doc` landing page.
    #[must_use]
    pub fn doc(id: &str) -> Self {
        Self {
            kind: Some(LINK_DOC.to_owned()),
            id: Some(id.to_owned()),
            ..Self::default()
        }
    }

    /// `type: generated-index` landing page.
    #[must_use]
    pub fn generated_index(title: &str, description: &str) -> Self {
        Self {
            kind: Some(LINK_GENERATED_INDEX.to_owned()),
            title: Some(title.to_owned()),
            description: Some(description.to_owned()),
            ..Self::default()
        }
    }

    fn to_landing(&self, category_label: &str, path: &NodePath) -> Result<LandingPage, BuildError> {
        match self.kind.as_deref() {
            None => Err(malformed(path, "link is missing `type`")),
            Some(LINK_DOC) => {
                let id = required(self.id.as_deref(), path, "doc link", "id")?;
                Ok(LandingPage::Doc(DocRef::new(id)))
            }
            Some(LINK_GENERATED_INDEX) => Ok(LandingPage::GeneratedIndex(GeneratedIndex {
                title: self
                    .title
                    .clone()
                    .unwrap_or_else(|| category_label.to_owned()),
                description: self.description.clone(),
                slug: self.slug.clone(),
            })),
            Some(other) => Err(malformed(path, &format!("unknown link type `{other}`"))),
        }
    }
}

/// Convert raw sidebars into typed navigation trees.
///
/// Only structural problems are reported here ([`BuildError::MalformedNode`]
/// and blank category labels); semantic validation happens when the
/// [`Catalog`](crate::Catalog) is built.
///
/// # Errors
///
/// Returns [`BuildError::MalformedNode`] or [`BuildError::EmptyCategoryLabel`]
/// for the first offending node. Item indices count drafts.
pub fn into_nodes(sidebars: &RawSidebars) -> Result<BTreeMap<String, Vec<NavNode>>, BuildError> {
    let mut nodes = BTreeMap::new();
    for (name, items) in sidebars {
        nodes.insert(name.clone(), convert_items(items, &NodePath::sidebar(name))?);
    }
    Ok(nodes)
}

fn convert_items(items: &[RawItem], path: &NodePath) -> Result<Vec<NavNode>, BuildError> {
    let mut nodes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if let Some(node) = convert_item(item, path, index)? {
            nodes.push(node);
        }
    }
    Ok(nodes)
}

fn convert_item(
    item: &RawItem,
    path: &NodePath,
    index: usize,
) -> Result<Option<NavNode>, BuildError> {
    let item_path = path.join(PathSegment::Item(index));
    match item {
        RawItem::DocId(id) => {
            if id.trim().is_empty() {
                return Err(malformed(&item_path, "document id cannot be empty"));
            }
            Ok(Some(NavNode::doc(id)))
        }
        RawItem::Shorthand(map) => {
            let mut entries = map.iter();
            let (Some((label, items)), None) = (entries.next(), entries.next()) else {
                return Err(malformed(
                    &item_path,
                    "shorthand category must have exactly one label",
                ));
            };
            check_label(label, &item_path)?;
            let category_path = path.join(PathSegment::Category(label.clone()));
            let category = Category::new(label, convert_items(items, &category_path)?)
                .with_collapse(true, true);
            Ok(Some(NavNode::Category(category)))
        }
        RawItem::Node(node) if node.draft => {
            tracing::debug!(path = %item_path, "Skipping draft node");
            Ok(None)
        }
        RawItem::Node(node) => node.to_nav_node(&item_path, path).map(Some),
    }
}

/// Blank labels are reported here so the path counts items as written,
/// drafts included.
fn check_label(label: &str, item_path: &NodePath) -> Result<(), BuildError> {
    if label.trim().is_empty() {
        return Err(BuildError::EmptyCategoryLabel {
            path: item_path.clone(),
        });
    }
    Ok(())
}

fn required<'a>(
    value: Option<&'a str>,
    path: &NodePath,
    kind: &str,
    field: &str,
) -> Result<&'a str, BuildError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(malformed(path, &format!("`{field}` of {kind} cannot be empty"))),
        None => Err(malformed(path, &format!("{kind} requires `{field}`"))),
    }
}

fn malformed(path: &NodePath, reason: &str) -> BuildError {
    BuildError::MalformedNode {
        path: path.clone(),
        reason: reason.to_owned(),
    }
}
