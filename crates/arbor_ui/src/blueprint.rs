//! Declarative node trees loaded from TOML.
//!
//! Every node table carries the layout directives of [`LayoutStyle`] directly,
//! plus an optional `id`, an optional `handler` and nested `children`:
//!
//! ```toml
//! [root]
//! direction = "column"
//! justify = "space-between"
//!
//! [[root.children]]
//! width = 76
//! height = 35
//! margin = { top = 5, bottom = 10 }
//! handler = { kind = "button", text = "OK" }
//! ```
//!
//! Handlers are resolved by a caller-supplied factory, so this crate never
//! needs to know concrete widget types.

use serde::Deserialize;

use crate::error::{UiError, UiResult};
use crate::handler::Handler;
use crate::layout::LayoutStyle;
use crate::node::Node;

/// Handler reference inside a blueprint: a kind plus free-form parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HandlerSpec {
    /// Widget kind, e.g. `"button"`.
    pub kind: String,
    /// Remaining keys of the handler table.
    #[serde(flatten)]
    pub params: toml::Table,
}

impl HandlerSpec {
    /// String parameter.
    #[must_use]
    pub fn str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(toml::Value::as_str)
    }

    /// Numeric parameter; integers are accepted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn float(&self, key: &str) -> Option<f32> {
        match self.params.get(key)? {
            toml::Value::Float(value) => Some(*value as f32),
            toml::Value::Integer(value) => Some(*value as f32),
            _ => None,
        }
    }

    /// Boolean parameter.
    #[must_use]
    pub fn bool(&self, key: &str) -> Option<bool> {
        self.params.get(key).and_then(toml::Value::as_bool)
    }
}

/// One node of a blueprint tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeBlueprint {
    /// Lookup identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Handler to attach.
    #[serde(default)]
    pub handler: Option<HandlerSpec>,
    /// Children in order.
    #[serde(default)]
    pub children: Vec<NodeBlueprint>,
    /// Layout directives.
    #[serde(flatten)]
    pub style: LayoutStyle,
}

impl NodeBlueprint {
    /// Builds the node tree, asking `factory` for every handler.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `factory`.
    pub fn build<F>(&self, factory: &mut F) -> UiResult<Node>
    where
        F: FnMut(&HandlerSpec) -> UiResult<Box<dyn Handler>>,
    {
        let mut node = Node::with_style(self.style);
        if let Some(id) = &self.id {
            node = node.id(id.clone());
        }
        if let Some(spec) = &self.handler {
            node = node.boxed_handler(factory(spec)?);
        }
        for child in &self.children {
            node.push_child(child.build(factory)?);
        }
        Ok(node)
    }
}

/// A blueprint document with a single `[root]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Blueprint {
    /// Root node.
    pub root: NodeBlueprint,
}

impl Blueprint {
    /// Parses a blueprint document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] if the document is not valid TOML or
    /// does not match the blueprint shape.
    pub fn from_toml_str(source: &str) -> UiResult<Self> {
        toml::from_str(source).map_err(|err| UiError::InvalidConfig(err.to_string()))
    }

    /// Builds the node tree. See [`NodeBlueprint::build`].
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `factory`.
    pub fn build<F>(&self, mut factory: F) -> UiResult<Node>
    where
        F: FnMut(&HandlerSpec) -> UiResult<Box<dyn Handler>>,
    {
        self.root.build(&mut factory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Margin;
    use crate::layout::{Direction, Justify, Position};

    struct Marker;

    impl Handler for Marker {}

    const DOCUMENT: &str = r#"
        [root]
        direction = "column"
        justify = "space-between"

        [[root.children]]
        id = "button"
        width = 76
        height = 35.5
        margin = { top = 5, bottom = 10 }
        handler = { kind = "marker", text = "OK", scale = 2 }

        [[root.children]]
        position = "absolute"
        left = 296
        top = -2
    "#;

    #[test]
    fn test_parse_blueprint() {
        let blueprint = Blueprint::from_toml_str(DOCUMENT).unwrap();
        let root = &blueprint.root;

        assert_eq!(root.style.direction, Direction::Column);
        assert_eq!(root.style.justify, Justify::SpaceBetween);
        assert_eq!(root.children.len(), 2);

        let button = &root.children[0];
        assert_eq!(button.style.width, 76.0);
        assert_eq!(button.style.height, 35.5);
        assert_eq!(button.style.margin, Margin::new(5.0, 0.0, 10.0, 0.0));

        let spec = button.handler.as_ref().unwrap();
        assert_eq!(spec.kind, "marker");
        assert_eq!(spec.str("text"), Some("OK"));
        assert_eq!(spec.float("scale"), Some(2.0));

        let overlay = &root.children[1];
        assert_eq!(overlay.style.position, Position::Absolute);
        assert_eq!(overlay.style.top, -2.0);
    }

    #[test]
    fn test_build_uses_factory() {
        let blueprint = Blueprint::from_toml_str(DOCUMENT).unwrap();
        let mut calls = 0;

        let root = blueprint
            .build(|spec| {
                calls += 1;
                match spec.kind.as_str() {
                    "marker" => Ok(Box::new(Marker) as Box<dyn Handler>),
                    other => Err(UiError::UnknownHandler(other.to_string())),
                }
            })
            .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(root.subtree_len(), 3);
        assert!(root.find("button").and_then(Node::handler_ref).is_some());
    }

    #[test]
    fn test_unknown_handler_propagates() {
        let blueprint = Blueprint::from_toml_str(
            r#"
            [root]
            handler = { kind = "mystery" }
            "#,
        )
        .unwrap();

        let err = blueprint
            .build(|spec| Err(UiError::UnknownHandler(spec.kind.clone())))
            .unwrap_err();
        assert_eq!(err, UiError::UnknownHandler("mystery".to_string()));
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            Blueprint::from_toml_str("[root]\ndirection = \"diagonal\""),
            Err(UiError::InvalidConfig(_))
        ));
    }
}
