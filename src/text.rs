//! `text` contains [`Text`], Minecraft's rich text component, and its JSON encoding.
//!
//! Lore lines (and custom names) are stored in NBT as JSON strings of these components.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use serde_json::{Map, Value};

/// What a [`Text`] component displays, before its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextContent {
    /// Plain text, `{"text": "..."}`
    Literal(String),
    /// A translation key with arguments, `{"translate": "...", "with": [...]}`
    Translatable { key: String, with: Vec<Text> },
    /// The key currently bound to an action, `{"keybind": "key.jump"}`
    Keybind(String),
}

/// Formatting of a [`Text`] component.
///
/// Every field is optional, an unset field inherits from the parent component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// A named color like `gold` or a hex color like `#ff8800`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insertion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

/// A rich text component: some content, its style and any children appended after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: TextContent,
    pub style: Style,
    pub extra: Vec<Text>,
}

impl Text {
    fn with_content(content: TextContent) -> Self {
        Text {
            content,
            style: Style::default(),
            extra: Vec::new(),
        }
    }

    /// ## Example
    /// ```no_run
    /// let line = Text::literal("Forged in dragon fire").color("gold").italic(false);
    /// ```
    pub fn literal<S: Into<String>>(text: S) -> Self {
        Self::with_content(TextContent::Literal(text.into()))
    }

    pub fn translatable<S: Into<String>>(key: S, with: Vec<Text>) -> Self {
        Self::with_content(TextContent::Translatable {
            key: key.into(),
            with,
        })
    }

    pub fn keybind<S: Into<String>>(key: S) -> Self {
        Self::with_content(TextContent::Keybind(key.into()))
    }

    pub fn color<S: Into<String>>(mut self, color: S) -> Self {
        self.style.color = Some(color.into());
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.style.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.style.italic = Some(italic);
        self
    }

    pub fn underlined(mut self, underlined: bool) -> Self {
        self.style.underlined = Some(underlined);
        self
    }

    pub fn strikethrough(mut self, strikethrough: bool) -> Self {
        self.style.strikethrough = Some(strikethrough);
        self
    }

    pub fn obfuscated(mut self, obfuscated: bool) -> Self {
        self.style.obfuscated = Some(obfuscated);
        self
    }

    /// Appends a child component.
    pub fn append(mut self, child: Text) -> Self {
        self.extra.push(child);
        self
    }

    /// The text without any formatting.
    ///
    /// Translatable and keybind components can't be resolved here, so their keys are used.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        match &self.content {
            TextContent::Literal(text) => out.push_str(text),
            TextContent::Translatable { key, .. } => out.push_str(key),
            TextContent::Keybind(key) => out.push_str(key),
        }
        for child in &self.extra {
            child.write_plain(out);
        }
    }

    /// Parses a component from its JSON encoding.
    ///
    /// Accepts all three forms: a bare string (or other primitive), an object,
    /// or an array where the first element is the parent and the rest its children.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Text::from_value(value)
    }

    /// Encodes the component as a JSON object, unset style fields are omitted.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Text::literal(text)),
            Value::Number(n) => Ok(Text::literal(n.to_string())),
            Value::Bool(b) => Ok(Text::literal(b.to_string())),
            Value::Array(values) => {
                let mut values = values.into_iter();
                let mut text = match values.next() {
                    Some(first) => Text::from_value(first)?,
                    None => return Err(Error::InvalidText("empty array".to_owned())),
                };
                for value in values {
                    text.extra.push(Text::from_value(value)?);
                }
                Ok(text)
            }
            Value::Object(map) => Text::from_object(map),
            Value::Null => Err(Error::InvalidText("null".to_owned())),
        }
    }

    fn from_object(mut map: Map<String, Value>) -> Result<Self> {
        let content = if let Some(text) = map.remove("text") {
            TextContent::Literal(primitive_string(text, "text")?)
        } else if let Some(key) = map.remove("translate") {
            let with = match map.remove("with") {
                Some(Value::Array(args)) => args
                    .into_iter()
                    .map(Text::from_value)
                    .collect::<Result<Vec<_>>>()?,
                Some(_) => return Err(Error::InvalidText("'with' is not an array".to_owned())),
                None => Vec::new(),
            };
            TextContent::Translatable {
                key: primitive_string(key, "translate")?,
                with,
            }
        } else if let Some(key) = map.remove("keybind") {
            TextContent::Keybind(primitive_string(key, "keybind")?)
        } else {
            return Err(Error::InvalidText(format!(
                "no known content in object with keys {:?}",
                map.keys().collect::<Vec<_>>()
            )));
        };

        let extra = match map.remove("extra") {
            Some(Value::Array(children)) if children.is_empty() => {
                return Err(Error::InvalidText("'extra' is an empty array".to_owned()));
            }
            Some(Value::Array(children)) => children
                .into_iter()
                .map(Text::from_value)
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(Error::InvalidText("'extra' is not an array".to_owned())),
            None => Vec::new(),
        };

        // whatever is left is style, unknown keys (clickEvent, hoverEvent, ...) are dropped
        let style: Style = serde_json::from_value(Value::Object(map))?;

        Ok(Text {
            content,
            style,
            extra,
        })
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        match &self.content {
            TextContent::Literal(text) => {
                map.insert("text".to_owned(), Value::String(text.clone()));
            }
            TextContent::Translatable { key, with } => {
                map.insert("translate".to_owned(), Value::String(key.clone()));
                if !with.is_empty() {
                    map.insert(
                        "with".to_owned(),
                        Value::Array(with.iter().map(Text::to_value).collect()),
                    );
                }
            }
            TextContent::Keybind(key) => {
                map.insert("keybind".to_owned(), Value::String(key.clone()));
            }
        }

        let style = &self.style;
        let strings = [
            ("color", &style.color),
            ("insertion", &style.insertion),
            ("font", &style.font),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                map.insert(key.to_owned(), Value::String(value.clone()));
            }
        }
        let flags = [
            ("bold", style.bold),
            ("italic", style.italic),
            ("underlined", style.underlined),
            ("strikethrough", style.strikethrough),
            ("obfuscated", style.obfuscated),
        ];
        for (key, value) in flags {
            if let Some(value) = value {
                map.insert(key.to_owned(), Value::Bool(value));
            }
        }

        if !self.extra.is_empty() {
            map.insert(
                "extra".to_owned(),
                Value::Array(self.extra.iter().map(Text::to_value).collect()),
            );
        }

        Value::Object(map)
    }
}

fn primitive_string(value: Value, field: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(Error::InvalidText(format!("'{field}' is not a string"))),
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::literal(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::literal(value)
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Text::from_value(value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn literal_to_json() {
        let text = Text::literal("Sharp").color("red").bold(true);
        let json: Value = serde_json::from_str(&text.to_json()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "Sharp", "color": "red", "bold": true})
        );
    }

    #[test]
    fn plain_string_json() -> Result<()> {
        let text = Text::from_json(r#""Just a string""#)?;
        assert_eq!(text, Text::literal("Just a string"));
        Ok(())
    }

    #[test]
    fn array_json() -> Result<()> {
        let text = Text::from_json(r#"["Hello ", {"text": "world", "italic": true}]"#)?;
        assert_eq!(
            text,
            Text::literal("Hello ").append(Text::literal("world").italic(true))
        );
        assert_eq!(text.to_plain_string(), "Hello world");
        Ok(())
    }

    #[test]
    fn translatable_json() -> Result<()> {
        let text = Text::from_json(
            r#"{"translate": "enchantment.level.%s", "with": [3], "color": "gray"}"#,
        )?;
        assert_eq!(
            text,
            Text::translatable("enchantment.level.%s", vec![Text::literal("3")]).color("gray")
        );
        Ok(())
    }

    #[test]
    fn keybind_json() -> Result<()> {
        let text = Text::from_json(r#"{"keybind": "key.sneak"}"#)?;
        assert_eq!(text.content, TextContent::Keybind("key.sneak".to_owned()));
        Ok(())
    }

    #[test]
    fn unknown_style_keys_are_ignored() -> Result<()> {
        let text = Text::from_json(
            r#"{"text": "click", "clickEvent": {"action": "open_url", "value": "x"}, "underlined": true}"#,
        )?;
        assert_eq!(text, Text::literal("click").underlined(true));
        Ok(())
    }

    #[test]
    fn json_roundtrip() -> Result<()> {
        let text = Text::literal("A ")
            .color("#55ff55")
            .append(Text::keybind("key.use").obfuscated(false))
            .append(Text::translatable("item.minecraft.bow", vec![]).strikethrough(true));
        assert_eq!(Text::from_json(&text.to_json())?, text);
        Ok(())
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(Text::from_json("{not json"), Err(Error::Json(_))));
        assert!(matches!(Text::from_json("[]"), Err(Error::InvalidText(_))));
        assert!(matches!(Text::from_json("null"), Err(Error::InvalidText(_))));
        assert!(matches!(
            Text::from_json(r#"{"color": "red"}"#),
            Err(Error::InvalidText(_))
        ));
        assert!(matches!(
            Text::from_json(r#"{"text": "a", "extra": []}"#),
            Err(Error::InvalidText(_))
        ));
    }

    #[test]
    fn serde_through_other_types() -> Result<()> {
        let lines: Vec<Text> = serde_json::from_str(r#"["one", {"text": "two"}]"#)?;
        assert_eq!(lines, vec![Text::literal("one"), Text::literal("two")]);
        Ok(())
    }
}
