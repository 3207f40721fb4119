//! `nbt` contains the string and identifier types shared by the item and block helpers,
//! plus [`BlockState`] which the block helpers are handed.

use crate::error::{Error, Result};
use simdnbt::{
    Mutf8Str, Mutf8String,
    owned::{NbtCompound, NbtTag},
};
use std::{borrow::Cow, collections::BTreeMap};

/// A [`Mutf8String`] in disguise. (See it for more info on this string type)
///
/// Wrapper for it since [`Mutf8String`] doesn't implement [`Hash`] or [`Ord`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NbtString(pub(crate) Vec<u8>);

impl NbtString {
    pub fn new(value: &str) -> Self {
        Self(Mutf8Str::from_str(value).as_bytes().to_vec())
    }

    pub fn to_mutf8string(self) -> Mutf8String {
        Mutf8String::from_vec(self.0)
    }

    pub fn to_mutf8str(&self) -> &Mutf8Str {
        Mutf8Str::from_slice(&self.0)
    }

    pub fn to_str(&self) -> Cow<'_, str> {
        self.to_mutf8str().to_str()
    }

    pub fn inner(&self) -> &Vec<u8> {
        &self.0
    }
}

/// A namespaced resource identifier like `minecraft:sharpness` or `minecraft:stone`.
///
/// If you know that your id already contains a namespace, you can safely construct a [`Name::Namespaced`].
///
/// Otherwise construct a [`Name::Id`] and let it translate to a namespaced one
/// once it's compared or written to NBT.
#[derive(Clone)]
pub enum Name {
    Namespaced(NbtString),
    Id(NbtString),
}

impl Name {
    pub(crate) const DEFAULT_NAMESPACE: &'static str = "minecraft";

    /// Creates a new [`Name`] from a **namespaced** id.
    ///
    /// Only use if you're sure that your id contains a namespace.
    pub fn new_namespace<S: Into<NbtString>>(value: S) -> Self {
        Name::Namespaced(value.into())
    }

    /// Creates a new [`Name`] that may or may not contain a namespace.
    pub fn new_id<S: Into<NbtString>>(value: S) -> Self {
        Name::Id(value.into())
    }

    /// Parses and validates an identifier.
    ///
    /// The namespace may contain `a-z 0-9 _ - .`, the path additionally `/`.
    ///
    /// ## Example
    /// ```no_run
    /// let name = Name::parse("mending")?;
    /// assert_eq!(name, "minecraft:mending");
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        let (namespace, path) = match value.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => (Self::DEFAULT_NAMESPACE, value),
        };

        let valid_namespace = namespace
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.'));
        let valid_path = !path.is_empty()
            && path
                .bytes()
                .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b'/'));

        if !valid_namespace || !valid_path {
            return Err(Error::InvalidIdentifier(value.to_owned()));
        }

        Ok(Name::Namespaced(NbtString::new(&format!("{namespace}:{path}"))))
    }

    /// Populates a namespace to the id if none is given.
    ///
    /// Defaults to `minecraft:<id>`
    pub(crate) fn populate_namespace(id: &str) -> Cow<'_, str> {
        if !id.contains(':') {
            Cow::Owned(format!("{}:{id}", Self::DEFAULT_NAMESPACE))
        } else {
            Cow::Borrowed(id)
        }
    }

    /// Converts the [`Name`] into a 100% guaranteed namespaced variant.
    pub fn into_namespaced(self) -> Self {
        match self {
            Name::Namespaced(n) => Name::Namespaced(n),
            Name::Id(n) => Name::Namespaced(NbtString::new(&Name::populate_namespace(&n.to_str()))),
        }
    }

    /// Converts the [`Name`] into a guaranteed namespaced string, but it may be owned or borrowed.
    pub fn to_cow_namespaced(&self) -> Cow<'_, NbtString> {
        match self {
            Name::Namespaced(n) => Cow::Borrowed(n),
            Name::Id(n) => match Name::populate_namespace(&n.to_str()) {
                Cow::Borrowed(_) => Cow::Borrowed(n),
                Cow::Owned(namespaced) => Cow::Owned(NbtString::new(&namespaced)),
            },
        }
    }

    /// Converts [`Name`] into [`str`], as it was given
    pub fn to_str(&self) -> Cow<'_, str> {
        self.as_nbt_string().to_str()
    }

    /// Extracts the internal [`NbtString`] value
    pub fn to_nbt_string(self) -> NbtString {
        match self {
            Name::Namespaced(n) => n,
            Name::Id(n) => n,
        }
    }

    /// A reference to the internal [`NbtString`] value
    pub fn as_nbt_string(&self) -> &NbtString {
        match self {
            Name::Namespaced(n) => n,
            Name::Id(n) => n,
        }
    }
}

/// A block and its state properties, what gets handed to the block helpers.
#[derive(Clone, PartialEq, Eq)]
pub struct BlockState {
    pub name: Name,
    pub properties: Option<BTreeMap<NbtString, NbtString>>,
}

impl BlockState {
    /// Creates a new block state from just an id
    ///
    /// Auto populates into minecraft namespace if no namespace was given
    ///
    /// ## Example
    /// ```no_run
    /// let chest = BlockState::new("chest");
    /// ```
    pub fn new<B: Into<Name>>(block: B) -> Self {
        BlockState {
            name: block.into(),
            properties: None,
        }
    }

    /// Creates a new block state from its id and properties
    ///
    /// ## Example
    /// ```no_run
    /// let chest = BlockState::new_with_props("chest", [("facing", "north")]);
    /// ```
    pub fn new_with_props<B: Into<Name>, const N: usize>(
        block: B,
        properties: [(&str, &str); N],
    ) -> Self {
        let props = properties
            .iter()
            .map(|(k, v)| (NbtString::new(k), NbtString::new(v)))
            .collect();

        BlockState {
            name: block.into(),
            properties: Some(props),
        }
    }

    /// Converts [`BlockState`] to a [`NbtCompound`]
    ///
    /// Skips writing `properties` if `None` or empty
    pub fn to_compound(self) -> NbtCompound {
        let mut tag = NbtCompound::new();
        tag.insert("Name", NbtTag::String(self.name.into_namespaced().into()));
        if let Some(props) = self.properties {
            if !props.is_empty() {
                let mut props_tag = NbtCompound::new();
                for (k, v) in props {
                    props_tag.insert(k, NbtTag::String(v.into()));
                }
                tag.insert("Properties", props_tag);
            }
        }

        tag
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nbt_string() {
        let nbt_string = NbtString::new("arentyouexcited");
        assert!(!nbt_string.inner().is_empty());
        assert_eq!(nbt_string, "arentyouexcited");
        assert_eq!(nbt_string.to_str(), "arentyouexcited");
    }

    #[test]
    fn populate_namespace() {
        let id = Name::populate_namespace("unbreaking");
        assert_eq!(id, "minecraft:unbreaking")
    }

    #[test]
    fn dont_populate_namespace() {
        let id = Name::populate_namespace("custom:lifesteal");
        assert_eq!(id, "custom:lifesteal")
    }

    #[test]
    fn compare_id_against_namespaced() {
        let name_1 = Name::new_namespace("minecraft:lime_wool");
        let name_2 = Name::new_id("lime_wool");
        assert_eq!(name_1, name_2)
    }

    #[test]
    fn compare_diff_namespace() {
        let name_1 = Name::new_namespace("minecraft:sharpness");
        let name_2 = Name::new_id("custom:sharpness");
        assert_ne!(name_1, name_2)
    }

    #[test]
    fn parse_identifier() -> Result<()> {
        let name = Name::parse("fire_aspect")?;
        assert_eq!(name.to_str(), "minecraft:fire_aspect");

        let name = Name::parse("my_mod:tools/chisel")?;
        assert_eq!(name.to_str(), "my_mod:tools/chisel");
        Ok(())
    }

    #[test]
    fn parse_invalid_identifier() {
        assert!(matches!(
            Name::parse("Minecraft:Stone"),
            Err(Error::InvalidIdentifier(_))
        ));
        assert!(Name::parse("minecraft:").is_err());
        assert!(Name::parse("bad/namespace:path").is_err());
    }

    #[test]
    fn block_state_to_nbt() {
        let state = BlockState::new_with_props("furnace", [("lit", "true")]);
        let nbt = state.to_compound();

        assert_eq!(
            nbt.string("Name").map(|s| s.to_str().into_owned()),
            Some(String::from("minecraft:furnace"))
        );
        assert_eq!(
            nbt.compound("Properties")
                .and_then(|p| p.string("lit"))
                .map(|s| s.to_str().into_owned()),
            Some(String::from("true"))
        );
    }
}
