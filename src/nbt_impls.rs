use crate::{BlockState, Name, NbtString};
use simdnbt::{Mutf8Str, Mutf8String};
use std::{fmt::Debug, hash::Hash};

impl Debug for BlockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // <id> or <id>[<key>=<value>, ...], close to how blocks are written in commands
        write!(f, "{:?}", self.name)?;
        if let Some(props) = &self.properties {
            let props = props
                .iter()
                .map(|(k, v)| format!("{}={}", k.to_str(), v.to_str()))
                .collect::<Vec<String>>()
                .join(", ");
            write!(f, "[{props}]")?;
        }
        Ok(())
    }
}

impl From<&str> for BlockState {
    fn from(value: &str) -> Self {
        BlockState::new(value)
    }
}

impl From<Name> for BlockState {
    fn from(value: Name) -> Self {
        BlockState::new(value)
    }
}

impl Debug for NbtString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl PartialEq<&str> for NbtString {
    fn eq(&self, other: &&str) -> bool {
        self.to_str() == *other
    }
}

impl PartialEq<NbtString> for &str {
    fn eq(&self, other: &NbtString) -> bool {
        other.to_str() == *self
    }
}

impl PartialEq<&Mutf8Str> for NbtString {
    fn eq(&self, other: &&Mutf8Str) -> bool {
        self.to_mutf8str() == *other
    }
}

impl From<NbtString> for Mutf8String {
    fn from(value: NbtString) -> Self {
        value.to_mutf8string()
    }
}

impl From<&str> for NbtString {
    fn from(value: &str) -> Self {
        NbtString::new(value)
    }
}

impl From<String> for NbtString {
    fn from(value: String) -> Self {
        NbtString::new(&value)
    }
}

impl From<&Mutf8Str> for NbtString {
    fn from(value: &Mutf8Str) -> Self {
        NbtString(value.as_bytes().to_vec())
    }
}

impl Debug for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_cow_namespaced().to_str())
    }
}

impl From<Name> for Mutf8String {
    fn from(value: Name) -> Self {
        value.to_nbt_string().to_mutf8string()
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Name::Id(value.into())
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::Id(value.into())
    }
}

impl From<NbtString> for Name {
    fn from(value: NbtString) -> Self {
        Name::Id(value)
    }
}

/// Names compare by their namespaced form, so `stone` equals `minecraft:stone`
impl PartialEq for Name {
    fn eq(&self, other: &Name) -> bool {
        self.to_cow_namespaced() == other.to_cow_namespaced()
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_cow_namespaced().hash(state);
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.to_cow_namespaced().to_str() == Name::populate_namespace(other)
    }
}

impl PartialEq<Name> for &str {
    fn eq(&self, other: &Name) -> bool {
        other == self
    }
}
