use crate::{ItemStack, stack::put};
use simdnbt::owned::NbtTag;

impl ItemStack {
    pub const UNBREAKABLE: &'static str = "Unbreakable";

    /// If the stack has a byte `Unbreakable` flag that's set.
    pub fn is_unbreakable(&self) -> bool {
        match self.tag.as_ref().and_then(|tag| tag.get(Self::UNBREAKABLE)) {
            Some(NbtTag::Byte(value)) => *value != 0,
            _ => false,
        }
    }

    /// Sets or clears the `Unbreakable` flag.
    ///
    /// Clearing removes the entry entirely and never creates a tag.
    pub fn set_unbreakable(&mut self, unbreakable: bool) -> &mut Self {
        if unbreakable {
            put(self.get_or_create_tag(), Self::UNBREAKABLE, NbtTag::Byte(1));
            self
        } else {
            self.remove_sub_tag(Self::UNBREAKABLE)
        }
    }
}
