#[allow(unused_imports)] // used for doc
use crate::ItemStack;

/// What to do with a lore line that isn't valid text component JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLore {
    /// Drop the line, the rest of the lore is still returned.
    #[default]
    Skip,
    /// Keep the raw string as a literal [`Text`](crate::Text).
    Literal,
}

/// Config for when reading lore via [`ItemStack::lore_with_config`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoreConfig {
    /// How lines that fail to parse are handled.
    ///
    /// Minecraft itself throws the whole lore away in that case,
    /// which is rarely what you want when inspecting items.
    pub malformed: MalformedLore,
}

impl Default for LoreConfig {
    fn default() -> Self {
        Self {
            malformed: MalformedLore::Skip,
        }
    }
}
