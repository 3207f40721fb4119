//! `tooltip` handles `HideFlags`, the bitmask of tooltip sections hidden on an item.

use crate::{ItemStack, stack::numeric_as_int, stack::put};
use fixedbitset::FixedBitSet;
use simdnbt::owned::NbtTag;

/// A section of an item's tooltip that can be hidden.
///
/// The order matters, a section's bit in `HideFlags` is `1 << ordinal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TooltipSection {
    Enchantments,
    Modifiers,
    Unbreakable,
    CanDestroy,
    CanPlace,
    Additional,
    Dye,
}

impl TooltipSection {
    pub const ALL: [TooltipSection; 7] = [
        TooltipSection::Enchantments,
        TooltipSection::Modifiers,
        TooltipSection::Unbreakable,
        TooltipSection::CanDestroy,
        TooltipSection::CanPlace,
        TooltipSection::Additional,
        TooltipSection::Dye,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// The single bit this section uses in `HideFlags`
    pub fn flag(self) -> i32 {
        1 << self.ordinal()
    }
}

/// A set of [`TooltipSection`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipSections(FixedBitSet);

impl TooltipSections {
    pub fn new() -> Self {
        TooltipSections(FixedBitSet::with_capacity(TooltipSection::ALL.len()))
    }

    pub fn all() -> Self {
        TooltipSection::ALL.into_iter().collect()
    }

    /// Decodes a `HideFlags` value, bits that don't belong to any section are ignored.
    pub fn from_flags(flags: i32) -> Self {
        TooltipSection::ALL
            .into_iter()
            .filter(|section| flags & section.flag() != 0)
            .collect()
    }

    /// Encodes the set as a `HideFlags` value.
    pub fn to_flags(&self) -> i32 {
        self.iter().fold(0, |flags, section| flags | section.flag())
    }

    pub fn insert(&mut self, section: TooltipSection) {
        self.0.insert(section.ordinal());
    }

    pub fn remove(&mut self, section: TooltipSection) {
        self.0.set(section.ordinal(), false);
    }

    pub fn contains(&self, section: TooltipSection) -> bool {
        self.0.contains(section.ordinal())
    }

    pub fn iter(&self) -> impl Iterator<Item = TooltipSection> + '_ {
        self.0.ones().map(|ordinal| TooltipSection::ALL[ordinal])
    }

    pub fn len(&self) -> usize {
        self.0.count_ones(..)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_clear()
    }
}

impl Default for TooltipSections {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<TooltipSection> for TooltipSections {
    fn from_iter<T: IntoIterator<Item = TooltipSection>>(iter: T) -> Self {
        let mut sections = Self::new();
        for section in iter {
            sections.insert(section);
        }
        sections
    }
}

impl<const N: usize> From<[TooltipSection; N]> for TooltipSections {
    fn from(value: [TooltipSection; N]) -> Self {
        value.into_iter().collect()
    }
}

impl ItemStack {
    pub const HIDE_FLAGS: &'static str = "HideFlags";

    /// The raw `HideFlags` value, 0 if missing or not a number.
    pub fn hide_flags(&self) -> i32 {
        self.tag
            .as_ref()
            .and_then(|tag| tag.get(Self::HIDE_FLAGS))
            .and_then(numeric_as_int)
            .unwrap_or(0)
    }

    fn put_hide_flags(&mut self, flags: i32) -> &mut Self {
        put(self.get_or_create_tag(), Self::HIDE_FLAGS, NbtTag::Int(flags));
        self
    }

    /// The tooltip sections currently hidden.
    ///
    /// A section counts as hidden if its bit is set, no matter what other bits are set.
    pub fn hidden_tooltip_sections(&self) -> TooltipSections {
        TooltipSections::from_flags(self.hide_flags())
    }

    /// Overwrites which tooltip sections are hidden.
    pub fn set_hidden_tooltip_sections(&mut self, sections: &TooltipSections) -> &mut Self {
        self.put_hide_flags(sections.to_flags())
    }

    /// Hides the given sections, keeping the ones already hidden.
    ///
    /// ## Example
    /// ```no_run
    /// let mut stack = ItemStack::new("diamond_chestplate", 1);
    /// stack.hide_tooltip_sections(&[TooltipSection::Modifiers, TooltipSection::Dye].into());
    /// ```
    pub fn hide_tooltip_sections(&mut self, sections: &TooltipSections) -> &mut Self {
        let flags = self.hide_flags() | sections.to_flags();
        self.put_hide_flags(flags)
    }

    /// Shows the given sections again, any other hidden section stays hidden.
    pub fn show_tooltip_sections(&mut self, sections: &TooltipSections) -> &mut Self {
        let flags = self.hide_flags() & !sections.to_flags();
        self.put_hide_flags(flags)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn section_flags() {
        assert_eq!(TooltipSection::Enchantments.flag(), 1);
        assert_eq!(TooltipSection::CanDestroy.flag(), 8);
        assert_eq!(TooltipSection::Dye.flag(), 64);
        assert_eq!(TooltipSections::all().to_flags(), 127);
    }

    #[test]
    fn decode_combined_flags() {
        let sections = TooltipSections::from_flags(1 | 4 | 32);
        assert_eq!(sections.len(), 3);
        assert!(sections.contains(TooltipSection::Enchantments));
        assert!(sections.contains(TooltipSection::Unbreakable));
        assert!(sections.contains(TooltipSection::Additional));
        assert!(!sections.contains(TooltipSection::Modifiers));
    }

    #[test]
    fn decode_ignores_unknown_bits() {
        let sections = TooltipSections::from_flags(1 << 12 | 2);
        assert_eq!(
            sections.iter().collect::<Vec<_>>(),
            vec![TooltipSection::Modifiers]
        );
    }

    #[test]
    fn no_tag_hides_nothing() {
        let stack = ItemStack::new("elytra", 1);
        assert!(stack.hidden_tooltip_sections().is_empty());
        assert_eq!(stack.hide_flags(), 0);
    }

    #[test]
    fn set_overwrites() {
        let mut stack = ItemStack::new("elytra", 1);
        stack
            .set_hidden_tooltip_sections(&[TooltipSection::Enchantments].into())
            .set_hidden_tooltip_sections(&[TooltipSection::CanPlace, TooltipSection::Dye].into());

        assert_eq!(stack.hide_flags(), 16 | 64);
        assert_eq!(
            stack.hidden_tooltip_sections(),
            TooltipSections::from([TooltipSection::CanPlace, TooltipSection::Dye])
        );
    }

    #[test]
    fn hide_then_show_only_touches_given_bits() {
        let mut stack = ItemStack::new("elytra", 1);
        stack.hide_tooltip_sections(&[TooltipSection::Unbreakable].into());

        let sections: TooltipSections =
            [TooltipSection::Modifiers, TooltipSection::Additional].into();
        stack.hide_tooltip_sections(&sections);
        assert_eq!(stack.hide_flags(), 4 | 2 | 32);

        stack.show_tooltip_sections(&sections);
        assert_eq!(stack.hide_flags(), 4);
        assert_eq!(
            stack.hidden_tooltip_sections(),
            TooltipSections::from([TooltipSection::Unbreakable])
        );
    }

    #[test]
    fn non_int_hide_flags() {
        let mut stack = ItemStack::new("elytra", 1);
        stack
            .get_or_create_tag()
            .insert(ItemStack::HIDE_FLAGS, NbtTag::Byte(3));
        assert_eq!(stack.hidden_tooltip_sections().len(), 2);

        put(
            stack.get_or_create_tag(),
            ItemStack::HIDE_FLAGS,
            NbtTag::String("3".into()),
        );
        assert!(stack.hidden_tooltip_sections().is_empty());

        stack.hide_tooltip_sections(&[TooltipSection::Dye].into());
        assert_eq!(stack.tag().unwrap().int(ItemStack::HIDE_FLAGS), Some(64));
    }

    #[test]
    fn show_keeps_unknown_bits() {
        let mut stack = ItemStack::new("elytra", 1);
        stack
            .get_or_create_tag()
            .insert(ItemStack::HIDE_FLAGS, NbtTag::Int(1 << 10 | 1));
        stack.show_tooltip_sections(&[TooltipSection::Enchantments].into());
        assert_eq!(stack.hide_flags(), 1 << 10);
    }
}
