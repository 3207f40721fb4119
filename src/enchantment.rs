//! `enchantment` contains [`Enchantment`], [`EnchantmentMap`] and the enchantment helpers on [`ItemStack`].

use crate::{ItemStack, Name, NbtString, stack::numeric_as_int, stack::put};
use simdnbt::owned::{NbtCompound, NbtList, NbtTag};

/// An enchantment id, always stored namespaced.
///
/// There's no registry here, any valid id is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Enchantment(NbtString);

impl Enchantment {
    /// ## Example
    /// ```no_run
    /// let sharpness = Enchantment::new("sharpness");
    /// assert_eq!(sharpness.id(), "minecraft:sharpness");
    /// ```
    pub fn new<N: Into<Name>>(name: N) -> Self {
        Enchantment(name.into().into_namespaced().to_nbt_string())
    }

    pub fn id(&self) -> std::borrow::Cow<'_, str> {
        self.0.to_str()
    }
}

impl From<&str> for Enchantment {
    fn from(value: &str) -> Self {
        Enchantment::new(value)
    }
}

/// Enchantments and their levels, in the order they were first added.
///
/// Enchantment lists are tiny so this is just a [`Vec`] with linear lookups.
/// Inserting an existing enchantment overwrites its level but keeps its position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnchantmentMap(Vec<(Enchantment, u16)>);

impl EnchantmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map of a single enchantment.
    pub fn of<E: Into<Enchantment>>(enchantment: E, level: u16) -> Self {
        let mut map = Self::new();
        map.insert(enchantment, level);
        map
    }

    /// Inserts or overwrites an enchantment, returning the previous level.
    pub fn insert<E: Into<Enchantment>>(&mut self, enchantment: E, level: u16) -> Option<u16> {
        let enchantment = enchantment.into();
        match self.0.iter_mut().find(|(e, _)| *e == enchantment) {
            Some((_, existing)) => Some(std::mem::replace(existing, level)),
            None => {
                self.0.push((enchantment, level));
                None
            }
        }
    }

    /// Overlays `other` on top of this map, `other` wins on conflicts.
    pub fn extend(&mut self, other: &EnchantmentMap) {
        for (enchantment, level) in other.iter() {
            self.insert(enchantment.clone(), level);
        }
    }

    pub fn get(&self, enchantment: &Enchantment) -> Option<u16> {
        self.0
            .iter()
            .find(|(e, _)| e == enchantment)
            .map(|(_, level)| *level)
    }

    pub fn remove(&mut self, enchantment: &Enchantment) -> Option<u16> {
        let index = self.0.iter().position(|(e, _)| e == enchantment)?;
        Some(self.0.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Enchantment, u16)> {
        self.0.iter().map(|(e, level)| (e, *level))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads an enchantment list.
    ///
    /// Entries without a valid string `id` are skipped, a missing or non-numeric `lvl` reads as 0.
    pub fn from_list(list: &NbtList) -> Self {
        let mut map = Self::new();
        let Some(entries) = list.compounds() else {
            if !matches!(list, NbtList::Empty) {
                tracing::debug!("enchantment list isn't a list of compounds, ignoring it");
            }
            return map;
        };

        for entry in entries {
            let Some(id) = entry.string("id").and_then(|id| Name::parse(&id.to_str()).ok()) else {
                tracing::debug!("skipping enchantment entry without a valid id");
                continue;
            };
            let level = entry.get("lvl").and_then(numeric_as_int).unwrap_or(0);
            map.insert(Enchantment::new(id), level.clamp(0, u16::MAX as i32) as u16);
        }

        map
    }

    /// Writes the map as a list of `{id, lvl}` compounds, levels are saturated into a short.
    pub fn to_list(&self) -> NbtList {
        if self.is_empty() {
            return NbtList::Empty;
        }

        let entries = self
            .iter()
            .map(|(enchantment, level)| {
                NbtCompound::from_values(vec![
                    ("id".into(), NbtTag::String(enchantment.0.clone().into())),
                    ("lvl".into(), NbtTag::Short(level.min(i16::MAX as u16) as i16)),
                ])
            })
            .collect();
        NbtList::Compound(entries)
    }
}

impl<E: Into<Enchantment>> FromIterator<(E, u16)> for EnchantmentMap {
    fn from_iter<T: IntoIterator<Item = (E, u16)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (enchantment, level) in iter {
            map.insert(enchantment, level);
        }
        map
    }
}

impl ItemStack {
    pub const ENCHANTMENTS: &'static str = "Enchantments";
    pub const STORED_ENCHANTMENTS: &'static str = "StoredEnchantments";
    pub const ENCHANTED_BOOK: &'static str = "minecraft:enchanted_book";

    /// Enchanted books keep their enchantments in `StoredEnchantments` so they aren't applied to the book itself.
    fn enchantments_key(&self) -> &'static str {
        if self.item == Self::ENCHANTED_BOOK {
            Self::STORED_ENCHANTMENTS
        } else {
            Self::ENCHANTMENTS
        }
    }

    /// The current enchantments of the stack, empty if there's no (valid) enchantment list.
    pub fn enchantments(&self) -> EnchantmentMap {
        match self.tag.as_ref().and_then(|tag| tag.list(self.enchantments_key())) {
            Some(list) => EnchantmentMap::from_list(list),
            None => EnchantmentMap::new(),
        }
    }

    /// Replaces the enchantment list.
    ///
    /// An empty map removes `Enchantments`, also on books, whose `StoredEnchantments` are left alone.
    pub fn set_enchantments(&mut self, enchantments: &EnchantmentMap) -> &mut Self {
        if enchantments.is_empty() {
            return self.remove_sub_tag(Self::ENCHANTMENTS);
        }

        let key = self.enchantments_key();
        put(
            self.get_or_create_tag(),
            key,
            NbtTag::List(enchantments.to_list()),
        );
        self
    }

    /// Removes all enchantments, does nothing if there's no tag.
    ///
    /// Only `Enchantments` is removed, a book's `StoredEnchantments` stay.
    pub fn remove_enchantments(&mut self) -> &mut Self {
        self.remove_sub_tag(Self::ENCHANTMENTS)
    }

    /// Adds enchantments on top of the existing ones, overwriting the level of any already present.
    ///
    /// ## Example
    /// ```no_run
    /// let mut sword = ItemStack::new("netherite_sword", 1);
    /// sword.add_enchantments(&[("sharpness", 5), ("looting", 3)].into_iter().collect());
    /// ```
    pub fn add_enchantments(&mut self, enchantments: &EnchantmentMap) -> &mut Self {
        if enchantments.is_empty() {
            return self;
        }

        let mut map = self.enchantments();
        map.extend(enchantments);
        tracing::trace!(count = map.len(), "writing enchantments");
        self.set_enchantments(&map)
    }

    pub fn add_enchantment<E: Into<Enchantment>>(&mut self, enchantment: E, level: u16) -> &mut Self {
        self.add_enchantments(&EnchantmentMap::of(enchantment, level))
    }
}
