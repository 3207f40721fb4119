//! `stack` contains the [`ItemStack`] struct and its core impls.
//! The actual helpers (enchantments, lore, hide flags, unbreakable) are spread out
//! over their own modules as further `impl ItemStack` blocks.

use crate::{Error, Name, Result};
use simdnbt::owned::{NbtCompound, NbtTag};

/// A stack of items and the NBT attached to it.
///
/// The `tag` compound is created lazily, most helpers that only read from it
/// will never create one.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    pub item: Name,
    pub count: i8,
    pub(crate) tag: Option<NbtCompound>,
}

impl ItemStack {
    pub const AIR: &'static str = "minecraft:air";

    /// Creates a new stack without any NBT.
    ///
    /// ## Example
    /// ```no_run
    /// let sword = ItemStack::new("diamond_sword", 1);
    /// ```
    pub fn new<I: Into<Name>>(item: I, count: i8) -> Self {
        ItemStack {
            item: item.into(),
            count,
            tag: None,
        }
    }

    /// An empty stack of air.
    pub fn empty() -> Self {
        ItemStack::new(Name::new_namespace(Self::AIR), 0)
    }

    /// If the stack is air or has no items in it.
    pub fn is_empty(&self) -> bool {
        self.count <= 0 || self.item == Self::AIR
    }

    pub fn tag(&self) -> Option<&NbtCompound> {
        self.tag.as_ref()
    }

    pub fn tag_mut(&mut self) -> Option<&mut NbtCompound> {
        self.tag.as_mut()
    }

    /// Replaces the whole tag compound.
    pub fn set_tag(&mut self, tag: Option<NbtCompound>) -> &mut Self {
        self.tag = tag;
        self
    }

    pub fn get_or_create_tag(&mut self) -> &mut NbtCompound {
        self.tag.get_or_insert_with(NbtCompound::new)
    }

    /// A compound within the tag, `None` if either is missing or it isn't a compound.
    pub fn sub_tag(&self, key: &str) -> Option<&NbtCompound> {
        self.tag.as_ref()?.compound(key)
    }

    /// Runs `f` on the compound at `key` within the tag, creating the tag and compound if needed.
    ///
    /// A value at `key` that isn't a compound gets replaced.
    pub fn with_sub_tag<R>(&mut self, key: &str, f: impl FnOnce(&mut NbtCompound) -> R) -> R {
        let tag = self.get_or_create_tag();
        let mut sub_tag = match tag.get_mut(key) {
            Some(NbtTag::Compound(compound)) => std::mem::replace(compound, NbtCompound::new()),
            Some(_) => {
                tracing::debug!(key, "replacing non-compound sub tag");
                NbtCompound::new()
            }
            None => NbtCompound::new(),
        };

        let result = f(&mut sub_tag);
        put(tag, key, sub_tag);
        result
    }

    /// Removes `key` from the tag, if there is a tag.
    pub fn remove_sub_tag(&mut self, key: &str) -> &mut Self {
        if let Some(tag) = self.tag.as_mut() {
            tag.remove(key);
        }
        self
    }

    /// Converts the item compound (`id`, `Count`, `tag`) to an [`ItemStack`].
    ///
    /// `Count` may be any numeric type, values outside the byte range saturate
    /// instead of wrapping (so `300` reads as `127`).
    pub fn from_compound(nbt: &NbtCompound) -> Result<Self> {
        let id = nbt
            .string("id")
            .ok_or(Error::MissingNbtTag("id"))?
            .to_str();
        let item = Name::parse(&id)?;

        let count = nbt.get("Count").ok_or(Error::MissingNbtTag("Count"))?;
        let count = numeric_as_int(count).ok_or(Error::InvalidNbtType("Count"))?;

        Ok(ItemStack {
            item,
            count: count.clamp(i8::MIN as i32, i8::MAX as i32) as i8,
            tag: nbt.compound("tag").cloned(),
        })
    }

    /// Converts [`ItemStack`] to the item compound.
    ///
    /// Skips writing `tag` if there is none.
    pub fn to_compound(self) -> NbtCompound {
        let mut nbt = NbtCompound::new();
        nbt.insert("id", NbtTag::String(self.item.into_namespaced().into()));
        nbt.insert("Count", NbtTag::Byte(self.count));
        if let Some(tag) = self.tag {
            nbt.insert("tag", tag);
        }

        nbt
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        ItemStack::empty()
    }
}

/// Inserts or overwrites `key`, keeping the position of an existing entry.
pub(crate) fn put(compound: &mut NbtCompound, key: &str, value: impl Into<NbtTag>) {
    let value = value.into();
    match compound.get_mut(key) {
        Some(existing) => *existing = value,
        None => compound.insert(key, value),
    }
}

/// Reads any numeric tag as an `i32`, the same way Minecraft's `getInt` does.
///
/// Wider integers are truncated and floating point values are floored.
pub(crate) fn numeric_as_int(tag: &NbtTag) -> Option<i32> {
    match tag {
        NbtTag::Byte(v) => Some(*v as i32),
        NbtTag::Short(v) => Some(*v as i32),
        NbtTag::Int(v) => Some(*v),
        NbtTag::Long(v) => Some(*v as i32),
        NbtTag::Float(v) => Some(v.floor() as i32),
        NbtTag::Double(v) => Some(v.floor() as i32),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_stack_has_no_tag() {
        let stack = ItemStack::new("stick", 3);
        assert!(stack.tag().is_none());
        assert!(!stack.is_empty());
    }

    #[test]
    fn empty_stacks() {
        assert!(ItemStack::empty().is_empty());
        assert!(ItemStack::new("air", 12).is_empty());
        assert!(ItemStack::new("diamond", 0).is_empty());
    }

    #[test]
    fn create_sub_tag() {
        let mut stack = ItemStack::new("diamond_hoe", 1);
        stack.with_sub_tag("display", |display| {
            display.insert("Name", NbtTag::String("\"Hoe\"".into()))
        });

        let display = stack.sub_tag("display").unwrap();
        assert!(display.contains("Name"));
    }

    #[test]
    fn create_sub_tag_replaces_wrong_type() {
        let mut stack = ItemStack::new("diamond_hoe", 1);
        stack.get_or_create_tag().insert("display", NbtTag::Int(4));
        let len = stack.with_sub_tag("display", |display| display.len());

        assert_eq!(len, 0);
        assert!(stack.sub_tag("display").unwrap().is_empty());
        assert_eq!(stack.tag().unwrap().len(), 1);
    }

    #[test]
    fn sub_tag_edits_keep_existing_entries() {
        let mut stack = ItemStack::new("diamond_hoe", 1);
        stack.get_or_create_tag().insert("Damage", NbtTag::Int(3));
        stack.with_sub_tag("display", |display| display.insert("Name", NbtTag::String("a".into())));
        stack.with_sub_tag("display", |display| display.insert("color", NbtTag::Int(0xff)));

        let tag = stack.tag().unwrap();
        assert_eq!(tag.len(), 2);
        assert_eq!(tag.int("Damage"), Some(3));
        let display = stack.sub_tag("display").unwrap();
        assert!(display.contains("Name"));
        assert_eq!(display.int("color"), Some(0xff));
    }

    #[test]
    fn count_saturates() -> Result<()> {
        let nbt = NbtCompound::from_values(vec![
            ("id".into(), NbtTag::String("minecraft:stone".into())),
            ("Count".into(), NbtTag::Int(300)),
        ]);
        assert_eq!(ItemStack::from_compound(&nbt)?.count, 127);
        Ok(())
    }

    #[test]
    fn remove_sub_tag_without_tag() {
        let mut stack = ItemStack::new("apple", 1);
        stack.remove_sub_tag("display");
        assert!(stack.tag().is_none());
    }

    #[test]
    fn put_keeps_position() {
        let mut compound = NbtCompound::new();
        put(&mut compound, "a", NbtTag::Int(1));
        put(&mut compound, "b", NbtTag::Int(2));
        put(&mut compound, "a", NbtTag::Int(3));

        assert_eq!(compound.len(), 2);
        assert_eq!(compound.int("a"), Some(3));
        assert_eq!(compound.iter().next().map(|(k, _)| k.to_str().into_owned()), Some("a".to_owned()));
    }

    #[test]
    fn numeric_tags() {
        assert_eq!(numeric_as_int(&NbtTag::Byte(-2)), Some(-2));
        assert_eq!(numeric_as_int(&NbtTag::Long(1 << 33 | 5)), Some(5));
        assert_eq!(numeric_as_int(&NbtTag::Double(7.9)), Some(7));
        assert_eq!(numeric_as_int(&NbtTag::Double(-1.5)), Some(-2));
        assert_eq!(numeric_as_int(&NbtTag::Float(-0.25)), Some(-1));
        assert_eq!(numeric_as_int(&NbtTag::String("1".into())), None);
    }

    #[test]
    fn stack_to_nbt() {
        let mut stack = ItemStack::new("iron_pickaxe", 1);
        stack.get_or_create_tag().insert("Damage", NbtTag::Int(12));
        let nbt = stack.to_compound();

        assert_eq!(
            nbt.string("id").map(|s| s.to_str().into_owned()),
            Some("minecraft:iron_pickaxe".to_owned())
        );
        assert_eq!(nbt.byte("Count"), Some(1));
        assert_eq!(nbt.compound("tag").and_then(|t| t.int("Damage")), Some(12));
    }

    #[test]
    fn nbt_to_stack() -> Result<()> {
        let nbt = NbtCompound::from_values(vec![
            ("id".into(), NbtTag::String("minecraft:bow".into())),
            ("Count".into(), NbtTag::Byte(1)),
            (
                "tag".into(),
                NbtTag::Compound(NbtCompound::from_values(vec![(
                    "Unbreakable".into(),
                    NbtTag::Byte(1),
                )])),
            ),
        ]);
        let stack = ItemStack::from_compound(&nbt)?;

        assert_eq!(stack.item, "bow");
        assert_eq!(stack.count, 1);
        assert_eq!(stack.tag().and_then(|t| t.byte("Unbreakable")), Some(1));
        assert_eq!(stack.to_compound(), nbt);
        Ok(())
    }

    #[test]
    fn nbt_to_stack_missing_count() {
        let nbt = NbtCompound::from_values(vec![(
            "id".into(),
            NbtTag::String("minecraft:bow".into()),
        )]);
        assert!(matches!(
            ItemStack::from_compound(&nbt),
            Err(Error::MissingNbtTag("Count"))
        ));
    }
}
