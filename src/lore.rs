//! `lore` handles reading and writing `display.Lore`, a list of JSON encoded [`Text`] lines.

use crate::{ItemStack, LoreConfig, MalformedLore, Text};
use simdnbt::{
    Mutf8String,
    owned::{NbtList, NbtTag},
};

impl ItemStack {
    pub const DISPLAY: &'static str = "display";
    pub const LORE: &'static str = "Lore";

    /// The raw lore strings, `None` if the stack is empty or there's no list of strings at `display.Lore`
    fn lore_strings(&self) -> Option<&[Mutf8String]> {
        if self.is_empty() {
            return None;
        }
        match self.sub_tag(Self::DISPLAY)?.list(Self::LORE)? {
            NbtList::String(lines) => Some(lines.as_slice()),
            NbtList::Empty => Some(&[][..]),
            _ => None,
        }
    }

    /// The lore lines of the stack, in order.
    ///
    /// Empty if there's no lore, lines that aren't valid text JSON are skipped.
    pub fn lore(&self) -> Vec<Text> {
        self.lore_with_config(&LoreConfig::default())
    }

    /// Like [`Self::lore`] but with control over how malformed lines are handled.
    pub fn lore_with_config(&self, config: &LoreConfig) -> Vec<Text> {
        let Some(lines) = self.lore_strings() else {
            return Vec::new();
        };

        let mut lore = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            let line = line.as_str().to_str();
            match Text::from_json(&line) {
                Ok(text) => lore.push(text),
                Err(e) => match config.malformed {
                    MalformedLore::Skip => {
                        tracing::warn!(index, error = %e, "skipping malformed lore line");
                    }
                    MalformedLore::Literal => lore.push(Text::literal(line.into_owned())),
                },
            }
        }

        lore
    }

    /// Writes `lines` to the lore list, after clearing it if `clear` is set.
    ///
    /// A lore entry that isn't a list of strings is replaced.
    fn push_lore<I: IntoIterator<Item = Text>>(&mut self, lines: I, clear: bool) -> &mut Self {
        self.with_sub_tag(Self::DISPLAY, |display| {
            let mut lore = match display.get_mut(Self::LORE) {
                Some(NbtTag::List(NbtList::String(existing))) => std::mem::take(existing),
                Some(NbtTag::List(NbtList::Empty)) | None => Vec::new(),
                Some(_) => {
                    tracing::debug!("replacing lore that isn't a list of strings");
                    Vec::new()
                }
            };

            if clear {
                lore.clear();
            }
            lore.extend(lines.into_iter().map(|line| Mutf8String::from(line.to_json().as_str())));
            crate::stack::put(display, Self::LORE, NbtTag::List(NbtList::String(lore)));
        });
        self
    }

    /// Replaces the lore of the stack.
    ///
    /// Takes anything iterable, so arrays work for a fixed number of lines.
    ///
    /// ## Example
    /// ```no_run
    /// let mut stack = ItemStack::new("totem_of_undying", 1);
    /// stack.set_lore([Text::literal("Cheats death"), Text::literal("once").italic(true)]);
    /// ```
    pub fn set_lore<I: IntoIterator<Item = Text>>(&mut self, lines: I) -> &mut Self {
        self.push_lore(lines, true)
    }

    /// Appends lines to the existing lore of the stack.
    pub fn add_lore<I: IntoIterator<Item = Text>>(&mut self, lines: I) -> &mut Self {
        self.push_lore(lines, false)
    }
}
