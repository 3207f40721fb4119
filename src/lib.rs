#![doc = include_str!("../readme.md")]

mod block;
mod config;
mod enchantment;
mod error;
mod lore;
mod nbt;
mod nbt_impls;
mod stack;
mod text;
mod tooltip;
mod unbreakable;

pub use block::{BlockRenderType, BlockWithEntity, VisibleBlockWithEntity};
pub use config::{LoreConfig, MalformedLore};
pub use enchantment::{Enchantment, EnchantmentMap};
pub use error::{Error, Result};
pub use nbt::{BlockState, Name, NbtString};
pub use stack::ItemStack;
pub use text::{Style, Text, TextContent};
pub use tooltip::{TooltipSection, TooltipSections};

pub use simdnbt;
