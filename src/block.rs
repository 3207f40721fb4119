//! `block` contains the block entity helpers, mainly [`VisibleBlockWithEntity`].

use crate::{BlockState, Name};
use simdnbt::owned::{NbtCompound, NbtTag};

/// How the client should render a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRenderType {
    /// Nothing is drawn from the block model, a block entity renderer has to do it.
    Invisible,
    /// The block model is drawn while the block entity animates (chests, bells).
    EntityBlockAnimated,
    /// The regular block model.
    Model,
}

/// A block that has a block entity attached to it.
///
/// By default these render as [`BlockRenderType::Invisible`] and need
/// a block entity renderer to show up at all.
pub trait BlockWithEntity {
    /// The id of the block entity this block creates, like `minecraft:chest`.
    fn block_entity_id(&self) -> Name;

    fn render_type(&self, _state: &BlockState) -> BlockRenderType {
        BlockRenderType::Invisible
    }

    /// The initial block entity data for a newly placed block.
    fn create_block_entity(&self, _state: &BlockState) -> NbtCompound {
        NbtCompound::from_values(vec![(
            "id".into(),
            NbtTag::String(self.block_entity_id().into_namespaced().into()),
        )])
    }
}

/// Wraps a [`BlockWithEntity`] so it renders with its regular block model,
/// no block entity renderer needed.
///
/// Everything else is passed through to the inner block.
///
/// ## Example
/// ```no_run
/// struct Safe;
/// impl BlockWithEntity for Safe {
///     fn block_entity_id(&self) -> Name {
///         Name::new_id("my_mod:safe")
///     }
/// }
///
/// let safe = VisibleBlockWithEntity::new(Safe);
/// assert_eq!(safe.render_type(&BlockState::new("my_mod:safe")), BlockRenderType::Model);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleBlockWithEntity<B>(pub B);

impl<B: BlockWithEntity> VisibleBlockWithEntity<B> {
    pub fn new(block: B) -> Self {
        VisibleBlockWithEntity(block)
    }

    pub fn into_inner(self) -> B {
        self.0
    }
}

impl<B: BlockWithEntity> BlockWithEntity for VisibleBlockWithEntity<B> {
    fn block_entity_id(&self) -> Name {
        self.0.block_entity_id()
    }

    fn render_type(&self, _state: &BlockState) -> BlockRenderType {
        BlockRenderType::Model
    }

    fn create_block_entity(&self, state: &BlockState) -> NbtCompound {
        self.0.create_block_entity(state)
    }
}
