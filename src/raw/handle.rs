use core::num::NonZeroU32;

/// Position of a node in an [`Arena`](super::arena::Arena).
///
/// Tree nodes point at their children and chain nodes at their successor through handles, so a
/// handle is only meaningful for the arena that issued it. The slot index is kept plus one,
/// leaving zero free for `None` in a [`Link`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Handle(NonZeroU32);

/// A tree child or chain successor. `None` is an empty subtree or the end of a chain.
pub(crate) type Link = Option<Handle>;

impl Handle {
    /// How many slots one arena can address.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const SLOTS: usize = u32::MAX as usize;

    /// Returns the handle for slot `index`, or `None` once `index` reaches [`Handle::SLOTS`].
    pub(crate) fn new(index: usize) -> Option<Self> {
        let shifted = u32::try_from(index).ok()?.checked_add(1)?;
        NonZeroU32::new(shifted).map(Self)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
