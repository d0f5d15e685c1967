//! Fixed-size containers indexed by tile or slot identity.

use std::{
    fmt::{self, Debug},
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use crate::{
    TILE_COUNT,
    index::{Index16, Index16Semantics},
};

/// A 16-element array indexed through [`Index16Semantics`].
///
/// # Examples
///
/// ```
/// use tessera_core::{SlotId, containers::Array16, index::SlotSemantics};
///
/// let mut occupied = Array16::<bool, SlotSemantics>::from_array([false; 16]);
/// occupied[SlotId::new(3)] = true;
/// assert!(occupied[SlotId::new(3)]);
/// assert_eq!(occupied.iter().filter(|b| **b).count(), 1);
/// ```
pub struct Array16<T, S> {
    array: [T; TILE_COUNT],
    _semantics: PhantomData<S>,
}

impl<T, S> Array16<T, S> {
    /// Creates an array from raw values in index order.
    #[must_use]
    pub const fn from_array(array: [T; TILE_COUNT]) -> Self {
        Self {
            array,
            _semantics: PhantomData,
        }
    }

    /// Returns the values in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.array.iter()
    }

    /// Returns mutable references to the values in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.array.iter_mut()
    }
}

impl<T, S> Array16<T, S>
where
    S: Index16Semantics,
{
    /// Returns `(key, value)` pairs in index order.
    pub fn entries(&self) -> impl Iterator<Item = (S::Value, &T)> {
        Index16::all()
            .zip(&self.array)
            .map(|(index, value)| (S::from_index(index), value))
    }
}

impl<T, S> Index<S::Value> for Array16<T, S>
where
    S: Index16Semantics,
{
    type Output = T;

    fn index(&self, value: S::Value) -> &Self::Output {
        &self.array[usize::from(S::to_index(value).index())]
    }
}

impl<T, S> IndexMut<S::Value> for Array16<T, S>
where
    S: Index16Semantics,
{
    fn index_mut(&mut self, value: S::Value) -> &mut Self::Output {
        &mut self.array[usize::from(S::to_index(value).index())]
    }
}

impl<T: Clone, S> Clone for Array16<T, S> {
    fn clone(&self) -> Self {
        Self::from_array(self.array.clone())
    }
}

impl<T: PartialEq, S> PartialEq for Array16<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<T: Eq, S> Eq for Array16<T, S> {}

impl<T: Debug, S> Debug for Array16<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.array).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SlotId, TileId, index::TileSemantics};

    #[test]
    fn test_index_by_identity() {
        let mut array = Array16::<u8, TileSemantics>::from_array([0; TILE_COUNT]);
        for tile in TileId::ALL {
            array[tile] = tile.id() * 2;
        }
        assert_eq!(array[TileId::new(0)], 0);
        assert_eq!(array[TileId::new(15)], 30);
    }

    #[test]
    fn test_entries_pair_keys_with_values() {
        let array = Array16::<Option<TileId>, crate::index::SlotSemantics>::from_array(
            std::array::from_fn(|i| (i % 2 == 0).then(|| TileId::new(u8::try_from(i).unwrap()))),
        );
        for (slot, occupant) in array.entries() {
            assert_eq!(occupant.is_some(), slot.id() % 2 == 0);
            if let Some(tile) = occupant {
                assert_eq!(tile.home_slot(), slot);
            }
        }
        assert_eq!(array.entries().count(), TILE_COUNT);
        assert_eq!(array.entries().next().map(|(slot, _)| slot), Some(SlotId::new(0)));
    }
}
