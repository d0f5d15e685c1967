use tessera_core::{GRID_SIZE, SlotId, TileId};

/// Pixel geometry of the board for one lifecycle.
///
/// The tile size comes from the rendering environment; no placement rule depends on
/// its value. Each tile shows the part of the full picture found at its home slot,
/// which is expressed as an offset of the picture relative to the tile.
///
/// # Example
///
/// ```
/// use tessera_core::{SlotId, TileId};
/// use tessera_game::TileLayout;
///
/// let layout = TileLayout::new(50.0);
/// assert_eq!(layout.board_side(), 200.0);
/// assert_eq!(layout.picture_offset(TileId::new(6)), [-100.0, -50.0]);
/// assert_eq!(layout.slot_origin(SlotId::new(6)), [100.0, 50.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    tile_size: f32,
}

impl TileLayout {
    /// Smallest tile size accepted; smaller or non-finite sizes are clamped to it.
    pub const MIN_TILE_SIZE: f32 = 1.0;

    /// Creates a layout for the given tile size in pixels.
    #[must_use]
    pub fn new(tile_size: f32) -> Self {
        let tile_size = if tile_size.is_finite() {
            tile_size.max(Self::MIN_TILE_SIZE)
        } else {
            Self::MIN_TILE_SIZE
        };
        Self { tile_size }
    }

    /// Returns the edge length of one tile.
    #[must_use]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Returns the edge length of the whole board.
    #[must_use]
    pub fn board_side(&self) -> f32 {
        f32::from(GRID_SIZE) * self.tile_size
    }

    /// Returns the offset of the full picture relative to `tile`'s top-left corner.
    #[must_use]
    pub fn picture_offset(&self, tile: TileId) -> [f32; 2] {
        [
            -f32::from(tile.col()) * self.tile_size,
            -f32::from(tile.row()) * self.tile_size,
        ]
    }

    /// Returns the top-left corner of `slot` relative to the board's corner.
    #[must_use]
    pub fn slot_origin(&self, slot: SlotId) -> [f32; 2] {
        [
            f32::from(slot.col()) * self.tile_size,
            f32::from(slot.row()) * self.tile_size,
        ]
    }
}
