//! The procedural picture that the tiles are cut from.

use std::f32::consts::TAU;

use eframe::egui::{Color32, Painter, Pos2, Rect, Shape, Vec2, epaint::Mesh};

/// Number of color cells along each side of a tile.
const CELLS_PER_TILE: u16 = 8;

/// Returns the picture color at normalized board coordinates.
///
/// `(0, 0)` is the board's top-left corner and `(1, 1)` its bottom-right.
#[must_use]
pub(crate) fn picture_color(uv: Vec2) -> Color32 {
    let centered = uv - Vec2::splat(0.5);
    let radius = centered.length();
    let phase = 0.6 * uv.x + 0.4 * uv.y + 0.15 * (radius * TAU * 3.0).sin();
    let shade = if (radius * 10.0).rem_euclid(2.0) < 1.0 {
        1.0
    } else {
        0.8
    };
    let channel = |offset: f32| to_channel((0.5 + 0.5 * (TAU * (phase + offset)).cos()) * shade);
    Color32::from_rgb(channel(0.0), channel(0.33), channel(0.67))
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Maps a screen position to normalized board coordinates, given where the
/// picture's top-left corner sits for the tile being drawn.
#[must_use]
pub(crate) fn picture_uv(pos: Pos2, picture_origin: Pos2, board_side: f32) -> Vec2 {
    (pos - picture_origin) / board_side
}

/// Paints the part of the picture that belongs to a tile into `tile_rect`.
///
/// `picture_offset` is the tile's offset into the picture, so the same tile
/// shows the same part wherever it is drawn.
pub(crate) fn paint_tile_picture(
    painter: &Painter,
    tile_rect: Rect,
    picture_offset: Vec2,
    board_side: f32,
) {
    let picture_origin = tile_rect.min + picture_offset;
    let cell = tile_rect.size() / f32::from(CELLS_PER_TILE);
    let mut mesh = Mesh::default();
    for row in 0..CELLS_PER_TILE {
        for col in 0..CELLS_PER_TILE {
            let min = tile_rect.min + cell * Vec2::new(f32::from(col), f32::from(row));
            let cell_rect = Rect::from_min_size(min, cell);
            let uv = picture_uv(cell_rect.center(), picture_origin, board_side);
            mesh.add_colored_rect(cell_rect, picture_color(uv));
        }
    }
    painter.add(Shape::mesh(mesh));
}

#[cfg(test)]
mod tests {
    use tessera_core::TileId;
    use tessera_game::TileLayout;

    use super::*;

    #[test]
    fn test_tile_shows_its_own_part_wherever_drawn() {
        let layout = TileLayout::new(40.0);
        let tile = TileId::new(6);
        let offset = Vec2::from(layout.picture_offset(tile));

        for min in [Pos2::new(0.0, 0.0), Pos2::new(300.0, 17.0)] {
            let tile_rect = Rect::from_min_size(min, Vec2::splat(40.0));
            let origin = tile_rect.min + offset;
            let top_left = picture_uv(tile_rect.min, origin, layout.board_side());
            let bottom_right = picture_uv(tile_rect.max, origin, layout.board_side());

            assert!((top_left - Vec2::new(0.5, 0.25)).length() < 1e-5);
            assert!((bottom_right - Vec2::new(0.75, 0.5)).length() < 1e-5);
        }
    }

    #[test]
    fn test_picture_varies_across_board() {
        let colors = [
            picture_color(Vec2::new(0.1, 0.1)),
            picture_color(Vec2::new(0.9, 0.1)),
            picture_color(Vec2::new(0.1, 0.9)),
            picture_color(Vec2::new(0.9, 0.9)),
        ];
        assert!(colors.windows(2).any(|pair| pair[0] != pair[1]));
        assert_eq!(
            picture_color(Vec2::new(0.3, 0.7)),
            picture_color(Vec2::new(0.3, 0.7))
        );
    }
}
