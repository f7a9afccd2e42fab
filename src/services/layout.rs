use rand::Rng;

use crate::config::Config;

/// Marker position on the simulated map, in percent of the map box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

/// Lays markers out on a three-column grid with a little jitter.
///
/// Position comes from the bin's index in the collection, not its real
/// coordinate.
pub fn grid_position<R: Rng + ?Sized>(index: usize, rng: &mut R) -> MapPosition {
    let column = (index % Config::MAP_COLUMNS) as f64;
    let row = (index / Config::MAP_COLUMNS) as f64;

    MapPosition {
        x: Config::MAP_ORIGIN + column * Config::MAP_COLUMN_SPACING
            + rng.gen_range(0.0..Config::MAP_JITTER),
        y: Config::MAP_ORIGIN + row * Config::MAP_ROW_SPACING + rng.gen_range(0.0..Config::MAP_JITTER),
    }
}

pub fn layout<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<MapPosition> {
    (0..count).map(|i| grid_position(i, rng)).collect()
}

/// Circumference of the fill ring drawn around each marker
pub const FILL_RING_LENGTH: f64 = 113.0;

/// SVG `stroke-dasharray` for a fill ring at `fill_level` percent
pub fn fill_ring_dasharray(fill_level: f64) -> String {
    let filled = fill_level.clamp(0.0, 100.0) / 100.0 * FILL_RING_LENGTH;
    format!("{filled:.1} {FILL_RING_LENGTH}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_grid_cells() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let positions = layout(6, &mut rng);

        let cell = |i: usize| {
            let p = positions[i];
            ((p.x - 20.0) / 30.0).floor() as i32 * 10 + ((p.y - 20.0) / 25.0).floor() as i32
        };
        // column*10 + row
        assert_eq!(
            (0..6).map(cell).collect::<Vec<_>>(),
            vec![0, 10, 20, 1, 11, 21]
        );
    }

    #[test]
    fn test_jitter_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for i in 0..300 {
            let p = grid_position(i, &mut rng);
            let base_x = 20.0 + (i % 3) as f64 * 30.0;
            let base_y = 20.0 + (i / 3) as f64 * 25.0;
            assert!(p.x >= base_x && p.x < base_x + 10.0);
            assert!(p.y >= base_y && p.y < base_y + 10.0);
        }
    }

    #[test]
    fn test_fill_ring_dasharray() {
        assert_eq!(fill_ring_dasharray(0.0), "0.0 113");
        assert_eq!(fill_ring_dasharray(50.0), "56.5 113");
        assert_eq!(fill_ring_dasharray(120.0), "113.0 113");
    }
}
