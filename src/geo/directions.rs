use crate::geo::consts::{EIGHT_POINT_COMPASS, SIXTEEN_POINT_COMPASS};
use crate::geo::models::BearingDirection;

/// Contiguous sectors covering the full circle, the first one centred on
/// north. Sector `i` spans `[i * width - width / 2, i * width + width / 2)`.
#[derive(Clone, Debug)]
pub struct Compass {
    sectors: &'static [BearingDirection],
}

impl Compass {
    pub fn eight_point() -> Self {
        Self {
            sectors: &EIGHT_POINT_COMPASS,
        }
    }

    pub fn sixteen_point() -> Self {
        Self {
            sectors: &SIXTEEN_POINT_COMPASS,
        }
    }

    /// `None` for anything other than 8 or 16 points.
    pub fn with_points(points: u8) -> Option<Self> {
        match points {
            8 => Some(Self::eight_point()),
            16 => Some(Self::sixteen_point()),
            _ => None,
        }
    }

    pub fn points(&self) -> usize {
        self.sectors.len()
    }

    pub fn sector_index(&self, bearing: f64) -> usize {
        let count = self.sectors.len();
        let width = 360.0 / count as f64;
        let normalized = bearing.rem_euclid(360.0);
        // `% count` folds the western half of the north sector back onto 0.
        ((normalized + width / 2.0) / width).floor() as usize % count
    }

    pub fn direction(&self, bearing: f64) -> BearingDirection {
        self.sectors[self.sector_index(bearing)]
    }
}

impl Default for Compass {
    fn default() -> Self {
        Self::eight_point()
    }
}
