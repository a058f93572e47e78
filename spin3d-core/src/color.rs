//! Palette indices handed through to the output surface
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Number of entries in the fixed display palette
pub const PALETTE_SIZE: u8 = 16;

/// An opaque color index into the display palette.
///
/// The pipeline never inspects or blends colors; it only carries the index
/// from a face to the pixels that face covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColorIndex(pub(crate) u8);

impl ColorIndex {
    pub const BACKGROUND: ColorIndex = ColorIndex(0);

    pub const fn new(index: u8) -> Option<Self> {
        if index < PALETTE_SIZE {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ColorIndex {
    type Error = MeshError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(MeshError::ColorOutOfPalette(index))
    }
}

impl From<ColorIndex> for u8 {
    fn from(color: ColorIndex) -> u8 {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_bounds() {
        assert_eq!(ColorIndex::new(0), Some(ColorIndex::BACKGROUND));
        assert_eq!(ColorIndex::new(15).map(ColorIndex::index), Some(15));
        assert_eq!(ColorIndex::new(16), None);
        assert_eq!(
            ColorIndex::try_from(200u8),
            Err(MeshError::ColorOutOfPalette(200))
        );
    }
}
