use realm_coords::{non_decimal, Coordinate};

use crate::error::TileSheetError;

/// A tileset image split into equal square tiles.
///
/// Cells use image space: `(column, row)` with row 0 at the top. Tiles are
/// numbered row-major starting at 0, the order in which the sheet is
/// dissected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TileSheet {
    columns: u32,
    rows: u32,
    tile_px: u32,
}

impl TileSheet {
    pub fn new(columns: u32, rows: u32, tile_px: u32) -> Result<Self, TileSheetError> {
        if columns == 0 || rows == 0 {
            return Err(TileSheetError::InvalidDimensions("sheet must have at least one tile"));
        }
        if tile_px == 0 {
            return Err(TileSheetError::InvalidDimensions("tile size must be non-zero"));
        }
        if columns.checked_mul(rows).is_none() {
            return Err(TileSheetError::InvalidDimensions("too many tiles to index"));
        }
        Ok(Self { columns, rows, tile_px })
    }

    /// Sheet covering an image of the given pixel size. Partial tiles at the
    /// right and bottom edges are dropped.
    pub fn from_pixel_dimensions(
        width_px: u32,
        height_px: u32,
        tile_px: u32,
    ) -> Result<Self, TileSheetError> {
        if tile_px == 0 {
            return Err(TileSheetError::InvalidDimensions("tile size must be non-zero"));
        }
        if width_px % tile_px != 0 || height_px % tile_px != 0 {
            log::debug!(
                "{width_px}x{height_px} image is not a multiple of {tile_px}px tiles; dropping partial tiles"
            );
        }
        Self::new(width_px / tile_px, height_px / tile_px, tile_px)
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn tile_px(&self) -> u32 {
        self.tile_px
    }

    /// Number of tiles in the sheet.
    #[inline]
    pub fn len(&self) -> u32 {
        // Checked in `new`.
        self.columns * self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index_of(&self, cell: Coordinate) -> Result<u32, TileSheetError> {
        let (x, y) = cell.to_grid().ok_or(TileSheetError::NotGridAligned(cell))?;

        let column = u32::try_from(x).ok().filter(|&c| c < self.columns);
        let row = u32::try_from(y).ok().filter(|&r| r < self.rows);
        match (column, row) {
            (Some(column), Some(row)) => Ok(row * self.columns + column),
            _ => Err(TileSheetError::OutOfSheet {
                cell,
                columns: self.columns,
                rows: self.rows,
            }),
        }
    }

    pub fn cell_of(&self, index: u32) -> Result<Coordinate, TileSheetError> {
        if index >= self.len() {
            return Err(TileSheetError::IndexOutOfRange { index, len: self.len() });
        }
        Ok(non_decimal::from_grid(
            i64::from(index % self.columns),
            i64::from(index / self.columns),
        ))
    }

    /// Pixel offset of a tile's top-left corner within the image.
    pub fn pixel_origin(&self, index: u32) -> Result<(u64, u64), TileSheetError> {
        let cell = self.cell_of(index)?;
        let tile = u64::from(self.tile_px);
        Ok((cell.x() as u64 * tile, cell.y() as u64 * tile))
    }

    /// Tile indices for the block starting at `top_left` and spanning `width`
    /// further columns and `height` further rows (both inclusive), one row per
    /// inner vector.
    pub fn indices_in(
        &self,
        top_left: Coordinate,
        width: u32,
        height: u32,
    ) -> Result<Vec<Vec<u32>>, TileSheetError> {
        let first = self.index_of(top_left)?;
        let (x0, y0) = (first % self.columns, first / self.columns);

        // Reports the first cell past the sheet edge on the axis that overflowed.
        let out_of_sheet = |x: u32, y: u32| TileSheetError::OutOfSheet {
            cell: non_decimal::from_grid(i64::from(x), i64::from(y)),
            columns: self.columns,
            rows: self.rows,
        };
        let x1 = x0
            .checked_add(width)
            .filter(|&x| x < self.columns)
            .ok_or_else(|| out_of_sheet(self.columns, y0))?;
        let y1 = y0
            .checked_add(height)
            .filter(|&y| y < self.rows)
            .ok_or_else(|| out_of_sheet(x0, self.rows))?;

        Ok((y0..=y1)
            .map(|row| (x0..=x1).map(|column| row * self.columns + column).collect())
            .collect())
    }

    /// Every cell in dissection order.
    pub fn cells(self) -> impl Iterator<Item = Coordinate> {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| non_decimal::from_grid(i64::from(column), i64::from(row)))
        })
    }
}
