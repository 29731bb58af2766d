//! Cloth: a grid of points with structural, shear and bend links.

use crate::error::{Result, VerletError};
use crate::float::Float;
use crate::vec::Vec3;
use crate::verlet::Verlet;
use alloc::vec::Vec as AllocVec;

/// Layout of a cloth grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClothConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    /// Distance between neighbouring points.
    pub spacing: F,
    /// Add both diagonals of every cell.
    pub shear: bool,
    /// Add skip-one links along rows and columns.
    pub bend: bool,
}

impl<F: Float> ClothConfig<F> {
    /// A `cols` by `rows` grid with shear links and no bend links.
    pub fn new(cols: usize, rows: usize, spacing: F) -> Self {
        ClothConfig { cols, rows, spacing, shear: true, bend: false }
    }

    /// Enable or disable diagonal links.
    pub fn with_shear(mut self, shear: bool) -> Self {
        self.shear = shear;
        self
    }

    /// Enable or disable skip-one links.
    pub fn with_bend(mut self, bend: bool) -> Self {
        self.bend = bend;
        self
    }
}

/// Handle to a cloth built inside a [`Verlet`] engine.
///
/// The point at `(col, row)` has engine id `first + row * cols + col`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cloth {
    first: usize,
    cols: usize,
    rows: usize,
}

impl Cloth {
    /// Build a grid starting at `origin`, columns running along `across` and
    /// rows along `down` (both normalised, then scaled by the spacing).
    ///
    /// Fails without creating anything if the engine lacks room.
    pub fn build<F: Float>(
        verlet: &mut Verlet<F>,
        origin: Vec3<F>,
        across: Vec3<F>,
        down: Vec3<F>,
        config: &ClothConfig<F>,
    ) -> Result<Self> {
        let cols = config.cols.max(2);
        let rows = config.rows.max(2);
        let capacity = verlet.capacity();
        cols.checked_mul(rows)
            .and_then(|n| verlet.len().checked_add(n))
            .filter(|&total| total <= capacity)
            .ok_or(VerletError::CapacityExceeded { capacity })?;

        let step_col = across.normalize_or_zero().scale(config.spacing);
        let step_row = down.normalize_or_zero().scale(config.spacing);
        let first = verlet.len();
        for row in 0..rows {
            for col in 0..cols {
                let pos = origin
                    + step_col.scale(F::from_usize(col))
                    + step_row.scale(F::from_usize(row));
                verlet.create_point(pos)?;
            }
        }

        let cloth = Cloth { first, cols, rows };
        let id = |col: usize, row: usize| first + row * cols + col;

        // Structural
        for row in 0..rows {
            for col in 0..cols - 1 {
                verlet.create_link(id(col, row), id(col + 1, row))?;
            }
        }
        for row in 0..rows - 1 {
            for col in 0..cols {
                verlet.create_link(id(col, row), id(col, row + 1))?;
            }
        }

        if config.shear {
            for row in 0..rows - 1 {
                for col in 0..cols - 1 {
                    verlet.create_link(id(col, row), id(col + 1, row + 1))?;
                    verlet.create_link(id(col + 1, row), id(col, row + 1))?;
                }
            }
        }

        if config.bend {
            for row in 0..rows {
                for col in 0..cols.saturating_sub(2) {
                    verlet.create_link(id(col, row), id(col + 2, row))?;
                }
            }
            for row in 0..rows.saturating_sub(2) {
                for col in 0..cols {
                    verlet.create_link(id(col, row), id(col, row + 2))?;
                }
            }
        }

        log::debug!(
            "built {}x{} cloth at point {} ({} links total)",
            cols,
            rows,
            first,
            verlet.link_count()
        );
        Ok(cloth)
    }

    /// Engine id of the point at `(col, row)`.
    pub fn index(&self, col: usize, row: usize) -> usize {
        self.first + row * self.cols + col
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn point_count(&self) -> usize { self.cols * self.rows }

    /// Pin every point of row 0 where it is.
    pub fn pin_top_row<F: Float>(&self, verlet: &mut Verlet<F>) -> Result<()> {
        for col in 0..self.cols {
            verlet.create_pin(self.index(col, 0))?;
        }
        Ok(())
    }

    /// Sever every link at `(col, row)`. Returns the number of links removed.
    pub fn tear_at<F: Float>(&self, verlet: &mut Verlet<F>, col: usize, row: usize) -> usize {
        if col >= self.cols || row >= self.rows {
            return 0;
        }
        verlet.remove_links_at(self.index(col, row))
    }

    /// Two triangles per cell as engine point ids, for the renderer's index buffer.
    pub fn triangles(&self) -> AllocVec<[usize; 3]> {
        let mut tris = AllocVec::with_capacity((self.cols - 1) * (self.rows - 1) * 2);
        for row in 0..self.rows - 1 {
            for col in 0..self.cols - 1 {
                let tl = self.index(col, row);
                let tr = self.index(col + 1, row);
                let bl = self.index(col, row + 1);
                let br = self.index(col + 1, row + 1);
                tris.push([tl, bl, tr]);
                tris.push([tr, bl, br]);
            }
        }
        tris
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(config: ClothConfig<f32>) -> (Verlet<f32>, Cloth) {
        let mut v = Verlet::new(64);
        let cloth = Cloth::build(
            &mut v,
            Vec3::zero(),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            &config,
        )
        .unwrap();
        (v, cloth)
    }

    #[test]
    fn link_counts_per_layout() {
        // 4 cols x 3 rows: horizontal 9, vertical 8, shear 12, bend 6 + 4.
        let (v, _) = build(ClothConfig::new(4, 3, 1.0).with_shear(false));
        assert_eq!(v.link_count(), 17);
        let (v, _) = build(ClothConfig::new(4, 3, 1.0));
        assert_eq!(v.link_count(), 29);
        let (v, _) = build(ClothConfig::new(4, 3, 1.0).with_bend(true));
        assert_eq!(v.link_count(), 39);
    }

    #[test]
    fn tear_at_interior_removes_all_links() {
        let (mut v, cloth) = build(ClothConfig::new(4, 3, 1.0));
        let centre = cloth.index(1, 1);
        // 4 structural + 4 diagonals.
        assert_eq!(v.incident_links(centre).len(), 8);
        assert_eq!(cloth.tear_at(&mut v, 1, 1), 8);
        assert_eq!(cloth.tear_at(&mut v, 1, 1), 0);
        assert!(v.incident_links(centre).is_empty());
        assert_eq!(v.link_count(), 21);
    }

    #[test]
    fn oversized_grid_is_rejected_without_side_effects() {
        let mut v: Verlet<f32> = Verlet::new(64);
        // The point count wraps to zero in unchecked arithmetic.
        let side = 1usize << (usize::BITS / 2);
        let config = ClothConfig::new(side, side, 1.0);
        let err = Cloth::build(
            &mut v,
            Vec3::zero(),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            &config,
        )
        .unwrap_err();
        assert_eq!(err, VerletError::CapacityExceeded { capacity: 64 });
        assert!(v.is_empty(), "no points left behind");
        assert_eq!(v.link_count(), 0);
    }

    #[test]
    fn triangles_cover_every_cell() {
        let (_, cloth) = build(ClothConfig::new(3, 3, 1.0));
        let tris = cloth.triangles();
        assert_eq!(tris.len(), 8);
        assert_eq!(tris[0], [0, 3, 1]);
    }
}
