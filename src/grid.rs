//! Spatial lie model - a cell grid laid over one hole.

use serde::{Deserialize, Serialize};

use crate::{geometry::Point, lie::LieType, units::Yard};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// Centre of the cell in Units.
    pub position: Point,
    pub lie: LieType,
}

/// Row-major grid; rows run along the hole (y), columns across it (x).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGrid {
    cells: Vec<Vec<GridCell>>,
    width: Yard,
    length: Yard,
    cell_size: Yard,
}

impl CourseGrid {
    /// Every cell starts as fairway.
    pub fn new(width: Yard, length: Yard, cell_size: Yard) -> Self {
        let rows = cell_count(length, cell_size);
        let cols = cell_count(width, cell_size);
        let cell_units = cell_units(cell_size);
        let cells = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| GridCell {
                        position: Point::new(
                            cell_units * col as i64 + cell_units / 2,
                            cell_units * row as i64 + cell_units / 2,
                        ),
                        lie: LieType::Fairway,
                    })
                    .collect()
            })
            .collect();
        Self {
            cells,
            width,
            length,
            cell_size,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn width(&self) -> Yard {
        self.width
    }

    pub fn length(&self) -> Yard {
        self.length
    }

    pub fn cell_size(&self) -> Yard {
        self.cell_size
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.cells.get(row)?.get(col)
    }

    /// Out-of-bounds positions are a penalty area.
    pub fn lie_at(&self, pos: Point) -> LieType {
        match self.indices(pos) {
            Some((row, col)) => self.cells[row][col].lie,
            None => LieType::PenaltyArea,
        }
    }

    /// No-op outside the grid.
    pub fn set_lie_at(&mut self, pos: Point, lie: LieType) {
        if let Some((row, col)) = self.indices(pos) {
            self.cells[row][col].lie = lie;
        }
    }

    /// Paints every cell whose centre lies inside the yard rectangle spanned
    /// by the two corners (inclusive).
    pub fn paint_region(&mut self, from: (Yard, Yard), to: (Yard, Yard), lie: LieType) {
        let (x0, x1) = ordered(from.0.units().0, to.0.units().0);
        let (y0, y1) = ordered(from.1.units().0, to.1.units().0);
        for cell in self.cells.iter_mut().flatten() {
            let (x, y) = (cell.position.x as f64, cell.position.y as f64);
            if (x0..=x1).contains(&x) && (y0..=y1).contains(&y) {
                cell.lie = lie;
            }
        }
    }

    fn indices(&self, pos: Point) -> Option<(usize, usize)> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let cell_units = cell_units(self.cell_size);
        let row = (pos.y / cell_units) as usize;
        let col = (pos.x / cell_units) as usize;
        if row < self.rows() && col < self.cols() {
            Some((row, col))
        } else {
            None
        }
    }
}

fn cell_count(extent: Yard, cell_size: Yard) -> usize {
    if cell_size.0 <= 0.0 || extent.0 <= 0.0 {
        return 0;
    }
    (extent.0 / cell_size.0).ceil() as usize
}

fn cell_units(cell_size: Yard) -> i64 {
    (cell_size.units().0 as i64).max(1)
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
