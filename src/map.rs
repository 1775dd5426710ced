use std::ops::Deref;

use crate::hilbert::{hilbert, Coord, Dimension};

/// Grid cell of every curve index, computed once up front so drawing a frame
/// is a plain lookup.
#[derive(Debug, Clone)]
pub struct CurveMap {
    dimension: Dimension,
    cells: Vec<Coord>,
}

impl CurveMap {
    pub fn new(dimension: Dimension) -> CurveMap {
        let mut cells = Vec::with_capacity(dimension.cells() as usize);
        cells.extend((0..dimension.cells()).map(|i| hilbert(i, dimension)));
        CurveMap { dimension, cells }
    }

    pub fn dimension(&self) -> Dimension { self.dimension }
}

impl Deref for CurveMap {
    type Target = [Coord];
    fn deref(&self) -> &[Coord] { &self.cells }
}
