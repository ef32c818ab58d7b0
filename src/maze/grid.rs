use crate::error::Error;

/// Dense row-major storage backing a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    pub data: Box<[T]>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Grid<T> {
    /// Allocates a `rows` x `cols` grid filled with `value`.
    /// Reports allocation failure instead of aborting.
    pub fn try_new(rows: usize, cols: usize, value: T) -> Result<Self, Error> {
        let len = rows
            .checked_mul(cols)
            .ok_or(Error::TooLarge { rows, cols })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::OutOfMemory { rows, cols })?;
        data.resize(len, value);
        Ok(Grid {
            data: data.into_boxed_slice(),
            rows,
            cols,
        })
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> Grid<T> {
    /// A grid with no cells.
    pub fn empty() -> Self {
        Grid {
            data: Box::new([]),
            rows: 0,
            cols: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, (row, col): (usize, usize)) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn ravel_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn unravel_index(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    pub fn get(&self, pos: (usize, usize)) -> Option<&T> {
        if self.is_in_bounds(pos) {
            Some(&self.data[self.ravel_index(pos.0, pos.1)])
        } else {
            None
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T> std::ops::Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}
