use std::collections::TryReserveError;

/// Union-find forest over cell indices, used while carving a maze.
///
/// No union by rank: the generator touches each cell a bounded number of times and
/// path compression alone keeps the trees shallow.
pub struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    /// Creates `len` singleton sets. Reports allocation failure instead of aborting.
    pub fn try_new(len: usize) -> Result<Self, TryReserveError> {
        let mut parent = Vec::new();
        parent.try_reserve_exact(len)?;
        parent.extend(0..len);
        Ok(DisjointSets { parent })
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `x`, pointing every node
    /// on the way directly at it.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`; the root of `y`'s set becomes the root of both.
    /// Returns `false` if they were already joined.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }
        self.parent[root_x] = root_y;
        true
    }

    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}
