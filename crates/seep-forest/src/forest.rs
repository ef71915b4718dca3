//! Union-find with path compression and union-by-size.

use seep_core::ForestError;

/// A disjoint-set forest over the elements `0..len`.
///
/// Each element starts in its own singleton tree. `parent[i] == i` iff `i`
/// is a root, and `size[r]` is meaningful only at a root `r`, where it holds
/// the number of elements in that tree. The sum of root sizes is always
/// `len`, and the forest never grows, shrinks, or splits a tree.
///
/// # Tie-break
///
/// When two trees of equal size are merged, the root of `b` is attached
/// under the root of `a` (`a`'s root survives). This fixes tree shape for a
/// given sequence of unions.
///
/// # Examples
///
/// ```
/// use seep_forest::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4).unwrap();
/// forest.union(0, 1).unwrap();
/// forest.union(2, 1).unwrap();
/// assert!(forest.connected(0, 2).unwrap());
/// assert_eq!(forest.size_of(2).unwrap(), 3);
/// assert_eq!(forest.component_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSetForest {
    /// Create a forest of `len` singleton trees.
    ///
    /// Returns `Err(ForestError::Empty)` if `len` is 0, or
    /// `Err(ForestError::TooLarge)` if the element arrays cannot be
    /// allocated.
    pub fn new(len: usize) -> Result<Self, ForestError> {
        if len == 0 {
            return Err(ForestError::Empty);
        }
        let mut parent = Vec::new();
        let mut size = Vec::new();
        parent
            .try_reserve_exact(len)
            .and_then(|()| size.try_reserve_exact(len))
            .map_err(|_| ForestError::TooLarge { len })?;
        parent.extend(0..len);
        size.resize(len, 1);
        Ok(Self {
            parent,
            size,
            components: len,
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always returns `false`: construction rejects empty forests.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of distinct trees.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// The raw parent pointer of `i` (the element itself for a root).
    ///
    /// Reflects whatever compression earlier `find` calls have applied.
    pub fn parent(&self, i: usize) -> Result<usize, ForestError> {
        self.check(i)?;
        Ok(self.parent[i])
    }

    /// Root of the tree containing `i`, compressing the path to it.
    ///
    /// Every node visited on the way up is re-pointed directly at the root,
    /// so a repeated `find` from any of them is a single hop.
    pub fn find(&mut self, i: usize) -> Result<usize, ForestError> {
        self.check(i)?;
        Ok(self.find_root(i))
    }

    /// Merge the trees containing `a` and `b`.
    ///
    /// Returns `Ok(true)` if two distinct trees were merged, `Ok(false)` if
    /// `a` and `b` already shared a root. The smaller tree's root is attached
    /// under the larger's; on equal sizes `a`'s root survives.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool, ForestError> {
        self.check(a)?;
        self.check(b)?;
        let ra = self.find_root(a);
        let rb = self.find_root(b);
        if ra == rb {
            return Ok(false);
        }
        let (root, child) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.components -= 1;
        Ok(true)
    }

    /// Whether `a` and `b` are in the same tree.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool, ForestError> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.find_root(a) == self.find_root(b))
    }

    /// Number of elements in the tree containing `i`.
    pub fn size_of(&mut self, i: usize) -> Result<usize, ForestError> {
        self.check(i)?;
        let root = self.find_root(i);
        Ok(self.size[root])
    }

    fn check(&self, i: usize) -> Result<(), ForestError> {
        if i >= self.parent.len() {
            return Err(ForestError::IndexOutOfBounds {
                index: i,
                len: self.parent.len(),
            });
        }
        Ok(())
    }

    /// Two-pass compression: walk to the root, then rewrite the path.
    fn find_root(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = i;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }
}
