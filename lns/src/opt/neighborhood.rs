use strippack::entities::Item;

/// Lazy enumeration of the sequences one move away from a base sequence.
///
/// Every neighborhood owns a copy of its base sequence. An exhausted neighborhood keeps returning
/// `None`; to enumerate again, construct a new one.
#[derive(Debug, Clone)]
pub enum Neighborhood {
    /// Every pair `(i, j)` with `i < j` swapped, `i` ascending, then `j` ascending
    Swap { base: Vec<Item>, i: usize, j: usize },
    /// The rotation of every position toggled, one at a time
    Rotate { base: Vec<Item>, i: usize },
    /// All neighbors of the children, child by child
    Composite {
        children: Vec<Neighborhood>,
        cursor: usize,
    },
}

impl Neighborhood {
    pub fn swap(base: &[Item]) -> Self {
        Neighborhood::Swap {
            base: base.to_vec(),
            i: 0,
            j: 1,
        }
    }

    pub fn rotate(base: &[Item]) -> Self {
        Neighborhood::Rotate {
            base: base.to_vec(),
            i: 0,
        }
    }

    pub fn composite(children: Vec<Neighborhood>) -> Self {
        Neighborhood::Composite {
            children,
            cursor: 0,
        }
    }

    /// Rotations first, then swaps
    pub fn rotate_and_swap(base: &[Item]) -> Self {
        Neighborhood::composite(vec![Neighborhood::rotate(base), Neighborhood::swap(base)])
    }

    pub fn has_next(&self) -> bool {
        match self {
            Neighborhood::Swap { base, j, .. } => *j < base.len(),
            Neighborhood::Rotate { base, i } => *i < base.len(),
            Neighborhood::Composite { children, cursor } => {
                children[*cursor..].iter().any(|c| c.has_next())
            }
        }
    }
}

impl Iterator for Neighborhood {
    type Item = Vec<Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Neighborhood::Swap { base, i, j } => {
                if *j >= base.len() {
                    return None;
                }
                let mut neighbor = base.clone();
                neighbor.swap(*i, *j);
                *j += 1;
                if *j == base.len() {
                    *i += 1;
                    *j = *i + 1;
                }
                Some(neighbor)
            }
            Neighborhood::Rotate { base, i } => {
                if *i >= base.len() {
                    return None;
                }
                let mut neighbor = base.clone();
                neighbor[*i].rotate();
                *i += 1;
                Some(neighbor)
            }
            Neighborhood::Composite { children, cursor } => {
                while let Some(child) = children.get_mut(*cursor) {
                    if let Some(neighbor) = child.next() {
                        return Some(neighbor);
                    }
                    *cursor += 1;
                }
                None
            }
        }
    }
}
