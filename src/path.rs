use crate::{EdgeID, Graph, NodeID};

use std::sync::Arc;

/// The Type used for the Cost of Edges and Paths
pub type Cost = f32;

/// A Path through a Graph
///
/// Stores a sequence of Steps (usually [`EdgeID`]s) and the total Cost of traversing them.
///
/// A Path can be reversed without copying the underlying Steps. The A* Search uses this to
/// collect the Edges while walking backwards from the goal and still hand out a Path that
/// iterates from the start to the goal.
#[derive(Clone)]
pub struct Path<P> {
    path: Arc<[P]>,
    cost: Cost,
    is_reversed: bool,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Steps and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use weighted_pathfinding::Path;
    /// let path = Path::new(vec![4, 2, 0], 4.5);
    ///
    /// assert_eq!(path, vec![4, 2, 0]);
    /// assert_eq!(path.cost(), 4.5);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            path: path.into(),
            cost,
            is_reversed: false,
        }
    }

    /// creates a new Path by copying the Steps in `path`
    pub fn from_slice(path: &[P], cost: Cost) -> Path<P>
    where
        P: Clone,
    {
        Path {
            path: path.into(),
            cost,
            is_reversed: false,
        }
    }

    /// A Path without any Steps and a Cost of `0`
    pub fn empty() -> Path<P> {
        Path::new(Vec::new(), 0.0)
    }

    /// the total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// the number of Steps in the Path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path has no Steps
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns the same Path in the opposite direction. The Steps are shared, not copied.
    /// ## Examples
    /// ```
    /// # use weighted_pathfinding::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 3.0);
    /// let reversed = path.reversed();
    ///
    /// assert_eq!(reversed, vec!['c', 'b', 'a']);
    /// assert_eq!(reversed.reversed(), path);
    /// ```
    pub fn reversed(&self) -> Path<P> {
        Path {
            path: self.path.clone(),
            cost: self.cost,
            is_reversed: !self.is_reversed,
        }
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> Iter<P> {
        Iter {
            iter: self.path.iter(),
            reversed: self.is_reversed,
        }
    }
}

impl Path<EdgeID> {
    /// Lists the Nodes visited along the Path, including the first source and the last sink.
    ///
    /// An empty Path has no Edges to read the Nodes from, so the result is empty as well.
    /// ## Examples
    /// ```
    /// # use weighted_pathfinding::prelude::*;
    /// let graph = DirectedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0)]);
    /// let path = find_path(0, 2, &graph, &ZeroHeuristic).unwrap();
    ///
    /// assert_eq!(path.nodes(&graph), vec![0, 1, 2]);
    /// ```
    pub fn nodes<G: Graph + ?Sized>(&self, graph: &G) -> Vec<NodeID> {
        let mut nodes = Vec::with_capacity(self.len() + 1);
        let mut steps = self.iter();
        if let Some(&first) = steps.next() {
            let edge = graph.edge(first);
            nodes.push(edge.source);
            nodes.push(edge.sink);
        }
        nodes.extend(steps.map(|&id| graph.edge(id).sink));
        nodes
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        let index = if self.is_reversed {
            self.path.len() - index - 1
        } else {
            index
        };
        &self.path[index]
    }
}

/// An Iterator over the Steps of a [`Path`], created by [`Path::iter`]
#[derive(Debug)]
pub struct Iter<'a, P> {
    iter: std::slice::Iter<'a, P>,
    reversed: bool,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;
    fn next(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.iter.next_back()
        } else {
            self.iter.next()
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<P> DoubleEndedIterator for Iter<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.iter.next()
        } else {
            self.iter.next_back()
        }
    }
}
impl<P> ExactSizeIterator for Iter<'_, P> {}
impl<P> std::iter::FusedIterator for Iter<'_, P> {}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;
    fn into_iter(self) -> Iter<'a, P> {
        self.iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        // we can't just use slice's eq because self might be reversed
        self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

// compares the Steps in iteration order, regardless of how they are stored
impl<P: PartialEq> PartialEq for Path<P> {
    fn eq(&self, rhs: &Path<P>) -> bool {
        self.cost == rhs.cost && self.len() == rhs.len() && self.iter().eq(rhs.iter())
    }
}

use std::cmp::Ordering;

/// Paths are ordered by their Cost. Different Paths with the same Cost are not comparable.
impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        match self.cost.partial_cmp(&other.cost)? {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

use std::fmt;
impl<P: fmt::Debug> fmt::Debug for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Path")
            .field("steps", &self.iter().collect::<Vec<_>>())
            .field("cost", &self.cost)
            .finish()
    }
}

impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        let mut steps = self.iter();
        match steps.next() {
            None => write!(fmt, "<empty>"),
            Some(first) => {
                write!(fmt, "{}", first)?;
                for p in steps {
                    write!(fmt, " -> {}", p)?;
                }
                Ok(())
            }
        }
    }
}
