//! The result type of a shortest-path query.

/// A sequence of Nodes and the total cost of traversing them.
///
/// Produced by [`dijkstra_search`](crate::dijkstra_search), ordered from the
/// origin to the target. The individual costs of the steps within the Path
/// cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: f32,
}

impl<P> Path<P> {
    /// Creates a new Path with the given sequence of Nodes and total cost.
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waygraph::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 42.0);
    ///
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.cost(), 42.0);
    /// ```
    pub fn new(path: Vec<P>, cost: f32) -> Path<P> {
        Path { path, cost }
    }

    /// Creates a Path with no steps and zero cost.
    ///
    /// Assigned to a follower when its target turned out to be unreachable,
    /// so that no stale steps survive a failed solve.
    pub fn empty() -> Path<P> {
        Path {
            path: Vec::new(),
            cost: 0.0,
        }
    }

    /// the total cost of the Path
    pub fn cost(&self) -> f32 {
        self.cost
    }

    /// the number of Nodes on the Path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path has no steps
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns an Iterator over the Nodes of the Path, origin first.
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }

    /// Consumes the Path, returning the step sequence.
    pub fn into_steps(self) -> Vec<P> {
        self.path
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Path;

    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 42.0);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
    }

    #[test]
    fn display() {
        let path = Path::new(vec![4, 2, 0], 42.0);

        assert_eq!(&format!("{}", path), "Path[Cost = 42]: 4 -> 2 -> 0");
    }

    #[test]
    fn display_empty() {
        let path = Path::<i32>::empty();

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }
}
