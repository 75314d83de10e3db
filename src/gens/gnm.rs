use fxhash::FxHashSet;

use super::*;

/// Configuration type used by [`Gnm`] to determine how the graph should be parameterized.
///
/// This can be either:
/// - a fixed number of edges, or
/// - an average degree value, which is converted into an edge count during generation.
#[derive(Debug, Copy, Clone, Default)]
enum GnmType {
    /// No value has been set yet; using this will panic at runtime.
    #[default]
    NotSet,
    /// Fixed number of edges `m`.
    Edges(NumEdges),
    /// Average degree `d`, to be converted to `m = d*n`.
    AvgDeg(f64),
}

/// Generator for uniform `G(n,m)` random directed graphs with `n` nodes and `m` edges.
///
/// The generator can be parameterized via:
/// - `.nodes(n)` — total number of nodes
/// - `.edges(m)` or `.avg_deg(d)` — total number of edges or average degree
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: u64,
    m: GnmType,
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Gnm {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

impl NumEdgesGen for Gnm {
    fn edges(mut self, m: NumEdges) -> Self {
        self.m = GnmType::Edges(m);
        self
    }
}

impl AverageDegreeGen for Gnm {
    /// Sets the average degree `d` in the graph.
    ///
    /// Internally converted to an edge count: `m = d*n`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.m = GnmType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnm {
    /// Returns a streaming iterator over a random `G(n,m)` edge set.
    ///
    /// Internally, edges are uniformly sampled without replacement via rejection
    /// sampling on edge codes in `[0, n^2)`.
    ///
    /// # Panics
    /// - If `n == 0`
    /// - If neither `edges(m)` nor `avg_deg(d)` was set
    /// - If `2 * m > n^2`, where rejection sampling degenerates
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        let m = match self.m {
            GnmType::NotSet => panic!("Number of edges of Gnm was not set!"),
            GnmType::Edges(m) => m,
            GnmType::AvgDeg(d) => (self.n as f64 * d) as NumEdges,
        };

        let end = self.n * self.n;
        assert!(2 * m as u64 <= end);

        GnmGenerator {
            n: self.n,
            rem: m as u64,
            end,
            seen: FxHashSet::with_capacity_and_hasher(m as usize, Default::default()),
            rng,
        }
    }
}

/// Given `n` nodes, this iterator produces exactly `m` uniformly random and distinct
/// directed edges without replacement.
///
/// Each edge is encoded as a value in `[0, n^2)` and drawn by rejection sampling
/// against the set of codes already emitted. Since the edge space is at least twice
/// as large as the sample, the expected number of redraws per edge is below two.
pub struct GnmGenerator<'a, R>
where
    R: Rng,
{
    n: u64,
    rem: u64,
    end: u64,
    seen: FxHashSet<u64>,
    rng: &'a mut R,
}

impl<'a, R> Iterator for GnmGenerator<'a, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rem == 0 {
            return None;
        }
        self.rem -= 1;

        loop {
            let code = self.rng.random_range(0..self.end);
            if self.seen.insert(code) {
                return Some(Edge::from_u64(code, self.n));
            }
        }
    }

    /// Returns the number of edges remaining to be generated.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem as usize, Some(self.rem as usize))
    }
}

impl<'a, R> ExactSizeIterator for GnmGenerator<'a, R> where R: Rng {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn exact_number_of_distinct_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(123);

        for (n, m) in [(1, 0), (10, 40), (100, 2000)] {
            let edges = Gnm::new().nodes(n).edges(m).generate(rng);

            assert_eq!(edges.len(), m as usize);
            for &Edge(u, v) in &edges {
                assert!(u < n && v < n);
            }

            let distinct: FxHashSet<_> = edges.iter().map(|e| (e.0, e.1)).collect();
            assert_eq!(distinct.len(), m as usize);
        }
    }

    #[test]
    fn avg_deg_controls_edge_count() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        let edges = Gnm::new().nodes(100).avg_deg(3.0).generate(rng);
        assert_eq!(edges.len(), 300);
    }

    #[test]
    fn graph_construction_from_generator() {
        let rng = &mut Pcg64Mcg::seed_from_u64(77);
        let graph = AdjArray::gnm(rng, 50, 400);

        assert_eq!(graph.number_of_nodes(), 50);
        assert_eq!(graph.number_of_edges(), 400);
    }
}
