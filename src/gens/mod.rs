/*!
# Graph Generators

This module provides traits and builder patterns for constructing random graph
generators, mostly used to produce test and benchmark instances for the traversal
algorithms.

Each generator allows parameterized control over structural properties of the graph
(e.g., number of nodes or edges, average degree), and can produce either a complete
collection of edges or a stream of them through iterators. The typical usage workflow
is:

1. Create a generator instance (e.g., `Gnm::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).edges(m)`).
3. Generate edges via `generate()` or `stream()`.

In addition, the [`RandomGraph`] trait abstracts the generation of whole graph
instances into reusable constructors for all graph types implementing
[`GraphFromScratch`].
*/

use rand::Rng;

use crate::prelude::*;

mod gnm;

pub use gnm::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the number of edges.
///
/// Used in models like G(n, m) where the edge count is fixed.
pub trait NumEdgesGen {
    /// Sets the number of edges in the graph generator.
    fn edges(self, m: NumEdges) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from common random models.
///
/// Requires that the implementing type supports construction from a set of edges.
/// Provided implementations use the corresponding edge generators under the hood.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,m)` graph with exactly `m` distinct directed edges.
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnm::new().nodes(n).edges(m).stream(rng))
    }
}
