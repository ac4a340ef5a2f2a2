use thiserror::Error;

/// Reasons a ring is unfit for boolean operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub(crate) enum TopologyError {
    /// A vertex had a NaN or infinite coordinate.
    #[error("ring has a non-finite coordinate")]
    NonFiniteCoordinate,
    /// Fewer than three distinct vertices remained.
    #[error("ring has {distinct} distinct vertices, at least 3 are required")]
    TooFewVertices { distinct: usize },
    /// Two consecutive vertices coincide.
    #[error("vertex {index} repeats its predecessor")]
    RepeatedVertex { index: usize },
    /// The ring encloses no area.
    #[error("ring encloses zero area")]
    ZeroArea,
    /// Two edges that do not share a vertex touch or cross.
    #[error("edges {first_edge} and {second_edge} intersect")]
    SelfIntersection {
        first_edge: usize,
        second_edge: usize,
    },
    /// An edge doubles back over its predecessor.
    #[error("edge {edge} doubles back over the previous edge")]
    Spike { edge: usize },
}

/// Failures raised inside the kernel and recovered before reaching callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub(crate) enum KernelError {
    /// A pairwise intersection was attempted on unfit geometry.
    #[error("intersection skipped: {0}")]
    Topology(#[source] TopologyError),
    /// Merging intersection pieces failed.
    #[error("merge failed: {0}")]
    Merge(#[source] TopologyError),
}
