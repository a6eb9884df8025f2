//! Engine configuration: the three independent axes of a counting run
//! (adjacency discipline, orientation, reduction), the intersection
//! strategy, and tuning knobs.

use std::fmt;
use std::str::FromStr;

/// Which neighbors each vertex's adjacency list stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// Every neighbor; each edge is stored twice.
    Full,
    /// Only neighbors with a larger id; each edge is stored once.
    Forward,
}

impl Adjacency {
    /// How many times a triangle is counted when every edge contributes
    /// the size of its endpoints' list intersection.
    ///
    /// With full lists each of a triangle's three edges sees the third
    /// vertex. With forward lists, for `a < b < c`, only `(a, b)` has `c`
    /// in both lists.
    pub fn multiplicity(self) -> u64 {
        match self {
            Adjacency::Full => 3,
            Adjacency::Forward => 1,
        }
    }
}

/// How each edge picks the endpoint whose list drives its work item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The endpoint with the shorter list, ties to the smaller id.
    Degree,
    /// The endpoint with the smaller id.
    Id,
}

/// How per-item counts are combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reduction {
    /// One shared atomic accumulator.
    Atomic,
    /// One slot per item, summed afterwards.
    Buffer,
}

/// How a work item's shared neighbors are found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntersectionKind {
    /// Merge or binary search over the two sorted lists, chosen by skew.
    Adaptive,
    /// Probe the canonical edge set for every neighbor of the pivot.
    EdgeSet,
}

pub const DEFAULT_SKEW: usize = 100;

/// Everything an [`crate::count::Engine`] needs to know before it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub adjacency: Adjacency,
    pub orientation: Orientation,
    pub reduction: Reduction,
    pub intersection: IntersectionKind,
    /// Skew threshold K: binary search replaces merging once one list is
    /// more than K times longer than the other.
    pub skew: usize,
    /// Worker threads; `None` runs on rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            adjacency: Adjacency::Full,
            orientation: Orientation::Degree,
            reduction: Reduction::Atomic,
            intersection: IntersectionKind::Adaptive,
            skew: DEFAULT_SKEW,
            threads: None,
        }
    }
}

/// Error for an unrecognized option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
    expected: &'static [&'static str],
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} {:?}, expected one of {}",
            self.kind,
            self.value,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for UnknownVariant {}

// Wires an enum to lowercase names for the command line.
macro_rules! named_variants {
    ($ty:ident, $kind:expr, $($variant:ident => $name:literal),+) => {
        impl $ty {
            pub const NAMES: &'static [&'static str] = &[$($name),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, UnknownVariant> {
                match s.to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::NAMES,
                    }),
                }
            }
        }
    };
}

named_variants!(Adjacency, "adjacency", Full => "full", Forward => "forward");
named_variants!(Orientation, "orientation", Degree => "degree", Id => "id");
named_variants!(Reduction, "reduction", Atomic => "atomic", Buffer => "buffer");
named_variants!(IntersectionKind, "intersection", Adaptive => "adaptive", EdgeSet => "edgeset");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &name in Adjacency::NAMES {
            assert_eq!(name.parse::<Adjacency>().unwrap().to_string(), name);
        }
        assert_eq!("EDGESET".parse::<IntersectionKind>(), Ok(IntersectionKind::EdgeSet));
        assert_eq!("id".parse::<Orientation>(), Ok(Orientation::Id));
        assert_eq!("buffer".parse::<Reduction>(), Ok(Reduction::Buffer));
    }

    #[test]
    fn unknown_names_list_choices() {
        let err = "half".parse::<Adjacency>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown adjacency \"half\", expected one of full, forward"
        );
    }

    #[test]
    fn default_is_full_degree_atomic() {
        let config = EngineConfig::default();
        assert_eq!(config.adjacency, Adjacency::Full);
        assert_eq!(config.orientation, Orientation::Degree);
        assert_eq!(config.reduction, Reduction::Atomic);
        assert_eq!(config.skew, 100);
        assert_eq!(config.adjacency.multiplicity(), 3);
    }
}
