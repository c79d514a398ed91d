use std::fmt;

/// The set of operations a cursor supports
///
/// Levels are ordered from weakest to strongest, each one a superset of the
/// previous: `Forward < Bidirectional < RandomAccess`. A composite cursor has the
/// weakest level among its components, see [`Capability::meet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Advance and compare for equality
    Forward,
    /// Forward plus retreat
    Bidirectional,
    /// Bidirectional plus offset arithmetic and distance
    RandomAccess,
}

impl Capability {
    /// The weaker of two capability levels
    ///
    /// `const` so that list capabilities fold at compile time.
    pub const fn meet(self, other: Capability) -> Capability {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    pub const fn can_retreat(self) -> bool {
        !matches!(self, Capability::Forward)
    }

    pub const fn is_random_access(self) -> bool {
        matches!(self, Capability::RandomAccess)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Forward => "forward",
            Capability::Bidirectional => "bidirectional",
            Capability::RandomAccess => "random-access",
        };
        write!(f, "{}", name)
    }
}
