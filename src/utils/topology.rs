/// Describes how neighbors are looked up at the edges of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Cells beyond the edges are dead.
    #[default]
    Bounded,
    /// Bounds of the field are stitched together.
    Torus,
}

impl Topology {
    pub fn from_wrap(wrap: bool) -> Self {
        if wrap {
            Topology::Torus
        } else {
            Topology::Bounded
        }
    }

    pub fn wraps(self) -> bool {
        self == Topology::Torus
    }
}
