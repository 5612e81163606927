//! Wireframe / filled rendering flag

use crate::mesh::PrimitiveTopology;

/// How the renderer should draw the globe.
///
/// Only carried through to the renderer; the mesh itself is always a
/// triangle list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    #[default]
    Wireframe,
    Filled,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Wireframe => RenderMode::Filled,
            RenderMode::Filled => RenderMode::Wireframe,
        }
    }

    pub fn is_wireframe(self) -> bool {
        self == RenderMode::Wireframe
    }

    /// Topology to submit the index buffer with.
    ///
    /// Wireframe feeds the triangle indices to a line-list draw, the same
    /// way the desktop viewer does.
    pub fn topology(self) -> PrimitiveTopology {
        match self {
            RenderMode::Wireframe => PrimitiveTopology::LineList,
            RenderMode::Filled => PrimitiveTopology::TriangleList,
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Wireframe => f.write_str("wireframe"),
            RenderMode::Filled => f.write_str("filled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mode = RenderMode::default();
        assert!(mode.is_wireframe());
        assert_eq!(mode.toggled(), RenderMode::Filled);
        assert_eq!(mode.toggled().toggled(), mode);
    }

    #[test]
    fn test_topology() {
        assert_eq!(RenderMode::Wireframe.topology(), PrimitiveTopology::LineList);
        assert_eq!(RenderMode::Filled.topology(), PrimitiveTopology::TriangleList);
        assert_eq!(RenderMode::Filled.to_string(), "filled");
    }
}
