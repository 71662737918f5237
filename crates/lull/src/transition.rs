use bitflags::bitflags;

bitflags! {
    /// Visual effects the host applies when content mounts or unmounts.
    ///
    /// The timing machinery never interprets these. Each component stores the
    /// flags it was configured with and hands them back to the rendering host
    /// alongside every rendered-state change.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Transition: u8 {
        const OPACITY = 1 << 0;
        const SCALE = 1 << 1;
        const SLIDE_UP = 1 << 2;
        const SLIDE_DOWN = 1 << 3;
    }
}

impl Transition {
    /// Identity transition: content pops in and out with no effect.
    pub const NONE: Transition = Transition::empty();

    /// Merge two transitions into one the host applies together.
    pub fn combined(self, other: Transition) -> Transition {
        self | other
    }
}

impl Default for Transition {
    fn default() -> Self {
        Transition::OPACITY
    }
}
