use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// The kinds of attribute a node can carry on its own tag.
///
/// Primitive elements carry everything; text runs and composites carry nothing and need a
/// wrapper (or a primitive to fold onto) before any attribute can be rendered.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities(u8);

impl Capabilities {
    pub const NONE: Capabilities = Capabilities(0);
    pub const CLASSES: Capabilities = Capabilities(1);
    pub const STYLES: Capabilities = Capabilities(1 << 1);
    pub const EVENTS: Capabilities = Capabilities(1 << 2);
    /// Identifier, custom, ARIA and data attributes.
    pub const ATTRIBUTES: Capabilities = Capabilities(1 << 3);
    pub const ALL: Capabilities = Capabilities(0b1111);

    pub fn contains(self, other: Capabilities) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Capabilities {
    type Output = Capabilities;

    fn bitor(self, rhs: Capabilities) -> Capabilities {
        Capabilities(self.0 | rhs.0)
    }
}

impl BitOrAssign for Capabilities {
    fn bitor_assign(&mut self, rhs: Capabilities) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Capabilities::CLASSES, "classes"),
            (Capabilities::STYLES, "styles"),
            (Capabilities::EVENTS, "events"),
            (Capabilities::ATTRIBUTES, "attributes"),
        ];
        let mut set = f.debug_set();
        for (flag, name) in names {
            if self.contains(flag) {
                set.entry(&name);
            }
        }
        set.finish()
    }
}
