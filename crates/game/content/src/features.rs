//! Feature-list configuration rendered beside the board.

/// One feature block: icon, title, and a short description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: char,
    pub title: &'static str,
    pub description: &'static str,
}

/// The feature blocks, rendered in order.
pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: '\u{26a1}',
        title: "Quick rounds",
        description: "Eight cards, four pairs. A full round fits in a coffee \
                      break, and a fresh shuffle is one keypress away.",
    },
    Feature {
        icon: '\u{1f3af}',
        title: "Pure focus",
        description: "No timers racing you and no score multipliers. Just your \
                      memory against the board, one pair at a time.",
    },
    Feature {
        icon: '\u{2328}',
        title: "Keyboard first",
        description: "Move with the arrows or hjkl, flip with Enter. Built for \
                      the terminal you already live in.",
    },
];
