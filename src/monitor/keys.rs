//! Key press representation and categorization.
//!
//! Raw keyboard events arrive either as a printable character or as a named
//! special key. Categorization matches on that tag first, then on the value,
//! so every press lands in exactly one category.

/// A single key press as delivered by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// A key that produced a printable character (letters, digits, symbols).
    Character(char),

    /// A named special key with no printable character.
    Named(NamedKey),
}

/// Named special keys recognized by the categorizer.
///
/// Keys outside this vocabulary should be delivered as [`NamedKey::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKey {
    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Backspace,
    Delete,
    Tab,
    Enter,
    Space,

    // Modifiers
    Ctrl,
    CtrlLeft,
    CtrlRight,
    Alt,
    AltLeft,
    AltRight,
    AltGr,
    Shift,
    ShiftLeft,
    ShiftRight,
    Cmd,
    CmdLeft,
    CmdRight,

    // Function row
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Everything else (Esc, PrtScn, Insert, ...)
    Escape,
    PrintScreen,
    Insert,
    CapsLock,
    Other,
}

/// Category assigned to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCategory {
    Alphanumeric = 0,
    Navigation = 1,
    Editing = 2,
    Modifier = 3,
    Function = 4,
    Other = 5,
}

impl KeyCategory {
    /// All categories, in stable emission order.
    pub const ALL: [KeyCategory; 6] = [
        KeyCategory::Alphanumeric,
        KeyCategory::Navigation,
        KeyCategory::Editing,
        KeyCategory::Modifier,
        KeyCategory::Function,
        KeyCategory::Other,
    ];

    /// Categorizes a key press.
    ///
    /// Printable characters are split on alphanumeric vs. punctuation/symbol;
    /// named keys are classified by set membership, checked in order:
    /// navigation, editing, modifier, function, then the fallback.
    pub fn of(key: KeyPress) -> Self {
        match key {
            KeyPress::Character(c) if c.is_alphanumeric() => KeyCategory::Alphanumeric,
            KeyPress::Character(_) => KeyCategory::Other,
            KeyPress::Named(named) => {
                use NamedKey::*;
                match named {
                    Up | Down | Left | Right | Home | End | PageUp | PageDown => {
                        KeyCategory::Navigation
                    }
                    Backspace | Delete | Tab | Enter | Space => KeyCategory::Editing,
                    Ctrl | CtrlLeft | CtrlRight | Alt | AltLeft | AltRight | AltGr | Shift
                    | ShiftLeft | ShiftRight | Cmd | CmdLeft | CmdRight => KeyCategory::Modifier,
                    F1 | F2 | F3 | F4 | F5 | F6 | F7 | F8 | F9 | F10 | F11 | F12 => {
                        KeyCategory::Function
                    }
                    _ => KeyCategory::Other,
                }
            }
        }
    }

    /// Stable label used in persisted record descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            KeyCategory::Alphanumeric => "alphanumeric",
            KeyCategory::Navigation => "navigation",
            KeyCategory::Editing => "editing",
            KeyCategory::Modifier => "modifier",
            KeyCategory::Function => "function",
            KeyCategory::Other => "other",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_characters() {
        for c in ['a', 'Z', '0', '9', 'é'] {
            assert_eq!(
                KeyCategory::of(KeyPress::Character(c)),
                KeyCategory::Alphanumeric,
                "char {c:?}"
            );
        }
    }

    #[test]
    fn test_printable_symbols_are_other() {
        for c in ['$', '.', ';', '[', '!'] {
            assert_eq!(
                KeyCategory::of(KeyPress::Character(c)),
                KeyCategory::Other,
                "char {c:?}"
            );
        }
    }

    #[test]
    fn test_navigation_keys() {
        use NamedKey::*;
        for key in [Up, Down, Left, Right, Home, End, PageUp, PageDown] {
            assert_eq!(
                KeyCategory::of(KeyPress::Named(key)),
                KeyCategory::Navigation,
                "key {key:?}"
            );
        }
    }

    #[test]
    fn test_editing_keys() {
        use NamedKey::*;
        for key in [Backspace, Delete, Tab, Enter, Space] {
            assert_eq!(
                KeyCategory::of(KeyPress::Named(key)),
                KeyCategory::Editing,
                "key {key:?}"
            );
        }
    }

    #[test]
    fn test_modifier_keys() {
        use NamedKey::*;
        for key in [
            Ctrl, CtrlLeft, CtrlRight, Alt, AltLeft, AltRight, AltGr, Shift, ShiftLeft,
            ShiftRight, Cmd, CmdLeft, CmdRight,
        ] {
            assert_eq!(
                KeyCategory::of(KeyPress::Named(key)),
                KeyCategory::Modifier,
                "key {key:?}"
            );
        }
    }

    #[test]
    fn test_function_keys() {
        use NamedKey::*;
        for key in [F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12] {
            assert_eq!(
                KeyCategory::of(KeyPress::Named(key)),
                KeyCategory::Function,
                "key {key:?}"
            );
        }
    }

    #[test]
    fn test_unmatched_named_keys_are_other() {
        use NamedKey::*;
        for key in [Escape, PrintScreen, Insert, CapsLock, Other] {
            assert_eq!(
                KeyCategory::of(KeyPress::Named(key)),
                KeyCategory::Other,
                "key {key:?}"
            );
        }
    }

    #[test]
    fn test_labels_are_stable() {
        let labels: Vec<_> = KeyCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            [
                "alphanumeric",
                "navigation",
                "editing",
                "modifier",
                "function",
                "other"
            ]
        );
    }
}
