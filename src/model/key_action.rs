//! Domain-level keyboard actions independent of key bindings.

/// User intents that can be mapped to configurable key bindings.
///
/// These represent what the user wants, not which key they pressed. The
/// mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`crate::config::KeyBindings`]. Text entry into the search field bypasses
/// bindings entirely while the field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Focus
    /// Give the search field focus. Default: / or Ctrl+f
    FocusSearch,
    /// Move focus to the next region. Default: Tab
    CycleFocus,
    /// Move focus to the previous region. Default: Shift+Tab
    CycleFocusBack,
    /// Blur the search field and close the filter panel. Default: Esc
    Escape,

    // Search state
    /// Reset query, tags, and sort; refocus the search field. Default: Ctrl+l
    ClearAll,
    /// Open or close the filter panel. Default: Ctrl+o
    ToggleFilters,
    /// Switch between Relevance and Top rated. Default: s
    CycleSort,

    // Cursor movement inside the focused region
    /// Previous suggestion / result row. Default: k/↑
    MoveUp,
    /// Next suggestion / result row. Default: j/↓
    MoveDown,
    /// Previous tag chip. Default: h/←
    MoveLeft,
    /// Next tag chip. Default: l/→
    MoveRight,
    /// Toggle the chip or pick the suggestion under the cursor. Default: Enter/Space
    Select,

    // Results scrolling
    /// Scroll results up one page. Default: PageUp/Ctrl+u
    PageUp,
    /// Scroll results down one page. Default: PageDown/Ctrl+d
    PageDown,
    /// Jump to the first result row. Default: g/Home
    ScrollToTop,
    /// Jump to the last result row. Default: G/End
    ScrollToBottom,

    // Application
    /// Exit the application. Default: q
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn actions_are_hashable_and_distinct() {
        let set: HashSet<KeyAction> = [
            KeyAction::FocusSearch,
            KeyAction::Escape,
            KeyAction::ClearAll,
            KeyAction::ToggleFilters,
            KeyAction::CycleSort,
            KeyAction::Select,
            KeyAction::Quit,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn actions_are_copy() {
        let action = KeyAction::CycleSort;
        let copied = action;
        assert_eq!(action, copied);
    }
}
