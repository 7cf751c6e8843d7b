#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape: close every toast
    DismissToasts,
    /// `s`: jump to the store section
    JumpToStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            meta: ev.meta_key(),
        }
    }

    fn any(self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

impl Shortcut {
    /// Map a `KeyboardEvent.key` to a shortcut. Letter shortcuts stay out of
    /// the way while the user is typing or holding a modifier.
    pub fn from_key(key: &str, modifiers: Modifiers, editing: bool) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Shortcut::DismissToasts),
            "s" | "S" if !editing && !modifiers.any() => Some(Shortcut::JumpToStore),
            _ => None,
        }
    }
}

/// Tags that take text input.
pub fn is_editable_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}
