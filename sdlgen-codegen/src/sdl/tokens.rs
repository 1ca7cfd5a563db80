//! SDL structural tokens.

/// Structural element of the SDL output and its literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdlToken {
    /// Opens a type's field block.
    BlockOpen,
    /// Closes a type's field block.
    BlockClose,
    /// Line break.
    Newline,
    /// Single space.
    Space,
    /// Non-null marker.
    NonNull,
    /// Opens a list type.
    ListOpen,
    /// Closes a list type.
    ListClose,
    /// Separates a key from its type.
    KeySep,
    /// Opens an argument list.
    ArgsOpen,
    /// Closes an argument list.
    ArgsClose,
    /// Separates consecutive arguments.
    ArgSep,
}

impl SdlToken {
    /// Returns the literal text of the token.
    #[must_use]
    pub const fn text(&self) -> &'static str {
        match self {
            Self::BlockOpen => "{\n",
            Self::BlockClose => "}\n",
            Self::Newline => "\n",
            Self::Space => " ",
            Self::NonNull => "!",
            Self::ListOpen => "[",
            Self::ListClose => "]",
            Self::KeySep => ": ",
            Self::ArgsOpen => "( ",
            Self::ArgsClose => ") ",
            Self::ArgSep => ",",
        }
    }

    /// Appends the token to `out`.
    #[inline]
    pub fn push_to(self, out: &mut String) {
        out.push_str(self.text());
    }
}
