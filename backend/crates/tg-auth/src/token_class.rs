use std::fmt;

/// Discriminates short-lived access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Access,
    Refresh,
}

impl TokenClass {
    /// Class named by the `refresh` claim.
    pub fn from_refresh_flag(refresh: bool) -> Self {
        if refresh { Self::Refresh } else { Self::Access }
    }

    pub fn is_refresh(self) -> bool {
        matches!(self, Self::Refresh)
    }

    pub fn other(self) -> Self {
        match self {
            Self::Access => Self::Refresh,
            Self::Refresh => Self::Access,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
