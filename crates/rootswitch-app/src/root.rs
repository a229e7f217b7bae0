//! Navigation roots.
//!
//! [`RootId`] is the closed set of top-level navigation stacks. [`RootValue`]
//! is what events carry and the store keeps: a root name that may or may not
//! parse into a [`RootId`]. Validation happens in the controller, not on the
//! way into the store.

use std::{fmt, str::FromStr};

use crate::UnknownRoot;

/// Top-level navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RootId {
    /// Single-screen login stack.
    Login,
    /// Tabbed stack shown after a successful login.
    AfterLogin,
}

impl RootId {
    /// Every root, in declaration order.
    pub const ALL: [RootId; 2] = [RootId::Login, RootId::AfterLogin];

    /// Stable name used in logs and when parsing raw root values.
    pub fn name(self) -> &'static str {
        match self {
            RootId::Login => "login",
            RootId::AfterLogin => "after-login",
        }
    }
}

impl fmt::Display for RootId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RootId {
    type Err = UnknownRoot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RootId::ALL
            .into_iter()
            .find(|root| root.name() == s)
            .ok_or_else(|| UnknownRoot(s.to_string()))
    }
}

/// Root value carried by events and stored in state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RootValue {
    /// One of the recognized roots.
    Known(RootId),
    /// A name that matches no [`RootId`].
    Unrecognized(String),
}

impl RootValue {
    /// Parse a raw root name. Never fails; unknown names are kept verbatim.
    pub fn parse(name: &str) -> Self {
        match name.parse::<RootId>() {
            Ok(root) => RootValue::Known(root),
            Err(UnknownRoot(raw)) => RootValue::Unrecognized(raw),
        }
    }

    /// The recognized root, if any.
    pub fn known(&self) -> Option<RootId> {
        match self {
            RootValue::Known(root) => Some(*root),
            RootValue::Unrecognized(_) => None,
        }
    }

    /// Raw name of this value.
    pub fn name(&self) -> &str {
        match self {
            RootValue::Known(root) => root.name(),
            RootValue::Unrecognized(raw) => raw,
        }
    }
}

impl From<RootId> for RootValue {
    fn from(root: RootId) -> Self {
        RootValue::Known(root)
    }
}

impl fmt::Display for RootValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_parse() {
        for root in RootId::ALL {
            assert_eq!(root.name().parse::<RootId>(), Ok(root));
        }
    }

    #[test]
    fn unknown_name_is_kept_verbatim() {
        let value = RootValue::parse("bogus");
        assert_eq!(value, RootValue::Unrecognized("bogus".into()));
        assert_eq!(value.known(), None);
        assert_eq!(value.to_string(), "bogus");
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(matches!(RootValue::parse("Login"), RootValue::Unrecognized(_)));
        assert_eq!(RootValue::parse("after-login").known(), Some(RootId::AfterLogin));
    }
}
