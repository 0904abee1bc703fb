use std::fmt;
use std::fmt::Formatter;
use crate::introspect::enums::member_kind::MemberKind;

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::module => "module",
            MemberKind::function => "function",
            MemberKind::class => "class",
            MemberKind::method => "method",
            MemberKind::variable => "variable",
            MemberKind::attribute => "attribute",
            MemberKind::reexport => "reexport",
        }
    }

    /// Keyword shown in front of the member name on a rendered page.
    pub fn keyword(&self) -> &'static str {
        match self {
            MemberKind::module => "module",
            MemberKind::function | MemberKind::method => "def",
            MemberKind::class => "class",
            MemberKind::variable | MemberKind::attribute | MemberKind::reexport => "",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
