use crate::introspect::enums::member_kind::MemberKind;

#[derive(Debug, Clone, PartialEq)]
pub struct MemberDoc {
    pub name: String,
    /// Dotted path inside the module, e.g. `Class.method`.
    pub qualname: String,
    pub kind: MemberKind,
    pub is_async: bool,
    /// Parameter list (and return annotation) for functions, bases for classes.
    pub signature: Option<String>,
    pub annotation: Option<String>,
    pub value: Option<String>,
    pub docstring: Option<String>,
    pub decorators: Vec<String>,
    pub members: Vec<MemberDoc>,
}
