use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemberKind {
    module,
    function,
    class,
    method,
    variable,
    attribute,
    /// A name bound by an import; its value is the imported path.
    reexport,
}
