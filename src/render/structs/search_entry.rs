use serde::{Deserialize, Serialize};
use crate::introspect::enums::member_kind::MemberKind;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchEntry {
    pub kind: MemberKind,
    pub module: String,
    /// Dotted path inside `module`, empty for the module itself.
    pub qualname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Imported path of a re-exported name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}
