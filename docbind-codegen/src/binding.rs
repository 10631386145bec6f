use docbind_manual::SynopsisDescriptor;

use crate::language::NamingConvention;

/// Everything needed to emit one client method.
///
/// Derived once from a [`SynopsisDescriptor`] and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBinding {
    /// Name sent on the wire, exactly as written in the synopsis.
    pub rpc_name: String,
    pub identifier_name: String,
    pub request_type_name: String,
    pub response_type_name: String,
    pub doc_comment: String,
    /// When false the request argument may be omitted.
    pub has_required_params: bool,
}

impl MethodBinding {
    pub fn new(
        descriptor: &SynopsisDescriptor,
        doc_comment: impl Into<String>,
        naming: &NamingConvention,
    ) -> Self {
        let name = descriptor.name.as_str();
        Self {
            rpc_name: name.to_string(),
            identifier_name: naming.method_name(name),
            request_type_name: naming.request_type(name),
            response_type_name: naming.response_type(name),
            doc_comment: doc_comment.into(),
            has_required_params: descriptor.has_required_params(),
        }
    }
}
