//! The aggregated client file (`main.ts` by default).

use std::path::{Path, PathBuf};

use docbind_codegen::MethodBinding;
use docbind_core::{FileRules, GeneratedFile};
use serde_json::Value;

use super::GENERATED_HEADER;
use crate::{
    ast::{Class, Import, Method, Param},
    code_file::CodeFile,
};

/// Body of the shared transport primitive.
///
/// One request per connection: write the envelope, take the first chunk,
/// close. Replies that are not JSON resolve with the raw text.
const CALL_BODY: &[&str] = &[
    "return new Promise((resolve, reject) => {",
    "  const client = net.createConnection(this._socketPath);",
    "  const payload = {",
    "    method: method,",
    "    params: params,",
    "    id: 0,",
    "  };",
    "",
    "  client.on(\"error\", reject);",
    "  client.write(JSON.stringify(payload));",
    "",
    "  client.on(\"data\", (data) => {",
    "    client.end();",
    "    const text = data.toString(\"utf8\");",
    "    let parsed: unknown;",
    "    try {",
    "      parsed = JSON.parse(text);",
    "    } catch {",
    "      resolve(text as unknown as ReturnType);",
    "      return;",
    "    }",
    "    if (typeof parsed === \"object\" && parsed !== null && \"result\" in parsed) {",
    "      resolve((parsed as { result: ReturnType }).result);",
    "    } else {",
    "      resolve(parsed as ReturnType);",
    "    }",
    "  });",
    "});",
];

struct Entry {
    stem: String,
    binding: MethodBinding,
}

/// The client class with one method per bound command, in binding order.
pub struct ClientTs {
    class_name: String,
    file_name: String,
    entries: Vec<Entry>,
}

impl ClientTs {
    pub fn new(class_name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            file_name: file_name.into(),
            entries: Vec::new(),
        }
    }

    /// Append a command; `stem` names the module its types live in.
    pub fn push(&mut self, stem: impl Into<String>, binding: MethodBinding) {
        self.entries.push(Entry {
            stem: stem.into(),
            binding,
        });
    }

    /// Stem of an already bound command whose generated names clash with `binding`.
    pub fn conflict(&self, binding: &MethodBinding) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| {
                e.binding.identifier_name == binding.identifier_name
                    || e.binding.request_type_name == binding.request_type_name
            })
            .map(|e| e.stem.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn type_imports(&self) -> impl Iterator<Item = Import> + '_ {
        self.entries.iter().map(|e| {
            Import::new(format!("./{}", e.stem))
                .named(&e.binding.request_type_name)
                .named(&e.binding.response_type_name)
                .type_only()
        })
    }

    fn call_method() -> Method {
        Method::new("_call")
            .private()
            .type_params("ReturnType = unknown")
            .param(Param::new("method", "string"))
            .param(Param::new("params", "unknown").default_value("null"))
            .returns("Promise<ReturnType>")
            .body_lines(CALL_BODY.iter().copied())
    }

    fn command_method(binding: &MethodBinding) -> Method {
        let payload = Param::new("payload", &binding.request_type_name);
        let payload = if binding.has_required_params {
            payload
        } else {
            payload.default_value("{}")
        };
        let rpc_name = Value::String(binding.rpc_name.clone()).to_string();

        Method::new(&binding.identifier_name)
            .doc(&binding.doc_comment)
            .param(payload)
            .returns(format!("Promise<{}>", binding.response_type_name))
            .body_line(format!(
                "return this._call<{}>({}, payload);",
                binding.response_type_name, rpc_name
            ))
    }

    fn class(&self) -> Class {
        Class::new(&self.class_name)
            .default_export()
            .constructor([Param::new("_socketPath", "string").private()])
            .method(Self::call_method())
            .methods(self.entries.iter().map(|e| Self::command_method(&e.binding)))
    }
}

impl GeneratedFile for ClientTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header(GENERATED_HEADER)
            .import(Import::new("net").namespace("net"))
            .import_group(self.type_imports())
            .add(self.class())
            .render()
    }
}

#[cfg(test)]
mod tests {
    use docbind_codegen::builder::Renderable;
    use docbind_manual::SynopsisDescriptor;

    use super::*;
    use crate::TS_NAMING;

    fn binding(name: &str, required: &[&str], doc: &str) -> MethodBinding {
        let descriptor = SynopsisDescriptor {
            name: name.to_string(),
            required_params: required.iter().map(|p| p.to_string()).collect(),
            optional_params: Vec::new(),
        };
        MethodBinding::new(&descriptor, doc, &TS_NAMING)
    }

    #[test]
    fn test_command_method_without_required_params() {
        let method = ClientTs::command_method(&binding("listpeers", &[], "List peers."));
        insta::assert_snapshot!(method.build(), @r#"
        /** List peers. */
        listpeers(payload: ListpeersRequest = {}): Promise<ListpeersResponse> {
          return this._call<ListpeersResponse>("listpeers", payload);
        }
        "#);
    }

    #[test]
    fn test_command_method_keeps_wire_name() {
        let method = ClientTs::command_method(&binding("dev-forget-channel", &["id"], ""));
        assert_eq!(
            method.render(),
            "devForgetChannel(payload: DevForgetChannelRequest): Promise<DevForgetChannelResponse> {\n  \
             return this._call<DevForgetChannelResponse>(\"dev-forget-channel\", payload);\n\
             }\n"
        );
    }

    #[test]
    fn test_conflict_detection() {
        let mut client = ClientTs::new("RPCClient", "main.ts");
        assert!(client.is_empty());
        client.push("dev-foo", binding("dev-foo", &[], ""));
        assert_eq!(client.conflict(&binding("dev_foo", &[], "")), Some("dev-foo"));
        assert_eq!(client.conflict(&binding("devbar", &[], "")), None);
        assert_eq!(client.len(), 1);
    }

    #[test]
    fn test_empty_client_still_has_transport() {
        let client = ClientTs::new("RPCClient", "main.ts");
        assert_eq!(client.path(Path::new("out")), PathBuf::from("out/main.ts"));
        let code = client.render();
        assert!(code.starts_with("// Code generated by docbind. DO NOT EDIT.\n\nimport * as net from \"net\";\n\nexport default class RPCClient {\n"));
        assert!(code.contains("  private _call<ReturnType = unknown>(method: string, params: unknown = null): Promise<ReturnType> {\n"));
        assert!(!code.contains("import type"));
    }
}
