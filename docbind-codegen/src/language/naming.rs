/// How a target language spells the names derived from a command.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Command name to type name prefix (e.g. "dev-forget-channel" -> "DevForgetChannel")
    pub command_to_type: fn(&str) -> String,
    /// Command name to method name (e.g. "dev-forget-channel" -> "devForgetChannel")
    pub command_to_method: fn(&str) -> String,
    pub request_suffix: &'static str,
    pub response_suffix: &'static str,
    /// Words that cannot be used as bare identifiers.
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word.
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn request_type(&self, command: &str) -> String {
        format!("{}{}", (self.command_to_type)(command), self.request_suffix)
    }

    pub fn response_type(&self, command: &str) -> String {
        format!("{}{}", (self.command_to_type)(command), self.response_suffix)
    }

    pub fn method_name(&self, command: &str) -> String {
        self.safe_name(&(self.command_to_method)(command))
    }
}
