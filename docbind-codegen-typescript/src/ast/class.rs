//! TypeScript class and method builders.

use docbind_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A method or constructor parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
    /// Constructor parameter property modifier (e.g. `private`).
    pub modifier: Option<&'static str>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
            modifier: None,
        }
    }

    /// Default value, which also makes the argument omittable.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.modifier = Some("private");
        self
    }

    fn signature(&self) -> String {
        let modifier = self.modifier.map(|m| format!("{} ", m)).unwrap_or_default();
        match &self.default {
            Some(default) => format!("{}{}: {} = {}", modifier, self.name, self.ty, default),
            None => format!("{}{}: {}", modifier, self.name, self.ty),
        }
    }
}

/// Builder for class methods.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    doc: Option<String>,
    private: bool,
    type_params: Option<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            private: false,
            type_params: None,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    /// Doc comment; empty text adds none.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        let doc = doc.into();
        self.doc = (!doc.trim().is_empty()).then_some(doc);
        self
    }

    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    /// Generic parameters, written between `<` and `>`.
    pub fn type_params(mut self, params: impl Into<String>) -> Self {
        self.type_params = Some(params.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a body line. Leading spaces are kept as relative indentation.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn body_lines(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body.extend(lines.into_iter().map(Into::into));
        self
    }

    fn header(&self) -> String {
        let visibility = if self.private { "private " } else { "" };
        let generics = self
            .type_params
            .as_ref()
            .map(|t| format!("<{}>", t))
            .unwrap_or_default();
        let params = self
            .params
            .iter()
            .map(Param::signature)
            .collect::<Vec<_>>()
            .join(", ");
        let returns = self
            .return_type
            .as_ref()
            .map(|t| format!(": {}", t))
            .unwrap_or_default();
        format!(
            "{}{}{}({}){} {{",
            visibility, self.name, generics, params, returns
        )
    }

    /// Build the method as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc));
        }
        fragments.push(CodeFragment::block(
            self.header(),
            self.body.iter().map(CodeFragment::line).collect(),
            Some("}".to_string()),
        ));
        fragments
    }
}

/// Builder for an exported class.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    default_export: bool,
    constructor: Option<Vec<Param>>,
    methods: Vec<Method>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_export: false,
            constructor: None,
            methods: Vec::new(),
        }
    }

    /// Export as the module's default export.
    pub fn default_export(mut self) -> Self {
        self.default_export = true;
        self
    }

    /// Constructor whose parameters are all parameter properties (empty body).
    pub fn constructor(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.constructor = Some(params.into_iter().collect());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods.extend(methods);
        self
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.default_export {
            "export default "
        } else {
            "export "
        };

        let mut body = Vec::new();
        if let Some(params) = &self.constructor {
            let params = params
                .iter()
                .map(Param::signature)
                .collect::<Vec<_>>()
                .join(", ");
            body.push(CodeFragment::line(format!("constructor({}) {{}}", params)));
        }
        for method in &self.methods {
            if !body.is_empty() {
                body.push(CodeFragment::blank());
            }
            body.extend(method.to_fragments());
        }

        vec![CodeFragment::block(
            format!("{}class {} {{", export, self.name),
            body,
            Some("}".to_string()),
        )]
    }
}
