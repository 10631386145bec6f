//! End-to-end tests over reference-document corpora.
//!
//! Each test builds a small corpus in a temporary directory and runs the
//! generator over it. Run `cargo insta review` to update snapshots when
//! making intentional changes.

use std::path::PathBuf;

use docbind_codegen::{
    Severity,
    testing::{Corpus, reference_doc},
};
use docbind_codegen_typescript::{Generator, LanguageCodegen, Preview};
use docbind_manual::Config;
use serde_json::{Value, json};

fn empty_response() -> Value {
    json!({ "type": "object", "additionalProperties": false, "properties": {} })
}

fn beta_response() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["echo"],
        "properties": {
            "echo": { "type": "hex", "description": "The value of x" },
            "old": { "type": "u32", "deprecated": true }
        }
    })
}

/// The two-command corpus: `alpha` takes nothing, `beta` takes `x` and optionally `y`.
fn alpha_beta() -> Corpus {
    let corpus = Corpus::new().unwrap();
    corpus
        .command(
            "alpha",
            &reference_doc("alpha", "**alpha**", "Alpha does nothing."),
            &empty_response(),
        )
        .unwrap()
        .command(
            "beta",
            &reference_doc("beta", "**beta** *x* \\[*y*\\]", "Beta echoes *x*."),
            &beta_response(),
        )
        .unwrap();
    corpus
}

fn preview(corpus: &Corpus) -> Preview {
    Generator::new(corpus.config())
        .preview(&corpus.output_dir())
        .unwrap()
}

fn output_path(corpus: &Corpus, name: &str) -> String {
    corpus.output_dir().join(name).display().to_string()
}

/// Get a specific file from the rendered output.
fn get_file<'a>(preview: &'a Preview, path: &str) -> Option<&'a str> {
    preview
        .files
        .iter()
        .find(|f| f.path == path)
        .map(|f| f.content.as_str())
}

#[test]
fn test_alpha_command_file() {
    let corpus = alpha_beta();
    let preview = preview(&corpus);

    let alpha = get_file(&preview, &output_path(&corpus, "alpha.ts")).expect("alpha.ts not found");
    insta::assert_snapshot!(alpha, @r"
    // Code generated by docbind. DO NOT EDIT.

    /**
     * lightning-alpha -- Command alpha
     *
     * **alpha**
     */

    /** Alpha does nothing. */
    export interface AlphaRequest {}

    export interface AlphaResponse {}
    ");
}

#[test]
fn test_beta_command_file() {
    let corpus = alpha_beta();
    let preview = preview(&corpus);

    let beta = get_file(&preview, &output_path(&corpus, "beta.ts")).expect("beta.ts not found");
    insta::assert_snapshot!(beta, @r"
    // Code generated by docbind. DO NOT EDIT.

    /**
     * lightning-beta -- Command beta
     *
     * **beta** *x* \[*y*\]
     */

    /** Beta echoes *x*. */
    export interface BetaRequest {
      x: /* GUESSED */ string;
      y?: /* GUESSED */ string;
    }

    export interface BetaResponse {
      /** The value of x */
      echo: string;
    }
    ");
}

#[test]
fn test_client_file() {
    let corpus = alpha_beta();
    let preview = preview(&corpus);

    let main = get_file(&preview, &output_path(&corpus, "main.ts")).expect("main.ts not found");
    assert!(main.starts_with(
        "// Code generated by docbind. DO NOT EDIT.\n\
         \n\
         import * as net from \"net\";\n\
         \n\
         import type { AlphaRequest, AlphaResponse } from \"./alpha\";\n\
         import type { BetaRequest, BetaResponse } from \"./beta\";\n\
         \n\
         export default class RPCClient {\n  \
         constructor(private _socketPath: string) {}\n"
    ));
    assert!(main.contains("      const client = net.createConnection(this._socketPath);\n"));
    assert!(main.contains("        id: 0,\n"));
    assert!(main.contains("      client.on(\"error\", reject);\n"));
    assert!(main.ends_with(
        "  /** Alpha does nothing. */\n  \
         alpha(payload: AlphaRequest = {}): Promise<AlphaResponse> {\n    \
         return this._call<AlphaResponse>(\"alpha\", payload);\n  \
         }\n\
         \n  \
         /** Beta echoes *x*. */\n  \
         beta(payload: BetaRequest): Promise<BetaResponse> {\n    \
         return this._call<BetaResponse>(\"beta\", payload);\n  \
         }\n\
         }\n"
    ));
}

#[test]
fn test_summary_and_file_order() {
    let corpus = alpha_beta();
    let preview = preview(&corpus);

    assert_eq!(preview.summary.commands, vec!["alpha", "beta"]);
    assert!(preview.summary.skipped.is_empty());
    assert!(!preview.summary.has_errors());

    let paths: Vec<&str> = preview.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            output_path(&corpus, "alpha.ts"),
            output_path(&corpus, "beta.ts"),
            output_path(&corpus, "main.ts"),
        ]
    );

    // The deprecated field is reported, never emitted.
    let beta = get_file(&preview, &output_path(&corpus, "beta.ts")).unwrap();
    assert!(!beta.contains("old"));
    assert!(preview.summary.diagnostics.iter().any(|d| {
        d.severity == Severity::Info
            && d.phase == "normalize"
            && d.location.as_deref() == Some("beta#/properties/old")
    }));
}

#[test]
fn test_generate_writes_in_order() {
    let corpus = alpha_beta();
    let generator = Generator::new(corpus.config());
    let result = generator.generate(&generator.output_dir()).unwrap();

    assert_eq!(
        result.written,
        vec![
            corpus.output_dir().join("alpha.ts"),
            corpus.output_dir().join("beta.ts"),
            corpus.output_dir().join("main.ts"),
        ]
    );

    let preview = generator.preview(&generator.output_dir()).unwrap();
    for file in &preview.files {
        let on_disk = std::fs::read_to_string(&file.path).unwrap();
        assert_eq!(on_disk, file.content);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let corpus = alpha_beta();
    let generator = Generator::new(corpus.config());
    let first = corpus.root().join("first");
    let second = corpus.root().join("second");

    generator.generate(&first).unwrap();
    generator.generate(&second).unwrap();

    for name in ["alpha.ts", "beta.ts", "main.ts"] {
        let a = std::fs::read(first.join(name)).unwrap();
        let b = std::fs::read(second.join(name)).unwrap();
        assert_eq!(a, b, "{} differs between runs", name);
    }
}

#[test]
fn test_request_field_order_follows_synopsis() {
    let corpus = Corpus::new().unwrap();
    corpus
        .command(
            "gamma",
            &reference_doc(
                "gamma",
                "**gamma** *zeta* *alpha* \\[*mid*\\] \\[*beta*\\]",
                "Gamma.",
            ),
            &empty_response(),
        )
        .unwrap();
    let preview = preview(&corpus);

    let gamma = get_file(&preview, &output_path(&corpus, "gamma.ts")).unwrap();
    assert!(gamma.contains(
        "export interface GammaRequest {\n  \
         zeta: /* GUESSED */ string;\n  \
         alpha: /* GUESSED */ string;\n  \
         mid?: /* GUESSED */ string;\n  \
         beta?: /* GUESSED */ string;\n\
         }\n"
    ));
}

#[test]
fn test_unbindable_documents_are_skipped() {
    let corpus = alpha_beta();
    corpus
        .command(
            "broken",
            &reference_doc("broken", "*broken", "Never bound."),
            &empty_response(),
        )
        .unwrap()
        .command(
            "headless",
            "lightning-headless -- Command headless\n\nSYNOPSIS\n\n**headless**\n",
            &empty_response(),
        )
        .unwrap();
    let preview = preview(&corpus);

    assert_eq!(preview.summary.commands, vec!["alpha", "beta"]);
    assert_eq!(preview.summary.skipped, vec!["broken", "headless"]);
    assert!(preview.summary.has_errors());

    let errors: Vec<(&str, Option<&str>)> = preview
        .summary
        .diagnostics
        .iter()
        .filter(|d| d.severity.is_error())
        .map(|d| (d.phase.as_str(), d.location.as_deref()))
        .collect();
    assert_eq!(
        errors,
        vec![("synopsis", Some("broken")), ("sections", Some("headless"))]
    );

    assert!(get_file(&preview, &output_path(&corpus, "broken.ts")).is_none());
    let main = get_file(&preview, &output_path(&corpus, "main.ts")).unwrap();
    assert!(!main.contains("broken"));
    assert!(!main.contains("headless"));
}

#[test]
fn test_synopsis_warnings_are_reported() {
    let corpus = Corpus::new().unwrap();
    corpus
        .command(
            "close",
            &reference_doc("close", "**close** *id* | *peer_id*", "Close."),
            &empty_response(),
        )
        .unwrap();
    let preview = preview(&corpus);

    assert_eq!(preview.summary.commands, vec!["close"]);
    assert_eq!(preview.summary.warning_count(), 1);
    let close = get_file(&preview, &output_path(&corpus, "close.ts")).unwrap();
    assert!(close.contains("  peer_id: /* GUESSED */ string;\n"));
}

#[test]
fn test_clashing_method_names_skip_the_later_command() {
    let corpus = Corpus::new().unwrap();
    corpus
        .command(
            "dev-foo",
            &reference_doc("dev-foo", "**dev-foo**", "First."),
            &empty_response(),
        )
        .unwrap()
        .command(
            "dev_foo",
            &reference_doc("dev_foo", "**dev_foo**", "Second."),
            &empty_response(),
        )
        .unwrap();
    let preview = preview(&corpus);

    assert_eq!(preview.summary.commands, vec!["dev-foo"]);
    assert_eq!(preview.summary.skipped, vec!["dev_foo"]);
    let clash = preview
        .summary
        .diagnostics
        .iter()
        .find(|d| d.phase == "bind")
        .expect("clash not reported");
    assert_eq!(clash.location.as_deref(), Some("dev_foo"));
    assert!(clash.message.contains("'devFoo'"));
}

#[test]
fn test_debug_dir_receives_normalized_schemas() {
    let corpus = alpha_beta();
    let mut config = Config::default();
    config.output.debug_dir = Some(PathBuf::from("debug"));
    let generator = Generator::new(corpus.config_with(config));

    let result = generator.generate(&generator.output_dir()).unwrap();
    assert_eq!(
        result.written,
        vec![
            corpus.output_dir().join("alpha.ts"),
            corpus.root().join("debug/alpha.json"),
            corpus.output_dir().join("beta.ts"),
            corpus.root().join("debug/beta.json"),
            corpus.output_dir().join("main.ts"),
        ]
    );

    let dumped: Value = serde_json::from_str(&corpus.read("debug/beta.json").unwrap()).unwrap();
    assert_eq!(dumped["properties"]["echo"]["type"], "string");
    assert!(dumped["properties"].get("old").is_none());
}

#[test]
fn test_compile_error_aborts_after_partial_output() {
    let corpus = alpha_beta();
    corpus
        .command(
            "gamma",
            &reference_doc("gamma", "**gamma**", "Gamma."),
            &json!({
                "type": "object",
                "properties": { "funding": { "type": "outpoint" } }
            }),
        )
        .unwrap();
    let generator = Generator::new(corpus.config());

    let err = generator.generate(&generator.output_dir()).unwrap_err();
    assert_eq!(err.to_string(), "failed to compile the response type of 'gamma'");
    let cause = err.chain().nth(1).unwrap().to_string();
    assert_eq!(
        cause,
        "cannot compile type 'GammaResponse' at '#/properties/funding/type': unknown type 'outpoint'"
    );

    assert!(corpus.output_dir().join("alpha.ts").exists());
    assert!(corpus.output_dir().join("beta.ts").exists());
    assert!(!corpus.output_dir().join("gamma.ts").exists());
    assert!(!corpus.output_dir().join("main.ts").exists());
}

#[test]
fn test_configured_tags_are_normalized() {
    let corpus = Corpus::new().unwrap();
    corpus
        .command(
            "gamma",
            &reference_doc("gamma", "**gamma**", "Gamma."),
            &json!({
                "type": "object",
                "required": ["funding"],
                "properties": { "funding": { "type": "outpoint" } }
            }),
        )
        .unwrap()
        .file("docbind.toml", "[types]\noutpoint = \"string\"\n")
        .unwrap();
    let config = docbind_manual::ConfigFile::open(corpus.root().join("docbind.toml")).unwrap();
    let preview = Generator::new(config)
        .preview(&corpus.output_dir())
        .unwrap();

    let gamma = get_file(&preview, &output_path(&corpus, "gamma.ts")).unwrap();
    assert!(gamma.contains("  funding: string;\n"));
}

#[test]
fn test_command_cannot_replace_client_file() {
    let corpus = alpha_beta();
    let mut config = Config::default();
    config.output.client_file = "beta.ts".to_string();

    let err = Generator::new(corpus.config_with(config))
        .preview(&corpus.output_dir())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "command 'beta' would overwrite the client file 'beta.ts'"
    );
}

#[test]
fn test_missing_schema_is_fatal() {
    let corpus = alpha_beta();
    corpus
        .file("doc/lightning-gamma.7.md", &reference_doc("gamma", "**gamma**", "Gamma."))
        .unwrap();

    assert!(
        Generator::new(corpus.config())
            .preview(&corpus.output_dir())
            .is_err()
    );
}

#[test]
fn test_preview_follows_requested_output_dir() {
    let corpus = alpha_beta();
    let elsewhere = corpus.root().join("elsewhere");
    let preview = Generator::new(corpus.config()).preview(&elsewhere).unwrap();

    let paths: Vec<String> = preview.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            elsewhere.join("alpha.ts").display().to_string(),
            elsewhere.join("beta.ts").display().to_string(),
            elsewhere.join("main.ts").display().to_string(),
        ]
    );
    assert!(!elsewhere.exists());
}

#[test]
fn test_empty_corpus_still_writes_client() {
    let corpus = Corpus::new().unwrap();
    let preview = preview(&corpus);

    assert_eq!(preview.files.len(), 1);
    assert_eq!(preview.files[0].path, output_path(&corpus, "main.ts"));
    assert!(preview.summary.commands.is_empty());
}
