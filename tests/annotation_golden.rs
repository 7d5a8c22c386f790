//! Golden tests for annotation output
//!
//! These pin the exact text the plugin loader parses. Any change here is a
//! change to the loader contract.

use plugin_annotation::annotation::{generate, BuildOptions};
use plugin_annotation::storage::{parse_schema, SchemaFormat};

fn render(json: &str, options: &BuildOptions) -> String {
    let config = parse_schema(json, SchemaFormat::Json).unwrap();
    generate(&config, options).unwrap()
}

fn lines(expected: &[&str]) -> String {
    expected.join("\n")
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn boolean_parameter_single_language() {
    let json = r#"{
        "target": ["MZ"],
        "title": "Demo",
        "author": "A",
        "params": [
            {"name": "flag", "type": "boolean", "on": "Yes", "off": "No", "default": true}
        ]
    }"#;

    assert_eq!(
        render(json, &BuildOptions::new(["en"], "en")),
        lines(&[
            "/*:",
            " * @target MZ",
            " * @plugindesc Demo",
            " * @author A",
            " *",
            " * @param flag",
            " * @type boolean",
            " * @on Yes",
            " * @off No",
            " * @default true",
            " */",
        ])
    );
}

#[test]
fn two_languages_default_block_unsuffixed() {
    let json = r#"{
        "target": ["MZ"],
        "title": {"en": "Demo", "ja": "デモ"},
        "author": "A"
    }"#;

    assert_eq!(
        render(json, &BuildOptions::new(["en", "ja"], "en")),
        lines(&[
            "/*:",
            " * @target MZ",
            " * @plugindesc Demo",
            " * @author A",
            " */",
            "",
            "/*:ja",
            " * @target MZ",
            " * @plugindesc デモ",
            " * @author A",
            " */",
        ])
    );
}

#[test]
fn legacy_platform_rules() {
    let json = r#"{
        "target": ["MV"],
        "title": "Legacy",
        "author": "A",
        "params": [
            {"name": "message", "type": "multiline_string", "default": "a\nb"},
            {"name": "face", "type": "file", "dir": "img/faces/", "default": "Actor1"}
        ]
    }"#;

    assert_eq!(
        render(json, &BuildOptions::single("en")),
        lines(&[
            "/*:",
            " * @target MV",
            " * @plugindesc Legacy",
            " * @author A",
            " *",
            " * @param message",
            " * @type note",
            r#" * @default "a\nb""#,
            " *",
            " * @param face",
            " * @type file",
            " * @dir img/faces/",
            " * @default Actor1",
            " * @require 1",
            " */",
        ])
    );
}

#[test]
fn struct_types_and_nested_defaults() {
    let json = r#"{
        "target": ["MZ"],
        "title": "Shapes",
        "author": "A",
        "params": [
            {
                "name": "line",
                "type": "struct",
                "struct": "Line",
                "text": {"en": "Line", "ja": "線"},
                "default": {"from": {"x": 0, "y": 0}, "to": {"x": 1, "y": 2}}
            }
        ],
        "structs": [
            {
                "name": "Point",
                "params": [
                    {"name": "x", "type": "number", "default": 0},
                    {"name": "y", "type": "number", "default": 0}
                ]
            },
            {
                "name": "Line",
                "params": [
                    {"name": "from", "type": "struct", "struct": "Point"},
                    {"name": "to", "type": "struct", "struct": "Point"}
                ]
            }
        ]
    }"#;

    assert_eq!(
        render(json, &BuildOptions::new(["en", "ja"], "en")),
        lines(&[
            "/*:",
            " * @target MZ",
            " * @plugindesc Shapes",
            " * @author A",
            " *",
            " * @param line",
            " * @text Line",
            " * @type struct<Line>",
            r#" * @default {"from":"{\"x\":\"0\",\"y\":\"0\"}","to":"{\"x\":\"1\",\"y\":\"2\"}"}"#,
            " */",
            "",
            "/*~struct~Point:",
            " *",
            " * @param x",
            " * @type number",
            " * @default 0",
            " *",
            " * @param y",
            " * @type number",
            " * @default 0",
            " */",
            "",
            "/*~struct~Line:",
            " *",
            " * @param from",
            " * @type struct<Point>",
            " * @default {}",
            " *",
            " * @param to",
            " * @type struct<Point>",
            " * @default {}",
            " */",
            "",
            "/*:ja",
            " * @target MZ",
            " * @plugindesc Shapes",
            " * @author A",
            " *",
            " * @param line",
            " * @text 線",
            " * @type struct<Line>",
            r#" * @default {"from":"{\"x\":\"0\",\"y\":\"0\"}","to":"{\"x\":\"1\",\"y\":\"2\"}"}"#,
            " */",
            "",
            "/*~struct~Point:ja",
            " *",
            " * @param x",
            " * @type number",
            " * @default 0",
            " *",
            " * @param y",
            " * @type number",
            " * @default 0",
            " */",
            "",
            "/*~struct~Line:ja",
            " *",
            " * @param from",
            " * @type struct<Point>",
            " * @default {}",
            " *",
            " * @param to",
            " * @type struct<Point>",
            " * @default {}",
            " */",
        ])
    );
}

#[test]
fn commands_with_arguments() {
    let json = r#"{
        "target": ["MZ"],
        "title": "Cmd",
        "author": "A",
        "commands": [
            {
                "name": "open",
                "text": {"en": "Open", "ja": "開く"},
                "description": "Opens a window",
                "args": [
                    {"name": "actor", "type": "actor", "text": "Actor", "default": 1},
                    {"name": "items", "type": "item[]", "default": [1, 2]}
                ]
            }
        ]
    }"#;

    assert_eq!(
        render(json, &BuildOptions::new(["ja"], "en")),
        lines(&[
            "/*:ja",
            " * @target MZ",
            " * @plugindesc Cmd",
            " * @author A",
            " *",
            " * @command open",
            " * @text 開く",
            " * @desc Opens a window",
            " *",
            " * @arg actor",
            " * @text Actor",
            " * @type actor",
            " * @default 1",
            " *",
            " * @arg items",
            " * @type item[]",
            " * @default [1,2]",
            " */",
        ])
    );
}

#[test]
fn missing_translation_renders_empty_directive() {
    let json = r#"{
        "target": ["MZ"],
        "title": {"de": "Demo"},
        "author": "A"
    }"#;

    let text = render(json, &BuildOptions::single("en"));
    assert!(text.contains("\n * @plugindesc\n"));
}

#[test]
fn select_numeric_values_and_defaults() {
    let json = r#"{
        "target": ["MZ"],
        "title": "Select",
        "author": "A",
        "params": [
            {
                "name": "level",
                "type": "select",
                "options": [
                    {"name": "One", "value": 1},
                    {"name": {"en": "Two", "ja": "二"}, "value": 2}
                ],
                "default": 2
            },
            {
                "name": "levels",
                "type": "select[]",
                "options": [{"name": "One", "value": 1}],
                "default": [1]
            }
        ]
    }"#;

    assert_eq!(
        render(json, &BuildOptions::single("en")),
        lines(&[
            "/*:",
            " * @target MZ",
            " * @plugindesc Select",
            " * @author A",
            " *",
            " * @param level",
            " * @type select",
            " * @option One",
            " * @value 1",
            " * @option Two",
            " * @value 2",
            " * @default 2",
            " *",
            " * @param levels",
            " * @type select[]",
            " * @option One",
            " * @value 1",
            " * @default [1]",
            " */",
        ])
    );
}

// =============================================================================
// List kinds on both platforms
// =============================================================================

const LIST_KINDS: &str = r#"{
    "target": ["TARGET"],
    "title": "Lists",
    "author": "A",
    "params": [
        {"name": "flags", "type": "boolean[]", "on": "On", "off": "Off", "default": [true, false]},
        {
            "name": "rates", "type": "number[]",
            "min": 0, "max": 10.0, "decimals": 1, "default": [1.5, 2.0]
        },
        {"name": "faces", "type": "file[]", "dir": "img/faces/", "default": ["Actor1"]},
        {"name": "memos", "type": "note[]", "default": ["a\nb"]},
        {"name": "points", "type": "struct[]", "struct": "Point", "default": [{"x": 1, "y": 2.0}]}
    ]
}"#;

fn list_kinds_expected(target: &str, legacy: bool) -> String {
    let target_line = format!(" * @target {}", target);
    let mut expected = vec![
        "/*:",
        target_line.as_str(),
        " * @plugindesc Lists",
        " * @author A",
        " *",
        " * @param flags",
        " * @type boolean[]",
        " * @on On",
        " * @off Off",
        " * @default [true,false]",
        " *",
        " * @param rates",
        " * @type number[]",
        " * @min 0",
        " * @max 10",
        " * @decimals 1",
        " * @default [1.5,2]",
        " *",
        " * @param faces",
        " * @type file[]",
        " * @dir img/faces/",
        r#" * @default ["Actor1"]"#,
    ];
    if legacy {
        expected.push(" * @require 1");
    }
    expected.extend([
        " *",
        " * @param memos",
        " * @type note[]",
        r#" * @default ["\"a\\nb\""]"#,
        " *",
        " * @param points",
        " * @type struct<Point>[]",
        r#" * @default ["{\"x\":\"1\",\"y\":\"2\"}"]"#,
        " */",
    ]);
    lines(&expected)
}

#[test]
fn list_kinds_current_platform() {
    let json = LIST_KINDS.replace("TARGET", "MZ");
    assert_eq!(
        render(&json, &BuildOptions::single("en")),
        list_kinds_expected("MZ", false)
    );
}

#[test]
fn list_kinds_legacy_platform() {
    let json = LIST_KINDS.replace("TARGET", "MV");
    assert_eq!(
        render(&json, &BuildOptions::single("en")),
        list_kinds_expected("MV", true)
    );
}
