//! Plugin parameters
//!
//! A parameter is one user-editable setting of a plugin (or one argument of
//! a plugin command, or one field of a struct). The set of parameter kinds
//! is closed: every kind tag the loader understands has exactly one
//! [`ParamKind`] and one [`ParamValue`] variant.
//!
//! Parameters are deserialized from the schema shape used by plugin
//! authors, where the kind is carried by a `type` tag and kind-specific
//! fields sit next to the common ones:
//!
//! ```json
//! { "name": "speed", "type": "number", "min": 1, "max": 10, "decimals": 0, "default": 4 }
//! ```

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::localized::LocalizedString;

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("Unknown parameter type '{kind}' for parameter '{name}'")]
    UnknownKind { name: String, kind: String },

    #[error("Parameter '{name}' of type '{kind}' is missing required field '{field}'")]
    MissingField {
        name: String,
        kind: ParamKind,
        field: &'static str,
    },

    #[error("Invalid '{field}' for parameter '{name}': {source}")]
    InvalidField {
        name: String,
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// In-game database tables a parameter can reference by ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseKind {
    Actor,
    Class,
    Skill,
    Item,
    Weapon,
    Armor,
    Enemy,
    Troop,
    State,
    Animation,
    Tileset,
    CommonEvent,
    Switch,
    Variable,
}

impl DatabaseKind {
    /// Returns the kind tag used in annotations
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Actor => "actor",
            DatabaseKind::Class => "class",
            DatabaseKind::Skill => "skill",
            DatabaseKind::Item => "item",
            DatabaseKind::Weapon => "weapon",
            DatabaseKind::Armor => "armor",
            DatabaseKind::Enemy => "enemy",
            DatabaseKind::Troop => "troop",
            DatabaseKind::State => "state",
            DatabaseKind::Animation => "animation",
            DatabaseKind::Tileset => "tileset",
            DatabaseKind::CommonEvent => "common_event",
            DatabaseKind::Switch => "switch",
            DatabaseKind::Variable => "variable",
        }
    }

    /// Returns all database kinds
    pub fn all() -> &'static [DatabaseKind] {
        &[
            DatabaseKind::Actor,
            DatabaseKind::Class,
            DatabaseKind::Skill,
            DatabaseKind::Item,
            DatabaseKind::Weapon,
            DatabaseKind::Armor,
            DatabaseKind::Enemy,
            DatabaseKind::Troop,
            DatabaseKind::State,
            DatabaseKind::Animation,
            DatabaseKind::Tileset,
            DatabaseKind::CommonEvent,
            DatabaseKind::Switch,
            DatabaseKind::Variable,
        ]
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatabaseKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Unknown database kind: {}", s))
    }
}

/// The closed set of parameter kind tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    String,
    StringArray,
    MultilineString,
    MultilineStringArray,
    Note,
    NoteArray,
    Number,
    NumberArray,
    Boolean,
    BooleanArray,
    File,
    FileArray,
    Select,
    SelectArray,
    Combo,
    Database(DatabaseKind),
    DatabaseArray(DatabaseKind),
    Struct,
    StructArray,
}

impl ParamKind {
    /// Returns every kind, scalar before list for each family
    pub fn all() -> Vec<ParamKind> {
        let mut kinds = vec![
            ParamKind::String,
            ParamKind::StringArray,
            ParamKind::MultilineString,
            ParamKind::MultilineStringArray,
            ParamKind::Note,
            ParamKind::NoteArray,
            ParamKind::Number,
            ParamKind::NumberArray,
            ParamKind::Boolean,
            ParamKind::BooleanArray,
            ParamKind::File,
            ParamKind::FileArray,
            ParamKind::Select,
            ParamKind::SelectArray,
            ParamKind::Combo,
        ];
        for db in DatabaseKind::all() {
            kinds.push(ParamKind::Database(*db));
            kinds.push(ParamKind::DatabaseArray(*db));
        }
        kinds.push(ParamKind::Struct);
        kinds.push(ParamKind::StructArray);
        kinds
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::String => write!(f, "string"),
            ParamKind::StringArray => write!(f, "string[]"),
            ParamKind::MultilineString => write!(f, "multiline_string"),
            ParamKind::MultilineStringArray => write!(f, "multiline_string[]"),
            ParamKind::Note => write!(f, "note"),
            ParamKind::NoteArray => write!(f, "note[]"),
            ParamKind::Number => write!(f, "number"),
            ParamKind::NumberArray => write!(f, "number[]"),
            ParamKind::Boolean => write!(f, "boolean"),
            ParamKind::BooleanArray => write!(f, "boolean[]"),
            ParamKind::File => write!(f, "file"),
            ParamKind::FileArray => write!(f, "file[]"),
            ParamKind::Select => write!(f, "select"),
            ParamKind::SelectArray => write!(f, "select[]"),
            ParamKind::Combo => write!(f, "combo"),
            ParamKind::Database(db) => write!(f, "{}", db),
            ParamKind::DatabaseArray(db) => write!(f, "{}[]", db),
            ParamKind::Struct => write!(f, "struct"),
            ParamKind::StructArray => write!(f, "struct[]"),
        }
    }
}

impl FromStr for ParamKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ParamKind::String),
            "string[]" => Ok(ParamKind::StringArray),
            "multiline_string" => Ok(ParamKind::MultilineString),
            "multiline_string[]" => Ok(ParamKind::MultilineStringArray),
            "note" => Ok(ParamKind::Note),
            "note[]" => Ok(ParamKind::NoteArray),
            "number" => Ok(ParamKind::Number),
            "number[]" => Ok(ParamKind::NumberArray),
            "boolean" => Ok(ParamKind::Boolean),
            "boolean[]" => Ok(ParamKind::BooleanArray),
            "file" => Ok(ParamKind::File),
            "file[]" => Ok(ParamKind::FileArray),
            "select" => Ok(ParamKind::Select),
            "select[]" => Ok(ParamKind::SelectArray),
            "combo" => Ok(ParamKind::Combo),
            "struct" => Ok(ParamKind::Struct),
            "struct[]" => Ok(ParamKind::StructArray),
            other => {
                let parsed = match other.strip_suffix("[]") {
                    Some(db) => db.parse().map(ParamKind::DatabaseArray),
                    None => other.parse().map(ParamKind::Database),
                };
                parsed.map_err(|_| format!("Unknown parameter type: {}", s))
            }
        }
    }
}

/// One entry of a `select` parameter
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectOption {
    /// Label shown in the plugin manager
    pub name: LocalizedString,

    /// Stored value (string or number)
    pub value: Value,
}

impl SelectOption {
    pub fn new(name: impl Into<LocalizedString>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Optional bounds and precision of a numeric parameter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberRange {
    pub min: Option<Number>,
    pub max: Option<Number>,
    pub decimals: u32,
}

/// Labels of a boolean parameter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BooleanLabels {
    pub on: LocalizedString,
    pub off: LocalizedString,
}

impl BooleanLabels {
    pub fn new(on: impl Into<LocalizedString>, off: impl Into<LocalizedString>) -> Self {
        Self {
            on: on.into(),
            off: off.into(),
        }
    }
}

/// Kind-specific data of a parameter, including its default value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    String { default: Option<LocalizedString> },
    StringArray { default: Vec<LocalizedString> },
    MultilineString { default: Option<LocalizedString> },
    MultilineStringArray { default: Vec<LocalizedString> },
    Note { default: LocalizedString },
    NoteArray { default: Vec<LocalizedString> },
    Number { range: NumberRange, default: Number },
    NumberArray {
        range: NumberRange,
        default: Vec<Number>,
    },
    Boolean {
        labels: BooleanLabels,
        default: bool,
    },
    BooleanArray {
        labels: BooleanLabels,
        default: Vec<bool>,
    },
    File {
        dir: String,
        default: Option<String>,
    },
    FileArray { dir: String, default: Vec<String> },
    /// `default` holds an option value, string or number like [`SelectOption::value`]
    Select {
        options: Vec<SelectOption>,
        default: Option<Value>,
    },
    SelectArray {
        options: Vec<SelectOption>,
        default: Vec<Value>,
    },
    Combo {
        options: Vec<LocalizedString>,
        default: Option<String>,
    },
    Database { kind: DatabaseKind, default: u32 },
    DatabaseArray {
        kind: DatabaseKind,
        default: Vec<u32>,
    },
    /// `default` is a record shaped like the struct, or a language-keyed map of such records
    Struct { name: String, default: Value },
    StructArray { name: String, default: Vec<Value> },
}

impl ParamValue {
    /// Returns the kind tag of this value
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::String { .. } => ParamKind::String,
            ParamValue::StringArray { .. } => ParamKind::StringArray,
            ParamValue::MultilineString { .. } => ParamKind::MultilineString,
            ParamValue::MultilineStringArray { .. } => ParamKind::MultilineStringArray,
            ParamValue::Note { .. } => ParamKind::Note,
            ParamValue::NoteArray { .. } => ParamKind::NoteArray,
            ParamValue::Number { .. } => ParamKind::Number,
            ParamValue::NumberArray { .. } => ParamKind::NumberArray,
            ParamValue::Boolean { .. } => ParamKind::Boolean,
            ParamValue::BooleanArray { .. } => ParamKind::BooleanArray,
            ParamValue::File { .. } => ParamKind::File,
            ParamValue::FileArray { .. } => ParamKind::FileArray,
            ParamValue::Select { .. } => ParamKind::Select,
            ParamValue::SelectArray { .. } => ParamKind::SelectArray,
            ParamValue::Combo { .. } => ParamKind::Combo,
            ParamValue::Database { kind, .. } => ParamKind::Database(*kind),
            ParamValue::DatabaseArray { kind, .. } => ParamKind::DatabaseArray(*kind),
            ParamValue::Struct { .. } => ParamKind::Struct,
            ParamValue::StructArray { .. } => ParamKind::StructArray,
        }
    }
}

/// A single plugin parameter, command argument, or struct field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawParameter")]
pub struct Parameter {
    /// Identifier the plugin reads the value by
    pub name: String,

    /// Name of an enclosing parameter, used by the plugin manager for grouping
    pub parent: Option<LocalizedString>,

    /// Display name
    pub text: Option<LocalizedString>,

    /// Help text shown under the parameter
    pub description: Option<LocalizedString>,

    /// Kind and default value
    pub value: ParamValue,
}

impl Parameter {
    /// Creates a parameter with no parent, text or description
    pub fn new(name: impl Into<String>, value: ParamValue) -> Self {
        Self {
            name: name.into(),
            parent: None,
            text: None,
            description: None,
            value,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<LocalizedString>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<LocalizedString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<LocalizedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the kind tag of this parameter
    pub fn kind(&self) -> ParamKind {
        self.value.kind()
    }
}

/// Schema shape of a parameter before its kind tag is checked
#[derive(Debug, Deserialize)]
struct RawParameter {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    parent: Option<LocalizedString>,
    #[serde(default)]
    text: Option<LocalizedString>,
    #[serde(default)]
    description: Option<LocalizedString>,
    #[serde(default)]
    default: Option<Value>,
    #[serde(default)]
    min: Option<Number>,
    #[serde(default)]
    max: Option<Number>,
    #[serde(default)]
    decimals: Option<u32>,
    #[serde(default)]
    on: Option<LocalizedString>,
    #[serde(default)]
    off: Option<LocalizedString>,
    #[serde(default)]
    options: Option<Value>,
    #[serde(default)]
    dir: Option<String>,
    #[serde(default, rename = "struct")]
    struct_name: Option<String>,
}

impl RawParameter {
    fn convert<T: DeserializeOwned>(
        &self,
        field: &'static str,
        value: Value,
    ) -> Result<T, ParamError> {
        serde_json::from_value(value).map_err(|source| ParamError::InvalidField {
            name: self.name.clone(),
            field,
            source,
        })
    }

    /// The default, or `None` when absent or null
    fn optional_default<T: DeserializeOwned>(&mut self) -> Result<Option<T>, ParamError> {
        match self.default.take() {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.convert("default", value).map(Some),
        }
    }

    /// The default, or `T::default()` when absent or null
    fn default_or_empty<T: DeserializeOwned + Default>(&mut self) -> Result<T, ParamError> {
        Ok(self.optional_default()?.unwrap_or_default())
    }

    fn options<T: DeserializeOwned>(&mut self) -> Result<Vec<T>, ParamError> {
        match self.options.take() {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => self.convert("options", value),
        }
    }

    fn range(&self) -> NumberRange {
        NumberRange {
            min: self.min.clone(),
            max: self.max.clone(),
            decimals: self.decimals.unwrap_or(0),
        }
    }

    fn labels(&self) -> BooleanLabels {
        BooleanLabels {
            on: self.on.clone().unwrap_or_default(),
            off: self.off.clone().unwrap_or_default(),
        }
    }

    fn struct_name(&self, kind: ParamKind) -> Result<String, ParamError> {
        self.struct_name.clone().ok_or_else(|| ParamError::MissingField {
            name: self.name.clone(),
            kind,
            field: "struct",
        })
    }
}

impl TryFrom<RawParameter> for Parameter {
    type Error = ParamError;

    fn try_from(mut raw: RawParameter) -> Result<Self, Self::Error> {
        let kind: ParamKind = raw.kind.parse().map_err(|_| ParamError::UnknownKind {
            name: raw.name.clone(),
            kind: raw.kind.clone(),
        })?;

        let value = match kind {
            ParamKind::String => ParamValue::String {
                default: raw.optional_default()?,
            },
            ParamKind::StringArray => ParamValue::StringArray {
                default: raw.default_or_empty()?,
            },
            ParamKind::MultilineString => ParamValue::MultilineString {
                default: raw.optional_default()?,
            },
            ParamKind::MultilineStringArray => ParamValue::MultilineStringArray {
                default: raw.default_or_empty()?,
            },
            ParamKind::Note => ParamValue::Note {
                default: raw.default_or_empty()?,
            },
            ParamKind::NoteArray => ParamValue::NoteArray {
                default: raw.default_or_empty()?,
            },
            ParamKind::Number => ParamValue::Number {
                range: raw.range(),
                default: raw.optional_default()?.ok_or_else(|| ParamError::MissingField {
                    name: raw.name.clone(),
                    kind,
                    field: "default",
                })?,
            },
            ParamKind::NumberArray => ParamValue::NumberArray {
                range: raw.range(),
                default: raw.default_or_empty()?,
            },
            ParamKind::Boolean => ParamValue::Boolean {
                labels: raw.labels(),
                default: raw.default_or_empty()?,
            },
            ParamKind::BooleanArray => ParamValue::BooleanArray {
                labels: raw.labels(),
                default: raw.default_or_empty()?,
            },
            ParamKind::File => ParamValue::File {
                dir: raw.dir.clone().unwrap_or_default(),
                default: raw.optional_default()?,
            },
            ParamKind::FileArray => ParamValue::FileArray {
                dir: raw.dir.clone().unwrap_or_default(),
                default: raw.default_or_empty()?,
            },
            ParamKind::Select => ParamValue::Select {
                options: raw.options()?,
                default: raw.optional_default()?,
            },
            ParamKind::SelectArray => ParamValue::SelectArray {
                options: raw.options()?,
                default: raw.default_or_empty()?,
            },
            ParamKind::Combo => ParamValue::Combo {
                options: raw.options()?,
                default: raw.optional_default()?,
            },
            ParamKind::Database(db) => ParamValue::Database {
                kind: db,
                default: raw.default_or_empty()?,
            },
            ParamKind::DatabaseArray(db) => ParamValue::DatabaseArray {
                kind: db,
                default: raw.default_or_empty()?,
            },
            ParamKind::Struct => ParamValue::Struct {
                name: raw.struct_name(kind)?,
                default: raw
                    .optional_default()?
                    .unwrap_or_else(|| Value::Object(serde_json::Map::new())),
            },
            ParamKind::StructArray => ParamValue::StructArray {
                name: raw.struct_name(kind)?,
                default: raw.default_or_empty()?,
            },
        };

        Ok(Parameter {
            name: raw.name,
            parent: raw.parent,
            text: raw.text,
            description: raw.description,
            value,
        })
    }
}
