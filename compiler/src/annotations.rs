use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Serialization frameworks the generator can annotate fields for. Each
/// entry maps to one library's annotation style in the generated Kotlin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationFramework {
    #[default]
    None,
    NoneCamelCase,
    Gson,
    Jackson,
    Fastjson,
    MoshiReflect,
    MoshiCodegen,
    LoganSquare,
    Kotlinx,
    Custom,
    Firebase,
}

impl AnnotationFramework {
    pub fn display_name(&self) -> &'static str {
        match self {
            AnnotationFramework::None          => "None",
            AnnotationFramework::NoneCamelCase => "None (Camel Case)",
            AnnotationFramework::Gson          => "Gson",
            AnnotationFramework::Jackson       => "Jackson",
            AnnotationFramework::Fastjson      => "Fastjson",
            AnnotationFramework::MoshiReflect  => "MoShi (Reflect)",
            AnnotationFramework::MoshiCodegen  => "MoShi (Codegen)",
            AnnotationFramework::LoganSquare   => "LoganSquare",
            AnnotationFramework::Kotlinx       => "kotlinx.serialization",
            AnnotationFramework::Custom        => "Custom",
            AnnotationFramework::Firebase      => "Firebase",
        }
    }
}

impl FromStr for AnnotationFramework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none"            => Ok(AnnotationFramework::None),
            "none-camel-case" => Ok(AnnotationFramework::NoneCamelCase),
            "gson"            => Ok(AnnotationFramework::Gson),
            "jackson"         => Ok(AnnotationFramework::Jackson),
            "fastjson"        => Ok(AnnotationFramework::Fastjson),
            "moshi-reflect"   => Ok(AnnotationFramework::MoshiReflect),
            "moshi-codegen"   => Ok(AnnotationFramework::MoshiCodegen),
            "logan-square"    => Ok(AnnotationFramework::LoganSquare),
            "kotlinx"         => Ok(AnnotationFramework::Kotlinx),
            "custom"          => Ok(AnnotationFramework::Custom),
            "firebase"        => Ok(AnnotationFramework::Firebase),
            other => Err(format!("unknown annotation framework {:?}", other)),
        }
    }
}

/// The per-field annotation for `key`, or an empty string when the framework
/// emits none. `Custom` substitutes `key` into the user template's `%s`
/// placeholder, falling back to a Gson-style annotation when the template is
/// blank.
pub fn field_annotation(
    framework: AnnotationFramework,
    key: &str,
    custom_template: &str,
) -> String {
    match framework {
        AnnotationFramework::None | AnnotationFramework::NoneCamelCase => String::new(),
        AnnotationFramework::Gson => format!("@SerializedName(\"{}\")", key),
        AnnotationFramework::Jackson => format!("@JsonProperty(\"{}\")", key),
        AnnotationFramework::Fastjson => format!("@JSONField(name = \"{}\")", key),
        AnnotationFramework::MoshiReflect | AnnotationFramework::MoshiCodegen => {
            format!("@Json(name = \"{}\")", key)
        }
        AnnotationFramework::LoganSquare => format!("@JsonField(name = arrayOf(\"{}\"))", key),
        AnnotationFramework::Kotlinx => format!("@SerialName(\"{}\")", key),
        AnnotationFramework::Firebase => format!("@PropertyName(\"{}\")", key),
        AnnotationFramework::Custom => {
            if custom_template.trim().is_empty() {
                format!("@SerializedName(\"{}\")", key)
            } else {
                custom_template.replace("%s", key)
            }
        }
    }
}

/// Import statements required by the field-level annotation.
pub fn field_imports(framework: AnnotationFramework) -> &'static [&'static str] {
    match framework {
        AnnotationFramework::None
        | AnnotationFramework::NoneCamelCase
        | AnnotationFramework::Custom => &[],
        AnnotationFramework::Gson => &["com.google.gson.annotations.SerializedName"],
        AnnotationFramework::Jackson => &["com.fasterxml.jackson.annotation.JsonProperty"],
        AnnotationFramework::Fastjson => &["com.alibaba.fastjson.annotation.JSONField"],
        AnnotationFramework::MoshiReflect | AnnotationFramework::MoshiCodegen => {
            &["com.squareup.moshi.Json"]
        }
        AnnotationFramework::LoganSquare => &["com.bluelinelabs.logansquare.annotation.JsonField"],
        AnnotationFramework::Kotlinx => {
            &["kotlinx.serialization.SerialName", "kotlinx.serialization.Serializable"]
        }
        AnnotationFramework::Firebase => &["com.google.firebase.firestore.PropertyName"],
    }
}

/// The class-level annotation required by the framework (e.g. kotlinx needs
/// `@Serializable` on the whole class), or an empty string.
pub fn class_annotation(framework: AnnotationFramework) -> &'static str {
    match framework {
        AnnotationFramework::Kotlinx => "@Serializable",
        AnnotationFramework::LoganSquare => "@JsonObject",
        _ => "",
    }
}

/// Imports required by the class-level annotation.
pub fn class_imports(framework: AnnotationFramework) -> &'static [&'static str] {
    match framework {
        AnnotationFramework::LoganSquare => {
            &["com.bluelinelabs.logansquare.annotation.JsonObject"]
        }
        _ => &[],
    }
}
