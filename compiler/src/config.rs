use serde::{Deserialize, Serialize};

use crate::annotations::AnnotationFramework;

/// Field nullability policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullableMode {
    #[default]
    NonNullable,
    Nullable,
    /// Nullable exactly when the origin value was empty or the literal `null`.
    Auto,
}

/// Field default-value policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValueStrategy {
    #[default]
    NoDefault,
    NonNullDefault,
    NullWhenNullable,
}

/// Generated class visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
}

/// All generation policies, passed read-only into every `generate` call.
/// Every option is independent; generation is a pure function of
/// (AST, configuration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    // Property options
    pub use_val:        bool,
    pub nullable:       NullableMode,
    pub default_values: DefaultValueStrategy,

    // Annotation options
    pub framework:                 AnnotationFramework,
    pub custom_annotation:         String,
    pub only_annotate_when_needed: bool,
    pub annotation_same_line:      bool,
    pub gson_expose:               bool,

    // Layout and naming
    pub order_alphabetical:    bool,
    pub inner_classes:         bool,
    pub indent:                usize,
    pub camel_case:            bool,
    pub property_prefix:       String,
    pub property_suffix:       String,
    pub class_prefix:          String,
    pub class_suffix:          String,
    pub parent_class_template: String,

    // Extensions
    pub comments:                     bool,
    pub force_primitive_non_nullable: bool,
    pub default_from_origin:          bool,
    pub member_variables:             bool,
    pub keep_annotation:              bool,
    /// When `keep_annotation` is set, import the AndroidX `@Keep` instead of
    /// the legacy support-library one.
    pub keep_annotation_androidx:     bool,
    pub parcelable:                   bool,
    pub visibility:                   Visibility,
    pub plain_class:                  bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            use_val:        true,
            nullable:       NullableMode::NonNullable,
            default_values: DefaultValueStrategy::NoDefault,

            framework:                 AnnotationFramework::None,
            custom_annotation:         String::new(),
            only_annotate_when_needed: false,
            annotation_same_line:      false,
            gson_expose:               false,

            order_alphabetical:    false,
            inner_classes:         false,
            indent:                4,
            camel_case:            false,
            property_prefix:       String::new(),
            property_suffix:       String::new(),
            class_prefix:          String::new(),
            class_suffix:          String::new(),
            parent_class_template: String::new(),

            comments:                     false,
            force_primitive_non_nullable: false,
            default_from_origin:          false,
            member_variables:             false,
            keep_annotation:              false,
            keep_annotation_androidx:     true,
            parcelable:                   false,
            visibility:                   Visibility::Public,
            plain_class:                  false,
        }
    }
}

impl GenerationConfig {
    /// Property names are camel-cased when explicitly requested or when any
    /// framework other than plain `None` is active (annotations then carry
    /// the original key).
    pub fn camel_case_names(&self) -> bool {
        self.camel_case || self.framework != AnnotationFramework::None
    }
}
