use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::{
    annotations,
    config::{DefaultValueStrategy, GenerationConfig, NullableMode, Visibility},
    infer::infer_value,
    naming::{capitalize, kotlin_quote, singularize, to_camel_case, to_pascal_case},
    types::{Document, Node},
};

/// Generates one Kotlin class per object/record-element type in the
/// document, keyed by class name. Later generation for the same name
/// replaces earlier output; names are deterministic functions of the AST, so
/// this only collapses identical units.
pub fn generate(doc: &Document, config: &GenerationConfig) -> IndexMap<String, String> {
    ClassGenerator::new(config).generate(doc)
}

/// One resolved field, ready for text assembly.
struct FieldSpec {
    original_key: String,
    /// Name after casing but before prefix/suffix; drives the
    /// "only annotate when needed" check.
    base_name: String,
    name:      String,
    type_name: String,
    nullable:  bool,
    default:   Option<String>,
    comment:   Option<String>,
}

/// A class rendered to text, with its imports kept separate so nested-class
/// splicing can hoist them into the outer unit's import block.
struct RenderedClass {
    text:    String,
    imports: BTreeSet<String>,
}

/// Walks the AST under one configuration and emits Kotlin source. The
/// generator never mutates the AST; all scratch state lives in `self` for
/// the duration of a single `generate` call.
pub struct ClassGenerator<'a> {
    config: &'a GenerationConfig,
    units:  IndexMap<String, String>,
}

impl<'a> ClassGenerator<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        ClassGenerator { config, units: IndexMap::new() }
    }

    pub fn generate(mut self, doc: &Document) -> IndexMap<String, String> {
        for root in &doc.roots {
            let rendered = self.render_object(&root.key, &root.children);
            self.insert_unit(&root.key, rendered);
        }
        self.units
    }

    fn class_name(&self, key: &str) -> String {
        format!(
            "{}{}{}",
            self.config.class_prefix,
            to_pascal_case(key),
            self.config.class_suffix
        )
    }

    /// Builds the field list for one object and renders its class. Nested
    /// objects and record-element types either become inner classes or are
    /// registered as separate units, per the layout policy.
    fn render_object(&mut self, key: &str, children: &[Node]) -> RenderedClass {
        let mut ordered: Vec<&Node> = children.iter().collect();
        if self.config.order_alphabetical {
            ordered.sort_by(|a, b| a.key().cmp(b.key()));
        }

        let mut fields = Vec::new();
        let mut inner = Vec::new();

        for node in ordered {
            match node {
                Node::Property { key, value } => {
                    fields.push(self.field_spec(
                        key,
                        value.kotlin_type().to_string(),
                        value.is_primitive(),
                        value.is_nullish(),
                        Some(value.literal()),
                        value.type_default().to_string(),
                        Some(value.literal()),
                    ));
                }

                Node::Object(obj) => {
                    let type_name = self.class_name(&obj.key);
                    let rendered = self.render_object(&obj.key, &obj.children);
                    if self.config.inner_classes {
                        inner.push(rendered);
                    } else {
                        self.insert_unit(&obj.key, rendered);
                    }

                    let ctor = format!("{}()", type_name);
                    fields.push(self.field_spec(
                        &obj.key,
                        type_name,
                        false,
                        false,
                        Some(ctor.clone()),
                        ctor,
                        None,
                    ));
                }

                Node::List { key, items } => {
                    let origin = format!(
                        "listOf({})",
                        items.iter().map(|item| kotlin_quote(item)).collect::<Vec<_>>().join(", ")
                    );
                    fields.push(self.field_spec(
                        key,
                        "List<String>".to_string(),
                        false,
                        false,
                        Some(origin),
                        "listOf()".to_string(),
                        Some(items.join(",")),
                    ));
                }

                Node::ObjectList { key, headers, rows } => {
                    let element_key = singularize(key);
                    let element_name = self.class_name(&element_key);

                    // Column types come from the first data row; a rowless
                    // collection is conservatively typed as strings.
                    let element_fields: Vec<FieldSpec> = headers
                        .iter()
                        .enumerate()
                        .map(|(col, header)| match rows.first() {
                            Some(row) => {
                                let value = infer_value(&row[col]);
                                self.field_spec(
                                    header,
                                    value.kotlin_type().to_string(),
                                    value.is_primitive(),
                                    value.is_nullish(),
                                    Some(value.literal()),
                                    value.type_default().to_string(),
                                    None,
                                )
                            }
                            None => self.field_spec(
                                header,
                                "String".to_string(),
                                false,
                                false,
                                None,
                                "\"\"".to_string(),
                                None,
                            ),
                        })
                        .collect();

                    let rendered = self.render_class(&element_key, &element_fields, &[]);
                    if self.config.inner_classes {
                        inner.push(rendered);
                    } else {
                        self.insert_unit(&element_key, rendered);
                    }

                    fields.push(self.field_spec(
                        key,
                        format!("List<{}>", element_name),
                        false,
                        false,
                        Some("listOf()".to_string()),
                        "listOf()".to_string(),
                        None,
                    ));
                }
            }
        }

        self.render_class(key, &fields, &inner)
    }

    /// Resolves name, nullability, and default for one field under the
    /// active configuration.
    #[allow(clippy::too_many_arguments)]
    fn field_spec(
        &self,
        key: &str,
        type_name: String,
        primitive: bool,
        nullish: bool,
        origin: Option<String>,
        type_default: String,
        comment: Option<String>,
    ) -> FieldSpec {
        let config = self.config;

        let base_name = if config.camel_case_names() {
            to_camel_case(key)
        } else {
            key.to_string()
        };

        let mut name = base_name.clone();
        if !config.property_prefix.is_empty() {
            name = format!("{}{}", config.property_prefix, capitalize(&name));
        }
        if !config.property_suffix.is_empty() {
            name.push_str(&config.property_suffix);
        }

        let mut nullable = match config.nullable {
            NullableMode::NonNullable => false,
            NullableMode::Nullable => true,
            NullableMode::Auto => nullish,
        };
        if primitive && config.force_primitive_non_nullable {
            nullable = false;
        }

        let mut default = if config.default_from_origin && origin.is_some() {
            origin
        } else {
            match config.default_values {
                DefaultValueStrategy::NoDefault => None,
                DefaultValueStrategy::NonNullDefault => Some(type_default.clone()),
                DefaultValueStrategy::NullWhenNullable => {
                    if nullable {
                        Some("null".to_string())
                    } else {
                        None
                    }
                }
            }
        };

        // Kotlin body properties require an initializer.
        if config.member_variables && default.is_none() {
            default = Some(if nullable { "null".to_string() } else { type_default });
        }

        FieldSpec {
            original_key: key.to_string(),
            base_name,
            name,
            type_name,
            nullable,
            default,
            comment: if config.comments { comment } else { None },
        }
    }

    /// Annotation lines for one field, recording the imports they require.
    fn field_annotations(&self, field: &FieldSpec, imports: &mut BTreeSet<String>) -> Vec<String> {
        let config = self.config;
        let mut lines = Vec::new();

        if config.gson_expose {
            lines.push("@Expose".to_string());
            imports.insert("com.google.gson.annotations.Expose".to_string());
        }

        let annotation = annotations::field_annotation(
            config.framework,
            &field.original_key,
            &config.custom_annotation,
        );
        if !annotation.is_empty() {
            let redundant =
                config.only_annotate_when_needed && field.base_name == field.original_key;
            if !redundant {
                lines.push(annotation);
                for import in annotations::field_imports(config.framework) {
                    imports.insert((*import).to_string());
                }
            }
        }

        lines
    }

    /// Assembles one class from resolved fields and already-rendered inner
    /// classes. Two layouts: constructor-style (fields as constructor
    /// parameters) and member-declaration-style (fields in the type body).
    fn render_class(
        &self,
        key_for_name: &str,
        fields: &[FieldSpec],
        inner: &[RenderedClass],
    ) -> RenderedClass {
        let config = self.config;
        let indent = " ".repeat(config.indent);
        let class_name = self.class_name(key_for_name);

        let mut imports = BTreeSet::new();

        let mut head = Vec::new();
        if config.keep_annotation {
            head.push("@Keep".to_string());
            imports.insert(
                if config.keep_annotation_androidx {
                    "androidx.annotation.Keep"
                } else {
                    "android.support.annotation.Keep"
                }
                .to_string(),
            );
        }
        if config.parcelable {
            head.push("@Parcelize".to_string());
            imports.insert("kotlinx.parcelize.Parcelize".to_string());
            imports.insert("android.os.Parcelable".to_string());
        }
        let class_annotation = annotations::class_annotation(config.framework);
        if !class_annotation.is_empty() {
            head.push(class_annotation.to_string());
            for import in annotations::class_imports(config.framework) {
                imports.insert((*import).to_string());
            }
        }

        let rendered_fields: Vec<(Vec<String>, String, Option<String>)> = fields
            .iter()
            .map(|field| {
                let annotation_lines = self.field_annotations(field, &mut imports);
                let keyword = if config.use_val { "val" } else { "var" };
                let null_suffix = if field.nullable { "?" } else { "" };
                let mut decl =
                    format!("{} {}: {}{}", keyword, field.name, field.type_name, null_suffix);
                if let Some(default) = &field.default {
                    decl.push_str(" = ");
                    decl.push_str(default);
                }
                (annotation_lines, decl, field.comment.clone())
            })
            .collect();

        let visibility = match config.visibility {
            Visibility::Internal => "internal ",
            Visibility::Public => "",
        };

        let mut supertypes = Vec::new();
        if !config.parent_class_template.trim().is_empty() {
            supertypes.push(config.parent_class_template.trim().to_string());
        }
        if config.parcelable {
            supertypes.push("Parcelable".to_string());
        }
        let super_clause = if supertypes.is_empty() {
            String::new()
        } else {
            format!(" : {}", supertypes.join(", "))
        };

        let mut out = String::new();
        for annotation in &head {
            out.push_str(annotation);
            out.push('\n');
        }

        let constructor_style = !config.member_variables && !rendered_fields.is_empty();
        if constructor_style {
            let kind = if config.plain_class { "class" } else { "data class" };
            out.push_str(&format!("{}{} {}(\n", visibility, kind, class_name));

            let count = rendered_fields.len();
            for (index, (annotation_lines, decl, comment)) in rendered_fields.iter().enumerate() {
                if config.annotation_same_line && !annotation_lines.is_empty() {
                    out.push_str(&format!("{}{} {}", indent, annotation_lines.join(" "), decl));
                } else {
                    for annotation in annotation_lines {
                        out.push_str(&format!("{}{}\n", indent, annotation));
                    }
                    out.push_str(&format!("{}{}", indent, decl));
                }
                if index + 1 < count {
                    out.push(',');
                }
                if let Some(comment) = comment {
                    out.push_str(" // ");
                    out.push_str(comment);
                }
                out.push('\n');
            }

            out.push(')');
            out.push_str(&super_clause);

            if !inner.is_empty() {
                out.push_str(" {\n");
                self.append_inner(&mut out, inner, &indent);
                out.push('}');
            }
        } else {
            // Member-declaration layout, or a class with no fields at all
            // (an empty `data class` parameter list is not valid Kotlin).
            out.push_str(&format!("{}class {}{}", visibility, class_name, super_clause));

            if !rendered_fields.is_empty() || !inner.is_empty() {
                out.push_str(" {\n");
                for (annotation_lines, decl, comment) in &rendered_fields {
                    if config.annotation_same_line && !annotation_lines.is_empty() {
                        out.push_str(&format!("{}{} {}", indent, annotation_lines.join(" "), decl));
                    } else {
                        for annotation in annotation_lines {
                            out.push_str(&format!("{}{}\n", indent, annotation));
                        }
                        out.push_str(&format!("{}{}", indent, decl));
                    }
                    if let Some(comment) = comment {
                        out.push_str(" // ");
                        out.push_str(comment);
                    }
                    out.push('\n');
                }
                if !inner.is_empty() {
                    if !rendered_fields.is_empty() {
                        out.push('\n');
                    }
                    self.append_inner(&mut out, inner, &indent);
                }
                out.push('}');
            }
        }

        for nested in inner {
            imports.extend(nested.imports.iter().cloned());
        }

        RenderedClass { text: out, imports }
    }

    /// Splices rendered inner classes into a class body, re-indented one
    /// level. Their import sets were already hoisted by the caller.
    fn append_inner(&self, out: &mut String, inner: &[RenderedClass], indent: &str) {
        for (index, nested) in inner.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            for line in nested.text.lines() {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str(indent);
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
    }

    /// Registers one finished top-level unit: sorted imports, blank line,
    /// class text.
    fn insert_unit(&mut self, key_for_name: &str, rendered: RenderedClass) {
        let name = self.class_name(key_for_name);

        let mut unit = String::new();
        if !rendered.imports.is_empty() {
            for import in &rendered.imports {
                unit.push_str("import ");
                unit.push_str(import);
                unit.push('\n');
            }
            unit.push('\n');
        }
        unit.push_str(&rendered.text);
        unit.push('\n');

        self.units.insert(name, unit);
    }
}
