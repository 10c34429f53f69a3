//! Required-field and per-field type checks.

use super::formats::{UrlCheck, check_http_url, parse_date};
use crate::finding::FindingKind;
use crate::schema::{FieldType, Schema};
use crate::validator::ValidationContext;
use crate::value::{FrontMatter, FrontMatterValue};

/// One error per required field that is absent, null or the empty string.
pub(crate) fn check_required_fields(
    schema: &Schema,
    front_matter: &FrontMatter,
    ctx: &mut ValidationContext,
) {
    for field in &schema.required_fields {
        let present = match front_matter.get(field) {
            None | Some(FrontMatterValue::Null) => false,
            Some(FrontMatterValue::String(s)) => !s.is_empty(),
            Some(_) => true,
        };
        if !present {
            ctx.add(FindingKind::MissingRequiredField {
                field: field.clone(),
            });
        }
    }
}

/// Check every front-matter field that has a declared type.
///
/// Fields declared in the schema but absent from the document are left to the
/// required-field check.
pub(crate) fn check_field_types(
    schema: &Schema,
    front_matter: &FrontMatter,
    ctx: &mut ValidationContext,
) {
    for (field, value) in front_matter {
        if let Some(field_type) = schema.field_type(field) {
            check_field(schema, field, field_type, value, ctx);
        }
    }
}

fn check_field(
    schema: &Schema,
    field: &str,
    field_type: FieldType,
    value: &FrontMatterValue,
    ctx: &mut ValidationContext,
) {
    match field_type {
        FieldType::String => {
            if !matches!(value, FrontMatterValue::String(_)) {
                ctx.add(type_mismatch(field, field_type, value));
            }
        }
        FieldType::Array => {
            if !matches!(value, FrontMatterValue::Sequence(_)) {
                ctx.add(type_mismatch(field, field_type, value));
            }
        }
        FieldType::Integer => {
            if !matches!(value, FrontMatterValue::Integer(_)) {
                ctx.add(type_mismatch(field, field_type, value));
            }
        }
        FieldType::Boolean => {
            if !matches!(value, FrontMatterValue::Bool(_)) {
                ctx.add(type_mismatch(field, field_type, value));
            }
        }
        FieldType::Date => check_date(field, value, ctx),
        FieldType::Url => check_url(field, value, ctx),
        FieldType::Enum => {
            // Without a registered list there is nothing to compare against
            if let Some(allowed) = schema.enum_values(field)
                && !enum_allows(allowed, value)
            {
                ctx.add(FindingKind::InvalidEnumValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    allowed: allowed.iter().map(ToString::to_string).collect(),
                });
            }
        }
    }
}

/// Numbers match by value, so `1` and `1.0` are the same entry.
fn enum_allows(allowed: &[FrontMatterValue], value: &FrontMatterValue) -> bool {
    allowed
        .iter()
        .any(|candidate| match (candidate.as_f64(), value.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => candidate == value,
        })
}

fn check_date(field: &str, value: &FrontMatterValue, ctx: &mut ValidationContext) {
    match value {
        FrontMatterValue::String(s) => {
            if parse_date(s).is_none() {
                ctx.add(FindingKind::InvalidDate {
                    field: field.to_string(),
                    value: s.clone(),
                });
            }
        }
        other => ctx.add(type_mismatch(field, FieldType::Date, other)),
    }
}

/// Only textual values are checked; other types pass through.
fn check_url(field: &str, value: &FrontMatterValue, ctx: &mut ValidationContext) {
    let FrontMatterValue::String(s) = value else {
        return;
    };
    let wrong_scheme = match check_http_url(s) {
        UrlCheck::Valid => return,
        UrlCheck::WrongScheme => true,
        UrlCheck::Unparseable => false,
    };
    ctx.add(FindingKind::InvalidUrl {
        field: field.to_string(),
        value: s.clone(),
        wrong_scheme,
    });
}

fn type_mismatch(field: &str, expected: FieldType, value: &FrontMatterValue) -> FindingKind {
    FindingKind::TypeMismatch {
        field: field.to_string(),
        expected: expected.to_string(),
        got: value.type_name().to_string(),
    }
}
