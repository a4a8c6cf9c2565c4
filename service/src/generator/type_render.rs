//! Type expressions for attributes
//!
//! An attribute's type is rendered in one of two forms. The display form is
//! what a reader sees in documentation (`list[Person]`, `Int | String`). The
//! declaration form is a Python annotation (`Optional[str]`, `List[Person]`,
//! `Union[None, int, str]`). Both depend only on `multiple`, `required` and
//! the ordered `dtypes` of the attribute.

use super::traits::{GeneratorError, GeneratorResult};
use mdmodels_core::{Attribute, PrimitiveTypes};
use std::sync::LazyLock;

static PRIMITIVES: LazyLock<PrimitiveTypes> = LazyLock::new(PrimitiveTypes::new);

/// Which type expression to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeForm {
    /// Documentation form, model type names as written
    Display,
    /// Python annotation form, primitives mapped to builtins
    Declaration,
}

/// Render the type expression of an attribute
///
/// # Errors
///
/// Returns `GeneratorError::SchemaContract` if the attribute declares no
/// data types.
pub fn render_type(attribute: &Attribute, form: TypeForm) -> GeneratorResult<String> {
    render_with_members(attribute, form, |_, rendered| rendered)
}

/// Render the type expression, passing each labelled unit through `decorate`
///
/// `decorate` receives the bare dtype and its rendered text. For a single
/// dtype in display form the rendered text already carries the collection
/// wrapper, so a link labelled `list[Person]` still targets `Person`. For
/// unions every member is decorated on its own before joining.
///
/// # Errors
///
/// Returns `GeneratorError::SchemaContract` if the attribute declares no
/// data types.
pub fn render_with_members<F>(
    attribute: &Attribute,
    form: TypeForm,
    mut decorate: F,
) -> GeneratorResult<String>
where
    F: FnMut(&str, String) -> String,
{
    if attribute.dtypes.is_empty() {
        return Err(GeneratorError::contract(
            &attribute.name,
            "attribute declares no data types",
        ));
    }

    match form {
        TypeForm::Display => Ok(render_display(attribute, &mut decorate)),
        TypeForm::Declaration => Ok(render_declaration(attribute, &mut decorate)),
    }
}

fn render_display<F>(attribute: &Attribute, decorate: &mut F) -> String
where
    F: FnMut(&str, String) -> String,
{
    let wrap = |inner: String| {
        if attribute.multiple {
            format!("list[{inner}]")
        } else {
            inner
        }
    };

    match attribute.dtypes.as_slice() {
        [single] => decorate(single, wrap(single.clone())),
        members => wrap(
            members
                .iter()
                .map(|dtype| decorate(dtype, dtype.clone()))
                .collect::<Vec<_>>()
                .join(" | "),
        ),
    }
}

fn render_declaration<F>(attribute: &Attribute, decorate: &mut F) -> String
where
    F: FnMut(&str, String) -> String,
{
    let members: Vec<String> = attribute
        .dtypes
        .iter()
        .map(|dtype| decorate(dtype, PRIMITIVES.dtype_to_python(dtype).to_string()))
        .collect();
    let optional = is_optional_scalar(attribute);

    let inner = match members.as_slice() {
        [single] if optional => format!("Optional[{single}]"),
        [single] => single.clone(),
        _ => {
            let mut alternatives = Vec::with_capacity(members.len() + 1);
            if optional && !members.iter().any(|member| member == "None") {
                alternatives.push("None".to_string());
            }
            alternatives.extend(members);
            format!("Union[{}]", alternatives.join(", "))
        }
    };

    if attribute.multiple {
        format!("List[{inner}]")
    } else {
        inner
    }
}

/// Whether `dtype` is one of the primitive types
#[must_use]
pub fn is_primitive(dtype: &str) -> bool {
    PRIMITIVES.is_primitive(dtype)
}

/// Whether the attribute may be absent and is not a collection
#[must_use]
pub fn is_optional_scalar(attribute: &Attribute) -> bool {
    !attribute.required && !attribute.multiple
}

/// `typing` names a declaration of this attribute refers to
#[must_use]
pub fn typing_names(attribute: &Attribute) -> Vec<&'static str> {
    let mut names = Vec::new();
    if attribute.multiple {
        names.push("List");
    }
    if attribute.is_union() {
        names.push("Union");
    } else if is_optional_scalar(attribute) {
        names.push("Optional");
    }
    names
}
