//! Tests for the Python class generator

use indexmap::IndexMap;
use mdmodels_core::{
    Attribute, ClassConfig, DataModel, Enumeration, FrontMatter, Object, XMLType,
};
use mdmodels_service::generator::{
    Generator, GeneratorError, Parameter, PythonGenerator, TypeForm, render_type,
};
use pretty_assertions::assert_eq;

fn team_model() -> DataModel {
    let mut nsmap = IndexMap::new();
    nsmap.insert("tst".to_string(), "http://example.com/test/".to_string());

    DataModel {
        name: Some("Team Model".to_string()),
        objects: vec![
            Object::new("Person", None)
                .with_docstring("A team member.")
                .with_attribute(
                    Attribute::new("name", true)
                        .with_dtype("string")
                        .with_term("schema:name"),
                )
                .with_attribute(
                    Attribute::new("age", false)
                        .with_dtype("integer")
                        .with_option("minimum", "0"),
                )
                .with_attribute(
                    Attribute::new("id", true)
                        .with_dtype("string")
                        .with_xml(XMLType::attribute("id")),
                ),
            Object::new("Team", None).with_attribute(
                Attribute::new("members", false)
                    .with_dtype("Person")
                    .multiple(true),
            ),
        ],
        enums: vec![Enumeration::new("Role").with_mapping("LEAD", "lead")],
        config: Some(FrontMatter {
            nsmap: Some(nsmap),
            ..Default::default()
        }),
    }
}

fn person(attributes: Vec<Attribute>) -> DataModel {
    DataModel {
        objects: vec![Object {
            name: "Person".to_string(),
            attributes,
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[test]
fn test_optional_union_declaration() {
    let attribute = Attribute::new("value", false)
        .with_dtype("Int")
        .with_dtype("String");

    assert_eq!(
        render_type(&attribute, TypeForm::Declaration).expect("should render type"),
        "Union[None, Int, String]"
    );
}

#[test]
fn test_required_collection_keeps_factory() {
    let generator = PythonGenerator::new();
    let attribute = Attribute::new("tags", true)
        .with_dtype("string")
        .multiple(true);

    let field = generator.render_field(&attribute).expect("should render field");
    assert_eq!(
        field,
        "    tags: List[str] = element(\n        default_factory=list,\n        tag=\"tags\",\n    )"
    );
    assert!(!field.contains("default=None"));
}

#[test]
fn test_field_with_xml_binding_and_payload() {
    let generator = PythonGenerator::new();
    let attribute = Attribute::new("unit", false)
        .with_dtype("string")
        .with_xml(XMLType::attribute("unitRef"))
        .with_term("qudt:unit")
        .with_option("example", "kg");

    let field = generator.render_field(&attribute).expect("should render field");
    let expected = r#"    unit: Optional[str] = attr(
        default=None,
        tag="unitRef",
        json_schema_extra={"term": "qudt:unit", "example": "kg"},
    )"#;
    assert_eq!(field, expected);
}

#[test]
fn test_collection_factory_from_config() {
    let generator = PythonGenerator::with_config(ClassConfig {
        collection_factory: "tuple".to_string(),
        ..Default::default()
    });
    let attribute = Attribute::new("values", false)
        .with_dtype("float")
        .multiple(true);

    let field = generator.render_field(&attribute).expect("should render field");
    assert!(field.contains("default_factory=tuple,"));
}

#[test]
fn test_signature_defaults() {
    let model = person(vec![
        Attribute::new("name", true).with_dtype("string"),
        Attribute::new("age", false).with_dtype("integer"),
        Attribute::new("aliases", false)
            .with_dtype("string")
            .multiple(true),
        Attribute::new("emails", true)
            .with_dtype("string")
            .multiple(true),
    ]);

    let signature = PythonGenerator::signature(&model, "Person")
        .expect("should render signature")
        .expect("Person exists");
    let rendered: Vec<String> = signature.iter().map(Parameter::to_string).collect();

    assert_eq!(
        rendered,
        vec![
            "name: str",
            "age: Optional[int] = None",
            "aliases: List[str] = []",
            "emails: List[str]",
        ]
    );
}

#[test]
fn test_params_mapping_literal() {
    let model = person(vec![
        Attribute::new("name", true).with_dtype("string"),
        Attribute::new("age", false).with_dtype("integer"),
    ]);

    assert_eq!(
        PythonGenerator::params(&model, "Person").as_deref(),
        Some(r#"{"name": name, "age": age}"#)
    );
    assert_eq!(
        PythonGenerator::params(&person(Vec::new()), "Person").as_deref(),
        Some("{}")
    );
}

#[test]
fn test_helpers_return_none_for_unknown_object() {
    let model = person(vec![Attribute::new("name", true).with_dtype("string")]);

    assert!(
        PythonGenerator::signature(&model, "Unknown")
            .expect("lookup must not fail")
            .is_none()
    );
    assert!(PythonGenerator::params(&model, "Unknown").is_none());
}

#[test]
fn test_full_module() {
    let output = PythonGenerator::new()
        .generate(&team_model())
        .expect("should render module");

    let expected = r#"# Generated by mdmodels Python class generator
# Model: Team Model

from __future__ import annotations
from typing import List, Optional
from enum import Enum
from pydantic_xml import BaseXmlModel, attr, element


class Role(Enum):
    LEAD = "lead"


class Person(BaseXmlModel, tag="Person", nsmap={"tst": "http://example.com/test/"}):
    """A team member."""

    name: str = element(
        tag="name",
        json_schema_extra={"term": "schema:name"},
    )

    age: Optional[int] = element(
        default=None,
        tag="age",
        json_schema_extra={"minimum": "0"},
    )

    id: str = attr(
        tag="id",
    )


class Team(BaseXmlModel, tag="Team", nsmap={"tst": "http://example.com/test/"}):
    members: List[Person] = element(
        default_factory=list,
        tag="members",
    )

    def add_to_members(
        self,
        *,
        name: str,
        age: Optional[int] = None,
        id: str,
        **kwargs,
    ):
        params = {"name": name, "age": age, "id": id}
        self.members.append(Person(**params, **kwargs))
        return self.members[-1]
"#;
    assert_eq!(output, expected);
}

#[test]
fn test_helper_for_object_without_attributes() {
    let model = DataModel {
        objects: vec![
            Object::new("Marker", None),
            Object::new("Track", None).with_attribute(
                Attribute::new("markers", false)
                    .with_dtype("Marker")
                    .multiple(true),
            ),
        ],
        ..Default::default()
    };

    let output = PythonGenerator::new()
        .generate(&model)
        .expect("should render module");
    assert!(output.contains("class Marker(BaseXmlModel, tag=\"Marker\"):\n    pass\n"));
    assert!(output.contains(
        "    def add_to_markers(self, **kwargs):\n        self.markers.append(Marker(**kwargs))\n        return self.markers[-1]\n"
    ));
}

#[test]
fn test_helper_methods_can_be_disabled() {
    let generator = PythonGenerator::with_config(ClassConfig {
        helper_methods: false,
        include_header: false,
        ..Default::default()
    });

    let output = generator
        .generate(&team_model())
        .expect("should render module");
    assert!(!output.contains("def add_to_members"));
    assert!(output.starts_with("from __future__ import annotations\n"));
}

#[test]
fn test_reserved_word_object_name_is_rejected() {
    let model = DataModel {
        objects: vec![Object::new("class", None)],
        ..Default::default()
    };

    let err = PythonGenerator::new()
        .generate(&model)
        .expect_err("keyword class name must fail");
    assert!(matches!(err, GeneratorError::SchemaContract { ref element, .. } if element == "class"));
}

#[test]
fn test_missing_dtypes_names_attribute() {
    let model = person(vec![Attribute::new("name", true)]);

    let err = PythonGenerator::signature(&model, "Person").expect_err("must fail");
    match err {
        GeneratorError::SchemaContract { element, .. } => assert_eq!(element, "Person.name"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_helper_target_attribute_clashing_with_method_bindings() {
    let model = DataModel {
        objects: vec![
            Object::new("Node", None)
                .with_attribute(Attribute::new("self", true).with_dtype("string"))
                .with_attribute(Attribute::new("kwargs", false).with_dtype("string")),
            Object::new("Graph", None).with_attribute(
                Attribute::new("nodes", false)
                    .with_dtype("Node")
                    .multiple(true),
            ),
        ],
        ..Default::default()
    };

    let err = PythonGenerator::new()
        .generate(&model)
        .expect_err("clashing attribute must fail");
    match err {
        GeneratorError::SchemaContract { element, .. } => assert_eq!(element, "Node.self"),
        other => panic!("unexpected error: {other:?}"),
    }

    let without_helpers = PythonGenerator::with_config(ClassConfig {
        helper_methods: false,
        ..Default::default()
    });
    let output = without_helpers
        .generate(&model)
        .expect("no add_to methods means no clash");
    assert!(output.contains("    kwargs: Optional[str] = element(\n"));
}

#[test]
fn test_repeated_union_member_gets_one_helper() {
    let model = DataModel {
        objects: vec![
            Object::new("Point", None)
                .with_attribute(Attribute::new("x", true).with_dtype("float")),
            Object::new("Line", None).with_attribute(
                Attribute::new("points", false)
                    .with_dtype("Point")
                    .with_dtype("Point")
                    .multiple(true),
            ),
        ],
        ..Default::default()
    };

    let output = PythonGenerator::new()
        .generate(&model)
        .expect("should render module");
    assert_eq!(output.matches("def add_to_points(").count(), 1);
    assert!(!output.contains("def add_point_to_points("));
}

#[test]
fn test_object_term_in_model_config() {
    let model = DataModel {
        objects: vec![
            Object::new("Person", Some("schema:Person".to_string()))
                .with_attribute(Attribute::new("name", true).with_dtype("string")),
        ],
        ..Default::default()
    };

    let output = PythonGenerator::new()
        .generate(&model)
        .expect("should render module");
    assert!(output.contains("from pydantic import ConfigDict\nfrom pydantic_xml import"));
    assert!(output.contains(
        "class Person(BaseXmlModel, tag=\"Person\"):\n    model_config = ConfigDict(json_schema_extra={\"term\": \"schema:Person\"})\n\n    name: str = element(\n"
    ));
}

#[test]
fn test_type_named_like_primitive_is_rejected() {
    let model = DataModel {
        objects: vec![Object::new("string", None)],
        ..Default::default()
    };

    let err = PythonGenerator::new()
        .generate(&model)
        .expect_err("primitive-shadowing name must fail");
    assert!(matches!(err, GeneratorError::SchemaContract { ref element, .. } if element == "string"));
}
