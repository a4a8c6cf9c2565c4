//! Tests for the Markdown document generator

use indexmap::IndexMap;
use mdmodels_core::{
    Attribute, DataModel, DocumentConfig, Enumeration, FrontMatter, Object, XMLType,
};
use mdmodels_service::generator::{
    DocumentSections, Generator, GeneratorError, MarkdownGenerator,
};
use pretty_assertions::assert_eq;

fn team_model() -> DataModel {
    DataModel {
        objects: vec![
            Object::new("Person", None)
                .with_docstring("A person.")
                .with_attribute(
                    Attribute::new("name", true)
                        .with_dtype("string")
                        .with_docstring("Full name"),
                )
                .with_attribute(Attribute::new("tags", false).with_dtype("string").multiple(true)),
            Object::new("Team", None)
                .with_attribute(Attribute::new("lead", true).with_dtype("Person")),
        ],
        ..Default::default()
    }
}

fn inventory_model() -> DataModel {
    let mut prefixes = IndexMap::new();
    prefixes.insert("schema".to_string(), "http://schema.org/".to_string());
    prefixes.insert(
        "qudt".to_string(),
        "http://qudt.org/schema/qudt/".to_string(),
    );

    DataModel {
        name: Some("Lab Inventory".to_string()),
        objects: vec![
            Object::new("Sample", None)
                .with_docstring("A physical sample.")
                .with_attribute(
                    Attribute::new("id", true)
                        .with_dtype("string")
                        .with_term("schema:identifier")
                        .with_xml(XMLType::attribute("id")),
                )
                .with_attribute(
                    Attribute::new("mass", false)
                        .with_dtype("float")
                        .with_docstring("Mass in grams")
                        .with_option("description", "Mass in grams")
                        .with_option("unit", "g")
                        .with_option("minimum", "0"),
                )
                .with_attribute(Attribute::new("origin", true).with_dtype("Location"))
                .with_attribute(Attribute::new("destination", false).with_dtype("Location"))
                .with_attribute(Attribute::new("kind", false).with_dtype("SampleKind")),
            Object::new("Location", None),
        ],
        enums: vec![
            Enumeration::new("SampleKind")
                .with_docstring("Kind of sample.")
                .with_mapping("SOLID", "solid")
                .with_mapping("LIQUID", "liquid"),
        ],
        config: Some(FrontMatter {
            prefixes: Some(prefixes),
            ..Default::default()
        }),
    }
}

#[test]
fn test_plain_and_linked_attributes() {
    let output = MarkdownGenerator::new()
        .generate(&team_model())
        .expect("should render document");

    let expected = r"```mermaid
flowchart TB
    team(Team) --> person(Person)
```

## Types

### Person

A person.

- __name__*: string
    - Full name
- __tags__: list[string]

------

### Team

- __lead__*: [Person](#person)

------
";
    assert_eq!(output, expected);
}

#[test]
fn test_no_prefixes_omits_ontology_section() {
    let output = MarkdownGenerator::new()
        .generate(&team_model())
        .expect("should render document");
    assert!(!output.contains("Ontologies"));
}

#[test]
fn test_full_document() {
    let output = MarkdownGenerator::new()
        .generate(&inventory_model())
        .expect("should render document");

    let expected = r#"# Lab Inventory

```mermaid
flowchart TB
    sample(Sample) --> location(Location)
    sample(Sample) --> location(Location)
    sample(Sample) --> samplekind(SampleKind)
```

## Ontologies

- [schema](http://schema.org/)
- [qudt](http://qudt.org/schema/qudt/)

## Types

### Sample

A physical sample.

- __id__*: string
    - Term: schema:identifier
- __mass__: float
    - Mass in grams
    - Unit: g
    - Minimum: 0
- __origin__*: [Location](#location)
- __destination__: [Location](#location)
- __kind__: [SampleKind](#samplekind)

------

### Location

------

## Enumerations

### SampleKind

Kind of sample.

```
SOLID = "solid"
LIQUID = "liquid"
```

------
"#;
    assert_eq!(output, expected);
}

#[test]
fn test_union_members_linked_individually() {
    let model = DataModel {
        objects: vec![
            Object::new("Dataset", None).with_attribute(
                Attribute::new("parts", true)
                    .with_dtype("Table")
                    .with_dtype("string")
                    .multiple(true),
            ),
            Object::new("Table", None),
        ],
        ..Default::default()
    };

    let output = MarkdownGenerator::new()
        .with_sections(DocumentSections::TYPES)
        .generate(&model)
        .expect("should render document");
    assert!(output.contains("- __parts__*: list[[Table](#table) | string]\n"));
}

#[test]
fn test_document_config() {
    let config = DocumentConfig {
        title: Some("Team Reference".to_string()),
        required_marker: " (required)".to_string(),
        separator: "***".to_string(),
        graph_direction: "LR".to_string(),
        sections: vec!["graph".to_string(), "types".to_string()],
    };

    let output = MarkdownGenerator::with_config(config)
        .generate(&team_model())
        .expect("should render document");

    assert!(output.starts_with("# Team Reference\n\n```mermaid\nflowchart LR\n"));
    assert!(output.contains("- __lead__ (required): [Person](#person)\n"));
    assert!(output.contains("\n***\n"));
    assert!(!output.contains("------"));
}

#[test]
fn test_missing_dtypes_produces_no_output() {
    let mut model = team_model();
    model.objects[1]
        .attributes
        .push(Attribute::new("members", false).multiple(true));

    let err = MarkdownGenerator::new()
        .generate(&model)
        .expect_err("attribute without dtypes must fail");
    match err {
        GeneratorError::SchemaContract { element, .. } => assert_eq!(element, "Team.members"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let generator = MarkdownGenerator::new();
    let model = inventory_model();
    let first = generator.generate(&model).expect("should render document");
    let second = generator.generate(&model).expect("should render document");
    assert_eq!(first, second);
}

#[test]
fn test_multi_line_bullets_stay_nested() {
    let model = DataModel {
        objects: vec![
            Object::new("Sample", Some("obo:OBI_0000747".to_string())).with_attribute(
                Attribute::new("notes", false)
                    .with_dtype("string")
                    .with_docstring("line one\nline two")
                    .with_option("example", "first\nsecond"),
            ),
        ],
        ..Default::default()
    };

    let output = MarkdownGenerator::new()
        .with_sections(DocumentSections::TYPES)
        .generate(&model)
        .expect("should render document");

    let expected = r"## Types

### Sample

Term: obo:OBI_0000747

- __notes__: string
    - line one
      line two
    - Example: first
      second

------
";
    assert_eq!(output, expected);
}
