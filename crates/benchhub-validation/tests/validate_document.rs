use benchhub_validation::{
    AllowList, Document, FindingKind, FrontMatter, FrontMatterValue, RuleSet, Schema, Severity,
    ValidationReport, validate_document, validate_source,
};

const SCHEMA: &str = r#"
required_fields: [title, category, description]
field_types:
  title: string
  tags: array
  min_nodes: integer
  max_nodes: integer
  open_source: boolean
  last_updated: date
  official_website: url
  category: enum
  difficulty: enum
enums:
  category: [hpc, parallel-computing, cloud-computing, energy]
  difficulty: [beginner, intermediate, advanced]
"#;

/// Body carrying every recommended section
const FULL_BODY: &str = "\
# Vue d'ensemble

Intro.

## Prérequis
## Installation

```bash
make
```

## Configuration
## Utilisation
## Métriques et Performance
## Ressources
";

fn schema() -> Schema {
    Schema::from_yaml_str(SCHEMA).unwrap()
}

fn front_matter(entries: &[(&str, FrontMatterValue)]) -> FrontMatter {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn base_entries() -> Vec<(&'static str, FrontMatterValue)> {
    vec![
        ("title", "HPL".into()),
        ("category", "energy".into()),
        ("description", "High Performance Linpack".into()),
    ]
}

fn validate(entries: &[(&str, FrontMatterValue)], body: &str) -> ValidationReport {
    let doc = Document::new("_benchmarks/test.md", front_matter(entries), body);
    validate_document(&schema(), &RuleSet::default(), &doc)
}

fn with(extra: &[(&'static str, FrontMatterValue)]) -> Vec<(&'static str, FrontMatterValue)> {
    let mut entries = base_entries();
    for (key, value) in extra {
        entries.retain(|(k, _)| k != key);
        entries.push((*key, value.clone()));
    }
    entries
}

fn error_messages(report: &ValidationReport) -> Vec<String> {
    report.errors.iter().map(|f| f.message.clone()).collect()
}

fn warning_messages(report: &ValidationReport) -> Vec<String> {
    report.warnings.iter().map(|f| f.message.clone()).collect()
}

#[test]
fn test_valid_document_is_clean() {
    let report = validate(&base_entries(), FULL_BODY);
    assert!(report.is_clean(), "unexpected findings: {:?}", report);
    assert_eq!(report.documents, 1);
}

// ==================== Required fields ====================

#[test]
fn test_one_error_per_missing_required_field() {
    let report = validate(&[("title", "HPL".into())], FULL_BODY);
    assert_eq!(
        error_messages(&report),
        vec![
            "Missing required field: category",
            "Missing required field: description",
        ]
    );
}

#[test]
fn test_null_and_empty_string_count_as_missing() {
    let report = validate(
        &with(&[("title", FrontMatterValue::Null), ("description", "".into())]),
        FULL_BODY,
    );
    let missing: Vec<_> = report
        .errors
        .iter()
        .filter(|f| matches!(f.kind, FindingKind::MissingRequiredField { .. }))
        .collect();
    assert_eq!(missing.len(), 2);
}

#[test]
fn test_missing_fields_reported_regardless_of_other_errors() {
    let report = validate(
        &[
            ("title", FrontMatterValue::Integer(3)),
            ("min_nodes", "many".into()),
        ],
        FULL_BODY,
    );
    let missing = report
        .errors
        .iter()
        .filter(|f| matches!(f.kind, FindingKind::MissingRequiredField { .. }))
        .count();
    assert_eq!(missing, 2);
    assert_eq!(report.error_count(), 4);
}

#[test]
fn test_empty_collections_satisfy_required_fields() {
    let report = validate(
        &with(&[("description", FrontMatterValue::Sequence(vec![]))]),
        FULL_BODY,
    );
    assert!(!report.has_errors());
}

// ==================== Field types ====================

#[test]
fn test_declared_but_absent_fields_are_not_type_checked() {
    // tags, min_nodes, open_source... are declared but absent
    let report = validate(&base_entries(), FULL_BODY);
    assert!(!report.has_errors());
}

#[test]
fn test_basic_type_mismatches() {
    let report = validate(
        &with(&[
            ("title", FrontMatterValue::Integer(42)),
            ("tags", "linpack".into()),
            ("open_source", "yes".into()),
        ]),
        FULL_BODY,
    );
    assert_eq!(
        error_messages(&report),
        vec![
            "Field 'title' must be a string, got integer",
            "Field 'tags' must be an array, got string",
            "Field 'open_source' must be a boolean, got string",
        ]
    );
}

#[test]
fn test_integer_rejects_booleans_and_floats() {
    let report = validate(&with(&[("min_nodes", FrontMatterValue::Bool(true))]), FULL_BODY);
    assert_eq!(
        error_messages(&report),
        vec!["Field 'min_nodes' must be an integer, got boolean"]
    );

    let report = validate(&with(&[("min_nodes", FrontMatterValue::Float(4.5))]), FULL_BODY);
    assert_eq!(report.error_count(), 1);

    let report = validate(&with(&[("min_nodes", FrontMatterValue::Integer(4))]), FULL_BODY);
    assert!(!report.has_errors());
}

#[test]
fn test_boolean_accepts_only_true_false() {
    let report = validate(&with(&[("open_source", FrontMatterValue::Integer(1))]), FULL_BODY);
    assert_eq!(report.error_count(), 1);
    let report = validate(&with(&[("open_source", FrontMatterValue::Bool(false))]), FULL_BODY);
    assert!(!report.has_errors());
}

#[test]
fn test_date_fields() {
    let report = validate(&with(&[("last_updated", "2024-03-15".into())]), FULL_BODY);
    assert!(!report.has_errors());

    let report = validate(&with(&[("last_updated", "2024-13-45".into())]), FULL_BODY);
    assert_eq!(
        error_messages(&report),
        vec!["Field 'last_updated' must be a valid date, got '2024-13-45'"]
    );

    let report = validate(&with(&[("last_updated", FrontMatterValue::Integer(2024))]), FULL_BODY);
    assert_eq!(
        error_messages(&report),
        vec!["Field 'last_updated' must be a date, got integer"]
    );
}

#[test]
fn test_date_validation_is_repeatable() {
    let entries = with(&[("last_updated", "2024-13-45".into())]);
    assert_eq!(validate(&entries, FULL_BODY), validate(&entries, FULL_BODY));
}

#[test]
fn test_url_fields() {
    let no_links = RuleSet {
        external_links: false,
        ..RuleSet::default()
    };
    let check = |value: &str| {
        let doc = Document::new(
            "_benchmarks/test.md",
            front_matter(&with(&[("official_website", value.into())])),
            FULL_BODY,
        );
        validate_document(&schema(), &no_links, &doc)
    };

    assert!(!check("https://example.org/x").has_errors());
    assert_eq!(
        error_messages(&check("ftp://example.org")),
        vec!["Field 'official_website' must be a valid HTTP/HTTPS URL, got 'ftp://example.org'"]
    );
    assert_eq!(
        error_messages(&check("not a url")),
        vec!["Field 'official_website' must be a valid URL, got 'not a url'"]
    );
}

#[test]
fn test_non_textual_url_is_not_checked() {
    let report = validate(
        &with(&[("official_website", FrontMatterValue::Integer(7))]),
        FULL_BODY,
    );
    assert!(!report.has_errors());
}

#[test]
fn test_enum_fields_are_independent() {
    let report = validate(
        &with(&[("category", "quantum".into()), ("difficulty", "advanced".into())]),
        FULL_BODY,
    );
    assert_eq!(
        error_messages(&report),
        vec!["Field 'category' must be one of hpc, parallel-computing, cloud-computing, energy, got 'quantum'"]
    );

    let report = validate(
        &with(&[("category", "energy".into()), ("difficulty", "expert".into())]),
        FULL_BODY,
    );
    assert_eq!(report.error_count(), 1);
    assert!(matches!(
        &report.errors[0].kind,
        FindingKind::InvalidEnumValue { field, .. } if field == "difficulty"
    ));
}

#[test]
fn test_enum_without_registered_values_is_unchecked() {
    let schema = Schema::from_yaml_str("field_types:\n  license: enum\n").unwrap();
    let doc = Document::new(
        "a.md",
        front_matter(&[("license", "anything".into())]),
        "",
    );
    assert!(validate_document(&schema, &RuleSet::default(), &doc).is_clean());
}

#[test]
fn test_enum_numbers_compare_by_value() {
    let schema =
        Schema::from_yaml_str("field_types:\n  tier: enum\nenums:\n  tier: [1, 2]\n").unwrap();
    let rules = RuleSet::default();

    let float = Document::new("a.md", front_matter(&[("tier", FrontMatterValue::Float(1.0))]), "");
    assert!(validate_document(&schema, &rules, &float).is_clean());

    let other = Document::new("b.md", front_matter(&[("tier", FrontMatterValue::Float(1.5))]), "");
    let report = validate_document(&schema, &rules, &other);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.errors[0].message, "Field 'tier' must be one of 1, 2, got '1.5'");

    // Numbers and their textual form stay distinct
    let text = Document::new("c.md", front_matter(&[("tier", "1".into())]), "");
    assert_eq!(validate_document(&schema, &rules, &text).error_count(), 1);
}

// ==================== Category checks ====================

#[test]
fn test_parallel_models_unknown_subset_only() {
    let report = validate(
        &with(&[
            ("category", "parallel-computing".into()),
            ("parallel_models", vec!["OpenMP", "FooBar"].into()),
        ]),
        FULL_BODY,
    );
    assert_eq!(report.warning_count(), 1);
    let warning = &report.warnings[0];
    assert_eq!(warning.message, "Unknown parallel models: FooBar");
    assert!(!warning.message.contains("OpenMP"));
    assert_eq!(
        warning.kind,
        FindingKind::UnknownEntries {
            list: AllowList::ParallelModels,
            entries: vec!["FooBar".to_string()],
        }
    );
}

#[test]
fn test_parallel_models_missing_or_empty() {
    let expected = "Parallel computing benchmarks should specify 'parallel_models' (e.g., OpenMP, MPI, CUDA)";

    let report = validate(&with(&[("category", "parallel-computing".into())]), FULL_BODY);
    assert_eq!(warning_messages(&report), vec![expected]);

    let report = validate(
        &with(&[
            ("category", "parallel-computing".into()),
            ("parallel_models", FrontMatterValue::Sequence(vec![])),
        ]),
        FULL_BODY,
    );
    assert_eq!(warning_messages(&report), vec![expected]);

    let report = validate(
        &with(&[
            ("category", "parallel-computing".into()),
            ("parallel_models", "MPI".into()),
        ]),
        FULL_BODY,
    );
    assert_eq!(warning_messages(&report), vec![expected]);
}

fn hpc(extra: &[(&'static str, FrontMatterValue)]) -> Vec<(&'static str, FrontMatterValue)> {
    let mut entries = with(&[
        ("category", "hpc".into()),
        ("memory_requirements", "64 GB per node".into()),
    ]);
    for (key, value) in extra {
        entries.retain(|(k, _)| k != key);
        entries.push((*key, value.clone()));
    }
    entries
}

#[test]
fn test_hpc_node_range() {
    let report = validate(
        &hpc(&[
            ("min_nodes", FrontMatterValue::Integer(64)),
            ("max_nodes", FrontMatterValue::Integer(16)),
        ]),
        FULL_BODY,
    );
    assert_eq!(
        error_messages(&report),
        vec!["min_nodes (64) cannot be greater than max_nodes (16)"]
    );

    let report = validate(
        &hpc(&[
            ("min_nodes", FrontMatterValue::Integer(16)),
            ("max_nodes", FrontMatterValue::Integer(64)),
        ]),
        FULL_BODY,
    );
    assert!(report.is_clean());
}

#[test]
fn test_hpc_recommended_fields() {
    let report = validate(&with(&[("category", "hpc".into())]), FULL_BODY);
    assert_eq!(
        warning_messages(&report),
        vec!["HPC benchmarks should specify: min_nodes, memory_requirements"]
    );

    let report = validate(&hpc(&[]), FULL_BODY);
    assert_eq!(
        warning_messages(&report),
        vec!["HPC benchmarks should specify: min_nodes"]
    );
}

#[test]
fn test_hpc_allow_lists() {
    let report = validate(
        &hpc(&[
            ("min_nodes", FrontMatterValue::Integer(1)),
            ("interconnect", vec!["InfiniBand", "Carrier Pigeon"].into()),
            ("rankings_used", vec!["Top500", "Top10", "Top10"].into()),
        ]),
        FULL_BODY,
    );
    assert_eq!(
        warning_messages(&report),
        vec![
            "Unknown interconnect types: Carrier Pigeon",
            "Unknown HPC rankings: Top10, Top10",
        ]
    );
}

#[test]
fn test_other_categories_have_no_extra_checks() {
    let report = validate(
        &with(&[
            ("category", "cloud-computing".into()),
            ("parallel_models", vec!["FooBar"].into()),
            ("min_nodes", FrontMatterValue::Integer(64)),
            ("max_nodes", FrontMatterValue::Integer(1)),
        ]),
        FULL_BODY,
    );
    assert!(report.is_clean());
}

// ==================== Content structure ====================

#[test]
fn test_missing_sections_listed_in_canonical_order() {
    let report = validate(&base_entries(), "Intro\n\n## Installation\n\nSteps.\n");
    assert_eq!(report.warning_count(), 1);
    insta::assert_snapshot!(
        report.warnings[0].message,
        @"Missing recommended sections: Vue d'ensemble, Prérequis, Configuration, Utilisation, Métriques et Performance, Ressources"
    );
}

#[test]
fn test_empty_body_skips_content_checks() {
    let report = validate(&base_entries(), "");
    assert!(report.is_clean());
}

#[test]
fn test_untagged_code_blocks_counted() {
    let body = format!("{}\n```\nrun\n```\n\n```\nagain\n```\n", FULL_BODY);
    let report = validate(&base_entries(), &body);
    assert_eq!(
        warning_messages(&report),
        vec!["Found 2 code block(s) without language specification"]
    );
}

#[test]
fn test_heading_hierarchy_skip() {
    let body = format!("{}\n## Details\n#### Deep dive\n### Back up\n", FULL_BODY);
    let report = validate(&base_entries(), &body);
    assert_eq!(
        warning_messages(&report),
        vec!["Heading hierarchy skip detected: 'Deep dive' (h4) follows h2"]
    );

    let doc = Document::new("a.md", front_matter(&base_entries()), body);
    let rules = RuleSet {
        heading_hierarchy: false,
        ..RuleSet::default()
    };
    assert!(validate_document(&schema(), &rules, &doc).is_clean());
}

// ==================== External links ====================

#[test]
fn test_external_links_are_format_checked() {
    let body = format!("{}\nSee http://[broken and https://example.org/ok.\n", FULL_BODY);
    let report = validate(&with(&[("official_website", "https://hpl.org".into())]), &body);
    assert_eq!(
        warning_messages(&report),
        vec!["Invalid URL format: http://[broken"]
    );
    assert!(!report.has_errors());
}

#[test]
fn test_official_website_wrong_scheme_is_error_and_warning() {
    let report = validate(&with(&[("official_website", "ftp://hpl.org".into())]), FULL_BODY);
    assert_eq!(report.error_count(), 1);
    assert_eq!(
        warning_messages(&report),
        vec!["Potentially invalid URL format: ftp://hpl.org"]
    );
}

// ==================== Document level ====================

#[test]
fn test_malformed_front_matter_short_circuits() {
    let report = validate_source(&schema(), &RuleSet::default(), "bad.md", "# No front matter\n");
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.warning_count(), 0);
    assert_eq!(
        report.errors[0].to_string(),
        "ERROR [bad.md]: Missing or invalid front matter"
    );
    assert_eq!(report.errors[0].severity, Severity::Error);
}

#[test]
fn test_invalid_yaml_front_matter() {
    let report = validate_source(
        &schema(),
        &RuleSet::default(),
        "bad.md",
        "---\ntitle: [oops\n---\nBody\n",
    );
    assert_eq!(report.error_count(), 1);
    assert!(report.errors[0].message.starts_with("Invalid YAML front matter: "));
}

#[test]
fn test_validation_is_deterministic() {
    let source = "---\ntitle: 3\ncategory: hpc\nmin_nodes: 64\nmax_nodes: 16\n---\n## Installation\n```\nx\n```\n";
    let first = validate_source(&schema(), &RuleSet::default(), "a.md", source);
    let second = validate_source(&schema(), &RuleSet::default(), "a.md", source);
    assert_eq!(first, second);
    assert!(first.has_errors());
}

#[test]
fn test_missing_schema_runs_category_and_content_checks_only() {
    let report = validate_source(
        &Schema::default(),
        &RuleSet::default(),
        "a.md",
        "---\ncategory: parallel-computing\nparallel_models: [MPI, Foo]\ntitle: 3\n---\nText\n",
    );
    assert!(!report.has_errors());
    assert_eq!(report.warning_count(), 2);
}
