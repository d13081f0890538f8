//! Integration tests for catalog loading and graph validation

use std::collections::BTreeSet;

use pathway_core::{CatalogSpec, CourseId, CurriculumGraph, PathwayError};

fn write_spec(dir: &tempfile::TempDir, spec: &CatalogSpec) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, serde_json::to_string_pretty(spec).unwrap()).unwrap();
    path
}

#[test]
fn test_catalog_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_spec(&dir, &CatalogSpec::default_catalog());

    let spec = CatalogSpec::from_json_file(&path).unwrap();
    let graph = CurriculumGraph::from_spec(&spec).unwrap();

    assert_eq!(graph.len(), 11);
    assert!(graph.contains(&CourseId::from("DeepLearning")));
}

#[test]
fn test_cyclic_catalog_file_rejected() {
    let spec = CatalogSpec {
        courses: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        prerequisites: [
            ("B".to_string(), vec!["A".to_string()]),
            ("C".to_string(), vec!["B".to_string()]),
            ("A".to_string(), vec!["C".to_string()]),
        ]
        .into_iter()
        .collect(),
    };

    let dir = tempfile::tempdir().unwrap();
    let path = write_spec(&dir, &spec);

    let loaded = CatalogSpec::from_json_file(&path).unwrap();
    let err = CurriculumGraph::from_spec(&loaded).unwrap_err();
    assert!(matches!(err, PathwayError::Config(_)));
}

#[test]
fn test_missing_catalog_file_is_io_error() {
    let err = CatalogSpec::from_json_file(std::path::Path::new("/no/such/catalog.json"))
        .unwrap_err();
    assert!(matches!(err, PathwayError::Io(_)));
}

#[test]
fn test_full_catalog_is_completable_in_availability_order() {
    let graph = CurriculumGraph::from_spec(&CatalogSpec::default_catalog()).unwrap();

    // Greedily taking any available course must walk the whole DAG.
    let mut completed: BTreeSet<CourseId> = BTreeSet::new();
    while let Some(next) = graph.available_courses(&completed).first().cloned() {
        assert!(graph.is_available(&next, &completed));
        completed.insert(next);
    }

    assert_eq!(completed.len(), graph.len(), "full catalog is completable");
}

#[test]
fn test_availability_matches_prerequisite_definition() {
    let graph = CurriculumGraph::from_spec(&CatalogSpec::default_catalog()).unwrap();
    let completed: BTreeSet<CourseId> =
        [CourseId::from("IntroProgramming"), CourseId::from("MathBasics")]
            .into_iter()
            .collect();

    for course in graph.courses() {
        let by_definition = graph
            .prerequisites(course)
            .iter()
            .all(|p| completed.contains(p));
        assert_eq!(graph.is_available(course, &completed), by_definition);
    }
}
