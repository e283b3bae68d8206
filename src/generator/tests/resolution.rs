//! Version input resolution tests

use super::request;
use crate::generator::{GenerateVersionTask, VersionGenError};

#[test]
fn test_combined_version_splits_into_major_minor() {
    let task = GenerateVersionTask::new(request(Some("1.5"), None, None));

    let resolved = task.resolve_version().unwrap();
    assert_eq!(resolved.major, "1");
    assert_eq!(resolved.minor, "5");
}

#[test]
fn test_combined_version_takes_precedence_over_pair() {
    let task = GenerateVersionTask::new(request(Some("2.3"), Some("9"), Some("9")));

    let resolved = task.resolve_version().unwrap();
    assert_eq!(resolved.major, "2");
    assert_eq!(resolved.minor, "3");
}

#[test]
fn test_separate_pair_used_when_no_combined() {
    let task = GenerateVersionTask::new(request(None, Some("4"), Some("7")));

    let resolved = task.resolve_version().unwrap();
    assert_eq!(resolved.major, "4");
    assert_eq!(resolved.minor, "7");
}

#[test]
fn test_empty_combined_falls_through_to_pair() {
    let task = GenerateVersionTask::new(request(Some(""), Some("4"), Some("7")));

    let resolved = task.resolve_version().unwrap();
    assert_eq!(resolved.major, "4");
    assert_eq!(resolved.minor, "7");
}

#[test]
fn test_combined_with_three_parts_is_malformed() {
    let task = GenerateVersionTask::new(request(Some("1.5.2"), None, None));

    let err = task.resolve_version().unwrap_err();
    assert!(matches!(err, VersionGenError::MalformedVersion { input } if input == "1.5.2"));
}

#[test]
fn test_combined_without_dot_is_malformed() {
    let task = GenerateVersionTask::new(request(Some("15"), None, None));

    let err = task.resolve_version().unwrap_err();
    assert!(matches!(err, VersionGenError::MalformedVersion { .. }));
}

#[test]
fn test_malformed_combined_does_not_fall_back_to_pair() {
    // A non-empty combined string commits to the combined form
    let task = GenerateVersionTask::new(request(Some("1.5.2"), Some("1"), Some("5")));

    assert!(matches!(
        task.resolve_version(),
        Err(VersionGenError::MalformedVersion { .. })
    ));
}

#[test]
fn test_nothing_supplied_is_missing() {
    let task = GenerateVersionTask::new(request(None, None, None));

    assert!(matches!(
        task.resolve_version(),
        Err(VersionGenError::MissingVersion)
    ));
}

#[test]
fn test_empty_strings_behave_as_unset() {
    let task = GenerateVersionTask::new(request(Some(""), Some(""), Some("")));

    assert!(matches!(
        task.resolve_version(),
        Err(VersionGenError::MissingVersion)
    ));
}

#[test]
fn test_partial_pair_is_missing() {
    let task = GenerateVersionTask::new(request(None, Some("1"), None));
    assert!(matches!(
        task.resolve_version(),
        Err(VersionGenError::MissingVersion)
    ));

    let task = GenerateVersionTask::new(request(None, None, Some("5")));
    assert!(matches!(
        task.resolve_version(),
        Err(VersionGenError::MissingVersion)
    ));
}

#[test]
fn test_tokens_are_not_validated_numerically() {
    // Raw tokens pass through untouched; validation stops at the shape
    let task = GenerateVersionTask::new(request(Some("x.y"), None, None));

    let resolved = task.resolve_version().unwrap();
    assert_eq!(resolved.major, "x");
    assert_eq!(resolved.minor, "y");
}

#[test]
fn test_trailing_dot_is_two_parts() {
    // "1." splits into ["1", ""], which is two parts and resolves
    let task = GenerateVersionTask::new(request(Some("1."), None, None));

    let resolved = task.resolve_version().unwrap();
    assert_eq!(resolved.major, "1");
    assert_eq!(resolved.minor, "");
}
