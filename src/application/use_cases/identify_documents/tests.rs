use super::*;
use crate::shared::error::ExitCode;
use crate::vex::domain::Iri;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

const SPRING_BOOT_ID: &str =
    "https://openvex.dev/docs/public/vex-63fa798bc2a5522386a09b87ebaf2586e40cada9627cba5ea207b4e4159893b0";

const SPRING_BOOT: &str = r#"{
  "@context": "https://openvex.dev/ns/v0.2.0",
  "author": "Spring Builds <spring-builds@users.noreply.github.com>",
  "role": "Project Release Bot",
  "timestamp": "2023-01-17T01:07:16.85347963Z",
  "last_updated": "2023-01-17T01:07:16.85347963Z",
  "version": 1,
  "tooling": "jvex/0.0.1",
  "statements": [
    {
      "vulnerability": {
        "@id": "https://nvd.nist.gov/vuln/detail/CVE-2021-44228",
        "name": "CVE-2021-44228",
        "description": "Remote code injection in Log4j",
        "aliases": ["GHSA-jfh8-c2jp-5v3q"]
      },
      "products": [
        {
          "@id": "pkg:maven/org.springframework.boot/spring-boot@2.6.0-M3",
          "identifiers": {"purl": "pkg:maven/org.springframework.boot/spring-boot@2.6.0-M3"},
          "hashes": {"sha-256": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"}
        }
      ],
      "status": "not_affected",
      "justification": "vulnerable_code_not_in_execute_path",
      "impact_statement": "Spring Boot users are only affected by this vulnerability if they have switched the default logging system to Log4J2."
    }
  ]
}"#;

const MISSING_JUSTIFICATION: &str = r#"{
  "@context": "https://openvex.dev/ns/v0.2.0",
  "author": "some author",
  "timestamp": "2023-01-08T18:02:03.647787998-06:00",
  "version": 1,
  "statements": [
    {
      "vulnerability": {"name": "CVE-2023-12345"},
      "products": [{"@id": "pkg:apk/wolfi/git@2.39.0-r1?arch=armv7"}],
      "status": "not_affected"
    }
  ]
}"#;

#[derive(Default)]
struct MockDocumentReader {
    documents: HashMap<PathBuf, String>,
}

impl MockDocumentReader {
    fn with(mut self, path: &str, content: &str) -> Self {
        self.documents.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, path: &Path) -> Result<String> {
        self.documents.get(path).cloned().ok_or_else(|| {
            VexError::FileReadError {
                path: path.to_path_buf(),
                details: "No such file".to_string(),
            }
            .into()
        })
    }
}

#[derive(Default)]
struct MockProgressReporter {
    warnings: RefCell<Vec<String>>,
    progress: RefCell<Vec<(usize, usize)>>,
    completions: RefCell<Vec<String>>,
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.progress.borrow_mut().push((current, total));
    }

    fn report_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn report_error(&self, _message: &str) {}

    fn report_completion(&self, message: &str) {
        self.completions.borrow_mut().push(message.to_string());
    }
}

fn request(paths: &[&str]) -> IdentifyRequest {
    IdentifyRequest::new(paths.iter().map(PathBuf::from).collect())
}

#[test]
fn test_assigns_canonical_id() {
    let reporter = MockProgressReporter::default();
    let use_case = IdentifyDocumentsUseCase::new(
        MockDocumentReader::default().with("spring.json", SPRING_BOOT),
        &reporter,
    );

    let response = use_case.execute(request(&["spring.json"])).unwrap();

    assert_eq!(response.documents.len(), 1);
    let identified = &response.documents[0];
    assert!(identified.id_generated);
    assert_eq!(identified.source, PathBuf::from("spring.json"));
    assert_eq!(identified.document.id().unwrap().as_str(), SPRING_BOOT_ID);
    assert_eq!(reporter.completions.borrow().len(), 1);
    assert!(reporter.progress.borrow().is_empty());
}

#[test]
fn test_keeps_existing_id() {
    let json = SPRING_BOOT.replacen(
        "\"author\"",
        "\"@id\": \"https://example.com/vex/spring\",\n  \"author\"",
        1,
    );
    let reporter = MockProgressReporter::default();
    let use_case =
        IdentifyDocumentsUseCase::new(MockDocumentReader::default().with("a.json", &json), &reporter);

    let response = use_case.execute(request(&["a.json"])).unwrap();
    let identified = &response.documents[0];
    assert!(!identified.id_generated);
    assert_eq!(
        identified.document.id().unwrap().as_str(),
        "https://example.com/vex/spring"
    );
    assert!(reporter.warnings.borrow().is_empty());
}

#[test]
fn test_regenerate_replaces_existing_id() {
    let json = SPRING_BOOT.replacen(
        "\"author\"",
        "\"@id\": \"https://example.com/vex/spring\",\n  \"author\"",
        1,
    );
    let reporter = MockProgressReporter::default();
    let use_case =
        IdentifyDocumentsUseCase::new(MockDocumentReader::default().with("a.json", &json), &reporter);

    let response = use_case
        .execute(request(&["a.json"]).with_regenerate_id(true))
        .unwrap();
    assert_eq!(
        response.documents[0].document.id().unwrap().as_str(),
        SPRING_BOOT_ID
    );
}

#[test]
fn test_bump_version_changes_id() {
    let reporter = MockProgressReporter::default();
    let use_case = IdentifyDocumentsUseCase::new(
        MockDocumentReader::default().with("spring.json", SPRING_BOOT),
        &reporter,
    );

    let response = use_case
        .execute(request(&["spring.json"]).with_bump_version(true))
        .unwrap();
    let document = &response.documents[0].document;
    assert_eq!(document.version(), 2);
    assert_ne!(document.id().unwrap().as_str(), SPRING_BOOT_ID);
}

#[test]
fn test_tooling_override_keeps_id() {
    let reporter = MockProgressReporter::default();
    let use_case = IdentifyDocumentsUseCase::new(
        MockDocumentReader::default().with("spring.json", SPRING_BOOT),
        &reporter,
    );

    let response = use_case
        .execute(request(&["spring.json"]).with_tooling(Some("ci-bot/2".to_string())))
        .unwrap();
    let document = &response.documents[0].document;
    assert_eq!(document.tooling(), Some("ci-bot/2"));
    assert_eq!(document.id().unwrap().as_str(), SPRING_BOOT_ID);
}

#[test]
fn test_stale_canonical_id_warns() {
    let stale = format!(
        "{}0000000000000000000000000000000000000000000000000000000000000000",
        CANONICAL_ID_PREFIX
    );
    let json = SPRING_BOOT.replacen(
        "\"author\"",
        &format!("\"@id\": \"{}\",\n  \"author\"", stale),
        1,
    );
    let reporter = MockProgressReporter::default();
    let use_case =
        IdentifyDocumentsUseCase::new(MockDocumentReader::default().with("a.json", &json), &reporter);

    let response = use_case.execute(request(&["a.json"])).unwrap();
    assert_eq!(response.documents[0].document.id().unwrap().as_str(), stale);
    assert_eq!(reporter.warnings.borrow().len(), 1);
    assert!(reporter.warnings.borrow()[0].contains("--regenerate-id"));
}

#[test]
fn test_missing_justification_is_validation_failure() {
    let reporter = MockProgressReporter::default();
    let use_case = IdentifyDocumentsUseCase::new(
        MockDocumentReader::default().with("bad.json", MISSING_JUSTIFICATION),
        &reporter,
    );

    let err = use_case.execute(request(&["bad.json"])).unwrap_err();
    assert!(err.to_string().contains("bad.json"));
    assert!(matches!(
        err.downcast_ref::<VexError>(),
        Some(VexError::MissingJustification { .. })
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::ValidationFailed);
}

#[test]
fn test_unreadable_document_aborts_batch() {
    let reporter = MockProgressReporter::default();
    let use_case = IdentifyDocumentsUseCase::new(
        MockDocumentReader::default().with("spring.json", SPRING_BOOT),
        &reporter,
    );

    let err = use_case
        .execute(request(&["spring.json", "missing.json"]))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<VexError>(),
        Some(VexError::FileReadError { .. })
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);
    assert!(reporter.completions.borrow().is_empty());
}

#[test]
fn test_batch_reports_progress() {
    let reporter = MockProgressReporter::default();
    let use_case = IdentifyDocumentsUseCase::new(
        MockDocumentReader::default()
            .with("a.json", SPRING_BOOT)
            .with("b.json", SPRING_BOOT),
        &reporter,
    );

    let response = use_case.execute(request(&["a.json", "b.json"])).unwrap();
    assert_eq!(response.documents.len(), 2);
    assert_eq!(*reporter.progress.borrow(), vec![(0, 2), (1, 2), (2, 2)]);
}

#[test]
fn test_empty_request_rejected() {
    let reporter = MockProgressReporter::default();
    let use_case = IdentifyDocumentsUseCase::new(MockDocumentReader::default(), &reporter);

    let err = use_case.execute(request(&[])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<VexError>(),
        Some(VexError::Validation { .. })
    ));
}

#[test]
fn test_blank_tooling_rejected() {
    let reporter = MockProgressReporter::default();
    let use_case = IdentifyDocumentsUseCase::new(
        MockDocumentReader::default().with("spring.json", SPRING_BOOT),
        &reporter,
    );

    let result = use_case.execute(request(&["spring.json"]).with_tooling(Some("  ".to_string())));
    assert!(result.is_err());
}

#[test]
fn test_custom_id_generator() {
    let reporter = MockProgressReporter::default();
    let use_case = IdentifyDocumentsUseCase::new(
        MockDocumentReader::default().with("spring.json", SPRING_BOOT),
        &reporter,
    )
    .with_id_generator(Box::new(|doc: &Document| {
        Iri::parse(format!("urn:spring:v{}", doc.version()))
    }));

    let response = use_case.identify(request(&["spring.json"])).unwrap();
    assert_eq!(
        response.documents[0].document.id().unwrap().as_str(),
        "urn:spring:v1"
    );
}
