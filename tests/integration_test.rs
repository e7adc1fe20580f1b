/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;
use vexid::prelude::*;

const SPRING_BOOT: &str = include_str!("fixtures/spring-boot.json");
const SPRING_OCI: &str = include_str!("fixtures/spring-oci.json");
const WOLFI_WITH_ID: &str = include_str!("fixtures/wolfi-with-id.json");
const MISSING_JUSTIFICATION: &str = include_str!("fixtures/missing-justification.json");

const SPRING_BOOT_ID: &str =
    "https://openvex.dev/docs/public/vex-63fa798bc2a5522386a09b87ebaf2586e40cada9627cba5ea207b4e4159893b0";
const SPRING_OCI_ID: &str =
    "https://openvex.dev/docs/public/vex-481c546e3d4cf906332bc73d9e78fbd999f84a2ef0e0105e82841bd8b02ebc20";

fn request(paths: &[&str]) -> IdentifyRequest {
    IdentifyRequest::new(paths.iter().map(PathBuf::from).collect())
}

#[test]
fn test_identify_happy_path() {
    let reader = MockDocumentReader::new()
        .with_document("spring-boot.json", SPRING_BOOT)
        .with_document("spring-oci.json", SPRING_OCI);
    let progress_reporter = MockProgressReporter::new();
    let use_case = IdentifyDocumentsUseCase::new(reader, progress_reporter.clone());

    let response = use_case
        .execute(request(&["spring-boot.json", "spring-oci.json"]))
        .unwrap();

    assert_eq!(response.documents.len(), 2);
    assert_eq!(
        response.documents[0].document.id().unwrap().as_str(),
        SPRING_BOOT_ID
    );
    assert_eq!(
        response.documents[1].document.id().unwrap().as_str(),
        SPRING_OCI_ID
    );
    assert!(response.documents.iter().all(|d| d.id_generated));

    let messages = progress_reporter.get_messages();
    assert!(messages
        .iter()
        .any(|m| m == "Progress: 0/2 - spring-boot.json"));
    assert!(messages.iter().any(|m| m == "Progress: 2/2"));
    assert!(messages
        .last()
        .unwrap()
        .starts_with("Completed: ✅ Identified 2 document(s)"));
}

#[test]
fn test_identify_through_port() {
    let reader = MockDocumentReader::new().with_document("vex.json", WOLFI_WITH_ID);
    let use_case = IdentifyDocumentsUseCase::new(reader, MockProgressReporter::new());
    let port: &dyn DocumentIdentificationPort = &use_case;

    let response = port.identify(request(&["vex.json"])).unwrap();
    let identified = &response.documents[0];
    assert!(!identified.id_generated);
    assert_eq!(
        identified.document.id().unwrap().as_str(),
        "https://openvex.dev/docs/example/vex-9fb3463de1b57"
    );
    assert_eq!(identified.document.author(), "Wolfi J Inkinson");
    assert_eq!(identified.document.role(), Some("Document Creator"));
}

#[test]
fn test_identify_regenerates_id() {
    let reader = MockDocumentReader::new().with_document("vex.json", WOLFI_WITH_ID);
    let use_case = IdentifyDocumentsUseCase::new(reader, MockProgressReporter::new());

    let response = use_case
        .execute(request(&["vex.json"]).with_regenerate_id(true))
        .unwrap();
    let identified = &response.documents[0];
    assert!(identified.id_generated);
    assert!(identified
        .document
        .id()
        .unwrap()
        .as_str()
        .starts_with(CANONICAL_ID_PREFIX));
}

#[test]
fn test_identify_warns_on_stale_canonical_id() {
    let stale = SPRING_BOOT.replacen(
        "\"author\"",
        &format!("\"@id\": \"{}\",\n  \"author\"", SPRING_OCI_ID),
        1,
    );
    let reader = MockDocumentReader::new().with_document("spring-boot.json", &stale);
    let progress_reporter = MockProgressReporter::new();
    let use_case = IdentifyDocumentsUseCase::new(reader, progress_reporter.clone());

    let response = use_case.execute(request(&["spring-boot.json"])).unwrap();
    assert_eq!(
        response.documents[0].document.id().unwrap().as_str(),
        SPRING_OCI_ID
    );
    let warnings = progress_reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("spring-boot.json"));
    assert_eq!(progress_reporter.message_count(), 2);
}

#[test]
fn test_identify_reader_failure() {
    let use_case = IdentifyDocumentsUseCase::new(
        MockDocumentReader::with_failure(),
        MockProgressReporter::new(),
    );

    let err = use_case.execute(request(&["vex.json"])).unwrap_err();
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    assert!(chain[0].contains("Failed to identify vex.json"));
    assert!(chain.iter().any(|e| e.contains("Mock document read failure")));
    assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);
}

#[test]
fn test_identify_invalid_document() {
    let reader = MockDocumentReader::new().with_document("bad.json", MISSING_JUSTIFICATION);
    let use_case = IdentifyDocumentsUseCase::new(reader, MockProgressReporter::new());

    let err = use_case.execute(request(&["bad.json"])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<VexError>(),
        Some(VexError::MissingJustification { .. })
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::ValidationFailed);
}

#[test]
fn test_formatters_on_identified_document() {
    let reader = MockDocumentReader::new().with_document("spring-oci.json", SPRING_OCI);
    let use_case = IdentifyDocumentsUseCase::new(reader, MockProgressReporter::new());
    let response = use_case.execute(request(&["spring-oci.json"])).unwrap();
    let document = &response.documents[0].document;

    let id = IdFormatter::new().format(document).unwrap();
    assert_eq!(id, SPRING_OCI_ID);

    let canonical = CanonicalFormatter::new().format(document).unwrap();
    assert!(canonical.starts_with(
        "1673917636:1:Spring Builds <spring-builds@users.noreply.github.com>:https://nvd.nist.gov/vuln/detail/CVE-2021-44228:CVE-2021-44228"
    ));

    let json = JsonFormatter::new().format(document).unwrap();
    let reparsed = parse_document(&json).unwrap();
    assert_eq!(&reparsed, document);
    assert_eq!(
        CanonicalDocumentIdGenerator.generate(&reparsed).unwrap().as_str(),
        SPRING_OCI_ID
    );
}

#[test]
fn test_authored_document_round_trip() {
    let vulnerability = Vulnerability::new("CVE-2023-12345")
        .unwrap()
        .with_aliases(["GHSA-abcd-1234-efgh"]);
    let product = Product::new(Iri::parse("pkg:apk/wolfi/git@2.39.0-r1?arch=armv7").unwrap())
        .with_subcomponent(
            Component::new(Iri::parse("pkg:apk/wolfi/openssl@3.0.8-r0").unwrap()),
        );
    let mut statement = Statement::new(vulnerability, vec![product], Status::Affected).unwrap();
    statement.set_action_statement("Upgrade to 2.39.1-r0");

    let mut document = Document::authored_by("Wolfi J Inkinson").unwrap();
    document.add_statement(statement);

    let json = to_json(&mut document, &CanonicalDocumentIdGenerator).unwrap();
    let reparsed = parse_document(&json).unwrap();

    assert_eq!(reparsed.id(), document.id());
    assert!(reparsed.is_deserialized());
    assert_eq!(
        CanonicalRepresentationBuilder::hash(&reparsed).unwrap(),
        CanonicalRepresentationBuilder::hash(&document).unwrap()
    );
}
