//! Integration tests for the regex detector over a synthetic clinical note

use veil::adapters::detector::{Detector, RegexDetector};
use veil::config::DetectorConfig;
use veil::domain::PlaceholderKind;

/// A synthetic discharge note carrying most vocabulary categories
fn synthetic_note() -> String {
    "\
Patient: Maria Alvarez
DOB: 03/14/1968
Medical Record Number: A-99-1204
SSN: 987-65-4321
Address: 450 Cedar Hill Road, Saint Paul, MN 55102
Hospital Name: Lakeview Regional Medical Center

Maria Alvarez was admitted for observation after presenting with
chest tightness. Contact the care line at (651) 555-0142 or
care.team@lakeview.example.org with questions.

Allergies: latex, adhesive tape
Lab Results (03/16/2024): troponin negative, WBC 8.4

Medicaid account: 4021 8833 1290 5567
Follow-up appointment in two weeks.
"
    .to_string()
}

#[tokio::test]
async fn detects_and_redacts_all_present_categories() {
    let detector = RegexDetector::new().unwrap();
    let output = detector.detect(&synthetic_note()).await.unwrap();

    let cleansed = &output.cleansed_document;
    assert!(cleansed.contains("Patient: *name*"));
    assert!(cleansed.contains("DOB: *dob*"));
    assert!(cleansed.contains("Medical Record Number: *mrn*"));
    assert!(cleansed.contains("SSN: *ssn*"));
    assert!(cleansed.contains("Address: *address*"));
    assert!(cleansed.contains("Hospital Name: *hospital*"));
    assert!(cleansed.contains("*phone*"));
    assert!(cleansed.contains("*email*"));
    assert!(cleansed.contains("Allergies: *allergy*"));
    assert!(cleansed.contains("*labs*"));
    assert!(cleansed.contains("Medicaid account: *account*"));

    // None of the raw identifiers survive
    assert!(!cleansed.contains("Maria Alvarez"));
    assert!(!cleansed.contains("987-65-4321"));
    assert!(!cleansed.contains("care.team@lakeview.example.org"));
    assert!(!cleansed.contains("4021 8833 1290 5567"));
}

#[tokio::test]
async fn removed_values_line_up_with_vocabulary() {
    let detector = RegexDetector::new().unwrap();
    let output = detector.detect(&synthetic_note()).await.unwrap();

    assert_eq!(output.removed_values.len(), 11);
    assert_eq!(output.removed_values[PlaceholderKind::Name.ordinal()], "Maria Alvarez");
    assert_eq!(output.removed_values[PlaceholderKind::DateOfBirth.ordinal()], "03/14/1968");
    assert_eq!(
        output.removed_values[PlaceholderKind::MedicalRecordNumber.ordinal()],
        "A-99-1204"
    );
    assert_eq!(output.removed_values[PlaceholderKind::Ssn.ordinal()], "987-65-4321");
    assert_eq!(
        output.removed_values[PlaceholderKind::Address.ordinal()],
        "450 Cedar Hill Road, Saint Paul, MN 55102"
    );
    assert_eq!(output.removed_values[PlaceholderKind::Phone.ordinal()], "(651) 555-0142");
    assert_eq!(
        output.removed_values[PlaceholderKind::Email.ordinal()],
        "care.team@lakeview.example.org"
    );
    assert_eq!(
        output.removed_values[PlaceholderKind::Hospital.ordinal()],
        "Lakeview Regional Medical Center"
    );
    assert_eq!(
        output.removed_values[PlaceholderKind::Allergy.ordinal()],
        "latex, adhesive tape"
    );
    assert_eq!(
        output.removed_values[PlaceholderKind::LabResults.ordinal()],
        "troponin negative, WBC 8.4"
    );
    assert_eq!(
        output.removed_values[PlaceholderKind::Account.ordinal()],
        "4021 8833 1290 5567"
    );
}

#[tokio::test]
async fn repeated_mentions_collapse_to_one_value() {
    let detector = RegexDetector::new().unwrap();
    let note = "Patient: Maria Alvarez\nMaria Alvarez tolerated the procedure. \
                Maria Alvarez will follow up.\n";
    let output = detector.detect(note).await.unwrap();

    assert_eq!(output.cleansed_document.matches("*name*").count(), 3);
    assert_eq!(output.removed_values, vec!["Maria Alvarez".to_string()]);
}

#[tokio::test]
async fn excluded_categories_are_left_in_place() {
    let config = DetectorConfig {
        excluded_categories: vec!["labs".to_string(), "hospital".to_string()],
        ..Default::default()
    };
    let detector = RegexDetector::with_config(&config).unwrap();
    let output = detector.detect(&synthetic_note()).await.unwrap();

    assert!(output
        .cleansed_document
        .contains("Lakeview Regional Medical Center"));
    assert!(output.cleansed_document.contains("troponin negative"));
    // Other categories are still redacted
    assert!(!output.cleansed_document.contains("Maria Alvarez"));
}

#[tokio::test]
async fn custom_allergy_terms_redact_list_entries() {
    let config = DetectorConfig {
        allergy_terms: vec!["Morphine".to_string()],
        ..Default::default()
    };
    let detector = RegexDetector::with_config(&config).unwrap();
    let note = "Current reactions:\n- Morphine (nausea, severe)\n- seasonal pollen\n";
    let output = detector.detect(note).await.unwrap();

    assert!(output.cleansed_document.contains("*allergy*"));
    assert!(!output.cleansed_document.contains("Morphine"));
    assert!(output.cleansed_document.contains("seasonal pollen"));
}
