//! Seeded patient record store.
//!
//! The store is read-only after construction: four demo records keyed by
//! their canonical medical identifier. Lookups take an already-normalised
//! [`MedicalId`], so casing and whitespace variants of the same identifier
//! all resolve to the same record.

use std::collections::HashMap;

use api_shared::PatientRecord;
use relay_types::MedicalId;

/// The seeded identifiers, in the order they are suggested to callers.
pub const SAMPLE_IDS: [&str; 4] = ["MED-123", "MED-456", "MED-789", "MED-321"];

/// Hint returned when a lookup misses.
pub const RECORD_HINT: &str = "Try MED-123, MED-456, MED-789, or MED-321";

/// Read-only mapping from medical identifier to patient record.
pub struct RecordStore {
    records: HashMap<String, PatientRecord>,
}

impl RecordStore {
    /// Builds the store with the four demo records.
    pub fn seeded() -> Self {
        let mut records = HashMap::new();
        for record in seed_records() {
            records.insert(record.id.clone(), record);
        }
        Self { records }
    }

    /// Looks up a record by its normalised identifier.
    ///
    /// Absence is a valid outcome, not an error.
    pub fn lookup(&self, id: &MedicalId) -> Option<&PatientRecord> {
        self.records.get(id.as_str())
    }

    /// The seeded identifiers in canonical order, for the not-found hint.
    pub fn sample_ids(&self) -> Vec<String> {
        SAMPLE_IDS.iter().map(|id| id.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn seed_records() -> Vec<PatientRecord> {
    vec![
        PatientRecord {
            id: "MED-123".into(),
            name: "John Smith".into(),
            age: 45,
            allergies: vec!["Penicillin".into()],
            conditions: vec!["Hypertension".into()],
            last_visit: "2025-01-15".into(),
            emergency_contact: "Jane Smith (555-0123)".into(),
            primary_doctor: "Dr. Sarah Wilson".into(),
            insurance_provider: "Blue Cross Blue Shield".into(),
        },
        PatientRecord {
            id: "MED-456".into(),
            name: "Sarah Johnson".into(),
            age: 32,
            allergies: vec!["Peanuts".into(), "Latex".into()],
            conditions: vec!["Diabetes Type 2".into()],
            last_visit: "2025-01-10".into(),
            emergency_contact: "Mike Johnson (555-0456)".into(),
            primary_doctor: "Dr. Michael Chen".into(),
            insurance_provider: "Aetna".into(),
        },
        PatientRecord {
            id: "MED-789".into(),
            name: "Robert Davis".into(),
            age: 58,
            allergies: vec!["Shellfish".into()],
            conditions: vec!["High Cholesterol".into(), "Arthritis".into()],
            last_visit: "2025-01-08".into(),
            emergency_contact: "Linda Davis (555-0789)".into(),
            primary_doctor: "Dr. Emily Rodriguez".into(),
            insurance_provider: "UnitedHealth".into(),
        },
        PatientRecord {
            id: "MED-321".into(),
            name: "Maria Garcia".into(),
            age: 28,
            allergies: vec!["Aspirin".into()],
            conditions: vec!["Asthma".into()],
            last_visit: "2025-01-12".into(),
            emergency_contact: "Carlos Garcia (555-0321)".into(),
            primary_doctor: "Dr. James Thompson".into(),
            insurance_provider: "Cigna".into(),
        },
    ]
}
