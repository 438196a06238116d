/// A medical record identifier in its canonical form.
///
/// This type wraps a `String` and guarantees the canonical spelling used as
/// the record-store key: leading and trailing whitespace removed and all
/// characters uppercased. Construction never fails — an empty or unknown
/// identifier is a legitimate value that simply will not match any record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MedicalId(String);

impl MedicalId {
    /// Creates a new `MedicalId` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace and
    /// uppercased, so `"  med-123 "` and `"MED-123"` produce equal values.
    pub fn new(input: impl AsRef<str>) -> Self {
        Self(input.as_ref().trim().to_uppercase())
    }

    /// Returns the canonical identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the input contained no identifier at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for MedicalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MedicalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MedicalId {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl serde::Serialize for MedicalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for MedicalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MedicalId::new(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_case_and_whitespace() {
        assert_eq!(MedicalId::new("  med-123 ").as_str(), "MED-123");
        assert_eq!(MedicalId::new("Med-456").as_str(), "MED-456");
        assert_eq!(MedicalId::new("MED-789"), MedicalId::new("med-789"));
    }

    #[test]
    fn empty_input_is_allowed() {
        let id = MedicalId::new("   ");
        assert!(id.is_empty());
        assert_eq!(id.as_str(), "");
    }

    #[test]
    fn deserialize_normalises() {
        let id: MedicalId = serde_json::from_str("\" med-321\"").unwrap();
        assert_eq!(id.as_str(), "MED-321");
    }
}
