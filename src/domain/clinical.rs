/*
 * Responsibility
 * - チリの臨床検査データモデル (患者・検査結果・優先度・検証結果・職種)
 * - serde でのシリアライズ形のみを定義する
 *
 * Notes
 * - RUT の検証やパースはここでは行わない (文字列のまま保持)
 * - 取り込みパイプラインや永続化は別サービスの責務
 */
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a healthcare worker as carried in the identity token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthcareRole {
    Admin,
    Doctor,
    Nurse,
    LabTechnician,
    /// Técnico en enfermería de nivel superior.
    Tens,
    Other,
}

impl HealthcareRole {
    pub const ALL: [HealthcareRole; 6] = [
        Self::Admin,
        Self::Doctor,
        Self::Nurse,
        Self::LabTechnician,
        Self::Tens,
        Self::Other,
    ];

    /// Unknown role strings map to `Other`.
    pub fn from_claim(role: &str) -> Self {
        match role {
            "admin" => Self::Admin,
            "doctor" => Self::Doctor,
            "nurse" => Self::Nurse,
            "lab_technician" => Self::LabTechnician,
            "tens" => Self::Tens,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FonasaTier {
    A,
    B,
    C,
    D,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HealthInsurance {
    Fonasa { tier: FonasaTier },
    Isapre { name: String },
    Particular,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub commune: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChileanPatient {
    /// RUT as written on the source document, e.g. `12.345.678-5`.
    pub rut: String,
    pub first_name: String,
    pub paternal_surname: String,
    pub maternal_surname: Option<String>,
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub insurance: HealthInsurance,
    #[serde(default)]
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub low: Option<f64>,
    pub high: Option<f64>,
    /// Free-text range when the lab reports one, e.g. `"Negativo"`.
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    pub id: Uuid,
    pub patient_rut: String,
    pub exam_code: String,
    pub exam_name: String,
    pub value: String,
    pub unit: Option<String>,
    pub reference_range: Option<ReferenceRange>,
    pub is_abnormal: bool,
    pub sampled_at: DateTime<Utc>,
    pub reported_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityScore {
    pub patient_rut: String,
    /// 0..=100
    pub score: u8,
    pub level: PriorityLevel,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_role_claim_maps_to_other() {
        assert_eq!(HealthcareRole::from_claim("doctor"), HealthcareRole::Doctor);
        assert_eq!(HealthcareRole::from_claim("Doctor"), HealthcareRole::Other);
        assert_eq!(HealthcareRole::from_claim(""), HealthcareRole::Other);
    }

    #[test]
    fn role_serializes_as_snake_case() {
        let value = serde_json::to_value(HealthcareRole::LabTechnician).unwrap();
        assert_eq!(value, json!("lab_technician"));
    }

    #[test]
    fn insurance_is_tagged_by_kind() {
        let fonasa = serde_json::to_value(HealthInsurance::Fonasa {
            tier: FonasaTier::B,
        })
        .unwrap();
        assert_eq!(fonasa, json!({"kind": "fonasa", "tier": "B"}));

        let particular = serde_json::to_value(HealthInsurance::Particular).unwrap();
        assert_eq!(particular, json!({"kind": "particular"}));
    }

    #[test]
    fn patient_without_contact_deserializes_with_empty_contact() {
        let patient: ChileanPatient = serde_json::from_value(json!({
            "rut": "12.345.678-5",
            "first_name": "María",
            "paternal_surname": "González",
            "maternal_surname": null,
            "birth_date": "1980-04-12",
            "sex": "female",
            "insurance": {"kind": "isapre", "name": "Colmena"}
        }))
        .unwrap();

        assert_eq!(patient.contact, ContactInfo::default());
        assert_eq!(
            patient.insurance,
            HealthInsurance::Isapre {
                name: "Colmena".to_string()
            }
        );
    }

    #[test]
    fn priority_levels_are_ordered() {
        assert!(PriorityLevel::Critical > PriorityLevel::High);
        assert!(PriorityLevel::Low < PriorityLevel::Medium);
    }
}
