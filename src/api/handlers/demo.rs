/*
 * Responsibility
 * - GET /demo (公開ページ)
 * - 固定のサンプルデータで臨床データの形を見せる
 */
use axum::Json;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    api::dto::demo::DemoResponse,
    domain::clinical::{
        ChileanPatient, ContactInfo, FonasaTier, HealthInsurance, LabResult, PriorityLevel,
        PriorityScore, ReferenceRange, Sex, ValidationResult,
    },
};

const DEMO_RUT: &str = "11.111.111-1";

pub async fn demo() -> Json<DemoResponse> {
    let now = Utc::now();

    let patient = ChileanPatient {
        rut: DEMO_RUT.to_string(),
        first_name: "Paciente".to_string(),
        paternal_surname: "Demo".to_string(),
        maternal_surname: None,
        birth_date: (now - Duration::days(365 * 67)).date_naive(),
        sex: Sex::Female,
        insurance: HealthInsurance::Fonasa {
            tier: FonasaTier::B,
        },
        contact: ContactInfo {
            commune: Some("Valparaíso".to_string()),
            region: Some("Valparaíso".to_string()),
            ..ContactInfo::default()
        },
    };

    let results = vec![
        LabResult {
            id: Uuid::new_v4(),
            patient_rut: DEMO_RUT.to_string(),
            exam_code: "0302047".to_string(),
            exam_name: "Glucosa".to_string(),
            value: "212".to_string(),
            unit: Some("mg/dL".to_string()),
            reference_range: Some(ReferenceRange {
                low: Some(70.0),
                high: Some(100.0),
                text: None,
            }),
            is_abnormal: true,
            sampled_at: now - Duration::hours(6),
            reported_at: Some(now - Duration::hours(2)),
        },
        LabResult {
            id: Uuid::new_v4(),
            patient_rut: DEMO_RUT.to_string(),
            exam_code: "0309022".to_string(),
            exam_name: "Orina completa".to_string(),
            value: "Negativo".to_string(),
            unit: None,
            reference_range: Some(ReferenceRange {
                low: None,
                high: None,
                text: Some("Negativo".to_string()),
            }),
            is_abnormal: false,
            sampled_at: now - Duration::hours(6),
            reported_at: None,
        },
    ];

    let priority = PriorityScore {
        patient_rut: DEMO_RUT.to_string(),
        score: 78,
        level: PriorityLevel::High,
        reasons: vec![
            "glucosa sobre rango de referencia".to_string(),
            "paciente mayor de 65 años".to_string(),
        ],
    };

    let validation = ValidationResult {
        is_valid: true,
        errors: Vec::new(),
        warnings: vec!["resultado de orina pendiente de informe".to_string()],
    };

    Json(DemoResponse {
        patient,
        results,
        priority,
        validation,
    })
}
