//! Digital twin: a canned projection of a mock patient's risk over a year.
//!
//! Nothing here models physiology; every projection is a linear drift of a
//! current vital, scaled by a condition-based baseline risk.

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Monthly time points simulated
pub const TIME_POINTS: usize = 12;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    pub glucose: f64,
    pub blood_pressure: f64,
    pub heart_rate: f64,
    pub cholesterol: f64,
    pub kidney_function: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub conditions: Vec<String>,
    pub vitals: Vitals,
}

impl Patient {
    pub fn has_condition(&self, condition: &str) -> bool {
        self.conditions.iter().any(|c| c == condition)
    }
}

/// Projection for one clinical domain
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub risk: f64,
    pub changes: Vec<f64>,
    pub time_points: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SimulationResult {
    pub patient_id: String,
    pub scenario: String,
    pub cardiovascular: Projection,
    pub nephrology: Projection,
    pub endocrinology: Projection,
    pub neurology: Projection,
    pub recommendations: Vec<String>,
}

const RECOMMENDATIONS: [&str; 5] = [
    "Monitor blood glucose levels closely",
    "Schedule regular cardiovascular check-ups",
    "Maintain a balanced diet with controlled carbohydrate intake",
    "Engage in regular physical activity",
    "Consider consultation with an endocrinologist",
];

fn patient(
    id: &str,
    name: &str,
    age: u32,
    gender: &str,
    conditions: [&str; 2],
    vitals: Vitals,
) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        conditions: conditions.iter().map(|c| c.to_string()).collect(),
        vitals,
    }
}

pub fn mock_patients() -> Vec<Patient> {
    vec![
        patient(
            "1",
            "John Doe",
            45,
            "Male",
            ["Type 2 Diabetes", "Hypertension"],
            Vitals {
                glucose: 180.0,
                blood_pressure: 140.0,
                heart_rate: 75.0,
                cholesterol: 220.0,
                kidney_function: 85.0,
            },
        ),
        patient(
            "2",
            "Jane Smith",
            32,
            "Female",
            ["Prediabetes", "Obesity"],
            Vitals {
                glucose: 110.0,
                blood_pressure: 130.0,
                heart_rate: 82.0,
                cholesterol: 190.0,
                kidney_function: 95.0,
            },
        ),
        patient(
            "3",
            "Robert Johnson",
            58,
            "Male",
            ["Heart Disease", "High Cholesterol"],
            Vitals {
                glucose: 95.0,
                blood_pressure: 150.0,
                heart_rate: 68.0,
                cholesterol: 250.0,
                kidney_function: 75.0,
            },
        ),
    ]
}

fn project(base_risk: f64, risk_factor: f64, start: f64, drift: f64) -> Projection {
    let time_points: Vec<usize> = (0..TIME_POINTS).collect();
    let changes = time_points
        .iter()
        .map(|&t| start * (1.0 + t as f64 * drift))
        .collect();
    Projection {
        risk: base_risk * risk_factor,
        changes,
        time_points,
    }
}

/// Run the canned simulation. The scenario text is carried through but
/// does not change the numbers; it only has to be present.
pub fn simulate(patient: &Patient, scenario: &str) -> Result<SimulationResult, DashboardError> {
    let scenario = scenario.trim();
    if scenario.is_empty() {
        return Err(DashboardError::Invalid(
            "A simulation scenario is required".to_string(),
        ));
    }

    let cardiovascular_base = if patient.has_condition("Heart Disease") {
        0.6
    } else {
        0.3
    };
    let nephrology_base = if patient.vitals.kidney_function < 80.0 {
        0.5
    } else {
        0.2
    };
    let endocrinology_base = if patient.has_condition("Type 2 Diabetes") {
        0.7
    } else {
        0.3
    };

    Ok(SimulationResult {
        patient_id: patient.id.clone(),
        scenario: scenario.to_string(),
        cardiovascular: project(cardiovascular_base, 1.2, patient.vitals.blood_pressure, 0.05),
        nephrology: project(nephrology_base, 1.1, patient.vitals.kidney_function, -0.03),
        endocrinology: project(endocrinology_base, 1.3, patient.vitals.glucose, 0.08),
        neurology: project(0.2, 1.1, 1.0, 0.02),
        recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
    })
}
