//! Built-in seed catalog used when no question service is configured.
//!
//! The data is hand-authored and intentionally left as written: some tag
//! ids are reused with different names on different questions, and the
//! hypertension question carries tags with no severity or timestamps.

use chrono::{DateTime, NaiveDate, Utc};

use crate::catalog::Catalog;
use crate::model::{Department, DepartmentId, Question, QuestionId, Tag, TagId};

fn at(month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2024, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn department(id: DepartmentId, name: &str, description: &str) -> Department {
    Department {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        question_count: None,
        created_at: Some(at(1, 1)),
        updated_at: Some(at(3, 15)),
    }
}

fn tag(id: TagId, name: &str, concept_id: &str, description: &str) -> Tag {
    Tag::new(id, name)
        .with_snomed(concept_id)
        .with_description(description)
        .with_severity(1)
        .with_timestamps(at(3, 1), at(3, 15))
}

/// `text` is `[title, content, analysis summary, slicer query]`
fn question(
    id: QuestionId,
    department_id: DepartmentId,
    text: [&str; 4],
    tags: Vec<Tag>,
    created: (u32, u32),
    updated: (u32, u32),
) -> Question {
    let [title, content, summary, query] = text;
    Question {
        id,
        title: title.to_string(),
        content: content.to_string(),
        analysis_summary: summary.to_string(),
        slicer_query: Some(query.to_string()),
        screenshot_path: None,
        department_id,
        tags,
        created_at: Some(at(created.0, created.1)),
        updated_at: Some(at(updated.0, updated.1)),
    }
}

pub fn departments() -> Vec<Department> {
    vec![
        department(1, "Endocrinology", "Specializing in diabetes and hormonal disorders"),
        department(2, "Neurology", "Focusing on neurological conditions and disorders"),
        department(3, "Cardiology", "Specializing in heart and cardiovascular conditions"),
        department(4, "Rehabilitation", "Focusing on physical therapy and recovery programs"),
        department(5, "Laboratory Medicine", "Specializing in diagnostic testing and laboratory analysis"),
        department(6, "Pediatrics", "Focusing on child health and development"),
        department(7, "Oncology", "Specializing in cancer diagnosis and treatment"),
        department(8, "Gastroenterology", "Focusing on digestive system disorders"),
        department(9, "Pulmonology", "Specializing in respiratory conditions"),
        department(10, "Nephrology", "Focusing on kidney diseases and disorders"),
    ]
}

const HEART_ATTACK_QUERY: &str = "
      SELECT
        p.patient_id,
        p.heart_attack_date,
        p.rehab_start_date,
        p.initial_ejection_fraction,
        p.six_month_ejection_fraction,
        p.readmission_status,
        p.functional_capacity_score,
        p.quality_of_life_score
      FROM heart_attack_patients p
      WHERE p.heart_attack_date >= DATE_SUB(CURRENT_DATE, INTERVAL 1 YEAR)
      ORDER BY p.rehab_start_date
    ";

pub fn questions() -> Vec<Question> {
    vec![
        // Endocrinology
        question(
            1,
            1,
            [
                "Trend Analysis of HbA1c Levels in Diabetic Patients",
                "What is the trend of HbA1c levels in diabetic patients over the past 6 months?",
                "Analysis shows a 15% improvement in HbA1c control among diabetic patients following the new treatment protocol.",
                "SELECT patient_id, date, hba1c_value FROM lab_results WHERE test_type = 'HbA1c' AND date >= DATE_SUB(CURRENT_DATE, INTERVAL 6 MONTH)",
            ],
            vec![
                tag(57, "Diabetes", "73211009", "A chronic condition that affects how your body turns food into energy"),
                tag(58, "HbA1c", "43396009", "Glycated hemoglobin"),
            ],
            (2, 1),
            (3, 1),
        ),
        question(
            2,
            1,
            [
                "Thyroid Function Test Patterns",
                "What are the patterns of thyroid function test results in patients with subclinical hypothyroidism?",
                "Analysis reveals that 40% of patients with subclinical hypothyroidism progress to overt hypothyroidism within 2 years.",
                "SELECT patient_id, tsh_level, ft4_level, diagnosis_date FROM thyroid_tests WHERE diagnosis = 'Subclinical Hypothyroidism'",
            ],
            vec![
                tag(3, "Thyroid", "2093000", "Thyroid disorder"),
                tag(4, "Hormone", "267038008", "Hormone test"),
            ],
            (2, 15),
            (3, 10),
        ),
        question(
            3,
            1,
            [
                "Obesity Management Outcomes",
                "How effective are different weight management interventions in patients with metabolic syndrome?",
                "Combined lifestyle and pharmacological intervention showed 30% better weight loss outcomes compared to lifestyle changes alone.",
                "SELECT patient_id, intervention_type, weight_change, metabolic_parameters FROM obesity_management WHERE diagnosis = 'Metabolic Syndrome'",
            ],
            vec![
                tag(5, "Obesity", "414916001", "Obesity"),
                tag(6, "Metabolic", "237627005", "Metabolic syndrome"),
            ],
            (2, 20),
            (3, 12),
        ),
        // Neurology
        question(
            4,
            2,
            [
                "Parkinson's Disease Medication Adherence",
                "How does medication adherence affect symptom progression in Parkinson's patients?",
                "Patients with >90% medication adherence showed 40% slower symptom progression.",
                "SELECT patient_id, medication_adherence, symptom_score FROM neurology_patients WHERE diagnosis = 'Parkinson's Disease'",
            ],
            vec![
                tag(59, "Stroke", "230690007", "Cerebrovascular accident"),
                tag(60, "Atrial Fibrillation", "49436004", "Atrial fibrillation"),
            ],
            (2, 10),
            (3, 5),
        ),
        question(
            5,
            2,
            [
                "Epilepsy Seizure Control",
                "What factors influence seizure control in patients with refractory epilepsy?",
                "Patients with regular sleep patterns and consistent medication timing showed 50% better seizure control.",
                "SELECT patient_id, sleep_pattern, medication_timing, seizure_frequency FROM epilepsy_patients WHERE diagnosis = 'Refractory Epilepsy'",
            ],
            vec![
                tag(9, "Epilepsy", "84757009", "Epilepsy"),
                tag(10, "Seizure", "91175000", "Seizure disorder"),
            ],
            (2, 25),
            (3, 14),
        ),
        question(
            6,
            2,
            [
                "Multiple Sclerosis Treatment Response",
                "How do different disease-modifying therapies affect relapse rates in MS patients?",
                "High-efficacy DMTs showed 60% reduction in annualized relapse rate compared to moderate-efficacy therapies.",
                "SELECT patient_id, treatment_type, relapse_count, edss_score FROM ms_patients WHERE diagnosis = 'Multiple Sclerosis'",
            ],
            vec![
                tag(11, "Multiple Sclerosis", "24700007", "Multiple sclerosis"),
                tag(12, "DMT", "763158003", "Disease modifying therapy"),
            ],
            (3, 1),
            (3, 15),
        ),
        // Cardiology
        question(
            7,
            3,
            [
                "Stroke Risk Assessment in Atrial Fibrillation",
                "What is the correlation between CHA2DS2-VASc scores and stroke incidence in our AF patients?",
                "Patients with CHA2DS2-VASc scores ≥4 showed 3x higher stroke risk compared to lower scores.",
                "SELECT patient_id, chads_vasc_score, stroke_incidence FROM patient_records WHERE diagnosis = 'Atrial Fibrillation'",
            ],
            vec![
                tag(59, "Stroke", "230690007", "Cerebrovascular accident"),
                tag(60, "Atrial Fibrillation", "49436004", "Atrial fibrillation"),
            ],
            (2, 15),
            (3, 10),
        ),
        question(
            8,
            3,
            [
                "Heart Failure Readmission Prevention",
                "What factors contribute to readmission rates in heart failure patients within 30 days of discharge?",
                "Patients with comprehensive discharge planning and follow-up showed 50% lower readmission rates.",
                "SELECT patient_id, discharge_planning_score, follow_up_attendance, readmission_status FROM heart_failure_patients WHERE discharge_date >= DATE_SUB(CURRENT_DATE, INTERVAL 3 MONTH)",
            ],
            vec![
                tag(73, "Heart Failure", "84114007", "A condition in which the heart is unable to pump enough blood to meet the body's needs"),
                tag(74, "Readmission", "183932001", "Hospital readmission"),
            ],
            (3, 1),
            (3, 15),
        ),
        question(
            9,
            3,
            [
                "Hypertension Control Patterns",
                "What are the patterns of blood pressure control in patients with resistant hypertension?",
                "Patients on triple therapy with spironolactone showed 40% better blood pressure control.",
                "SELECT patient_id, medication_regimen, bp_measurements FROM hypertension_patients WHERE diagnosis = 'Resistant Hypertension'",
            ],
            vec![
                Tag::new(13, "Hypertension")
                    .with_snomed("38341003")
                    .with_description("Hypertension"),
                Tag::new(14, "Blood Pressure")
                    .with_snomed("75367002")
                    .with_description("Blood pressure"),
            ],
            (2, 20),
            (3, 12),
        ),
        // Rehabilitation
        question(
            10,
            4,
            [
                "Cardiac Rehabilitation Program Outcomes",
                "What is the impact of our cardiac rehabilitation program on patient recovery and readmission rates?",
                "Patients completing the 12-week program showed 60% lower readmission rates and improved quality of life scores.",
                "SELECT patient_id, program_completion, readmission_rate, quality_of_life_score FROM cardiac_rehab WHERE program_start_date >= DATE_SUB(CURRENT_DATE, INTERVAL 1 YEAR)",
            ],
            vec![
                tag(69, "Cardiac Rehabilitation", "304252008", "Cardiac rehabilitation program"),
                tag(70, "Exercise Capacity", "248536006", "Exercise capacity assessment"),
                tag(71, "Stroke Rehabilitation", "304253003", "Stroke rehabilitation program"),
                tag(72, "Functional Recovery", "248536006", "Functional recovery assessment"),
            ],
            (2, 20),
            (3, 12),
        ),
        question(
            11,
            4,
            [
                "Post-Stroke Rehabilitation Progress",
                "How effective is our intensive rehabilitation program for stroke patients in improving mobility scores?",
                "Patients in the intensive program showed 45% greater improvement in mobility scores compared to standard care.",
                "SELECT patient_id, program_type, mobility_score_baseline, mobility_score_followup FROM stroke_rehab WHERE admission_date >= DATE_SUB(CURRENT_DATE, INTERVAL 6 MONTH)",
            ],
            vec![
                tag(65, "Stroke Rehabilitation", "228153009", "Stroke rehabilitation program"),
                tag(66, "Functional Recovery", "183932001", "Functional recovery assessment"),
            ],
            (2, 25),
            (3, 14),
        ),
        question(
            12,
            4,
            [
                "Orthopedic Rehabilitation Outcomes",
                "What is the impact of early mobilization on recovery time in post-orthopedic surgery patients?",
                "Patients starting rehabilitation within 24 hours of surgery showed 30% faster recovery and 25% lower complication rates.",
                "SELECT patient_id, mobilization_time, recovery_duration, complication_rate FROM orthopedic_rehab WHERE surgery_date >= DATE_SUB(CURRENT_DATE, INTERVAL 3 MONTH)",
            ],
            vec![
                tag(19, "Orthopedic", "56459004", "Orthopedic procedure"),
                tag(20, "Mobilization", "225358003", "Early mobilization"),
            ],
            (3, 1),
            (3, 15),
        ),
        // Laboratory Medicine
        question(
            13,
            5,
            [
                "COVID-19 Test Turnaround Time",
                "What is the average turnaround time for COVID-19 PCR test results in our laboratory?",
                "Average TAT improved from 24 hours to 12 hours after implementing new processing protocols.",
                "SELECT test_id, collection_time, result_time FROM lab_tests WHERE test_type = 'COVID-19 PCR'",
            ],
            vec![
                tag(21, "COVID-19", "840539006", "COVID-19"),
                tag(22, "Laboratory", "264362003", "Laboratory procedure"),
            ],
            (1, 20),
            (2, 28),
        ),
        question(
            14,
            5,
            [
                "Blood Culture Contamination Rates",
                "What factors contribute to blood culture contamination rates in our emergency department?",
                "Implementation of phlebotomy team reduced contamination rates by 40% compared to nurse-drawn samples.",
                "SELECT sample_id, collector_type, contamination_status FROM blood_cultures WHERE collection_date >= DATE_SUB(CURRENT_DATE, INTERVAL 6 MONTH)",
            ],
            vec![
                tag(23, "Microbiology", "409822003", "Microbiology"),
                tag(24, "Contamination", "260413007", "Specimen contamination"),
            ],
            (2, 10),
            (3, 5),
        ),
        question(
            15,
            5,
            [
                "Critical Value Reporting Time",
                "How quickly are critical laboratory values being reported to clinicians?",
                "Implementation of automated alert system reduced reporting time from 45 minutes to 15 minutes.",
                "SELECT test_id, result_time, notification_time FROM critical_values WHERE result_date >= DATE_SUB(CURRENT_DATE, INTERVAL 1 MONTH)",
            ],
            vec![
                tag(25, "Critical Value", "42425007", "Critical laboratory value"),
                tag(26, "Reporting", "225234004", "Laboratory reporting"),
            ],
            (2, 15),
            (3, 10),
        ),
        // Pediatrics
        question(
            16,
            6,
            [
                "Asthma Control in Children",
                "What factors influence asthma control in pediatric patients?",
                "Regular use of controller medications and proper inhaler technique showed 60% better asthma control.",
                "SELECT patient_id, medication_adherence, inhaler_technique, asthma_control_score FROM pediatric_asthma WHERE age < 18",
            ],
            vec![
                tag(27, "Asthma", "195967001", "Asthma"),
                tag(28, "Pediatrics", "394576009", "Pediatric care"),
            ],
            (2, 1),
            (3, 1),
        ),
        question(
            17,
            6,
            [
                "Growth Monitoring Patterns",
                "What are the patterns of growth in children with growth hormone deficiency?",
                "Children receiving growth hormone therapy showed catch-up growth within 6 months of treatment initiation.",
                "SELECT patient_id, height, weight, treatment_duration FROM growth_monitoring WHERE diagnosis = 'Growth Hormone Deficiency'",
            ],
            vec![
                tag(29, "Growth", "248153007", "Growth assessment"),
                tag(30, "Hormone", "267038008", "Hormone therapy"),
            ],
            (2, 15),
            (3, 10),
        ),
        question(
            18,
            6,
            [
                "Vaccination Coverage Analysis",
                "What is the vaccination coverage rate for recommended childhood vaccines in our patient population?",
                "Vaccination coverage improved by 25% after implementing reminder systems and education programs.",
                "SELECT patient_id, vaccine_type, administration_date FROM vaccinations WHERE age < 18 AND date >= DATE_SUB(CURRENT_DATE, INTERVAL 1 YEAR)",
            ],
            vec![
                tag(31, "Vaccination", "33879002", "Vaccination"),
                tag(32, "Immunization", "33879002", "Immunization"),
            ],
            (2, 20),
            (3, 12),
        ),
        // Oncology
        question(
            19,
            7,
            [
                "Breast Cancer Treatment Response",
                "How do different chemotherapy regimens affect response rates in HER2-positive breast cancer?",
                "Dual HER2-targeted therapy showed 40% better response rates compared to single-agent therapy.",
                "SELECT patient_id, treatment_regimen, response_rate, survival_time FROM breast_cancer WHERE subtype = 'HER2-positive'",
            ],
            vec![
                tag(33, "Breast Cancer", "254837009", "Breast cancer"),
                tag(34, "HER2", "423857001", "HER2 positive"),
            ],
            (2, 1),
            (3, 1),
        ),
        question(
            20,
            7,
            [
                "Lung Cancer Screening Outcomes",
                "What is the detection rate of early-stage lung cancer in our screening program?",
                "Annual low-dose CT screening detected 80% of lung cancers at stage I or II.",
                "SELECT patient_id, screening_date, cancer_stage, detection_method FROM lung_cancer_screening WHERE screening_date >= DATE_SUB(CURRENT_DATE, INTERVAL 2 YEAR)",
            ],
            vec![
                tag(35, "Lung Cancer", "254637007", "Lung cancer"),
                tag(36, "Screening", "71388002", "Cancer screening"),
            ],
            (2, 15),
            (3, 10),
        ),
        question(
            21,
            7,
            [
                "Colorectal Cancer Surveillance",
                "What is the optimal surveillance interval for colorectal cancer after curative resection?",
                "Intensive surveillance in the first 3 years detected 90% of recurrences at resectable stages.",
                "SELECT patient_id, surveillance_interval, recurrence_status, detection_stage FROM crc_surveillance WHERE surgery_date >= DATE_SUB(CURRENT_DATE, INTERVAL 5 YEAR)",
            ],
            vec![
                tag(37, "Colorectal Cancer", "363406005", "Colorectal cancer"),
                tag(38, "Surveillance", "225234004", "Cancer surveillance"),
            ],
            (2, 20),
            (3, 12),
        ),
        // Gastroenterology
        question(
            22,
            8,
            [
                "IBD Treatment Response",
                "How effective are different biologic therapies in maintaining remission in Crohn's disease?",
                "Combination therapy with immunomodulators showed 50% better remission maintenance compared to monotherapy.",
                "SELECT patient_id, treatment_type, remission_duration, flare_frequency FROM ibd_patients WHERE diagnosis = 'Crohn's Disease'",
            ],
            vec![
                tag(39, "IBD", "24526004", "Inflammatory bowel disease"),
                tag(40, "Biologic", "763158003", "Biologic therapy"),
            ],
            (2, 1),
            (3, 1),
        ),
        question(
            23,
            8,
            [
                "GERD Treatment Patterns",
                "What are the patterns of proton pump inhibitor use in patients with GERD?",
                "Step-down therapy showed similar symptom control with 40% lower PPI usage compared to continuous therapy.",
                "SELECT patient_id, treatment_strategy, symptom_score, medication_usage FROM gerd_patients WHERE diagnosis = 'GERD'",
            ],
            vec![
                tag(41, "GERD", "235595009", "Gastroesophageal reflux disease"),
                tag(42, "PPI", "372665008", "Proton pump inhibitor"),
            ],
            (2, 15),
            (3, 10),
        ),
        question(
            24,
            8,
            [
                "Liver Disease Progression",
                "What factors influence progression of non-alcoholic fatty liver disease?",
                "Patients with metabolic syndrome showed 3x faster progression to fibrosis compared to those without.",
                "SELECT patient_id, metabolic_status, fibrosis_score, progression_rate FROM nafld_patients WHERE diagnosis = 'NAFLD'",
            ],
            vec![
                tag(43, "NAFLD", "197321007", "Non-alcoholic fatty liver disease"),
                tag(44, "Liver", "10200004", "Liver disease"),
            ],
            (2, 20),
            (3, 12),
        ),
        // Pulmonology
        question(
            25,
            9,
            [
                "COPD Exacerbation Prevention",
                "What interventions are most effective in preventing COPD exacerbations?",
                "Combination of pulmonary rehabilitation and proper inhaler technique reduced exacerbations by 60%.",
                "SELECT patient_id, intervention_type, exacerbation_frequency, hospitalizations FROM copd_patients WHERE diagnosis = 'COPD'",
            ],
            vec![
                tag(45, "COPD", "13645005", "Chronic obstructive pulmonary disease"),
                tag(46, "Exacerbation", "195967001", "Disease exacerbation"),
            ],
            (2, 1),
            (3, 1),
        ),
        question(
            26,
            9,
            [
                "Asthma Control Assessment",
                "How effective is our asthma control assessment tool in predicting exacerbations?",
                "ACT scores < 20 predicted 80% of exacerbations within the next 3 months.",
                "SELECT patient_id, act_score, exacerbation_status, follow_up_date FROM asthma_patients WHERE assessment_date >= DATE_SUB(CURRENT_DATE, INTERVAL 6 MONTH)",
            ],
            vec![
                tag(47, "Asthma", "195967001", "Asthma"),
                tag(48, "Control", "225234004", "Disease control"),
            ],
            (2, 15),
            (3, 10),
        ),
        question(
            27,
            9,
            [
                "Pulmonary Function Trends",
                "What are the long-term trends in pulmonary function in patients with interstitial lung disease?",
                "Annual decline in FVC was 200ml in untreated patients compared to 50ml in those on antifibrotic therapy.",
                "SELECT patient_id, fvc_measurements, treatment_status, follow_up_duration FROM ild_patients WHERE diagnosis = 'Interstitial Lung Disease'",
            ],
            vec![
                tag(49, "ILD", "233703007", "Interstitial lung disease"),
                tag(50, "PFT", "16932000", "Pulmonary function test"),
            ],
            (2, 20),
            (3, 12),
        ),
        // Nephrology
        question(
            28,
            10,
            [
                "Dialysis Access Outcomes",
                "What factors influence the patency rates of arteriovenous fistulas in hemodialysis patients?",
                "Preoperative vein mapping and surgeon experience showed 40% better primary patency rates.",
                "SELECT patient_id, access_type, patency_duration, complication_rate FROM dialysis_access WHERE creation_date >= DATE_SUB(CURRENT_DATE, INTERVAL 2 YEAR)",
            ],
            vec![
                tag(51, "Dialysis", "399270008", "Hemodialysis"),
                tag(52, "Access", "257316003", "Vascular access"),
            ],
            (2, 1),
            (3, 1),
        ),
        question(
            29,
            10,
            [
                "CKD Progression Analysis",
                "What are the risk factors for rapid progression of chronic kidney disease?",
                "Proteinuria > 1g/day and uncontrolled hypertension were associated with 3x faster eGFR decline.",
                "SELECT patient_id, proteinuria_level, bp_control, egfr_trend FROM ckd_patients WHERE diagnosis = 'Chronic Kidney Disease'",
            ],
            vec![
                tag(53, "CKD", "709044004", "Chronic kidney disease"),
                tag(54, "Progression", "260413007", "Disease progression"),
            ],
            (2, 15),
            (3, 10),
        ),
        question(
            30,
            10,
            [
                "AKI Recovery Patterns",
                "What factors influence recovery from acute kidney injury in hospitalized patients?",
                "Early nephrology consultation and volume optimization showed 50% better renal recovery rates.",
                "SELECT patient_id, consultation_timing, volume_status, recovery_status FROM aki_patients WHERE admission_date >= DATE_SUB(CURRENT_DATE, INTERVAL 3 MONTH)",
            ],
            vec![
                tag(55, "AKI", "14669001", "Acute kidney injury"),
                tag(56, "Recovery", "260413007", "Renal recovery"),
            ],
            (2, 20),
            (3, 12),
        ),
        // Cross-department; primary department is Cardiology
        question(
            31,
            3,
            [
                "Heart Attack Recovery Journey: From Acute Care to Rehabilitation",
                "How does early cardiac rehabilitation impact long-term recovery and readmission rates in heart attack patients?",
                "Analysis shows that patients who start cardiac rehabilitation within 2 weeks of their heart attack have 40% lower readmission rates and 50% better functional recovery at 6 months compared to those who start later.",
                HEART_ATTACK_QUERY,
            ],
            vec![
                tag(63, "Myocardial Infarction", "22298006", "Heart attack"),
                tag(64, "Cardiac Rehabilitation", "304252008", "Cardiac rehabilitation program"),
                tag(65, "Exercise Capacity", "248536006", "Exercise capacity assessment"),
                tag(66, "Quality of Life", "248536006", "Quality of life assessment"),
            ],
            (3, 1),
            (3, 15),
        ),
    ]
}

/// The full seed catalog
pub fn seed() -> Catalog {
    Catalog::new(departments(), questions())
}
