//! Built-in parameter catalog: common blood panel measurements with
//! adult reference ranges (gender-specific where they differ).

use std::collections::BTreeMap;

use crate::models::{ParameterDefinition, ReferenceRange, DEFAULT_THRESHOLD_KEY};

struct Row {
    name: &'static str,
    aliases: &'static [&'static str],
    normal_range: &'static str,
    description: &'static str,
    low_meaning: &'static str,
    high_meaning: &'static str,
    advice: &'static str,
    male: Option<(f64, f64)>,
    female: Option<(f64, f64)>,
    default: Option<(f64, f64)>,
}

impl Row {
    fn into_definition(self) -> ParameterDefinition {
        let mut thresholds = BTreeMap::new();
        let keyed = [
            ("male", self.male),
            ("female", self.female),
            (DEFAULT_THRESHOLD_KEY, self.default),
        ];
        for (key, range) in keyed {
            if let Some(range) = range {
                thresholds.insert(key.to_string(), ReferenceRange::from(range));
            }
        }
        ParameterDefinition {
            name: self.name.into(),
            aliases: self.aliases.iter().map(|a| a.to_string()).collect(),
            description: self.description.into(),
            low_meaning: self.low_meaning.into(),
            high_meaning: self.high_meaning.into(),
            advice: self.advice.into(),
            normal_range: self.normal_range.into(),
            thresholds,
        }
    }
}

/// (male, female, default) ranges.
type Ranges = (Option<(f64, f64)>, Option<(f64, f64)>, Option<(f64, f64)>);

/// Range that applies to everyone.
const fn all(low: f64, high: f64) -> Ranges {
    (None, None, Some((low, high)))
}

fn row(
    name: &'static str,
    aliases: &'static [&'static str],
    normal_range: &'static str,
    texts: [&'static str; 4],
    ranges: Ranges,
) -> Row {
    let [description, low_meaning, high_meaning, advice] = texts;
    let (male, female, default) = ranges;
    Row {
        name,
        aliases,
        normal_range,
        description,
        low_meaning,
        high_meaning,
        advice,
        male,
        female,
        default,
    }
}

/// Definitions in scan order. The order is observable: the line scanner
/// and the fallback matcher both walk parameters in this order.
pub fn definitions() -> Vec<ParameterDefinition> {
    rows().into_iter().map(Row::into_definition).collect()
}

fn rows() -> Vec<Row> {
    vec![
        // ── Complete blood count ───────────────────────────────────
        row(
            "Hemoglobin",
            &["hemoglobin", "hb", "hgb"],
            "13.8-17.2 g/dL (men), 12.1-15.1 g/dL (women)",
            [
                "Hemoglobin carries oxygen in your blood.",
                "Low hemoglobin can cause fatigue and anemia.",
                "High hemoglobin might indicate dehydration or other conditions.",
                "Eat iron-rich foods (spinach, lentils, red meat) and consult a doctor if low.",
            ],
            (Some((13.8, 17.2)), Some((12.1, 15.1)), Some((12.1, 17.2))),
        ),
        row(
            "Hematocrit",
            &["hematocrit", "hct"],
            "40.7%-50.3% (men), 36.1%-44.3% (women)",
            [
                "Hematocrit measures the proportion of red blood cells in the blood.",
                "Low hematocrit can indicate anemia.",
                "High hematocrit may indicate dehydration or polycythemia.",
                "Stay hydrated and consult a doctor for abnormal results.",
            ],
            (Some((40.7, 50.3)), Some((36.1, 44.3)), Some((36.1, 50.3))),
        ),
        row(
            "RBC",
            &["rbc", "red blood cell", "red blood cells"],
            "4.7-6.1 million/mcL (men), 4.2-5.4 million/mcL (women)",
            [
                "Red blood cells carry oxygen from lungs to body tissues.",
                "Low RBC may cause anemia and fatigue.",
                "High RBC may indicate dehydration or lung/heart disease.",
                "Follow medical advice; maintain nutrition and hydration.",
            ],
            (Some((4.7, 6.1)), Some((4.2, 5.4)), Some((4.2, 6.1))),
        ),
        row(
            "WBC",
            &["wbc", "white blood cell", "total wbc", "total wbc count"],
            "4,000-11,000 cells/µL",
            [
                "White blood cells fight infection.",
                "Low WBC may increase infection risk.",
                "High WBC may indicate infection or inflammation.",
                "Consult a doctor if abnormal.",
            ],
            all(4000.0, 11000.0),
        ),
        row(
            "Neutrophils",
            &["neutrophil", "neutrophils"],
            "40-60 % (of WBC)",
            [
                "Neutrophils fight bacterial infections.",
                "Low neutrophils increase infection risk.",
                "High neutrophils often indicate bacterial infection.",
                "Seek medical advice if abnormal.",
            ],
            all(40.0, 60.0),
        ),
        row(
            "Lymphocytes",
            &["lymphocyte", "lymphocytes"],
            "20-40 % (of WBC)",
            [
                "Lymphocytes fight viral infections.",
                "Low lymphocytes may weaken immune defense.",
                "High lymphocytes may indicate viral infection or chronic conditions.",
                "Monitor symptoms and consult a doctor if needed.",
            ],
            all(20.0, 40.0),
        ),
        row(
            "Monocytes",
            &["monocyte", "monocytes"],
            "2-8 % (of WBC)",
            [
                "Monocytes clean up debris and help fight infections.",
                "Low monocytes may indicate bone marrow problems.",
                "High monocytes may indicate infection or inflammation.",
                "Consult healthcare provider.",
            ],
            all(2.0, 8.0),
        ),
        row(
            "Eosinophils",
            &["eosinophil", "eosinophils"],
            "1-4 % (of WBC)",
            [
                "Eosinophils are involved in allergies and parasitic infections.",
                "Low eosinophils usually not a concern.",
                "High eosinophils can indicate allergies or parasites.",
                "Discuss allergy testing or treatment with your doctor.",
            ],
            all(1.0, 4.0),
        ),
        row(
            "Basophils",
            &["basophil", "basophils"],
            "0.5-1 % (of WBC)",
            [
                "Basophils play a role in allergic responses.",
                "Low basophils usually not clinically important.",
                "High basophils may suggest allergies or inflammation.",
                "Talk to your healthcare provider for context.",
            ],
            all(0.5, 1.0),
        ),
        row(
            "Platelets",
            &["platelet", "platelets", "plt"],
            "150,000-450,000 /µL",
            [
                "Platelets help with blood clotting.",
                "Low platelets increase bleeding/bruising risk.",
                "High platelets may raise clotting risk.",
                "Avoid injury and consult a doctor if abnormal.",
            ],
            all(150000.0, 450000.0),
        ),
        row(
            "MPV",
            &["mpv", "mean platelet volume"],
            "7.5-11.5 fL",
            [
                "Mean platelet volume indicates average platelet size.",
                "Low MPV may indicate production problems.",
                "High MPV may indicate increased platelet production.",
                "Discuss with your clinician.",
            ],
            all(7.5, 11.5),
        ),
        // ── Lipid profile ──────────────────────────────────────────
        row(
            "Cholesterol (Total)",
            &["cholesterol", "total cholesterol"],
            "<200 mg/dL",
            [
                "Total cholesterol is all cholesterol types combined.",
                "Low total cholesterol not usually concerning.",
                "High total cholesterol increases heart disease risk.",
                "Reduce saturated fat and exercise.",
            ],
            all(0.0, 200.0),
        ),
        row(
            "HDL Cholesterol",
            &["hdl", "hdl cholesterol"],
            ">=40 mg/dL (men), >=50 mg/dL (women)",
            [
                "HDL is 'good' cholesterol.",
                "Low HDL increases cardiovascular risk.",
                "High HDL is usually protective.",
                "Exercise and healthy fat intake help increase HDL.",
            ],
            (Some((40.0, 9999.0)), Some((50.0, 9999.0)), Some((40.0, 9999.0))),
        ),
        row(
            "LDL Cholesterol",
            &["ldl", "ldl cholesterol"],
            "<100 mg/dL (optimal)",
            [
                "LDL is 'bad' cholesterol that can clog arteries.",
                "Low LDL typically fine.",
                "High LDL increases heart disease risk.",
                "Lifestyle changes and medication if recommended.",
            ],
            all(0.0, 100.0),
        ),
        row(
            "Triglycerides",
            &["triglyceride", "triglycerides", "tg"],
            "<150 mg/dL",
            [
                "Triglycerides are fats stored for energy.",
                "Low triglycerides usually not a concern.",
                "High triglycerides increase heart disease risk.",
                "Reduce sugar, alcohol; maintain healthy weight.",
            ],
            all(0.0, 150.0),
        ),
        // ── Kidney function ────────────────────────────────────────
        row(
            "Blood Urea Nitrogen (BUN)",
            &["bun", "blood urea nitrogen", "urea"],
            "7-20 mg/dL",
            [
                "BUN is a kidney function marker.",
                "Low BUN may indicate liver issues.",
                "High BUN may suggest kidney dysfunction or dehydration.",
                "Stay hydrated and consult doctor if high.",
            ],
            all(7.0, 20.0),
        ),
        row(
            "Creatinine",
            &["creatinine", "scr"],
            "0.6-1.3 mg/dL",
            [
                "Creatinine reflects kidney performance.",
                "Low creatinine usually not concerning.",
                "High creatinine suggests reduced kidney function.",
                "Consult a doctor for elevated values.",
            ],
            all(0.6, 1.3),
        ),
        row(
            "Uric Acid",
            &["uric acid", "uricacid"],
            "3.5-7.2 mg/dL",
            [
                "Uric acid is a waste product from purine metabolism.",
                "Low values usually not concerning.",
                "High levels may cause gout.",
                "Limit purine-rich foods if high; consult physician.",
            ],
            all(3.5, 7.2),
        ),
        // ── Electrolytes ───────────────────────────────────────────
        row(
            "Sodium",
            &["sodium", "na"],
            "135-145 mmol/L",
            [
                "Sodium helps control water balance and nerve function.",
                "Low sodium (hyponatremia) can cause confusion and seizures.",
                "High sodium suggests dehydration.",
                "Correct fluid balance under medical advice.",
            ],
            all(135.0, 145.0),
        ),
        row(
            "Potassium",
            &["potassium", "k"],
            "3.5-5.0 mmol/L",
            [
                "Potassium is vital for heart and muscle function.",
                "Low potassium can cause weakness or irregular heartbeat.",
                "High potassium can endanger heart rhythm.",
                "Follow medical guidance; dietary changes may help.",
            ],
            all(3.5, 5.0),
        ),
        row(
            "Chloride",
            &["chloride", "cl"],
            "96-106 mmol/L",
            [
                "Chloride helps maintain acid-base balance.",
                "Low chloride can occur with vomiting or dehydration.",
                "High chloride may indicate kidney/adrenal issues.",
                "Consult your clinician for abnormal values.",
            ],
            all(96.0, 106.0),
        ),
        // ── Liver function ─────────────────────────────────────────
        row(
            "ALT (SGPT)",
            &["alt", "sgpt"],
            "7-56 U/L",
            [
                "ALT is a liver enzyme; elevated levels may indicate liver damage.",
                "Low levels are normal.",
                "High ALT suggests liver injury or inflammation.",
                "Avoid alcohol and discuss further evaluation.",
            ],
            all(7.0, 56.0),
        ),
        row(
            "AST (SGOT)",
            &["ast", "sgot"],
            "10-40 U/L",
            [
                "AST is a liver/muscle enzyme.",
                "Low levels are normal.",
                "High AST can indicate liver or muscle damage.",
                "Follow up with healthcare provider.",
            ],
            all(10.0, 40.0),
        ),
        row(
            "Alkaline Phosphatase (ALP)",
            &["alp", "alkaline phosphatase"],
            "44-147 IU/L",
            [
                "ALP relates to liver and bone health.",
                "Low ALP usually not concerning.",
                "High ALP may indicate liver/bone disease.",
                "Consult a doctor when elevated.",
            ],
            all(44.0, 147.0),
        ),
        row(
            "Bilirubin (Total)",
            &["bilirubin", "bilirubin total", "total bilirubin"],
            "0.1-1.2 mg/dL",
            [
                "Bilirubin is produced by breakdown of red blood cells.",
                "Low bilirubin is normal.",
                "High bilirubin causes jaundice; check liver function.",
                "Seek medical evaluation if elevated.",
            ],
            all(0.1, 1.2),
        ),
        row(
            "Albumin",
            &["albumin"],
            "3.4-5.4 g/dL",
            [
                "Albumin is a protein made by the liver.",
                "Low albumin can indicate liver disease or malnutrition.",
                "High albumin is uncommon (dehydration).",
                "Assess nutrition and liver health with provider.",
            ],
            all(3.4, 5.4),
        ),
        // ── Thyroid ────────────────────────────────────────────────
        row(
            "TSH",
            &["tsh"],
            "0.4-4.0 mIU/L",
            [
                "TSH controls thyroid function.",
                "Low TSH may indicate hyperthyroidism.",
                "High TSH may indicate hypothyroidism.",
                "See an endocrinologist for abnormal results.",
            ],
            all(0.4, 4.0),
        ),
        row(
            "T3",
            &["t3"],
            "80-200 ng/dL",
            [
                "T3 is an active thyroid hormone.",
                "Low T3 may indicate hypothyroid state.",
                "High T3 may indicate hyperthyroidism.",
                "Discuss with your doctor.",
            ],
            // Units vary between labs; approximate.
            all(80.0, 200.0),
        ),
        row(
            "T4",
            &["t4"],
            "4.6-12.0 µg/dL",
            [
                "T4 is the main thyroid hormone.",
                "Low T4 may indicate hypothyroidism.",
                "High T4 may indicate hyperthyroidism.",
                "Follow up for thyroid testing if abnormal.",
            ],
            all(4.6, 12.0),
        ),
        // ── Diabetes markers ───────────────────────────────────────
        row(
            "Glucose (Fasting)",
            &[
                "glucose fasting",
                "fasting glucose",
                "glucose (fasting)",
                "fbs",
                "fasting blood sugar",
            ],
            "70-100 mg/dL",
            [
                "Fasting blood glucose measures sugar after not eating.",
                "Low glucose can cause dizziness and confusion.",
                "High fasting glucose may indicate diabetes/prediabetes.",
                "Monitor diet, exercise, and follow medical advice.",
            ],
            all(70.0, 100.0),
        ),
        row(
            "Glucose (PP)",
            &["pp glucose", "postprandial glucose", "ppbs", "pp"],
            "<140 mg/dL (2 hrs after meal)",
            [
                "Postprandial glucose measures blood sugar after eating.",
                "Low values rarely concerning.",
                "High PP glucose may indicate impaired glucose handling.",
                "Consult provider about diabetes testing.",
            ],
            all(0.0, 140.0),
        ),
        row(
            "HbA1c",
            &["hba1c", "a1c"],
            "<5.7 %",
            [
                "HbA1c indicates average blood sugar over ~3 months.",
                "Low HbA1c is uncommon and usually fine.",
                "High HbA1c indicates prediabetes or diabetes.",
                "Lifestyle changes and medical care advised when high.",
            ],
            all(0.0, 5.7),
        ),
        // ── Vitamins ───────────────────────────────────────────────
        row(
            "Vitamin D",
            &["vitamin d", "vit d", "25-ohd"],
            "20-50 ng/mL",
            [
                "Vitamin D aids bone health and immunity.",
                "Low Vitamin D can cause bone weakness.",
                "High Vitamin D is rare but can be toxic.",
                "Supplementation if deficient as guided by clinician.",
            ],
            all(20.0, 50.0),
        ),
        row(
            "Vitamin B12",
            &["vitamin b12", "b12"],
            "200-900 pg/mL",
            [
                "B12 is important for nerve health and blood formation.",
                "Low B12 can cause anemia and neuropathy.",
                "High B12 usually not harmful but investigate causes.",
                "Supplement if deficient.",
            ],
            all(200.0, 900.0),
        ),
        // ── Inflammatory markers ───────────────────────────────────
        row(
            "CRP",
            &["crp"],
            "<3 mg/L",
            [
                "C-reactive protein, a marker of inflammation.",
                "Low CRP is normal.",
                "High CRP indicates inflammation or infection.",
                "Investigate source of inflammation.",
            ],
            all(0.0, 3.0),
        ),
        row(
            "ESR",
            &["esr"],
            "0-15 mm/hr (men), 0-20 mm/hr (women)",
            [
                "Erythrocyte sedimentation rate, an inflammation marker.",
                "Low ESR is not a concern.",
                "High ESR suggests inflammation.",
                "Correlate clinically.",
            ],
            (Some((0.0, 15.0)), Some((0.0, 20.0)), Some((0.0, 20.0))),
        ),
        // ── Hormones ───────────────────────────────────────────────
        row(
            "PSA",
            &["psa"],
            "<4.0 ng/mL",
            [
                "Prostate-specific antigen (male).",
                "Low PSA is normal.",
                "High PSA may suggest prostate disease.",
                "Urology referral if elevated.",
            ],
            (Some((0.0, 4.0)), None, None),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_every_panel_parameter() {
        assert_eq!(definitions().len(), 37);
    }

    #[test]
    fn aliases_are_lowercase() {
        for def in definitions() {
            for alias in &def.aliases {
                assert_eq!(alias, &alias.to_lowercase(), "{} alias {alias}", def.name);
            }
        }
    }

    #[test]
    fn every_parameter_has_a_range() {
        for def in definitions() {
            assert!(!def.thresholds.is_empty(), "{} has no range", def.name);
        }
    }

    #[test]
    fn psa_is_male_only() {
        let psa = definitions().into_iter().find(|d| d.name == "PSA").unwrap();
        assert_eq!(psa.thresholds.len(), 1);
        assert!(psa.thresholds.contains_key("male"));
    }
}
