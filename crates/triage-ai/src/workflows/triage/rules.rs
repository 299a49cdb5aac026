use super::domain::AnswerValue;

/// Single additive adjustment produced by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDelta {
    pub diagnosis: &'static str,
    pub delta: i32,
}

pub type ParseFn = fn(&str) -> AnswerValue;
pub type ReasonFn = fn(&AnswerValue) -> Option<String>;
pub type ScoreFn = fn(&AnswerValue) -> Vec<ScoreDelta>;

/// Registered behavior for one question. All functions are pure; `affects`
/// declares every diagnosis key the scorer may emit so the table can be
/// validated against the catalog before any answer is processed.
#[derive(Debug, Clone, Copy)]
pub struct QuestionRules {
    pub question: &'static str,
    pub parser: Option<ParseFn>,
    pub reasoner: Option<ReasonFn>,
    pub scorer: Option<ScoreFn>,
    pub affects: &'static [&'static str],
}

/// Declarative mapping from question keys to their registered rule functions.
/// A question with no entry has no parse, reasoning, or score effect.
#[derive(Debug, Clone)]
pub struct RuleTable {
    entries: Vec<QuestionRules>,
}

impl RuleTable {
    pub fn standard() -> Self {
        Self {
            entries: standard_rules(),
        }
    }

    pub fn new(entries: Vec<QuestionRules>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[QuestionRules] {
        &self.entries
    }

    pub fn rules_for(&self, question: &str) -> Option<&QuestionRules> {
        self.entries
            .iter()
            .find(|entry| entry.question == question)
    }
}

fn standard_rules() -> Vec<QuestionRules> {
    vec![
        QuestionRules {
            question: "age",
            parser: Some(parse_age),
            reasoner: Some(reason_age),
            scorer: Some(score_age),
            affects: &["hemophilia_a", "hemophilia_b", "itp", "liver_disease"],
        },
        QuestionRules {
            question: "sex",
            parser: None,
            reasoner: Some(reason_sex),
            scorer: Some(score_sex),
            affects: &["hemophilia_a", "hemophilia_b", "von_willebrand", "itp"],
        },
        QuestionRules {
            question: "bleeding_site",
            parser: None,
            reasoner: Some(reason_bleeding_site),
            scorer: Some(score_bleeding_site),
            affects: &[
                "hemophilia_a",
                "hemophilia_b",
                "von_willebrand",
                "itp",
                "platelet_function_disorder",
                "vitamin_k_deficiency",
            ],
        },
        QuestionRules {
            question: "onset",
            parser: None,
            reasoner: Some(reason_onset),
            scorer: Some(score_onset),
            affects: &[
                "hemophilia_a",
                "hemophilia_b",
                "von_willebrand",
                "platelet_function_disorder",
                "itp",
                "liver_disease",
                "drug_induced",
            ],
        },
        QuestionRules {
            question: "family_history",
            parser: None,
            reasoner: Some(reason_family_history),
            scorer: Some(score_family_history),
            affects: &["hemophilia_a", "hemophilia_b", "von_willebrand", "itp"],
        },
        QuestionRules {
            question: "medications",
            parser: None,
            reasoner: Some(reason_medications),
            scorer: Some(score_medications),
            affects: &["drug_induced", "platelet_function_disorder"],
        },
        QuestionRules {
            question: "liver_illness",
            parser: None,
            reasoner: Some(reason_liver_illness),
            scorer: Some(score_liver_illness),
            affects: &["liver_disease", "vitamin_k_deficiency"],
        },
        QuestionRules {
            question: "platelet_count",
            parser: Some(parse_platelet_count),
            reasoner: Some(reason_platelet_count),
            scorer: Some(score_platelet_count),
            affects: &[
                "itp",
                "liver_disease",
                "hemophilia_a",
                "hemophilia_b",
                "von_willebrand",
                "platelet_function_disorder",
            ],
        },
    ]
}

pub(crate) fn parse_age(raw: &str) -> AnswerValue {
    match raw.trim().parse::<i64>() {
        Ok(years) if (0..=130).contains(&years) => AnswerValue::Number(years),
        _ => AnswerValue::Unknown,
    }
}

fn reason_age(value: &AnswerValue) -> Option<String> {
    match value {
        AnswerValue::Number(years) if *years < 18 => Some(format!(
            "Onset at {years} years favours an inherited bleeding disorder."
        )),
        AnswerValue::Number(years) if *years >= 50 => Some(format!(
            "First presentation at {years} years points towards an acquired cause."
        )),
        AnswerValue::Number(_) => None,
        _ => Some("Age unclear; onset-based weighting was skipped.".to_string()),
    }
}

pub(crate) fn score_age(value: &AnswerValue) -> Vec<ScoreDelta> {
    match value {
        AnswerValue::Number(years) if *years < 18 => vec![
            ScoreDelta {
                diagnosis: "hemophilia_a",
                delta: 3,
            },
            ScoreDelta {
                diagnosis: "hemophilia_b",
                delta: 3,
            },
            ScoreDelta {
                diagnosis: "itp",
                delta: 2,
            },
        ],
        AnswerValue::Number(years) if *years >= 50 => vec![
            ScoreDelta {
                diagnosis: "liver_disease",
                delta: 2,
            },
            ScoreDelta {
                diagnosis: "itp",
                delta: 1,
            },
        ],
        _ => Vec::new(),
    }
}

fn reason_sex(value: &AnswerValue) -> Option<String> {
    match value {
        AnswerValue::Choice("male") => {
            Some("Male sex is consistent with an X-linked factor deficiency.".to_string())
        }
        AnswerValue::Choice("female") => Some(
            "Female sex makes classical hemophilia unlikely without a telling family history."
                .to_string(),
        ),
        _ => None,
    }
}

fn score_sex(value: &AnswerValue) -> Vec<ScoreDelta> {
    match value {
        AnswerValue::Choice("male") => vec![
            ScoreDelta {
                diagnosis: "hemophilia_a",
                delta: 2,
            },
            ScoreDelta {
                diagnosis: "hemophilia_b",
                delta: 2,
            },
        ],
        AnswerValue::Choice("female") => vec![
            ScoreDelta {
                diagnosis: "von_willebrand",
                delta: 1,
            },
            ScoreDelta {
                diagnosis: "itp",
                delta: 1,
            },
        ],
        _ => Vec::new(),
    }
}

fn reason_bleeding_site(value: &AnswerValue) -> Option<String> {
    let text = match value {
        AnswerValue::Choice("joint") => {
            "Hemarthrosis is the hallmark of severe factor VIII or IX deficiency."
        }
        AnswerValue::Choice("muscle") => {
            "Deep muscle haematomas suggest a coagulation factor deficiency."
        }
        AnswerValue::Choice("mucosal") => {
            "Mucocutaneous bleeding points to a platelet-type defect or von Willebrand disease."
        }
        AnswerValue::Choice("skin") => {
            "Petechiae and easy bruising suggest a platelet problem."
        }
        AnswerValue::Choice("post_procedure") => {
            "Bleeding after procedures can unmask mild inherited or acquired defects."
        }
        _ => return None,
    };
    Some(text.to_string())
}

fn score_bleeding_site(value: &AnswerValue) -> Vec<ScoreDelta> {
    match value {
        AnswerValue::Choice("joint") => vec![
            ScoreDelta {
                diagnosis: "hemophilia_a",
                delta: 3,
            },
            ScoreDelta {
                diagnosis: "hemophilia_b",
                delta: 3,
            },
        ],
        AnswerValue::Choice("muscle") => vec![
            ScoreDelta {
                diagnosis: "hemophilia_a",
                delta: 2,
            },
            ScoreDelta {
                diagnosis: "hemophilia_b",
                delta: 2,
            },
        ],
        AnswerValue::Choice("mucosal") => vec![
            ScoreDelta {
                diagnosis: "von_willebrand",
                delta: 3,
            },
            ScoreDelta {
                diagnosis: "itp",
                delta: 2,
            },
            ScoreDelta {
                diagnosis: "platelet_function_disorder",
                delta: 2,
            },
        ],
        AnswerValue::Choice("skin") => vec![
            ScoreDelta {
                diagnosis: "itp",
                delta: 2,
            },
            ScoreDelta {
                diagnosis: "platelet_function_disorder",
                delta: 1,
            },
        ],
        AnswerValue::Choice("post_procedure") => vec![
            ScoreDelta {
                diagnosis: "von_willebrand",
                delta: 2,
            },
            ScoreDelta {
                diagnosis: "hemophilia_a",
                delta: 1,
            },
            ScoreDelta {
                diagnosis: "hemophilia_b",
                delta: 1,
            },
            ScoreDelta {
                diagnosis: "vitamin_k_deficiency",
                delta: 1,
            },
        ],
        _ => Vec::new(),
    }
}

fn reason_onset(value: &AnswerValue) -> Option<String> {
    match value {
        AnswerValue::Choice("lifelong") => {
            Some("A lifelong bleeding tendency favours an inherited disorder.".to_string())
        }
        AnswerValue::Choice("recent") => {
            Some("Recent onset suggests an acquired cause.".to_string())
        }
        _ => None,
    }
}

fn score_onset(value: &AnswerValue) -> Vec<ScoreDelta> {
    match value {
        AnswerValue::Choice("lifelong") => vec![
            ScoreDelta {
                diagnosis: "hemophilia_a",
                delta: 2,
            },
            ScoreDelta {
                diagnosis: "hemophilia_b",
                delta: 2,
            },
            ScoreDelta {
                diagnosis: "von_willebrand",
                delta: 2,
            },
            ScoreDelta {
                diagnosis: "platelet_function_disorder",
                delta: 1,
            },
        ],
        AnswerValue::Choice("recent") => vec![
            ScoreDelta {
                diagnosis: "itp",
                delta: 2,
            },
            ScoreDelta {
                diagnosis: "liver_disease",
                delta: 1,
            },
            ScoreDelta {
                diagnosis: "drug_induced",
                delta: 1,
            },
        ],
        _ => Vec::new(),
    }
}

fn reason_family_history(value: &AnswerValue) -> Option<String> {
    match value {
        AnswerValue::Choice("maternal_male_relatives") => Some(
            "Affected maternal male relatives fit an X-linked inheritance pattern.".to_string(),
        ),
        AnswerValue::Choice("other_relatives") => Some(
            "A bleeding family history outside the maternal line suggests autosomal disease."
                .to_string(),
        ),
        _ => None,
    }
}

fn score_family_history(value: &AnswerValue) -> Vec<ScoreDelta> {
    match value {
        AnswerValue::Choice("maternal_male_relatives") => vec![
            ScoreDelta {
                diagnosis: "hemophilia_a",
                delta: 3,
            },
            ScoreDelta {
                diagnosis: "hemophilia_b",
                delta: 3,
            },
        ],
        AnswerValue::Choice("other_relatives") => vec![ScoreDelta {
            diagnosis: "von_willebrand",
            delta: 2,
        }],
        AnswerValue::Choice("none") => vec![ScoreDelta {
            diagnosis: "itp",
            delta: 1,
        }],
        _ => Vec::new(),
    }
}

fn reason_medications(value: &AnswerValue) -> Option<String> {
    match value {
        AnswerValue::Choice("anticoagulant") => {
            Some("Anticoagulant exposure can fully account for new bleeding.".to_string())
        }
        AnswerValue::Choice("antiplatelet") => {
            Some("Antiplatelet agents impair primary hemostasis.".to_string())
        }
        _ => None,
    }
}

fn score_medications(value: &AnswerValue) -> Vec<ScoreDelta> {
    match value {
        AnswerValue::Choice("anticoagulant") => vec![ScoreDelta {
            diagnosis: "drug_induced",
            delta: 3,
        }],
        AnswerValue::Choice("antiplatelet") => vec![
            ScoreDelta {
                diagnosis: "drug_induced",
                delta: 2,
            },
            ScoreDelta {
                diagnosis: "platelet_function_disorder",
                delta: 1,
            },
        ],
        _ => Vec::new(),
    }
}

fn reason_liver_illness(value: &AnswerValue) -> Option<String> {
    match value {
        AnswerValue::Choice("yes") => {
            Some("Liver disease impairs synthesis of most clotting factors.".to_string())
        }
        _ => None,
    }
}

fn score_liver_illness(value: &AnswerValue) -> Vec<ScoreDelta> {
    match value {
        AnswerValue::Choice("yes") => vec![
            ScoreDelta {
                diagnosis: "liver_disease",
                delta: 3,
            },
            ScoreDelta {
                diagnosis: "vitamin_k_deficiency",
                delta: 1,
            },
        ],
        _ => Vec::new(),
    }
}

pub(crate) fn parse_platelet_count(raw: &str) -> AnswerValue {
    match raw.trim().parse::<i64>() {
        Ok(count) if (0..=2000).contains(&count) => AnswerValue::Number(count),
        _ => AnswerValue::Unknown,
    }
}

fn reason_platelet_count(value: &AnswerValue) -> Option<String> {
    match value {
        AnswerValue::Number(count) if *count < 50 => Some(format!(
            "Marked thrombocytopenia ({count}) explains the bleeding by itself."
        )),
        AnswerValue::Number(count) if *count < 150 => {
            Some(format!("Platelet count of {count} is moderately reduced."))
        }
        AnswerValue::Number(count) => Some(format!(
            "Normal platelet count ({count}) shifts suspicion to the coagulation cascade."
        )),
        _ => Some("Platelet count unavailable; count-based weighting was skipped.".to_string()),
    }
}

fn score_platelet_count(value: &AnswerValue) -> Vec<ScoreDelta> {
    match value {
        AnswerValue::Number(count) if *count < 50 => vec![ScoreDelta {
            diagnosis: "itp",
            delta: 3,
        }],
        AnswerValue::Number(count) if *count < 150 => vec![
            ScoreDelta {
                diagnosis: "itp",
                delta: 2,
            },
            ScoreDelta {
                diagnosis: "liver_disease",
                delta: 1,
            },
        ],
        AnswerValue::Number(_) => vec![
            ScoreDelta {
                diagnosis: "hemophilia_a",
                delta: 1,
            },
            ScoreDelta {
                diagnosis: "hemophilia_b",
                delta: 1,
            },
            ScoreDelta {
                diagnosis: "von_willebrand",
                delta: 1,
            },
            ScoreDelta {
                diagnosis: "platelet_function_disorder",
                delta: 1,
            },
        ],
        _ => Vec::new(),
    }
}
