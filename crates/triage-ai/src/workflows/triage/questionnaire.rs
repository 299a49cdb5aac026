use super::domain::{
    AnswerKind, AnswerOption, Diagnosis, DiagnosisGroup, InterviewSection, Question,
};

/// Immutable interview content: the ordered question bank and the diagnosis
/// catalog whose declaration order doubles as the ranking tiebreak.
#[derive(Debug, Clone)]
pub struct QuestionnaireBlueprint {
    questions: Vec<Question>,
    diagnoses: Vec<Diagnosis>,
}

impl QuestionnaireBlueprint {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
            diagnoses: standard_diagnoses(),
        }
    }

    pub fn new(questions: Vec<Question>, diagnoses: Vec<Diagnosis>) -> Self {
        Self {
            questions,
            diagnoses,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions_for_section(&self, section: InterviewSection) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.section == section)
            .collect()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn diagnoses(&self) -> &[Diagnosis] {
        &self.diagnoses
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            key: "age",
            section: InterviewSection::Demographics,
            prompt: "How old is the patient?",
            kind: AnswerKind::FreeText,
            options: Vec::new(),
        },
        Question {
            key: "sex",
            section: InterviewSection::Demographics,
            prompt: "What is the patient's sex?",
            kind: AnswerKind::SingleChoice,
            options: vec![
                AnswerOption {
                    value: "male",
                    label: "Male",
                },
                AnswerOption {
                    value: "female",
                    label: "Female",
                },
            ],
        },
        Question {
            key: "bleeding_site",
            section: InterviewSection::BleedingHistory,
            prompt: "Where is the predominant bleeding?",
            kind: AnswerKind::SingleChoice,
            options: vec![
                AnswerOption {
                    value: "joint",
                    label: "Joints (hemarthrosis)",
                },
                AnswerOption {
                    value: "muscle",
                    label: "Deep muscle",
                },
                AnswerOption {
                    value: "mucosal",
                    label: "Mucosal (nose, gums, menorrhagia)",
                },
                AnswerOption {
                    value: "skin",
                    label: "Skin (petechiae, easy bruising)",
                },
                AnswerOption {
                    value: "post_procedure",
                    label: "After surgery or dental work",
                },
            ],
        },
        Question {
            key: "onset",
            section: InterviewSection::BleedingHistory,
            prompt: "When did the bleeding tendency begin?",
            kind: AnswerKind::SingleChoice,
            options: vec![
                AnswerOption {
                    value: "lifelong",
                    label: "Lifelong / since childhood",
                },
                AnswerOption {
                    value: "recent",
                    label: "Recent onset",
                },
            ],
        },
        Question {
            key: "family_history",
            section: InterviewSection::Background,
            prompt: "Is there a family history of abnormal bleeding?",
            kind: AnswerKind::SingleChoice,
            options: vec![
                AnswerOption {
                    value: "maternal_male_relatives",
                    label: "Affected males on the maternal side",
                },
                AnswerOption {
                    value: "other_relatives",
                    label: "Other affected relatives",
                },
                AnswerOption {
                    value: "none",
                    label: "No family history",
                },
            ],
        },
        Question {
            key: "medications",
            section: InterviewSection::Background,
            prompt: "Is the patient on medication that affects hemostasis?",
            kind: AnswerKind::SingleChoice,
            options: vec![
                AnswerOption {
                    value: "anticoagulant",
                    label: "Anticoagulant (warfarin, DOAC)",
                },
                AnswerOption {
                    value: "antiplatelet",
                    label: "Antiplatelet (aspirin, clopidogrel)",
                },
                AnswerOption {
                    value: "none",
                    label: "No relevant medication",
                },
            ],
        },
        Question {
            key: "liver_illness",
            section: InterviewSection::Background,
            prompt: "Is there known liver disease or heavy alcohol use?",
            kind: AnswerKind::SingleChoice,
            options: vec![
                AnswerOption {
                    value: "yes",
                    label: "Yes",
                },
                AnswerOption {
                    value: "no",
                    label: "No",
                },
            ],
        },
        Question {
            key: "platelet_count",
            section: InterviewSection::Workup,
            prompt: "What is the platelet count (x10^9/L)?",
            kind: AnswerKind::FreeText,
            options: Vec::new(),
        },
    ]
}

fn standard_diagnoses() -> Vec<Diagnosis> {
    vec![
        Diagnosis {
            key: "hemophilia_a",
            group: DiagnosisGroup::Coagulation,
            name: "Hemophilia A",
            baseline: 2,
            features: vec![
                "X-linked recessive inheritance",
                "Factor VIII deficiency",
                "Hemarthrosis and deep muscle haematomas",
                "Isolated APTT prolongation",
            ],
            investigations: vec![
                "APTT with mixing studies",
                "Factor VIII assay",
                "Genetic counselling referral",
            ],
        },
        Diagnosis {
            key: "hemophilia_b",
            group: DiagnosisGroup::Coagulation,
            name: "Hemophilia B",
            baseline: 1,
            features: vec![
                "X-linked recessive inheritance",
                "Factor IX deficiency",
                "Clinically indistinguishable from hemophilia A",
            ],
            investigations: vec!["APTT with mixing studies", "Factor IX assay"],
        },
        Diagnosis {
            key: "von_willebrand",
            group: DiagnosisGroup::Coagulation,
            name: "Von Willebrand disease",
            baseline: 2,
            features: vec![
                "Commonest inherited bleeding disorder",
                "Mucocutaneous bleeding pattern",
                "Autosomal inheritance, affects both sexes",
            ],
            investigations: vec![
                "VWF antigen",
                "Ristocetin cofactor activity",
                "Factor VIII level",
            ],
        },
        Diagnosis {
            key: "itp",
            group: DiagnosisGroup::Platelet,
            name: "Immune thrombocytopenic purpura",
            baseline: 2,
            features: vec![
                "Isolated thrombocytopenia",
                "Petechiae and mucosal bleeding",
                "Often follows viral illness in children",
            ],
            investigations: vec![
                "Full blood count and film",
                "Screen for secondary causes",
            ],
        },
        Diagnosis {
            key: "platelet_function_disorder",
            group: DiagnosisGroup::Platelet,
            name: "Platelet function disorder",
            baseline: 1,
            features: vec![
                "Normal count with impaired aggregation",
                "Mucocutaneous bleeding pattern",
            ],
            investigations: vec!["Platelet aggregometry", "PFA-100 closure time"],
        },
        Diagnosis {
            key: "vitamin_k_deficiency",
            group: DiagnosisGroup::Systemic,
            name: "Vitamin K deficiency",
            baseline: 1,
            features: vec![
                "Impaired synthesis of factors II, VII, IX, X",
                "Prolonged PT correcting with vitamin K",
            ],
            investigations: vec!["PT/INR", "Therapeutic trial of vitamin K"],
        },
        Diagnosis {
            key: "liver_disease",
            group: DiagnosisGroup::Systemic,
            name: "Liver disease coagulopathy",
            baseline: 1,
            features: vec![
                "Reduced synthesis of most clotting factors",
                "Often combined with thrombocytopenia",
            ],
            investigations: vec!["Liver function tests", "PT/INR", "Fibrinogen"],
        },
        Diagnosis {
            key: "drug_induced",
            group: DiagnosisGroup::Systemic,
            name: "Drug-induced bleeding",
            baseline: 1,
            features: vec![
                "Temporal link to anticoagulant or antiplatelet exposure",
                "Resolves on withdrawal",
            ],
            investigations: vec!["Medication review", "Drug-specific assays"],
        },
    ]
}
