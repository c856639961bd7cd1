//! Named qualification sets used by eligibility rules.
//!
//! Catalog rules never enumerate individual qualification codes; they name
//! one of the classes defined here, so a regulatory change to a set is a
//! single edit.

use serde::{Deserialize, Serialize};

/// A named set of qualification codes recognized by eligibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationClass {
    /// Child instructors and equivalent direct-support qualifications.
    ChildInstructor,
    /// Therapy and psychology specialists (PT/OT/ST, psychologists,
    /// vision trainers).
    Specialist,
    /// Welfare profession qualifications (social workers, care workers,
    /// psychiatric welfare workers, psychologists).
    WelfareProfessional,
    /// The core childcare qualifications (nursery teachers and child
    /// instructors), used where experience can substitute for a specialist
    /// qualification.
    ChildcareCore,
}

impl QualificationClass {
    /// The qualification codes belonging to this class.
    pub fn codes(self) -> &'static [&'static str] {
        match self {
            QualificationClass::ChildInstructor => &[
                "nursery_teacher",
                "child_instructor",
                "pt",
                "ot",
                "st",
                "psychologist",
                "social_worker",
                "care_worker",
                "psych_welfare_worker",
            ],
            QualificationClass::Specialist => {
                &["pt", "ot", "st", "psychologist", "vision_trainer"]
            }
            QualificationClass::WelfareProfessional => &[
                "social_worker",
                "care_worker",
                "psych_welfare_worker",
                "psychologist",
            ],
            QualificationClass::ChildcareCore => &["nursery_teacher", "child_instructor"],
        }
    }

    /// Returns true if any of the held qualification codes belongs to this
    /// class.
    ///
    /// # Examples
    ///
    /// ```
    /// use reimbursement_engine::calculation::QualificationClass;
    ///
    /// let held = vec!["pt".to_string()];
    /// assert!(QualificationClass::Specialist.matches(&held));
    /// assert!(QualificationClass::ChildInstructor.matches(&held));
    /// assert!(!QualificationClass::WelfareProfessional.matches(&held));
    /// ```
    pub fn matches(self, held: &[String]) -> bool {
        self.codes().iter().any(|code| held.iter().any(|h| h == code))
    }

    /// A display label for requirement and reason strings.
    pub fn label(self) -> &'static str {
        match self {
            QualificationClass::ChildInstructor => "child instructor",
            QualificationClass::Specialist => "specialist",
            QualificationClass::WelfareProfessional => "welfare professional",
            QualificationClass::ChildcareCore => "nursery teacher or child instructor",
        }
    }
}
