//! Precomputed roster aggregates for the eligibility judge.

use rust_decimal::Decimal;

use crate::config::RuleScope;
use crate::models::{PersonnelType, Roster, RosterMember};

use super::qualifications::QualificationClass;

/// A read-only view over a roster exposing the aggregates eligibility rules
/// are judged against.
///
/// Every accessor is a pure function of the roster, so judging the same
/// roster twice yields identical aggregates.
#[derive(Debug, Clone, Copy)]
pub struct RosterProfile<'a> {
    members: &'a [RosterMember],
}

impl<'a> RosterProfile<'a> {
    /// Creates a profile over the given roster.
    pub fn new(roster: &'a Roster) -> Self {
        Self {
            members: roster.members(),
        }
    }

    /// Iterates the members a rule scope aggregates over.
    pub fn in_scope(&self, scope: RuleScope) -> impl Iterator<Item = &'a RosterMember> + '_ {
        self.members.iter().filter(move |m| match scope {
            RuleScope::AllStaff => true,
            RuleScope::AdditionStaff => m.record.personnel_type == PersonnelType::Addition,
        })
    }

    /// Total number of roster members.
    pub fn staff_count(&self) -> usize {
        self.members.len()
    }

    /// Number of fulltime roster members.
    pub fn fulltime_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.record.is_fulltime())
            .count()
    }

    /// Fulltime share of the whole roster, as a percentage. An empty roster
    /// yields 0.
    pub fn fulltime_rate(&self) -> Decimal {
        percentage(self.fulltime_count(), self.staff_count())
    }

    /// Fulltime members holding a qualification of the given class.
    pub fn fulltime_holding(
        &self,
        class: QualificationClass,
    ) -> impl Iterator<Item = &'a RosterMember> + '_ {
        self.members
            .iter()
            .filter(move |m| m.record.is_fulltime() && class.matches(&m.record.qualifications))
    }

    /// The share of fulltime `within`-class holders who also hold a
    /// `qualification`-class qualification, as a percentage. An empty
    /// denominator yields 0.
    pub fn qualified_share(
        &self,
        qualification: QualificationClass,
        within: QualificationClass,
    ) -> Decimal {
        let denominator = self.fulltime_holding(within).count();
        let numerator = self
            .fulltime_holding(within)
            .filter(|m| qualification.matches(&m.record.qualifications))
            .count();
        percentage(numerator, denominator)
    }

    /// The share of fulltime `within`-class holders with at least
    /// `min_years` of experience, as a percentage. An empty denominator
    /// yields 0.
    pub fn tenure_share(&self, within: QualificationClass, min_years: u32) -> Decimal {
        let denominator = self.fulltime_holding(within).count();
        let numerator = self
            .fulltime_holding(within)
            .filter(|m| m.record.years_of_experience >= min_years)
            .count();
        percentage(numerator, denominator)
    }
}

fn percentage(numerator: usize, denominator: usize) -> Decimal {
    if denominator == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(numerator as u64) * Decimal::ONE_HUNDRED / Decimal::from(denominator as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FacilitySnapshot, StaffRecord, WorkStyle};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn member(
        id: &str,
        personnel_type: PersonnelType,
        work_style: WorkStyle,
        qualifications: &[&str],
        years: u32,
    ) -> StaffRecord {
        StaffRecord {
            id: id.to_string(),
            name: format!("Staff {}", id),
            personnel_type,
            work_style,
            contracted_weekly_hours: dec("20"),
            is_manager: false,
            is_service_manager: false,
            qualifications: qualifications.iter().map(|q| q.to_string()).collect(),
            years_of_experience: years,
        }
    }

    fn roster(staff: Vec<StaffRecord>) -> Roster {
        let facility = FacilitySnapshot {
            standard_weekly_hours: dec("40"),
            capacity: 10,
            region_grade: 6,
        };
        Roster::build(staff, &facility).unwrap()
    }

    #[test]
    fn test_in_scope_addition_staff_filters_standard() {
        let r = roster(vec![
            member(
                "s1",
                PersonnelType::Standard,
                WorkStyle::Fulltime,
                &["nursery_teacher"],
                3,
            ),
            member("s2", PersonnelType::Addition, WorkStyle::Parttime, &[], 0),
        ]);
        let profile = RosterProfile::new(&r);

        assert_eq!(profile.in_scope(RuleScope::AllStaff).count(), 2);
        assert_eq!(profile.in_scope(RuleScope::AdditionStaff).count(), 1);
    }

    #[test]
    fn test_fulltime_rate_over_whole_roster() {
        let r = roster(vec![
            member("s1", PersonnelType::Standard, WorkStyle::Fulltime, &[], 0),
            member("s2", PersonnelType::Standard, WorkStyle::Fulltime, &[], 0),
            member("s3", PersonnelType::Standard, WorkStyle::Fulltime, &[], 0),
            member("s4", PersonnelType::Standard, WorkStyle::Parttime, &[], 0),
        ]);
        let profile = RosterProfile::new(&r);

        assert_eq!(profile.fulltime_rate(), dec("75"));
    }

    #[test]
    fn test_qualified_share_counts_welfare_among_instructors() {
        let r = roster(vec![
            member(
                "s1",
                PersonnelType::Standard,
                WorkStyle::Fulltime,
                &["nursery_teacher", "social_worker"],
                5,
            ),
            member(
                "s2",
                PersonnelType::Standard,
                WorkStyle::Fulltime,
                &["child_instructor"],
                2,
            ),
            // Part-time holders are outside the denominator.
            member(
                "s3",
                PersonnelType::Standard,
                WorkStyle::Parttime,
                &["social_worker"],
                8,
            ),
        ]);
        let profile = RosterProfile::new(&r);

        assert_eq!(
            profile.qualified_share(
                QualificationClass::WelfareProfessional,
                QualificationClass::ChildInstructor,
            ),
            dec("50")
        );
    }

    #[test]
    fn test_tenure_share_applies_experience_floor() {
        let r = roster(vec![
            member(
                "s1",
                PersonnelType::Standard,
                WorkStyle::Fulltime,
                &["nursery_teacher"],
                4,
            ),
            member(
                "s2",
                PersonnelType::Standard,
                WorkStyle::Fulltime,
                &["child_instructor"],
                1,
            ),
        ]);
        let profile = RosterProfile::new(&r);

        assert_eq!(
            profile.tenure_share(QualificationClass::ChildInstructor, 3),
            dec("50")
        );
    }

    #[test]
    fn test_empty_roster_rates_are_zero() {
        let r = roster(vec![]);
        let profile = RosterProfile::new(&r);

        assert_eq!(profile.fulltime_rate(), Decimal::ZERO);
        assert_eq!(
            profile.qualified_share(
                QualificationClass::WelfareProfessional,
                QualificationClass::ChildInstructor,
            ),
            Decimal::ZERO
        );
        assert_eq!(
            profile.tenure_share(QualificationClass::ChildInstructor, 3),
            Decimal::ZERO
        );
    }
}
