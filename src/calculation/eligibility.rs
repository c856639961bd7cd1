//! The addition eligibility judge.
//!
//! Evaluates every catalog definition against a validated roster, in
//! declaration order, producing one [`AdditionJudgment`] per definition. The
//! judge is pure and deterministic: identical input yields a byte-identical
//! judgment list, with no clock or randomness involved.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{
    AdditionCatalog, AdditionDefinition, EligibilityRule, ExperiencedAlternative, RatioCondition,
    RuleScope,
};
use crate::models::{
    AdditionJudgment, JudgmentStatus, RequirementStatus, Roster, RosterMember,
};

use super::profile::RosterProfile;
use super::qualifications::QualificationClass;

/// Judges every catalog definition against the roster.
///
/// All definitions are judged, not only currently-enabled ones, so the
/// output always distinguishes "achievable" from "already enabled";
/// `enabled_codes` only drives the `currently_enabled` flag on each
/// judgment.
pub fn judge_catalog(
    catalog: &AdditionCatalog,
    roster: &Roster,
    enabled_codes: &[String],
) -> Vec<AdditionJudgment> {
    let profile = RosterProfile::new(roster);
    debug!(
        definitions = catalog.additions().len(),
        staff = roster.members().len(),
        "judging addition catalog"
    );
    catalog
        .additions()
        .iter()
        .map(|def| judge_definition(def, &profile, enabled_codes))
        .collect()
}

fn judge_definition(
    def: &AdditionDefinition,
    profile: &RosterProfile<'_>,
    enabled_codes: &[String],
) -> AdditionJudgment {
    let (status, reason, requirements) = match &def.rule {
        EligibilityRule::FulltimePresence {
            qualification,
            min_years_experience,
            scope,
        } => judge_fulltime_presence(profile, *qualification, *min_years_experience, *scope),
        EligibilityRule::FteThreshold {
            min_fte,
            qualification,
            min_years_experience,
            experienced_alternative,
            scope,
        } => judge_fte_threshold(
            profile,
            *min_fte,
            *qualification,
            *min_years_experience,
            experienced_alternative.as_ref(),
            *scope,
        ),
        EligibilityRule::QualifiedHeadcountRatio {
            qualification,
            within,
            min_percent,
        } => judge_headcount_ratio(profile, *qualification, *within, *min_percent),
        EligibilityRule::AnyOfRatios { ratios } => judge_any_of_ratios(profile, ratios),
    };

    AdditionJudgment {
        code: def.code.clone(),
        name: def.name.clone(),
        tier_label: def.short_name.clone(),
        category: def.category,
        status,
        reason,
        requirements,
        units: def.units.unwrap_or(Decimal::ZERO),
        percent_rate: def.percent_rate,
        exclusive_group: def.exclusive_group.clone(),
        currently_enabled: enabled_codes.iter().any(|c| c == &def.code),
    }
}

fn judge_fulltime_presence(
    profile: &RosterProfile<'_>,
    qualification: QualificationClass,
    min_years: Option<u32>,
    scope: RuleScope,
) -> (JudgmentStatus, String, Vec<RequirementStatus>) {
    let holders: Vec<&RosterMember> = profile
        .in_scope(scope)
        .filter(|m| m.record.is_fulltime() && qualification.matches(&m.record.qualifications))
        .collect();

    let presence = RequirementStatus {
        name: format!("fulltime {} on roster", qualification.label()),
        met: !holders.is_empty(),
        current: holders.len().to_string(),
        required: "1 or more".to_string(),
        detail: None,
    };

    match min_years {
        Some(years) => {
            let experienced = holders
                .iter()
                .filter(|m| m.record.years_of_experience >= years)
                .count();
            let requirements = vec![
                presence,
                RequirementStatus {
                    name: format!("{} or more years of experience", years),
                    met: experienced > 0,
                    current: experienced.to_string(),
                    required: "1 or more".to_string(),
                    detail: None,
                },
            ];
            if experienced > 0 {
                (
                    JudgmentStatus::Met,
                    format!(
                        "fulltime {} with {} or more years of experience on roster",
                        qualification.label(),
                        years
                    ),
                    requirements,
                )
            } else if !holders.is_empty() {
                (
                    JudgmentStatus::Partial,
                    format!(
                        "fulltime {} present but none with {} or more years of experience",
                        qualification.label(),
                        years
                    ),
                    requirements,
                )
            } else {
                (
                    JudgmentStatus::Unmet,
                    format!("no fulltime {} on roster", qualification.label()),
                    requirements,
                )
            }
        }
        None => {
            let met = !holders.is_empty();
            let reason = if met {
                format!("fulltime {} on roster", qualification.label())
            } else {
                format!("no fulltime {} on roster", qualification.label())
            };
            let status = if met {
                JudgmentStatus::Met
            } else {
                JudgmentStatus::Unmet
            };
            (status, reason, vec![presence])
        }
    }
}

fn member_qualifies(
    member: &RosterMember,
    qualification: Option<QualificationClass>,
    alternative: Option<&ExperiencedAlternative>,
) -> bool {
    let base = match qualification {
        Some(class) => class.matches(&member.record.qualifications),
        None => true,
    };
    base || alternative.is_some_and(|alt| {
        alt.qualification.matches(&member.record.qualifications)
            && member.record.years_of_experience >= alt.min_years
    })
}

fn judge_fte_threshold(
    profile: &RosterProfile<'_>,
    min_fte: Decimal,
    qualification: Option<QualificationClass>,
    min_years: Option<u32>,
    alternative: Option<&ExperiencedAlternative>,
    scope: RuleScope,
) -> (JudgmentStatus, String, Vec<RequirementStatus>) {
    let matching: Vec<&RosterMember> = profile
        .in_scope(scope)
        .filter(|m| member_qualifies(m, qualification, alternative))
        .collect();
    let qualified_fte: Decimal = matching.iter().map(|m| m.fte).sum();

    let subject = match qualification {
        Some(class) => format!("{} full-time equivalent", class.label()),
        None => "full-time equivalent".to_string(),
    };
    let detail = alternative.map(|alt| {
        format!(
            "{} with {} or more years of experience also counts",
            alt.qualification.label(),
            alt.min_years
        )
    });
    let fte_requirement = RequirementStatus {
        name: subject.clone(),
        met: qualified_fte >= min_fte,
        current: format!("{:.2}", qualified_fte),
        required: format!("{} or more", min_fte),
        detail,
    };

    match min_years {
        Some(years) => {
            let experienced_fte: Decimal = matching
                .iter()
                .filter(|m| m.record.years_of_experience >= years)
                .map(|m| m.fte)
                .sum();
            let requirements = vec![
                fte_requirement,
                RequirementStatus {
                    name: format!("{} with {} or more years of experience", subject, years),
                    met: experienced_fte >= min_fte,
                    current: format!("{:.2}", experienced_fte),
                    required: format!("{} or more", min_fte),
                    detail: None,
                },
            ];
            if experienced_fte >= min_fte {
                (
                    JudgmentStatus::Met,
                    format!(
                        "experienced {} {:.2} meets the {} threshold",
                        subject, experienced_fte, min_fte
                    ),
                    requirements,
                )
            } else if qualified_fte >= min_fte {
                (
                    JudgmentStatus::Partial,
                    format!(
                        "FTE threshold met but only {:.2} counts {} or more years of experience",
                        experienced_fte, years
                    ),
                    requirements,
                )
            } else {
                (
                    JudgmentStatus::Unmet,
                    format!(
                        "{:.2} more {} needed",
                        min_fte - qualified_fte,
                        subject
                    ),
                    requirements,
                )
            }
        }
        None => {
            if qualified_fte >= min_fte {
                (
                    JudgmentStatus::Met,
                    format!(
                        "{} {:.2} meets the {} threshold",
                        subject, qualified_fte, min_fte
                    ),
                    vec![fte_requirement],
                )
            } else {
                (
                    JudgmentStatus::Unmet,
                    format!(
                        "{:.2} more {} needed",
                        min_fte - qualified_fte,
                        subject
                    ),
                    vec![fte_requirement],
                )
            }
        }
    }
}

fn judge_headcount_ratio(
    profile: &RosterProfile<'_>,
    qualification: QualificationClass,
    within: QualificationClass,
    min_percent: Decimal,
) -> (JudgmentStatus, String, Vec<RequirementStatus>) {
    let rate = profile.qualified_share(qualification, within);
    let met = rate >= min_percent;

    let requirements = vec![RequirementStatus {
        name: format!(
            "{} share of fulltime {} staff",
            qualification.label(),
            within.label()
        ),
        met,
        current: format!("{:.1}%", rate),
        required: format!("{}% or more", min_percent),
        detail: None,
    }];

    if met {
        (
            JudgmentStatus::Met,
            format!("{} share at {:.1}%", qualification.label(), rate),
            requirements,
        )
    } else {
        (
            JudgmentStatus::Unmet,
            format!(
                "{} share at {:.1}%, {:.1}% more needed",
                qualification.label(),
                rate,
                min_percent - rate
            ),
            requirements,
        )
    }
}

fn judge_any_of_ratios(
    profile: &RosterProfile<'_>,
    ratios: &[RatioCondition],
) -> (JudgmentStatus, String, Vec<RequirementStatus>) {
    let mut requirements = Vec::with_capacity(ratios.len());
    let mut met_name: Option<String> = None;

    for ratio in ratios {
        let (name, rate, min_percent) = match ratio {
            RatioCondition::FulltimeRate { min_percent } => (
                "fulltime share of all staff".to_string(),
                profile.fulltime_rate(),
                *min_percent,
            ),
            RatioCondition::TenureRate {
                within,
                min_years,
                min_percent,
            } => (
                format!(
                    "share of fulltime {} staff with {} or more years of service",
                    within.label(),
                    min_years
                ),
                profile.tenure_share(*within, *min_years),
                *min_percent,
            ),
        };
        let met = rate >= min_percent;
        if met && met_name.is_none() {
            met_name = Some(format!("{} at {:.1}%", name, rate));
        }
        requirements.push(RequirementStatus {
            name,
            met,
            current: format!("{:.1}%", rate),
            required: format!("{}% or more", min_percent),
            detail: None,
        });
    }

    match met_name {
        Some(name) => (JudgmentStatus::Met, name, requirements),
        None => (
            JudgmentStatus::Unmet,
            "none of the alternative ratio conditions holds".to_string(),
            requirements,
        ),
    }
}

/// The mechanically derivable gap of an unmet FTE-threshold rule: the
/// current qualifying FTE and the required threshold.
///
/// Returns `None` for rules whose gap is not a simple FTE shortfall.
pub(crate) fn fte_gap(
    rule: &EligibilityRule,
    profile: &RosterProfile<'_>,
) -> Option<(Decimal, Decimal)> {
    match rule {
        EligibilityRule::FteThreshold {
            min_fte,
            qualification,
            min_years_experience,
            experienced_alternative,
            scope,
        } => {
            let current: Decimal = profile
                .in_scope(*scope)
                .filter(|m| member_qualifies(m, *qualification, experienced_alternative.as_ref()))
                .filter(|m| {
                    min_years_experience
                        .is_none_or(|years| m.record.years_of_experience >= years)
                })
                .map(|m| m.fte)
                .sum();
            Some((current, *min_fte))
        }
        _ => None,
    }
}
