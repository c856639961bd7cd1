//! Optimization suggestions for closing eligibility gaps.
//!
//! For judgments whose unmet sub-condition is mechanically derivable, the
//! advisor proposes minimal staffing changes and estimates the revenue
//! impact by re-running the revenue simulator on the hypothetical claim set.
//! Suggestions are advisory only and are never auto-applied.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

use crate::config::{AdditionCatalog, EligibilityRule};
use crate::error::EngineResult;
use crate::models::{AdditionJudgment, Roster, SelectedAddition, SimulationParams};

use super::eligibility::fte_gap;
use super::exclusive_group::select_claimable;
use super::profile::RosterProfile;
use super::revenue::simulate_monthly_revenue;

/// The kind of staffing change a suggestion proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Add staff to close an FTE shortfall.
    Hire,
    /// Claim a higher tier the roster already satisfies.
    Upgrade,
    /// Support existing staff in acquiring a qualification.
    Training,
}

/// How urgent a suggestion is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionPriority {
    /// Revenue is being left on the table today.
    High,
    /// A staffing change would unlock new revenue.
    Medium,
    /// A longer-term improvement.
    Low,
}

impl SuggestionPriority {
    fn rank(self) -> u8 {
        match self {
            SuggestionPriority::High => 0,
            SuggestionPriority::Medium => 1,
            SuggestionPriority::Low => 2,
        }
    }
}

/// A proposed staffing change and its estimated revenue impact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// The kind of change proposed.
    pub kind: SuggestionKind,
    /// Short imperative title.
    pub title: String,
    /// What to change and why it unlocks the addition.
    pub description: String,
    /// The requirement rows of the targeted addition, formatted for display.
    pub requirements: Vec<String>,
    /// Estimated monthly revenue delta in whole yen, from re-running the
    /// simulator on the hypothetical claim set.
    pub estimated_monthly_impact: Decimal,
    /// How urgent the suggestion is.
    pub priority: SuggestionPriority,
}

/// Derives optimization suggestions from a judgment list.
///
/// # Errors
///
/// Propagates simulator errors from the hypothetical re-runs (invalid
/// scenario parameters, unknown region grade).
pub fn advise(
    judgments: &[AdditionJudgment],
    roster: &Roster,
    params: &SimulationParams,
    catalog: &AdditionCatalog,
) -> EngineResult<Vec<Suggestion>> {
    let profile = RosterProfile::new(roster);
    let enabled: Vec<SelectedAddition> = judgments
        .iter()
        .filter(|j| j.currently_enabled)
        .map(SelectedAddition::from)
        .collect();
    let enabled_total = simulate_monthly_revenue(params, &enabled, catalog)?.total_revenue;

    let claimable = select_claimable(judgments);
    let mut suggestions = Vec::new();

    // Achievable-but-not-enabled judgments: the roster already qualifies, so
    // switching the claim is pure upside.
    for &judgment in &claimable {
        if judgment.currently_enabled {
            continue;
        }
        let enabled_units_in_group = judgment
            .exclusive_group
            .as_deref()
            .map(|group| enabled_units(judgments, group))
            .unwrap_or(Decimal::ZERO);
        if judgment.units <= enabled_units_in_group {
            continue;
        }

        let hypothetical = with_claim(&enabled, judgments, judgment);
        let delta =
            simulate_monthly_revenue(params, &hypothetical, catalog)?.total_revenue - enabled_total;
        let title = if enabled_units_in_group > Decimal::ZERO {
            format!("Switch to {}", judgment.tier_label)
        } else {
            format!("Start claiming {}", judgment.tier_label)
        };
        suggestions.push(Suggestion {
            kind: SuggestionKind::Upgrade,
            title,
            description: format!("The current roster already satisfies {}", judgment.name),
            requirements: requirement_rows(judgment),
            estimated_monthly_impact: delta,
            priority: SuggestionPriority::High,
        });
    }

    // FTE shortfalls: for each exclusive group with nothing achievable (and
    // each ungrouped shortfall), propose hiring toward the closest tier.
    let achievable_groups: HashSet<&str> = claimable
        .iter()
        .filter_map(|j| j.exclusive_group.as_deref())
        .collect();
    let mut suggested_groups: HashSet<&str> = HashSet::new();

    for judgment in judgments {
        if judgment.is_met() {
            continue;
        }
        if let Some(group) = judgment.exclusive_group.as_deref() {
            if achievable_groups.contains(group) || suggested_groups.contains(group) {
                continue;
            }
        }
        let Some((current, required)) = gap_for(judgment, catalog, &profile) else {
            continue;
        };
        let candidate = match judgment.exclusive_group.as_deref() {
            // Within a group, aim at the tier closest to being earned.
            Some(group) => match closest_in_group(judgments, group, catalog, &profile) {
                Some(closest) => closest,
                None => (judgment, current, required),
            },
            None => (judgment, current, required),
        };
        let (target, current, required) = candidate;

        let hypothetical = with_claim(&enabled, judgments, target);
        let delta =
            simulate_monthly_revenue(params, &hypothetical, catalog)?.total_revenue - enabled_total;
        suggestions.push(Suggestion {
            kind: SuggestionKind::Hire,
            title: format!("Add staff to earn {}", target.tier_label),
            description: format!(
                "Adding {:.2} more qualifying full-time equivalent meets the requirement for {}",
                required - current,
                target.name
            ),
            requirements: requirement_rows(target),
            estimated_monthly_impact: delta,
            priority: SuggestionPriority::Medium,
        });
        if let Some(group) = target.exclusive_group.as_deref() {
            suggested_groups.insert(group);
        }
    }

    // Qualification gaps: when the claimable tier of a group ignores
    // qualifications and a qualified tier above it exists, training the
    // unqualified staff raises the tier.
    suggestions.extend(training_suggestions(
        judgments, &claimable, &enabled, params, catalog, &profile, enabled_total,
    )?);

    suggestions.sort_by_key(|s| s.priority.rank());
    Ok(suggestions)
}

fn enabled_units(judgments: &[AdditionJudgment], group: &str) -> Decimal {
    judgments
        .iter()
        .filter(|j| j.currently_enabled && j.exclusive_group.as_deref() == Some(group))
        .map(|j| j.units)
        .max()
        .unwrap_or(Decimal::ZERO)
}

/// The enabled claim set with `target` claimed, displacing any enabled
/// member of the same exclusive group.
fn with_claim(
    enabled: &[SelectedAddition],
    judgments: &[AdditionJudgment],
    target: &AdditionJudgment,
) -> Vec<SelectedAddition> {
    let displaced: HashSet<&str> = match target.exclusive_group.as_deref() {
        Some(group) => judgments
            .iter()
            .filter(|j| j.exclusive_group.as_deref() == Some(group))
            .map(|j| j.code.as_str())
            .collect(),
        None => HashSet::from([target.code.as_str()]),
    };
    let mut claim: Vec<SelectedAddition> = enabled
        .iter()
        .filter(|s| !displaced.contains(s.code.as_str()))
        .cloned()
        .collect();
    claim.push(SelectedAddition::from(target));
    claim
}

fn requirement_rows(judgment: &AdditionJudgment) -> Vec<String> {
    judgment
        .requirements
        .iter()
        .map(|r| format!("{}: {} / {}", r.name, r.current, r.required))
        .collect()
}

fn gap_for(
    judgment: &AdditionJudgment,
    catalog: &AdditionCatalog,
    profile: &RosterProfile<'_>,
) -> Option<(Decimal, Decimal)> {
    let def = catalog
        .additions()
        .iter()
        .find(|d| d.code == judgment.code)?;
    let (current, required) = fte_gap(&def.rule, profile)?;
    (current < required).then_some((current, required))
}

fn closest_in_group<'a>(
    judgments: &'a [AdditionJudgment],
    group: &str,
    catalog: &AdditionCatalog,
    profile: &RosterProfile<'_>,
) -> Option<(&'a AdditionJudgment, Decimal, Decimal)> {
    judgments
        .iter()
        .filter(|j| !j.is_met() && j.exclusive_group.as_deref() == Some(group))
        .filter_map(|j| gap_for(j, catalog, profile).map(|(current, required)| (j, current, required)))
        .min_by_key(|(_, current, required)| *required - *current)
}

#[allow(clippy::too_many_arguments)]
fn training_suggestions(
    judgments: &[AdditionJudgment],
    claimable: &[&AdditionJudgment],
    enabled: &[SelectedAddition],
    params: &SimulationParams,
    catalog: &AdditionCatalog,
    profile: &RosterProfile<'_>,
    enabled_total: Decimal,
) -> EngineResult<Vec<Suggestion>> {
    let mut suggestions = Vec::new();

    for best in claimable {
        let Some(group) = best.exclusive_group.as_deref() else {
            continue;
        };
        let Some(best_def) = catalog.additions().iter().find(|d| d.code == best.code) else {
            continue;
        };
        // Only tiers earned without a qualification filter can be raised by
        // training.
        let EligibilityRule::FteThreshold {
            qualification: None,
            scope,
            ..
        } = &best_def.rule
        else {
            continue;
        };

        let Some((target_def, class)) = catalog
            .additions()
            .iter()
            .filter(|d| d.exclusive_group.as_deref() == Some(group))
            .filter(|d| d.units > best_def.units)
            .find_map(|d| match &d.rule {
                EligibilityRule::FteThreshold {
                    qualification: Some(class),
                    min_years_experience: None,
                    ..
                } => Some((d, *class)),
                _ => None,
            })
        else {
            continue;
        };

        let unqualified = profile
            .in_scope(*scope)
            .filter(|m| !class.matches(&m.record.qualifications))
            .count();
        if unqualified == 0 {
            continue;
        }

        let Some(target) = judgments.iter().find(|j| j.code == target_def.code) else {
            continue;
        };
        let hypothetical = with_claim(enabled, judgments, target);
        let delta =
            simulate_monthly_revenue(params, &hypothetical, catalog)?.total_revenue - enabled_total;
        suggestions.push(Suggestion {
            kind: SuggestionKind::Training,
            title: "Support qualification acquisition".to_string(),
            description: format!(
                "{} staff without a {} qualification could qualify the roster for {}",
                unqualified,
                class.label(),
                target.name
            ),
            requirements: requirement_rows(target),
            estimated_monthly_impact: delta,
            priority: SuggestionPriority::Low,
        });
    }

    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::judge_catalog;
    use crate::config::{
        AdditionDefinition, CatalogMetadata, DeductionThresholds, IncomeTaxTable, InsuranceRates,
        PayrollRates, PremiumRates, ResidentTaxRates, RuleScope, UnitPriceConfig,
    };
    use crate::calculation::QualificationClass;
    use crate::models::{
        AdditionCategory, FacilitySnapshot, PersonnelType, StaffRecord, WorkStyle,
    };
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn payroll() -> PayrollRates {
        PayrollRates {
            premiums: PremiumRates {
                overtime: dec("1.25"),
                late_night: dec("1.5"),
                holiday: dec("1.35"),
            },
            standard_daily_hours: dec("8"),
            insurance: InsuranceRates {
                health: dec("0.05"),
                pension: dec("0.0915"),
                employment: dec("0.006"),
                employer_health: dec("0.05"),
                employer_pension: dec("0.0915"),
                employer_employment: dec("0.0095"),
                workers_comp: dec("0.003"),
            },
            income_tax: IncomeTaxTable { brackets: vec![] },
            resident_tax: ResidentTaxRates {
                annual_rate: dec("0.1"),
                months: 12,
            },
        }
    }

    fn definition(
        code: &str,
        units: &str,
        group: Option<&str>,
        rule: EligibilityRule,
    ) -> AdditionDefinition {
        AdditionDefinition {
            code: code.to_string(),
            name: format!("Addition {}", code),
            short_name: code.to_string(),
            category: AdditionCategory::System,
            units: Some(dec(units)),
            percent_rate: None,
            rule,
            exclusive_group: group.map(|g| g.to_string()),
        }
    }

    fn catalog(definitions: Vec<AdditionDefinition>) -> AdditionCatalog {
        let metadata = CatalogMetadata {
            fiscal_year: "2024".to_string(),
            name: "Test catalog".to_string(),
            version: "2024-04-01".to_string(),
            source_url: "https://example.invalid/catalog".to_string(),
        };
        let prices = UnitPriceConfig {
            unit_prices: HashMap::from([(6, dec("10.10"))]),
            deduction: DeductionThresholds {
                capacity_impact: dec("0.7"),
                plan_critical_share: dec("0.5"),
                plan_critical_impact: dec("0.5"),
                plan_warning_impact: dec("0.7"),
                staffing_impact: dec("0.7"),
                staffing_min_fte: dec("2.0"),
                service_manager_impact: dec("0.7"),
                self_evaluation_impact: dec("0.85"),
            },
        };
        AdditionCatalog::new(metadata, definitions, prices, payroll()).unwrap()
    }

    fn fte_rule(qualification: Option<QualificationClass>) -> EligibilityRule {
        EligibilityRule::FteThreshold {
            min_fte: dec("1.0"),
            qualification,
            min_years_experience: None,
            experienced_alternative: None,
            scope: RuleScope::AdditionStaff,
        }
    }

    fn staff(
        id: &str,
        work_style: WorkStyle,
        hours: &str,
        qualifications: &[&str],
    ) -> StaffRecord {
        StaffRecord {
            id: id.to_string(),
            name: format!("Staff {}", id),
            personnel_type: PersonnelType::Addition,
            work_style,
            contracted_weekly_hours: dec(hours),
            is_manager: false,
            is_service_manager: false,
            qualifications: qualifications.iter().map(|q| q.to_string()).collect(),
            years_of_experience: 0,
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

    fn params() -> SimulationParams {
        SimulationParams {
            child_count: 10,
            average_usage_days: dec("20"),
            base_units: dec("600"),
            region_grade: 6,
            percent_addition_rate: Decimal::ZERO,
            implementation_units: Decimal::ZERO,
        }
    }

    #[test]
    fn test_upgrade_suggested_when_achievable_tier_outranks_enabled() {
        let catalog = catalog(vec![
            definition(
                "higher",
                "107",
                Some("g1"),
                fte_rule(Some(QualificationClass::ChildInstructor)),
            ),
            definition("lower", "90", Some("g1"), fte_rule(None)),
        ]);
        let r = roster(vec![staff(
            "s1",
            WorkStyle::Fulltime,
            "40",
            &["nursery_teacher"],
        )]);
        let enabled = vec!["lower".to_string()];
        let judgments = judge_catalog(&catalog, &r, &enabled);

        let suggestions = advise(&judgments, &r, &params(), &catalog).unwrap();
        let upgrade = suggestions
            .iter()
            .find(|s| s.kind == SuggestionKind::Upgrade)
            .expect("expected an upgrade suggestion");

        assert_eq!(upgrade.title, "Switch to higher");
        // 17 extra units x 200 child-days x 10.10 yen.
        assert_eq!(upgrade.estimated_monthly_impact, dec("34340"));
        assert_eq!(upgrade.priority, SuggestionPriority::High);
    }

    #[test]
    fn test_hire_suggested_for_fte_shortfall() {
        let catalog = catalog(vec![definition("only", "90", Some("g1"), fte_rule(None))]);
        let r = roster(vec![staff("s1", WorkStyle::Parttime, "10", &[])]);
        let judgments = judge_catalog(&catalog, &r, &[]);

        let suggestions = advise(&judgments, &r, &params(), &catalog).unwrap();
        let hire = suggestions
            .iter()
            .find(|s| s.kind == SuggestionKind::Hire)
            .expect("expected a hire suggestion");

        assert!(hire.description.contains("0.75"));
        // 90 units x 200 child-days x 10.10 yen.
        assert_eq!(hire.estimated_monthly_impact, dec("181800"));
    }

    #[test]
    fn test_no_hire_suggestion_when_group_already_achievable() {
        let catalog = catalog(vec![
            definition(
                "higher",
                "107",
                Some("g1"),
                fte_rule(Some(QualificationClass::ChildInstructor)),
            ),
            definition("lower", "90", Some("g1"), fte_rule(None)),
        ]);
        let r = roster(vec![staff("s1", WorkStyle::Fulltime, "40", &[])]);
        let judgments = judge_catalog(&catalog, &r, &[]);

        let suggestions = advise(&judgments, &r, &params(), &catalog).unwrap();
        assert!(suggestions.iter().all(|s| s.kind != SuggestionKind::Hire));
    }

    #[test]
    fn test_training_suggested_for_unqualified_addition_staff() {
        let catalog = catalog(vec![
            definition(
                "qualified_tier",
                "107",
                Some("g1"),
                fte_rule(Some(QualificationClass::ChildInstructor)),
            ),
            definition("other_tier", "90", Some("g1"), fte_rule(None)),
        ]);
        let r = roster(vec![staff("s1", WorkStyle::Fulltime, "40", &[])]);
        let judgments = judge_catalog(&catalog, &r, &[]);

        let suggestions = advise(&judgments, &r, &params(), &catalog).unwrap();
        let training = suggestions
            .iter()
            .find(|s| s.kind == SuggestionKind::Training)
            .expect("expected a training suggestion");

        assert!(training.description.contains("child instructor"));
        assert_eq!(training.priority, SuggestionPriority::Low);
    }

    #[test]
    fn test_suggestions_sorted_by_priority() {
        let catalog = catalog(vec![
            definition(
                "qualified_tier",
                "107",
                Some("g1"),
                fte_rule(Some(QualificationClass::ChildInstructor)),
            ),
            definition("other_tier", "90", Some("g1"), fte_rule(None)),
        ]);
        let r = roster(vec![staff("s1", WorkStyle::Fulltime, "40", &[])]);
        let judgments = judge_catalog(&catalog, &r, &[]);

        let suggestions = advise(&judgments, &r, &params(), &catalog).unwrap();
        let ranks: Vec<u8> = suggestions.iter().map(|s| s.priority.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn test_fully_enabled_optimal_roster_yields_no_suggestions() {
        let catalog = catalog(vec![definition("only", "90", Some("g1"), fte_rule(None))]);
        let r = roster(vec![staff("s1", WorkStyle::Fulltime, "40", &["nursery_teacher"])]);
        let enabled = vec!["only".to_string()];
        let judgments = judge_catalog(&catalog, &r, &enabled);

        let suggestions = advise(&judgments, &r, &params(), &catalog).unwrap();
        assert!(suggestions.is_empty());
    }
}
