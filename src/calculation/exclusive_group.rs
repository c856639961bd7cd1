//! Exclusive-group selection among eligible judgments.

use std::collections::HashMap;

use crate::models::AdditionJudgment;

/// Picks the claimable subset of a judgment list.
///
/// Within each exclusive group, only the `Met` judgment with the highest
/// unit value survives; ties resolve to the earliest catalog declaration,
/// which is input order. Ungrouped `Met` judgments pass through unchanged.
/// Non-selected group members remain in the caller's full judgment list for
/// display; they are only excluded from the claimable subset.
///
/// The result preserves input order.
pub fn select_claimable(judgments: &[AdditionJudgment]) -> Vec<&AdditionJudgment> {
    let mut best_in_group: HashMap<&str, usize> = HashMap::new();

    for (index, judgment) in judgments.iter().enumerate() {
        if !judgment.is_met() {
            continue;
        }
        if let Some(group) = &judgment.exclusive_group {
            let entry = best_in_group.entry(group.as_str()).or_insert(index);
            // Strict comparison keeps the earliest declaration on ties.
            if judgment.units > judgments[*entry].units {
                *entry = index;
            }
        }
    }

    judgments
        .iter()
        .enumerate()
        .filter(|(index, judgment)| {
            if !judgment.is_met() {
                return false;
            }
            match &judgment.exclusive_group {
                Some(group) => best_in_group.get(group.as_str()) == Some(index),
                None => true,
            }
        })
        .map(|(_, judgment)| judgment)
        .collect()
}
