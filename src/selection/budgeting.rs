/// Per-entry cap plus an optional total across all entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletBudget {
    pub per_entry: usize,
    pub total: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetResult {
    /// How many of its top-ranked bullets each entry keeps.
    pub allocations: Vec<usize>,
    pub bullets_considered: usize,
    pub bullets_selected: usize,
    pub bullets_excluded_by_cap: usize,
    pub bullets_excluded_by_budget: usize,
}

/// Allocates bullets to entries given each entry's ranked length.
///
/// Every entry is capped at `per_entry`. A total budget is then handed out
/// round-robin by rank, entry order within a round, so an early entry cannot
/// starve later ones. Entries are never dropped; they may end up with zero.
pub fn apply_budget(ranked_lens: &[usize], budget: &BulletBudget) -> BudgetResult {
    let capped: Vec<usize> = ranked_lens
        .iter()
        .map(|&len| len.min(budget.per_entry))
        .collect();

    let considered: usize = ranked_lens.iter().sum();
    let after_cap: usize = capped.iter().sum();

    let allocations = match budget.total {
        Some(total) if total < after_cap => {
            let mut allocations = vec![0; capped.len()];
            let mut remaining = total;
            'rounds: for round in 0..budget.per_entry {
                for (slot, &cap) in allocations.iter_mut().zip(&capped) {
                    if remaining == 0 {
                        break 'rounds;
                    }
                    if round < cap {
                        *slot += 1;
                        remaining -= 1;
                    }
                }
            }
            tracing::debug!(total, after_cap, "bullet budget exhausted");
            allocations
        }
        _ => capped,
    };

    let bullets_selected: usize = allocations.iter().sum();

    BudgetResult {
        allocations,
        bullets_considered: considered,
        bullets_selected,
        bullets_excluded_by_cap: considered - after_cap,
        bullets_excluded_by_budget: after_cap - bullets_selected,
    }
}
