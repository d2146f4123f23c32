use picker_core::Tracker;
use picker_core::model::Tier;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierOptionVm {
    pub tier: Tier,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerVm {
    pub tier: Tier,
    pub number_label: String,
    pub can_mark: bool,
    pub remaining_label: String,
    pub options: Vec<TierOptionVm>,
}

impl PickerVm {
    #[must_use]
    pub fn placeholder(tier: Tier) -> Self {
        Self {
            tier,
            number_label: "None".to_string(),
            can_mark: false,
            remaining_label: String::new(),
            options: tier_options(tier),
        }
    }
}

#[must_use]
pub fn map_picker(tracker: &Tracker, tier: Tier) -> PickerVm {
    let selection = tracker.selection();
    let number_label = selection.map_or_else(|| "None".to_string(), |id| id.to_string());

    let total = tracker.catalog().candidates(tier).count();
    let remaining = tracker.remaining(tier);
    let remaining_label = if total > 0 && remaining == 0 {
        "All done in this tier".to_string()
    } else {
        format!("{remaining} of {total} left")
    };

    PickerVm {
        tier,
        number_label,
        can_mark: selection.is_some(),
        remaining_label,
        options: tier_options(tier),
    }
}

fn tier_options(selected: Tier) -> Vec<TierOptionVm> {
    Tier::ALL
        .into_iter()
        .map(|tier| TierOptionVm {
            tier,
            label: tier.label(),
            selected: tier == selected,
        })
        .collect()
}
