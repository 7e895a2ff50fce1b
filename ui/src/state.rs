//! Selection state shared by the emissions and analytics views.
//!
//! A [`Selection`] is a plain value. Views hold it in a signal and replace it
//! with [`Selection::apply`] whenever the user picks something, so renderers
//! only ever see a consistent snapshot.

use tracing::debug;

use crate::charts::ChartKind;
use crate::data::emissions::{Category, SeriesKey, Status, TimeGrouping};
use crate::data::simulated::{DemoKey, TimeRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    pub category: Category,
    pub status: Status,
    pub grouping: TimeGrouping,
    pub chart_kind: ChartKind,
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    Category(Category),
    Status(Status),
    Grouping(TimeGrouping),
    ChartKind(ChartKind),
    TimeRange(TimeRange),
    Reset,
}

impl SelectionAction {
    /// Action for a filter picker's raw option value. An unrecognised value
    /// selects that filter's default.
    pub fn category(raw: &str) -> Self {
        Self::Category(Category::from_label(raw).unwrap_or_default())
    }

    pub fn status(raw: &str) -> Self {
        Self::Status(Status::from_label(raw).unwrap_or_default())
    }

    pub fn grouping(raw: &str) -> Self {
        Self::Grouping(TimeGrouping::from_label(raw).unwrap_or_default())
    }
}

impl Selection {
    #[must_use]
    pub fn apply(self, action: SelectionAction) -> Self {
        let next = match action {
            SelectionAction::Category(category) => Self { category, ..self },
            SelectionAction::Status(status) => Self { status, ..self },
            SelectionAction::Grouping(grouping) => Self { grouping, ..self },
            SelectionAction::ChartKind(chart_kind) => Self { chart_kind, ..self },
            SelectionAction::TimeRange(time_range) => Self { time_range, ..self },
            SelectionAction::Reset => Self::default(),
        };
        if next != self {
            debug!(?action, "selection changed");
        }
        next
    }

    pub fn emissions_key(&self) -> SeriesKey {
        SeriesKey {
            category: self.category,
            status: self.status,
            grouping: self.grouping,
        }
    }

    pub fn demo_key(&self) -> DemoKey {
        DemoKey {
            kind: self.chart_kind,
            range: self.time_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_paint() {
        let selection = Selection::default();
        assert_eq!(selection.category, Category::All);
        assert_eq!(selection.status, Status::Complete);
        assert_eq!(selection.grouping, TimeGrouping::Yearly);
        assert_eq!(selection.chart_kind, ChartKind::Proportion);
        assert_eq!(selection.time_range, TimeRange::Year);
    }

    #[test]
    fn apply_touches_one_field() {
        let start = Selection::default();
        let next = start.apply(SelectionAction::Status(Status::Estimate));
        assert_eq!(next.status, Status::Estimate);
        assert_eq!(next.category, start.category);
        assert_eq!(next.grouping, start.grouping);
        assert_eq!(start.status, Status::Complete);
    }

    #[test]
    fn keys_follow_the_selection() {
        let selection = Selection::default()
            .apply(SelectionAction::Category(Category::NewBuild))
            .apply(SelectionAction::Grouping(TimeGrouping::Quarterly))
            .apply(SelectionAction::ChartKind(ChartKind::Trend))
            .apply(SelectionAction::TimeRange(TimeRange::All));

        assert_eq!(
            selection.emissions_key(),
            SeriesKey {
                category: Category::NewBuild,
                status: Status::Complete,
                grouping: TimeGrouping::Quarterly,
            }
        );
        assert_eq!(
            selection.demo_key(),
            DemoKey {
                kind: ChartKind::Trend,
                range: TimeRange::All,
            }
        );
        assert_eq!(selection.apply(SelectionAction::Reset), Selection::default());
    }

    #[test]
    fn unknown_picker_values_select_the_default_series() {
        let selection = Selection::default()
            .apply(SelectionAction::category("New build"))
            .apply(SelectionAction::status("Estimate"))
            .apply(SelectionAction::grouping("monthly"));
        assert_eq!(
            selection.emissions_key(),
            SeriesKey {
                category: Category::NewBuild,
                status: Status::Estimate,
                grouping: TimeGrouping::Monthly,
            }
        );

        let reverted = selection
            .apply(SelectionAction::category("Warehouses"))
            .apply(SelectionAction::status("Draft"))
            .apply(SelectionAction::grouping("hourly"));
        assert_eq!(reverted.emissions_key(), SeriesKey::default());
    }
}
