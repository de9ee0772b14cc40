//! Radio button group.
//!
//! Unlike most widgets, a radio group *owns* its member buttons inline;
//! members are not independently registered widgets. The group occupies the
//! union of its members' bounds in the unified sequence, and dispatch
//! resolves the clicked member within it.

use trellis_core::Signal;

use crate::geometry::{Point, Rect};
use crate::widget::metrics;
use crate::widget::WidgetCore;

/// Diameter of the radio indicator circle.
const INDICATOR_SIZE: f32 = 16.0;

/// One member button inside a [`RadioGroup`].
#[derive(Debug, Clone)]
pub struct RadioMember {
    label: String,
    rect: Rect,
    selected: bool,
}

impl RadioMember {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// A mutually exclusive group of radio buttons.
///
/// Selecting any member deselects every other member before
/// `selection_changed` fires — the invariant holds after any sequence of
/// selections.
pub struct RadioGroup {
    core: WidgetCore,
    members: Vec<RadioMember>,

    /// Emitted with the index of the newly selected member.
    pub selection_changed: Signal<usize>,
}

impl RadioGroup {
    /// Create an empty group. Its bounds grow as members are added.
    pub fn new() -> Self {
        Self {
            core: WidgetCore::new(Rect::ZERO),
            members: Vec::new(),
            selection_changed: Signal::new(),
        }
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    /// The member buttons, in insertion order.
    pub fn members(&self) -> &[RadioMember] {
        &self.members
    }

    /// Index of the selected member, if any is selected yet.
    pub fn selected_index(&self) -> Option<usize> {
        self.members.iter().position(|m| m.selected)
    }

    /// Append a member; capacity is enforced by the owning window. Returns
    /// the new member's index.
    pub(crate) fn push_member(&mut self, pos: Point, label: String) -> usize {
        let rect = Rect::new(
            pos.x,
            pos.y,
            INDICATOR_SIZE + 6.0 + metrics::text_width(&label),
            metrics::LINE_HEIGHT,
        );
        self.members.push(RadioMember {
            label,
            rect,
            selected: false,
        });

        // The group's own bounds cover every member.
        let bounds = self
            .members
            .iter()
            .skip(1)
            .fold(self.members[0].rect, |acc, m| acc.union(&m.rect));
        self.core.move_to(bounds.left(), bounds.top());
        self.core.resize(bounds.width(), bounds.height());
        self.core.mark_dirty();

        self.members.len() - 1
    }

    /// The member whose bounds contain `point`, if any.
    pub(crate) fn member_at(&self, point: Point) -> Option<usize> {
        self.members.iter().position(|m| m.rect.contains(point))
    }

    /// Select member `index`, deselecting all others.
    ///
    /// Returns `true` if the selection actually changed. Does not emit;
    /// dispatch emits `selection_changed` after mutual exclusion is applied.
    pub(crate) fn select(&mut self, index: usize) -> bool {
        if index >= self.members.len() || self.members[index].selected {
            return false;
        }
        for (i, member) in self.members.iter_mut().enumerate() {
            member.selected = i == index;
        }
        self.core.mark_dirty();
        true
    }
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(RadioGroup: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutual_exclusion() {
        let mut group = RadioGroup::new();
        for i in 0..4 {
            group.push_member(Point::new(0.0, i as f32 * 24.0), format!("option {i}"));
        }

        assert_eq!(group.selected_index(), None);

        // Any sequence of selections leaves exactly one member selected.
        for &pick in &[2usize, 0, 3, 3, 1] {
            group.select(pick);
            let selected: Vec<usize> = group
                .members()
                .iter()
                .enumerate()
                .filter(|(_, m)| m.is_selected())
                .map(|(i, _)| i)
                .collect();
            assert_eq!(selected, vec![pick]);
        }
    }

    #[test]
    fn test_select_same_member_reports_no_change() {
        let mut group = RadioGroup::new();
        group.push_member(Point::ZERO, "a".into());
        assert!(group.select(0));
        assert!(!group.select(0));
    }

    #[test]
    fn test_bounds_cover_members() {
        let mut group = RadioGroup::new();
        group.push_member(Point::new(10.0, 10.0), "a".into());
        group.push_member(Point::new(10.0, 50.0), "bb".into());

        let rect = group.core().rect();
        assert_eq!(rect.top(), 10.0);
        assert!(rect.bottom() >= 50.0 + metrics::LINE_HEIGHT);
    }
}
