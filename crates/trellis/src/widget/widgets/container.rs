//! Container widget: an exclusive visibility group.
//!
//! A container holds a set of sub-containers, each referencing widgets
//! owned by the window. Exactly one sub-container is active at a time;
//! widgets referenced only by inactive sub-containers are excluded from
//! hit-testing and drawing without their stored visibility flag changing,
//! so their state (textbox contents, slider values) survives switches.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::widget::{WidgetCore, WidgetId};

/// A page-switching container of widget groups.
pub struct Container {
    core: WidgetCore,
    groups: Vec<Vec<WidgetId>>,
    active: usize,
}

impl Container {
    /// Create a container with no sub-containers yet.
    pub fn new(rect: Rect) -> Self {
        Self {
            core: WidgetCore::new(rect),
            groups: Vec::new(),
            active: 0,
        }
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    /// Append an empty sub-container and return its id. The first one
    /// created becomes the active group.
    pub fn insert_group(&mut self) -> usize {
        self.groups.push(Vec::new());
        self.groups.len() - 1
    }

    /// Number of sub-containers.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// The widgets referenced by sub-container `group`.
    pub fn children_of(&self, group: usize) -> Result<&[WidgetId]> {
        self.groups
            .get(group)
            .map(Vec::as_slice)
            .ok_or(Error::IndexOutOfRange {
                what: "container groups",
                index: group,
                len: self.groups.len(),
            })
    }

    /// The currently active sub-container id.
    pub fn active_group(&self) -> usize {
        self.active
    }

    /// Make sub-container `group` the active one.
    ///
    /// No-op if it is already active; `IndexOutOfRange` if it does not
    /// exist. Returns whether the active group actually changed.
    pub fn set_active(&mut self, group: usize) -> Result<bool> {
        if group >= self.groups.len() {
            return Err(Error::IndexOutOfRange {
                what: "container groups",
                index: group,
                len: self.groups.len(),
            });
        }
        if self.active == group {
            return Ok(false);
        }
        self.active = group;
        self.core.mark_dirty();
        Ok(true)
    }

    pub(crate) fn push_child(&mut self, group: usize, child: WidgetId) -> Result<()> {
        let len = self.groups.len();
        let children = self.groups.get_mut(group).ok_or(Error::IndexOutOfRange {
            what: "container groups",
            index: group,
            len,
        })?;
        children.push(child);
        Ok(())
    }

    /// The sub-container referencing `child`, if any.
    pub(crate) fn group_of(&self, child: WidgetId) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(&child))
    }
}

static_assertions::assert_impl_all!(Container: Send, Sync);
