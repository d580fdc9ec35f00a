use std::collections::{HashMap, HashSet};

use slotmap::SlotMap;
use tracing::{trace, warn};

use super::{ComposeFloorPlan, RoomGroup, SceneParams};
use crate::error::{RoomgenError, SceneError};
use crate::plan::FloorPlan;

slotmap::new_key_type! {
    /// Handle to a room group held by a [`SceneStore`].
    pub struct GroupId;
}

/// Outcome of [`SceneStore::load_floor_plan`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Groups replaced or removed by the load; the renderer should dispose them.
    pub retired: Vec<RoomGroup>,
    /// Rooms that could not be composed, by room id.
    pub failures: Vec<(String, RoomgenError)>,
    /// Set when the plan as a whole was rejected; the store is left untouched.
    pub plan_error: Option<RoomgenError>,
}

/// Arena of composed room groups exposed to the renderer.
///
/// Each room id maps to at most one live group. Replacing a group hands the
/// old one back to the caller, which owns its disposal.
#[derive(Debug, Default)]
pub struct SceneStore {
    groups: SlotMap<GroupId, RoomGroup>,
    by_room: HashMap<String, GroupId>,
}

impl SceneStore {
    /// Creates a new, empty scene store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a group, replacing any group for the same room id.
    ///
    /// Returns the group's handle and the replaced group, if any. A replaced
    /// group keeps its handle.
    pub fn upsert(&mut self, group: RoomGroup) -> (GroupId, Option<RoomGroup>) {
        if let Some(&id) = self.by_room.get(&group.room_id) {
            if let Some(slot) = self.groups.get_mut(id) {
                trace!(room = %group.room_id, "replacing room group");
                let old = std::mem::replace(slot, group);
                return (id, Some(old));
            }
        }
        let room_id = group.room_id.clone();
        let id = self.groups.insert(group);
        trace!(room = %room_id, "inserted room group");
        self.by_room.insert(room_id, id);
        (id, None)
    }

    /// Returns the group for a handle.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::GroupNotFound`] if the handle is stale.
    pub fn group(&self, id: GroupId) -> Result<&RoomGroup, SceneError> {
        self.groups.get(id).ok_or(SceneError::GroupNotFound)
    }

    /// Returns the handle of the group for a room id.
    #[must_use]
    pub fn find(&self, room_id: &str) -> Option<GroupId> {
        self.by_room.get(room_id).copied()
    }

    /// Removes a group and returns it for disposal.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::GroupNotFound`] if the handle is stale.
    pub fn remove(&mut self, id: GroupId) -> Result<RoomGroup, SceneError> {
        let group = self.groups.remove(id).ok_or(SceneError::GroupNotFound)?;
        self.by_room.remove(&group.room_id);
        Ok(group)
    }

    /// Removes every group whose room id is not in `keep`.
    pub fn retain_rooms<'k>(&mut self, keep: impl IntoIterator<Item = &'k str>) -> Vec<RoomGroup> {
        let keep: HashSet<&str> = keep.into_iter().collect();
        let stale: Vec<GroupId> = self
            .groups
            .iter()
            .filter(|(_, g)| !keep.contains(g.room_id.as_str()))
            .map(|(id, _)| id)
            .collect();
        stale
            .into_iter()
            .filter_map(|id| self.remove(id).ok())
            .collect()
    }

    /// Iterates all live groups.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &RoomGroup)> {
        self.groups.iter()
    }

    /// Number of live groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if the store holds no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Re-derives every room of `plan` and syncs the store to it.
    ///
    /// Rooms that fail keep no group; their previous group, if any, is retired.
    /// Rooms absent from the plan are retired as well. A plan that fails
    /// validation is reported in [`LoadReport::plan_error`] and changes nothing.
    pub fn load_floor_plan(&mut self, plan: &FloorPlan, params: SceneParams) -> LoadReport {
        let mut report = LoadReport::default();
        if let Err(err) = plan.validate() {
            warn!(error = %err, "rejecting floor plan");
            report.plan_error = Some(err);
            return report;
        }

        let mut keep = Vec::with_capacity(plan.rooms.len());
        for (room, outcome) in ComposeFloorPlan::new(plan).with_params(params).execute_each() {
            match outcome {
                Ok(group) => {
                    keep.push(room.id.as_str());
                    if let (_, Some(old)) = self.upsert(group) {
                        report.retired.push(old);
                    }
                }
                Err(err) => {
                    warn!(room = %room.id, "dropping room from scene");
                    report.failures.push((room.id.clone(), err));
                }
            }
        }
        report.retired.extend(self.retain_rooms(keep));
        report
    }
}
