use std::collections::HashMap;

use log::debug;

use super::body::Body;
use crate::utils::arena::{Arena, EntityId};

/// Store of all simulated entities, keyed by stable generational ids.
///
/// Attachments form a forest: each child references its parent by id, and the
/// registry keeps the reverse edges so removing a parent cascades to every
/// dependent attachment before the slot is reused. A parent must already be
/// registered when a child is spawned, which rules out cycles.
#[derive(Default)]
pub struct Registry {
    bodies: Arena<Body>,
    children: HashMap<EntityId, Vec<EntityId>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a body and returns its id.
    ///
    /// Panics if the body is an attachment whose parent is not registered;
    /// that ordering bug would otherwise surface as a dangling parent in the
    /// middle of a kinematics pass.
    pub fn spawn(&mut self, body: Body) -> EntityId {
        let parent = body.attachment.as_ref().map(|attachment| attachment.parent);
        if let Some(parent) = parent {
            assert!(
                self.bodies.contains(parent),
                "attachment parent must be registered before its children"
            );
        }
        let id = self.bodies.insert(body);
        if let Some(stored) = self.bodies.get_mut(id) {
            stored.id = id;
        }
        if let Some(parent) = parent {
            self.children.entry(parent).or_default().push(id);
        }
        id
    }

    /// Removes an entity together with every attachment hanging off it,
    /// children first. Returns how many entities were removed; zero when the
    /// id was already stale.
    pub fn despawn(&mut self, id: EntityId) -> usize {
        let mut removed = 0;
        if let Some(children) = self.children.remove(&id) {
            for child in children {
                removed += self.despawn(child);
            }
        }
        if let Some(body) = self.bodies.remove(id) {
            if let Some(attachment) = body.attachment {
                if let Some(siblings) = self.children.get_mut(&attachment.parent) {
                    siblings.retain(|&child| child != id);
                }
            }
            removed += 1;
        }
        if removed > 0 {
            debug!("despawned {id:?} and {} dependents", removed - 1);
        }
        removed
    }

    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.bodies.contains(id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Body)> + '_ {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Body)> + '_ {
        self.bodies.iter_mut()
    }

    /// Ids of the children attached to `parent`, in spawn order.
    pub fn children_of(&self, parent: EntityId) -> &[EntityId] {
        self.children
            .get(&parent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Attachment ids ordered root-to-leaf, so within one kinematics pass a
    /// link is always posed after the link it hangs from. Ties break on id to
    /// keep the order deterministic.
    pub fn attachments_root_to_leaf(&self) -> Vec<EntityId> {
        let mut ordered: Vec<(usize, EntityId)> = self
            .bodies
            .iter()
            .filter(|(_, body)| body.attachment.is_some())
            .map(|(id, _)| (self.chain_depth(id), id))
            .collect();
        ordered.sort();
        ordered.into_iter().map(|(_, id)| id).collect()
    }

    fn chain_depth(&self, id: EntityId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(attachment) = self
            .bodies
            .get(current)
            .and_then(|body| body.attachment.as_ref())
        {
            depth += 1;
            assert!(
                depth <= self.bodies.len(),
                "attachment chain contains a cycle"
            );
            current = attachment.parent;
        }
        depth
    }
}
