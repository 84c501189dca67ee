//! # Instance Table
//!
//! Owns the state of every live procedural instance. The host keeps only an
//! [`InstanceId`]; cleanup removes the entry, which drops the state exactly
//! once. Ids carry a generation so a stale id never reaches a newer instance
//! that reused its slot.

use polyplane_mesh::Capabilities;
use serde::{Deserialize, Serialize};

use crate::error::ProceduralError;
use crate::host::{MeshHandle, SceneHost};
use crate::params::ParamSource;
use crate::procedural::PolyPlane;

/// Handle to an instance stored in an [`InstanceTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId {
    index: u32,
    generation: u32,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    instance: Option<PolyPlane>,
}

/// Generational arena of procedural instances.
///
/// # Example
///
/// ```rust,ignore
/// let mut table = InstanceTable::new(Capabilities::FULL);
/// let id = table.init(&mut host, "plane1", &values)?;
/// assert_eq!(table.num_children(id), 1);
/// assert!(table.cleanup(id));
/// assert!(!table.cleanup(id));
/// ```
#[derive(Debug, Default)]
pub struct InstanceTable {
    caps: Capabilities,
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl InstanceTable {
    /// Creates an empty table for a host with `caps`.
    pub fn new(caps: Capabilities) -> Self {
        Self {
            caps,
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Initializes an instance for `node_name` and stores it.
    ///
    /// Nothing is stored if initialization fails.
    pub fn init<H, S>(
        &mut self,
        host: &mut H,
        node_name: &str,
        source: &S,
    ) -> Result<InstanceId, ProceduralError>
    where
        H: SceneHost + ?Sized,
        S: ParamSource + ?Sized,
    {
        let plane = PolyPlane::init(host, node_name, source, self.caps)?;
        Ok(self.insert(plane))
    }

    /// Stores an already initialized instance.
    pub fn insert(&mut self, plane: PolyPlane) -> InstanceId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.instance = Some(plane);
                InstanceId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    instance: Some(plane),
                });
                InstanceId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Returns the instance for `id`, if it is still alive.
    pub fn get(&self, id: InstanceId) -> Option<&PolyPlane> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.instance.as_ref())
    }

    /// Releases the instance for `id`.
    ///
    /// Returns `false` if `id` was already cleaned up or never existed.
    pub fn cleanup(&mut self, id: InstanceId) -> bool {
        self.remove(id).is_some()
    }

    /// Removes and returns the instance for `id`.
    pub fn remove(&mut self, id: InstanceId) -> Option<PolyPlane> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)?;
        let plane = slot.instance.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        log::debug!("released procedural instance for {}", plane.node_name());
        Some(plane)
    }

    /// Number of children of instance `id`; zero for a dead id.
    pub fn num_children(&self, id: InstanceId) -> usize {
        self.get(id).map_or(0, PolyPlane::num_children)
    }

    /// Child `index` of instance `id`.
    pub fn get_child(&self, id: InstanceId, index: usize) -> Option<MeshHandle> {
        self.get(id).and_then(|plane| plane.child(index))
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
