//! Recording host used by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use polyplane_mesh::AttributeValue;
use polyplane_procedural::{ArrayData, HostError, MeshHandle, SceneHost};

#[derive(Debug, Default)]
pub struct RecordedMesh {
    pub name: String,
    pub parent: String,
    pub arrays: BTreeMap<&'static str, ArrayData>,
    pub attributes: BTreeMap<&'static str, AttributeValue>,
}

/// In-memory host that records every call.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub meshes: BTreeMap<u64, RecordedMesh>,
    pub errors: Vec<(String, String)>,
    pub fail_creation: bool,
    next_handle: u64,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_creation: true,
            ..Self::default()
        }
    }

    pub fn mesh(&self, handle: MeshHandle) -> &RecordedMesh {
        &self.meshes[&handle.0]
    }
}

impl SceneHost for RecordingHost {
    fn create_polymesh(&mut self, name: &str, parent: &str) -> Result<MeshHandle, HostError> {
        if self.fail_creation {
            return Err(HostError::new("node creation refused"));
        }
        self.next_handle += 1;
        self.meshes.insert(
            self.next_handle,
            RecordedMesh {
                name: name.to_string(),
                parent: parent.to_string(),
                ..RecordedMesh::default()
            },
        );
        Ok(MeshHandle(self.next_handle))
    }

    fn set_array(&mut self, mesh: MeshHandle, name: &'static str, data: ArrayData) {
        if let Some(recorded) = self.meshes.get_mut(&mesh.0) {
            recorded.arrays.insert(name, data);
        }
    }

    fn set_attribute(&mut self, mesh: MeshHandle, name: &'static str, value: AttributeValue) {
        if let Some(recorded) = self.meshes.get_mut(&mesh.0) {
            recorded.attributes.insert(name, value);
        }
    }

    fn report_error(&mut self, node: &str, message: &str) {
        self.errors.push((node.to_string(), message.to_string()));
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
