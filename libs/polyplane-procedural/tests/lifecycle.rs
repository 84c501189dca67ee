mod common;

use common::{init_logging, RecordingHost};
use polyplane_mesh::{AttributeValue, Capabilities, MeshError, NodeRef};
use polyplane_procedural::{
    ArrayData, InstanceTable, ParamValue, ParameterValues, PolyPlane, ProceduralError,
};

const DISPLACEMENT_KEYS: [&str; 5] = [
    "disp_map",
    "disp_height",
    "disp_zero_value",
    "disp_padding",
    "disp_autobump",
];

fn grid(width: f32, divisions: i32) -> ParameterValues {
    ParameterValues::new()
        .with("width", ParamValue::Float(width))
        .with("divisions", ParamValue::Int(divisions))
}

#[test]
fn init_creates_named_child_under_node() {
    init_logging();
    let mut host = RecordingHost::new();
    let mut table = InstanceTable::new(Capabilities::FULL);

    let id = table.init(&mut host, "plane1", &ParameterValues::new()).unwrap();
    let handle = table.get_child(id, 0).unwrap();
    let mesh = host.mesh(handle);

    assert_eq!(mesh.name, "plane_shape");
    assert_eq!(mesh.parent, "plane1");
    assert_eq!(mesh.arrays["nsides"], ArrayData::Bytes(vec![4; 4]));
    assert_eq!(mesh.arrays["vidxs"].len(), 16);
    assert_eq!(mesh.arrays["vlist"].len(), 27);
    assert!(host.errors.is_empty());
}

#[test]
fn single_quad_arrays_reach_host() {
    let mut host = RecordingHost::new();
    let plane = PolyPlane::init(&mut host, "quad", &grid(2.0, 1), Capabilities::FULL).unwrap();
    let mesh = host.mesh(plane.mesh());

    assert_eq!(mesh.arrays["vidxs"], ArrayData::UInts(vec![0, 1, 3, 2]));
    assert_eq!(
        mesh.arrays["vlist"],
        ArrayData::Floats(vec![
            -1.0, 0.0, 1.0, //
            1.0, 0.0, 1.0, //
            -1.0, 0.0, -1.0, //
            1.0, 0.0, -1.0,
        ])
    );
    assert_eq!(plane.vertex_count(), 4);
}

#[test]
fn smoothing_and_subdivision_attributes_set() {
    let mut host = RecordingHost::new();
    let values = grid(10.0, 2)
        .with("subdiv_type", ParamValue::Enum(1))
        .with("subdiv_iterations", ParamValue::Byte(4));
    let plane = PolyPlane::init(&mut host, "plane", &values, Capabilities::FULL).unwrap();
    let attrs = &host.mesh(plane.mesh()).attributes;

    assert_eq!(attrs["smoothing"], AttributeValue::Bool(true));
    assert_eq!(attrs["subdiv_type"], AttributeValue::Int(1));
    assert_eq!(attrs["subdiv_iterations"], AttributeValue::Byte(4));
    assert_eq!(attrs["subdiv_adaptive_error"], AttributeValue::Float(0.0));
    assert_eq!(attrs["subdiv_adaptive_metric"], AttributeValue::Int(0));
    assert_eq!(attrs["subdiv_adaptive_space"], AttributeValue::Int(0));
}

#[test]
fn no_displacement_without_map() {
    let mut host = RecordingHost::new();
    let values = grid(10.0, 2).with("disp_height", ParamValue::Float(3.0));
    let plane = PolyPlane::init(&mut host, "plane", &values, Capabilities::FULL).unwrap();
    let attrs = &host.mesh(plane.mesh()).attributes;

    for key in DISPLACEMENT_KEYS {
        assert!(!attrs.contains_key(key), "unexpected {key}");
    }
}

#[test]
fn displacement_forwarded_with_map() {
    let mut host = RecordingHost::new();
    let values = grid(10.0, 2)
        .with("disp_map", ParamValue::Node(Some(NodeRef(12))))
        .with("disp_height", ParamValue::Float(0.3))
        .with("disp_zero_value", ParamValue::Float(0.5))
        .with("disp_padding", ParamValue::Float(0.05))
        .with("disp_autobump", ParamValue::Bool(true));
    let plane = PolyPlane::init(&mut host, "plane", &values, Capabilities::FULL).unwrap();
    let attrs = &host.mesh(plane.mesh()).attributes;

    assert_eq!(attrs["disp_map"], AttributeValue::Node(NodeRef(12)));
    assert_eq!(attrs["disp_height"], AttributeValue::Float(0.3));
    assert_eq!(attrs["disp_zero_value"], AttributeValue::Float(0.5));
    assert_eq!(attrs["disp_padding"], AttributeValue::Float(0.05));
    assert_eq!(attrs["disp_autobump"], AttributeValue::Bool(true));
}

#[test]
fn reduced_host_gets_reduced_attributes() {
    let mut host = RecordingHost::new();
    let values = grid(10.0, 2).with("disp_map", ParamValue::Node(Some(NodeRef(1))));
    let plane = PolyPlane::init(&mut host, "plane", &values, Capabilities::REDUCED).unwrap();
    let attrs = &host.mesh(plane.mesh()).attributes;

    let present = DISPLACEMENT_KEYS
        .iter()
        .filter(|k| attrs.contains_key(**k))
        .count();
    assert_eq!(present, 4);
    assert!(!attrs.contains_key("subdiv_adaptive_error"));
    assert!(!attrs.contains_key("subdiv_adaptive_metric"));
    assert!(!attrs.contains_key("subdiv_adaptive_space"));
}

#[test]
fn mesh_creation_failure_reported_without_child() {
    init_logging();
    let mut host = RecordingHost::failing();
    let mut table = InstanceTable::new(Capabilities::FULL);

    let err = table.init(&mut host, "broken", &ParameterValues::new()).unwrap_err();

    assert!(matches!(err, ProceduralError::MeshCreation { ref node, .. } if node == "broken"));
    assert_eq!(host.errors.len(), 1);
    assert_eq!(host.errors[0].0, "broken");
    assert!(host.errors[0].1.contains("failed to make polymesh node for broken"));
    assert!(host.meshes.is_empty());
    assert!(table.is_empty());
}

#[test]
fn invalid_divisions_rejected_before_mesh_creation() {
    let mut host = RecordingHost::new();
    let mut table = InstanceTable::new(Capabilities::FULL);

    let err = table.init(&mut host, "flat", &grid(10.0, 0)).unwrap_err();

    assert!(matches!(
        err,
        ProceduralError::Mesh(MeshError::InvalidParameter { name: "divisions", .. })
    ));
    assert!(host.meshes.is_empty());
    assert_eq!(host.errors.len(), 1);
    assert!(table.is_empty());
}

#[test]
fn mistyped_parameter_reported() {
    let mut host = RecordingHost::new();
    let values = ParameterValues::new().with("width", ParamValue::Int(3));

    let err = PolyPlane::init(&mut host, "typed", &values, Capabilities::FULL).unwrap_err();

    assert!(matches!(err, ProceduralError::ParameterType { name: "width", .. }));
    assert_eq!(host.errors[0].0, "typed");
    assert!(host.meshes.is_empty());
}

#[test]
fn single_child_per_instance() {
    let mut host = RecordingHost::new();
    let mut table = InstanceTable::new(Capabilities::FULL);
    let id = table.init(&mut host, "plane", &ParameterValues::new()).unwrap();

    assert_eq!(table.num_children(id), 1);
    assert!(table.get_child(id, 0).is_some());
    assert!(table.get_child(id, 1).is_none());
}

#[test]
fn cleanup_releases_exactly_once() {
    let mut host = RecordingHost::new();
    let mut table = InstanceTable::new(Capabilities::FULL);
    let id = table.init(&mut host, "plane", &ParameterValues::new()).unwrap();

    assert_eq!(table.len(), 1);
    assert!(table.cleanup(id));
    assert!(!table.cleanup(id));
    assert!(table.is_empty());
    assert_eq!(table.num_children(id), 0);
    assert!(table.get_child(id, 0).is_none());
}

#[test]
fn stale_id_does_not_alias_reused_slot() {
    let mut host = RecordingHost::new();
    let mut table = InstanceTable::new(Capabilities::FULL);

    let first = table.init(&mut host, "first", &ParameterValues::new()).unwrap();
    assert!(table.cleanup(first));
    let second = table.init(&mut host, "second", &ParameterValues::new()).unwrap();

    assert_ne!(first, second);
    assert!(table.get(first).is_none());
    assert_eq!(table.get(second).map(|p| p.node_name()), Some("second"));
    assert!(!table.cleanup(first));
    assert_eq!(table.len(), 1);
}

#[test]
fn repeated_init_is_deterministic() {
    let mut host = RecordingHost::new();
    let values = grid(7.3, 9).with("subdiv_type", ParamValue::Enum(2));

    let a = PolyPlane::init(&mut host, "a", &values, Capabilities::FULL).unwrap();
    let b = PolyPlane::init(&mut host, "b", &values, Capabilities::FULL).unwrap();

    let (ma, mb) = (host.mesh(a.mesh()), host.mesh(b.mesh()));
    assert_eq!(ma.arrays, mb.arrays);
    assert_eq!(ma.attributes, mb.attributes);
    assert_eq!(a.params(), b.params());
}
