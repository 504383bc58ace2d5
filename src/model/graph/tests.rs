use super::*;
use crate::classify::{AttributeKind, ClassKind};

fn uuid() -> Uuid {
    Uuid::new_v4()
}

fn builder_with_model(nature: Nature) -> (ModelBuilder, PackageId) {
    let mut builder = ModelBuilder::new();
    let model = builder.add_model(uuid(), "TestModel", nature).unwrap();
    (builder, model)
}

#[test]
fn test_package_kinds_follow_depth() {
    let (mut b, model) = builder_with_model(Nature::Cim);
    let top = b.add_package(uuid(), "Core", model, Stereotypes::new()).unwrap();
    let deep = b.add_package(uuid(), "Wires", top, Stereotypes::new()).unwrap();

    let graph = b.build();
    assert_eq!(graph.package(model).kind(), PackageKind::Model);
    assert_eq!(graph.package(top).kind(), PackageKind::Top);
    assert_eq!(graph.package(deep).kind(), PackageKind::Package);
    assert_eq!(graph.package(deep).nature(), Nature::Cim);
    assert_eq!(graph.package(top).child_packages(), &[deep]);
}

#[test]
fn test_empty_name_is_contract_violation() {
    let (mut b, model) = builder_with_model(Nature::Cim);
    let err = b.add_package(uuid(), "  ", model, Stereotypes::new()).unwrap_err();
    assert_eq!(err, ModelError::EmptyName { kind: "package" });
}

#[test]
fn test_informative_from_prefix_stereotype_and_ancestor() {
    let (mut b, model) = builder_with_model(Nature::Cim);
    let by_prefix = b.add_package(uuid(), "InfCore", model, Stereotypes::new()).unwrap();
    let by_token = b
        .add_package(uuid(), "Core", model, Stereotypes::from_tokens(["informative"]))
        .unwrap();
    let inherited = b.add_package(uuid(), "Wires", by_prefix, Stereotypes::new()).unwrap();
    let normative = b.add_package(uuid(), "Meas", model, Stereotypes::new()).unwrap();

    let graph = b.build();
    assert!(graph.package(by_prefix).is_informative());
    assert!(graph.package(by_token).is_informative());
    assert!(graph.package(inherited).is_informative());
    assert!(!graph.package(normative).is_informative());
}

#[test]
fn test_duplicate_uuid_returns_existing_entity() {
    let (mut b, model) = builder_with_model(Nature::Cim);
    let shared = uuid();
    let first = b.add_class(shared, model, "Breaker", Stereotypes::new(), ClassFlags::default()).unwrap();
    let second = b.add_class(shared, model, "Switch", Stereotypes::new(), ClassFlags::default()).unwrap();
    assert_eq!(first, second);

    // same UUID for a different entity kind is a contract violation
    let err = b.add_package(shared, "Core", model, Stereotypes::new()).unwrap_err();
    assert_eq!(err, ModelError::UuidKindMismatch { uuid: shared });

    let graph = b.build();
    assert_eq!(graph.class(first).name(), "Breaker");
    assert_eq!(graph.find_by_uuid(shared), Some(ModelEntity::Class(first)));
}

#[test]
fn test_generalization_is_symmetric_and_set_once() {
    let (mut b, model) = builder_with_model(Nature::Cim);
    let sup = b.add_class(uuid(), model, "Switch", Stereotypes::new(), ClassFlags::default()).unwrap();
    let sub = b.add_class(uuid(), model, "Breaker", Stereotypes::new(), ClassFlags::default()).unwrap();
    b.add_generalization(sub, sup).unwrap();
    // duplicate edge is a logged no-op
    b.add_generalization(sub, sup).unwrap();

    let err = b.add_generalization(sub, sub).unwrap_err();
    assert!(matches!(err, ModelError::SelfGeneralization { .. }));

    let graph = b.build();
    assert_eq!(graph.class(sub).superclasses(), &[sup]);
    assert_eq!(graph.class(sup).subclasses(), &[sub]);
}

#[test]
fn test_flattened_chain_covers_all_superclasses() {
    // diamond: D -> B, C; B -> A; C -> A
    let (mut b, model) = builder_with_model(Nature::Cim);
    let class = |b: &mut ModelBuilder, name: &str| {
        b.add_class(uuid(), model, name, Stereotypes::new(), ClassFlags::default()).unwrap()
    };
    let a = class(&mut b, "A");
    let bb = class(&mut b, "B");
    let c = class(&mut b, "C");
    let d = class(&mut b, "D");
    b.add_generalization(bb, a).unwrap();
    b.add_generalization(c, a).unwrap();
    b.add_generalization(d, bb).unwrap();
    b.add_generalization(d, c).unwrap();

    let graph = b.build();
    // depth-first, first-parent-first, each ancestor once
    assert_eq!(graph.class(d).flat_superclasses(), &[bb, a, c]);
    let chain: Vec<&str> = graph.class(d).chain_names().iter().map(|n| n.as_str()).collect();
    assert_eq!(chain, vec!["D", "B", "A", "C"]);
}

#[test]
fn test_freeze_classifies_classes_and_attributes() {
    let (mut b, model) = builder_with_model(Nature::Iec61850);
    let ln_root = b
        .add_class(uuid(), model, "DomainLN", Stereotypes::new(), ClassFlags::default())
        .unwrap();
    let cdc_root = b
        .add_class(uuid(), model, "BaseCDC", Stereotypes::new(), ClassFlags::default())
        .unwrap();
    let spc = b.add_class(uuid(), model, "SPC", Stereotypes::new(), ClassFlags::default()).unwrap();
    b.add_generalization(spc, cdc_root).unwrap();
    let mmxu = b.add_class(uuid(), model, "MMXU", Stereotypes::new(), ClassFlags::default()).unwrap();
    b.add_generalization(mmxu, ln_root).unwrap();

    let data_object = b
        .add_attribute(uuid(), mmxu, "Pos", Some(spc), Multiplicity::ONE, None, Stereotypes::new())
        .unwrap();
    let sub_data_object = b
        .add_attribute(uuid(), spc, "subPos", Some(spc), Multiplicity::OPT_ONE, None, Stereotypes::new())
        .unwrap();

    let graph = b.build();
    assert_eq!(graph.class(spc).kind(), ClassKind::Cdc);
    assert_eq!(graph.class(mmxu).kind(), ClassKind::Ln);
    assert_eq!(graph.attribute(data_object).kind(), AttributeKind::DataObject);
    assert_eq!(graph.attribute(sub_data_object).kind(), AttributeKind::SubDataObject);
}

#[test]
fn test_version_data_is_one_shot() {
    let (mut b, model) = builder_with_model(Nature::Iec61850);
    let data = VersionData {
        uri: "iec61850-7-4".into(),
        prefix: "ln".into(),
        version: "2007".into(),
        revision: "B".into(),
        date: "2020-01-01".into(),
        uml_version: "1.0".into(),
        fixes: vec![],
    };
    b.set_version_data(model, data.clone()).unwrap();
    let err = b.set_version_data(model, data).unwrap_err();
    assert!(matches!(err, ModelError::AlreadySet { field: "version data", .. }));
}

#[test]
fn test_package_dependency_self_edge_dropped() {
    let (mut b, model) = builder_with_model(Nature::Iec61850);
    let a = b.add_package(uuid(), "A", model, Stereotypes::new()).unwrap();
    let c = b.add_package(uuid(), "B", model, Stereotypes::new()).unwrap();
    b.add_package_dependency(a, a).unwrap();
    b.add_package_dependency(a, c).unwrap();
    b.add_package_dependency(a, c).unwrap();

    let graph = b.build();
    assert_eq!(graph.package(a).dependencies(), &[c]);
}

#[test]
fn test_null_model_is_created_once_per_nature() {
    let mut b = ModelBuilder::new();
    let first = b.null_model(Nature::Cim);
    let again = b.null_model(Nature::Cim);
    let other = b.null_model(Nature::Iec61850);
    assert_eq!(first, again);
    assert_ne!(first, other);

    let graph = b.build();
    assert_eq!(graph.package(first).kind(), PackageKind::NullModel);
}

#[test]
fn test_ancestors_and_path() {
    let (mut b, model) = builder_with_model(Nature::Cim);
    let top = b.add_package(uuid(), "Core", model, Stereotypes::new()).unwrap();
    let deep = b.add_package(uuid(), "Wires", top, Stereotypes::new()).unwrap();

    let graph = b.build();
    let path_names = graph.package_path(deep);
    let path: Vec<&str> = path_names.iter().map(|n| n.as_str()).collect();
    assert_eq!(path, vec!["TestModel", "Core", "Wires"]);
    let ancestors: Vec<PackageId> = graph.ancestors(deep).collect();
    assert_eq!(ancestors, vec![deep, top, model]);
}
