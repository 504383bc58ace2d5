//! Shared model fixtures for the integration tests.

#![allow(dead_code)]

use modelkind::model::{ClassFlags, ClassConstraint, Stereotypes};
use modelkind::{AttributeId, ClassId, ModelBuilder, ModelGraph, Multiplicity, Nature, PackageId};
use uuid::Uuid;

pub fn uid() -> Uuid {
    Uuid::new_v4()
}

pub fn st(tokens: &[&str]) -> Stereotypes {
    Stereotypes::from_tokens(tokens.iter().copied())
}

/// A small but structurally faithful IEC 61850 model: the meta-model roots,
/// one CDC ladder, one logical node, and a presence-condition enumeration.
pub struct IecFixture {
    pub graph: ModelGraph,
    pub model: PackageId,
    pub cdc_package: PackageId,
    /// `FLOAT32`, a primitive data attribute type
    pub float32: ClassId,
    /// `AnalogueValue`, a composed data attribute type
    pub analogue_value: ClassId,
    /// `MV`, an analogue CDC
    pub mv: ClassId,
    /// `MV.instMag`, covered by the `AtLeastOne(1)` constraint
    pub inst_mag: AttributeId,
    /// `MV.mag`, covered by the same constraint
    pub mag: AttributeId,
    /// `MV.units`, unconstrained with multiplicity 0..1
    pub units: AttributeId,
    /// `MV.t`, unconstrained with multiplicity 1..1
    pub timestamp: AttributeId,
    /// `MMXU`, a domain logical node
    pub mmxu: ClassId,
    /// `MMXU.TotW`, a data object
    pub tot_w: AttributeId,
    /// The presence-condition enumeration
    pub pc_enum: ClassId,
}

/// Build the IEC 61850 fixture graph.
pub fn iec_fixture() -> IecFixture {
    let mut b = ModelBuilder::new();
    let model = b.add_model(uid(), "IEC61850Domain", Nature::Iec61850).unwrap();
    let meta = b.add_package(uid(), "IEC61850_7_2", model, st(&[])).unwrap();
    let cdc_package = b.add_package(uid(), "IEC61850_7_3", model, st(&[])).unwrap();
    let ln_package = b.add_package(uid(), "IEC61850_7_4", model, st(&[])).unwrap();

    // data attribute types
    let base_primitive = b
        .add_class(uid(), meta, "BasePrimitiveDA", st(&[]), ClassFlags::default())
        .unwrap();
    let float32 = b
        .add_class(uid(), meta, "FLOAT32", st(&[]), ClassFlags::default())
        .unwrap();
    b.add_generalization(float32, base_primitive).unwrap();

    let base_composed = b
        .add_class(uid(), meta, "BaseComposedDA", st(&[]), ClassFlags::default())
        .unwrap();
    let analogue_value = b
        .add_class(uid(), meta, "AnalogueValue", st(&[]), ClassFlags::default())
        .unwrap();
    b.add_generalization(analogue_value, base_composed).unwrap();

    // one CDC ladder: BaseCDC <- AnalogueCDC <- MV
    let base_cdc = b
        .add_class(uid(), meta, "BaseCDC", st(&[]), ClassFlags::default())
        .unwrap();
    let analogue_cdc = b
        .add_class(uid(), meta, "AnalogueCDC", st(&[]), ClassFlags::default())
        .unwrap();
    b.add_generalization(analogue_cdc, base_cdc).unwrap();
    let mv = b
        .add_class(uid(), cdc_package, "MV", st(&[]), ClassFlags::default())
        .unwrap();
    b.add_generalization(mv, analogue_cdc).unwrap();

    let inst_mag = b
        .add_attribute(
            uid(),
            mv,
            "instMag",
            Some(analogue_value),
            Multiplicity::OPT_ONE,
            None,
            st(&[]),
        )
        .unwrap();
    let mag = b
        .add_attribute(uid(), mv, "mag", Some(analogue_value), Multiplicity::OPT_ONE, None, st(&[]))
        .unwrap();
    let units = b
        .add_attribute(uid(), mv, "units", Some(float32), Multiplicity::OPT_ONE, None, st(&[]))
        .unwrap();
    let timestamp = b
        .add_attribute(uid(), mv, "t", Some(float32), Multiplicity::ONE, None, st(&[]))
        .unwrap();
    b.add_class_constraint(
        mv,
        ClassConstraint::new(
            "AtLeastOne(1)",
            ["instMag", "mag"],
            "at least one of the elements of group 1 shall be present",
        ),
    )
    .unwrap();

    // one logical node: DomainLN <- MMXU
    let domain_ln = b
        .add_class(uid(), meta, "DomainLN", st(&[]), ClassFlags::default())
        .unwrap();
    let mmxu = b
        .add_class(uid(), ln_package, "MMXU", st(&[]), ClassFlags::default())
        .unwrap();
    b.add_generalization(mmxu, domain_ln).unwrap();
    let tot_w = b
        .add_attribute(uid(), mmxu, "TotW", Some(mv), Multiplicity::OPT_ONE, None, st(&[]))
        .unwrap();

    // the presence-condition enumeration and its literals
    let pc_enum = b
        .add_class(
            uid(),
            meta,
            "PresenceConditions",
            st(&["enumeration", "cond"]),
            ClassFlags::default(),
        )
        .unwrap();
    for literal in [
        "M",
        "O",
        "F",
        "na",
        "AtLeastOne(sibling)",
        "AtLeastOne(n)",
        "AtMostOne",
        "MFcond(n)",
        "MOcondID(n)",
    ] {
        b.add_literal(uid(), pc_enum, literal, st(&[])).unwrap();
    }

    let graph = b.build();
    IecFixture {
        graph,
        model,
        cdc_package,
        float32,
        analogue_value,
        mv,
        inst_mag,
        mag,
        units,
        timestamp,
        mmxu,
        tot_w,
        pc_enum,
    }
}
