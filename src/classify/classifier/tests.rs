use smol_str::SmolStr;

use super::*;

fn names(list: &[&str]) -> Vec<SmolStr> {
    list.iter().map(|n| SmolStr::new(n)).collect()
}

struct Fixture {
    stereotypes: Stereotypes,
    chain: Vec<SmolStr>,
    path: Vec<SmolStr>,
}

impl Fixture {
    fn new(tokens: &[&str], chain: &[&str], path: &[&str]) -> Self {
        Self {
            stereotypes: Stereotypes::from_tokens(tokens),
            chain: names(chain),
            path: names(path),
        }
    }

    fn facts(&self, nature: Nature) -> ClassFacts<'_> {
        ClassFacts {
            nature,
            name: self.chain.first().map(SmolStr::as_str).unwrap_or(""),
            stereotypes: &self.stereotypes,
            is_interface: false,
            is_enumeration: false,
            chain_names: &self.chain,
            package_path: &self.path,
        }
    }
}

// ============================================================
// CIM ladder
// ============================================================

#[test]
fn test_cim_stereotype_priority() {
    let f = Fixture::new(&["primitive"], &["Float"], &["TC57CIM"]);
    assert_eq!(classify_class(&f.facts(Nature::Cim)), ClassKind::Primitive);

    // primitive beats datatype when both are present
    let f = Fixture::new(&["datatype", "primitive"], &["Voltage"], &["TC57CIM"]);
    assert_eq!(classify_class(&f.facts(Nature::Cim)), ClassKind::Primitive);

    let f = Fixture::new(&["enumeration"], &["UnitSymbol"], &["TC57CIM"]);
    assert_eq!(classify_class(&f.facts(Nature::Cim)), ClassKind::Enumeration);

    let f = Fixture::new(&["compound"], &["StreetAddress"], &["TC57CIM"]);
    assert_eq!(classify_class(&f.facts(Nature::Cim)), ClassKind::Compound);
}

#[test]
fn test_cim_legacy_datatype_alias() {
    let f = Fixture::new(&["cimdatatype"], &["ActivePower"], &["TC57CIM"]);
    assert_eq!(classify_class(&f.facts(Nature::Cim)), ClassKind::Datatype);
}

#[test]
fn test_cim_root_vs_plain_class() {
    let root = Fixture::new(&[], &["IdentifiedObject"], &["TC57CIM"]);
    assert_eq!(classify_class(&root.facts(Nature::Cim)), ClassKind::RootClass);

    let plain = Fixture::new(&[], &["Breaker", "Switch", "IdentifiedObject"], &["TC57CIM"]);
    assert_eq!(classify_class(&plain.facts(Nature::Cim)), ClassKind::Class);
}

// ============================================================
// IEC 61850 strategies
// ============================================================

#[test]
fn test_61850_interface_marker_wins() {
    let fixture = Fixture::new(&["interface", "basic"], &["ITimeSource"], &["IEC61850"]);
    assert_eq!(classify_class(&fixture.facts(Nature::Iec61850)), ClassKind::Interface);

    let mut tool_flagged = Fixture::new(&[], &["ITimeSource"], &["IEC61850"]);
    tool_flagged.stereotypes = Stereotypes::new();
    let mut facts = tool_flagged.facts(Nature::Iec61850);
    facts.is_interface = true;
    assert_eq!(classify_class(&facts), ClassKind::Interface);
}

#[test]
fn test_61850_functions_subtree() {
    let f = Fixture::new(&[], &["PTRC_Behaviour"], &["IEC61850", "Functions", "Protection"]);
    assert_eq!(classify_class(&f.facts(Nature::Iec61850)), ClassKind::Function);
}

#[test]
fn test_61850_stereotype_combinations() {
    let cases: &[(&[&str], ClassKind)] = &[
        (&["enumeration", "packed"], ClassKind::PackedEnum),
        (&["enumeration", "abbreviations"], ClassKind::AbbrEnum),
        (&["enumeration", "cond"], ClassKind::CondEnum),
        (&["enumeration"], ClassKind::Enum),
        (&["packed"], ClassKind::PackedBasic),
        (&["structured"], ClassKind::Structured),
        (&["basic"], ClassKind::Basic),
    ];
    for (tokens, expected) in cases {
        let f = Fixture::new(tokens, &["SomeType"], &["IEC61850"]);
        assert_eq!(classify_class(&f.facts(Nature::Iec61850)), *expected, "{tokens:?}");
    }
}

#[test]
fn test_61850_tool_flagged_enumeration_without_stereotypes() {
    let fixture = Fixture::new(&[], &["CtlModels"], &["IEC61850"]);
    let mut facts = fixture.facts(Nature::Iec61850);
    facts.is_enumeration = true;
    assert_eq!(classify_class(&facts), ClassKind::Enum);
}

#[test]
fn test_61850_unknown_domain_stereotype() {
    let f = Fixture::new(&["mysterytoken"], &["Oddball"], &["IEC61850"]);
    assert_eq!(classify_class(&f.facts(Nature::Iec61850)), ClassKind::Unknown61850);
}

#[test]
fn test_61850_status_tokens_fall_through_to_inheritance() {
    // informative/deprecated alone never trigger the stereotype strategy
    let f = Fixture::new(&["informative"], &["MMXU", "DomainLN"], &["IEC61850"]);
    assert_eq!(classify_class(&f.facts(Nature::Iec61850)), ClassKind::Ln);
}

#[test]
fn test_61850_fallback_is_other() {
    let f = Fixture::new(&["informative", "deprecated"], &["Stray"], &["IEC61850"]);
    assert_eq!(classify_class(&f.facts(Nature::Iec61850)), ClassKind::Other);

    // version markers fall back too, just without the diagnostic
    let f = Fixture::new(&[], &["NsVersion"], &["IEC61850"]);
    assert_eq!(classify_class(&f.facts(Nature::Iec61850)), ClassKind::Other);
}

#[test]
fn test_classification_is_pure() {
    let f = Fixture::new(&["enumeration", "cond"], &["PresenceConditions"], &["IEC61850"]);
    let first = classify_class(&f.facts(Nature::Iec61850));
    let second = classify_class(&f.facts(Nature::Iec61850));
    assert_eq!(first, second);
    assert_eq!(first, ClassKind::CondEnum);
}

// ============================================================
// attribute derivation
// ============================================================

fn attr_facts(
    nature: Nature,
    container_kind: ClassKind,
    type_kind: Option<ClassKind>,
) -> AttributeFacts<'static> {
    AttributeFacts {
        nature,
        name: "attr",
        container_name: "Container",
        container_kind,
        type_kind,
    }
}

#[test]
fn test_cim_attribute_table() {
    let cases = [
        (ClassKind::Primitive, AttributeKind::Primitive),
        (ClassKind::Datatype, AttributeKind::Datatype),
        (ClassKind::Enumeration, AttributeKind::Enumerated),
        (ClassKind::Compound, AttributeKind::Compound),
        (ClassKind::Class, AttributeKind::Reference),
        (ClassKind::RootClass, AttributeKind::Reference),
    ];
    for (type_kind, expected) in cases {
        let facts = attr_facts(Nature::Cim, ClassKind::Class, Some(type_kind));
        assert_eq!(classify_attribute(&facts), expected);
    }
}

#[test]
fn test_literal_kinds_follow_container() {
    let cases = [
        (ClassKind::Enumeration, AttributeKind::Literal),
        (ClassKind::Enum, AttributeKind::Literal),
        (ClassKind::AbbrEnum, AttributeKind::AbbrLiteral),
        (ClassKind::CondEnum, AttributeKind::CondLiteral),
        (ClassKind::PackedEnum, AttributeKind::PackedLiteral),
    ];
    for (container, expected) in cases {
        let nature = container.nature();
        let facts = attr_facts(nature, container, None);
        assert_eq!(classify_attribute(&facts), expected);
    }
    // literal in a non-enumerated class is an anomaly, not an error
    let facts = attr_facts(Nature::Iec61850, ClassKind::Cdc, None);
    assert_eq!(classify_attribute(&facts), AttributeKind::Other);
}

#[test]
fn test_cdc_typed_attribute_depends_on_container() {
    let on_ln = attr_facts(Nature::Iec61850, ClassKind::Ln, Some(ClassKind::StatusCdc));
    assert_eq!(classify_attribute(&on_ln), AttributeKind::DataObject);

    let on_cdc = attr_facts(Nature::Iec61850, ClassKind::Cdc, Some(ClassKind::StatusCdc));
    assert_eq!(classify_attribute(&on_cdc), AttributeKind::SubDataObject);
}

#[test]
fn test_61850_attribute_table() {
    let cases = [
        (ClassKind::PrimitiveDa, AttributeKind::DataAttribute),
        (ClassKind::Fcda, AttributeKind::DataAttribute),
        (ClassKind::Basic, AttributeKind::BasicAttribute),
        (ClassKind::Structured, AttributeKind::BasicAttribute),
        (ClassKind::Enum, AttributeKind::EnumAttribute),
        (ClassKind::Interface, AttributeKind::Other),
    ];
    for (type_kind, expected) in cases {
        let facts = attr_facts(Nature::Iec61850, ClassKind::Cdc, Some(type_kind));
        assert_eq!(classify_attribute(&facts), expected, "{type_kind:?}");
    }
}

#[test]
fn test_cross_nature_typing_is_other() {
    let facts = attr_facts(Nature::Iec61850, ClassKind::Cdc, Some(ClassKind::Datatype));
    assert_eq!(classify_attribute(&facts), AttributeKind::Other);

    let facts = attr_facts(Nature::Cim, ClassKind::Class, Some(ClassKind::Cdc));
    assert_eq!(classify_attribute(&facts), AttributeKind::Other);
}
