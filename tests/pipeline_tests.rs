//! Integration tests for the enumeration pipeline.
//!
//! These tests run the standard pipeline end to end and check the
//! properties every generated descriptor must satisfy.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use lambdagen::native::NATIVE_TABLE;
use lambdagen::prelude::*;
use rstest::rstest;

static FULL: LazyLock<Generation> =
    LazyLock::new(|| generate(&GeneratorConfig::default()).unwrap());

fn by_name(name: &str) -> &'static LambdaDescriptor {
    FULL.descriptors()
        .iter()
        .find(|descriptor| descriptor.name() == Some(name))
        .unwrap_or_else(|| panic!("no descriptor named {name}"))
}

fn scoped(scope: EnumerationScope) -> Generation {
    generate(&GeneratorConfig::default().with_scope(scope)).unwrap()
}

// =============================================================================
// completeness and counts
// =============================================================================

#[rstest]
fn every_descriptor_is_complete() {
    for descriptor in FULL.descriptors() {
        assert!(descriptor.is_complete(), "{descriptor} is incomplete");
    }
}

#[rstest]
fn full_enumeration_counts() {
    let summary = FULL.summary();
    assert_eq!(summary.total, 1048);
    assert_eq!(summary.throwing, 524);
    assert_eq!(summary.native, NATIVE_TABLE.len());
    assert_eq!(summary.count(LambdaKind::Function), 774);
    assert_eq!(summary.count(LambdaKind::Consumer), 102);
    assert_eq!(summary.count(LambdaKind::Predicate), 96);
    assert_eq!(summary.count(LambdaKind::Operator), 54);
    assert_eq!(summary.count(LambdaKind::Supplier), 18);
    assert_eq!(summary.count(LambdaKind::Comparator), 2);
    assert_eq!(summary.count(LambdaKind::Runnable), 2);
}

#[rstest]
fn qualified_names_are_unique() {
    let names: HashSet<String> = FULL
        .descriptors()
        .iter()
        .filter_map(LambdaDescriptor::qualified_name)
        .collect();
    assert_eq!(names.len(), FULL.descriptors().len());
}

#[rstest]
fn cache_holds_every_descriptor_once() {
    let cache = FULL.cache();
    assert_eq!(cache.len(), FULL.descriptors().len());
    for descriptor in FULL.descriptors() {
        assert!(cache.contains(descriptor));
    }
}

#[rstest]
fn natives_are_flagged_and_cached() {
    let cache = FULL.cache();
    assert_eq!(cache.native_len(), NATIVE_TABLE.len());
    for native in cache.natives() {
        assert_eq!(native.native(), Some(true));
        assert!(cache.contains(native));
    }
    for descriptor in FULL.descriptors() {
        assert_eq!(descriptor.native() == Some(true), cache.is_native(descriptor));
    }
}

#[rstest]
fn every_table_entry_is_generated() {
    for entry in NATIVE_TABLE {
        let descriptor = by_name(entry.name);
        assert_eq!(descriptor.kind(), Some(entry.kind));
        assert_eq!(descriptor.arity(), Some(entry.arity));
        assert_eq!(descriptor.native_equivalent(), Some(entry));
    }
}

// =============================================================================
// structural invariants
// =============================================================================

#[rstest]
fn input_slots_follow_arity() {
    for descriptor in FULL.descriptors() {
        let arity = descriptor.arity().unwrap();
        assert_eq!(descriptor.inputs().len(), usize::from(arity), "{descriptor}");
        for slot in InputSlot::ALL {
            assert_eq!(
                descriptor.input(slot).is_some(),
                slot.position() <= arity,
                "{descriptor} {slot:?}"
            );
        }
    }
}

#[rstest]
fn kinds_force_their_types() {
    let int = TypeIdentity::Primitive(PrimitiveType::Int);
    let boolean = TypeIdentity::Primitive(PrimitiveType::Boolean);
    for descriptor in FULL.descriptors() {
        let return_type = descriptor.return_type().unwrap().identity();
        match descriptor.kind().unwrap() {
            LambdaKind::Comparator => {
                assert_eq!(descriptor.arity(), Some(2));
                assert_eq!(return_type, int);
            }
            LambdaKind::Consumer => assert_eq!(return_type, TypeIdentity::Void),
            LambdaKind::Predicate => assert_eq!(return_type, boolean),
            LambdaKind::Runnable => {
                assert_eq!(descriptor.arity(), Some(0));
                assert_eq!(return_type, TypeIdentity::Void);
            }
            LambdaKind::Supplier => assert_eq!(descriptor.arity(), Some(0)),
            LambdaKind::Function => assert_ne!(return_type, boolean),
            LambdaKind::Operator => {
                for input in descriptor.inputs() {
                    assert_eq!(input.identity(), return_type);
                }
            }
        }
    }
}

#[rstest]
fn primitive_inputs_never_mix() {
    for descriptor in FULL.descriptors() {
        let primitives: HashSet<PrimitiveType> = descriptor
            .inputs()
            .into_iter()
            .filter_map(TypeDescriptor::as_primitive)
            .collect();
        assert!(primitives.len() <= 1, "{descriptor}");
    }
}

#[rstest]
fn primitive_indices_count_primitive_inputs() {
    for descriptor in FULL.descriptors() {
        let mut expected = 0;
        for (slot, input) in InputSlot::ALL.into_iter().zip(descriptor.inputs()) {
            if input.is_primitive() {
                expected += 1;
                assert_eq!(input.index(), expected, "{descriptor}");
            } else {
                assert_eq!(input.index(), slot.position(), "{descriptor}");
            }
        }
    }
}

#[rstest]
fn method_suffix_agrees_with_return_type() {
    for descriptor in FULL.descriptors() {
        let method = descriptor.method_name().unwrap();
        let kind = descriptor.kind().unwrap();
        let typed = kind.has_typed_method() && classify::has_primitive_return(descriptor);
        assert_eq!(method.contains("As"), typed, "{descriptor} {method}");
        assert!(method.starts_with(kind.method_base()));
        assert_eq!(method.ends_with("Throws"), classify::is_throwing(descriptor));
    }
}

// =============================================================================
// throwing fan-out
// =============================================================================

#[rstest]
fn throwing_variants_come_in_pairs() {
    let descriptors = FULL.descriptors();
    for pair in descriptors.chunks(2) {
        let [plain, throwing] = pair else {
            panic!("odd number of descriptors");
        };
        assert_eq!(plain.throwing(), Some(false));
        assert_eq!(throwing.throwing(), Some(true));
        assert_eq!(plain.kind(), throwing.kind());
        assert_eq!(plain.inputs(), throwing.inputs());
        assert_eq!(plain.return_type(), throwing.return_type());
        assert_eq!(
            throwing.name().unwrap(),
            format!("Throwable{}", plain.name().unwrap())
        );
    }
}

#[rstest]
fn throwable_marker_follows_the_flag() {
    for descriptor in FULL.descriptors() {
        let name = descriptor.name().unwrap();
        assert_eq!(name.starts_with("Throwable"), classify::is_throwing(descriptor));
        assert_eq!(descriptor.throwable().is_some(), classify::is_throwing(descriptor));
        if classify::is_throwing(descriptor) {
            assert_eq!(descriptor.native(), Some(false));
            assert!(descriptor
                .type_parameters()
                .contains(&"X extends Throwable".to_owned()));
        }
    }
}

// =============================================================================
// operator detection
// =============================================================================

#[rstest]
fn same_primitive_binary_is_only_an_operator() {
    let int = TypeDescriptor::primitive(PrimitiveType::Int, 1);
    let matching: Vec<&LambdaDescriptor> = FULL
        .descriptors()
        .iter()
        .filter(|descriptor| {
            descriptor.arity() == Some(2)
                && descriptor.inputs().iter().all(|input| **input == int)
                && descriptor.return_type() == Some(&int)
        })
        .collect();
    assert_eq!(matching.len(), 2);
    assert!(matching.iter().all(|descriptor| classify::is_operator(descriptor)));
    assert_eq!(matching[0].name(), Some("IntBinaryOperator"));
    assert_eq!(matching[0].method_name(), Some("applyAsInt"));
    assert_eq!(matching[0].package(), Some("io.lambdagen.operator.binary"));
}

#[rstest]
fn generic_unary_function_survives_next_to_its_operator() {
    let function = by_name("Function");
    assert_eq!(function.first_input().unwrap().name(), "T");
    assert_eq!(function.return_type().unwrap().name(), "R");

    let operator = by_name("UnaryOperator");
    assert_eq!(operator.kind(), Some(LambdaKind::Operator));
    assert_eq!(operator.first_input().unwrap().name(), "T");
    assert_eq!(operator.return_type().unwrap().name(), "T");
    assert_eq!(operator.type_parameters(), ["T"]);

    let position = |name| {
        FULL.descriptors()
            .iter()
            .position(|descriptor| descriptor.name() == Some(name))
    };
    assert!(position("Function") < position("UnaryOperator"));
}

#[rstest]
fn boolean_operators_come_from_predicates() {
    let operator = by_name("BooleanBinaryOperator");
    assert_eq!(operator.method_name(), Some("applyAsBoolean"));
    assert!(FULL
        .descriptors()
        .iter()
        .filter(|descriptor| classify::is_predicate(descriptor))
        .all(|descriptor| !classify::is_self_returning(descriptor)));
}

// =============================================================================
// naming examples
// =============================================================================

#[rstest]
#[case("ObjIntConsumer", "accept", "io.lambdagen.consumer.bi.obj", Some("java.util.function.ObjIntConsumer"))]
#[case("ToIntBiFunction", "applyAsInt", "io.lambdagen.function.bi.to", Some("java.util.function.ToIntBiFunction"))]
#[case("LongToIntFunction", "applyAsInt", "io.lambdagen.function.conversion", Some("java.util.function.LongToIntFunction"))]
#[case("BooleanSupplier", "getAsBoolean", "io.lambdagen.supplier", Some("java.util.function.BooleanSupplier"))]
#[case("Comparator", "compare", "io.lambdagen.comparator", Some("java.util.Comparator"))]
#[case("Runnable", "run", "io.lambdagen.runnable", Some("java.lang.Runnable"))]
#[case("ObjBiIntToLongFunction", "applyAsLong", "io.lambdagen.function.tri.obj", None)]
#[case("BiObjDoubleConsumer", "accept", "io.lambdagen.consumer.tri.obj", None)]
#[case("TriPredicate", "test", "io.lambdagen.predicate.tri", None)]
#[case("ThrowableIntFunction", "applyThrows", "io.lambdagen.function", None)]
#[case("ThrowableDoubleTernaryOperator", "applyAsDoubleThrows", "io.lambdagen.operator.ternary", None)]
fn descriptor_examples(
    #[case] name: &str,
    #[case] method: &str,
    #[case] package: &str,
    #[case] native: Option<&str>,
) {
    let descriptor = by_name(name);
    assert_eq!(descriptor.method_name(), Some(method));
    assert_eq!(descriptor.package(), Some(package));
    assert_eq!(descriptor.native_qualified_name().as_deref(), native);
    assert_eq!(descriptor.native(), Some(native.is_some()));
}

#[rstest]
fn supplier_generic_return_is_t() {
    let supplier = by_name("Supplier");
    assert_eq!(supplier.return_type().unwrap().name(), "T");
    assert_eq!(supplier.type_parameters(), ["T"]);
}

#[rstest]
fn parameter_names_in_generated_descriptors() {
    assert_eq!(by_name("ObjBiIntFunction").parameter_names(), ["t", "value1", "value2"]);
    assert_eq!(by_name("BinaryOperator").parameter_names(), ["t1", "t2"]);
    assert_eq!(by_name("BiFunction").parameter_names(), ["t", "u"]);
    assert_eq!(by_name("IntPredicate").parameter_names(), ["value"]);
}

// =============================================================================
// scoped runs
// =============================================================================

#[rstest]
fn function_arity_one_returning_int() {
    let generation = scoped(
        EnumerationScope::unrestricted()
            .with_kinds([LambdaKind::Function])
            .with_arities([1])
            .with_return_types([TypeIdentity::Primitive(PrimitiveType::Int)]),
    );
    let names: HashSet<&str> = generation
        .descriptors()
        .iter()
        .filter_map(LambdaDescriptor::name)
        .collect();

    assert_eq!(generation.descriptors().len(), 16);
    assert!(names.contains("ToIntFunction"));
    assert!(names.contains("ThrowableToIntFunction"));
    assert!(names.contains("LongToIntFunction"));
    assert!(names.contains("ThrowableLongToIntFunction"));
    assert!(!names.contains("IntUnaryOperator"));
    for descriptor in generation.descriptors() {
        assert_eq!(descriptor.kind(), Some(LambdaKind::Function));
        assert!(descriptor.name().unwrap().ends_with("ToIntFunction"));
    }
}

#[rstest]
fn operator_scope_keeps_only_operators() {
    let generation = scoped(EnumerationScope::unrestricted().with_kinds([LambdaKind::Operator]));
    assert_eq!(generation.descriptors().len(), 54);
    assert!(generation
        .descriptors()
        .iter()
        .all(|descriptor| classify::is_operator(descriptor)));
}

#[rstest]
fn scoped_descriptors_equal_their_full_counterparts() {
    let generation = scoped(EnumerationScope::unrestricted().with_kinds([LambdaKind::Consumer]));
    assert_eq!(generation.descriptors().len(), 102);
    for descriptor in generation.descriptors() {
        assert!(FULL.cache().contains(descriptor));
    }
}

#[rstest]
fn base_package_prefixes_every_package() {
    let generation = generate(
        &GeneratorConfig::default()
            .with_base_package("org.example")
            .with_scope(EnumerationScope::unrestricted().with_kinds([LambdaKind::Supplier])),
    )
    .unwrap();
    assert!(generation
        .descriptors()
        .iter()
        .all(|descriptor| descriptor.package() == Some("org.example.supplier")));
}

// =============================================================================
// invalid configuration
// =============================================================================

#[rstest]
fn arity_beyond_maximum_is_rejected_before_running() {
    let config = GeneratorConfig::default()
        .with_scope(EnumerationScope::unrestricted().with_arities([9]));
    assert!(matches!(generate(&config), Err(ConfigError::InvalidArity(9))));
}

#[rstest]
fn empty_scope_list_is_rejected() {
    let config = GeneratorConfig::default()
        .with_scope(EnumerationScope::unrestricted().with_kinds(Vec::<LambdaKind>::new()));
    assert!(matches!(
        generate(&config),
        Err(ConfigError::EmptyScope { field: "kinds" })
    ));
}

#[rstest]
#[case("")]
#[case("io..lambdagen")]
#[case("1io.lambdagen")]
fn malformed_base_package_is_rejected(#[case] base_package: &str) {
    let config = GeneratorConfig::default().with_base_package(base_package);
    assert!(matches!(
        Pipeline::standard().run(&config),
        Err(ConfigError::InvalidBasePackage(rejected)) if rejected == base_package
    ));
}

// =============================================================================
// determinism
// =============================================================================

#[rstest]
fn repeated_runs_agree() {
    fn count(descriptors: &[LambdaDescriptor]) -> HashMap<&LambdaDescriptor, usize> {
        let mut counts = HashMap::new();
        for descriptor in descriptors {
            *counts.entry(descriptor).or_default() += 1;
        }
        counts
    }

    let again = generate(&GeneratorConfig::default()).unwrap();
    assert_eq!(again.descriptors(), FULL.descriptors());
    assert_eq!(count(again.descriptors()), count(FULL.descriptors()));
}

#[rstest]
fn runs_do_not_share_caches() {
    let first = scoped(EnumerationScope::unrestricted().with_kinds([LambdaKind::Runnable]));
    let second = scoped(EnumerationScope::unrestricted().with_kinds([LambdaKind::Comparator]));
    assert_eq!(first.cache().len(), 2);
    assert_eq!(second.cache().len(), 2);
    assert!(first.cache().iter().all(|descriptor| classify::is_runnable(descriptor)));
}
