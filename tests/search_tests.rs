//! Integration tests for the search utilities over a full generation.

use std::sync::LazyLock;

use lambdagen::prelude::*;
use lambdagen::utils::search::{and_then_target, compose_target};
use rstest::rstest;

static FULL: LazyLock<Generation> =
    LazyLock::new(|| generate(&GeneratorConfig::default()).unwrap());

fn by_name(name: &str) -> &'static LambdaDescriptor {
    FULL.descriptors()
        .iter()
        .find(|descriptor| descriptor.name() == Some(name))
        .unwrap_or_else(|| panic!("no descriptor named {name}"))
}

fn primitive(primitive: PrimitiveType) -> TypeDescriptor {
    TypeDescriptor::primitive(primitive, 1)
}

fn returning(primitive: PrimitiveType) -> TypeDescriptor {
    TypeDescriptor::primitive(primitive, 0)
}

fn name(found: Option<&LambdaDescriptor>) -> Option<&str> {
    found.and_then(LambdaDescriptor::name)
}

// =============================================================================
// LambdaQuery
// =============================================================================

#[rstest]
#[case(LambdaQuery::new().kind(LambdaKind::Supplier).return_type(returning(PrimitiveType::Long)), "LongSupplier")]
#[case(LambdaQuery::new().kind(LambdaKind::Consumer).arity(2).second_input(primitive(PrimitiveType::Double)), "ObjDoubleConsumer")]
#[case(LambdaQuery::new().kind(LambdaKind::Predicate).arity(3).first_input(primitive(PrimitiveType::Char)), "TriCharPredicate")]
#[case(LambdaQuery::new().kind(LambdaKind::Operator).arity(2).return_type(TypeDescriptor::generic('T', 0)), "BinaryOperator")]
#[case(LambdaQuery::new().kind(LambdaKind::Runnable).throwing(true), "ThrowableRunnable")]
fn first_match_by_criteria(#[case] query: LambdaQuery, #[case] expected: &str) {
    let found = search::search(FULL.cache(), &query).unwrap();
    assert_eq!(name(found), Some(expected));
}

#[rstest]
fn prefer_native_returns_native_when_one_exists() {
    let query = LambdaQuery::new()
        .kind(LambdaKind::Function)
        .arity(1)
        .first_input(TypeDescriptor::generic('T', 1));

    let any = search::search(FULL.cache(), &query).unwrap().unwrap();
    assert_eq!(any.name(), Some("Function"));

    let natives = search::search_all(FULL.cache(), &query.clone().prefer_native(true)).unwrap();
    assert_eq!(natives.len(), 4);
    assert!(natives.iter().all(|descriptor| classify::is_native(descriptor)));

    let everything = search::search_all(FULL.cache(), &query).unwrap();
    assert_eq!(everything.len(), 16);
}

#[rstest]
fn prefer_native_falls_back_to_generated() {
    let query = LambdaQuery::new()
        .kind(LambdaKind::Function)
        .arity(3)
        .prefer_native(true);
    let found = search::search(FULL.cache(), &query).unwrap().unwrap();
    assert_eq!(found.native(), Some(false));
    assert_eq!(found.name(), Some("TriFunction"));
}

#[rstest]
fn miss_is_an_empty_result() {
    let query = LambdaQuery::new()
        .kind(LambdaKind::Function)
        .return_type(returning(PrimitiveType::Boolean));
    assert_eq!(search::search(FULL.cache(), &query), Ok(None));
    assert!(search::search_all(FULL.cache(), &query).unwrap().is_empty());
}

#[rstest]
fn invalid_arguments_fail_fast() {
    let query = LambdaQuery::new().kind(LambdaKind::Runnable).arity(1);
    assert_eq!(
        search::search(FULL.cache(), &query),
        Err(SearchError::ArityNotAdmitted {
            kind: LambdaKind::Runnable,
            arity: 1
        })
    );
    assert_eq!(
        search::search(FULL.cache(), &LambdaQuery::new().arity(7))
            .unwrap_err()
            .to_string(),
        "invalid arity 7: must be at most 3"
    );
}

// =============================================================================
// search_by_* helpers
// =============================================================================

#[rstest]
fn search_by_return_type_prefers_native() {
    let template = by_name("ToIntFunction");
    let found =
        search::search_by_return_type(FULL.cache(), template, returning(PrimitiveType::Long), true)
            .unwrap();
    assert_eq!(name(found), Some("ToLongFunction"));
    assert_eq!(found.and_then(LambdaDescriptor::native), Some(true));
}

#[rstest]
fn search_by_return_type_is_idempotent() {
    let template = by_name("IntFunction");
    let search = || {
        search::search_by_return_type(
            FULL.cache(),
            template,
            returning(PrimitiveType::Short),
            true,
        )
        .unwrap()
        .cloned()
    };
    let first = search();
    assert!(first.is_some());
    assert_eq!(first, search());
}

#[rstest]
fn search_by_first_input_type_keeps_the_rest() {
    let template = by_name("LongToIntFunction");
    let found = search::search_by_first_input_type(
        FULL.cache(),
        template,
        primitive(PrimitiveType::Double),
        true,
    )
    .unwrap();
    assert_eq!(name(found), Some("DoubleToIntFunction"));
}

// =============================================================================
// composition targets
// =============================================================================

#[rstest]
#[case("Function", returning(PrimitiveType::Int), Some("ToIntFunction"))]
#[case("IntUnaryOperator", returning(PrimitiveType::Long), Some("IntToLongFunction"))]
#[case("IntUnaryOperator", returning(PrimitiveType::Int), Some("IntUnaryOperator"))]
#[case("BinaryOperator", returning(PrimitiveType::Int), Some("ToIntBiFunction"))]
#[case("IntPredicate", TypeDescriptor::generic('R', 0), Some("IntFunction"))]
#[case("LongToIntFunction", returning(PrimitiveType::Boolean), Some("LongPredicate"))]
#[case("Supplier", returning(PrimitiveType::Int), Some("IntSupplier"))]
#[case("ThrowableIntFunction", returning(PrimitiveType::Long), Some("ThrowableIntToLongFunction"))]
#[case("IntConsumer", returning(PrimitiveType::Int), None)]
#[case("Comparator", returning(PrimitiveType::Int), None)]
fn and_then_targets(
    #[case] source: &str,
    #[case] return_type: TypeDescriptor,
    #[case] expected: Option<&str>,
) {
    let found = and_then_target(FULL.cache(), by_name(source), return_type).unwrap();
    assert_eq!(name(found), expected);
}

#[rstest]
#[case("IntFunction", TypeDescriptor::generic('T', 1), Some("ToIntFunction"))]
#[case("Function", primitive(PrimitiveType::Int), Some("IntFunction"))]
#[case("IntUnaryOperator", primitive(PrimitiveType::Long), Some("LongToIntFunction"))]
#[case("BiFunction", TypeDescriptor::generic('T', 1), Some("Function"))]
#[case("BooleanToIntFunction", primitive(PrimitiveType::Int), Some("IntPredicate"))]
#[case("ThrowableIntConsumer", primitive(PrimitiveType::Byte), Some("ThrowableByteToIntFunction"))]
#[case("Runnable", primitive(PrimitiveType::Int), None)]
fn compose_targets(
    #[case] source: &str,
    #[case] input: TypeDescriptor,
    #[case] expected: Option<&str>,
) {
    let found = compose_target(FULL.cache(), by_name(source), input).unwrap();
    assert_eq!(name(found), expected);
}

#[rstest]
fn composition_targets_prefer_natives() {
    let source = by_name("Function");
    let target = and_then_target(FULL.cache(), source, returning(PrimitiveType::Double))
        .unwrap()
        .unwrap();
    assert_eq!(
        target.native_qualified_name().as_deref(),
        Some("java.util.function.ToDoubleFunction")
    );
}
