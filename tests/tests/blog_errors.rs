//! Error scenarios: every failure aborts the whole operation and surfaces
//! as a single error with no partial data.

use fable_tests::prelude::*;

#[test]
fn test_author_not_found_yields_single_error() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    // WHEN: executing { author(id: 99) { firstName } }
    let result = session.execute(&Operation::query(
        "author",
        args(&[("id", Value::Int(99))]),
        selection(vec![leaf("firstName")]),
    ));

    // THEN: one error naming the offending id, no partial object
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Couldn't find author with id 99");
}

#[test]
fn test_unknown_root_field_is_rejected() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    // WHEN: resolving a root field the schema does not declare
    let result = session.execute(&Operation::query(
        "comments",
        Arguments::new(),
        selection(vec![leaf("id")]),
    ));

    // THEN: the registry miss names the operation kind and field
    assert_eq!(
        result.unwrap_err().to_string(),
        "No query root resolver registered for field comments"
    );
}

#[test]
fn test_unknown_nested_field_is_rejected() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    // WHEN: requesting a field that is neither stored nor registered
    let result = session.execute(&Operation::query(
        "posts",
        Arguments::new(),
        selection(vec![leaf("title"), leaf("comments")]),
    ));

    // THEN: resolution aborts; no partial object with just the title
    assert_eq!(
        result.unwrap_err().to_string(),
        "No resolver registered for Post.comments"
    );
}

#[test]
fn test_missing_mutation_argument_is_a_validation_error() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    // WHEN: dispatching upvotePost with no arguments
    let result = session.execute(&Operation::mutation(
        "upvotePost",
        Arguments::new(),
        selection(vec![leaf("votes")]),
    ));

    // THEN: validation fails before any state change
    assert_eq!(
        result.unwrap_err().to_string(),
        "Missing required argument: postId"
    );
}

#[test]
fn test_mistyped_mutation_argument_is_a_validation_error() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    // WHEN: dispatching upvotePost with a string postId
    let result = session.execute(&Operation::mutation(
        "upvotePost",
        args(&[("postId", Value::String("two".into()))]),
        selection(vec![leaf("votes")]),
    ));

    // THEN: the error names the argument and the kind mismatch
    assert_eq!(
        result.unwrap_err().to_string(),
        "Invalid argument postId: expected int, got string"
    );
}

#[test]
fn test_relationship_field_requires_nested_selection() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    // WHEN: requesting { posts { author } } without a nested selection
    let result = session.execute(&Operation::query(
        "posts",
        Arguments::new(),
        selection(vec![leaf("author")]),
    ));

    // THEN: shaping is rejected
    assert_eq!(
        result.unwrap_err().to_string(),
        "Field author on type Post resolves to an object and requires a nested selection"
    );
}
