//! Query scenarios over the seeded blog data.

use fable_core::Author;
use fable_tests::prelude::*;

#[test]
fn test_posts_with_nested_author() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    // WHEN: executing { posts { title author { lastName } } }
    let operation = Operation::query(
        "posts",
        Arguments::new(),
        selection(vec![leaf("title"), nested("author", vec![leaf("lastName")])]),
    );
    let value = session.execute(&operation).unwrap();

    // THEN: an order-preserved sequence of 4 objects comes back
    let items = value.as_list().expect("Expected a list of posts");
    assert_eq!(items.len(), 4);
    assert_eq!(
        items[0].field("title"),
        Some(&Value::String("Introduction to GraphQL".into()))
    );
    assert_eq!(
        items[0].field("author").unwrap().field("lastName"),
        Some(&Value::String("Coleman".into()))
    );

    // AND: each object holds exactly the requested fields, in request order
    for item in items {
        assert_eq!(item.field_names(), vec!["title", "author"]);
    }
}

#[test]
fn test_author_round_trips_requested_id() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    // WHEN: querying each existing author by id
    for raw in 1..=3 {
        let operation = Operation::query(
            "author",
            args(&[("id", Value::Int(raw))]),
            selection(vec![leaf("id")]),
        );
        let value = session.execute(&operation).unwrap();

        // THEN: the returned id equals the requested id
        assert_eq!(value.field("id"), Some(&Value::Int(raw)));
    }
}

#[test]
fn test_post_author_id_matches_author_id_field() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    // WHEN: requesting each post's stored authorId next to its resolved author
    let operation = Operation::query(
        "posts",
        Arguments::new(),
        selection(vec![
            leaf("authorId"),
            nested("author", vec![leaf("id")]),
        ]),
    );
    let value = session.execute(&operation).unwrap();

    // THEN: P.author.id == P.authorId for every post
    for item in value.as_list().unwrap() {
        assert_eq!(
            item.field("authorId"),
            item.field("author").unwrap().field("id")
        );
    }
}

#[test]
fn test_author_posts_consistent_with_full_listing() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    // WHEN: requesting author 2's posts and the full post listing
    let per_author = session
        .execute(&Operation::query(
            "author",
            args(&[("id", Value::Int(2))]),
            selection(vec![nested("posts", vec![leaf("id")])]),
        ))
        .unwrap();
    let full = session
        .execute(&Operation::query(
            "posts",
            Arguments::new(),
            selection(vec![leaf("id"), leaf("authorId")]),
        ))
        .unwrap();

    // THEN: the relation equals the listing filtered by authorId, in order
    let relation_ids: Vec<&Value> = per_author
        .field("posts")
        .unwrap()
        .as_list()
        .unwrap()
        .iter()
        .map(|post| post.field("id").unwrap())
        .collect();
    let filtered_ids: Vec<&Value> = full
        .as_list()
        .unwrap()
        .iter()
        .filter(|post| post.field("authorId") == Some(&Value::Int(2)))
        .map(|post| post.field("id").unwrap())
        .collect();
    assert_eq!(relation_ids, filtered_ids);
    assert_eq!(relation_ids, vec![&Value::Int(2), &Value::Int(3)]);
}

#[test]
fn test_author_without_posts_yields_empty_list() {
    // GIVEN: a store extended with an author who has written nothing
    let registry = build_registry().unwrap();
    let store = {
        let seeded = EntityStore::seeded();
        let mut authors = seeded.authors().to_vec();
        authors.push(Author::new(AuthorId::new(4), "Grace", "Hopper"));
        EntityStore::with_data(authors, seeded.posts().to_vec())
    };
    let mut session = Session::with_store(&registry, store);

    // WHEN: requesting that author's posts
    let value = session
        .execute(&Operation::query(
            "author",
            args(&[("id", Value::Int(4))]),
            selection(vec![leaf("firstName"), nested("posts", vec![leaf("id")])]),
        ))
        .unwrap();

    // THEN: the relation is an empty list, not an error and not null
    assert_eq!(value.field("posts"), Some(&Value::List(vec![])));
}

#[test]
fn test_repeated_queries_are_idempotent() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    let operation = Operation::query(
        "posts",
        Arguments::new(),
        selection(vec![
            leaf("id"),
            leaf("votes"),
            nested("author", vec![leaf("firstName"), leaf("lastName")]),
        ]),
    );

    // WHEN: executing the identical query twice with no mutation between
    let first = session.execute(&operation).unwrap();
    let second = session.execute(&operation).unwrap();

    // THEN: the results are identical
    assert_eq!(first, second);
}
