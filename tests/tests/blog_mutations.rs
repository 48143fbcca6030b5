//! Mutation scenarios over the seeded blog data.

use fable_tests::prelude::*;

#[test]
fn test_upvote_returns_updated_post_with_author() {
    // GIVEN: a session over the seeded blog data (post 2: authorId 2, votes 3)
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    // WHEN: executing { upvotePost(postId: 2) { id votes author { firstName } } }
    let operation = Operation::mutation(
        "upvotePost",
        args(&[("postId", Value::Int(2))]),
        selection(vec![
            leaf("id"),
            leaf("votes"),
            nested("author", vec![leaf("firstName")]),
        ]),
    );
    let value = session.execute(&operation).unwrap();

    // THEN: the result reflects the applied increment
    assert_eq!(value.field("id"), Some(&Value::Int(2)));
    assert_eq!(value.field("votes"), Some(&Value::Int(4)));
    assert_eq!(
        value.field("author").unwrap().field("firstName"),
        Some(&Value::String("Sashko".into()))
    );
    assert_eq!(value.field_names(), vec!["id", "votes", "author"]);
}

#[test]
fn test_upvote_leaves_other_posts_unchanged() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    let listing = Operation::query(
        "posts",
        Arguments::new(),
        selection(vec![leaf("id"), leaf("votes")]),
    );
    let before = session.execute(&listing).unwrap();

    // WHEN: upvoting post 3
    session
        .execute(&Operation::mutation(
            "upvotePost",
            args(&[("postId", Value::Int(3))]),
            selection(vec![leaf("votes")]),
        ))
        .unwrap();

    // THEN: only post 3 changed, by exactly 1
    let after = session.execute(&listing).unwrap();
    for (b, a) in before
        .as_list()
        .unwrap()
        .iter()
        .zip(after.as_list().unwrap())
    {
        let before_votes = b.field("votes").unwrap().as_int().unwrap();
        let after_votes = a.field("votes").unwrap().as_int().unwrap();
        if b.field("id") == Some(&Value::Int(3)) {
            assert_eq!(after_votes, before_votes + 1);
        } else {
            assert_eq!(after_votes, before_votes);
        }
    }
}

#[test]
fn test_n_sequential_upvotes_add_exactly_n() {
    // GIVEN: a session over the seeded blog data (post 1 has 2 votes)
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    let operation = Operation::mutation(
        "upvotePost",
        args(&[("postId", Value::Int(1))]),
        selection(vec![leaf("votes")]),
    );

    // WHEN: upvoting the same post 5 times in sequence
    let mut last = Value::Null;
    for _ in 0..5 {
        last = session.execute(&operation).unwrap();
    }

    // THEN: votes increased by exactly 5
    assert_eq!(last.field("votes"), Some(&Value::Int(7)));
}

#[test]
fn test_failed_upvote_leaves_store_unmodified() {
    // GIVEN: a session over the seeded blog data
    let registry = build_registry().unwrap();
    let mut session = Session::new(&registry);

    let listing = Operation::query(
        "posts",
        Arguments::new(),
        selection(vec![leaf("id"), leaf("votes")]),
    );
    let before = session.execute(&listing).unwrap();

    // WHEN: upvoting a non-existent post
    let result = session.execute(&Operation::mutation(
        "upvotePost",
        args(&[("postId", Value::Int(999))]),
        selection(vec![leaf("votes")]),
    ));

    // THEN: the mutation fails with not-found AND nothing changed
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Couldn't find post with id 999");
    assert_eq!(session.execute(&listing).unwrap(), before);
}
