use heritage_core::{
    search_members, FamilyStore, Generation, Person, SearchQuery,
};

fn person(id: u32, name: &str) -> Person {
    Person {
        id,
        name: name.to_string(),
        birthday: "January 1, 1970".to_string(),
        email: "x@email.com".to_string(),
        phone: "+1 555-0000".to_string(),
        generation: Generation::Parent,
        spouse: None,
        parents: None,
        children: None,
    }
}

fn wilson_store() -> FamilyStore {
    let mut james = person(1, "James Wilson");
    james.spouse = Some(2);
    james.children = Some(vec![5]);
    let mut mary = person(2, "Mary Wilson");
    mary.spouse = Some(1);
    mary.children = Some(vec![5]);
    let mut robert = person(5, "Robert Wilson");
    robert.parents = Some(vec![1, 2]);
    FamilyStore::new(vec![james, mary, robert]).unwrap()
}

#[test]
fn every_casing_of_a_name_substring_matches() {
    let store = wilson_store();
    for needle in ["wilson", "WILSON", "WiLsOn", "ilso"] {
        let hits = search_members(&store, &SearchQuery::new(needle));
        assert_eq!(hits.len(), 3, "query `{needle}` should match all three");
    }
}

#[test]
fn blank_queries_return_empty_not_everything() {
    let store = wilson_store();
    assert!(search_members(&store, &SearchQuery::new("")).is_empty());
    assert!(search_members(&store, &SearchQuery::new("   ")).is_empty());
}

#[test]
fn repeated_queries_are_idempotent() {
    let store = wilson_store();
    let query = SearchQuery::new("wilson");
    let first: Vec<u32> = search_members(&store, &query).iter().map(|p| p.id).collect();
    let second: Vec<u32> = search_members(&store, &query).iter().map(|p| p.id).collect();
    assert_eq!(first, second);
}

#[test]
fn hits_come_back_in_stored_order() {
    let store = wilson_store();
    let ids: Vec<u32> = search_members(&store, &SearchQuery::new("wilson"))
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, [1, 2, 5]);
}

#[test]
fn no_match_is_an_empty_sequence() {
    let store = wilson_store();
    assert!(search_members(&store, &SearchQuery::new("johnson")).is_empty());
}

#[test]
fn surrounding_whitespace_is_part_of_the_needle() {
    // Trimming only decides blank-vs-not; a padded query has to appear
    // verbatim in the name, and "  mary  " never does.
    let store = wilson_store();
    assert!(search_members(&store, &SearchQuery::new("  mary  ")).is_empty());

    let hits = search_members(&store, &SearchQuery::new("mary"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

#[test]
fn interior_whitespace_still_matches_across_name_parts() {
    let store = wilson_store();
    let hits = search_members(&store, &SearchQuery::new("james w"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}
