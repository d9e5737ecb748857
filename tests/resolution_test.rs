//! Integration tests for query resolution through the public API.

use std::io::Write;

use serde_json::json;
use tagsieve::prelude::*;
use tagsieve::query::{Outcome, PassthroughReason, segmenter};
use tempfile::NamedTempFile;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn dictionary(value: serde_json::Value) -> TagDictionary {
    TagDictionary::from_json_value(&value).unwrap()
}

#[test]
fn test_alias_on_fused_unit_wins() {
    init_logging();
    let dict = dictionary(json!({
        "blue_eyes": {"tag": "blue_eyes", "aliases": ["blue-eyes"]}
    }));

    let resolution = SpaceQueryResolver::new().explain("blue eyes", &dict);
    assert_eq!(resolution.output, "blue-eyes");
    assert_eq!(resolution.candidates[0].score, 1);
    assert_eq!(resolution.candidates[1].score, 0);
}

#[test]
fn test_space_separated_alias_cannot_match() {
    init_logging();
    let dict = dictionary(json!({
        "blue_eyes": {"tag": "blue_eyes", "aliases": ["blue eyes"]}
    }));
    assert_eq!(resolve_query("blue eyes", &dict), "blue eyes");
}

#[test]
fn test_separate_form_wins_when_it_scores_higher() {
    init_logging();
    let dict = dictionary(json!({"red": {"tag": "red", "aliases": []}}));
    assert_eq!(resolve_query("red hat", &dict), "red hat");
}

#[test]
fn test_empty_query_passthrough() {
    init_logging();
    let dict = dictionary(json!({"red": {}}));
    assert_eq!(resolve_query("", &dict), "");
    assert_eq!(resolve_query_json("", "not even json").unwrap(), "");
}

#[test]
fn test_token_cap_passthrough() {
    init_logging();
    let dict = dictionary(json!({"a": {}, "b-c": {}}));

    let eleven = "a b c d e f g h i j k";
    assert_eq!(resolve_query(eleven, &dict), eleven);

    let twelve = "a b c d e f g h i j k l";
    assert_eq!(resolve_query(twelve, &dict), twelve);

    // Every grouping with "a" split off and "b-c" fused scores 2; the first
    // of them fuses the whole tail.
    let ten = "a   b c d e f g h i j";
    assert_eq!(resolve_query(ten, &dict), "a b-c d-e-f-g-h-i-j");
}

#[test]
fn test_full_width_space_stays_inside_token() {
    init_logging();
    let dict = dictionary(json!({"猫\u{3000}耳": {}, "猫-耳": {}}));
    let resolution = SpaceQueryResolver::new().explain("猫\u{3000}耳", &dict);

    assert_eq!(resolution.output, "猫\u{3000}耳");
    assert_eq!(resolution.candidates.len(), 1);
    assert_eq!(resolution.winner().unwrap().score, 1);
}

#[test]
fn test_no_match_passthrough() {
    init_logging();
    let dict = dictionary(json!({"red": {"aliases": ["crimson"]}}));
    let query = "  green   hat ";
    let resolution = SpaceQueryResolver::new().explain(query, &dict);

    assert_eq!(resolution.output, query);
    assert_eq!(
        resolution.outcome,
        Outcome::Passthrough(PassthroughReason::NoMatch)
    );
    assert!(resolution.candidates.iter().all(|c| c.score == 0));
}

#[test]
fn test_tie_break_prefers_earlier_candidate() {
    init_logging();
    // "a-b c" and "a b-c" both score 1; "a-b c" is generated first.
    let dict = dictionary(json!({"a-b": {}, "b-c": {}}));
    let resolution = SpaceQueryResolver::new().explain("a b c", &dict);

    assert_eq!(resolution.output, "a-b c");
    assert_eq!(
        resolution.outcome,
        Outcome::Resolved {
            candidate_index: 1,
            score: 1
        }
    );
    assert_eq!(resolution.candidates[2].score, 1);
}

#[test]
fn test_dictionary_order_does_not_matter() {
    init_logging();
    let forward: TagDictionary = vec![
        ("a-b".to_string(), TagEntry::new("a-b")),
        ("b-c".to_string(), TagEntry::new("b-c")),
    ]
    .into_iter()
    .collect();
    let backward: TagDictionary = vec![
        ("b-c".to_string(), TagEntry::new("b-c")),
        ("a-b".to_string(), TagEntry::new("a-b")),
    ]
    .into_iter()
    .collect();

    assert_eq!(resolve_query("a b c", &forward), resolve_query("a b c", &backward));
}

#[test]
fn test_modifier_preservation() {
    init_logging();
    let dict = dictionary(json!({"character": {}, "blue-eyes": {}}));
    assert_eq!(resolve_query("+character", &dict), "+character");
    assert_eq!(
        resolve_query("-character *blue eyes", &dict),
        "-character *blue-eyes"
    );
    assert_eq!(resolve_query("+-character", &dict), "+-character");
}

#[test]
fn test_alias_matches_count_per_entry() {
    init_logging();
    // "long-hair" is aliased by two entries and is itself a key: score 3,
    // beating "long" + "hair" which score 2.
    let dict = dictionary(json!({
        "long": {},
        "hair": {},
        "long-hair": {},
        "longhair": {"aliases": ["long-hair"]},
        "long_hair": {"aliases": ["long-hair", "long-hair"]},
    }));
    let resolution = SpaceQueryResolver::new().explain("long hair", &dict);
    assert_eq!(resolution.output, "long-hair");
    assert_eq!(resolution.winner().unwrap().score, 3);
}

#[test]
fn test_candidate_laws_through_public_api() {
    let tokens = ["one", "two", "three", "four"];
    let groupings: Vec<_> = segmenter::generate(&tokens).collect();
    assert_eq!(groupings.len(), 8);

    for grouping in &groupings {
        let rebuilt: Vec<&str> = grouping
            .units()
            .iter()
            .flat_map(|unit| unit.split(segmenter::FUSE_SEPARATOR))
            .collect();
        assert_eq!(rebuilt, tokens);
    }
}

#[test]
fn test_resolve_query_json_reuses_decoded_dictionary() {
    init_logging();
    let source = r#"{"blue_eyes": {"tag": "blue_eyes", "aliases": ["blue-eyes", 3]}}"#;

    assert_eq!(resolve_query_json("blue eyes", source).unwrap(), "blue-eyes");
    let first = DictionaryCache::global().get_or_decode(source).unwrap();
    let second = DictionaryCache::global().get_or_decode(source).unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));

    let err = resolve_query_json("blue eyes", "[]").unwrap_err();
    assert!(matches!(err, TagsieveError::Dictionary(_)));
}

#[test]
fn test_config_and_dictionary_from_files() {
    init_logging();
    let mut config_file = NamedTempFile::new().unwrap();
    write!(config_file, r#"{{"max_tokens": 3, "modifier_mode": "first_match"}}"#).unwrap();
    let mut dict_file = NamedTempFile::new().unwrap();
    write!(dict_file, r#"{{"+tag": {{}}, "red": {{}}}}"#).unwrap();

    let config = ResolverConfig::load_from_file(config_file.path()).unwrap();
    let dict = TagDictionary::load_from_file(dict_file.path()).unwrap();
    let resolver = SpaceQueryResolver::with_config(config).unwrap();

    assert_eq!(resolver.resolve("+-+tag", &dict), "+-+tag");
    assert!(!resolver.explain("+-+tag", &dict).is_passthrough());
    assert!(resolver.explain("red red red red", &dict).is_passthrough());
}

#[test]
fn test_resolution_is_serializable() {
    let dict = dictionary(json!({"red": {}}));
    let resolution = SpaceQueryResolver::new().explain("+red hat", &dict);
    let value = serde_json::to_value(&resolution).unwrap();

    assert_eq!(value["output"], "+red hat");
    assert_eq!(value["candidates"].as_array().unwrap().len(), 2);
    assert_eq!(value["candidates"][1]["units"][0]["modifier"], "Plus");
}
