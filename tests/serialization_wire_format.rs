use gamification_insights::insights::catalog::Catalog;
use gamification_insights::insights::recommender::{self, RecommendationSet};
use gamification_insights::insights::types::ContentItem;

#[test]
fn catalog_items_use_wire_field_names() {
    let catalog = Catalog::builtin();
    let encoded = serde_json::to_value(catalog.items()).expect("serialize catalog");

    let first = &encoded[0];
    assert_eq!(first["type"], "quiz");
    assert_eq!(first["estimatedTime"], 15);
    assert_eq!(first["difficulty"], "easy");

    let decoded: Vec<ContentItem> = serde_json::from_value(encoded).expect("deserialize catalog");
    assert_eq!(decoded, catalog.items());
}

#[test]
fn recommendation_set_is_tagged_by_strategy() {
    let rules = RecommendationSet::Rules {
        recommendations: recommender::generate(4, 500),
    };
    let json = serde_json::to_value(&rules).expect("serialize rules");
    assert_eq!(json["strategy"], "rules");
    assert_eq!(json["recommendations"][0]["title"], "React Components Quiz");
    assert_eq!(json["recommendations"][1]["difficulty"], "intermediate");

    let catalog = RecommendationSet::Catalog { items: vec![] };
    let json = serde_json::to_value(&catalog).expect("serialize catalog set");
    assert_eq!(json["strategy"], "catalog");
    assert!(json["items"].as_array().unwrap().is_empty());
}
