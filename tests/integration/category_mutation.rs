//! Scenario 6: editing an indexed item's categories after a build does not
//! force a rebuild, but subsequent classification still reflects the edit.

use crate::common::make_built_animal_index;
use noema::{DefaultTokenizer, Query};

#[test]
fn editing_categories_after_build_does_not_require_rebuild_but_is_visible_to_classify() {
    let mut index = make_built_animal_index(0.5);
    assert!(!index.needs_rebuild());

    // doc5 starts out as the lone Bird; reclassify it as a Dog document and
    // confirm classify picks up the new label without any build_index call.
    index
        .categories_for(&"doc5")
        .unwrap()
        .retain(|c| c != "Bird");
    index.categories_for(&"doc5").unwrap().push("Dog".to_string());
    assert!(!index.needs_rebuild());

    let winner = index
        .classify(Query::known("doc5"), 0.9, &DefaultTokenizer)
        .unwrap();
    assert_eq!(winner, Some("Dog".to_string()));
}
