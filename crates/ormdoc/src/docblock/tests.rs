use super::*;
use proptest::prelude::*;

const ARTICLE: &str = "<?php\n\nclass Article extends DataObject\n{\n    private static $db = [];\n}\n";

fn payload(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|&l| format!(" * {l}")).collect()
}

#[test]
fn insert_places_block_directly_before_declaration() {
    let block = DocBlock::new("Article");
    let next = block.apply(ARTICLE, &payload(&["@property string Title"]));

    let expected = "<?php\n\n/**\n * StartGeneratedWithOrmdoc\n * @property string Title\n * EndGeneratedWithOrmdoc\n */\nclass Article extends DataObject\n{\n    private static $db = [];\n}\n";
    assert_eq!(next, expected);
}

#[test]
fn apply_is_idempotent() {
    let block = DocBlock::new("Article");
    let p = payload(&["@property string Title", "@property int AuthorID"]);

    let once = block.apply(ARTICLE, &p);
    let twice = block.apply(&once, &p);
    assert_eq!(once, twice);
}

#[test]
fn replace_overwrites_the_whole_block() {
    let block = DocBlock::new("Article");
    let wide = payload(&["@property string Title", "@method Member Author()"]);
    let narrow = payload(&["@property string Title"]);

    // Re-running with a shrunken schema must truncate the old block.
    let annotated = block.apply(ARTICLE, &wide);
    let shrunk = block.apply(&annotated, &narrow);
    assert_eq!(shrunk, block.apply(ARTICLE, &narrow));
}

#[test]
fn strip_restores_original_content() {
    let block = DocBlock::new("Article");
    let annotated = block.apply(ARTICLE, &payload(&["@property string Title"]));

    assert_ne!(annotated, ARTICLE);
    assert_eq!(block.strip(&annotated), ARTICLE);
}

#[test]
fn empty_payload_is_a_no_op() {
    let block = DocBlock::new("Article");
    assert_eq!(block.apply(ARTICLE, &[]), ARTICLE);
}

#[test]
fn strip_on_unannotated_content_is_a_no_op() {
    let block = DocBlock::new("Article");
    assert_eq!(block.strip(ARTICLE), ARTICLE);
}

#[test]
fn missing_declaration_is_a_no_op() {
    let content = "<?php\n$article = new Article();\n";
    let block = DocBlock::new("Article");

    assert_eq!(block.apply(content, &payload(&["@property string Title"])), content);
}

#[test]
fn declaration_pattern_does_not_match_name_prefixes() {
    let content = "<?php\nclass ArticlePage extends Page\n{\n}\n";
    let block = DocBlock::new("Article");

    assert_eq!(block.apply(content, &payload(&["@property string Title"])), content);
}

#[test]
fn malformed_markers_are_left_untouched() {
    let content = format!(
        "<?php\n/**\n * {END_TAG}\n * {START_TAG}\n */\nclass Article extends DataObject\n{{\n}}\n"
    );
    let block = DocBlock::new("Article");

    assert_eq!(marker_state(&content), MarkerState::Malformed);
    assert_eq!(block.apply(&content, &payload(&["@property string Title"])), content);
    assert_eq!(block.strip(&content), content);
}

#[test]
fn unrelated_docblock_above_the_class_survives() {
    let content = "<?php\n/** Hand-written notes. */\nclass Article extends DataObject\n{\n}\n";
    let block = DocBlock::new("Article");
    let p = payload(&["@property string Title"]);

    let annotated = block.apply(content, &p);
    assert!(annotated.contains("Hand-written notes."));
    assert_eq!(block.strip(&annotated), content);
}

#[test]
fn multi_class_file_scopes_to_the_target_block() {
    let content = "<?php\n\nclass Article extends DataObject\n{\n}\n\nclass Comment extends DataObject\n{\n}\n";

    let article = DocBlock::new("Article");
    let comment = DocBlock::new("Comment");
    let both = comment.apply(
        &article.apply(content, &payload(&["@property string Title"])),
        &payload(&["@property string Body"]),
    );

    // Re-annotating Article must leave Comment's block alone.
    let updated = article.apply(&both, &payload(&["@property string Headline"]));
    assert!(updated.contains("@property string Headline"));
    assert!(!updated.contains("@property string Title"));
    assert!(updated.contains("@property string Body"));

    // Stripping Article must leave Comment annotated.
    let stripped = article.strip(&updated);
    assert!(!stripped.contains("@property string Headline"));
    assert!(stripped.contains("@property string Body"));

    // Stripping both restores the original file.
    assert_eq!(comment.strip(&stripped), content);
}

#[test]
fn strip_without_declaration_leaves_multi_block_files_alone() {
    let content = "<?php\n\nclass Comment extends DataObject\n{\n}\n\nclass Article extends DataObject\n{\n}\n";

    let article = DocBlock::new("Article");
    let both = DocBlock::new("Comment").apply(
        &article.apply(content, &payload(&["@property string Title"])),
        &payload(&["@property string Body"]),
    );

    // Article's declaration was renamed after annotation; its block can no
    // longer be located, and Comment's block must not be taken instead.
    let renamed = both.replace("class Article extends", "class NewsArticle extends");
    let stripped = article.strip(&renamed);

    assert_eq!(stripped, renamed);
    assert!(stripped.contains("@property string Title"));
    assert!(stripped.contains("@property string Body"));
}

#[test]
fn strip_without_declaration_reverts_a_sole_block() {
    let block = DocBlock::new("Article");
    let annotated = block.apply(ARTICLE, &payload(&["@property string Title"]));

    // Renaming the class orphans the block, but with only one block in the
    // file undo can still remove it.
    let renamed = annotated.replace("class Article extends", "class NewsArticle extends");
    let stripped = block.strip(&renamed);

    assert!(!stripped.contains(START_TAG));
    assert_eq!(stripped, ARTICLE.replace("class Article extends", "class NewsArticle extends"));
}

#[test]
fn marker_state_classification() {
    assert_eq!(marker_state("plain text"), MarkerState::Absent);

    let ok = format!("/**\n * {START_TAG}\n * {END_TAG}\n */\n");
    assert_eq!(marker_state(&ok), MarkerState::Present);

    let unbalanced = format!("/**\n * {START_TAG}\n */\n");
    assert_eq!(marker_state(&unbalanced), MarkerState::Malformed);

    let nested = format!(" * {START_TAG}\n * {START_TAG}\n * {END_TAG}\n * {END_TAG}\n");
    assert_eq!(marker_state(&nested), MarkerState::Malformed);
}

// Property coverage for the §idempotence/round-trip laws over generated
// files, class names, and payloads.

fn arb_class_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9]{0,12}"
}

// Leading file content: no asterisks, slashes, or capitals, so it can never
// contain a marker, a comment fence, or the class declaration.
fn arb_preamble() -> impl Strategy<Value = String> {
    "[a-z0-9 ;\n]{0,60}"
}

fn arb_payload() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        "[A-Za-z0-9@ |()\\[\\]]{1,30}".prop_map(|body| format!(" * {body}")),
        1..6,
    )
}

fn file_for(preamble: &str, class_name: &str) -> String {
    format!("<?php\n{preamble}\nclass {class_name} extends DataObject\n{{\n}}\n")
}

proptest! {
    #[test]
    fn prop_apply_is_idempotent(
        name in arb_class_name(),
        preamble in arb_preamble(),
        p in arb_payload(),
    ) {
        let content = file_for(&preamble, &name);
        let block = DocBlock::new(&name);

        let once = block.apply(&content, &p);
        prop_assert_eq!(&block.apply(&once, &p), &once);
    }

    #[test]
    fn prop_strip_after_apply_round_trips(
        name in arb_class_name(),
        preamble in arb_preamble(),
        p in arb_payload(),
    ) {
        let content = file_for(&preamble, &name);
        let block = DocBlock::new(&name);

        prop_assert_eq!(block.strip(&block.apply(&content, &p)), content);
    }

    #[test]
    fn prop_strip_on_unannotated_is_identity(
        name in arb_class_name(),
        preamble in arb_preamble(),
    ) {
        let content = file_for(&preamble, &name);
        prop_assert_eq!(DocBlock::new(&name).strip(&content), content);
    }

    #[test]
    fn prop_empty_payload_is_identity(
        name in arb_class_name(),
        preamble in arb_preamble(),
    ) {
        let content = file_for(&preamble, &name);
        prop_assert_eq!(DocBlock::new(&name).apply(&content, &[]), content);
    }
}
