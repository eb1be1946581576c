//! Behavior of caller-supplied policies.

use richtext_sanitizer::{sanitize_with_policy, Policy};

#[test]
fn widened_tag_allow_list_keeps_new_tags() {
    let mut policy = Policy::default();
    policy.allowed_tags.insert("u".to_string());
    policy.allowed_tags.insert("blockquote".to_string());

    assert_eq!(
        sanitize_with_policy("<blockquote><u>quoted</u></blockquote>", &policy),
        "<blockquote><u>quoted</u></blockquote>"
    );
}

#[test]
fn narrowed_tag_allow_list_unwraps_removed_tags() {
    let mut policy = Policy::default();
    policy.allowed_tags.remove("div");

    assert_eq!(
        sanitize_with_policy("<div><p>kept</p></div>", &policy),
        "<p>kept</p>"
    );
}

#[test]
fn extra_denylist_entry_drops_whole_subtree() {
    let mut policy = Policy::default();
    policy.dropped_tags.insert("div".to_string());

    assert_eq!(
        sanitize_with_policy("<p>before</p><div><p>gone</p></div><p>after</p>", &policy),
        "<p>before</p><p>after</p>"
    );
}

#[test]
fn denylist_wins_when_a_tag_is_in_both_sets() {
    let mut policy = Policy::default();
    policy.dropped_tags.insert("p".to_string());

    assert_eq!(sanitize_with_policy("<p>never</p>ok", &policy), "ok");
}

#[test]
fn custom_class_allow_list() {
    let mut policy = Policy::default();
    policy.allowed_classes.insert("badge".to_string());

    assert_eq!(
        sanitize_with_policy(r#"<span class="badge mt4 hype">New</span>"#, &policy),
        r#"<span class="badge mt4">New</span>"#
    );
}

#[test]
fn class_matching_is_case_sensitive() {
    let policy = Policy::default();
    assert_eq!(
        sanitize_with_policy(r#"<p class="MT4 mt4">x</p>"#, &policy),
        r#"<p class="mt4">x</p>"#
    );
}

#[test]
fn custom_scheme_list_controls_anchor_survival() {
    let policy = Policy {
        allowed_schemes: vec!["ftp".to_string()],
        ..Policy::default()
    };

    assert_eq!(
        sanitize_with_policy(r#"<a href="ftp://files.example/a">get</a>"#, &policy),
        r#"<a href="ftp://files.example/a" target="_blank" rel="noopener noreferrer">get</a>"#
    );
    assert_eq!(
        sanitize_with_policy(r#"<a href="https://web.example">web</a>"#, &policy),
        "web"
    );
}

#[test]
fn custom_link_target_and_rel() {
    let policy = Policy {
        link_target: "_self".to_string(),
        link_rel: "nofollow".to_string(),
        ..Policy::default()
    };

    assert_eq!(
        sanitize_with_policy(r#"<a href="https://example.com">x</a>"#, &policy),
        r#"<a href="https://example.com" target="_self" rel="nofollow">x</a>"#
    );
}

#[test]
fn policy_changes_do_not_leak_between_calls() {
    let mut widened = Policy::default();
    widened.allowed_tags.insert("u".to_string());

    assert_eq!(sanitize_with_policy("<u>x</u>", &widened), "<u>x</u>");
    // the default policy is untouched by the modified clone
    assert_eq!(richtext_sanitizer::sanitize("<u>x</u>"), "x");
}
