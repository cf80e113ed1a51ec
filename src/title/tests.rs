// Title module tests.

use super::*;
use proptest::prelude::*;

#[test]
fn test_normalize_title_decodes_entities() {
    assert_eq!(normalize_title("Fish &amp; Chips"), "Fish & Chips");
    assert_eq!(normalize_title("&lt;b&gt; tags"), "<b> tags");
    assert_eq!(normalize_title("Before &#8211; after"), "Before \u{2013} after");
    assert_eq!(normalize_title("caf&eacute;"), "café");
}

#[test]
fn test_normalize_title_trims_whitespace_and_newlines() {
    assert_eq!(normalize_title("\n    Test Page\n  "), "Test Page");
    assert_eq!(normalize_title("   "), "");
    assert_eq!(normalize_title(""), "");
}

#[test]
fn test_detect_separator_priority() {
    assert_eq!(detect_separator("a -- b - c"), Some(" -- "));
    assert_eq!(detect_separator("a - b | c"), Some(" - "));
    assert_eq!(detect_separator("a | b >> c"), Some(" | "));
    assert_eq!(detect_separator("a >> b : c"), Some(" >> "));
    assert_eq!(detect_separator("a : b"), Some(" : "));
    // Unicode separators win over ASCII ones
    assert_eq!(detect_separator("a \u{2013} b - c"), Some(" \u{2013} "));
    assert_eq!(detect_separator("a \u{2014} b \u{2013} c"), Some(" \u{2014} "));
    assert_eq!(detect_separator("a \u{00b7} b | c"), Some(" \u{00b7} "));
}

#[test]
fn test_detect_separator_requires_surrounding_spaces() {
    assert_eq!(detect_separator("Pre-war history"), None);
    assert_eq!(detect_separator("Pre\u{2013}war history"), None);
    assert_eq!(detect_separator("a\u{2014} b"), None);
    assert_eq!(detect_separator("XKeyscore: tool"), None);
    assert_eq!(detect_separator(""), None);
}

#[test]
fn test_score_part_full_match() {
    assert_eq!(score_part("NYTimes.com", "nytimes.com"), 1.0);
    assert_eq!(score_part("Stack Overflow", "stackoverflow.com"), 1.0);
    assert_eq!(score_part("Aeon", "aeon.co"), 1.0);
}

#[test]
fn test_score_part_partial_match() {
    // "wikipedia" matches, "the" is a stop word, "free" and "encyclopedia" don't match
    let score = score_part("Wikipedia, the free encyclopedia", "en.wikipedia.org");
    assert!((score - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_score_part_no_match() {
    assert_eq!(score_part("World news", "theguardian.com"), 0.0);
    assert_eq!(score_part("Graham Priest", "aeon.co"), 0.0);
}

#[test]
fn test_score_part_ignores_stop_words() {
    // "a" and "the" both occur in the site but must not count
    assert_eq!(score_part("the a of", "theguardian.com"), 0.0);
    assert_eq!(score_part("The Guardian", "theguardian.com"), 1.0);
}

#[test]
fn test_score_part_is_case_insensitive() {
    assert_eq!(score_part("STACK OVERFLOW", "stackoverflow.com"), 1.0);
    assert_eq!(
        score_part("NyTiMeS.CoM", "nytimes.com"),
        score_part("nytimes.com", "nytimes.com")
    );
}

#[test]
fn test_score_part_symbol_tokens_never_match() {
    assert_eq!(score_part("\u{25b6}", "example.com"), 0.0);
    // The symbol still counts towards the denominator
    assert_eq!(score_part("\u{25b6} YouTube", "youtube.com"), 0.5);
}

#[test]
fn test_score_part_empty_inputs() {
    assert_eq!(score_part("", "example.com"), 0.0);
    assert_eq!(score_part("Example", ""), 0.0);
}

#[test]
fn test_scenario_simple_title_unchanged() {
    assert_eq!(
        defancify("Learn Python", "learnpythonthehardway.org"),
        "Learn Python"
    );
}

#[test]
fn test_scenario_site_suffix_removed() {
    assert_eq!(
        defancify(
            "How to patch Python class using Mock library - Stack Overflow",
            "stackoverflow.com"
        ),
        "How to patch Python class using Mock library"
    );
}

#[test]
fn test_scenario_dotted_site_suffix_removed() {
    assert_eq!(
        defancify(
            "A Desert Spider With Astonishing Moves - NYTimes.com",
            "nytimes.com"
        ),
        "A Desert Spider With Astonishing Moves"
    );
}

#[test]
fn test_scenario_multiple_substantive_parts_kept() {
    assert_eq!(
        defancify(
            "The logic of Buddhist philosophy - Graham Priest - Aeon",
            "aeon.co"
        ),
        "The logic of Buddhist philosophy - Graham Priest"
    );
    assert_eq!(
        defancify(
            "unit testing - How to patch Python class using Mock library - Stack Overflow",
            "stackoverflow.com"
        ),
        "unit testing - How to patch Python class using Mock library"
    );
}

#[test]
fn test_scenario_pipe_separator_with_stop_words() {
    assert_eq!(
        defancify(
            "XKeyscore: NSA tool collects 'nearly everything a user does on the internet' | World news | theguardian.com",
            "theguardian.com"
        ),
        "XKeyscore: NSA tool collects 'nearly everything a user does on the internet' | World news"
    );
}

#[test]
fn test_scenario_symbol_part_is_not_a_site_reference() {
    // Both parts score zero, so the title must come back untouched.
    assert_eq!(
        defancify("\u{25b6} - Cool Video", "example.com"),
        "\u{25b6} - Cool Video"
    );
    assert_eq!(
        defancify("\u{25b6} Gangnam Style - YouTube", "youtube.com"),
        "\u{25b6} Gangnam Style"
    );
}

#[test]
fn test_fake_fancy_title_unchanged() {
    assert_eq!(
        defancify("Understand - a novelette by Ted Chiang", "infinityplus.co.uk"),
        "Understand - a novelette by Ted Chiang"
    );
}

#[test]
fn test_site_prefix_removed() {
    assert_eq!(
        defancify("Flubber - Wikipedia, the free encyclopedia", "en.wikipedia.org"),
        "Flubber"
    );
}

#[test]
fn test_unicode_separators() {
    assert_eq!(
        defancify("Der Artikel \u{2013} Spiegel Online", "spiegel.de"),
        "Der Artikel"
    );
    assert_eq!(
        defancify("Article \u{2014} The Atlantic", "theatlantic.com"),
        "Article"
    );
    assert_eq!(
        defancify(
            "Release notes \u{00b7} rust-lang/rust \u{00b7} GitHub",
            "github.com"
        ),
        "Release notes \u{00b7} rust-lang/rust"
    );
    // Dash without surrounding spaces is part of a word
    assert_eq!(
        defancify("Pre\u{2013}war history", "history.com"),
        "Pre\u{2013}war history"
    );
}

#[test]
fn test_all_parts_match_keeps_lowest_score() {
    assert_eq!(
        defancify("Ars Technica Reviews - Ars Technica", "arstechnica.com"),
        "Ars Technica Reviews"
    );
}

#[test]
fn test_all_parts_match_tie_breaks_on_text() {
    // Equal scores: the lexicographically smallest part wins, not the first one
    assert_eq!(defancify("Wiki Home - Home Wiki", "wiki-home.org"), "Home Wiki");
    assert_eq!(
        defancify("Guardian - The Guardian", "theguardian.com"),
        "Guardian"
    );
}

#[test]
fn test_repeated_separators_yield_short_parts() {
    let parts = score_parts("News |  | Example", " | ", "example.com");
    let texts: Vec<&str> = parts.iter().map(|p| p.text).collect();
    assert_eq!(texts, vec!["News", "", "Example"]);
    assert!(!parts[1].resembles_site());
    assert!(parts[2].resembles_site());

    assert_eq!(defancify("News |  | Example", "example.com"), "News | ");
}

#[test]
fn test_degenerate_inputs() {
    assert_eq!(defancify("", "example.com"), "");
    assert_eq!(defancify("", ""), "");
    assert_eq!(defancify("A - B", ""), "A - B");
}

proptest! {
    #[test]
    fn prop_no_separator_is_identity(title in "[a-zA-Z0-9 .,!?']{0,60}", site in "[a-z.]{0,30}") {
        prop_assume!(detect_separator(&title).is_none());
        prop_assert_eq!(defancify(&title, &site), title);
    }

    #[test]
    fn prop_unrelated_parts_are_kept_verbatim(
        parts in prop::collection::vec(prop::collection::vec("[a-p]{1,8}", 1..5), 2..5),
    ) {
        // Words drawn from a-p can never occur in the site below
        let title = parts
            .iter()
            .map(|words| words.join(" "))
            .collect::<Vec<_>>()
            .join(" - ");
        prop_assert_eq!(defancify(&title, "qqq.xx"), title);
    }

    #[test]
    fn prop_stop_words_never_score(
        words in prop::collection::vec(prop::sample::select(STOP_WORDS.to_vec()), 1..6),
        site in "[a-z.]{0,30}",
    ) {
        let part = words.join(" ");
        prop_assert_eq!(score_part(&part, &site), 0.0);
    }

    #[test]
    fn prop_scoring_ignores_case(part in "[a-zA-Z .]{0,40}", site in "[a-z.]{1,30}") {
        prop_assert_eq!(
            score_part(&part.to_uppercase(), &site),
            score_part(&part.to_lowercase(), &site)
        );
    }

    #[test]
    fn prop_result_is_never_longer_than_title(
        title in "[a-zA-Z ]{0,20}( - [a-zA-Z ]{0,20}){0,3}",
        site in "[a-z]{1,10}\\.(com|org)",
    ) {
        prop_assert!(defancify(&title, &site).len() <= title.len());
    }
}
