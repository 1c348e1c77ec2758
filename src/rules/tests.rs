use pretty_assertions::assert_eq;

use crate::rules::{self, CATALOG};
use crate::{Engine, RuleFlags};

/// Run `input` through an engine whose only active rule is `name`.
fn parse_with(name: &str, input: &str) -> String {
    let mut engine = Engine::new();
    engine.only([name]);
    assert_eq!(engine.rule_names(), vec![name]);
    engine.parse(input)
}

#[test]
fn catalog_has_seventeen_rules_in_fixed_order() {
    assert_eq!(
        rules::available_rule_names(),
        vec![
            "bold",
            "italic",
            "underLine",
            "lineThrough",
            "fontSize",
            "fontColor",
            "center",
            "quote",
            "namedQuote",
            "link",
            "namedLink",
            "image",
            "orderedList",
            "unorderedList",
            "listItem",
            "code",
            "youtube",
        ]
    );
}

#[test]
fn every_catalog_pattern_compiles() {
    for def in CATALOG {
        let rule = def.compile().unwrap_or_else(|err| panic!("{}: {err}", def.name));
        assert_eq!(rule.name(), def.name);
    }
    assert_eq!(rules::builtin_rules().len(), CATALOG.len());
}

#[test]
fn only_list_wrappers_span_lines() {
    let spanning: Vec<&str> =
        CATALOG.iter().filter(|def| def.flags.contains(RuleFlags::DOT_MATCHES_NEW_LINE)).map(|def| def.name).collect();
    assert_eq!(spanning, vec!["orderedList", "unorderedList"]);
}

#[test]
fn single_rule_examples() {
    // (rule, input, expected)
    let cases: Vec<(&str, &str, &str)> = vec![
        ("bold", "foo[b]bar[/b]baz", "foo<strong>bar</strong>baz"),
        ("italic", "foo[i]bar[/i]baz", "foo<em>bar</em>baz"),
        ("underLine", "foo[u]bar[/u]baz", "foo<u>bar</u>baz"),
        ("lineThrough", "foo[s]bar[/s]baz", "foo<strike>bar</strike>baz"),
        ("fontSize", "foo[size=6]bar[/size]baz", r#"foo<font size="6">bar</font>baz"#),
        ("fontColor", "foo[color=#ff0000]bar[/color]baz", r##"foo<font color="#ff0000">bar</font>baz"##),
        ("fontColor", "foo[color=#eee]bar[/color]baz", r##"foo<font color="#eee">bar</font>baz"##),
        ("center", "foo[center]bar[/center]baz", r#"foo<div style="text-align:center;">bar</div>baz"#),
        ("quote", "foo[quote]bar[/quote]baz", "foo<blockquote>bar</blockquote>baz"),
        ("namedQuote", "[quote=golonka]foobar[/quote]", "<blockquote><small>golonka</small>foobar</blockquote>"),
        (
            "link",
            "[url]http://www.aftonbladet.se[/url]",
            r#"<a href="http://www.aftonbladet.se">http://www.aftonbladet.se</a>"#,
        ),
        ("namedLink", "[url=http://www.example.com]aftonbladet[/url]", r#"<a href="http://www.example.com">aftonbladet</a>"#),
        ("image", "[img]http://example.com/images/logo.png[/img]", r#"<img src="http://example.com/images/logo.png">"#),
        ("orderedList", "[ol][/ol]", "<ol></ol>"),
        ("unorderedList", "[ul][/ul]", "<ul></ul>"),
        ("listItem", "[*]Item 1", "<li>Item 1</li>"),
        ("code", "[code]<?php echo 'Hello World'; ?>[/code]", "<code><?php echo 'Hello World'; ?></code>"),
        (
            "youtube",
            "[youtube]Nizq4RnsJJo[/youtube]",
            r#"<iframe width="560" height="315" src="//www.youtube.com/embed/Nizq4RnsJJo" frameborder="0" allowfullscreen></iframe>"#,
        ),
    ];

    for (name, input, expected) in cases {
        assert_eq!(parse_with(name, input), expected, "rule {name} on {input:?}");
    }
}

#[test]
fn font_size_accepts_only_one_through_seven() {
    for size in 1..=7 {
        let input = format!("[size={size}]x[/size]");
        assert_eq!(parse_with("fontSize", &input), format!(r#"<font size="{size}">x</font>"#));
    }
    for input in ["[size=0]x[/size]", "[size=8]x[/size]", "[size=12]x[/size]", "[size=]x[/size]"] {
        assert_eq!(parse_with("fontSize", input), input);
    }
}

#[test]
fn font_color_needs_three_or_six_hex_digits() {
    assert_eq!(parse_with("fontColor", "[color=#ABC]x[/color]"), r##"<font color="#ABC">x</font>"##);
    assert_eq!(parse_with("fontColor", "[color=#a1B2c3]x[/color]"), r##"<font color="#a1B2c3">x</font>"##);

    for input in ["[color=red]x[/color]", "[color=#ff]x[/color]", "[color=#ffff]x[/color]", "[color=#ggg]x[/color]"] {
        assert_eq!(parse_with("fontColor", input), input);
    }
}

#[test]
fn list_wrappers_span_lines_but_items_stop_at_line_end() {
    let input = "[ul]\n[*]one\n[*]two\n[/ul]";
    assert_eq!(parse_with("unorderedList", input), "<ul>\n[*]one\n[*]two\n</ul>");
    assert_eq!(parse_with("listItem", input), "[ul]\n<li>one</li>\n<li>two</li>\n[/ul]");

    // Without the list flag the inline rules never cross a newline.
    assert_eq!(parse_with("bold", "[b]one\ntwo[/b]"), "[b]one\ntwo[/b]");
}

#[test]
fn captures_are_greedy_within_a_line() {
    assert_eq!(parse_with("bold", "[b]a[/b] and [b]b[/b]"), "<strong>a[/b] and [b]b</strong>");
    assert_eq!(
        parse_with("bold", "[b]a[/b]\n[b]b[/b]"),
        "<strong>a</strong>\n<strong>b</strong>"
    );
}

#[test]
fn full_document_converts_every_tag() {
    let input = "
            [b]bold[/b][i]italic[/i][u]underline[/u][s]line through[/s][size=6]size[/size]
            [color=#eee]color[/color][center]centered text[/center][quote]quote[/quote]
            [quote=golonka]quote[/quote][url]http://www.example.com[/url]
            [url=http://www.example.com]example.com[/url][img]http://example.com/logo.png[/img]
            [ol]
                [*]Item 1
                [*]Item 2
                [*]Item 3
            [/ol]
            [code]<?php echo 'Hello World'; ?>[/code]
            [youtube]Nizq4RnsJJo[/youtube]
            [ul]
                [*]Item 1
                [*]Item 2
                [*]Item 3
            [/ul]
        ";

    let expected = r##"
            <strong>bold</strong><em>italic</em><u>underline</u><strike>line through</strike><font size="6">size</font>
            <font color="#eee">color</font><div style="text-align:center;">centered text</div><blockquote>quote</blockquote>
            <blockquote><small>golonka</small>quote</blockquote><a href="http://www.example.com">http://www.example.com</a>
            <a href="http://www.example.com">example.com</a><img src="http://example.com/logo.png">
            <ol>
                <li>Item 1</li>
                <li>Item 2</li>
                <li>Item 3</li>
            </ol>
            <code><?php echo 'Hello World'; ?></code>
            <iframe width="560" height="315" src="//www.youtube.com/embed/Nizq4RnsJJo" frameborder="0" allowfullscreen></iframe>
            <ul>
                <li>Item 1</li>
                <li>Item 2</li>
                <li>Item 3</li>
            </ul>
        "##;

    let output = Engine::new().parse(input);
    assert_eq!(output, expected);
    assert!(!output.contains("[/"), "unconverted closing tag in {output}");
}
