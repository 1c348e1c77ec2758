//! The built-in rule table.
//!
//! Order matters: rules run top to bottom, and `only`/`except` always
//! report their selection in this order. Captures are greedy and `.` stops at
//! a newline, except for the two list rules which span lines.

use crate::{RuleDef, RuleFlags};

pub(crate) const CATALOG: &[RuleDef] = &[
    rule! {
        name: "bold",
        pattern: r"\[b\](.*)\[/b\]",
        replace: "<strong>${1}</strong>",
    },
    rule! {
        name: "italic",
        pattern: r"\[i\](.*)\[/i\]",
        replace: "<em>${1}</em>",
    },
    rule! {
        name: "underLine",
        pattern: r"\[u\](.*)\[/u\]",
        replace: "<u>${1}</u>",
    },
    rule! {
        name: "lineThrough",
        pattern: r"\[s\](.*)\[/s\]",
        replace: "<strike>${1}</strike>",
    },
    rule! {
        name: "fontSize",
        pattern: r"\[size=([1-7])\](.*)\[/size\]",
        replace: r#"<font size="${1}">${2}</font>"#,
    },
    rule! {
        name: "fontColor",
        pattern: r"\[color=(#[A-f0-9]{6}|#[A-f0-9]{3})\](.*)\[/color\]",
        replace: r#"<font color="${1}">${2}</font>"#,
    },
    rule! {
        name: "center",
        pattern: r"\[center\](.*)\[/center\]",
        replace: r#"<div style="text-align:center;">${1}</div>"#,
    },
    rule! {
        name: "quote",
        pattern: r"\[quote\](.*)\[/quote\]",
        replace: "<blockquote>${1}</blockquote>",
    },
    rule! {
        name: "namedQuote",
        pattern: r"\[quote=(.*)\](.*)\[/quote\]",
        replace: "<blockquote><small>${1}</small>${2}</blockquote>",
    },
    rule! {
        name: "link",
        pattern: r"\[url\](.*)\[/url\]",
        replace: r#"<a href="${1}">${1}</a>"#,
    },
    rule! {
        name: "namedLink",
        pattern: r"\[url=(.*)\](.*)\[/url\]",
        replace: r#"<a href="${1}">${2}</a>"#,
    },
    rule! {
        name: "image",
        pattern: r"\[img\](.*)\[/img\]",
        replace: r#"<img src="${1}">"#,
    },
    rule! {
        name: "orderedList",
        pattern: r"\[ol\](.*)\[/ol\]",
        replace: "<ol>${1}</ol>",
        flags: RuleFlags::DOT_MATCHES_NEW_LINE,
    },
    rule! {
        name: "unorderedList",
        pattern: r"\[ul\](.*)\[/ul\]",
        replace: "<ul>${1}</ul>",
        flags: RuleFlags::DOT_MATCHES_NEW_LINE,
    },
    rule! {
        name: "listItem",
        pattern: r"\[\*\](.*)",
        replace: "<li>${1}</li>",
    },
    rule! {
        name: "code",
        pattern: r"\[code\](.*)\[/code\]",
        replace: "<code>${1}</code>",
    },
    rule! {
        name: "youtube",
        pattern: r"\[youtube\](.*)\[/youtube\]",
        replace: r#"<iframe width="560" height="315" src="//www.youtube.com/embed/${1}" frameborder="0" allowfullscreen></iframe>"#,
    },
];
