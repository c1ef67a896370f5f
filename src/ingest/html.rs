// Entity table, applied in order. The last three are backslash escapes left
// over from JSON-encoded page bodies.
const ENTITIES: [(&str, &str); 11] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&mdash;", "\u{2014}"),
    ("&ndash;", "\u{2013}"),
    ("\\n", " "),
    ("\\t", " "),
    ("\\r", " "),
];

/// Reduce an HTML page to plain text.
///
/// Tags are removed and each `>` leaves a single space behind. Everything
/// between `<script` and `</script>` (likewise for style) is dropped.
pub fn strip_and_decode(html: &str) -> String {
    decode_entities(&strip_tags(html))
}

pub fn strip_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut in_script = false;
    let mut in_style = false;

    for (i, c) in html.char_indices() {
        match c {
            '<' => {
                in_tag = true;
                let rest = &html[i..];
                if rest.starts_with("<script") {
                    in_script = true;
                } else if rest.starts_with("<style") {
                    in_style = true;
                }
            }
            '>' => {
                in_tag = false;
                let seen = &html[..=i];
                if seen.ends_with("</script>") {
                    in_script = false;
                } else if seen.ends_with("</style>") {
                    in_style = false;
                }
                result.push(' ');
            }
            _ if !in_tag && !in_script && !in_style => result.push(c),
            _ => {}
        }
    }

    result
}

/// Each entity is replaced in one left-to-right pass; text produced by a
/// replacement is not rescanned for the same entity.
pub fn decode_entities(text: &str) -> String {
    let mut result = text.to_string();
    for (encoded, decoded) in ENTITIES {
        if result.contains(encoded) {
            result = result.replace(encoded, decoded);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_become_spaces() {
        assert_eq!(strip_tags("<p>Война</p>и<b>мир</b>"), " Война и мир ");
    }

    #[test]
    fn script_and_style_are_dropped() {
        let html = "a<script type=\"x\">var s = 1 < 2;</script>b<style>p{}</style>c";
        assert_eq!(strip_tags(html), "a  b  c");
    }

    #[test]
    fn unclosed_tag_swallows_the_rest() {
        assert_eq!(strip_tags("text <a href"), "text ");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            decode_entities("a&nbsp;b &lt;i&gt; &quot;q&quot; it&#39;s 1812&mdash;1814 x&ndash;y"),
            "a b <i> \"q\" it's 1812\u{2014}1814 x\u{2013}y"
        );
        assert_eq!(decode_entities("line\\nnext\\ttab\\r"), "line next tab ");
    }

    #[test]
    fn decoding_is_single_pass_per_entity() {
        assert_eq!(decode_entities("&amp;amp;"), "&amp;");
        // &nbsp; is decoded before &amp;, &lt; after it
        assert_eq!(decode_entities("&amp;nbsp;"), "&nbsp;");
        assert_eq!(decode_entities("&amp;lt;"), "<");
    }

    #[test]
    fn strip_and_decode_together() {
        assert_eq!(strip_and_decode("<h1>Rome&amp;Carthage</h1>"), " Rome&Carthage ");
    }
}
