//! Round-trip tests: parse, render, and render again.
//!
//! The first render is canonical, so re-parsing and re-rendering it must
//! reproduce it byte for byte.

use mdcanon::{ItemMarkers, RenderOptions, format_markdown, parse_document};

mod prelude;
use prelude::*;

const SAMPLE: &str = "Canonical *form*
================

This paragraph is long enough that it has to wrap once the renderer reaches sixty-five columns.

* alpha
* beta

3) three
4) four

***

~~~ python
print(\"hi\")
~~~
";

#[test]
fn sample_renders_canonically() {
    insta::assert_snapshot!(format_markdown(SAMPLE, &RenderOptions::default()), @r#"
# Canonical *form*

This paragraph is long enough that it has to wrap once the
renderer reaches sixty-five columns.

- alpha

- beta

1.  three

1.  four

-----

``` python
print("hi")
```
"#);
}

#[rstest]
#[case(SAMPLE)]
#[case("# Title\n\nSome *emphasis* and **strong** text with `code` and a [link](http://x.y).\n")]
#[case("> quote with a list:\n>\n> - alpha\n> - beta\n")]
#[case("line one\\\nline two  \nline three\n")]
#[case("5 * 3 = 15 and a_b and \\*lit\\*\n")]
#[case("- outer\n  - inner one\n  - inner two\n- second\n")]
#[case("1. first\n2. second\n\n    indented code\n")]
#[case("<div>\nraw *html*\n</div>\n\nafter ![img](a.png) and <span>inline</span>\n")]
#[case("A long paragraph of prose that keeps going well past the wrap width so that the \
        renderer has to break it over several lines, and then keeps going a while longer.\n")]
fn rendering_is_a_fixed_point(#[case] source: &str) {
    let opts = RenderOptions::default();
    let first = format_markdown(source, &opts);
    let second = format_markdown(&first, &opts);
    assert_eq!(first, second);
    assert_single_blank_lines(&first);
}

#[rstest]
#[case(20)]
#[case(40)]
#[case(0)]
fn fixed_point_holds_at_any_width(#[case] width: usize) {
    let opts = RenderOptions::default().with_width(width);
    let first = format_markdown(SAMPLE, &opts);
    assert_eq!(format_markdown(&first, &opts), first);
    if width > 0 {
        assert_fits_width(&first, width);
    }
}

#[test]
fn ordinal_markers_are_a_fixed_point() {
    let opts = RenderOptions::default().with_item_markers(ItemMarkers::Ordinal);
    let first = format_markdown("7. a\n8. b\n9. c\n10. d\n", &opts);
    assert_eq!(first, "7.  a\n\n8.  b\n\n9.  c\n\n10. d\n\n");
    assert_eq!(format_markdown(&first, &opts), first);
}

#[test]
fn leading_space_after_wrap_keeps_one_paragraph() {
    let opts = RenderOptions::default().with_width(5);
    let first = format_markdown("abcde\n&#32;fghijk\n", &opts);
    assert_eq!(first, "abcde\nfghijk\n\n");
    assert_eq!(parse_document(&first).children().len(), 1);
    assert_eq!(format_markdown(&first, &opts), first);
}
