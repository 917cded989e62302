use crate::Settings;
use crate::blocks::StringBlock;
use crate::blocks::tests::utils::render_text;

#[test]
fn quotes_are_escaped() {
    let text = render_text(
        &StringBlock::new("say \"hi\" \\ bye\ttab"),
        &Settings::default(),
    );
    assert_eq!(text, r#""say \"hi\" \\ bye\ttab""#);
}

#[test]
fn control_characters_use_unicode_escapes() {
    let text = render_text(
        &StringBlock::new("a\u{1}b\u{8}c\rd"),
        &Settings::default(),
    );
    assert_eq!(text, r#""a\u0001b\u0008c\rd""#);
}

#[test]
fn non_ascii_text_is_kept() {
    let text = render_text(&StringBlock::new("héllo ✓"), &Settings::default());
    assert_eq!(text, "\"héllo ✓\"");
}

#[test]
fn multiline_values_become_block_strings() {
    let text = render_text(
        &StringBlock::new("first\n\nsecond \"\"\" quoted"),
        &Settings::default(),
    );
    assert_eq!(text, concat!(
        "\"\"\"\n",
        "first\n",
        "\n",
        "second \\\"\"\" quoted\n",
        "\"\"\"",
    ));
}

#[test]
fn block_strings_follow_the_custom_indent() {
    let settings = Settings::default().with_indent("\t");
    let ctx = crate::context::Context::new(&settings, None, None);

    let text = crate::blocks::string_block::block_string(&ctx, "a\nb", 2);
    assert_eq!(text, "\"\"\"\n\t\ta\n\t\tb\n\t\t\"\"\"");
}

mod multiline_values_that_block_strings_would_change {
    use super::*;

    #[test]
    fn common_indentation_is_quoted() {
        let text = render_text(&StringBlock::new("  x\n  y"), &Settings::default());
        assert_eq!(text, r#""  x\n  y""#);
    }

    #[test]
    fn trailing_line_break_is_quoted() {
        let text = render_text(&StringBlock::new("x\n"), &Settings::default());
        assert_eq!(text, r#""x\n""#);
    }

    #[test]
    fn leading_blank_line_is_quoted() {
        let text = render_text(&StringBlock::new("\nx"), &Settings::default());
        assert_eq!(text, r#""\nx""#);
    }

    #[test]
    fn carriage_returns_are_quoted() {
        let text = render_text(&StringBlock::new("a\r\nb"), &Settings::default());
        assert_eq!(text, r#""a\r\nb""#);
    }

    #[test]
    fn partially_indented_lines_stay_block_strings() {
        let text = render_text(&StringBlock::new("x\n  y"), &Settings::default());
        assert_eq!(text, "\"\"\"\nx\n  y\n\"\"\"");
    }
}
