use crate::Settings;
use crate::blocks::DescriptionBlock;
use crate::blocks::description_block::normalize_description;
use crate::blocks::tests::utils::render_text;

mod normalizing {
    use super::*;

    #[test]
    fn blank_lines_are_trimmed_and_collapsed() {
        assert_eq!(
            normalize_description("\r\n  \nfirst  \n\n\n\nsecond\n\n"),
            "first\n\nsecond",
        );
    }

    #[test]
    fn carriage_returns_become_line_feeds() {
        assert_eq!(normalize_description("a\rb\r\nc"), "a\nb\nc");
    }

    #[test]
    fn leading_indentation_is_kept() {
        assert_eq!(normalize_description("list:\n  - item"), "list:\n  - item");
    }

    #[test]
    fn common_indentation_is_removed() {
        assert_eq!(normalize_description("  a\n\n    b\n  c"), "a\n\n  b\nc");
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let once = normalize_description("\n\n a \n\n\n b \n");
        assert_eq!(normalize_description(&once), once);
    }
}

mod rendering {
    use super::*;

    #[test]
    fn renders_a_block_string() {
        let text = render_text(
            &DescriptionBlock::new("One line."),
            &Settings::default(),
        );
        assert_eq!(text, "\"\"\"\nOne line.\n\"\"\"");
    }

    #[test]
    fn whitespace_only_description_renders_empty() {
        let text = render_text(&DescriptionBlock::new("  \n "), &Settings::default());
        assert_eq!(text, "");
    }

    #[test]
    fn unnormalized_description_is_kept_verbatim() {
        let settings = Settings::default().with_normalize_description(false);
        let text = render_text(&DescriptionBlock::new("a  \n\n\nb"), &settings);
        assert_eq!(text, "\"\"\"\na  \n\n\nb\n\"\"\"");
    }

    #[test]
    fn indented_description_is_dedented() {
        let text = render_text(&DescriptionBlock::new("  a\n  b"), &Settings::default());
        assert_eq!(text, "\"\"\"\na\nb\n\"\"\"");
    }

    #[test]
    fn unnormalized_indented_description_is_quoted() {
        let settings = Settings::default().with_normalize_description(false);
        let text = render_text(&DescriptionBlock::new("  a\n  b"), &settings);
        assert_eq!(text, r#""  a\n  b""#);
    }

    #[test]
    fn unnormalized_trailing_line_break_is_quoted() {
        let settings = Settings::default().with_normalize_description(false);
        let text = render_text(&DescriptionBlock::new("a\n"), &settings);
        assert_eq!(text, r#""a\n""#);
    }
}
