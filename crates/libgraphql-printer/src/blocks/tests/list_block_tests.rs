use crate::Collector;
use crate::PrintError;
use crate::Settings;
use crate::blocks::Block;
use crate::blocks::BoxedBlock;
use crate::blocks::ListBlock;
use crate::blocks::NameBlock;
use crate::blocks::StringBlock;
use crate::context::Context;

type Result<T> = std::result::Result<T, PrintError>;

fn names(names: &[&'static str]) -> Vec<BoxedBlock<'static>> {
    names.iter()
        .map(|name| Box::new(NameBlock::new(*name)) as BoxedBlock<'static>)
        .collect()
}

fn serialize(list: &ListBlock<'_>, settings: &Settings, level: usize, used: usize) -> Result<String> {
    let ctx = Context::new(settings, None, None);
    list.serialize(&ctx, &mut Collector::default(), level, used)
}

mod wrapped {
    use super::*;

    #[test]
    fn fits_exactly_at_the_line_length() -> Result<()> {
        let list = ListBlock::wrapped("(", ")", names(&["abc"]));

        let fits = serialize(&list, &Settings::default().with_line_length(5), 0, 0)?;
        assert_eq!(fits, "(abc)");

        let breaks = serialize(&list, &Settings::default().with_line_length(4), 0, 0)?;
        assert_eq!(breaks, "(\n    abc\n)");

        Ok(())
    }

    #[test]
    fn used_columns_count_against_the_line_length() -> Result<()> {
        let list = ListBlock::wrapped("(", ")", names(&["a", "b"]));
        let settings = Settings::default().with_line_length(10);

        assert_eq!(serialize(&list, &settings, 0, 4)?, "(a, b)");
        assert_eq!(serialize(&list, &settings, 1, 5)?, "(\n        a\n        b\n    )");

        Ok(())
    }

    #[test]
    fn empty_items_leave_no_separator() -> Result<()> {
        let list = ListBlock::wrapped("(", ")", names(&["a", "", "b"]));
        assert_eq!(serialize(&list, &Settings::default(), 0, 0)?, "(a, b)");

        Ok(())
    }

    #[test]
    fn empty_list_renders_the_empty_token() -> Result<()> {
        let settings = Settings::default();

        let list = ListBlock::wrapped("[", "]", vec![]).empty("[]");
        assert_eq!(serialize(&list, &settings, 0, 0)?, "[]");

        let filtered = ListBlock::wrapped("[", "]", names(&["", ""])).empty("[]");
        assert_eq!(serialize(&filtered, &settings, 0, 0)?, "[]");

        let bare = ListBlock::wrapped("(", ")", vec![]);
        assert_eq!(serialize(&bare, &settings, 0, 0)?, "");

        Ok(())
    }

    #[test]
    fn multiline_items_get_blank_lines_around_them() -> Result<()> {
        let items: Vec<BoxedBlock<'_>> = vec![
            Box::new(NameBlock::new("a")),
            Box::new(StringBlock::new("x\ny")),
            Box::new(NameBlock::new("c")),
            Box::new(NameBlock::new("d")),
        ];
        let list = ListBlock::wrapped("(", ")", items).blank_lines(true);

        assert_eq!(serialize(&list, &Settings::default(), 0, 0)?, concat!(
            "(\n",
            "    a\n",
            "\n",
            "    \"\"\"\n",
            "    x\n",
            "    y\n",
            "    \"\"\"\n",
            "\n",
            "    c\n",
            "    d\n",
            ")",
        ));

        Ok(())
    }

    #[test]
    fn custom_whitespace_is_used() -> Result<()> {
        let settings = Settings::default()
            .with_indent("\t")
            .with_line_end("\r\n")
            .with_space("");
        let list = ListBlock::wrapped("(", ")", names(&["a", "b"]));

        assert_eq!(serialize(&list, &settings, 0, 0)?, "(a,b)");
        assert_eq!(
            serialize(&list.always_multiline(true), &settings, 0, 0)?,
            "(\r\n\ta\r\n\tb\r\n)",
        );

        Ok(())
    }
}

mod sigil {
    use super::*;

    #[test]
    fn breaks_with_leading_sigils() -> Result<()> {
        let list = ListBlock::sigil("=", "|", names(&["Alpha", "Beta"]));

        assert_eq!(serialize(&list, &Settings::default(), 0, 0)?, "= Alpha | Beta");
        assert_eq!(
            serialize(&list, &Settings::default().with_line_length(10), 0, 0)?,
            "=\n    | Alpha\n    | Beta",
        );

        Ok(())
    }

    #[test]
    fn normalized_items_are_sorted() -> Result<()> {
        let list = ListBlock::sigil("implements", "&", names(&["B", "C", "A"]))
            .normalized(true);
        assert_eq!(
            serialize(&list, &Settings::default(), 0, 0)?,
            "implements A & B & C",
        );

        Ok(())
    }
}

mod stacked {
    use super::*;

    #[test]
    fn multiline_stack_continues_on_the_current_line() -> Result<()> {
        let list = ListBlock::stacked(names(&["a", "b"])).always_multiline(true);
        assert_eq!(serialize(&list, &Settings::default(), 1, 4)?, "a\n    b");

        Ok(())
    }
}

mod document {
    use super::*;

    #[test]
    fn items_are_separated_by_blank_lines() -> Result<()> {
        let list = ListBlock::document(names(&["a", "", "b"]));
        assert_eq!(serialize(&list, &Settings::default(), 0, 0)?, "a\n\nb");

        Ok(())
    }

    #[test]
    fn single_item_has_no_separator() -> Result<()> {
        let list = ListBlock::document(names(&["only"]));
        assert_eq!(serialize(&list, &Settings::default(), 0, 0)?, "only");

        Ok(())
    }
}
