use crate::settings::NameFilter;
use crate::settings::Settings;

mod presets {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();

        assert_eq!(settings.line_length(), 80);
        assert_eq!(settings.indent(), "    ");
        assert_eq!(settings.line_end(), "\n");
        assert_eq!(settings.file_end(), "\n");
        assert_eq!(settings.space(), " ");
        assert_eq!(settings.max_depth(), 128);
        assert!(settings.normalize_description());
        assert!(settings.print_directives());
        assert!(settings.print_directive_definitions());
        assert!(!settings.print_unused_definitions());
        assert!(!settings.normalize_schema());
        assert!(!settings.always_multiline_unions());
        assert!(settings.type_filter().is_none());
        assert!(settings.directive_filter().is_none());
    }

    #[test]
    fn graphql() {
        let settings = Settings::graphql();

        assert_eq!(settings.line_length(), usize::MAX);
        assert!(!settings.normalize_description());
        assert!(settings.print_unused_definitions());

        let filter = settings.directive_filter().expect("directives are filtered");
        assert!(filter.allows("deprecated", true));
        assert!(!filter.allows("tag", false));
    }

    #[test]
    fn normalized() {
        let settings = Settings::normalized();

        assert!(settings.always_multiline_arguments());
        assert!(settings.always_multiline_directive_locations());
        assert!(settings.always_multiline_interfaces());
        assert!(settings.always_multiline_unions());
        assert!(settings.normalize_arguments());
        assert!(settings.normalize_directive_locations());
        assert!(settings.normalize_enums());
        assert!(settings.normalize_fields());
        assert!(settings.normalize_interfaces());
        assert!(settings.normalize_schema());
        assert!(settings.normalize_unions());
        assert_eq!(settings.line_length(), 80);
    }
}

mod builders {
    use super::*;

    #[test]
    fn with_methods_replace_one_field() {
        let base = Settings::default();
        let tweaked = base.clone()
            .with_indent("\t")
            .with_line_length(40)
            .with_print_unused_definitions(true)
            .with_type_filter(NameFilter::deny(["Secret"]));

        assert_eq!(tweaked.indent(), "\t");
        assert_eq!(tweaked.line_length(), 40);
        assert!(tweaked.print_unused_definitions());
        assert!(tweaked.type_filter().is_some_and(|filter| !filter.allows("Secret", false)));

        assert_eq!(base.indent(), "    ");
        assert_eq!(base.line_length(), 80);
        assert!(!base.print_unused_definitions());
        assert!(base.type_filter().is_none());
    }

    #[test]
    fn filters_can_be_cleared() {
        let settings = Settings::graphql().with_directive_filter(None::<NameFilter>);
        assert!(settings.directive_filter().is_none());
    }
}

mod serialization {
    use super::*;

    #[test]
    fn round_trips_through_bincode_without_filters() {
        let settings = Settings::normalized()
            .with_indent("  ")
            .with_line_length(usize::MAX)
            .with_type_filter(NameFilter::deny(["Secret"]));

        let config = bincode::config::standard();
        let bytes = bincode::serde::encode_to_vec(&settings, config)
            .expect("settings encode");
        let (decoded, _): (Settings, usize) =
            bincode::serde::decode_from_slice(&bytes, config)
                .expect("settings decode");

        assert_eq!(decoded.indent(), "  ");
        assert_eq!(decoded.line_length(), usize::MAX);
        assert!(decoded.normalize_schema());
        assert!(decoded.always_multiline_unions());
        assert!(decoded.type_filter().is_none());
    }
}
