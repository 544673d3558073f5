//! Integration tests for the full convert pipeline
//!
//! These exercise parse and render together, through the same `Converter`
//! the binary drives, and pin down the row-cap and raw-fidelity properties.

use std::io::Write;

use pretty_assertions::assert_eq;

use csvmd_core::{Converter, CsvReader, OutputMode, RenderConfig};

const INPUT: &str = "name,age\nAda,36\nAlan,41\n";

fn convert(config: RenderConfig, text: &str) -> csvmd_core::ConvertResult {
    let document = CsvReader::new().parse(text).unwrap();
    Converter::new(config).convert(&document)
}

mod row_cap {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_rows_never_exceed_the_cap() {
        for head in 0..4 {
            let config = RenderConfig {
                head: Some(head),
                mode: OutputMode::Table,
                ..RenderConfig::default()
            };
            let result = convert(config, INPUT);

            assert_eq!(result.shown_rows, head.min(2));
            let data_rows = result
                .markdown
                .lines()
                .filter(|l| l.contains("Ada") || l.contains("Alan"))
                .count();
            assert_eq!(data_rows, head.min(2));
        }
    }

    #[test]
    fn notice_appears_exactly_when_rows_are_omitted() {
        for (head, expect_notice) in [(Some(1), true), (Some(2), false), (None, false)] {
            let config = RenderConfig {
                head,
                mode: OutputMode::Table,
                ..RenderConfig::default()
            };
            let result = convert(config, INPUT);

            assert_eq!(result.truncated, expect_notice, "head {head:?}");
            assert_eq!(result.markdown.contains("Showing"), expect_notice);
        }
    }

    #[test]
    fn raw_block_count_is_independent_of_the_cap() {
        let config = RenderConfig {
            head: Some(1),
            mode: OutputMode::DetailsOnly,
            ..RenderConfig::default()
        };
        let result = convert(config, INPUT);

        assert!(result.markdown.contains("2 rows"));
        assert!(result.markdown.contains("Alan,41"));
    }
}

mod raw_fidelity {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_block_body_reproduces_the_input() {
        let input = "h1,h2\n\"a,comma\",\"line\nbreak\"\nplain,\"quoted \"\"x\"\"\"\n";
        let config = RenderConfig {
            mode: OutputMode::DetailsOnly,
            ..RenderConfig::default()
        };
        let result = convert(config, input);

        let body = result
            .markdown
            .split("```csv\n")
            .nth(1)
            .and_then(|rest| rest.split("\n```").next())
            .unwrap();
        assert_eq!(body, input.trim_end_matches('\n'));
    }

    #[test]
    fn escaped_cells_keep_the_raw_view_exotic() {
        let input = "cmd\n\"ls | wc\"\n";
        let result = convert(RenderConfig::default(), input);

        // escaped in the table, untouched in the raw block
        assert!(result.markdown.contains("| ls \\| wc |"));
        assert!(result.markdown.contains("\"ls | wc\""));
    }
}

mod file_level {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn convert_file_matches_in_memory_convert() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(INPUT.as_bytes()).unwrap();

        let from_file = Converter::new(RenderConfig::default())
            .convert_file(file.path())
            .unwrap();
        let in_memory = convert(RenderConfig::default(), INPUT);

        assert_eq!(from_file.markdown, in_memory.markdown);
    }

    #[test]
    fn malformed_file_produces_no_output() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name\n\"unclosed\n").unwrap();

        let err = Converter::new(RenderConfig::default())
            .convert_file(file.path())
            .unwrap_err();
        assert!(err.to_string().contains("unterminated quoted field"));
    }
}
