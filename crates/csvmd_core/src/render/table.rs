//! Markdown table renderer.

use csvmd_parser::Record;

use super::escape::escape_cell;

/// Renders headers and records as a Markdown pipe table.
///
/// Row one is the header row, row two the `---` separator a Markdown
/// renderer needs to recognize the table (no alignment colons). Values are
/// looked up per header, in header order; a record with no value for a
/// header renders the empty string. Rows are joined with `\n` and no
/// trailing newline is appended.
pub fn markdown_table(headers: &[String], records: &[Record]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 2);

    lines.push(format!("| {} |", headers.join(" | ")));
    lines.push(format!("| {} |", vec!["---"; headers.len()].join(" | ")));

    for record in records {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| escape_cell(record.get(header)))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use csvmd_parser::CsvReader;

    use super::*;

    fn parse(text: &str) -> (Vec<String>, Vec<Record>) {
        let document = CsvReader::new().parse(text).unwrap();
        (document.headers, document.records)
    }

    #[test]
    fn test_basic_table() {
        let (headers, records) = parse("name,age\nAda,36\nAlan,41\n");

        assert_eq!(
            markdown_table(&headers, &records),
            "| name | age |\n| --- | --- |\n| Ada | 36 |\n| Alan | 41 |"
        );
    }

    #[test]
    fn test_no_trailing_newline() {
        let (headers, records) = parse("a\n1\n");
        assert!(!markdown_table(&headers, &records).ends_with('\n'));
    }

    #[test]
    fn test_missing_value_renders_empty_cell() {
        let (headers, records) = parse("a,b\n1\n");

        assert_eq!(
            markdown_table(&headers, &records),
            "| a | b |\n| --- | --- |\n| 1 |  |"
        );
    }

    #[test]
    fn test_pipe_in_cell_is_escaped() {
        let (headers, records) = parse("cmd\n\"ls | wc\"\n");

        assert_eq!(
            markdown_table(&headers, &records),
            "| cmd |\n| --- |\n| ls \\| wc |"
        );
    }

    #[test]
    fn test_line_break_in_cell_becomes_space() {
        let (headers, records) = parse("note\n\"one\ntwo\"\n");

        assert_eq!(
            markdown_table(&headers, &records),
            "| note |\n| --- |\n| one two |"
        );
    }

    #[test]
    fn test_headers_only() {
        let (headers, records) = parse("a,b\n");
        assert_eq!(markdown_table(&headers, &records), "| a | b |\n| --- | --- |");
    }

    #[test]
    fn test_empty_document_degenerates() {
        let (headers, records) = parse("");
        assert_eq!(markdown_table(&headers, &records), "|  |\n|  |");
    }

    #[test]
    fn test_deterministic() {
        let (headers, records) = parse("a,b\n1,2\n");
        assert_eq!(
            markdown_table(&headers, &records),
            markdown_table(&headers, &records)
        );
    }
}
