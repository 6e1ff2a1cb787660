//! Plain-text table rendering shared by the list pages.

use tabled::builder::Builder;
use tabled::settings::Style;

/// Render `rows` under `headers` as a psql-style table.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().copied());
    for row in rows {
        builder.push_record(row.iter().map(String::as_str));
    }

    let mut out = builder.build().with(Style::psql()).to_string();
    out.push('\n');
    if rows.is_empty() {
        out.push_str("(no rows)\n");
    }
    out
}

/// Render an optional value, using "-" for absent cells.
pub fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(line: &str) -> Vec<&str> {
        line.split('|').map(str::trim).collect()
    }

    #[test]
    fn test_columns_are_aligned() {
        let text = render(
            &["ID", "Name"],
            &[
                vec!["1".into(), "Hangzhou".into()],
                vec!["12".into(), "Xi'an".into()],
            ],
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(columns(lines[0]), vec!["ID", "Name"]);
        assert!(lines[1].chars().all(|c| c == '-' || c == '+'));
        assert_eq!(columns(lines[2]), vec!["1", "Hangzhou"]);
        assert_eq!(columns(lines[3]), vec!["12", "Xi'an"]);

        let separator = lines[0].find('|').unwrap();
        for line in &lines[2..] {
            assert_eq!(line.find('|'), Some(separator), "misaligned: {:?}", line);
        }
    }

    #[test]
    fn test_empty_table_says_so() {
        let text = render(&["ID", "Name"], &[]);
        assert_eq!(columns(text.lines().next().unwrap()), vec!["ID", "Name"]);
        assert!(text.ends_with("(no rows)\n"));
    }

    #[test]
    fn test_missing_cell() {
        assert_eq!(cell::<i64>(None), "-");
        assert_eq!(cell(Some(3.5)), "3.5");
    }
}
