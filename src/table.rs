use crate::db::AnimeRow;

pub const RECORD_HEADERS: [&str; 6] = ["ID", "Name", "Category", "Finished", "Rating", "Seen"];

pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers
        .iter()
        .map(|header| header.chars().count())
        .collect::<Vec<_>>();

    for row in rows {
        for (index, cell) in row.iter().take(widths.len()).enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let header_cells = headers
        .iter()
        .map(|header| (*header).to_string())
        .collect::<Vec<_>>();
    let header_line = format_row(&header_cells, &widths);

    let mut output = String::new();
    output.push_str(&header_line);
    output.push('\n');
    output.push_str(&header_rule(&header_line));

    for row in rows {
        output.push('\n');
        output.push_str(&format_row(row, &widths));
    }

    output
}

pub fn record_cells(row: &AnimeRow) -> Vec<String> {
    vec![
        row.id.to_string(),
        row.name.clone(),
        row.category.clone(),
        yes_no(row.finished),
        format!("{:.1}", row.rating),
        yes_no(row.seen),
    ]
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .copied()
        .enumerate()
        .map(|(index, width)| {
            let cell = cells.get(index).map(String::as_str).unwrap_or("");
            format!("{cell:^width$}")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn header_rule(header_line: &str) -> String {
    header_line
        .chars()
        .map(|ch| if ch == '|' { '+' } else { '=' })
        .collect()
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::render;

    #[test]
    fn header_rule_joints_line_up_with_separators() {
        let output = render(
            &["ID", "Name"],
            &[vec!["1".to_string(), "Haikyuu".to_string()]],
        );
        let lines = output.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].chars().all(|ch| ch == '=' || ch == '+'));
        for (position, ch) in lines[0].char_indices() {
            if ch == '|' {
                assert_eq!(lines[1].chars().nth(position), Some('+'));
            }
        }
    }

    #[test]
    fn columns_pad_to_the_widest_cell() {
        let output = render(
            &["ID", "Name"],
            &[
                vec!["1".to_string(), "Haikyuu".to_string()],
                vec!["12".to_string(), "Ping Pong the Animation".to_string()],
            ],
        );

        let lengths = output
            .lines()
            .map(|line| line.chars().count())
            .collect::<Vec<_>>();
        assert!(lengths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn narrow_cells_are_centered() {
        let output = render(&["Rating"], &[vec!["9".to_string()]]);
        let row = output.lines().nth(2).expect("data row");

        assert_eq!(row, "  9   ");
    }
}
