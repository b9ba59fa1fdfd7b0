//! HTML rendering of aggregated totals.
//!
//! A fixed page template with the rows spliced in. Every piece of text
//! that comes from the database is escaped before insertion.

use polls_db::PollingUnitTotal;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Polling Unit Results</title>
</head>
<body>
    <h1>Summed Total Results for Polling Units in {state_name}</h1>
    <table border="1">
        <tr>
            <th>Polling Unit Name</th>
            <th>Total Score</th>
        </tr>
{rows}    </table>
</body>
</html>
"#;

/// Escape HTML special characters for safe insertion into element text
/// and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a complete HTML page with one table row per total, in the order
/// given.
///
/// # Arguments
/// * `rows` - Aggregated totals
/// * `state_name` - Display name for the heading
pub fn render_results(rows: &[PollingUnitTotal], state_name: &str) -> String {
    let mut body = String::new();
    for row in rows {
        body.push_str(&format!(
            "        <tr>\n            <td>{}</td>\n            <td>{}</td>\n        </tr>\n",
            escape_html(&row.polling_unit_name),
            row.total_score
        ));
    }

    let (head, tail) = PAGE_TEMPLATE
        .split_once("{rows}")
        .unwrap_or((PAGE_TEMPLATE, ""));
    let head = head.replace("{state_name}", &escape_html(state_name));

    let mut page = String::with_capacity(head.len() + body.len() + tail.len());
    page.push_str(&head);
    page.push_str(&body);
    page.push_str(tail);
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Ward 4"), "Ward 4");
    }

    #[test]
    fn test_one_row_per_total_in_order() {
        let rows = vec![
            PollingUnitTotal::new("Abbey Road", 12),
            PollingUnitTotal::new("Zion Ward", 7),
        ];
        let page = render_results(&rows, "Delta State");

        assert_eq!(page.matches("<tr>").count(), 3);
        assert!(page.contains("<h1>Summed Total Results for Polling Units in Delta State</h1>"));
        let abbey = page.find("<td>Abbey Road</td>").unwrap();
        let zion = page.find("<td>Zion Ward</td>").unwrap();
        assert!(abbey < zion);
        assert!(page.contains("<td>12</td>"));
        assert!(page.contains("<td>7</td>"));
    }

    #[test]
    fn test_markup_in_names_is_escaped() {
        let rows = vec![PollingUnitTotal::new("<script>alert(1)</script>", 1)];
        let page = render_results(&rows, "Delta <State>");

        assert!(!page.contains("<script>"));
        assert!(page.contains("<td>&lt;script&gt;alert(1)&lt;/script&gt;</td>"));
        assert!(page.contains("Delta &lt;State&gt;"));
    }

    #[test]
    fn test_braces_in_names_do_not_hit_placeholders() {
        let rows = vec![PollingUnitTotal::new("{state_name}", 1)];
        let page = render_results(&rows, "Delta State");
        assert!(page.contains("<td>{state_name}</td>"));
    }

    #[test]
    fn test_placeholder_in_state_name_is_literal() {
        let rows = vec![PollingUnitTotal::new("PU A", 1)];
        let page = render_results(&rows, "{rows}");
        assert!(page.contains("Polling Units in {rows}</h1>"));
        assert_eq!(page.matches("<td>PU A</td>").count(), 1);
    }

    #[test]
    fn test_empty_rows_render_header_only() {
        let page = render_results(&[], "Delta State");
        assert_eq!(page.matches("<tr>").count(), 1);
        assert!(page.contains("</table>"));
    }
}
