//! CSV export of table rows, downloaded through a Blob URL.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// One exported column: header text and cell extractor.
pub struct ExportColumn<T> {
    pub header: String,
    pub value: fn(&T) -> String,
}

impl<T> ExportColumn<T> {
    pub fn new(header: impl Into<String>, value: fn(&T) -> String) -> Self {
        Self {
            header: header.into(),
            value,
        }
    }
}

/// CSV text with `;` separators and a UTF-8 BOM so spreadsheet tools keep accents.
pub fn to_csv<T>(rows: &[T], columns: &[ExportColumn<T>]) -> String {
    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    let headers: Vec<String> = columns.iter().map(|c| escape_csv_cell(&c.header)).collect();
    csv_content.push_str(&headers.join(";"));
    csv_content.push('\n');

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| escape_csv_cell(&(c.value)(row)))
            .collect();
        csv_content.push_str(&cells.join(";"));
        csv_content.push('\n');
    }
    csv_content
}

/// Build the CSV and start a browser download of `filename`.
pub fn export_csv<T>(rows: &[T], columns: &[ExportColumn<T>], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("nothing to export".to_string());
    }
    let blob = create_csv_blob(&to_csv(rows, columns))?;
    download_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Invoice {
        number: &'static str,
        client: &'static str,
        amount: f64,
    }

    fn columns() -> Vec<ExportColumn<Invoice>> {
        vec![
            ExportColumn::new("Facture", |i| i.number.to_string()),
            ExportColumn::new("Client", |i| i.client.to_string()),
            ExportColumn::new("Montant", |i| format!("{:.0}", i.amount)),
        ]
    }

    #[test]
    fn test_header_and_rows() {
        let rows = vec![
            Invoice { number: "INV-001", client: "Famille Ndongo", amount: 25000.0 },
            Invoice { number: "INV-002", client: "Lycée Joss", amount: 40000.0 },
        ];
        let csv = to_csv(&rows, &columns());
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines, vec![
            "Facture;Client;Montant",
            "INV-001;Famille Ndongo;25000",
            "INV-002;Lycée Joss;40000",
        ]);
        assert!(csv.starts_with('\u{FEFF}'));
    }

    #[test]
    fn test_cells_with_separators_are_quoted() {
        let rows = vec![Invoice { number: "A;1", client: "Dit \"Papa\"", amount: 0.0 }];
        let csv = to_csv(&rows, &columns());
        assert!(csv.contains("\"A;1\";\"Dit \"\"Papa\"\"\";0"));
    }

    #[test]
    fn test_empty_rows_yield_header_only() {
        let csv = to_csv::<Invoice>(&[], &columns());
        assert_eq!(csv.lines().count(), 1);
    }
}
