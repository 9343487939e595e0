use crate::error::{InsightError, Result};
use crate::parsers::Document;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::VecDeque;
use std::fmt;
use std::sync::LazyLock;

/// Largest `colspan` honoured, as in browsers
const MAX_COLSPAN: usize = 1000;

/// Largest `rowspan` honoured, as in browsers
const MAX_ROWSPAN: usize = 65534;

/// Cell texts read as a missing value, the same set pandas uses by default
const NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Decimal with optional sign, `,` thousands separators and exponent
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").unwrap()
});

static MISSING: Cell = Cell::Missing;

/// A single table value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Classifies whitespace-normalized cell text
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if NA_VALUES.contains(&text) {
            return Cell::Missing;
        }

        if NUMBER.is_match(text) {
            // Overflowing literals such as `1e999` stay text
            if let Ok(value) = text.replace(',', "").parse::<f64>() {
                if value.is_finite() {
                    return Cell::Number(value);
                }
            }
        }

        Cell::Text(text.to_string())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => write!(f, "NaN"),
            Cell::Number(value) => write!(f, "{}", value),
            Cell::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Rectangular table with labeled columns
///
/// Every row holds exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates a table, padding short rows with `Missing` and truncating long ones
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Missing);
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column: exact name first, then ASCII case-insensitive on the trimmed name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name).or_else(|| {
            let wanted = name.trim();
            self.columns
                .iter()
                .position(|c| c.trim().eq_ignore_ascii_case(wanted))
        })
    }

    /// Like [`Table::column_index`] but a missing column is an error
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| InsightError::MissingColumn {
                column: name.to_string(),
                available: self.columns.clone(),
            })
    }

    /// Cell at `row`/`column`, `Missing` when out of range
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&MISSING)
    }

    /// Non-missing values of a numeric column, in row order
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let index = self.require_column(name)?;
        self.numeric_values(index)
    }

    pub(crate) fn numeric_values(&self, index: usize) -> Result<Vec<f64>> {
        let mut values = Vec::with_capacity(self.rows.len());
        for row in 0..self.rows.len() {
            match self.cell(row, index) {
                Cell::Number(value) => values.push(*value),
                Cell::Missing => {}
                Cell::Text(text) => {
                    return Err(InsightError::NonNumericColumn {
                        column: self.columns[index].clone(),
                        value: text.clone(),
                    });
                }
            }
        }
        Ok(values)
    }
}

/// Drops every row that holds a missing value
pub fn clean_table(table: &Table) -> Table {
    let rows: Vec<Vec<Cell>> = table
        .rows
        .iter()
        .filter(|row| !row.iter().any(Cell::is_missing))
        .cloned()
        .collect();

    ::log::debug!(
        "Dropped {} of {} rows with missing values",
        table.rows.len() - rows.len(),
        table.rows.len()
    );

    Table {
        columns: table.columns.clone(),
        rows,
    }
}

/// Extracts every table with more than one data row
pub fn extract_tables(html: &str) -> Vec<Table> {
    Document::parse(html).tables()
}

pub(crate) fn document_tables(doc: &Html) -> Vec<Table> {
    let table_selector = Selector::parse("table").unwrap();

    let tables: Vec<Table> = doc.select(&table_selector).map(read_table).collect();
    let found = tables.len();
    let tables: Vec<Table> = tables.into_iter().filter(|t| t.len() > 1).collect();

    ::log::debug!(
        "HTML parser found {} tables, kept {} with more than one row",
        found,
        tables.len()
    );
    tables
}

/// A `<td>`/`<th>` before span expansion
struct RawCell {
    text: String,
    colspan: usize,
    rowspan: usize,
    is_header: bool,
}

/// A rowspan still covering slots in the rows below
struct Carry {
    column: usize,
    text: String,
    rows_left: usize,
}

fn read_table(table: ElementRef) -> Table {
    let mut head = Vec::new();
    let mut body = Vec::new();
    let mut foot = Vec::new();

    // Rows of nested tables belong to those tables only
    for child in child_elements(table) {
        match child.value().name() {
            "thead" => head.extend(child_rows(child)),
            "tbody" => body.extend(child_rows(child)),
            "tfoot" => foot.extend(child_rows(child)),
            "tr" => body.push(child),
            _ => {}
        }
    }
    body.extend(foot);

    let mut header_rows: Vec<Vec<RawCell>> = head.into_iter().map(read_row).collect();
    let mut body_rows: VecDeque<Vec<RawCell>> = body.into_iter().map(read_row).collect();

    if header_rows.is_empty() {
        while body_rows
            .front()
            .is_some_and(|row| !row.is_empty() && row.iter().all(|c| c.is_header))
        {
            if let Some(row) = body_rows.pop_front() {
                header_rows.push(row);
            }
        }
    }

    let header_grid = expand_spans(&header_rows);
    let body_rows: Vec<Vec<RawCell>> = body_rows.into_iter().collect();
    let body_grid = expand_spans(&body_rows);

    let width = header_grid
        .iter()
        .chain(body_grid.iter())
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let columns = column_names(&header_grid, width);
    let rows: Vec<Vec<Cell>> = body_grid
        .into_iter()
        .map(|row| row.iter().map(|text| Cell::from_text(text)).collect::<Vec<_>>())
        .collect();

    Table::new(columns, rows)
}

fn child_elements(parent: ElementRef) -> impl Iterator<Item = ElementRef> {
    parent.children().filter_map(ElementRef::wrap)
}

fn child_rows(section: ElementRef) -> impl Iterator<Item = ElementRef> {
    child_elements(section).filter(|el| el.value().name() == "tr")
}

fn read_row(tr: ElementRef) -> Vec<RawCell> {
    child_elements(tr)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .map(|el| RawCell {
            text: el.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" "),
            colspan: span_attr(el, "colspan", MAX_COLSPAN),
            rowspan: span_attr(el, "rowspan", MAX_ROWSPAN),
            is_header: el.value().name() == "th",
        })
        .collect()
}

fn span_attr(el: ElementRef, name: &str, max: usize) -> usize {
    el.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .map_or(1, |span| span.clamp(1, max))
}

/// Expands colspan and rowspan by repeating the cell text into every slot it covers
///
/// Rowspans that reach past the last row add rows of their own.
fn expand_spans(rows: &[Vec<RawCell>]) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(rows.len());
    let mut carried: VecDeque<Carry> = VecDeque::new();

    for row in rows {
        let mut texts = Vec::new();
        let mut next = VecDeque::new();

        for cell in row {
            while carried.front().is_some_and(|c| c.column <= texts.len()) {
                if let Some(carry) = carried.pop_front() {
                    place_carry(&mut texts, &mut next, carry);
                }
            }

            for _ in 0..cell.colspan {
                if cell.rowspan > 1 {
                    next.push_back(Carry {
                        column: texts.len(),
                        text: cell.text.clone(),
                        rows_left: cell.rowspan - 1,
                    });
                }
                texts.push(cell.text.clone());
            }
        }

        for carry in carried.drain(..) {
            place_carry(&mut texts, &mut next, carry);
        }

        grid.push(texts);
        carried = next;
    }

    while !carried.is_empty() {
        let mut texts = Vec::new();
        let mut next = VecDeque::new();
        for carry in carried.drain(..) {
            place_carry(&mut texts, &mut next, carry);
        }
        grid.push(texts);
        carried = next;
    }

    grid
}

fn place_carry(texts: &mut Vec<String>, next: &mut VecDeque<Carry>, carry: Carry) {
    texts.push(carry.text.clone());
    if carry.rows_left > 1 {
        next.push_back(Carry {
            rows_left: carry.rows_left - 1,
            ..carry
        });
    }
}

/// Names each column from the header rows above it
fn column_names(header: &[Vec<String>], width: usize) -> Vec<String> {
    if header.is_empty() {
        return (0..width).map(|i| i.to_string()).collect();
    }

    (0..width)
        .map(|i| {
            let mut parts: Vec<&str> = Vec::new();
            for row in header {
                if let Some(text) = row.get(i) {
                    // rowspans repeat the same label down the header
                    if !text.is_empty() && parts.last() != Some(&text.as_str()) {
                        parts.push(text);
                    }
                }
            }

            if parts.is_empty() {
                format!("Unnamed: {}", i)
            } else {
                parts.join(" ")
            }
        })
        .collect()
}
