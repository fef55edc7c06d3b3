use csv::{ReaderBuilder, StringRecord};

use super::error::IoError;
use crate::domain::{Customer, LineItem, Nation, Order, Region, Supplier};

/// A typed row that can be parsed from one `|`-delimited line.
///
/// Implementations only read the columns they need; extra columns
/// (including the empty field after a trailing `|`) are ignored.
pub trait TableRecord: Sized + Send + 'static {
    /// Table name, used for file names and error context
    const TABLE: &'static str;

    fn from_fields(fields: &Fields<'_>) -> Result<Self, IoError>;
}

/// Field accessor over one raw record, carrying its location for error reporting
pub struct Fields<'a> {
    table: &'static str,
    line: u64,
    record: &'a StringRecord,
}

impl<'a> Fields<'a> {
    pub fn new(table: &'static str, line: u64, record: &'a StringRecord) -> Self {
        Self {
            table,
            line,
            record,
        }
    }

    /// Integer key column
    pub fn key(&self, column: usize) -> Result<u64, IoError> {
        let raw = self.raw(column)?;
        raw.parse::<u64>()
            .map_err(|e| self.parse_error(column, e.to_string()))
    }

    /// Decimal column (prices, discounts)
    pub fn decimal(&self, column: usize) -> Result<f64, IoError> {
        let raw = self.raw(column)?;
        let value = raw
            .parse::<f64>()
            .map_err(|e| self.parse_error(column, e.to_string()))?;

        if !value.is_finite() {
            return Err(self.parse_error(column, "non-finite decimal".to_string()));
        }
        Ok(value)
    }

    /// Free-text column, taken verbatim apart from surrounding whitespace
    pub fn text(&self, column: usize) -> Result<String, IoError> {
        Ok(self.raw(column)?.to_string())
    }

    fn raw(&self, column: usize) -> Result<&'a str, IoError> {
        self.record
            .get(column)
            .map(str::trim)
            .ok_or(IoError::MissingField {
                table: self.table,
                line: self.line,
                column,
            })
    }

    fn parse_error(&self, column: usize, reason: String) -> IoError {
        IoError::Parse {
            table: self.table,
            line: self.line,
            column,
            content: self.record.iter().collect::<Vec<_>>().join("|"),
            reason,
        }
    }
}

impl TableRecord for Customer {
    const TABLE: &'static str = "customer";

    fn from_fields(fields: &Fields<'_>) -> Result<Self, IoError> {
        Ok(Self {
            custkey: fields.key(0)?,
            nationkey: fields.key(3)?,
        })
    }
}

impl TableRecord for Order {
    const TABLE: &'static str = "orders";

    fn from_fields(fields: &Fields<'_>) -> Result<Self, IoError> {
        Ok(Self {
            orderkey: fields.key(0)?,
            custkey: fields.key(1)?,
            orderdate: fields.text(4)?,
        })
    }
}

impl TableRecord for LineItem {
    const TABLE: &'static str = "lineitem";

    fn from_fields(fields: &Fields<'_>) -> Result<Self, IoError> {
        Ok(Self {
            orderkey: fields.key(0)?,
            suppkey: fields.key(2)?,
            extendedprice: fields.decimal(5)?,
            discount: fields.decimal(6)?,
        })
    }
}

impl TableRecord for Supplier {
    const TABLE: &'static str = "supplier";

    fn from_fields(fields: &Fields<'_>) -> Result<Self, IoError> {
        Ok(Self {
            suppkey: fields.key(0)?,
            nationkey: fields.key(3)?,
        })
    }
}

impl TableRecord for Nation {
    const TABLE: &'static str = "nation";

    fn from_fields(fields: &Fields<'_>) -> Result<Self, IoError> {
        Ok(Self {
            nationkey: fields.key(0)?,
            name: fields.text(1)?,
            regionkey: fields.key(2)?,
        })
    }
}

impl TableRecord for Region {
    const TABLE: &'static str = "region";

    fn from_fields(fields: &Fields<'_>) -> Result<Self, IoError> {
        Ok(Self {
            regionkey: fields.key(0)?,
            name: fields.text(1)?,
        })
    }
}

/// Parse a block of consecutive lines.
///
/// `first_line` is the 1-based file line number of the block's first line, so
/// errors point at the line in the table file. Blank lines are skipped.
pub fn parse_lines<R: TableRecord>(text: &str, first_line: u64) -> Result<Vec<R>, IoError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    let mut record = StringRecord::new();

    while reader.read_record(&mut record)? {
        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }

        let offset = record.position().map_or(1, |pos| pos.line());
        let line = first_line + offset - 1;
        rows.push(R::from_fields(&Fields::new(R::TABLE, line, &record))?);
    }

    Ok(rows)
}
