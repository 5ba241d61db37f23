use std::path::Path;

use calamine::{DataType, Range, Reader, Xlsx, open_workbook};
use tracing::{debug, instrument};

use crate::proknow::renaming::error::{Result, SyncError};
use crate::proknow::renaming::extract::extract_rules;
use crate::proknow::renaming::model::{Column, DesiredRuleSet};

/// Reads the desired renaming rules from the first worksheet of the workbook.
///
/// Rule conflicts are reported as [`SyncError::Workbook`] so the caller knows
/// which file was at fault.
#[instrument(level = "info", skip_all, fields(input = %path.display()))]
pub fn read_rules(path: &Path) -> Result<DesiredRuleSet> {
    let columns = read_columns(path)?;
    extract_rules(&columns).map_err(|source| SyncError::Workbook {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Loads the first worksheet as a list of columns.
pub fn read_columns(path: &Path) -> Result<Vec<Column>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let range_result = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SyncError::InvalidWorkbook("workbook has no worksheets".into()))?;
    let range = range_result.map_err(SyncError::from)?;

    let columns = range_to_columns(&range);
    debug!(column_count = columns.len(), "worksheet loaded");
    Ok(columns)
}

/// Splits a sheet range into columns. Rows above the first used row are
/// padded with blanks so that cell 0 is always the first sheet row.
fn range_to_columns(range: &Range<DataType>) -> Vec<Column> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let (_, width) = range.get_size();

    (0..width)
        .map(|offset| {
            let cells = std::iter::repeat_n(None, start_row as usize)
                .chain(range.rows().map(|row| row.get(offset).and_then(cell_text)))
                .collect();
            Column::new(start_col as usize + offset, cells)
        })
        .collect()
}

fn cell_text(cell: &DataType) -> Option<String> {
    match cell {
        DataType::String(value) if !value.is_empty() => Some(value.clone()),
        _ => None,
    }
}
