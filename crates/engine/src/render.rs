//! Fixed-width rendering of the earthwork volume table.
//!
//! The layout is part of the report contract; drawing-sheet imports and
//! downstream scripts rely on column positions.
//!
//! # Column Layout
//!
//! | Column        | Width | Content                        |
//! |---------------|-------|--------------------------------|
//! | Material List | 20    | List name, hard-clipped        |
//! | Material      | 15    | Item name, hard-clipped        |
//! | Start Stn     | 12    | Station, 3 decimals by default |
//! | End Stn       | 12    | Station, 3 decimals by default |
//! | Cut Vol       | 12    | Volume, 2 decimals by default  |
//! | Fill Vol      | 12    | Volume, 2 decimals by default  |
//! | Net Vol       | 12    | Row cut minus row fill         |
//! | Cum Cut       | 12    | Running cut total              |
//! | Cum Fill      | 12    | Running fill total             |
//!
//! Fields are left-justified and concatenated without separators; the last
//! column of each line is written unpadded. Rules span 120 characters.
//! String fields are clipped by characters, so a multibyte name can never be
//! split mid-character. Numeric fields are never clipped: an oversize value
//! overflows its column rather than being corrupted.

use crate::config::ReportStyle;
use crate::model::{ReportTable, VolumeRow};

pub const RULE_WIDTH: usize = 120;

const LIST_WIDTH: usize = 20;
const MATERIAL_WIDTH: usize = 15;
const VALUE_WIDTH: usize = 12;

/// Emitted instead of the table when there are no rows to report.
pub const NO_DATA_NOTICE: &str = "No earthwork quantity data for the selected alignment.";

/// Render the volume table as report text. Read-only; the table is not
/// consumed or reordered. Every report ends with a newline.
pub fn render(table: &ReportTable, style: &ReportStyle) -> String {
    if table.is_empty() {
        return format!("{NO_DATA_NOTICE}\n");
    }

    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut out = String::new();
    out.push_str(&heavy);
    out.push('\n');
    out.push_str(&format!("{} (volumes in {})\n", style.title, style.unit));
    out.push_str(&heavy);
    out.push('\n');
    out.push_str(&header_line());
    out.push('\n');
    out.push_str(&light);
    out.push('\n');
    for row in &table.rows {
        out.push_str(&data_line(row, style));
        out.push('\n');
    }
    out.push_str(&light);
    out.push('\n');
    out.push_str(&total_line(table, style));
    out.push('\n');
    out.push_str(&heavy);
    out.push('\n');
    out
}

// ---------------------------------------------------------------------------
// Lines
// ---------------------------------------------------------------------------

fn header_line() -> String {
    let mut line = String::with_capacity(RULE_WIDTH);
    line.push_str(&value_field("Material List", LIST_WIDTH));
    line.push_str(&value_field("Material", MATERIAL_WIDTH));
    line.push_str(&value_field("Start Stn", VALUE_WIDTH));
    line.push_str(&value_field("End Stn", VALUE_WIDTH));
    line.push_str(&value_field("Cut Vol", VALUE_WIDTH));
    line.push_str(&value_field("Fill Vol", VALUE_WIDTH));
    line.push_str(&value_field("Net Vol", VALUE_WIDTH));
    line.push_str(&value_field("Cum Cut", VALUE_WIDTH));
    line.push_str("Cum Fill");
    line
}

fn data_line(row: &VolumeRow, style: &ReportStyle) -> String {
    let sd = style.station_decimals;
    let vd = style.volume_decimals;
    let mut line = String::with_capacity(RULE_WIDTH);
    line.push_str(&text_field(&row.material_list, LIST_WIDTH));
    line.push_str(&text_field(&row.material, MATERIAL_WIDTH));
    line.push_str(&value_field(&fixed(row.station_start, sd), VALUE_WIDTH));
    line.push_str(&value_field(&fixed(row.station_end, sd), VALUE_WIDTH));
    line.push_str(&value_field(&fixed(row.cut_volume, vd), VALUE_WIDTH));
    line.push_str(&value_field(&fixed(row.fill_volume, vd), VALUE_WIDTH));
    line.push_str(&value_field(&fixed(row.net_volume, vd), VALUE_WIDTH));
    line.push_str(&value_field(&fixed(row.cumulative_cut, vd), VALUE_WIDTH));
    line.push_str(&fixed(row.cumulative_fill, vd));
    line
}

fn total_line(table: &ReportTable, style: &ReportStyle) -> String {
    let vd = style.volume_decimals;
    let mut line = String::with_capacity(RULE_WIDTH);
    line.push_str(&value_field("TOTAL", LIST_WIDTH));
    line.push_str(&value_field("", MATERIAL_WIDTH));
    line.push_str(&value_field("", VALUE_WIDTH));
    line.push_str(&value_field("", VALUE_WIDTH));
    line.push_str(&value_field(&fixed(table.total_cut, vd), VALUE_WIDTH));
    line.push_str(&value_field(&fixed(table.total_fill, vd), VALUE_WIDTH));
    line.push_str(&fixed(table.net(), vd));
    line
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// Hard-clip to the column width by characters, then left-justify.
fn text_field(text: &str, width: usize) -> String {
    let clipped: String = text.chars().take(width).collect();
    format!("{clipped:<width$}")
}

/// Left-justify without clipping.
fn value_field(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

/// Fixed-point, locale-independent. Never scientific notation.
fn fixed(value: f64, decimals: u8) -> String {
    format!("{:.*}", usize::from(decimals), value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
