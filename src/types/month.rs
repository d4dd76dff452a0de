/// Month column headers of the wide-format source, in calendar order.
pub const MONTH_COLUMNS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Three-letter abbreviation for a month number, `"???"` outside `1..=12`.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_COLUMNS.get(idx as usize))
        .copied()
        .unwrap_or("???")
}

/// Month number (1–12) for a month column header.
pub fn month_number(column: &str) -> Option<u32> {
    MONTH_COLUMNS
        .iter()
        .position(|name| *name == column)
        .map(|idx| idx as u32 + 1)
}
