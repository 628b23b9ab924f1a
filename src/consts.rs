/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Number of months in a calendar year
pub const MONTHS_PER_YEAR: usize = MAX_MONTH as usize;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Month display labels for Traditional Chinese (index 0 unused, months are 1-indexed)
pub const MONTH_LABELS_ZH_TW: [&str; 13] = [
    "",     // index 0 unused (months are 1-indexed)
    "1月",  // January
    "2月",  // February
    "3月",  // March
    "4月",  // April
    "5月",  // May
    "6月",  // June
    "7月",  // July
    "8月",  // August
    "9月",  // September
    "10月", // October
    "11月", // November
    "12月", // December
];

/// Month display labels for English (index 0 unused, months are 1-indexed)
pub const MONTH_LABELS_EN: [&str; 13] = [
    "", // index 0 unused (months are 1-indexed)
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
