//! Display formatting for amounts and USD values
//!
//! Pure presentation helpers. On-chain math never consumes this output;
//! amounts sent to collaborators are always raw smallest-unit values.

/// Suffix family for abbreviated large numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactStyle {
    Short,
    Long,
}

/// How a run of leading fraction zeros is collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroRunStyle {
    Dots,
    Subscript,
}

#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Longest run of leading fraction zeros printed verbatim
    pub max_zeros: usize,
    pub min_trailing: usize,
    pub max_trailing: usize,
    /// Target total length used to adapt trailing digits to the integer part
    pub optimal_length: usize,
    /// Disable abbreviation and zero-run collapsing
    pub expanded: bool,
    /// Render whole numbers without fraction digits
    pub round_integers: bool,
    pub compact: CompactStyle,
    pub group: ZeroRunStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_zeros: 4,
            min_trailing: 2,
            max_trailing: 4,
            optimal_length: 6,
            expanded: false,
            round_integers: false,
            compact: CompactStyle::Short,
            group: ZeroRunStyle::Subscript,
        }
    }
}

const SHORT_SUFFIXES: [&str; 15] = [
    "", "K", "M", "B", "t", "q", "Q", "s", "S", "o", "n", "d", "U", "D", "T",
];

const LONG_SUFFIXES: [&str; 15] = [
    "",
    " Thousand",
    " Million",
    " Billion",
    " Trillion",
    " Quadrillion",
    " Quintillion",
    " Sextillion",
    " Septillion",
    " Octillion",
    " Nonillion",
    " Decillion",
    " Undecillion",
    " Duodecillion",
    " Tredecillion",
];

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Format a number for display
pub fn format_number(value: f64, options: &FormatOptions) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return String::new();
    }

    if value >= 1_000_000_000.0 && !options.expanded {
        return abbreviate(value, options.compact);
    }

    let rendered = value.to_string();
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let zeros_len = fraction.len() - fraction.trim_start_matches('0').len();
    let decimals: String = fraction[zeros_len..].chars().take(options.max_trailing).collect();

    let optimal_trailing = options.optimal_length.saturating_sub(integer.len());
    let min_trailing = optimal_trailing.min(options.min_trailing);
    let max_trailing = optimal_trailing.min(options.max_trailing);

    if value.abs() >= 1.0 {
        let (min_fd, max_fd) = if options.round_integers && value.fract() == 0.0 {
            (0, 0)
        } else {
            (min_trailing.min(max_trailing), max_trailing)
        };
        return grouped(value, min_fd, max_fd);
    }

    if !options.expanded && zeros_len > options.max_zeros {
        let marker = zero_run_marker(zeros_len, options.group);
        return format!("{}0.0{}{}", sign, marker, decimals);
    }

    let zeros = &fraction[..zeros_len];
    format!(
        "{}{}.{}{:0<width$}",
        sign,
        integer,
        zeros,
        decimals,
        width = max_trailing
    )
}

/// Scale into the nearest power-of-1000 bracket and attach its suffix
fn abbreviate(value: f64, style: CompactStyle) -> String {
    let mut scaled = value;
    let mut bracket = 0usize;
    while scaled.abs() >= 1000.0 && bracket < SHORT_SUFFIXES.len() - 1 {
        scaled /= 1000.0;
        bracket += 1;
    }

    let mantissa = format!("{:.2}", scaled);
    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    let suffix = match style {
        CompactStyle::Short => SHORT_SUFFIXES[bracket],
        CompactStyle::Long => LONG_SUFFIXES[bracket],
    };

    format!("{}{}", mantissa, suffix)
}

fn zero_run_marker(zeros: usize, style: ZeroRunStyle) -> String {
    match style {
        ZeroRunStyle::Dots => "...0".to_string(),
        ZeroRunStyle::Subscript => zeros
            .to_string()
            .chars()
            .map(|digit| SUBSCRIPT_DIGITS[digit as usize - '0' as usize])
            .collect(),
    }
}

/// Comma-grouped rendering with bounded fraction digits
fn grouped(value: f64, min_fd: usize, max_fd: usize) -> String {
    let rounded = format!("{:.*}", max_fd, value);
    let (sign, unsigned) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let mut fraction = frac_part.to_string();
    while fraction.len() > min_fd && fraction.ends_with('0') {
        fraction.pop();
    }

    let grouped_int = group_thousands(int_part);
    if fraction.is_empty() {
        format!("{}{}", sign, grouped_int)
    } else {
        format!("{}{}.{}", sign, grouped_int, fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
