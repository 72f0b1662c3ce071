use chrono::Duration;

use crate::timefmt::human_duration;

/// Render a chart value with its unit code.
///
/// Lookup order matters: the simple-format table wins over the physical
/// unit registry, so a key like `percent` is never re-interpreted as a
/// dimension. Unrecognized units degrade to the bare number; this layer
/// never fails.
pub fn format_value(value: f64, unit: Option<&str>) -> String {
    let Some(unit) = unit.map(str::trim).filter(|u| !u.is_empty()) else {
        return format_number(value);
    };
    if let Some(s) = simple_format(value, unit) {
        return s;
    }
    match lookup(unit) {
        Some(Physical::Time { to_secs }) => {
            human_duration(Duration::seconds((value * to_secs).round() as i64))
        }
        Some(Physical::Temperature(scale)) => {
            format!("{}C", format_number(scale.to_celsius(value)))
        }
        Some(Physical::Other { symbol }) => format!("{} {symbol}", format_number(value)),
        None => format_number(value),
    }
}

fn simple_format(value: f64, unit: &str) -> Option<String> {
    match unit {
        "percent" => Some(format!("{}%", format_number(value * 100.0))),
        "integer" => Some(group_thousands(value.round() as i64)),
        "usd" => Some(format_usd(value)),
        _ => None,
    }
}

enum Physical {
    Time { to_secs: f64 },
    Temperature(Scale),
    Other { symbol: &'static str },
}

enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    fn to_celsius(&self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Kelvin => value - 273.15,
        }
    }
}

fn lookup(unit: &str) -> Option<Physical> {
    let time = |to_secs| Some(Physical::Time { to_secs });
    let temp = |scale| Some(Physical::Temperature(scale));
    let other = |symbol| Some(Physical::Other { symbol });
    match unit.to_ascii_lowercase().as_str() {
        "second" | "seconds" | "sec" | "s" => time(1.0),
        "minute" | "minutes" | "min" => time(60.0),
        "hour" | "hours" | "hr" | "h" => time(3_600.0),
        "day" | "days" => time(86_400.0),
        "week" | "weeks" => time(604_800.0),

        "celsius" | "degc" => temp(Scale::Celsius),
        "fahrenheit" | "degf" => temp(Scale::Fahrenheit),
        "kelvin" => temp(Scale::Kelvin),

        "meter" | "meters" | "m" => other("m"),
        "kilometer" | "kilometers" | "km" => other("km"),
        "mile" | "miles" | "mi" => other("mi"),
        "foot" | "feet" | "ft" => other("ft"),
        "gram" | "grams" | "g" => other("g"),
        "kilogram" | "kilograms" | "kg" => other("kg"),
        "pound" | "pounds" | "lb" | "lbs" => other("lb"),
        "byte" | "bytes" => other("B"),
        "kilobyte" | "kilobytes" | "kb" => other("kB"),
        "megabyte" | "megabytes" | "mb" => other("MB"),
        "gigabyte" | "gigabytes" | "gb" => other("GB"),
        "terabyte" | "terabytes" | "tb" => other("TB"),
        "watt" | "watts" | "w" => other("W"),
        "volt" | "volts" | "v" => other("V"),
        "ampere" | "amperes" | "amp" | "amps" => other("A"),
        _ => None,
    }
}

/// Plain numeric display: integers without a decimal point, float noise
/// rounded away past six decimals.
fn format_number(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    format!("{rounded}")
}

fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 { format!("-{out}") } else { out }
}

fn format_usd(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}
