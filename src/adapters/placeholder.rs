//! Substitution of placeholder tokens with generated values.
//!
//! Samples carry tokens such as `@email` or `@integer(10, 100)`. Rendering
//! them as-is is the default; this expander is the opt-in presentation step
//! that turns each recognised token into a concrete fake value.

use chrono::{TimeZone, Utc};
use fake::faker::internet::en::{DomainSuffix, SafeEmail};
use fake::faker::lorem::en::{Paragraph, Sentence, Word, Words};
use fake::Fake;
use rand::Rng;
use serde_json::{json, Map, Number, Value};

use crate::domain::primitives::PLACEHOLDER_SENTINEL;

/// Lower bound for generated timestamps (2000-01-01T00:00:00Z).
const EPOCH_2000: i64 = 946_684_800;

#[derive(Debug, Default, Clone)]
pub struct PlaceholderExpander;

impl PlaceholderExpander {
    pub fn new() -> Self {
        Self
    }

    /// Returns a copy of `value` with every recognised token replaced.
    pub fn expand(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => self.expand_token(s).unwrap_or_else(|| value.clone()),
            Value::Array(items) => Value::Array(items.iter().map(|v| self.expand(v)).collect()),
            Value::Object(map) => {
                let expanded: Map<String, Value> = map
                    .iter()
                    .map(|(k, v)| (k.clone(), self.expand(v)))
                    .collect();
                Value::Object(expanded)
            }
            other => other.clone(),
        }
    }

    /// Generates a value for a single token, `None` if `token` is not one.
    pub fn expand_token(&self, token: &str) -> Option<Value> {
        let (name, args) = parse_token(token)?;
        let mut rng = rand::thread_rng();

        let value = match name {
            "string" => json!(Word().fake::<String>()),
            "email" => json!(SafeEmail().fake::<String>()),
            "datetime" => json!(random_timestamp(&mut rng, "%Y-%m-%d %H:%M:%S")),
            "date" => json!(random_timestamp(&mut rng, "%Y-%m-%d")),
            "integer" => {
                let (min, max) = int_range(&args, 0, 100);
                json!(rng.gen_range(min..=max))
            }
            "float" => {
                let (min, max) = int_range(&args, 0, 100);
                let (dmin, dmax) = int_range(args.get(2..).unwrap_or_default(), 0, 17);
                random_float(&mut rng, min, max, dmin.max(0) as usize, dmax.max(0) as usize)
            }
            "boolean" => json!(rng.gen_bool(0.5)),
            "image" => json!(image_url(&args)),
            "paragraph" => json!(Paragraph(3..7).fake::<String>()),
            "sentence" => json!(Sentence(12..18).fake::<String>()),
            "Title" | "title" => json!(title(Words(3..7).fake::<Vec<String>>())),
            "url" => json!(format!(
                "http://{}.{}",
                Word().fake::<String>(),
                DomainSuffix().fake::<String>()
            )),
            "id" => json!(uuid::Uuid::new_v4().to_string()),
            _ => return None,
        };
        Some(value)
    }
}

/// Splits `@name(arg, "arg")` into its name and unquoted arguments.
fn parse_token(token: &str) -> Option<(&str, Vec<String>)> {
    let body = token.strip_prefix(PLACEHOLDER_SENTINEL)?;

    let Some(open) = body.find('(') else {
        return Some((body, Vec::new()));
    };
    let inner = body[open + 1..].strip_suffix(')')?;

    let args = inner
        .split(',')
        .map(|arg| arg.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|arg| !arg.is_empty())
        .collect();
    Some((&body[..open], args))
}

fn int_range(args: &[String], default_min: i64, default_max: i64) -> (i64, i64) {
    let min = args
        .first()
        .and_then(|a| a.parse().ok())
        .unwrap_or(default_min);
    let max = args
        .get(1)
        .and_then(|a| a.parse().ok())
        .unwrap_or(default_max.max(min));
    if min <= max {
        (min, max)
    } else {
        (max, min)
    }
}

fn random_float<R: Rng>(rng: &mut R, min: i64, max: i64, dmin: usize, dmax: usize) -> Value {
    let whole = rng.gen_range(min..=max);
    let (dmin, dmax) = if dmin <= dmax { (dmin, dmax) } else { (dmax, dmin) };
    let places = rng.gen_range(dmin..=dmax);

    let digits: String = (0..places)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    let text = if digits.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, digits)
    };

    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| json!(whole))
}

fn random_timestamp<R: Rng>(rng: &mut R, format: &str) -> String {
    let now = Utc::now().timestamp();
    let secs = rng.gen_range(EPOCH_2000..=now.max(EPOCH_2000));
    match Utc.timestamp_opt(secs, 0).single() {
        Some(ts) => ts.format(format).to_string(),
        None => Utc::now().format(format).to_string(),
    }
}

/// `@image(size, background, foreground, text)` as a dummyimage.com URL.
fn image_url(args: &[String]) -> String {
    let arg = |i: usize, default: &str| {
        args.get(i)
            .map(|a| a.trim_start_matches('#').to_string())
            .unwrap_or_else(|| default.to_string())
    };
    let mut url = format!(
        "http://dummyimage.com/{}/{}/{}",
        arg(0, "100x100"),
        arg(1, "000"),
        arg(2, "FFF")
    );
    if let Some(text) = args.get(3) {
        url.push_str("&text=");
        url.push_str(text);
    }
    url
}

fn title(words: Vec<String>) -> String {
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
