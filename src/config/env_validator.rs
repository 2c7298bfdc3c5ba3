//! Environment variable validation
//!
//! Invalid values fall back to the current setting and are reported through
//! `tracing` with a typo suggestion when one is close enough.

/// Validator for one enumerated environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, keeping `fallback` (and logging why) if it is invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                tracing::warn!("{}", self.diagnose(value));
                fallback
            }
        }
    }

    /// Human-readable explanation of why `value` was rejected
    pub fn diagnose(&self, value: &str) -> String {
        let input = value.trim().to_lowercase();
        let hint = match closest(&input, self.valid_values) {
            Some(suggested) if suggested != input => format!(". Did you mean '{}'?", suggested),
            _ => String::new(),
        };
        format!(
            "Invalid {} value '{}'{} (valid values: {})",
            self.var_name,
            value,
            hint,
            self.valid_values.join(", ")
        )
    }
}

/// Candidate within two edits of `input`, if any
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    candidates
        .iter()
        .map(|&c| (c, levenshtein(input, c)))
        .min_by_key(|&(_, dist)| dist)
        .filter(|&(_, dist)| dist <= 2)
        .map(|(c, _)| c)
}

/// Edit distance between two strings, by character
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];

    for (i, a_char) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}
