use std::fmt::{self, Display};

use crate::tensor::Vector;

/// Controls how a [`Vector`] is rendered as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    /// Characters per line before wrapping
    pub linewidth: usize,
    /// Vectors longer than this are summarised with `...`
    pub threshold: usize,
    /// Elements kept at each end of a summarised vector
    pub edgeitems: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            linewidth: 75,
            threshold: 1000,
            edgeitems: 3,
        }
    }
}

/// A [`Vector`] paired with the [`PrintOptions`] to display it with.
pub struct Formatted<'a, T> {
    vector: &'a Vector<T>,
    options: PrintOptions,
}

impl<T> Vector<T> {
    pub fn display_with(&self, options: PrintOptions) -> Formatted<'_, T> {
        Formatted {
            vector: self,
            options,
        }
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with(PrintOptions::default()).fmt(f)
    }
}

impl<T: Display> Display for Formatted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.vector, self.options))
    }
}

/// Lays the elements out the way numpy's `str()` does for a 1-d array:
///
/// ```text
/// [ 4951  9902 14853]
/// [   0    1    2 ... 1997 1998 1999]
/// ```
fn render<T: Display>(vector: &Vector<T>, options: PrintOptions) -> String {
    let n = vector.len();
    let edge = options.edgeitems;
    let summarise = n > options.threshold && n > 2 * edge;

    let shown: Vec<&T> = if summarise {
        vector[..edge].iter().chain(&vector[n - edge..]).collect()
    } else {
        vector.iter().collect()
    };
    let words: Vec<String> = shown.iter().map(ToString::to_string).collect();
    let width = words.iter().map(String::len).max().unwrap_or(0);

    let mut items: Vec<String> = words.iter().map(|w| format!("{w:>width$}")).collect();
    if summarise {
        items.insert(edge, String::from("..."));
    }

    // the leading space of each line is where `[` goes on the first one
    let mut out = String::new();
    let mut line = String::from(" ");

    // every line keeps room for a closing bracket
    let limit = options.linewidth.saturating_sub(1);

    for (i, item) in items.iter().enumerate() {
        if line.len() + item.len() > limit && !line.trim().is_empty() {
            out.push_str(line.trim_end());
            out.push('\n');
            line = String::from(" ");
        }

        line.push_str(item);
        if i + 1 < items.len() {
            line.push(' ');
        }
    }
    out.push_str(&line);

    format!("[{}]", &out[1..])
}
