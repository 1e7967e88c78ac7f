//! In-process Python reindentation analysis.
//!
//! A port of the classic `reindent` normalization, reduced to what a
//! pre-commit check needs: decide whether rewriting a source to the standard
//! 4-space indentation would change it. Normalization expands tabs at
//! 8-column stops, maps each observed indent level to a multiple of the
//! configured width, strips trailing whitespace, and enforces a final
//! newline. Only the first line of each statement is reindented: lines
//! inside triple-quoted strings, inside open brackets, or after a backslash
//! continuation keep their indentation. Checking mode only; the file on
//! disk is never touched.

/// Tab stop used when measuring existing indentation.
const TAB_STOP: usize = 8;

/// Analyzer that reports whether a Python source needs reindenting.
#[derive(Debug, Clone, Copy)]
pub struct Reindenter {
    indent: usize,
}

impl Default for Reindenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reindenter {
    /// Creates an analyzer for the standard 4-space indentation.
    #[must_use]
    pub const fn new() -> Self {
        Self { indent: 4 }
    }

    /// Creates an analyzer with a custom indent width.
    #[must_use]
    pub const fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Returns true if normalizing `source` would change it.
    #[must_use]
    pub fn needs_reindent(&self, source: &str) -> bool {
        self.reindent(source) != source
    }

    /// Produces the normalized form of `source`.
    ///
    /// Indent levels are tracked as a stack: a deeper line opens a new level
    /// one indent-width beyond its parent, a shallower line pops back to the
    /// enclosing level. Blank lines are reduced to a bare newline and do not
    /// affect the stack. String interiors and statement continuations pass
    /// through with their indentation intact.
    #[must_use]
    pub fn reindent(&self, source: &str) -> String {
        if source.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(source.len());
        // (observed width, normalized width), with a (0, 0) sentinel
        let mut levels: Vec<(usize, usize)> = vec![(0, 0)];
        let mut state = ScanState::default();

        for line in source.split_inclusive('\n') {
            let content = line.strip_suffix('\n').unwrap_or(line);

            // Inside a triple-quoted string or a continued statement the
            // indentation is not ours to change
            if state.carries_over() {
                out.push_str(content.trim_end());
                out.push('\n');
                state.scan(content);
                continue;
            }

            let stripped = content.trim_end();
            if stripped.is_empty() {
                out.push('\n');
                continue;
            }

            let width = indent_width(stripped);
            while levels.last().is_some_and(|&(seen, _)| seen > width) {
                levels.pop();
            }

            let (seen, enclosing) = levels.last().copied().unwrap_or((0, 0));
            let norm = if width == seen {
                enclosing
            } else {
                let deeper = enclosing + self.indent;
                levels.push((width, deeper));
                deeper
            };

            for _ in 0..norm {
                out.push(' ');
            }
            out.push_str(stripped.trim_start());
            out.push('\n');

            state.scan(stripped);
        }

        out
    }
}

/// Lexical state carried across lines: whether the next line continues a
/// triple-quoted string or an unfinished statement.
#[derive(Debug, Clone, Copy, Default)]
struct ScanState {
    /// Quote character of the open triple-quoted string, if any.
    triple: Option<char>,
    /// Bracket nesting depth left open by previous lines.
    depth: usize,
    /// Previous line ended with a backslash outside any string.
    backslash: bool,
}

impl ScanState {
    /// Returns true if the next line belongs to a string or statement begun
    /// earlier and must keep its indentation.
    fn carries_over(self) -> bool {
        self.triple.is_some() || self.depth > 0 || self.backslash
    }

    /// Advances the state across one line of source.
    fn scan(&mut self, line: &str) {
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;
        self.backslash = false;

        while i < chars.len() {
            let c = chars[i];

            if let Some(q) = self.triple {
                if c == q && chars.get(i + 1) == Some(&q) && chars.get(i + 2) == Some(&q) {
                    self.triple = None;
                    i += 3;
                } else if c == '\\' {
                    i += 2;
                } else {
                    i += 1;
                }
                continue;
            }

            match c {
                '#' => break,
                '\'' | '"' => {
                    if chars.get(i + 1) == Some(&c) && chars.get(i + 2) == Some(&c) {
                        self.triple = Some(c);
                        i += 3;
                    } else {
                        // single-line string literal: skip to its closing quote
                        i += 1;
                        while i < chars.len() {
                            if chars[i] == '\\' {
                                i += 2;
                            } else if chars[i] == c {
                                i += 1;
                                break;
                            } else {
                                i += 1;
                            }
                        }
                    }
                },
                '(' | '[' | '{' => {
                    self.depth += 1;
                    i += 1;
                },
                ')' | ']' | '}' => {
                    self.depth = self.depth.saturating_sub(1);
                    i += 1;
                },
                '\\' if i + 1 == chars.len() => {
                    self.backslash = true;
                    i += 1;
                },
                _ => i += 1,
            }
        }
    }
}

/// Measures leading whitespace in columns, expanding tabs.
fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width = width / TAB_STOP * TAB_STOP + TAB_STOP,
            _ => break,
        }
    }
    width
}
