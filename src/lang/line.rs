const OPERATOR_CHARS: &[char] = &['+', '-', '/', '*', '%', '>', '<', '&', '='];

/// One logical source line with comments removed.
///
/// Leading spaces are kept because they carry the indentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLine {
    pub text: String,
    /// Tab characters found outside strings, each now a single space.
    pub tabs: usize,
    /// The line was longer than the limit and lost its tail.
    pub truncated: bool,
}

impl SourceLine {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn leading_spaces(&self) -> usize {
        self.text.chars().take_while(|&c| c == ' ').count()
    }
}

impl std::fmt::Display for SourceLine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn is_quote(prev: Option<char>, ch: char) -> bool {
    ch == '"' && prev != Some('\\')
}

fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Reads the physical line starting at `cursor`.
///
/// Returns the line and the cursor just past its line break, or `None` at
/// the end of `source`. A CR/LF pair in either order is one break.
pub fn load_line(source: &str, cursor: usize, max_len: usize) -> Option<(SourceLine, usize)> {
    let rest = source.get(cursor..)?;
    if rest.is_empty() {
        return None;
    }
    let mut line = SourceLine::default();
    let mut chars = rest.char_indices().peekable();
    let mut in_string = false;
    let mut comment = false;
    let mut prev: Option<char> = None;
    let mut kept = 0;
    let mut end = rest.len();
    while let Some((index, ch)) = chars.next() {
        if is_line_break(ch) {
            end = index + 1;
            if let Some(&(_, pk)) = chars.peek() {
                if is_line_break(pk) && pk != ch {
                    end += 1;
                }
            }
            break;
        }
        if comment {
            continue;
        }
        let out = if in_string {
            if is_quote(prev, ch) {
                in_string = false;
                ch
            } else if ch == '\t' {
                '~'
            } else if ch.is_whitespace() || ch.is_control() {
                '_'
            } else {
                ch
            }
        } else if is_quote(prev, ch) {
            in_string = true;
            ch
        } else if ch == '/' && matches!(chars.peek(), Some(&(_, '/'))) {
            comment = true;
            continue;
        } else if ch == '\t' {
            line.tabs += 1;
            ' '
        } else if ch.is_whitespace() || ch.is_control() {
            ' '
        } else {
            ch
        };
        prev = Some(ch);
        if kept < max_len {
            line.text.push(out);
            kept += 1;
        } else {
            line.truncated = true;
        }
    }
    if line.text.trim().is_empty() {
        line.text.clear();
    } else {
        let len = line.text.trim_end().len();
        line.text.truncate(len);
    }
    Some((line, cursor + end))
}

/// Surrounds every operator character outside a string with single
/// spaces. Existing whitespace and the ends of the line count as spacing,
/// so the result is stable when spaced again.
pub fn space_operators(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut in_string = false;
    let mut prev: Option<char> = None;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if is_quote(prev, ch) {
            in_string = !in_string;
        }
        if !in_string && OPERATOR_CHARS.contains(&ch) {
            if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                out.push(' ');
            }
            out.push(ch);
            if let Some(next) = chars.peek() {
                if !next.is_whitespace() {
                    out.push(' ');
                }
            }
        } else {
            out.push(ch);
        }
        prev = Some(ch);
    }
    out
}
