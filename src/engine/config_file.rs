/// Reads whitespace separated attribute lines. Comments start with `;`. Lines without tokens
/// are skipped.
pub struct ConfigFile<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: Option<ConfigLine<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigLine<'a> {
    /// 1 based line number in the source text.
    pub number: usize,
    pub tokens: Vec<&'a str>,
}

/// Splits a line into whitespace separated tokens. Everything from a token starting with `;` to
/// the end of the line is a comment.
fn split_line(line: &str) -> Vec<&str> {
    line.split_whitespace()
        .take_while(|token| !token.starts_with(';'))
        .collect()
}

impl<'a> ConfigFile<'a> {
    pub fn new(data: &'a str) -> Self {
        let mut s = Self {
            lines: data.lines().enumerate(),
            current: None,
        };

        s.advance();

        s
    }

    /// Move to the next line that carries tokens.
    pub fn advance(&mut self) {
        loop {
            self.current = self.lines.next().map(|(index, line)| ConfigLine {
                number: index + 1,
                tokens: split_line(line),
            });
            if let Some(ref current) = self.current {
                if current.tokens.is_empty() {
                    continue;
                }
            }
            break;
        }
    }
}

impl<'a> Iterator for ConfigFile<'a> {
    type Item = ConfigLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        self.advance();
        Some(current)
    }
}
