use nu_ansi_term::{Color, Style};
use reedline::StyledText;
use shisoku_core::parser::{Scanner, Token};

const PLAIN: Color = Color::White;
const NUMBER: Color = Color::Cyan;
const OPERATOR: Color = Color::Yellow;
const INVALID: Color = Color::Red;

/// Colors operands and operators as they are typed.
///
/// Characters the scanner rejects are shown in red; separators keep the
/// plain color.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for lexeme in Scanner::new(line) {
            let (span, fg) = match lexeme {
                Ok(lexeme) => {
                    let fg = match lexeme.token {
                        Token::Operand => NUMBER,
                        // Runs like `*-` are rejected later; flag them now.
                        Token::Operator if lexeme.text.len() > 1 => INVALID,
                        Token::Operator => OPERATOR,
                    };
                    (lexeme.span, fg)
                }
                Err(e) => (e.span, INVALID),
            };

            if span.0.start > curr_end {
                output.push((
                    Style::new().fg(PLAIN),
                    line[curr_end..span.0.start].to_string(),
                ));
            }
            output.push((Style::new().fg(fg), span.str_of(line).to_string()));
            curr_end = span.0.end;
        }

        if curr_end < line.len() {
            output.push((Style::new().fg(PLAIN), line[curr_end..].to_string()));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reedline::Highlighter as _;

    fn colored(line: &str) -> Vec<(Color, String)> {
        Highlighter
            .highlight(line, 0)
            .buffer
            .into_iter()
            .map(|(style, text)| (style.foreground.unwrap_or(PLAIN), text))
            .collect()
    }

    #[test]
    fn test_covers_whole_line() {
        let line = " 12 + 3 = ";
        let text: String = colored(line).into_iter().map(|(_, t)| t).collect();
        assert_eq!(text, line);
    }

    #[test]
    fn test_colors() {
        assert_eq!(
            colored("1+x"),
            vec![
                (NUMBER, "1".to_string()),
                (OPERATOR, "+".to_string()),
                (INVALID, "x".to_string()),
            ]
        );
        assert_eq!(colored("2*-3")[1], (INVALID, "*-".to_string()));
    }
}
