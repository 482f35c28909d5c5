use bitcalc::syntax::{TokenKind, tokenize};
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

#[derive(Debug)]
struct PaletteItem<'a> {
    name: &'a str,
    fg: Color,
}

const PALETTE: &[PaletteItem] = &[
    PaletteItem { name: "", fg: Color::White },
    PaletteItem { name: "number", fg: Color::Cyan },
    PaletteItem { name: "operator", fg: Color::Magenta },
    PaletteItem { name: "invalid", fg: Color::Red },
];

fn style_for(kind: TokenKind) -> Style {
    let name = match kind {
        TokenKind::Number(_) => "number",
        TokenKind::Operator(_) => "operator",
        TokenKind::Oversized(_) | TokenKind::Invalid => "invalid",
    };
    let fg = PALETTE
        .iter()
        .find(|item| item.name == name)
        .map_or(PALETTE[0].fg, |item| item.fg);
    Style::new().fg(fg)
}

/// Colors postfix tokens as they are typed.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let plain = Style::new().fg(PALETTE[0].fg);

        let mut curr_end = 0;
        for token in tokenize(line) {
            let start = token.span.0.start;
            if start > curr_end {
                output.push((plain, line[curr_end..start].to_string()));
            }
            output.push((style_for(token.kind), token.text.to_string()));
            curr_end = token.span.0.end;
        }
        if curr_end < line.len() {
            output.push((plain, line[curr_end..].to_string()));
        }

        output
    }
}
