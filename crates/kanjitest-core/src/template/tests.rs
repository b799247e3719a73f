//! Tests for the template engine

use super::engine::{tokenize, Segment};
use super::*;

fn title_values() -> TemplateValues {
    TemplateValues::new().with("TITLE", "Kanji test")
}

#[test]
fn test_render_single_token() {
    let template = Template::new("document.txt", r"\section*{@TITLE@}");
    let result = template.render(&title_values()).unwrap();
    assert_eq!(result, r"\section*{Kanji test}");
}

#[test]
fn test_render_repeated_token() {
    let template = Template::new("word.txt", "@FONTSIZE@pt/@FONTSIZE@pt");
    let values = TemplateValues::new().with("FONTSIZE", 50);
    assert_eq!(template.render(&values).unwrap(), "50pt/50pt");
}

#[test]
fn test_render_adjacent_tokens() {
    let template = Template::new("word.txt", "@JP@@FR@");
    let values = TemplateValues::new().with("JP", "水").with("FR", "eau");
    assert_eq!(template.render(&values).unwrap(), "水eau");
}

#[test]
fn test_values_are_not_rescanned() {
    // a value that looks like a token must come out verbatim
    let template = Template::new("document.txt", "@TITLE@ / @SUBTITLE@");
    let values = TemplateValues::new()
        .with("TITLE", "@SUBTITLE@")
        .with("SUBTITLE", "N5");
    assert_eq!(template.render(&values).unwrap(), "@SUBTITLE@ / N5");
}

#[test]
fn test_latex_markup_passes_through() {
    let template = Template::new("document.txt", "@SUBTITLE@");
    let subtitle = r"\begin{CJK}{UTF8}{min}漢字検定\end{CJK} & 100\%";
    let values = TemplateValues::new().with("SUBTITLE", subtitle);
    assert_eq!(template.render(&values).unwrap(), subtitle);
}

#[test]
fn test_stray_at_signs_are_literal() {
    let source = "\\makeatletter\\@title\\makeatother mail@example.com @ @lower@ @@TITLE@";
    let template = Template::new("document.txt", source);
    let result = template.render(&title_values()).unwrap();
    assert_eq!(
        result,
        "\\makeatletter\\@title\\makeatother mail@example.com @ @lower@ @Kanji test"
    );
}

#[test]
fn test_unicode_text_around_tokens() {
    let template = Template::new("word.txt", "漢字「@JP@」検定");
    let values = TemplateValues::new().with("JP", "水");
    assert_eq!(template.render(&values).unwrap(), "漢字「水」検定");
}

#[test]
fn test_error_undefined_token() {
    let template = Template::new("content.txt", "line one\nline two @WORDS@\n");
    match template.render(&TemplateValues::new()) {
        Err(TemplateError::UndefinedToken {
            template,
            token,
            line,
        }) => {
            assert_eq!(template, "content.txt");
            assert_eq!(token, "WORDS");
            assert_eq!(line, 2);
        }
        other => panic!("Expected UndefinedToken error, got {:?}", other),
    }
}

#[test]
fn test_error_unused_value_in_debug() {
    let template = Template::new("document.txt", "@TITLE@");
    let values = title_values().with("POINTS", 20);
    let result = template.render(&values);
    if cfg!(debug_assertions) {
        match result {
            Err(TemplateError::UnusedValue { template, token }) => {
                assert_eq!(template, "document.txt");
                assert_eq!(token, "POINTS");
            }
            other => panic!("Expected UnusedValue error, got {:?}", other),
        }
    } else {
        assert_eq!(result.unwrap(), "Kanji test");
    }
}

#[test]
fn test_error_display() {
    let err = TemplateError::UndefinedToken {
        template: "word.txt".to_string(),
        token: "JP".to_string(),
        line: 3,
    };
    assert_eq!(err.to_string(), "Undefined token '@JP@' at line 3 of 'word.txt'");
}

#[test]
fn test_tokens() {
    let template = Template::new("content.txt", "@COLS@ @WORDS@ @COLS@ @nope@");
    let tokens: Vec<&str> = template.tokens().into_iter().collect();
    assert_eq!(tokens, vec!["COLS", "WORDS"]);
}

#[test]
fn test_tokenize_segments() {
    let segments = tokenize("a @B@\n@C_1@");
    assert_eq!(
        segments,
        vec![
            Segment::Text("a "),
            Segment::Token { name: "B", line: 1 },
            Segment::Text("\n"),
            Segment::Token {
                name: "C_1",
                line: 2
            },
        ]
    );
}

#[test]
fn test_tokenize_trailing_delimiter() {
    assert_eq!(tokenize("end@"), vec![Segment::Text("end@")]);
    assert_eq!(tokenize("@"), vec![Segment::Text("@")]);
    assert!(tokenize("").is_empty());
}
