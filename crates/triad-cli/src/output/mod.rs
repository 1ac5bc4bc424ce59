use serde::Serialize;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response as JSON. `Text` falls back to pretty JSON
/// for commands without a dedicated text view.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Text => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Terminal width from `COLUMNS`, when it is a sane value.
pub fn term_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40)
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Counts {
        endpoint: &'static str,
        claims: usize,
    }

    const COUNTS: Counts = Counts {
        endpoint: "GET /users/{id}",
        claims: 3,
    };

    #[test]
    fn text_falls_back_to_pretty_json() {
        let text = render(&COUNTS, OutputFormat::Text).expect("render");
        assert_eq!(text, render(&COUNTS, OutputFormat::Json).expect("render"));
        assert!(text.lines().count() > 1);
    }

    #[test]
    fn raw_is_compact() {
        let raw = render(&COUNTS, OutputFormat::Raw).expect("render");
        assert_eq!(raw, r#"{"endpoint":"GET /users/{id}","claims":3}"#);
    }
}
