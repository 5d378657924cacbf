use super::synthesize::OutputFormat;
use super::utils::load_style;
use crate::comment::{
    classify_continuation, leading_whitespace, parse_function_signature, ContinuationKind,
    FunctionSignature,
};
use crate::error::{Error as JsdocError, Result as JsdocResult};
use serde::Serialize;
use std::path::PathBuf;

/// What the engine reads from a single line
#[derive(Debug, Serialize)]
pub struct LineReport<'a> {
    pub continuation: ContinuationKind,
    pub indentation: &'a str,
    pub function: Option<FunctionSignature>,
}

impl<'a> LineReport<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            continuation: classify_continuation(line),
            indentation: leading_whitespace(line),
            function: parse_function_signature(line),
        }
    }
}

/// Run the classify subcommand
pub fn classify(line: &str, format: OutputFormat) -> JsdocResult<()> {
    let report = LineReport::new(line);
    match format {
        OutputFormat::Text => {
            println!("{}", report.continuation);
            println!("indentation: {:?}", report.indentation);
            if let Some(function) = &report.function {
                let name = function.name.as_deref().unwrap_or("<anonymous>");
                println!("function: {}({})", name, function.params.join(", "));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| JsdocError::internal(format!("Failed to serialize report: {}", e)))?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Run the style subcommand: print the effective style as JSON
pub fn style(style_path: Option<&PathBuf>) -> JsdocResult<()> {
    let style = load_style(style_path)?;
    println!("{}", style.to_json()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_report_json() {
        let report = LineReport::new("  function add(a, b) {");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["continuation"], "NONE");
        assert_eq!(value["indentation"], "  ");
        assert_eq!(value["function"]["name"], "add");
        assert_eq!(value["function"]["params"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_line_report_without_function() {
        let report = LineReport::new(" * gutter");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["continuation"], "BLOCK_MIDDLE");
        assert!(value["function"].is_null());
    }
}
