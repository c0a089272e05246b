use super::EmitterConfig;

/// Renders the boilerplate placed at the top of every generated file
///
/// ```text
/// // this file <generation message><EOL>
/// <EOL>
/// // by <emitter><EOL>
/// ```
pub fn render_header(config: &EmitterConfig, emitter_id: &str) -> String {
    let eol = config.line_terminator();
    format!(
        "// this file {}{eol}{eol}// by {}{eol}",
        config.generation_message(),
        emitter_id,
    )
}
