use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter PDF file name: ";

/// Ask for the PDF file name on `output` and read one line from `input`.
///
/// The answer is trimmed. End of input or a blank answer is an error.
pub fn ask_file_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, String> {
    write!(output, "{PROMPT}").map_err(|e| format!("failed to write prompt: {e}"))?;
    output
        .flush()
        .map_err(|e| format!("failed to write prompt: {e}"))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| format!("failed to read file name: {e}"))?;
    if read == 0 {
        return Err("no file name given".to_string());
    }

    let name = line.trim();
    if name.is_empty() {
        return Err("no file name given".to_string());
    }
    Ok(name.to_string())
}
