use console::Term;

const TARGET_PROMPT: &str = "Enter the IP or IP block (e.g., 192.168.1.0/24): ";
const OUTPUT_PROMPT: &str = "Enter the output file name (press Enter to use default): ";

/// What to sweep and where to store the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepRequest {
    pub target: String,
    pub output: Option<String>,
}

/// Fills in whatever the command line left out by asking on the terminal.
///
/// Without a target both questions are asked, the way the interactive tool
/// always did. With a target nothing is asked and a missing output path
/// falls back to the derived name.
pub fn resolve_request(
    target: Option<String>,
    output: Option<String>,
) -> anyhow::Result<SweepRequest> {
    let Some(target) = target else {
        let term = Term::stdout();
        let target = ask(&term, TARGET_PROMPT)?;
        let output = match output {
            Some(path) => Some(path),
            None => non_empty(ask(&term, OUTPUT_PROMPT)?),
        };
        return Ok(SweepRequest { target, output });
    };

    Ok(SweepRequest {
        target,
        output: output.and_then(non_empty),
    })
}

fn ask(term: &Term, question: &str) -> anyhow::Result<String> {
    term.write_str(question)?;
    Ok(term.read_line()?)
}

fn non_empty(answer: String) -> Option<String> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
