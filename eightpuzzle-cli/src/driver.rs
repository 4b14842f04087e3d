use anyhow::{Result, bail};

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

/// Files and mode for one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub start: PathBuf,
    pub goal: PathBuf,
    pub mode: Option<String>,
}

/// Asks whether to run another puzzle and, if so, which one. Returns `None`
/// when the answer is anything but `y` or the input ends.
pub fn prompt_again(input: &mut impl BufRead, output: &mut impl Write) -> Result<Option<Request>> {
    let Some(answer) = ask(input, output, "Run puzzle again? (y/n)")? else {
        return Ok(None);
    };
    if !answer.eq_ignore_ascii_case("y") {
        return Ok(None);
    }

    let start = required(input, output, "Start file?")?;
    let goal = required(input, output, "Goal file?")?;
    let mode = ask(input, output, "Mode? (bfs/dfs/astar1/astar2)")?.filter(|m| !m.is_empty());
    Ok(Some(Request {
        start: PathBuf::from(start),
        goal: PathBuf::from(goal),
        mode,
    }))
}

fn required(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> Result<String> {
    match ask(input, output, question)? {
        Some(answer) if !answer.is_empty() => Ok(answer),
        _ => bail!("No answer to '{question}'"),
    }
}

fn ask(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> Result<Option<String>> {
    writeln!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn run(input: &str) -> (Result<Option<Request>>, String) {
        let mut output = Vec::new();
        let result = prompt_again(&mut Cursor::new(input), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_again() {
        let (result, output) = run("y\nstart.txt\n goal.txt \nastar2\n");
        assert_eq!(
            result.unwrap(),
            Some(Request {
                start: PathBuf::from("start.txt"),
                goal: PathBuf::from("goal.txt"),
                mode: Some("astar2".to_string()),
            })
        );
        assert_eq!(
            output,
            "Run puzzle again? (y/n)\nStart file?\nGoal file?\nMode? (bfs/dfs/astar1/astar2)\n"
        );
    }

    #[test]
    fn test_prompt_declined() {
        assert_eq!(run("n\n").0.unwrap(), None);
        assert_eq!(run("").0.unwrap(), None);
    }

    #[test]
    fn test_prompt_empty_mode() {
        let request = run("Y\na\nb\n\n").0.unwrap().unwrap();
        assert_eq!(request.mode, None);
        let request = run("y\na\nb\n").0.unwrap().unwrap();
        assert_eq!(request.mode, None);
    }

    #[test]
    fn test_prompt_missing_file() {
        let err = run("y\n\n").0.unwrap_err();
        assert_eq!(err.to_string(), "No answer to 'Start file?'");
    }
}
