//! Prompt input and response output.
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};

/// Read the prompt from `path`, or all of stdin when no path is given.
pub fn read_prompt(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading prompt from {}", path.display())),
        None => {
            let mut prompt = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut prompt)
                .context("reading prompt from stdin")?;
            Ok(prompt)
        }
    }
}

/// Write `content` to `path` as-is, or to stdout with a trailing newline.
pub fn write_response(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("writing response to {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            write_terminated(&mut stdout, content)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn write_terminated(out: &mut impl Write, content: &str) -> io::Result<()> {
    out.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminated(content: &str) -> String {
        let mut buf = Vec::new();
        write_terminated(&mut buf, content).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn stdout_output_ends_with_single_newline() {
        assert_eq!(terminated("answer"), "answer\n");
        assert_eq!(terminated("answer\n"), "answer\n");
        assert_eq!(terminated(""), "\n");
    }

    #[test]
    fn file_output_is_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");

        write_response(Some(&path), "no newline").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "no newline");
    }

    #[test]
    fn reads_prompt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.md");
        fs::write(&path, "use kimi\nwrite a slogan").unwrap();

        assert_eq!(read_prompt(Some(&path)).unwrap(), "use kimi\nwrite a slogan");
    }

    #[test]
    fn missing_prompt_file_names_the_path() {
        let err = read_prompt(Some(Path::new("/definitely/not/here.md"))).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.md"));
    }
}
