//! Output sinks for the captured PNG bytes

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{input, Error, Result};

/// Where the PNG bytes end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Raw bytes to standard output; no filesystem interaction
    Stdout,
    /// A file path, joined against the working directory when relative
    File(PathBuf),
}

impl OutputSink {
    /// Pick the sink for a conversion.
    ///
    /// `--stdout` wins over everything. An explicit output argument is used
    /// as given; otherwise the filename is content-addressed from the
    /// resolved input string.
    pub fn select(output: Option<&str>, to_stdout: bool, resolved_input: &str) -> Self {
        if to_stdout {
            return OutputSink::Stdout;
        }
        match output {
            Some(path) => OutputSink::File(PathBuf::from(path)),
            None => OutputSink::File(PathBuf::from(input::default_output_name(resolved_input))),
        }
    }

    /// The full path written to, for file sinks
    pub fn path(&self, cwd: &Path) -> Option<PathBuf> {
        match self {
            OutputSink::Stdout => None,
            OutputSink::File(path) => Some(cwd.join(path)),
        }
    }

    /// Deliver the bytes
    pub fn write(&self, bytes: &[u8]) -> Result<()> {
        match self {
            OutputSink::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle
                    .write_all(bytes)
                    .and_then(|()| handle.flush())
                    .map_err(|e| Error::OutputError(format!("stdout write failed: {}", e)))
            }
            OutputSink::File(path) => {
                let cwd = std::env::current_dir()
                    .map_err(|e| Error::OutputError(format!("cannot resolve working directory: {}", e)))?;
                let full = cwd.join(path);
                std::fs::write(&full, bytes)
                    .map_err(|e| Error::OutputError(format!("'{}': {}", full.display(), e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdout_flag_wins_over_explicit_output() {
        let sink = OutputSink::select(Some("out.png"), true, "<div></div>");
        assert_eq!(sink, OutputSink::Stdout);
        assert_eq!(sink.path(Path::new("/work")), None);
    }

    #[test]
    fn explicit_output_is_used_verbatim() {
        let sink = OutputSink::select(Some("shot.png"), false, "<div></div>");
        assert_eq!(sink, OutputSink::File(PathBuf::from("shot.png")));
        assert_eq!(
            sink.path(Path::new("/work")),
            Some(PathBuf::from("/work/shot.png"))
        );
    }

    #[test]
    fn default_output_is_content_addressed() {
        let sink = OutputSink::select(None, false, "abc");
        assert_eq!(
            sink,
            OutputSink::File(PathBuf::from(
                "a9993e364706816aba3e25717850c26c9cd0d89d.png"
            ))
        );
    }

    #[test]
    fn file_sink_writes_relative_to_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let sink = OutputSink::select(Some("shot.png"), false, "<div></div>");
        sink.write(b"\x89PNG\r\n\x1a\n").unwrap();

        std::env::set_current_dir(original).unwrap();
        let written = std::fs::read(dir.path().join("shot.png")).unwrap();
        assert_eq!(&written, b"\x89PNG\r\n\x1a\n");
    }
}
