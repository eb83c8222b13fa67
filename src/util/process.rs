//! Subprocess execution utilities.

use std::ffi::OsStr;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    /// Get the arguments.
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Build the Command.
    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        cmd
    }

    /// Execute, forwarding child output line by line to this process's
    /// standard streams.
    ///
    /// Returns the raw `io::Error` on spawn failure so callers can fold it
    /// into their own error types.
    pub fn stream(&self) -> io::Result<ExitStatus> {
        self.stream_with_sinks(io::stdout(), io::stderr())
    }

    /// Execute, pumping each stdout/stderr line into the supplied sinks.
    ///
    /// One reader thread per stream; both are joined before the exit status
    /// is collected, so no trailing output is dropped for short-lived
    /// children.
    pub fn stream_with_sinks<O, E>(&self, stdout: O, stderr: E) -> io::Result<ExitStatus>
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        let mut cmd = self.build_command();
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let mut child = cmd.spawn()?;

        let out_pump = child.stdout.take().map(|out| spawn_line_pump(out, stdout));
        let err_pump = child.stderr.take().map(|err| spawn_line_pump(err, stderr));

        if let Some(pump) = out_pump {
            let _ = pump.join();
        }
        if let Some(pump) = err_pump {
            let _ = pump.join();
        }

        child.wait()
    }

    /// Display the command for log and error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Spawn a thread that copies lines from `reader` into `sink` until EOF.
///
/// Lines are forwarded as raw bytes; localized tool output is not
/// guaranteed to be UTF-8, and a stray byte must not close the pipe while
/// the child is still writing.
fn spawn_line_pump<R, W>(reader: R, mut sink: W) -> thread::JoinHandle<()>
where
    R: Read + Send + 'static,
    W: Write + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(reader);
        let mut line = Vec::new();
        loop {
            line.clear();
            match reader.read_until(b'\n', &mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    if sink.write_all(&line).is_err() {
                        break;
                    }
                }
            }
        }
    })
}

/// Find an executable in PATH.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}
