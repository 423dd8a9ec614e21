/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use std::io::{self, BufRead, Write};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Blocking conversation with the person running the program.
///
/// Every call returns only once the user has answered.
pub trait UserInteraction {
    /// Asks an OK/Cancel question, `true` means OK
    fn confirm(&mut self, title: &str, message: &str) -> io::Result<bool>;

    /// Asks for a line of text, `None` when the user gives no answer
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>>;

    fn notify(&mut self, kind: NotificationKind, title: &str, message: &str) -> io::Result<()>;

    /// Shows `url` in the user's browser
    fn open_url(&mut self, url: &Url) -> io::Result<()>;
}

/// Terminal based interaction reading answers from `input` and writing questions to `output`.
pub struct ConsoleInteraction<R, W> {
    input: R,
    output: W,
    launch_browser: bool,
}

impl ConsoleInteraction<io::StdinLock<'static>, io::Stdout> {
    /// Talks over stdin/stdout and opens URLs in the system browser
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            launch_browser: true,
        }
    }
}

impl<R: BufRead, W: Write> ConsoleInteraction<R, W> {
    /// URLs are only printed, never opened
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            launch_browser: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // None on end of input
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> UserInteraction for ConsoleInteraction<R, W> {
    fn confirm(&mut self, title: &str, message: &str) -> io::Result<bool> {
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "{}", message)?;
        write!(self.output, "[OK/cancel] ")?;
        self.output.flush()?;

        Ok(self.read_answer()?.is_some_and(|answer| {
            matches!(answer.to_lowercase().as_str(), "" | "ok" | "y" | "yes")
        }))
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", message)?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        Ok(self.read_answer()?.filter(|answer| !answer.is_empty()))
    }

    fn notify(&mut self, kind: NotificationKind, title: &str, message: &str) -> io::Result<()> {
        match kind {
            NotificationKind::Info => writeln!(self.output, "{}: {}", title, message),
            NotificationKind::Error => writeln!(self.output, "[error] {}: {}", title, message),
        }
    }

    fn open_url(&mut self, url: &Url) -> io::Result<()> {
        if self.launch_browser {
            open::that(url.as_str())
        } else {
            writeln!(self.output, "Open {}", url)
        }
    }
}
