use std::{
    cell::RefCell,
    collections::VecDeque,
    fmt::Debug,
    io::{self, BufRead, StdinLock, Stdout, Write},
    rc::Rc,
};

use crate::error::GameError;

pub trait Console: Debug {
    /// Blocks until a full line is available. The line terminator is stripped.
    fn read_line(&mut self) -> Result<String, GameError>;

    fn write_line(&mut self, line: &str) -> Result<(), GameError>;
}

pub type SharedConsole = Rc<RefCell<dyn Console>>;

fn strip_line_ending(line: &mut String) {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
}

#[derive(Debug)]
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
}

pub type StdConsole = StreamConsole<StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn shared() -> SharedConsole {
        Rc::new(RefCell::new(StreamConsole::new(io::stdin().lock(), io::stdout())))
    }
}

impl<R, W> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead + Debug, W: Write + Debug> Console for StreamConsole<R, W> {
    fn read_line(&mut self) -> Result<String, GameError> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Err(GameError::InputClosed);
        }
        // undecodable bytes become U+FFFD and are rejected later as ordinary bad input
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        strip_line_ending(&mut line);
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<(), GameError> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<String, GameError> {
        let mut line = self.input.pop_front().ok_or(GameError::InputClosed)?;
        strip_line_ending(&mut line);
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<(), GameError> {
        self.output.push(line.to_string());
        Ok(())
    }
}
