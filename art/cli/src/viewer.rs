use artspace_core::{ArtworkRecord, Gallery};
use log::debug;
use std::io::{BufRead, Write};

/// A command that is read from the viewer input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Next,
    Previous,
    Quit,
}

impl Command {
    /// Parses a single line of input.
    ///
    /// # Returns
    /// The command or `None` if the line is not a known command.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "n" | "next" => Some(Self::Next),
            "p" | "prev" | "previous" => Some(Self::Previous),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "Commands: n(ext), p(revious), q(uit)";

/// Writes a single record.
///
/// # Arguments
///
/// * `out`: The output.
/// * `record`: The record.
/// * `position`: The position of the record in its gallery.
/// * `len`: The number of records in the gallery.
pub fn render(
    out: &mut impl Write,
    record: &ArtworkRecord,
    position: usize,
    len: usize,
) -> std::io::Result<()> {
    writeln!(out, "{}", record.title())?;
    writeln!(out, "{} ({})", record.artist(), record.year())?;
    writeln!(out, "[{}]", record.image())?;
    writeln!(out, "{}/{}", position + 1, len)
}

/// The display side of a viewing session.
///
/// The viewer owns the [`Gallery`] for the duration of the session. After every navigation step it re-reads the current record and
/// renders it to the output.
pub struct Viewer<W> {
    gallery: Gallery,
    out: W,
}

impl<W: Write> Viewer<W> {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    /// * `gallery`: The gallery to show.
    /// * `out`: The output to render to.
    pub fn new(gallery: Gallery, out: W) -> Self {
        Self { gallery, out }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Consumes this instance and returns the output.
    #[allow(unused)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders the current record.
    pub fn show(&mut self) -> std::io::Result<()> {
        render(
            &mut self.out,
            self.gallery.current(),
            self.gallery.position(),
            self.gallery.len(),
        )?;
        self.out.flush()
    }

    /// Moves to the next record and renders it.
    pub fn next(&mut self) -> std::io::Result<()> {
        self.gallery.advance();
        self.show()
    }

    /// Moves to the previous record and renders it.
    pub fn previous(&mut self) -> std::io::Result<()> {
        self.gallery.retreat();
        self.show()
    }

    /// Runs the command loop until a quit command or the end of the input.
    ///
    /// The current record is rendered once before the first command is read.
    pub fn run(&mut self, input: impl BufRead) -> anyhow::Result<()> {
        self.show()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Some(Command::Next) => self.next()?,
                Some(Command::Previous) => self.previous()?,
                Some(Command::Quit) => break,
                None => {
                    debug!("Ignoring unknown command: {}", line.trim());
                    writeln!(self.out, "{}", HELP)?;
                }
            }
        }

        Ok(())
    }
}
